use super::*;

const PAGE: &str = r#"<!doctype html>
<html><body>
  <div class="divsort hero"><a href="/xytx/A" title="Alpha">Alpha</a><!-- note --></div>
  <div class="divsort"><span>One <b>two</b></span></div>
  <p class="divsorted">not a match</p>
</body></html>"#;

#[test]
fn class_lookup_matches_whole_tokens_only() {
    let doc = Document::parse(PAGE);
    let hits = doc.find_all_by_class(doc.root(), "divsort");
    assert_eq!(hits.len(), 2);
    assert!(doc.element(hits[0]).unwrap().has_class("hero"));
}

#[test]
fn descendants_follow_document_order() {
    let doc = Document::parse(PAGE);
    let tags: Vec<_> = doc
        .descendant_elements(doc.root())
        .map(|(_, el)| el.tag_name.clone())
        .collect();
    let body_at = tags.iter().position(|t| t == "body").unwrap();
    assert_eq!(
        &tags[body_at + 1..],
        &["div", "a", "div", "span", "b", "p"]
    );
}

#[test]
fn attributes_and_text_are_preserved() {
    let doc = Document::parse(PAGE);
    let a = doc.find_first_by_tag(doc.root(), "a").unwrap();
    let el = doc.element(a).unwrap();
    assert_eq!(el.attr("href"), Some("/xytx/A"));
    assert_eq!(el.attr("TITLE"), Some("Alpha"));
    assert_eq!(el.attr("missing"), None);

    let span = doc.find_first_by_tag(doc.root(), "span").unwrap();
    assert_eq!(doc.text(span), "One two");
}

#[test]
fn comments_are_dropped_and_parents_link_back() {
    let doc = Document::parse(PAGE);
    let a = doc.find_first_by_tag(doc.root(), "a").unwrap();
    let container = doc.parent(a).unwrap();
    assert_eq!(doc.children(container), &[a]);
    assert!(doc.element(container).unwrap().is("div"));
}

#[test]
fn scoped_search_stays_inside_scope() {
    let doc = Document::parse(PAGE);
    let second = doc.find_all_by_class(doc.root(), "divsort")[1];
    assert!(doc.find_first_by_tag(second, "a").is_none());
    assert!(doc.find_first_by_tag(second, "b").is_some());
}
