use std::collections::HashSet;

use url::Url;

use crate::{
    composition::model::{CharacterRecord, InfoTable},
    extract::layers::CONTAINER_CLASS,
    foundation::config::SpriteConfig,
    foundation::error::{SpriteError, SpriteResult},
    markup::dom::{Document, NodeId},
};

const TABLE_CLASS: &str = "wikitable";

/// Detail-link discovery on the gallery page and attribute-table scraping on detail pages.
#[derive(Clone, Debug)]
pub struct MetadataExtractor {
    wiki_base: Url,
    detail_prefix: String,
    table_marker: String,
    unnamed: String,
}

impl MetadataExtractor {
    pub fn new(config: &SpriteConfig) -> SpriteResult<Self> {
        Ok(Self {
            wiki_base: config.wiki_base_url()?,
            detail_prefix: config.detail_prefix.clone(),
            table_marker: config.table_marker.clone(),
            unnamed: config.unnamed_sentinel.clone(),
        })
    }

    /// Absolute detail-page URLs in first-seen order, duplicates removed.
    pub fn detail_urls(&self, page: &str) -> Vec<String> {
        let doc = Document::parse(page);
        let base = self.wiki_base.as_str().trim_end_matches('/');

        let mut seen = HashSet::new();
        let mut urls = Vec::new();
        for container in doc.find_all_by_class(doc.root(), CONTAINER_CLASS) {
            for a in doc.find_all_by_tag(container, "a") {
                let Some(href) = doc.element(a).and_then(|el| el.attr("href")) else {
                    continue;
                };
                if !href.starts_with(&self.detail_prefix) {
                    continue;
                }
                let url = format!("{base}{href}");
                if seen.insert(url.clone()) {
                    urls.push(url);
                }
            }
        }
        urls
    }

    /// Scrape one detail page.
    ///
    /// Fails with [`SpriteError::Markup`] when no `wikitable` starts with the marker header.
    pub fn record(&self, url: &str, page: &str) -> SpriteResult<CharacterRecord> {
        let doc = Document::parse(page);
        let root = doc.root();

        let name = doc
            .find_first_by_tag(root, "h1")
            .map(|h1| doc.text(h1).trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| self.unnamed.clone());

        let table = doc
            .find_all_by_class(root, TABLE_CLASS)
            .into_iter()
            .filter(|&t| doc.element(t).is_some_and(|el| el.is("table")))
            .find(|&t| self.is_attribute_table(&doc, t))
            .ok_or_else(|| {
                SpriteError::markup(format!(
                    "no table headed '{}' on {url}",
                    self.table_marker
                ))
            })?;

        let mut info = InfoTable::new();
        for tr in doc.find_all_by_tag(table, "tr") {
            let key = cells_text(&doc, tr, "th");
            if key.is_empty() {
                continue;
            }
            info.insert(key, cells_text(&doc, tr, "td"));
        }

        Ok(CharacterRecord {
            name,
            url: url.to_string(),
            info,
        })
    }

    fn is_attribute_table(&self, doc: &Document, table: NodeId) -> bool {
        doc.find_first_by_tag(table, "tr")
            .and_then(|tr| doc.find_first_by_tag(tr, "th"))
            .is_some_and(|th| doc.text(th).trim() == self.table_marker)
    }
}

fn cells_text(doc: &Document, row: NodeId, tag: &str) -> String {
    doc.find_all_by_tag(row, tag)
        .into_iter()
        .map(|cell| doc.text(cell))
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
#[path = "../../tests/unit/extract/metadata.rs"]
mod tests;
