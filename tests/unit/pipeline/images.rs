use super::*;

#[test]
fn plain_names_keep_their_spelling() {
    assert_eq!(output_file_name("阿尔法", "no_name"), "阿尔法.png");
    assert_eq!(output_file_name(" Beta ", "no_name"), "Beta.png");
}

#[test]
fn separators_and_reserved_characters_are_replaced() {
    assert_eq!(output_file_name("a/b\\c", "no_name"), "a_b_c.png");
    assert_eq!(output_file_name("what?*", "no_name"), "what__.png");
    assert_eq!(output_file_name("tab\there", "no_name"), "tab_here.png");
}

#[test]
fn dot_names_fall_back() {
    assert_eq!(output_file_name("..", "no_name"), "no_name.png");
    assert_eq!(output_file_name("", "anon"), "anon.png");
}
