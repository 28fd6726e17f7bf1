use precis::infrastructure::text_processing::sanitize_extracted_text;

#[test]
fn given_word_hyphenated_across_lines_when_sanitizing_then_rejoined() {
    assert_eq!(
        sanitize_extracted_text("summari-\nzation works"),
        "summarization works"
    );
}

#[test]
fn given_runs_of_blank_lines_when_sanitizing_then_single_blank_line_between_paragraphs() {
    assert_eq!(
        sanitize_extracted_text("first   line\nsecond\n\n\n\nnext  paragraph\n"),
        "first line\nsecond\n\nnext paragraph"
    );
}

#[test]
fn given_control_characters_and_ligatures_when_sanitizing_then_removed_and_normalized() {
    assert_eq!(sanitize_extracted_text("of\u{FB01}ce\u{0007} hours"), "office hours");
}

#[test]
fn given_whitespace_only_when_sanitizing_then_empty() {
    assert_eq!(sanitize_extracted_text(" \n\t\n "), "");
}
