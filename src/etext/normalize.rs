/// Canonicalize line endings and split an etext into trimmed paragraphs.
///
/// Runs of three or more newlines leave empty strings in the result. They
/// keep their slot so paragraph indices line up with the document, and the
/// emitter drops them later.
pub fn paragraphs(text: &str) -> Vec<String> {
    let text = text.replace("\r\n", "\n");

    text.split("\n\n")
        .map(|p| trim_ascii_space(p).to_string())
        .collect()
}

/// Strip ASCII whitespace only. Non-breaking and ideographic spaces are
/// content in Gutenberg texts and stay put.
fn trim_ascii_space(paragraph: &str) -> &str {
    paragraph.trim_matches(|c: char| matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c'))
}
