//! XML preprocessing for the record parser

use tracing::debug;

/// Strip inline HTML-like formatting tags from XML content
///
/// Handles tags like `<i>`, `<sup>`, `<sub>`, `<b>`, `<u>` that appear inside
/// `AbstractText` and `ArticleTitle` and would otherwise split the text into
/// fragments during parsing.
pub(crate) fn strip_inline_html_tags(xml: &str) -> String {
    use std::sync::OnceLock;

    use regex::Regex;

    static INLINE_TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = INLINE_TAG_REGEX.get_or_init(|| {
        Regex::new(r"</?(?:i|b|u|sup|sub|em|strong|italic|bold)>")
            .expect("Failed to compile inline tag regex")
    });

    let cleaned = re.replace_all(xml, "");

    if cleaned.len() != xml.len() {
        debug!(
            original = xml.len(),
            cleaned = cleaned.len(),
            "Stripped inline HTML tags"
        );
    }

    cleaned.into_owned()
}
