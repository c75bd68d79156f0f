//! Conversion from parsed record fields to normalized rows
//!
//! Every row field ends up non-empty: missing source data is replaced with
//! explicit fallback text so tabular consumers never branch on absence. A
//! requested identifier with no parsed record at all becomes a placeholder
//! row rather than being dropped.

use crate::common::RecordId;
use crate::table::RecordRow;

use super::parser::ParsedRecord;

/// Authors shown per row before truncating with `et al.`
pub(crate) const AUTHOR_DISPLAY_LIMIT: usize = 5;

/// Title length cap in characters
pub(crate) const TITLE_MAX_CHARS: usize = 500;

/// Abstract length cap in characters
pub(crate) const ABSTRACT_MAX_CHARS: usize = 2000;

/// Build the row for one requested identifier
///
/// `record` is the parsed payload for that identifier, when the fetch
/// returned one; `None` produces a placeholder row.
pub(crate) fn build_row(id: &RecordId, record: Option<&ParsedRecord>) -> RecordRow {
    let pmid = id.to_string();
    let url = format!("https://pubmed.ncbi.nlm.nih.gov/{pmid}/");

    let Some(record) = record else {
        return RecordRow {
            title: format!("No title available (PMID: {pmid})"),
            abstract_text: "No abstract available".to_string(),
            authors: "No authors listed".to_string(),
            journal: "Unknown journal".to_string(),
            year: "Unknown".to_string(),
            doi: "Not available".to_string(),
            pmid,
            url,
            selection: String::new(),
            annotation: String::new(),
        };
    };

    let title = match record.title.as_deref().map(str::trim) {
        Some(title) if !title.is_empty() => truncate_with_ellipsis(title, TITLE_MAX_CHARS),
        _ => format!("No title available (PMID: {pmid})"),
    };

    let abstract_text = match record.abstract_text.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => truncate_with_ellipsis(text, ABSTRACT_MAX_CHARS),
        _ => "No abstract available".to_string(),
    };

    let journal = record
        .journal
        .as_deref()
        .or(record.journal_abbrev.as_deref())
        .map(str::trim)
        .filter(|j| !j.is_empty())
        .unwrap_or("Unknown journal")
        .to_string();

    // Publication year with the completion date as the secondary source
    let year = record
        .pub_year
        .as_deref()
        .or(record.completed_year.as_deref())
        .map(str::trim)
        .filter(|y| !y.is_empty())
        .unwrap_or("Unknown")
        .to_string();

    let authors = format_authors(&record.authors, record.author_count);

    let doi = record
        .doi
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .unwrap_or("Not available")
        .to_string();

    RecordRow {
        pmid,
        title,
        abstract_text,
        authors,
        journal,
        year,
        doi,
        url,
        selection: String::new(),
        annotation: String::new(),
    }
}

/// Join the first [`AUTHOR_DISPLAY_LIMIT`] author names, marking truncation
/// explicitly instead of dropping the tail silently
fn format_authors(authors: &[String], author_count: usize) -> String {
    if authors.is_empty() {
        return "No authors listed".to_string();
    }

    let mut display = authors
        .iter()
        .take(AUTHOR_DISPLAY_LIMIT)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    if author_count.max(authors.len()) > AUTHOR_DISPLAY_LIMIT {
        display.push_str(" et al.");
    }
    display
}

fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(max_chars).collect();
    truncated.push_str("...");
    truncated
}
