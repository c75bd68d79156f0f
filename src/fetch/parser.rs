//! EFetch XML parsing into raw per-record fields
//!
//! Extracts only the fields the row schema needs; fallback substitution for
//! missing fields happens later, in [`convert`](super::convert), so the parser
//! can report honestly what the payload contained.

use std::io::BufReader;

use quick_xml::Reader;
use quick_xml::events::Event;
use tracing::{debug, instrument};

use crate::error::{Result, ScreenError};

use super::preprocessing::strip_inline_html_tags;

/// Raw fields extracted from one `PubmedArticle` element
#[derive(Debug, Default, Clone)]
pub(crate) struct ParsedRecord {
    pub pmid: String,
    pub title: Option<String>,
    pub abstract_text: Option<String>,
    pub journal: Option<String>,
    pub journal_abbrev: Option<String>,
    pub pub_year: Option<String>,
    pub completed_year: Option<String>,
    pub authors: Vec<String>,
    pub author_count: usize,
    pub doi: Option<String>,
}

/// Parse every record in an EFetch XML response
///
/// Returns the records that carry an identifier; records without one cannot
/// be keyed and are skipped (the fetcher substitutes a placeholder row for
/// any requested identifier that has no parsed record).
#[instrument(skip(xml), fields(xml_size = xml.len()))]
pub(crate) fn parse_records_from_xml(xml: &str) -> Result<Vec<ParsedRecord>> {
    let cleaned = strip_inline_html_tags(xml);

    let mut reader = Reader::from_reader(BufReader::new(cleaned.as_bytes()));
    reader.config_mut().trim_text(true);

    let mut records: Vec<ParsedRecord> = Vec::new();
    let mut current = ParsedRecord::default();

    let mut in_article = false;
    let mut in_pmid = false;
    let mut in_article_title = false;
    let mut in_abstract_text = false;
    let mut in_journal = false;
    let mut in_journal_title = false;
    let mut in_medline_ta = false;
    let mut in_pub_date = false;
    let mut in_date_completed = false;
    let mut in_year = false;
    let mut in_author_list = false;
    let mut in_author = false;
    let mut in_last_name = false;
    let mut in_fore_name = false;
    let mut in_doi_id = false;

    let mut abstract_parts: Vec<String> = Vec::new();
    let mut current_abstract_label: Option<String> = None;
    let mut current_abstract_text = String::new();
    let mut current_author_last = String::new();
    let mut current_author_fore = String::new();

    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.name().as_ref() {
                b"PubmedArticle" => {
                    in_article = true;
                    current = ParsedRecord::default();
                    abstract_parts.clear();
                }
                // Only the citation's own PMID (the first in the record); the
                // same tag recurs under CommentsCorrections
                b"PMID" if in_article && current.pmid.is_empty() => in_pmid = true,
                b"ArticleTitle" => in_article_title = true,
                b"AbstractText" => {
                    in_abstract_text = true;
                    current_abstract_text.clear();
                    current_abstract_label = None;
                    for attr in e.attributes().flatten() {
                        if attr.key.as_ref() == b"Label" {
                            current_abstract_label =
                                Some(String::from_utf8_lossy(&attr.value).to_string());
                        }
                    }
                }
                b"Journal" => in_journal = true,
                b"Title" if in_journal => in_journal_title = true,
                b"MedlineTA" => in_medline_ta = true,
                b"PubDate" => in_pub_date = true,
                b"DateCompleted" => in_date_completed = true,
                b"Year" if in_pub_date || in_date_completed => in_year = true,
                b"AuthorList" => in_author_list = true,
                b"Author" if in_author_list => {
                    in_author = true;
                    current_author_last.clear();
                    current_author_fore.clear();
                }
                b"LastName" if in_author => in_last_name = true,
                b"ForeName" if in_author => in_fore_name = true,
                b"ArticleId" => {
                    for attr in e.attributes().flatten() {
                        if attr.key.as_ref() == b"IdType" && attr.value.as_ref() == b"doi" {
                            in_doi_id = true;
                        }
                    }
                }
                _ => {}
            },
            Ok(Event::End(ref e)) => match e.name().as_ref() {
                b"PubmedArticle" => {
                    if !abstract_parts.is_empty() {
                        current.abstract_text = Some(abstract_parts.join(" "));
                    }
                    if current.pmid.is_empty() {
                        debug!("Skipping record without an identifier");
                    } else {
                        records.push(std::mem::take(&mut current));
                    }
                    in_article = false;
                }
                b"PMID" => in_pmid = false,
                b"ArticleTitle" => in_article_title = false,
                b"AbstractText" => {
                    if !current_abstract_text.is_empty() {
                        let part = match current_abstract_label.take() {
                            Some(label) => format!("{label}: {current_abstract_text}"),
                            None => current_abstract_text.clone(),
                        };
                        abstract_parts.push(part);
                    }
                    in_abstract_text = false;
                }
                b"Journal" => in_journal = false,
                b"Title" => in_journal_title = false,
                b"MedlineTA" => in_medline_ta = false,
                b"PubDate" => in_pub_date = false,
                b"DateCompleted" => in_date_completed = false,
                b"Year" => in_year = false,
                b"AuthorList" => in_author_list = false,
                b"Author" => {
                    if in_author {
                        if !current_author_last.is_empty() {
                            let name = format!("{current_author_last} {current_author_fore}")
                                .trim()
                                .to_string();
                            current.authors.push(name);
                        }
                        if !current_author_last.is_empty() || !current_author_fore.is_empty() {
                            current.author_count += 1;
                        }
                        in_author = false;
                    }
                }
                b"LastName" => in_last_name = false,
                b"ForeName" => in_fore_name = false,
                b"ArticleId" => in_doi_id = false,
                _ => {}
            },
            Ok(Event::Text(ref e)) => {
                let text = e
                    .unescape()
                    .map_err(|err| ScreenError::XmlError(err.to_string()))?
                    .to_string();

                if in_pmid {
                    current.pmid = text;
                } else if in_article_title {
                    append_text(current.title.get_or_insert_with(String::new), &text);
                } else if in_abstract_text {
                    append_text(&mut current_abstract_text, &text);
                } else if in_journal_title {
                    current.journal = Some(text);
                } else if in_medline_ta {
                    current.journal_abbrev = Some(text);
                } else if in_year && in_pub_date {
                    current.pub_year = Some(text);
                } else if in_year && in_date_completed {
                    if current.completed_year.is_none() {
                        current.completed_year = Some(text);
                    }
                } else if in_last_name {
                    current_author_last = text;
                } else if in_fore_name {
                    current_author_fore = text;
                } else if in_doi_id && current.doi.is_none() {
                    current.doi = Some(text);
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(ScreenError::XmlError(format!(
                    "Failed to parse record XML: {e}"
                )));
            }
        }
        buf.clear();
    }

    debug!(records = records.len(), "Parsed record payload");
    Ok(records)
}

fn append_text(target: &mut String, text: &str) {
    if !target.is_empty() {
        target.push(' ');
    }
    target.push_str(text);
}
