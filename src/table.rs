//! Tabular result representation handed to downstream consumers
//!
//! [`ResultTable`] is the final artifact of a retrieval: an ordered sequence
//! of fixed-schema [`RecordRow`]s, append-only while the fetcher builds it and
//! immutable once returned. Export and triage collaborators consume it as a
//! plain value; the core holds no reference to it afterwards.

use serde::{Deserialize, Serialize};

/// One normalized bibliographic record
///
/// Every field is a non-empty string: missing source data is replaced by
/// explicit fallback text during fetching, so tabular consumers never need to
/// branch on absence. The exceptions are `selection` and `annotation`, which
/// start empty and are populated by a downstream triage step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordRow {
    /// Record identifier in the external database
    pub pmid: String,
    /// Article title
    pub title: String,
    /// Abstract text, with section labels inlined as `LABEL: text`
    pub abstract_text: String,
    /// Display author list, truncated with `et al.` past the display limit
    pub authors: String,
    /// Journal title
    pub journal: String,
    /// Publication year
    pub year: String,
    /// Digital object identifier
    pub doi: String,
    /// Link to the record in the external database
    pub url: String,
    /// Triage selection flag; owned by downstream consumers
    pub selection: String,
    /// Triage annotation text; owned by downstream consumers
    pub annotation: String,
}

impl RecordRow {
    /// Field-wise equality ignoring the two downstream-only fields
    /// (`selection`, `annotation`)
    pub fn content_eq(&self, other: &Self) -> bool {
        self.pmid == other.pmid
            && self.title == other.title
            && self.abstract_text == other.abstract_text
            && self.authors == other.authors
            && self.journal == other.journal
            && self.year == other.year
            && self.doi == other.doi
            && self.url == other.url
    }
}

/// Ordered sequence of [`RecordRow`]s with insertion order equal to retrieval order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultTable {
    rows: Vec<RecordRow>,
}

impl ResultTable {
    pub(crate) fn from_rows(rows: Vec<RecordRow>) -> Self {
        Self { rows }
    }

    /// The rows in retrieval order
    pub fn rows(&self) -> &[RecordRow] {
        &self.rows
    }

    /// Number of rows in the table
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over the rows in retrieval order
    pub fn iter(&self) -> std::slice::Iter<'_, RecordRow> {
        self.rows.iter()
    }

    /// Element-wise [`RecordRow::content_eq`] over both tables
    ///
    /// Used for round-trip testing of fetcher output: two fetches of the same
    /// identifiers against identical sources compare equal here even if a
    /// downstream step has annotated one of them.
    pub fn content_eq(&self, other: &Self) -> bool {
        self.rows.len() == other.rows.len()
            && self
                .rows
                .iter()
                .zip(other.rows.iter())
                .all(|(a, b)| a.content_eq(b))
    }
}

impl IntoIterator for ResultTable {
    type Item = RecordRow;
    type IntoIter = std::vec::IntoIter<RecordRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultTable {
    type Item = &'a RecordRow;
    type IntoIter = std::slice::Iter<'a, RecordRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
