//! Publication date range input
//!
//! Bounds use the external `YYYY/MM/DD` format, with `YYYY` and `YYYY/MM`
//! precision also accepted. A range is only valid with both bounds present;
//! validation happens in [`QueryBuilder::build`](super::QueryBuilder::build),
//! which is the single validation gate for producer input.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Result, ScreenError};

/// An optional pair of calendar date bounds for publication date filtering
///
/// # Example
///
/// ```
/// use litscreen::DateRange;
///
/// let range = DateRange::between("2020/01/01", "2024/12/31");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRange {
    start: Option<String>,
    end: Option<String>,
}

impl DateRange {
    /// Create a range with no bounds set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a range with both bounds set
    pub fn between<S: Into<String>, E: Into<String>>(start: S, end: E) -> Self {
        Self {
            start: Some(start.into()),
            end: Some(end.into()),
        }
    }

    /// Set the start bound
    pub fn start<S: Into<String>>(mut self, start: S) -> Self {
        self.start = Some(start.into());
        self
    }

    /// Set the end bound
    pub fn end<S: Into<String>>(mut self, end: S) -> Self {
        self.end = Some(end.into());
        self
    }

    /// Whether neither bound is set
    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Render the bounded-date query term, or `None` when no bound is set
    ///
    /// # Errors
    ///
    /// Returns `ScreenError::InvalidQuery` when exactly one bound is set
    /// (half-open ranges are invalid) or when a bound does not match the
    /// `YYYY[/MM[/DD]]` format.
    pub(crate) fn to_term(&self) -> Result<Option<String>> {
        match (&self.start, &self.end) {
            (None, None) => Ok(None),
            (Some(start), Some(end)) => {
                validate_date(start)?;
                validate_date(end)?;
                Ok(Some(format!("{start}:{end}[pdat]")))
            }
            _ => Err(ScreenError::InvalidQuery(
                "date range requires both a start and an end bound".to_string(),
            )),
        }
    }
}

fn validate_date(date: &str) -> Result<()> {
    static DATE_FORMAT: OnceLock<Regex> = OnceLock::new();
    let re = DATE_FORMAT.get_or_init(|| {
        Regex::new(r"^\d{4}(/\d{2}(/\d{2})?)?$").expect("Failed to compile date format regex")
    });

    if re.is_match(date) {
        Ok(())
    } else {
        Err(ScreenError::InvalidQuery(format!(
            "invalid date bound '{date}': expected YYYY, YYYY/MM, or YYYY/MM/DD"
        )))
    }
}
