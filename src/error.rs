use std::result;

use thiserror::Error;

use crate::common::RecordId;
use crate::table::ResultTable;

/// Error types for literature screening operations
#[derive(Error, Debug)]
pub enum ScreenError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// JSON parsing failed
    #[error("JSON parsing failed: {0}")]
    JsonError(#[from] serde_json::Error),

    /// XML parsing failed
    #[error("XML parsing failed: {0}")]
    XmlError(String),

    /// Generic API error with HTTP status code
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    /// Invalid query structure or parameters
    ///
    /// Always caller-fixable; nothing has been sent to the external service
    /// when this is returned.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// Invalid record identifier format
    #[error("invalid record identifier: {id}")]
    InvalidIdentifier { id: String },

    /// Search limit exceeded
    /// Returned when a search requests more results than the maximum retrievable limit.
    #[error("search limit exceeded: requested {requested}, maximum is {maximum}")]
    SearchLimitExceeded { requested: usize, maximum: usize },

    /// One or more record chunks failed during fetching
    ///
    /// Carries the rows recovered from the chunks that succeeded together with
    /// the identifiers of the chunks that failed, so the caller can retry just
    /// the failed subset.
    #[error("partial record fetch: {} of {} identifiers failed", .0.failed.len(), .0.requested)]
    PartialFetch(Box<PartialFetch>),
}

/// Outcome of a record fetch in which some chunks failed
#[derive(Debug)]
pub struct PartialFetch {
    /// Rows recovered from the chunks that were fetched and parsed successfully
    pub recovered: ResultTable,
    /// Identifiers belonging to chunks that failed to fetch or parse
    pub failed: Vec<RecordId>,
    /// Total number of identifiers requested
    pub requested: usize,
}

pub type Result<T> = result::Result<T, ScreenError>;
