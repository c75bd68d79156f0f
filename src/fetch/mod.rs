//! Record fetching and normalization
//!
//! [`RecordFetcher`] turns an identifier set into a
//! [`ResultTable`](crate::table::ResultTable) by fetching bounded chunks
//! through a [`Transport`](crate::search::Transport) and parsing the XML
//! payloads into fixed-schema rows.

pub mod convert;
pub mod fetcher;
pub mod parser;
pub mod preprocessing;

// Re-export public types
pub use fetcher::RecordFetcher;
