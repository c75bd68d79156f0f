//! Chunked record fetching
//!
//! Identifiers are partitioned into fixed-size chunks to respect the
//! endpoint's batch-size ceiling, and each chunk is fetched and parsed
//! independently. Unlike identifier collection, partial success is
//! acceptable here: chunk failures are typically transient and isolable, so
//! they are accounted for explicitly instead of discarding the rest.

use std::collections::HashMap;

use tracing::{info, instrument, warn};

use crate::common::RecordId;
use crate::config::DEFAULT_CHUNK_SIZE;
use crate::error::{PartialFetch, Result, ScreenError};
use crate::table::{RecordRow, ResultTable};

use super::convert::build_row;
use super::parser::parse_records_from_xml;
use crate::search::transport::Transport;

/// Fetches full records for an identifier set through a [`Transport`]
///
/// Produces one row per requested identifier, in request order. Rows for
/// identifiers whose payload is missing or unparseable per-record are
/// placeholders; whole-chunk failures are collected into a
/// [`ScreenError::PartialFetch`] carrying both the recovered rows and the
/// failed identifiers, so the caller can retry just the failed subset.
pub struct RecordFetcher<'a, T> {
    transport: &'a T,
    chunk_size: usize,
}

impl<'a, T: Transport> RecordFetcher<'a, T> {
    /// Create a fetcher with the default chunk size
    pub fn new(transport: &'a T) -> Self {
        Self {
            transport,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Create a fetcher with an explicit chunk size
    pub fn with_chunk_size(transport: &'a T, chunk_size: usize) -> Self {
        Self {
            transport,
            chunk_size: chunk_size.max(1),
        }
    }

    /// Fetch and normalize every identifier into a [`ResultTable`]
    #[instrument(skip_all, fields(ids = ids.len(), chunk_size = self.chunk_size))]
    pub async fn fetch(&self, ids: &[RecordId]) -> Result<ResultTable> {
        if ids.is_empty() {
            return Ok(ResultTable::default());
        }

        let mut rows: Vec<RecordRow> = Vec::with_capacity(ids.len());
        let mut failed: Vec<RecordId> = Vec::new();

        for chunk in ids.chunks(self.chunk_size) {
            match self.fetch_chunk(chunk).await {
                Ok(mut chunk_rows) => {
                    info!(chunk = chunk.len(), "Chunk fetched");
                    rows.append(&mut chunk_rows);
                }
                Err(e) => {
                    warn!(chunk = chunk.len(), error = %e, "Chunk failed, continuing");
                    failed.extend_from_slice(chunk);
                }
            }
        }

        let recovered = ResultTable::from_rows(rows);
        if failed.is_empty() {
            Ok(recovered)
        } else {
            Err(ScreenError::PartialFetch(Box::new(PartialFetch {
                recovered,
                failed,
                requested: ids.len(),
            })))
        }
    }

    async fn fetch_chunk(&self, chunk: &[RecordId]) -> Result<Vec<RecordRow>> {
        let xml = self.transport.fetch_batch(chunk).await?;
        let parsed = parse_records_from_xml(&xml)?;

        let by_pmid: HashMap<&str, _> = parsed
            .iter()
            .map(|record| (record.pmid.as_str(), record))
            .collect();

        Ok(chunk
            .iter()
            .map(|id| build_row(id, by_pmid.get(id.to_string().as_str()).copied()))
            .collect())
    }
}
