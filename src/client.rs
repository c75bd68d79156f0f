//! High-level screening client
//!
//! Wires the configuration, transport, paginator, and fetcher together and
//! threads the retrieval chain as plain values: Query → identifier set →
//! result table. Each client owns its own transport; concurrent retrievals
//! need independently constructed clients and share nothing.

use tracing::instrument;

use crate::common::RecordId;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::fetch::RecordFetcher;
use crate::query::{Query, QueryBuilder};
use crate::search::{EutilsTransport, Paginator, SearchPolicy};
use crate::table::ResultTable;

/// Client for running a literature screening retrieval end to end
///
/// # Example
///
/// ```no_run
/// use litscreen::{ClinicalQuestion, ClientConfig, QueryBuilder, ScreeningClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = ScreeningClient::with_config(
///         ClientConfig::new().with_email("ra-staff@devicemaker.example"),
///     );
///
///     let builder = QueryBuilder::new().question(
///         ClinicalQuestion::new()
///             .population("aortic stenosis")
///             .intervention("transcatheter valve replacement"),
///     );
///
///     let table = client.search_and_fetch(&builder).await?;
///     for row in &table {
///         println!("{}: {}", row.pmid, row.title);
///     }
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct ScreeningClient {
    transport: EutilsTransport,
    policy: SearchPolicy,
    chunk_size: usize,
}

impl ScreeningClient {
    /// Create a client with the default configuration
    pub fn new() -> Self {
        Self::with_config(ClientConfig::new())
    }

    /// Create a client with a custom configuration
    pub fn with_config(config: ClientConfig) -> Self {
        let policy = SearchPolicy {
            page_size: config.page_size,
            max_results: config.max_results,
        };
        let chunk_size = config.chunk_size;
        Self {
            transport: EutilsTransport::new(config),
            policy,
            chunk_size,
        }
    }

    /// Collect the full identifier set for a query
    pub async fn search_identifiers(&self, query: &Query) -> Result<Vec<RecordId>> {
        Paginator::with_policy(&self.transport, self.policy)
            .collect_identifiers(query)
            .await
    }

    /// Fetch normalized records for an identifier set
    pub async fn fetch_records(&self, ids: &[RecordId]) -> Result<ResultTable> {
        RecordFetcher::with_chunk_size(&self.transport, self.chunk_size)
            .fetch(ids)
            .await
    }

    /// Run the whole retrieval chain for a query builder
    ///
    /// Builds the query (the validation gate), collects identifiers, fetches
    /// records, and returns the table. Fails before any network traffic when
    /// the builder state is invalid.
    #[instrument(skip_all)]
    pub async fn search_and_fetch(&self, builder: &QueryBuilder) -> Result<ResultTable> {
        let query = builder.build()?;
        let ids = self.search_identifiers(&query).await?;
        self.fetch_records(&ids).await
    }
}

impl Default for ScreeningClient {
    fn default() -> Self {
        Self::new()
    }
}
