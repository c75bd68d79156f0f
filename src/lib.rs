//! # litscreen
//!
//! The search and retrieval core of a clinical-literature screening workflow
//! for medical-device regulatory submissions. It turns a structured clinical
//! question (PICO fragments plus boolean filters) into a validated search
//! query, collects the matching record identifiers through paged requests
//! against the NCBI E-utilities, and fetches the full records into a
//! fixed-schema table for downstream triage and export tooling.
//!
//! ## Features
//!
//! - **Query construction**: deterministic boolean query text from PICO
//!   fragments, filter categories, and date ranges, validated in one place
//! - **Paged identifier collection**: sequential offset paging with a drift
//!   guard for the live corpus, defensive de-duplication, and a hard cap
//! - **Chunked record fetching**: bounded batches, per-field fallbacks so no
//!   row ever carries an empty field, explicit partial-failure accounting
//! - **Injected transport**: the network boundary is a trait, so every stage
//!   is testable against deterministic fakes
//!
//! ## Quick Start
//!
//! ```no_run
//! use litscreen::{ArticleType, ClinicalQuestion, DateRange, FilterSet};
//! use litscreen::{QueryBuilder, ScreeningClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ScreeningClient::new();
//!
//!     let builder = QueryBuilder::new()
//!         .question(
//!             ClinicalQuestion::new()
//!                 .population("patients with post-operative pain")
//!                 .intervention("transcutaneous nerve stimulation"),
//!         )
//!         .filters(
//!             FilterSet::new()
//!                 .article_type(ArticleType::ClinicalTrial)
//!                 .article_type(ArticleType::SystematicReview),
//!         )
//!         .date_range(DateRange::between("2020/01/01", "2024/12/31"));
//!
//!     let table = client.search_and_fetch(&builder).await?;
//!     for row in &table {
//!         println!("{} ({}): {}", row.pmid, row.year, row.title);
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod common;
pub mod config;
pub mod error;
pub mod fetch;
pub mod query;
pub mod rate_limit;
pub mod search;
pub mod table;

// Re-export main types for convenience
pub use client::ScreeningClient;
pub use common::RecordId;
pub use config::ClientConfig;
pub use error::{PartialFetch, Result, ScreenError};
pub use fetch::RecordFetcher;
pub use query::{
    AgeBand, ArticleType, ClinicalQuestion, DateRange, FilterSet, OtherFilter, Query, QueryBuilder,
    Sex, Species, TextAvailability,
};
pub use rate_limit::RateLimiter;
pub use search::{EutilsTransport, Paginator, SearchPage, SearchPolicy, Transport};
pub use table::{RecordRow, ResultTable};
