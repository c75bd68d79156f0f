//! Paged identifier collection against a live corpus
//!
//! Pages are requested strictly sequentially in increasing offset order; the
//! endpoint does not guarantee stable paging under concurrent offsets against
//! a mutating corpus. The total reported on the first page is authoritative
//! for termination but never re-read on later pages, because it can drift
//! while a run is in flight; an empty page is the unconditional stop signal
//! guarding against that drift.

use std::collections::HashSet;

use tracing::{debug, info, instrument};

use crate::common::RecordId;
use crate::config::MAX_RETRIEVABLE;
use crate::error::{Result, ScreenError};
use crate::query::Query;

use super::transport::Transport;

/// Page size and result cap for one identifier collection run
#[derive(Debug, Clone, Copy)]
pub struct SearchPolicy {
    /// Identifiers requested per page
    pub page_size: usize,
    /// Hard cap on accumulated identifiers
    pub max_results: usize,
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            page_size: crate::config::DEFAULT_PAGE_SIZE,
            max_results: MAX_RETRIEVABLE,
        }
    }
}

/// Collects the identifier set for one query via sequential paged requests
///
/// Termination, first condition to trigger wins:
/// - cumulative count reaches the total reported on the first page,
/// - cumulative count reaches the policy cap,
/// - a page returns an empty batch.
///
/// Any transport failure aborts the whole run and discards the partial
/// identifier set: a truncated list would create false confidence in
/// completeness downstream. The caller may retry the entire operation; no
/// retry happens here.
pub struct Paginator<'a, T> {
    transport: &'a T,
    policy: SearchPolicy,
}

impl<'a, T: Transport> Paginator<'a, T> {
    /// Create a paginator with the default policy
    pub fn new(transport: &'a T) -> Self {
        Self {
            transport,
            policy: SearchPolicy::default(),
        }
    }

    /// Create a paginator with an explicit policy
    pub fn with_policy(transport: &'a T, policy: SearchPolicy) -> Self {
        Self { transport, policy }
    }

    /// Collect all identifiers for `query`, in arrival order, de-duplicated
    #[instrument(skip_all, fields(query = %query, page_size = self.policy.page_size))]
    pub async fn collect_identifiers(&self, query: &Query) -> Result<Vec<RecordId>> {
        if self.policy.max_results > MAX_RETRIEVABLE {
            return Err(ScreenError::SearchLimitExceeded {
                requested: self.policy.max_results,
                maximum: MAX_RETRIEVABLE,
            });
        }

        let mut collected: Vec<RecordId> = Vec::new();
        let mut seen: HashSet<RecordId> = HashSet::new();
        let mut authoritative_total: Option<usize> = None;
        let mut offset = 0;

        loop {
            debug!(offset, "Requesting search page");
            let page = self
                .transport
                .search_page(query, offset, self.policy.page_size)
                .await?;

            // The first page's total is authoritative for the whole run
            let total = *authoritative_total.get_or_insert(page.total);

            if page.ids.is_empty() {
                debug!(offset, "Empty page, collection exhausted");
                break;
            }

            offset += page.ids.len();
            for id in page.ids {
                // Defensive de-duplication: the endpoint does not guarantee
                // disjoint pages while the corpus mutates underneath
                if seen.insert(id.clone()) {
                    collected.push(id);
                }
            }

            if collected.len() >= total {
                debug!(collected = collected.len(), total, "Reported total reached");
                break;
            }
            if collected.len() >= self.policy.max_results {
                debug!(
                    collected = collected.len(),
                    cap = self.policy.max_results,
                    "Result cap reached"
                );
                break;
            }
        }

        collected.truncate(self.policy.max_results);
        info!(collected = collected.len(), "Identifier collection complete");
        Ok(collected)
    }
}
