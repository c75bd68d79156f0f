//! Query composition from question, filters, and date range

use std::fmt;

use crate::error::{Result, ScreenError};

use super::dates::DateRange;
use super::filters::FilterSet;
use super::question::ClinicalQuestion;

/// An immutable, validated search query string
///
/// The single artifact passed across the system boundary to the search
/// endpoint. Produced only by [`QueryBuilder::build`]; identical builder
/// state always yields byte-identical query text, so callers may cache by
/// value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query(String);

impl Query {
    /// The query text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Builder combining a [`ClinicalQuestion`], a [`FilterSet`], and a
/// [`DateRange`] into one [`Query`]
///
/// Composition rules:
/// - each enabled, non-empty PICO fragment becomes a parenthesized group;
/// - each non-empty filter category becomes a parenthesized OR-expression;
/// - the date range, when both bounds are set, becomes a bounded `[pdat]` term;
/// - all of the above are joined with `AND`, and a preprint exclusion is
///   appended as a trailing `NOT` term.
///
/// # Example
///
/// ```
/// use litscreen::{ArticleType, ClinicalQuestion, FilterSet, QueryBuilder};
///
/// let query = QueryBuilder::new()
///     .question(
///         ClinicalQuestion::new()
///             .population("aortic stenosis")
///             .intervention("transcatheter valve replacement"),
///     )
///     .filters(FilterSet::new().article_type(ArticleType::ClinicalTrial))
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     query.as_str(),
///     "(aortic stenosis) AND (transcatheter valve replacement) AND (clinicaltrial[Filter])"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    question: ClinicalQuestion,
    filters: FilterSet,
    dates: DateRange,
}

impl QueryBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the clinical question
    pub fn question(mut self, question: ClinicalQuestion) -> Self {
        self.question = question;
        self
    }

    /// Set the filter selections
    pub fn filters(mut self, filters: FilterSet) -> Self {
        self.filters = filters;
        self
    }

    /// Set the publication date range
    pub fn date_range(mut self, dates: DateRange) -> Self {
        self.dates = dates;
        self
    }

    /// Build the final query string
    ///
    /// # Errors
    ///
    /// Returns `ScreenError::InvalidQuery` when no PICO fragment is both
    /// enabled and non-empty, or when the date range is half-open or
    /// malformed. Nothing has been sent externally when this fails.
    pub fn build(&self) -> Result<Query> {
        let fragments = self.question.enabled_fragments();
        if fragments.is_empty() {
            return Err(ScreenError::InvalidQuery(
                "at least one PICO fragment must be enabled and non-empty".to_string(),
            ));
        }

        let mut groups: Vec<String> = fragments
            .iter()
            .map(|fragment| format!("({fragment})"))
            .collect();

        groups.extend(self.filters.category_expressions());

        if let Some(date_term) = self.dates.to_term()? {
            groups.push(date_term);
        }

        let mut query = groups.join(" AND ");
        if self.filters.excludes_preprints() {
            query.push_str(" NOT preprints[Filter]");
        }

        Ok(Query(query))
    }
}
