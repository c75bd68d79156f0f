//! Query construction for the literature search endpoint
//!
//! A search is assembled from three inputs: a [`ClinicalQuestion`] (the PICO
//! fragments), a [`FilterSet`] (named boolean sub-options grouped into
//! categories), and an optional [`DateRange`]. [`QueryBuilder`] combines them
//! into a single immutable [`Query`] string and is the sole validation gate
//! for all three — producers upstream (UI, CLI) hand over plain text and
//! flags unchecked.

pub mod builder;
pub mod dates;
pub mod filters;
pub mod question;

// Re-export public types
pub use builder::{Query, QueryBuilder};
pub use dates::DateRange;
pub use filters::{AgeBand, ArticleType, FilterSet, OtherFilter, Sex, Species, TextAvailability};
pub use question::ClinicalQuestion;
