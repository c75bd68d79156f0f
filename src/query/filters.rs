//! Filter categories and the [`FilterSet`] they combine into
//!
//! Sub-options within one category combine with OR (selecting both
//! `ClinicalTrial` and `Review` retrieves either); categories combine with
//! AND across each other. A category with nothing selected contributes
//! nothing to the query.

/// Text availability filters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAvailability {
    /// Records with an abstract
    Abstract,
    /// Free full text available
    FreeFullText,
    /// Any full text available
    FullText,
}

impl TextAvailability {
    pub(crate) fn to_query_string(&self) -> &'static str {
        match self {
            TextAvailability::Abstract => "hasabstract[Filter]",
            TextAvailability::FreeFullText => "fft[Filter]",
            TextAvailability::FullText => "full text[Filter]",
        }
    }
}

/// Article types that can be filtered in searches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleType {
    /// Books and documents
    BooksAndDocuments,
    /// Clinical trials
    ClinicalTrial,
    /// Meta-analyses
    MetaAnalysis,
    /// Randomized controlled trials
    RandomizedControlledTrial,
    /// Review articles
    Review,
    /// Systematic reviews
    SystematicReview,
}

impl ArticleType {
    pub(crate) fn to_query_string(&self) -> &'static str {
        match self {
            ArticleType::BooksAndDocuments => "booksdocs[Filter]",
            ArticleType::ClinicalTrial => "clinicaltrial[Filter]",
            ArticleType::MetaAnalysis => "meta-analysis[Filter]",
            ArticleType::RandomizedControlledTrial => "randomizedcontrolledtrial[Filter]",
            ArticleType::Review => "review[Filter]",
            ArticleType::SystematicReview => "systematicreview[Filter]",
        }
    }
}

/// Species filters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Species {
    Humans,
    OtherAnimals,
}

impl Species {
    pub(crate) fn to_query_string(&self) -> &'static str {
        match self {
            Species::Humans => "humans[Filter]",
            Species::OtherAnimals => "animals[Filter]",
        }
    }
}

/// Sex filters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    pub(crate) fn to_query_string(&self) -> &'static str {
        match self {
            Sex::Female => "female[Filter]",
            Sex::Male => "male[Filter]",
        }
    }
}

/// Age band filters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeBand {
    /// Birth to 18 years
    Child,
    /// 19 to 64 years
    Adult,
    /// 65 years and over
    Aged,
}

impl AgeBand {
    pub(crate) fn to_query_string(&self) -> &'static str {
        match self {
            AgeBand::Child => "child[Filter]",
            AgeBand::Adult => "adult[Filter]",
            AgeBand::Aged => "aged[Filter]",
        }
    }
}

/// Remaining filters that do not belong to a dedicated category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtherFilter {
    /// Records with associated data
    AssociatedData,
    /// English-language records
    English,
    /// Records indexed for MEDLINE
    Medline,
}

impl OtherFilter {
    pub(crate) fn to_query_string(&self) -> &'static str {
        match self {
            OtherFilter::AssociatedData => "data[Filter]",
            OtherFilter::English => "english[Filter]",
            OtherFilter::Medline => "medline[Filter]",
        }
    }
}

/// A set of named boolean filter selections, grouped by category
///
/// # Example
///
/// ```
/// use litscreen::{ArticleType, FilterSet, Species, TextAvailability};
///
/// let filters = FilterSet::new()
///     .text_availability(TextAvailability::FullText)
///     .article_type(ArticleType::ClinicalTrial)
///     .article_type(ArticleType::Review)
///     .species(Species::Humans);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    text_availability: Vec<TextAvailability>,
    article_types: Vec<ArticleType>,
    species: Vec<Species>,
    sexes: Vec<Sex>,
    age_bands: Vec<AgeBand>,
    other: Vec<OtherFilter>,
    exclude_preprints: bool,
}

fn push_unique<T: PartialEq>(selected: &mut Vec<T>, option: T) {
    if !selected.contains(&option) {
        selected.push(option);
    }
}

impl FilterSet {
    /// Create an empty filter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a text availability sub-option
    pub fn text_availability(mut self, option: TextAvailability) -> Self {
        push_unique(&mut self.text_availability, option);
        self
    }

    /// Select an article type sub-option
    pub fn article_type(mut self, option: ArticleType) -> Self {
        push_unique(&mut self.article_types, option);
        self
    }

    /// Select a species sub-option
    pub fn species(mut self, option: Species) -> Self {
        push_unique(&mut self.species, option);
        self
    }

    /// Select a sex sub-option
    pub fn sex(mut self, option: Sex) -> Self {
        push_unique(&mut self.sexes, option);
        self
    }

    /// Select an age band sub-option
    pub fn age_band(mut self, option: AgeBand) -> Self {
        push_unique(&mut self.age_bands, option);
        self
    }

    /// Select one of the remaining sub-options
    pub fn other(mut self, option: OtherFilter) -> Self {
        push_unique(&mut self.other, option);
        self
    }

    /// Exclude preprint records from the results
    pub fn exclude_preprints(mut self, exclude: bool) -> Self {
        self.exclude_preprints = exclude;
        self
    }

    /// Whether no sub-option is selected in any category
    pub fn is_empty(&self) -> bool {
        self.text_availability.is_empty()
            && self.article_types.is_empty()
            && self.species.is_empty()
            && self.sexes.is_empty()
            && self.age_bands.is_empty()
            && self.other.is_empty()
            && !self.exclude_preprints
    }

    /// One parenthesized OR-expression per non-empty category, in a fixed
    /// category order
    pub(crate) fn category_expressions(&self) -> Vec<String> {
        let mut expressions = Vec::new();
        push_category(&mut expressions, &self.text_availability, |f| {
            f.to_query_string()
        });
        push_category(&mut expressions, &self.article_types, |f| f.to_query_string());
        push_category(&mut expressions, &self.species, |f| f.to_query_string());
        push_category(&mut expressions, &self.sexes, |f| f.to_query_string());
        push_category(&mut expressions, &self.age_bands, |f| f.to_query_string());
        push_category(&mut expressions, &self.other, |f| f.to_query_string());
        expressions
    }

    pub(crate) fn excludes_preprints(&self) -> bool {
        self.exclude_preprints
    }
}

fn push_category<T>(expressions: &mut Vec<String>, selected: &[T], term: fn(&T) -> &'static str) {
    if selected.is_empty() {
        return;
    }
    let terms: Vec<&str> = selected.iter().map(term).collect();
    expressions.push(format!("({})", terms.join(" OR ")));
}
