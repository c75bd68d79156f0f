//! Structured clinical question (PICO) input

/// One free-text fragment with its inclusion toggle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Fragment {
    text: String,
    included: bool,
}

impl Fragment {
    fn enabled_text(&self) -> Option<&str> {
        let trimmed = self.text.trim();
        (self.included && !trimmed.is_empty()).then_some(trimmed)
    }
}

/// A structured clinical question in PICO form
///
/// Each fragment (Population, Intervention, Comparison, Outcome) is optional
/// and independently toggled for inclusion in the search. Setting a fragment's
/// text includes it; `include_*` toggles it back out without discarding the
/// text, mirroring how screening staff flip combinations while refining a
/// search.
///
/// # Example
///
/// ```
/// use litscreen::ClinicalQuestion;
///
/// let question = ClinicalQuestion::new()
///     .population("patients with post-operative pain")
///     .intervention("transcutaneous nerve stimulation")
///     .comparison("analgesic administration")
///     .include_comparison(false);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClinicalQuestion {
    population: Fragment,
    intervention: Fragment,
    comparison: Fragment,
    outcome: Fragment,
}

impl ClinicalQuestion {
    /// Create an empty clinical question
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the Population fragment and include it
    pub fn population<S: Into<String>>(mut self, text: S) -> Self {
        self.population = Fragment {
            text: text.into(),
            included: true,
        };
        self
    }

    /// Set the Intervention fragment and include it
    pub fn intervention<S: Into<String>>(mut self, text: S) -> Self {
        self.intervention = Fragment {
            text: text.into(),
            included: true,
        };
        self
    }

    /// Set the Comparison fragment and include it
    pub fn comparison<S: Into<String>>(mut self, text: S) -> Self {
        self.comparison = Fragment {
            text: text.into(),
            included: true,
        };
        self
    }

    /// Set the Outcome fragment and include it
    pub fn outcome<S: Into<String>>(mut self, text: S) -> Self {
        self.outcome = Fragment {
            text: text.into(),
            included: true,
        };
        self
    }

    /// Toggle inclusion of the Population fragment
    pub fn include_population(mut self, include: bool) -> Self {
        self.population.included = include;
        self
    }

    /// Toggle inclusion of the Intervention fragment
    pub fn include_intervention(mut self, include: bool) -> Self {
        self.intervention.included = include;
        self
    }

    /// Toggle inclusion of the Comparison fragment
    pub fn include_comparison(mut self, include: bool) -> Self {
        self.comparison.included = include;
        self
    }

    /// Toggle inclusion of the Outcome fragment
    pub fn include_outcome(mut self, include: bool) -> Self {
        self.outcome.included = include;
        self
    }

    /// The fragments that are both included and non-empty, in P, I, C, O order
    pub(crate) fn enabled_fragments(&self) -> Vec<&str> {
        [
            &self.population,
            &self.intervention,
            &self.comparison,
            &self.outcome,
        ]
        .into_iter()
        .filter_map(Fragment::enabled_text)
        .collect()
    }
}
