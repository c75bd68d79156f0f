//! Wire types for the ESearch JSON envelope

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ESearchResult {
    pub esearchresult: ESearchData,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ESearchData {
    /// NCBI sometimes returns 200 OK with an ERROR field instead of a failure status
    #[serde(default, rename = "ERROR")]
    pub error: Option<String>,
    /// Total result count; arrives as a JSON string
    #[serde(default)]
    pub count: Option<String>,
    #[serde(default)]
    pub retmax: Option<String>,
    #[serde(default)]
    pub retstart: Option<String>,
    #[serde(default)]
    pub idlist: Vec<String>,
}
