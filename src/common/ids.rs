//! Validated record identifiers
//!
//! Identifiers returned by the literature database are numeric. Validating them
//! up front keeps malformed input from ever reaching a request URL.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScreenError};

/// A validated bibliographic record identifier (PMID)
///
/// Identifiers are positive integers. This type ensures the value is valid and
/// provides conversions between string and numeric representations.
///
/// # Examples
///
/// ```
/// use litscreen::RecordId;
///
/// let id = RecordId::parse("31978945").unwrap();
/// assert_eq!(id.as_u32(), 31978945);
/// assert_eq!(id.to_string(), "31978945");
///
/// // Whitespace is cleaned automatically
/// let id = RecordId::parse("  31978945  ").unwrap();
/// assert_eq!(id.as_u32(), 31978945);
///
/// // Invalid cases
/// assert!(RecordId::parse("").is_err());
/// assert!(RecordId::parse("abc").is_err());
/// assert!(RecordId::parse("0").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId {
    value: u32,
}

impl RecordId {
    /// Parse a record identifier from a string
    ///
    /// The input is trimmed of surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `ScreenError::InvalidIdentifier` if the string is empty after
    /// trimming, contains non-numeric characters, or parses to zero.
    pub fn parse(s: &str) -> Result<Self> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ScreenError::InvalidIdentifier { id: s.to_string() });
        }

        let value = trimmed
            .parse::<u32>()
            .map_err(|_| ScreenError::InvalidIdentifier { id: s.to_string() })?;

        if value == 0 {
            return Err(ScreenError::InvalidIdentifier { id: s.to_string() });
        }

        Ok(Self { value })
    }

    /// Get the identifier as a u32
    pub fn as_u32(&self) -> u32 {
        self.value
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl FromStr for RecordId {
    type Err = ScreenError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
