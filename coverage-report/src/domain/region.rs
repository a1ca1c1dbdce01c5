//! Region code types.

use std::fmt;

use serde::Serialize;

/// Error returned when parsing an invalid region code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid region code {input:?}: {reason}")]
pub struct InvalidRegion {
    input: String,
    reason: &'static str,
}

/// An administrative region code such as `AL` or `ON`.
///
/// Region codes are normalized to uppercase on parse so that a traveler
/// writing `al` matches an inventory keyed by `AL`. Any `RegionCode` value
/// is non-empty and free of whitespace and field separators.
///
/// # Examples
///
/// ```
/// use coverage_report::domain::RegionCode;
///
/// let al = RegionCode::parse("al").unwrap();
/// assert_eq!(al.as_str(), "AL");
///
/// assert!(RegionCode::parse("").is_err());
/// assert!(RegionCode::parse("A L").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RegionCode(String);

impl RegionCode {
    /// Parse a region code, trimming surrounding whitespace and uppercasing.
    pub fn parse(s: &str) -> Result<Self, InvalidRegion> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(InvalidRegion {
                input: s.to_string(),
                reason: "must not be empty",
            });
        }

        if trimmed.chars().any(|c| c.is_whitespace() || c == ';') {
            return Err(InvalidRegion {
                input: s.to_string(),
                reason: "must not contain whitespace or ';'",
            });
        }

        Ok(RegionCode(trimmed.to_uppercase()))
    }

    /// Returns the region code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RegionCode({})", self.0)
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
