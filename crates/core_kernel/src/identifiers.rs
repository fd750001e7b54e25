//! Strongly-typed identifiers for case records
//!
//! Newtype wrappers keep the case-management reference and the legacy
//! (heritage system) reference from being mixed up with each other or with
//! arbitrary numbers and strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised when parsing identifiers
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("Case reference must be {expected} digits, got '{value}'")]
    InvalidCaseReference { value: String, expected: usize },

    #[error("Invalid legacy case reference: '{0}'")]
    InvalidLegacyReference(String),
}

/// Case-management reference, a 16 digit number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct CaseReference(u64);

impl CaseReference {
    /// Number of digits in a case reference
    pub const DIGITS: usize = 16;

    /// Creates a reference, validating its length
    pub fn new(value: u64) -> Result<Self, IdentifierError> {
        if value.to_string().len() != Self::DIGITS {
            return Err(IdentifierError::InvalidCaseReference {
                value: value.to_string(),
                expected: Self::DIGITS,
            });
        }
        Ok(Self(value))
    }

    /// Returns the numeric value
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Formats the reference in the dashed form shown to users (1594-9019-5611-7591)
    pub fn to_dashed(&self) -> String {
        let digits = self.0.to_string();
        digits
            .as_bytes()
            .chunks(4)
            .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
            .collect::<Vec<_>>()
            .join("-")
    }
}

impl fmt::Display for CaseReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CaseReference {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Dashed form is accepted as well
        let digits: String = s.trim().chars().filter(|c| *c != '-').collect();
        if digits.len() != Self::DIGITS || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(IdentifierError::InvalidCaseReference {
                value: s.to_string(),
                expected: Self::DIGITS,
            });
        }
        digits
            .parse::<u64>()
            .map(Self)
            .map_err(|_| IdentifierError::InvalidCaseReference {
                value: s.to_string(),
                expected: Self::DIGITS,
            })
    }
}

impl TryFrom<u64> for CaseReference {
    type Error = IdentifierError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CaseReference> for u64 {
    fn from(reference: CaseReference) -> u64 {
        reference.0
    }
}

/// Reference of the case in the heritage (offline) system, e.g. `000LR001`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LegacyCaseReference(String);

impl LegacyCaseReference {
    /// Returns the reference as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LegacyCaseReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LegacyCaseReference {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 8 || !s.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(IdentifierError::InvalidLegacyReference(s.to_string()));
        }
        Ok(Self(s.to_ascii_uppercase()))
    }
}

impl TryFrom<String> for LegacyCaseReference {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LegacyCaseReference> for String {
    fn from(reference: LegacyCaseReference) -> String {
        reference.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_reference_display() {
        let reference = CaseReference::new(1594901956117591).unwrap();
        assert_eq!(reference.to_string(), "1594901956117591");
        assert_eq!(reference.to_dashed(), "1594-9019-5611-7591");
    }

    #[test]
    fn test_case_reference_parsing() {
        let parsed: CaseReference = "1594-9019-5611-7591".parse().unwrap();
        assert_eq!(parsed.value(), 1594901956117591);
    }

    #[test]
    fn test_case_reference_rejects_short_numbers() {
        assert!(CaseReference::new(12345).is_err());
        assert!("12345".parse::<CaseReference>().is_err());
    }

    #[test]
    fn test_legacy_reference_parsing() {
        let parsed: LegacyCaseReference = "000lr001".parse().unwrap();
        assert_eq!(parsed.as_str(), "000LR001");
        assert!("000-R001".parse::<LegacyCaseReference>().is_err());
    }
}
