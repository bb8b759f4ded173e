//! Input validation for the location field.

use std::fmt;

use crate::error::ValidationError;

/// Returns `true` if `raw` has any content once surrounding whitespace is removed.
pub fn is_valid(raw: &str) -> bool {
    !raw.trim().is_empty()
}

/// A trimmed, non-empty location string.
///
/// The only way to obtain one is [`LocationQuery::parse`], so an empty
/// query can never be turned into a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationQuery(String);

impl LocationQuery {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if !is_valid(raw) {
            return Err(ValidationError::EmptyQuery);
        }

        Ok(Self(raw.trim().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_is_rejected() {
        for raw in ["", " ", "\t", "\n", "  \t \r\n "] {
            assert!(!is_valid(raw), "{raw:?} should be rejected");
            assert_eq!(LocationQuery::parse(raw), Err(ValidationError::EmptyQuery));
        }
    }

    #[test]
    fn non_blank_input_is_accepted_and_trimmed() {
        for raw in ["Paris", "  Paris ", "x", "\tNew York\n"] {
            assert!(is_valid(raw));
        }

        let query = LocationQuery::parse("  New York \n").expect("query should parse");
        assert_eq!(query.as_str(), "New York");
        assert_eq!(query.to_string(), "New York");
    }
}
