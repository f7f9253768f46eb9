// ============================================================================
// Money Errors
// Error types for strict parsing and boundary conversions
// ============================================================================

use std::fmt;

/// Errors that can occur when constructing or converting money values.
///
/// The lenient constructors (`Money::from_text`) never return these: they
/// coerce bad input to a zero amount instead. Only the strict entry points
/// (`FromStr`, `Money::to_decimal`) surface errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoneyError {
    /// Input string did not contain a parseable amount
    InvalidInput,
    /// Amount is infinite or NaN and cannot be represented as a decimal
    NonFinite,
}

impl fmt::Display for MoneyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyError::InvalidInput => {
                write!(f, "invalid input: could not parse a monetary amount")
            },
            MoneyError::NonFinite => {
                write!(f, "non-finite amount cannot be converted to a decimal")
            },
        }
    }
}

impl std::error::Error for MoneyError {}

/// Result type alias for money operations
pub type MoneyResult<T> = Result<T, MoneyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            MoneyError::InvalidInput.to_string(),
            "invalid input: could not parse a monetary amount"
        );
        assert_eq!(
            MoneyError::NonFinite.to_string(),
            "non-finite amount cannot be converted to a decimal"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(MoneyError::InvalidInput, MoneyError::InvalidInput);
        assert_ne!(MoneyError::InvalidInput, MoneyError::NonFinite);
    }
}
