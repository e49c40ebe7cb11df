//! Error types for fixed-point operations.
//!
//! Overflow is never an error in this crate: results that do not fit the
//! 16-bit range saturate silently. The errors below cover the minority of
//! calls that hit a genuine mathematical restriction (domain or pole), plus
//! malformed format descriptors and mismatched batch inputs.
//!
//! Domain and range errors carry the sentinel value an embedded caller would
//! have received alongside an `errno` flag, so code that only wants "a number
//! no matter what" can recover it with [`FixedError::fallback`] or
//! [`Fallback::or_fallback`].

use std::fmt;

/// Errors that can occur during fixed-point operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixedError {
    /// The argument lies outside the mathematical domain of the function.
    DomainError {
        /// Name of the operation that rejected its input.
        operation: &'static str,
        /// Sentinel result defined for this failure.
        fallback: i16,
    },
    /// The result is a pole or an intermediate could not be represented.
    RangeError {
        /// Name of the operation that failed.
        operation: &'static str,
        /// Sentinel result defined for this failure.
        fallback: i16,
    },
    /// A fractional-bit count outside `0..=15` was supplied.
    FormatError {
        /// The rejected fractional-bit count.
        frac: u8,
        /// Human-readable error message.
        message: String,
    },
    /// Input validation error.
    ValidationError {
        /// Human-readable error message.
        message: String,
    },
}

impl FixedError {
    /// Returns the sentinel value associated with a domain or range error.
    ///
    /// Format and validation errors have no numeric meaning and yield `0`.
    pub fn fallback(&self) -> i16 {
        match self {
            FixedError::DomainError { fallback, .. } | FixedError::RangeError { fallback, .. } => {
                *fallback
            }
            FixedError::FormatError { .. } | FixedError::ValidationError { .. } => 0,
        }
    }

    /// Name of the failing operation, when the error came from a math routine.
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            FixedError::DomainError { operation, .. } | FixedError::RangeError { operation, .. } => {
                Some(*operation)
            }
            _ => None,
        }
    }
}

impl fmt::Display for FixedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixedError::DomainError {
                operation,
                fallback,
            } => write!(
                f,
                "Domain error in {}: argument outside the function domain (fallback {})",
                operation, fallback
            ),
            FixedError::RangeError {
                operation,
                fallback,
            } => write!(
                f,
                "Range error in {}: result not representable (fallback {})",
                operation, fallback
            ),
            FixedError::FormatError { frac, message } => {
                write!(f, "Invalid Q-format: {} (fractional bits: {})", message, frac)
            }
            FixedError::ValidationError { message } => {
                write!(f, "Validation error: {}", message)
            }
        }
    }
}

impl std::error::Error for FixedError {}

/// Result type alias for fixed-point operations.
pub type Result<T> = std::result::Result<T, FixedError>;

/// Collapses a fixed-point result to its value or the error's sentinel.
///
/// This mirrors the embedded convention of always getting a number back and
/// checking an error flag separately.
pub trait Fallback {
    /// Returns the computed value, or the sentinel carried by the error.
    fn or_fallback(self) -> i16;
}

impl Fallback for Result<i16> {
    #[inline]
    fn or_fallback(self) -> i16 {
        self.unwrap_or_else(|e| e.fallback())
    }
}

/// Creates a domain error.
pub fn domain_error(operation: &'static str, fallback: i16) -> FixedError {
    log::debug!("{operation}: domain error, returning {fallback}");
    FixedError::DomainError {
        operation,
        fallback,
    }
}

/// Creates a range error.
pub fn range_error(operation: &'static str, fallback: i16) -> FixedError {
    log::debug!("{operation}: range error, returning {fallback}");
    FixedError::RangeError {
        operation,
        fallback,
    }
}

/// Creates a format error.
pub fn format_error(frac: u8, message: impl Into<String>) -> FixedError {
    FixedError::FormatError {
        frac,
        message: message.into(),
    }
}

/// Creates a validation error.
pub fn validation_error(message: impl Into<String>) -> FixedError {
    FixedError::ValidationError {
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_display() {
        let error = domain_error("sqrt", 0);
        let display = format!("{}", error);
        assert!(display.contains("Domain error"));
        assert!(display.contains("sqrt"));
        assert!(display.contains("fallback 0"));
    }

    #[test]
    fn test_range_error_display() {
        let error = range_error("ln", i16::MIN);
        let display = format!("{}", error);
        assert!(display.contains("Range error in ln"));
        assert!(display.contains("-32768"));
    }

    #[test]
    fn test_format_error_display() {
        let error = format_error(16, "fractional bits must be at most 15");
        let display = format!("{}", error);
        assert!(display.contains("Invalid Q-format"));
        assert!(display.contains("fractional bits: 16"));
        assert!(display.contains("at most 15"));
    }

    #[test]
    fn test_validation_error_display() {
        let error = validation_error("input slices must have same length");
        let display = format!("{}", error);
        assert!(display.contains("Validation error"));
        assert!(display.contains("input slices must have same length"));
    }

    #[test]
    fn test_fallback_values() {
        assert_eq!(domain_error("tan", i16::MAX).fallback(), i16::MAX);
        assert_eq!(range_error("div", i16::MIN).fallback(), i16::MIN);
        assert_eq!(format_error(20, "bad").fallback(), 0);
        assert_eq!(domain_error("pow", 0).operation(), Some("pow"));
        assert_eq!(validation_error("x").operation(), None);
    }

    #[test]
    fn test_or_fallback() {
        let ok: Result<i16> = Ok(42);
        let err: Result<i16> = Err(domain_error("sqrt", 0));
        assert_eq!(ok.or_fallback(), 42);
        assert_eq!(err.or_fallback(), 0);
    }

    #[test]
    fn test_error_equality() {
        let error1 = domain_error("pow", i16::MAX);
        let error2 = domain_error("pow", i16::MAX);
        let error3 = range_error("pow", i16::MAX);

        assert_eq!(error1, error2);
        assert_ne!(error1, error3);
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = domain_error("ln", i16::MIN);

        let _: &dyn std::error::Error = &error;

        assert!(std::error::Error::source(&error).is_none());
    }
}
