// ============================================================================
// Numeric Errors
// Error types for the amount-parsing boundary
// ============================================================================

use std::fmt;

/// Errors produced by the lenient amount parser.
///
/// Arithmetic in this crate is total (invalid inputs sanitize to zero, the
/// currency domain clamps at zero), so parsing free-text input is the only
/// fallible numeric operation. A parse error means "no value"; callers must
/// reject the input rather than treat it as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Input was empty or contained only separators/whitespace
    EmptyInput,
    /// The numeric portion could not be parsed as a finite number
    InvalidNumber,
    /// A trailing letter was present but is not a known magnitude suffix
    UnknownSuffix,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::EmptyInput => write!(f, "empty input: no amount to parse"),
            NumericError::InvalidNumber => {
                write!(f, "invalid number: could not parse a finite value")
            },
            NumericError::UnknownSuffix => {
                write!(f, "unknown suffix: expected one of k, m, b, t, q")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric parsing
pub type NumericResult<T> = Result<T, NumericError>;
