//! Calculation Errors
//!
//! Every fallible arithmetic function returns one of these kinds.
//! Errors are raised at the call site and handed back to the caller unchanged.

/// Calculation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// Denominator (or total) is zero
    DivisionByZero(String),
    /// Argument outside the function's domain
    InvalidArgument(String),
    /// Result or conversion does not fit the target representation
    Overflow(String),
}

impl CalcError {
    /// Create a division-by-zero error
    pub fn division_by_zero(msg: impl Into<String>) -> Self {
        CalcError::DivisionByZero(msg.into())
    }

    /// Create an invalid-argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        CalcError::InvalidArgument(msg.into())
    }

    /// Create an overflow error
    pub fn overflow(msg: impl Into<String>) -> Self {
        CalcError::Overflow(msg.into())
    }

    /// The message carried by the error, without the kind
    pub fn message(&self) -> &str {
        match self {
            CalcError::DivisionByZero(msg)
            | CalcError::InvalidArgument(msg)
            | CalcError::Overflow(msg) => msg,
        }
    }
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for CalcError {}

/// Result type for calculation operations
pub type CalcResult<T> = Result<T, CalcError>;
