//! Input validation errors.

/// Error returned when the input cannot be arranged into a 3x3 matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidInputError {
    /// The input sequence does not contain exactly `expected` values.
    SizeMismatch { expected: usize, actual: usize },
}

impl std::fmt::Display for InvalidInputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidInputError::SizeMismatch { expected, actual } => {
                write!(
                    f,
                    "input must contain exactly {expected} elements, got {actual}"
                )
            }
        }
    }
}

impl std::error::Error for InvalidInputError {}
