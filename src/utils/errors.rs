use thiserror::Error;

/// Errors that can occur in utility functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Equation cannot be empty")]
    EmptyEquation,
    #[error("Unsupported character '{character}' at position {position}")]
    UnsupportedCharacter { character: char, position: usize },
    #[error("Equation must contain exactly one '=', found {0}")]
    EqualsCount(usize),
    #[error("Number cannot be empty")]
    EmptyNumber,
    #[error("Digit '{digit}' is not valid in radix {radix}")]
    InvalidDigit { digit: char, radix: u32 },
}
