use thiserror::Error;

use crate::expression::ParseError;
use crate::utils::UtilsError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PuzzleError {
    #[error("Radix must be between 2 and 36, got {0}")]
    InvalidRadix(u32),
    #[error("Invalid equation: {0}")]
    InvalidEquation(#[from] UtilsError),
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    #[error("Equation root is not an equality")]
    MissingEquality,
}
