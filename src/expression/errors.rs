use thiserror::Error;

use crate::utils::UtilsError;

/// Errors raised while turning equation text into an [`Expression`](super::Expression)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Empty operand at position {position}")]
    EmptyOperand { position: usize },
    #[error("Character '{character}' at position {position} is not a known letter")]
    UnmappedCharacter { character: char, position: usize },
    #[error("Invalid number '{text}' at position {position}: {source}")]
    InvalidNumber {
        text: String,
        position: usize,
        source: UtilsError,
    },
}

/// Errors that can occur during expression evaluation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("No digit assigned to letter slot {index} (assignment has {len})")]
    MissingAssignment { index: usize, len: usize },
}
