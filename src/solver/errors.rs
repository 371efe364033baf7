use thiserror::Error;

use crate::puzzle::PuzzleError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("This alphametic has too many letters ({letters} letters, radix {radix})")]
    TooManyLetters { letters: usize, radix: u32 },
    #[error("Puzzle error: {0}")]
    PuzzleError(#[from] PuzzleError),
}
