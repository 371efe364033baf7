mod core;
mod errors;

pub use self::core::{MAX_RADIX, MIN_RADIX, Puzzle};
pub use errors::PuzzleError;

#[cfg(test)]
mod tests;
