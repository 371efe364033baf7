mod core;
mod errors;

pub use self::core::{PuzzleSolver, Solution, solve_batch};
pub use errors::SolverError;

#[cfg(test)]
mod tests;
