//! Alphametix - A library for solving alphametic puzzles
//!
//! This library finds every way to replace the letters of an equation such as
//! `SEND+MORE=MONEY` by distinct digits of a radix so that the equation holds
//! exactly. Leading letters may not be zero.

pub mod expression;
pub mod fraction;
pub mod generator;
pub mod puzzle;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use expression::{Expression, ExpressionError, ParseError};
pub use fraction::Fraction;
pub use generator::{GeneratorError, InjectionGenerator, Injections, injections};
pub use puzzle::{Puzzle, PuzzleError};
pub use solver::{PuzzleSolver, Solution, SolverError, solve_batch};
pub use utils::{UtilsError, validate_equation};

/// Find every solution of an alphametic equation in the given radix
///
/// This is a convenience function that builds the puzzle and runs the solver
/// over it.
///
/// # Arguments
///
/// * `equation` - An equation such as `SEND+MORE=MONEY`
/// * `radix` - The radix the words and numbers are read in (2..=36)
///
/// # Returns
///
/// * `Ok(Vec<Solution>)` - The digits of each letter, in alphabetical letter order
/// * `Err(SolverError)` - If the equation is malformed or has too many letters
///
/// # Errors
///
/// This function will return an error if:
/// * The radix is outside `2..=36`
/// * The equation contains unsupported characters or not exactly one `=`
/// * The equation has more distinct letters than the radix has digits
///
/// # Examples
///
/// ```
/// use alphametix::solve;
///
/// match solve("AB+BA=CC", 10) {
///     Ok(solutions) => println!("Found {} solutions", solutions.len()),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn solve(equation: &str, radix: u32) -> Result<Vec<Solution>, SolverError> {
    let puzzle = Puzzle::new(equation, radix)?;
    PuzzleSolver::new(&puzzle).solve()
}
