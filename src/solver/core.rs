use std::fmt;
use std::ops::ControlFlow;

use log::{debug, info, warn};
use rayon::prelude::*;

use crate::generator::{GeneratorError, InjectionGenerator};
use crate::puzzle::Puzzle;
use crate::solver::errors::SolverError;

/// One accepted assignment: digit of each letter slot, in letter order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    digits: Vec<usize>,
}

impl Solution {
    pub fn digits(&self) -> &[usize] {
        &self.digits
    }

    /// Digit assigned to `letter`, if the puzzle contains it.
    pub fn digit_of(&self, puzzle: &Puzzle, letter: char) -> Option<usize> {
        let slot = puzzle.letters().binary_search(&letter).ok()?;
        self.digits.get(slot).copied()
    }
}

impl From<&[usize]> for Solution {
    fn from(digits: &[usize]) -> Self {
        Self {
            digits: digits.to_vec(),
        }
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for digit in &self.digits {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}", digit)?;
            first = false;
        }
        Ok(())
    }
}

/// Exhaustive solver over all injective letter-to-digit assignments
pub struct PuzzleSolver<'a> {
    puzzle: &'a Puzzle,
}

impl<'a> PuzzleSolver<'a> {
    pub fn new(puzzle: &'a Puzzle) -> Self {
        Self { puzzle }
    }

    pub fn puzzle(&self) -> &Puzzle {
        self.puzzle
    }

    /// Visit every solution in generator order. The slice handed to `visit`
    /// is only valid for the duration of the call. Returning
    /// `ControlFlow::Break` stops the search early.
    ///
    /// Returns the number of solutions visited.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::TooManyLetters`] if the puzzle has more distinct
    /// letters than the radix has digits. No solution is visited in that case.
    pub fn for_each_solution<F>(&self, mut visit: F) -> Result<usize, SolverError>
    where
        F: FnMut(&[usize]) -> ControlFlow<()>,
    {
        let letters = self.puzzle.num_letters();
        let radix = self.puzzle.radix();

        let mut generator =
            InjectionGenerator::new(letters, radix as usize).map_err(|err: GeneratorError| {
                warn!("Cannot solve '{}': {}", self.puzzle.equation(), err);
                SolverError::TooManyLetters { letters, radix }
            })?;

        info!("Solving '{}' in radix {}", self.puzzle.equation(), radix);

        let mut found = 0;
        let mut checked: u64 = 0;
        loop {
            checked += 1;
            let assignment = generator.current();
            if self.puzzle.eval(assignment) {
                found += 1;
                debug!("Solution {}: {:?}", found, assignment);
                if visit(assignment).is_break() {
                    info!("Search stopped after {} solutions", found);
                    break;
                }
            }
            if !generator.advance() {
                break;
            }
        }

        info!("Checked {} assignments, found {} solutions", checked, found);
        Ok(found)
    }

    /// Collect every solution in generator order.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::TooManyLetters`] if the radix is too small.
    pub fn solve(&self) -> Result<Vec<Solution>, SolverError> {
        let mut solutions = Vec::new();
        self.for_each_solution(|assignment| {
            solutions.push(Solution::from(assignment));
            ControlFlow::Continue(())
        })?;
        Ok(solutions)
    }

    /// Collect at most `limit` solutions.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::TooManyLetters`] if the radix is too small.
    pub fn solve_limited(&self, limit: usize) -> Result<Vec<Solution>, SolverError> {
        let mut solutions = Vec::new();
        if limit == 0 {
            return Ok(solutions);
        }
        self.for_each_solution(|assignment| {
            solutions.push(Solution::from(assignment));
            if solutions.len() >= limit {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })?;
        Ok(solutions)
    }
}

/// Solve independent puzzles in parallel. Results keep the input order.
pub fn solve_batch(equations: &[&str], radix: u32) -> Vec<Result<Vec<Solution>, SolverError>> {
    info!("Solving {} puzzles in parallel", equations.len());

    equations
        .par_iter()
        .map(|equation| {
            let puzzle = Puzzle::new(equation, radix)?;
            PuzzleSolver::new(&puzzle).solve()
        })
        .collect()
}
