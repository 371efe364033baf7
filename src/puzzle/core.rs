use std::collections::BTreeMap;

use log::{debug, info};

use crate::expression::{Expression, ExpressionParser};
use crate::puzzle::errors::PuzzleError;
use crate::utils::validate_equation;

pub const MIN_RADIX: u32 = 2;
pub const MAX_RADIX: u32 = 36;

/// A parsed alphametic equation in a fixed radix.
///
/// Letter slots are numbered in alphabetical order of the letters; an
/// assignment gives the digit of slot `i` at position `i`.
#[derive(Debug, Clone)]
pub struct Puzzle {
    equation: String,
    radix: u32,
    letters: Vec<char>,
    leading: Vec<bool>,
    root: Expression,
}

impl Puzzle {
    /// # Errors
    ///
    /// Returns an error if the radix is outside `2..=36` or the equation is
    /// malformed (see [`validate_equation`] and [`ExpressionParser::parse`]).
    pub fn new(equation: &str, radix: u32) -> Result<Self, PuzzleError> {
        if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
            return Err(PuzzleError::InvalidRadix(radix));
        }
        validate_equation(equation)?;

        let mut letter_to_index: BTreeMap<char, usize> = equation
            .chars()
            .filter(char::is_ascii_uppercase)
            .map(|c| (c, 0))
            .collect();
        for (index, slot) in letter_to_index.values_mut().enumerate() {
            *slot = index;
        }
        let letters: Vec<char> = letter_to_index.keys().copied().collect();

        let root = ExpressionParser::new(&letter_to_index, radix).parse(equation)?;
        if !matches!(root, Expression::Equal(_, _)) {
            return Err(PuzzleError::MissingEquality);
        }

        let mut leading = vec![false; letters.len()];
        for index in root.leading_letters() {
            if let Some(flag) = leading.get_mut(index) {
                *flag = true;
            }
        }

        info!(
            "Puzzle '{}' in radix {} has {} different letters",
            equation,
            radix,
            letters.len()
        );
        debug!("Parsed as {}", root.display(&letters, radix));

        Ok(Self {
            equation: equation.to_string(),
            radix,
            letters,
            leading,
            root,
        })
    }

    pub fn equation(&self) -> &str {
        &self.equation
    }

    pub fn radix(&self) -> u32 {
        self.radix
    }

    /// Distinct letters in slot order (alphabetical).
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn num_letters(&self) -> usize {
        self.letters.len()
    }

    /// Whether slot `index` starts some word and may not be zero.
    pub fn is_leading(&self, index: usize) -> bool {
        self.leading.get(index).copied().unwrap_or(false)
    }

    /// Check one assignment: leading letters must be non-zero and the
    /// equation must hold exactly. Division by zero counts as not holding.
    pub fn eval(&self, assignment: &[usize]) -> bool {
        let leading_zero = self
            .leading
            .iter()
            .zip(assignment)
            .any(|(&leading, &digit)| leading && digit == 0);
        if leading_zero {
            return false;
        }

        matches!(self.root.evaluate(assignment), Ok(value) if value.is_truthy())
    }

    /// The equation with every letter replaced by its assigned digit.
    pub fn substitute(&self, assignment: &[usize]) -> String {
        self.equation
            .chars()
            .map(|c| {
                self.letters
                    .binary_search(&c)
                    .ok()
                    .and_then(|slot| assignment.get(slot))
                    .and_then(|&digit| u32::try_from(digit).ok())
                    .and_then(|digit| std::char::from_digit(digit, self.radix))
                    .map_or(c, |d| d.to_ascii_uppercase())
            })
            .collect()
    }
}
