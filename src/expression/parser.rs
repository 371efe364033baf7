use std::collections::BTreeMap;

use log::debug;

use crate::expression::ast::Expression;
use crate::expression::errors::ParseError;
use crate::utils::digits_to_number;

#[derive(Debug, Clone, Copy)]
enum Operator {
    Equal,
    Plus,
    Minus,
    Multiply,
    Divide,
}

/// Operator symbols with their binding priority; lower splits first.
const PARSE_TABLE: [(char, Operator, u8); 5] = [
    ('=', Operator::Equal, 0),
    ('+', Operator::Plus, 1),
    ('-', Operator::Minus, 1),
    ('*', Operator::Multiply, 2),
    ('/', Operator::Divide, 2),
];

impl Operator {
    fn lookup(c: char) -> Option<(Operator, u8)> {
        PARSE_TABLE
            .iter()
            .find(|(symbol, _, _)| *symbol == c)
            .map(|&(_, op, priority)| (op, priority))
    }

    fn build(self, left: Expression, right: Expression) -> Expression {
        let (l, r) = (Box::new(left), Box::new(right));
        match self {
            Operator::Equal => Expression::Equal(l, r),
            Operator::Plus => Expression::Plus(l, r),
            Operator::Minus => Expression::Minus(l, r),
            Operator::Multiply => Expression::Multiply(l, r),
            Operator::Divide => Expression::Divide(l, r),
        }
    }
}

/// Splits equation text on its weakest operator, recursively.
///
/// Among operators of equal priority the rightmost one is chosen as the split
/// point, so chains such as `A-B-C` group to the left: `(A-B)-C`.
/// Parentheses are not supported.
pub struct ExpressionParser<'a> {
    letter_to_index: &'a BTreeMap<char, usize>,
    radix: u32,
}

impl<'a> ExpressionParser<'a> {
    pub fn new(letter_to_index: &'a BTreeMap<char, usize>, radix: u32) -> Self {
        Self {
            letter_to_index,
            radix,
        }
    }

    /// # Errors
    ///
    /// Returns an error for empty operands, numerals that are not valid in
    /// the radix, and characters that are neither operators, digits nor
    /// letters present in the letter map.
    pub fn parse(&self, text: &str) -> Result<Expression, ParseError> {
        let expr = self.parse_range(text, 0)?;
        debug!("Parsed '{}' into {:?}", text, expr);
        Ok(expr)
    }

    fn parse_range(&self, text: &str, offset: usize) -> Result<Expression, ParseError> {
        let mut split: Option<(usize, Operator)> = None;
        let mut best = u8::MAX;

        for (i, c) in text.char_indices() {
            if let Some((op, priority)) = Operator::lookup(c)
                && priority <= best
            {
                split = Some((i, op));
                best = priority;
            }
        }

        match split {
            Some((i, op)) => {
                let (left, right) = (&text[..i], &text[i + 1..]);
                let left = self.parse_range(left, offset)?;
                let right = self.parse_range(right, offset + i + 1)?;
                Ok(op.build(left, right))
            }
            None => self.parse_leaf(text, offset),
        }
    }

    fn parse_leaf(&self, text: &str, offset: usize) -> Result<Expression, ParseError> {
        if text.is_empty() {
            return Err(ParseError::EmptyOperand { position: offset });
        }

        if text.chars().any(|c| c.is_ascii_digit()) {
            let value =
                digits_to_number(text, self.radix).map_err(|source| ParseError::InvalidNumber {
                    text: text.to_string(),
                    position: offset,
                    source,
                })?;
            return Ok(Expression::Number(value));
        }

        let mut digits = Vec::with_capacity(text.len());
        for (i, c) in text.char_indices().rev() {
            let index = self.letter_to_index.get(&c).copied().ok_or(
                ParseError::UnmappedCharacter {
                    character: c,
                    position: offset + i,
                },
            )?;
            digits.push(index);
        }

        Ok(Expression::Word {
            digits,
            radix: self.radix,
        })
    }
}
