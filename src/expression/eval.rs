use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;
use crate::fraction::Fraction;

impl Expression {
    /// Evaluate the tree exactly for one letter-to-digit assignment.
    ///
    /// `Equal` yields `1` or `0`. Quotients stay fractional when a division
    /// is not exact. Arithmetic wraps on 64-bit overflow.
    ///
    /// # Errors
    ///
    /// Returns an error when a divisor evaluates to zero or when a word
    /// refers to a letter slot the assignment does not cover.
    pub fn evaluate(&self, assignment: &[usize]) -> Result<Fraction, ExpressionError> {
        match self {
            Expression::Equal(l, r) => {
                let left = l.evaluate(assignment)?;
                let right = r.evaluate(assignment)?;
                Ok(Fraction::from(left == right))
            }
            Expression::Plus(l, r) => Ok(l.evaluate(assignment)? + r.evaluate(assignment)?),
            Expression::Minus(l, r) => Ok(l.evaluate(assignment)? - r.evaluate(assignment)?),
            Expression::Multiply(l, r) => Ok(l.evaluate(assignment)? * r.evaluate(assignment)?),
            Expression::Divide(l, r) => {
                let left = l.evaluate(assignment)?;
                let right = r.evaluate(assignment)?;
                left.checked_div(right).ok_or(ExpressionError::DivisionByZero)
            }
            Expression::Word { digits, radix } => {
                let radix = i64::from(*radix);
                let mut value: i64 = 0;
                let mut place: i64 = 1;
                for &index in digits {
                    let digit = assignment
                        .get(index)
                        .ok_or(ExpressionError::MissingAssignment {
                            index,
                            len: assignment.len(),
                        })?;
                    value = value.wrapping_add((*digit as i64).wrapping_mul(place));
                    place = place.wrapping_mul(radix);
                }
                Ok(Fraction::from_integer(value))
            }
            Expression::Number(n) => Ok(Fraction::from_integer(*n)),
        }
    }
}
