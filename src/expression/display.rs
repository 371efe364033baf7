use std::fmt;

use crate::expression::ast::Expression;
use crate::utils::number_to_digits;

/// Fully parenthesised rendering of an [`Expression`] with its letters.
pub struct ExpressionDisplay<'a> {
    expr: &'a Expression,
    letters: &'a [char],
    radix: u32,
}

impl Expression {
    /// `letters[i]` names letter slot `i`; numbers are shown in `radix`.
    pub fn display<'a>(&'a self, letters: &'a [char], radix: u32) -> ExpressionDisplay<'a> {
        ExpressionDisplay {
            expr: self,
            letters,
            radix,
        }
    }
}

impl fmt::Display for ExpressionDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn fmt_expression(
            f: &mut fmt::Formatter,
            expr: &Expression,
            letters: &[char],
            radix: u32,
        ) -> fmt::Result {
            let (l, r, op) = match expr {
                Expression::Word { digits, .. } => {
                    for &index in digits.iter().rev() {
                        write!(f, "{}", letters.get(index).copied().unwrap_or('?'))?;
                    }
                    return Ok(());
                }
                Expression::Number(n) => return write!(f, "{}", number_to_digits(*n, radix)),
                Expression::Equal(l, r) => {
                    fmt_expression(f, l, letters, radix)?;
                    write!(f, " = ")?;
                    return fmt_expression(f, r, letters, radix);
                }
                Expression::Plus(l, r) => (l, r, '+'),
                Expression::Minus(l, r) => (l, r, '-'),
                Expression::Multiply(l, r) => (l, r, '*'),
                Expression::Divide(l, r) => (l, r, '/'),
            };
            write!(f, "(")?;
            fmt_expression(f, l, letters, radix)?;
            write!(f, " {} ", op)?;
            fmt_expression(f, r, letters, radix)?;
            write!(f, ")")
        }

        fmt_expression(f, self.expr, self.letters, self.radix)
    }
}
