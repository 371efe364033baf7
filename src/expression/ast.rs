/// Parsed alphametic equation.
///
/// A well-formed puzzle has exactly one `Equal` node, at the root.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Equal(Box<Expression>, Box<Expression>),
    Plus(Box<Expression>, Box<Expression>),
    Minus(Box<Expression>, Box<Expression>),
    Multiply(Box<Expression>, Box<Expression>),
    Divide(Box<Expression>, Box<Expression>),
    /// Letter slots, least significant letter first.
    Word { digits: Vec<usize>, radix: u32 },
    Number(i64),
}

impl Expression {
    /// Letter slots that start a word and therefore may not be zero.
    pub fn leading_letters(&self) -> Vec<usize> {
        let mut out = Vec::new();
        self.collect_leading(&mut out);
        out.sort_unstable();
        out.dedup();
        out
    }

    fn collect_leading(&self, out: &mut Vec<usize>) {
        match self {
            Expression::Equal(l, r)
            | Expression::Plus(l, r)
            | Expression::Minus(l, r)
            | Expression::Multiply(l, r)
            | Expression::Divide(l, r) => {
                l.collect_leading(out);
                r.collect_leading(out);
            }
            Expression::Word { digits, .. } => {
                if let Some(&first) = digits.last() {
                    out.push(first);
                }
            }
            Expression::Number(_) => {}
        }
    }
}
