use std::ops::{Add, Mul, Neg, Sub};

use super::core::Fraction;

impl Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        Fraction::reduced(
            self.numerator()
                .wrapping_mul(rhs.denominator())
                .wrapping_add(rhs.numerator().wrapping_mul(self.denominator())),
            self.denominator().wrapping_mul(rhs.denominator()),
        )
    }
}

impl Sub for Fraction {
    type Output = Fraction;

    fn sub(self, rhs: Fraction) -> Fraction {
        Fraction::reduced(
            self.numerator()
                .wrapping_mul(rhs.denominator())
                .wrapping_sub(rhs.numerator().wrapping_mul(self.denominator())),
            self.denominator().wrapping_mul(rhs.denominator()),
        )
    }
}

impl Mul for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Fraction) -> Fraction {
        Fraction::reduced(
            self.numerator().wrapping_mul(rhs.numerator()),
            self.denominator().wrapping_mul(rhs.denominator()),
        )
    }
}

impl Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Fraction::reduced(self.numerator().wrapping_neg(), self.denominator())
    }
}

/// Cross-multiplication: `a/b == c/d` iff `a*d == c*b`.
impl PartialEq for Fraction {
    fn eq(&self, other: &Fraction) -> bool {
        self.numerator().wrapping_mul(other.denominator())
            == other.numerator().wrapping_mul(self.denominator())
    }
}

impl Eq for Fraction {}
