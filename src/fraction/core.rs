use std::fmt;

/// Exact rational number with a non-zero, positive denominator.
///
/// Values are reduced by their gcd on construction. All arithmetic wraps on
/// 64-bit overflow instead of panicking.
#[derive(Debug, Clone, Copy)]
pub struct Fraction {
    num: i64,
    denom: i64,
}

fn gcd(a: i64, b: i64) -> u64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        let c = a % b;
        a = b;
        b = c;
    }
    a
}

impl Fraction {
    /// Returns `None` when `denom` is zero.
    pub fn new(num: i64, denom: i64) -> Option<Self> {
        if denom == 0 {
            return None;
        }
        Some(Self::reduced(num, denom))
    }

    pub fn from_integer(value: i64) -> Self {
        Self {
            num: value,
            denom: 1,
        }
    }

    // Caller guarantees denom != 0.
    pub(super) fn reduced(num: i64, denom: i64) -> Self {
        let g = gcd(num, denom) as i64;
        let (mut num, mut denom) = if g > 1 {
            (num / g, denom / g)
        } else {
            (num, denom)
        };
        if denom < 0 {
            num = num.wrapping_neg();
            denom = denom.wrapping_neg();
        }
        Self { num, denom }
    }

    pub fn numerator(&self) -> i64 {
        self.num
    }

    pub fn denominator(&self) -> i64 {
        self.denom
    }

    /// A fraction is truthy iff its numerator is non-zero.
    pub fn is_truthy(&self) -> bool {
        self.num != 0
    }

    /// Exact quotient, or `None` if `rhs` is zero.
    pub fn checked_div(self, rhs: Self) -> Option<Self> {
        if rhs.num == 0 {
            return None;
        }
        Some(Self::reduced(
            self.num.wrapping_mul(rhs.denom),
            self.denom.wrapping_mul(rhs.num),
        ))
    }
}

impl From<i64> for Fraction {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<bool> for Fraction {
    fn from(value: bool) -> Self {
        Self::from_integer(i64::from(value))
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.denom == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.denom)
        }
    }
}

#[cfg(test)]
mod tests_inner_helpers {
    use super::gcd;

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(-12, 18), 6);
        assert_eq!(gcd(0, 7), 7);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(gcd(17, 5), 1);
    }
}
