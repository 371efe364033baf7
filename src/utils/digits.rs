use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// Radix used when the command line gives none or an unparsable one.
pub const DEFAULT_RADIX: u32 = 10;

/// Read a numeral written with decimal digit characters in the given radix.
///
/// Accumulates `value * radix + digit` with wrapping arithmetic.
///
/// # Errors
///
/// Returns an error if the numeral is empty or contains a character that is
/// not a decimal digit below `radix`.
pub fn digits_to_number(numeral: &str, radix: u32) -> Result<i64, UtilsError> {
    if numeral.is_empty() {
        return Err(UtilsError::EmptyNumber);
    }

    let mut value: i64 = 0;
    for c in numeral.chars() {
        let digit = c
            .to_digit(10)
            .filter(|d| *d < radix)
            .ok_or(UtilsError::InvalidDigit { digit: c, radix })?;
        value = value
            .wrapping_mul(i64::from(radix))
            .wrapping_add(i64::from(digit));
    }

    debug!("Converted '{}' in radix {} to {}", numeral, radix, value);
    Ok(value)
}

/// Render a non-negative value in the given radix (2..=36), uppercase.
pub fn number_to_digits(value: i64, radix: u32) -> String {
    let radix = u64::from(radix.clamp(2, 36));
    let negative = value < 0;
    let mut rest = value.unsigned_abs();
    let mut out = Vec::new();
    loop {
        let digit = (rest % radix) as u32;
        let c = std::char::from_digit(digit, radix as u32).map_or('?', |c| c.to_ascii_uppercase());
        out.push(c);
        rest /= radix;
        if rest == 0 {
            break;
        }
    }
    if negative {
        out.push('-');
    }
    out.iter().rev().collect()
}

/// Parse a command-line radix, falling back to [`DEFAULT_RADIX`].
pub fn parse_radix_arg(arg: &str) -> u32 {
    match arg.trim().parse::<u32>() {
        Ok(radix) => radix,
        Err(_) => {
            warn!(
                "Could not parse radix '{}', using {} instead",
                arg, DEFAULT_RADIX
            );
            DEFAULT_RADIX
        }
    }
}
