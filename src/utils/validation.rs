use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// Characters an equation may contain besides uppercase letters and digits.
pub const OPERATOR_CHARS: [char; 5] = ['=', '+', '-', '*', '/'];

/// # Errors
///
/// Returns an error if the equation is empty, contains anything other than
/// `A-Z`, `0-9` and the operators `= + - * /` (this includes whitespace and
/// parentheses), or does not contain exactly one `=`.
pub fn validate_equation(equation: &str) -> Result<(), UtilsError> {
    debug!("Validating equation: '{}'", equation);

    if equation.is_empty() {
        warn!("Equation is empty");
        return Err(UtilsError::EmptyEquation);
    }

    if let Some((position, character)) = equation.chars().enumerate().find(|(_, c)| {
        !(c.is_ascii_uppercase() || c.is_ascii_digit() || OPERATOR_CHARS.contains(c))
    }) {
        warn!(
            "Equation contains unsupported character '{}' at {}",
            character, position
        );
        return Err(UtilsError::UnsupportedCharacter {
            character,
            position,
        });
    }

    let equals = equation.chars().filter(|c| *c == '=').count();
    if equals != 1 {
        warn!("Equation has {} '=' signs", equals);
        return Err(UtilsError::EqualsCount(equals));
    }

    debug!("Equation validation successful");
    Ok(())
}
