//! Utils module split into submodules

mod digits;
mod errors;
mod validation;

pub use digits::{DEFAULT_RADIX, digits_to_number, number_to_digits, parse_radix_arg};
pub use errors::UtilsError;
pub use validation::{OPERATOR_CHARS, validate_equation};
