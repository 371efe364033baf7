//! Expression tree, parser and exact evaluator

mod ast;
mod display;
mod errors;
mod eval;
mod parser;

pub use ast::Expression;
pub use display::ExpressionDisplay;
pub use errors::{ExpressionError, ParseError};
pub use parser::ExpressionParser;
