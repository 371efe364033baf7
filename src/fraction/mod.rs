//! Exact rational arithmetic used by the evaluator

mod core;
mod ops;

pub use self::core::Fraction;
