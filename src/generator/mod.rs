mod core;
mod errors;
mod iter;

pub use self::core::InjectionGenerator;
pub use errors::GeneratorError;
pub use iter::{Injections, injections};
