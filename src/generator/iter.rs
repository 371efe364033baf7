use crate::generator::core::InjectionGenerator;
use crate::generator::errors::GeneratorError;

/// Owned-copy iterator over the maps of an [`InjectionGenerator`], in the
/// same order, starting with the initial map.
#[derive(Debug, Clone)]
pub struct Injections {
    generator: InjectionGenerator,
    started: bool,
    exhausted: bool,
}

impl Injections {
    /// # Errors
    ///
    /// Returns an error if `codomain < domain`.
    pub fn new(domain: usize, codomain: usize) -> Result<Self, GeneratorError> {
        Ok(Self::from_generator(InjectionGenerator::new(domain, codomain)?))
    }

    pub fn from_generator(generator: InjectionGenerator) -> Self {
        Self {
            generator,
            started: false,
            exhausted: false,
        }
    }
}

impl Iterator for Injections {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.exhausted {
            return None;
        }
        if self.started {
            if !self.generator.advance() {
                self.exhausted = true;
                return None;
            }
        } else {
            self.started = true;
        }
        Some(self.generator.current().to_vec())
    }
}

/// Iterate every injective map from `domain` slots into `codomain` digits.
///
/// # Errors
///
/// Returns an error if `codomain < domain`.
pub fn injections(domain: usize, codomain: usize) -> Result<Injections, GeneratorError> {
    Injections::new(domain, codomain)
}
