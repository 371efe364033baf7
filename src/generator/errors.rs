use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneratorError {
    #[error(
        "There are no injective maps from {domain} letters into {codomain} digits (codomain smaller than domain)"
    )]
    CodomainTooSmall { domain: usize, codomain: usize },
}
