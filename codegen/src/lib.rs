//! Source code generation for declared enumerations.
//!
//! A declared [`EnumerationType`] only exists at run time. The generators here render it as a
//! native `enum` in Rust or TypeScript, numbered the same way, so other code can use the same
//! members at compile time.

mod common;
mod error;

#[cfg(feature = "generator-rust")]
mod rust;
#[cfg(feature = "generator-typescript")]
mod typescript;

#[cfg(not(any(feature = "generator-rust", feature = "generator-typescript")))]
compile_error!("At least one generator must be enabled");

use enumeration::EnumerationType;

pub use error::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Generator {
    #[cfg(feature = "generator-rust")]
    Rust,
    #[cfg(feature = "generator-typescript")]
    Typescript,
}

impl Generator {
    /// Renders all `enumerations` into a single source file.
    pub fn generate(&self, enumerations: &[&EnumerationType]) -> Result<String, Error> {
        match *self {
            #[cfg(feature = "generator-rust")]
            Self::Rust => rust::generate(enumerations),
            #[cfg(feature = "generator-typescript")]
            Self::Typescript => typescript::generate(enumerations),
        }
    }
}
