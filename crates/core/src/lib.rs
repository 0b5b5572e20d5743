//! # ndmorph Core
//!
//! Core types and traits for the ndmorph morphology library.
//!
//! This crate provides:
//! - `NdImage<T>`: Dense n-dimensional image grid type
//! - `MorphElement`: Trait bounding supported cell types (bool, integers)
//! - Position and flat-index conversion utilities
//! - Algorithm traits for consistent API

pub mod error;
pub mod image;

pub use error::{Error, Result};
pub use image::{MorphElement, NdImage};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::image::{MorphElement, NdImage};
    pub use crate::Algorithm;
}

/// Core trait for all operators in ndmorph.
///
/// Operators are pure functions that transform input data according to parameters.
pub trait Algorithm {
    /// Input type for the operator
    type Input;
    /// Output type for the operator
    type Output;
    /// Parameters controlling operator behavior
    type Params: Default;
    /// Error type for operator execution
    type Error: std::error::Error;

    /// Returns the operator name
    fn name(&self) -> &'static str;

    /// Returns a description of what the operator does
    fn description(&self) -> &'static str;

    /// Execute the operator
    fn execute(&self, input: Self::Input, params: Self::Params) -> std::result::Result<Self::Output, Self::Error>;

    /// Execute with default parameters
    fn execute_default(&self, input: Self::Input) -> std::result::Result<Self::Output, Self::Error> {
        self.execute(input, Self::Params::default())
    }
}
