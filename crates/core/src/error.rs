//! Error types for ndmorph

use thiserror::Error;

/// Main error type for ndmorph operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    #[error("Rank mismatch: image has rank {image}, structuring element has rank {element}")]
    RankMismatch { image: usize, element: usize },

    #[error("Invalid image dimensions: {shape:?}")]
    InvalidDimensions { shape: Vec<usize> },

    #[error("Position out of bounds: {position:?} in image of shape {shape:?}")]
    PositionOutOfBounds {
        position: Vec<usize>,
        shape: Vec<usize>,
    },

    #[error("Invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

/// Result type alias for ndmorph operations
pub type Result<T> = std::result::Result<T, Error>;
