//! Image data structures and operations

mod element;
mod grid;

pub use element::MorphElement;
pub use grid::{advance_position, ImageStatistics, NdImage};
