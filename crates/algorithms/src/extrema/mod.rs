//! Local and regional extrema detection
//!
//! - **Local extrema**: cells no worse than every neighbor under the
//!   structuring element
//! - **Regional extrema**: connected plateaus whose external neighbors are
//!   all strictly worse

mod local;
mod regional;

pub use local::{local_extrema, local_maxima, local_minima, LocalExtrema, LocalExtremaParams};
pub use regional::{
    regional_extrema, regional_maxima, regional_minima, RegionalExtrema, RegionalExtremaParams,
};

/// Which kind of extremum to detect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtremumKind {
    /// Cells whose value is <= every neighbor
    #[default]
    Minimum,
    /// Cells whose value is >= every neighbor
    Maximum,
}
