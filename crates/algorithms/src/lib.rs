//! # ndmorph Algorithms
//!
//! N-dimensional morphology and grayscale-topology operators for ndmorph.
//!
//! ## Available Operator Categories
//!
//! - **morphology**: Erosion, dilation, opening, closing, gradient, top-hat,
//!   black-hat, hole closing, hit-or-miss templating, 2-D majority filter
//! - **extrema**: Local and regional minima/maxima detection
//! - **watershed**: Marker-controlled watershed with optional ridge lines
//!
//! All operators share the structuring-element abstraction of
//! [`morphology::element`]: a mask of the image's rank whose nonzero cells
//! define the neighborhood, centred at `shape / 2` componentwise, with
//! nearest-neighbour boundary extension where an operator reads past the
//! image edge.

pub mod extrema;
pub mod morphology;
pub mod watershed;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::extrema::{
        local_extrema, local_maxima, local_minima, regional_extrema, regional_maxima,
        regional_minima, ExtremumKind, LocalExtrema, LocalExtremaParams, RegionalExtrema,
        RegionalExtremaParams,
    };
    pub use crate::morphology::{
        black_hat, close_holes, closing, dilate, erode, gradient, hitmiss, majority_filter,
        opening, top_hat, BlackHat, BlackHatParams, CloseHoles, CloseHolesParams, Closing,
        ClosingParams, Dilate, DilateParams, Erode, ErodeParams, Gradient, GradientParams,
        HitMiss, HitMissParams, HitMissTemplate, MajorityFilter, MajorityFilterParams, Opening,
        OpeningParams, StructuringElement, TopHat, TopHatParams,
    };
    pub use crate::watershed::{cwatershed, Watershed, WatershedParams};
    pub use ndmorph_core::prelude::*;
}
