//! Mathematical morphology operators
//!
//! Classical morphological operations over n-dimensional images:
//! - **Erosion**: minimum filter (shrinks bright regions)
//! - **Dilation**: maximum filter (expands bright regions)
//! - **Opening**: erosion then dilation (removes small bright features)
//! - **Closing**: dilation then erosion (fills small dark gaps)
//! - **Gradient**: dilation minus erosion (edge detection)
//! - **Top-hat / black-hat**: bright and dark feature extraction
//! - **Close holes**: fill background components enclosed by foreground
//! - **Hit-or-miss**: three-valued template matching
//! - **Majority filter**: 2-D binary majority vote

mod close_holes;
mod closing;
mod dilate;
pub mod element;
mod erode;
mod gradient;
mod hitmiss;
mod majority;
mod opening;
mod tophat;

pub use close_holes::{close_holes, CloseHoles, CloseHolesParams};
pub use closing::{closing, Closing, ClosingParams};
pub use dilate::{dilate, Dilate, DilateParams};
pub use element::StructuringElement;
pub use erode::{erode, Erode, ErodeParams};
pub use gradient::{gradient, Gradient, GradientParams};
pub use hitmiss::{hitmiss, HitMiss, HitMissParams, HitMissTemplate};
pub use majority::{majority_filter, MajorityFilter, MajorityFilterParams};
pub use opening::{opening, Opening, OpeningParams};
pub use tophat::{black_hat, top_hat, BlackHat, BlackHatParams, TopHat, TopHatParams};
