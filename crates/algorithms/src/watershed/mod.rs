//! Marker-controlled watershed
//!
//! Floods a cost image outward from labeled marker cells with a min-priority
//! queue. Ties are broken by insertion order, which gives the classical
//! "flood from markers" result: on plateaus the earlier marker's territory
//! wins, and the output is fully deterministic.

mod flood;

pub use flood::{cwatershed, Watershed, WatershedParams};
