//! Regional extrema detection
//!
//! Starts from the local extrema mask and prunes plateaus that leak: a
//! marked cell with an unmarked neighbor at an equal-or-better value belongs
//! to a plateau whose flank continues downhill, so the whole connected
//! marked plateau is erased with a flood fill.

use std::marker::PhantomData;

use ndmorph_core::image::advance_position;
use ndmorph_core::{Algorithm, Error, MorphElement, NdImage, Result};

use super::local::local_extrema;
use super::ExtremumKind;
use crate::morphology::element::{neighbours, StructuringElement};

/// Parameters for regional extrema detection
#[derive(Debug, Clone)]
pub struct RegionalExtremaParams<T: MorphElement> {
    /// Structuring element defining the neighborhood
    pub element: StructuringElement<T>,
    /// Which extremum to detect
    pub kind: ExtremumKind,
}

impl<T: MorphElement> Default for RegionalExtremaParams<T> {
    fn default() -> Self {
        Self {
            element: StructuringElement::default(),
            kind: ExtremumKind::default(),
        }
    }
}

/// Regional extrema algorithm
#[derive(Debug, Clone, Default)]
pub struct RegionalExtrema<T: MorphElement>(PhantomData<T>);

impl<T: MorphElement> Algorithm for RegionalExtrema<T> {
    type Input = NdImage<T>;
    type Output = NdImage<bool>;
    type Params = RegionalExtremaParams<T>;
    type Error = Error;

    fn name(&self) -> &'static str {
        "RegionalExtrema"
    }

    fn description(&self) -> &'static str {
        "Mark connected plateaus whose external neighbors are all strictly worse"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        let mask = params.element.to_mask(input.rank())?;
        let mut out = input.like();
        regional_extrema(&input, &mask, &mut out, params.kind)?;
        Ok(out)
    }
}

/// Mark the regional extrema of an image
///
/// A regional minimum is a maximal connected plateau (under `bc`'s
/// centre-excluded neighborhood) every external neighbor of which holds a
/// strictly larger value; regional maxima mirror this. The result is a
/// subset of [`local_extrema`](super::local_extrema).
///
/// # Arguments
/// * `a` - Input image
/// * `bc` - Structuring element mask, same rank and cell type as `a`
/// * `out` - Pre-allocated boolean output, same shape as `a`
/// * `kind` - Whether to detect minima or maxima
pub fn regional_extrema<T: MorphElement>(
    a: &NdImage<T>,
    bc: &NdImage<T>,
    out: &mut NdImage<bool>,
    kind: ExtremumKind,
) -> Result<()> {
    local_extrema(a, bc, out, kind)?;
    remove_leaking_plateaus(a, bc, out, kind);
    Ok(())
}

/// Mark the regional minima of an image (see [`regional_extrema`])
pub fn regional_minima<T: MorphElement>(
    a: &NdImage<T>,
    bc: &NdImage<T>,
    out: &mut NdImage<bool>,
) -> Result<()> {
    regional_extrema(a, bc, out, ExtremumKind::Minimum)
}

/// Mark the regional maxima of an image (see [`regional_extrema`])
pub fn regional_maxima<T: MorphElement>(
    a: &NdImage<T>,
    bc: &NdImage<T>,
    out: &mut NdImage<bool>,
) -> Result<()> {
    regional_extrema(a, bc, out, ExtremumKind::Maximum)
}

/// Erase marked plateaus that leak to an equal-or-better unmarked neighbor.
///
/// Leak candidates and the flood itself both use the centre-excluded
/// neighborhood, so "regional extremum" is defined relative to `bc`'s
/// non-centre offsets.
fn remove_leaking_plateaus<T: MorphElement>(
    a: &NdImage<T>,
    bc: &NdImage<T>,
    marked: &mut NdImage<bool>,
    kind: ExtremumKind,
) {
    let offsets = neighbours(bc, false);
    let shape = a.shape().to_vec();
    let mut pos = vec![0usize; a.rank()];

    for i in 0..a.size() {
        if marked.at_flat(i) {
            let val = a.at_flat(i);
            for delta in &offsets {
                let Some(npos) = a.offset_within(&pos, delta) else {
                    continue;
                };
                let leaks = match kind {
                    ExtremumKind::Minimum => a.at(&npos) <= val,
                    ExtremumKind::Maximum => a.at(&npos) >= val,
                };
                if !marked.at(&npos) && leaks {
                    // Erase the whole connected marked plateau
                    marked.set_flat(i, false);
                    let mut stack = vec![pos.clone()];
                    while let Some(p) = stack.pop() {
                        for delta in &offsets {
                            if let Some(q) = a.offset_within(&p, delta) {
                                if marked.at(&q) {
                                    marked.set_at(&q, false);
                                    stack.push(q);
                                }
                            }
                        }
                    }
                    break;
                }
            }
        }
        advance_position(&mut pos, &shape);
    }
}
