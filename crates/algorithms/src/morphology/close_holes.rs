//! Binary hole closing
//!
//! Fills every background component that does not reach the image boundary.
//! The flood runs from the boundary inwards over background cells, so the
//! complement of the flooded region is the input union its enclosed holes.

use ndmorph_core::image::advance_position;
use ndmorph_core::{Algorithm, Error, NdImage, Result};

use super::element::{neighbours, StructuringElement};

/// Parameters for hole closing
#[derive(Debug, Clone)]
pub struct CloseHolesParams {
    /// Structuring element defining background connectivity
    pub element: StructuringElement<bool>,
}

impl Default for CloseHolesParams {
    fn default() -> Self {
        Self {
            element: StructuringElement::default(),
        }
    }
}

/// Hole closing algorithm
#[derive(Debug, Clone, Default)]
pub struct CloseHoles;

impl Algorithm for CloseHoles {
    type Input = NdImage<bool>;
    type Output = NdImage<bool>;
    type Params = CloseHolesParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "CloseHoles"
    }

    fn description(&self) -> &'static str {
        "Fill background components that do not touch the image boundary"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        let mask = params.element.to_mask(input.rank())?;
        close_holes(&input, &mask)
    }
}

/// Close the holes of a binary image
///
/// Every boundary background cell seeds a flood fill over background cells
/// connected under `bc`'s neighborhood (centre excluded). Background
/// components never reached by the flood are enclosed holes; the result is
/// `reference` with those components set.
///
/// # Arguments
/// * `reference` - Input binary image
/// * `bc` - Boolean structuring element, same rank as `reference`
pub fn close_holes(reference: &NdImage<bool>, bc: &NdImage<bool>) -> Result<NdImage<bool>> {
    if bc.rank() != reference.rank() {
        return Err(Error::RankMismatch {
            image: reference.rank(),
            element: bc.rank(),
        });
    }

    let mut fill: NdImage<bool> = NdImage::new(reference.shape());
    let offsets = neighbours(bc, false);
    let shape = reference.shape().to_vec();

    // Seed the flood from every background cell on the boundary
    let mut stack: Vec<Vec<usize>> = Vec::new();
    let mut pos = vec![0usize; reference.rank()];
    for i in 0..reference.size() {
        if reference.margin(&pos) == 0 && !reference.at_flat(i) && !fill.at_flat(i) {
            fill.set_flat(i, true);
            stack.push(pos.clone());
        }
        advance_position(&mut pos, &shape);
    }

    // Depth-first flood over connected background
    while let Some(p) = stack.pop() {
        for delta in &offsets {
            if let Some(q) = reference.offset_within(&p, delta) {
                if !reference.at(&q) && !fill.at(&q) {
                    fill.set_at(&q, true);
                    stack.push(q);
                }
            }
        }
    }

    // Complement in place: unreached background plus the foreground
    for v in fill.as_mut_slice() {
        *v = !*v;
    }
    Ok(fill)
}
