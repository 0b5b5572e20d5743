//! Morphological gradient (dilation minus erosion)
//!
//! Highlights cell-to-cell transitions; on binary images this is the
//! boundary of the foreground.

use std::marker::PhantomData;

use ndmorph_core::{Algorithm, Error, MorphElement, NdImage, Result};

use super::dilate::dilate;
use super::element::StructuringElement;
use super::erode::erode;

/// Parameters for the morphological gradient
#[derive(Debug, Clone)]
pub struct GradientParams<T: MorphElement> {
    /// Structuring element shape
    pub element: StructuringElement<T>,
}

impl<T: MorphElement> Default for GradientParams<T> {
    fn default() -> Self {
        Self {
            element: StructuringElement::default(),
        }
    }
}

/// Gradient algorithm
#[derive(Debug, Clone, Default)]
pub struct Gradient<T: MorphElement>(PhantomData<T>);

impl<T: MorphElement> Algorithm for Gradient<T> {
    type Input = NdImage<T>;
    type Output = NdImage<T>;
    type Params = GradientParams<T>;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Gradient"
    }

    fn description(&self) -> &'static str {
        "Morphological gradient (dilation minus erosion) for edge extraction"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        let mask = params.element.to_mask(input.rank())?;
        gradient(&input, &mask)
    }
}

/// Compute the morphological gradient of an image
///
/// Gradient = dilation - erosion, with saturating subtraction (set
/// difference on booleans). Constant images come out all-zero.
pub fn gradient<T: MorphElement>(a: &NdImage<T>, bc: &NdImage<T>) -> Result<NdImage<T>> {
    let mut dilated = a.like();
    dilate(a, bc, &mut dilated)?;
    let mut eroded = a.like();
    erode(a, bc, &mut eroded)?;

    let mut out = dilated;
    for (v, &e) in out.as_mut_slice().iter_mut().zip(eroded.as_slice()) {
        *v = v.sub_saturating(e);
    }
    Ok(out)
}
