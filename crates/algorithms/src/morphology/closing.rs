//! Morphological closing (dilation followed by erosion)
//!
//! Fills dark gaps smaller than the structuring element while preserving
//! the overall shape and size of larger dark regions.

use std::marker::PhantomData;

use ndmorph_core::{Algorithm, Error, MorphElement, NdImage, Result};

use super::dilate::dilate;
use super::element::StructuringElement;
use super::erode::erode;

/// Parameters for morphological closing
#[derive(Debug, Clone)]
pub struct ClosingParams<T: MorphElement> {
    /// Structuring element shape
    pub element: StructuringElement<T>,
}

impl<T: MorphElement> Default for ClosingParams<T> {
    fn default() -> Self {
        Self {
            element: StructuringElement::default(),
        }
    }
}

/// Closing algorithm
#[derive(Debug, Clone, Default)]
pub struct Closing<T: MorphElement>(PhantomData<T>);

impl<T: MorphElement> Algorithm for Closing<T> {
    type Input = NdImage<T>;
    type Output = NdImage<T>;
    type Params = ClosingParams<T>;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Closing"
    }

    fn description(&self) -> &'static str {
        "Morphological closing (dilation then erosion) to fill small dark gaps"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        let mask = params.element.to_mask(input.rank())?;
        closing(&input, &mask)
    }
}

/// Perform morphological closing on an image
///
/// Closing = dilate then erode. Fills dark gaps smaller than the
/// structuring element while preserving larger dark structures.
pub fn closing<T: MorphElement>(a: &NdImage<T>, bc: &NdImage<T>) -> Result<NdImage<T>> {
    let mut dilated = a.like();
    dilate(a, bc, &mut dilated)?;
    let mut out = a.like();
    erode(&dilated, bc, &mut out)?;
    Ok(out)
}
