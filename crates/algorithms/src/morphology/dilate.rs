//! Morphological dilation (maximum filter)
//!
//! Scatters each cell's value over its structuring element neighborhood,
//! keeping the maximum at every target. Enlarges bright regions and shrinks
//! dark regions.

use std::marker::PhantomData;

use ndmorph_core::image::advance_position;
use ndmorph_core::{Algorithm, Error, MorphElement, NdImage, Result};

use super::element::{neighbours, StructuringElement};

/// Parameters for morphological dilation
#[derive(Debug, Clone)]
pub struct DilateParams<T: MorphElement> {
    /// Structuring element shape
    pub element: StructuringElement<T>,
}

impl<T: MorphElement> Default for DilateParams<T> {
    fn default() -> Self {
        Self {
            element: StructuringElement::default(),
        }
    }
}

/// Dilation algorithm
#[derive(Debug, Clone, Default)]
pub struct Dilate<T: MorphElement>(PhantomData<T>);

impl<T: MorphElement> Algorithm for Dilate<T> {
    type Input = NdImage<T>;
    type Output = NdImage<T>;
    type Params = DilateParams<T>;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Dilate"
    }

    fn description(&self) -> &'static str {
        "Morphological dilation (maximum filter over structuring element)"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        let mask = params.element.to_mask(input.rank())?;
        let mut out = input.like();
        dilate(&input, &mask, &mut out)?;
        Ok(out)
    }
}

/// Perform morphological dilation on an image
///
/// Dilation is the scatter dual of [`erode`](super::erode): the
/// output is seeded with `T::MIN` and every cell pushes its value to each of
/// its structuring-element neighbors, keeping the per-target maximum.
/// Targets falling outside the image are clamped componentwise
/// (nearest-neighbour extension), which makes the scatter agree with a
/// nearest-extended gather for symmetric elements. Boolean images reduce to
/// binary dilation (logical OR over the neighborhood).
///
/// # Arguments
/// * `a` - Input image
/// * `bc` - Structuring element mask, same rank and cell type as `a`
/// * `out` - Pre-allocated output, same shape as `a`
pub fn dilate<T: MorphElement>(
    a: &NdImage<T>,
    bc: &NdImage<T>,
    out: &mut NdImage<T>,
) -> Result<()> {
    validate(a, bc, out)?;

    let offsets = neighbours(bc, true);
    let shape = a.shape().to_vec();
    let mut pos = vec![0usize; a.rank()];

    out.fill(T::min_value());

    for i in 0..a.size() {
        let value = a.at_flat(i);
        for delta in &offsets {
            let npos = out.clamped(&pos, delta);
            if value > out.at(&npos) {
                out.set_at(&npos, value);
            }
        }
        advance_position(&mut pos, &shape);
    }

    Ok(())
}

fn validate<T: MorphElement>(a: &NdImage<T>, bc: &NdImage<T>, out: &NdImage<T>) -> Result<()> {
    if bc.rank() != a.rank() {
        return Err(Error::RankMismatch {
            image: a.rank(),
            element: bc.rank(),
        });
    }
    if !a.same_shape(out) {
        return Err(Error::ShapeMismatch {
            expected: a.shape().to_vec(),
            actual: out.shape().to_vec(),
        });
    }
    Ok(())
}
