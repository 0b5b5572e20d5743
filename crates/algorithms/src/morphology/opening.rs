//! Morphological opening (erosion followed by dilation)
//!
//! Removes bright features smaller than the structuring element while
//! preserving the overall shape and size of larger bright regions.

use std::marker::PhantomData;

use ndmorph_core::{Algorithm, Error, MorphElement, NdImage, Result};

use super::dilate::dilate;
use super::element::StructuringElement;
use super::erode::erode;

/// Parameters for morphological opening
#[derive(Debug, Clone)]
pub struct OpeningParams<T: MorphElement> {
    /// Structuring element shape
    pub element: StructuringElement<T>,
}

impl<T: MorphElement> Default for OpeningParams<T> {
    fn default() -> Self {
        Self {
            element: StructuringElement::default(),
        }
    }
}

/// Opening algorithm
#[derive(Debug, Clone, Default)]
pub struct Opening<T: MorphElement>(PhantomData<T>);

impl<T: MorphElement> Algorithm for Opening<T> {
    type Input = NdImage<T>;
    type Output = NdImage<T>;
    type Params = OpeningParams<T>;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Opening"
    }

    fn description(&self) -> &'static str {
        "Morphological opening (erosion then dilation) to remove small bright features"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        let mask = params.element.to_mask(input.rank())?;
        opening(&input, &mask)
    }
}

/// Perform morphological opening on an image
///
/// Opening = erode then dilate. Removes bright features smaller than the
/// structuring element while preserving larger bright structures.
pub fn opening<T: MorphElement>(a: &NdImage<T>, bc: &NdImage<T>) -> Result<NdImage<T>> {
    let mut eroded = a.like();
    erode(a, bc, &mut eroded)?;
    let mut out = a.like();
    dilate(&eroded, bc, &mut out)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morphology::element::box_element;

    #[test]
    fn test_opening_uniform() {
        let a = NdImage::filled(&[9, 9], 5u8);
        let out = opening(&a, &box_element(2, 1)).unwrap();
        assert!(out.as_slice().iter().all(|&v| v == 5));
    }

    #[test]
    fn test_opening_removes_bright_spot() {
        let mut a = NdImage::filled(&[9, 9], 10u8);
        a.set(&[4, 4], 200).unwrap();
        let out = opening(&a, &box_element(2, 1)).unwrap();
        assert_eq!(
            out.get(&[4, 4]).unwrap(),
            10,
            "opening removes a single bright pixel"
        );
    }

    #[test]
    fn test_opening_preserves_large_bright_region() {
        let mut a = NdImage::filled(&[11, 11], 10u8);
        for r in 3..8 {
            for c in 3..8 {
                a.set(&[r, c], 200).unwrap();
            }
        }
        let out = opening(&a, &box_element(2, 1)).unwrap();
        assert_eq!(out.get(&[5, 5]).unwrap(), 200);
    }

    #[test]
    fn test_opening_idempotent_on_booleans() {
        // 3x3 block plus a lone pixel; the first pass drops the pixel and
        // keeps the block, the second pass changes nothing
        let mut a: NdImage<bool> = NdImage::new(&[8, 8]);
        for r in 2..5 {
            for c in 2..5 {
                a.set(&[r, c], true).unwrap();
            }
        }
        a.set(&[6, 6], true).unwrap();
        let bc = box_element::<bool>(2, 1);

        let once = opening(&a, &bc).unwrap();
        let twice = opening(&once, &bc).unwrap();
        assert!(!once.get(&[6, 6]).unwrap(), "lone pixel removed");
        assert!(once.get(&[3, 3]).unwrap(), "block survives");
        assert_eq!(
            once.as_slice(),
            twice.as_slice(),
            "opening an already-opened image is a no-op"
        );
    }
}
