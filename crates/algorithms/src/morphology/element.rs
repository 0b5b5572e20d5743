//! Structuring element definitions for morphological operations
//!
//! A structuring element defines the neighborhood shape used by every
//! operator in this crate. A cell participates in the neighborhood iff its
//! value is nonzero; the mask's centre is `shape / 2` componentwise.

use ndmorph_core::image::advance_position;
use ndmorph_core::{Error, MorphElement, NdImage, Result};

/// Shape of a structuring element for morphological operations
#[derive(Debug, Clone, PartialEq)]
pub enum StructuringElement<T: MorphElement> {
    /// Axis cross: the centre plus one cell each way along every axis
    /// (4-connectivity in 2-D, 6-connectivity in 3-D)
    Cross,
    /// Full hypercube of given radius (side = 2*radius + 1)
    Box(usize),
    /// User-provided mask; nonzero cells are members
    Custom(NdImage<T>),
}

impl<T: MorphElement> Default for StructuringElement<T> {
    fn default() -> Self {
        StructuringElement::Cross
    }
}

impl<T: MorphElement> StructuringElement<T> {
    /// Validate the structuring element, returning an error for invalid configurations
    pub fn validate(&self) -> Result<()> {
        match self {
            StructuringElement::Cross => Ok(()),
            StructuringElement::Box(r) => {
                if *r == 0 {
                    return Err(Error::InvalidParameter {
                        name: "radius",
                        value: "0".to_string(),
                        reason: "structuring element radius must be at least 1".to_string(),
                    });
                }
                Ok(())
            }
            StructuringElement::Custom(mask) => {
                if mask.is_empty() {
                    return Err(Error::InvalidParameter {
                        name: "custom_mask",
                        value: "empty".to_string(),
                        reason: "custom mask must not be empty".to_string(),
                    });
                }
                Ok(())
            }
        }
    }

    /// Materialize the mask for an image of the given rank
    pub fn to_mask(&self, rank: usize) -> Result<NdImage<T>> {
        self.validate()?;
        if rank == 0 {
            return Err(Error::InvalidParameter {
                name: "rank",
                value: "0".to_string(),
                reason: "images must have rank at least 1".to_string(),
            });
        }
        match self {
            StructuringElement::Cross => Ok(cross_element(rank)),
            StructuringElement::Box(r) => Ok(box_element(rank, *r)),
            StructuringElement::Custom(mask) => {
                if mask.rank() != rank {
                    return Err(Error::RankMismatch {
                        image: rank,
                        element: mask.rank(),
                    });
                }
                Ok(mask.clone())
            }
        }
    }
}

/// Cross-shaped mask: the centre plus its 2*rank axis neighbours
pub fn cross_element<T: MorphElement>(rank: usize) -> NdImage<T> {
    let mut mask = NdImage::new(&vec![3; rank]);
    let centre = vec![1usize; rank];
    mask.set_at(&centre, T::one());
    for d in 0..rank {
        for v in [0, 2] {
            let mut pos = centre.clone();
            pos[d] = v;
            mask.set_at(&pos, T::one());
        }
    }
    mask
}

/// Hypercube mask of side 2*radius + 1, all cells set
pub fn box_element<T: MorphElement>(rank: usize, radius: usize) -> NdImage<T> {
    NdImage::filled(&vec![2 * radius + 1; rank], T::one())
}

/// Centre of a structuring element: `shape / 2` componentwise
pub fn centre_of<T: MorphElement>(bc: &NdImage<T>) -> Vec<usize> {
    bc.shape().iter().map(|&s| s / 2).collect()
}

/// Offsets of the nonzero cells of `bc` relative to its centre, in row-major
/// order. The centre cell itself is listed only when `include_centre` is set.
pub fn neighbours<T: MorphElement>(bc: &NdImage<T>, include_centre: bool) -> Vec<Vec<isize>> {
    let centre = centre_of(bc);
    let mut offsets = Vec::new();
    let mut pos = vec![0usize; bc.rank()];
    for i in 0..bc.size() {
        if bc.at_flat(i).is_set() && (include_centre || pos != centre) {
            offsets.push(
                pos.iter()
                    .zip(&centre)
                    .map(|(&p, &c)| p as isize - c as isize)
                    .collect(),
            );
        }
        advance_position(&mut pos, bc.shape());
    }
    offsets
}
