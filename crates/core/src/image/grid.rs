//! Main NdImage type

use crate::error::{Error, Result};
use crate::image::MorphElement;
use ndarray::{ArrayD, IxDyn};
use num_traits::NumCast;

/// A dense n-dimensional image grid.
///
/// `NdImage<T>` stores values of type `T` in row-major order with rank >= 1.
/// The backing buffer is always contiguous in standard (C) layout, which the
/// constructors enforce, so every cell is addressable both by an n-tuple
/// position and by a flat index.
///
/// # Type Parameters
///
/// - `T`: The cell value type, must implement [`MorphElement`]
///
/// # Example
///
/// ```
/// use ndmorph_core::NdImage;
///
/// // Create a 10x20 image filled with zeros
/// let mut image: NdImage<u8> = NdImage::new(&[10, 20]);
///
/// image.set(&[3, 7], 42).unwrap();
/// assert_eq!(image.get(&[3, 7]).unwrap(), 42);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NdImage<T: MorphElement> {
    /// Image data stored in row-major order
    data: ArrayD<T>,
}

impl<T: MorphElement> NdImage<T> {
    /// Create a new image filled with the zero value
    pub fn new(shape: &[usize]) -> Self {
        Self {
            data: ArrayD::from_elem(IxDyn(shape), T::zero()),
        }
    }

    /// Create a new image filled with a specific value
    pub fn filled(shape: &[usize], value: T) -> Self {
        Self {
            data: ArrayD::from_elem(IxDyn(shape), value),
        }
    }

    /// Create an image from existing row-major data
    pub fn from_vec(shape: &[usize], data: Vec<T>) -> Result<Self> {
        let array = ArrayD::from_shape_vec(IxDyn(shape), data).map_err(|_| {
            Error::InvalidDimensions {
                shape: shape.to_vec(),
            }
        })?;
        Ok(Self { data: array })
    }

    /// Create an image from an ndarray; the array must be in standard layout
    pub fn from_array(data: ArrayD<T>) -> Result<Self> {
        if !data.is_standard_layout() {
            return Err(Error::Other(
                "NdImage requires standard (row-major) layout".to_string(),
            ));
        }
        Ok(Self { data })
    }

    /// Create a zeroed image of the same shape but a different cell type
    pub fn like<U: MorphElement>(&self) -> NdImage<U> {
        NdImage::new(self.shape())
    }

    // Dimensions

    /// Number of axes
    pub fn rank(&self) -> usize {
        self.data.ndim()
    }

    /// Extent along each axis
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// Extent along axis `d`
    pub fn dim(&self, d: usize) -> usize {
        self.data.shape()[d]
    }

    /// Total number of cells
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Whether the image has no cells
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether another image has the same shape
    pub fn same_shape<U: MorphElement>(&self, other: &NdImage<U>) -> bool {
        self.shape() == other.shape()
    }

    // Data access

    /// Get value at a position
    pub fn get(&self, pos: &[usize]) -> Result<T> {
        self.data
            .get(pos)
            .copied()
            .ok_or_else(|| Error::PositionOutOfBounds {
                position: pos.to_vec(),
                shape: self.shape().to_vec(),
            })
    }

    /// Set value at a position
    pub fn set(&mut self, pos: &[usize], value: T) -> Result<()> {
        let shape = self.shape().to_vec();
        match self.data.get_mut(pos) {
            Some(cell) => {
                *cell = value;
                Ok(())
            }
            None => Err(Error::PositionOutOfBounds {
                position: pos.to_vec(),
                shape,
            }),
        }
    }

    /// Value at a position known to be in bounds
    ///
    /// Panics when the position is out of bounds; callers are expected to
    /// have gone through [`validposition`](Self::validposition) or
    /// [`clamped`](Self::clamped) first.
    pub fn at(&self, pos: &[usize]) -> T {
        self.data[pos]
    }

    /// Write a value at a position known to be in bounds
    pub fn set_at(&mut self, pos: &[usize], value: T) {
        self.data[pos] = value;
    }

    // The constructors enforce standard layout, so the flat views cannot fail.
    fn flat(&self) -> &[T] {
        self.data.as_slice().expect("standard layout")
    }

    fn flat_mut(&mut self) -> &mut [T] {
        self.data.as_slice_mut().expect("standard layout")
    }

    /// Value at a flat (row-major) index
    pub fn at_flat(&self, index: usize) -> T {
        self.flat()[index]
    }

    /// Write a value at a flat (row-major) index
    pub fn set_flat(&mut self, index: usize, value: T) {
        self.flat_mut()[index] = value;
    }

    /// Overwrite every cell with `value`
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// The cells in row-major order
    pub fn as_slice(&self) -> &[T] {
        self.flat()
    }

    /// The cells in row-major order, mutably
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.flat_mut()
    }

    /// Get a reference to the underlying array
    pub fn data(&self) -> &ArrayD<T> {
        &self.data
    }

    /// Consume the image and return the underlying array
    pub fn into_array(self) -> ArrayD<T> {
        self.data
    }

    // Position arithmetic

    /// Row-major strides, in cells
    fn flat_strides(&self) -> Vec<isize> {
        let shape = self.shape();
        let mut strides = vec![1isize; shape.len()];
        for d in (0..shape.len().saturating_sub(1)).rev() {
            strides[d] = strides[d + 1] * shape[d + 1] as isize;
        }
        strides
    }

    /// Flat-index delta of a signed position or offset.
    ///
    /// For a valid position this is its row-major flat index; for a relative
    /// offset it is the amount the flat index moves when the position moves
    /// by that offset.
    pub fn pos_to_flat(&self, pos: &[isize]) -> isize {
        pos.iter()
            .zip(self.flat_strides())
            .map(|(&p, s)| p * s)
            .sum()
    }

    /// Position of a flat (row-major) index
    pub fn flat_to_pos(&self, index: usize) -> Vec<usize> {
        let shape = self.shape();
        let mut pos = vec![0usize; shape.len()];
        let mut rem = index;
        for d in (0..shape.len()).rev() {
            pos[d] = rem % shape[d];
            rem /= shape[d];
        }
        pos
    }

    /// Whether a signed position lies inside the image
    pub fn validposition(&self, pos: &[isize]) -> bool {
        pos.len() == self.rank()
            && pos
                .iter()
                .zip(self.shape())
                .all(|(&p, &dim)| p >= 0 && (p as usize) < dim)
    }

    /// Minimum distance from a position to any image face
    pub fn margin(&self, pos: &[usize]) -> usize {
        pos.iter()
            .zip(self.shape())
            .map(|(&p, &dim)| p.min(dim - p - 1))
            .min()
            .unwrap_or(0)
    }

    /// Position displaced by `delta`, or `None` when it leaves the image
    pub fn offset_within(&self, pos: &[usize], delta: &[isize]) -> Option<Vec<usize>> {
        let mut npos = Vec::with_capacity(pos.len());
        for ((&p, &d), &dim) in pos.iter().zip(delta).zip(self.shape()) {
            let q = p as isize + d;
            if q < 0 || q as usize >= dim {
                return None;
            }
            npos.push(q as usize);
        }
        Some(npos)
    }

    /// Position displaced by `delta`, clamped componentwise into the image
    /// (nearest-neighbour boundary extension)
    pub fn clamped(&self, pos: &[usize], delta: &[isize]) -> Vec<usize> {
        pos.iter()
            .zip(delta)
            .zip(self.shape())
            .map(|((&p, &d), &dim)| (p as isize + d).clamp(0, dim as isize - 1) as usize)
            .collect()
    }

    // Statistics

    /// Calculate basic statistics (min, max, mean, cell count)
    pub fn statistics(&self) -> ImageStatistics<T>
    where
        T: NumCast,
    {
        let mut min = None;
        let mut max = None;
        let mut sum: f64 = 0.0;

        for &value in self.data.iter() {
            if min.is_none() || value < min.unwrap() {
                min = Some(value);
            }
            if max.is_none() || value > max.unwrap() {
                max = Some(value);
            }
            if let Some(v) = <f64 as NumCast>::from(value) {
                sum += v;
            }
        }

        let count = self.size();
        let mean = if count > 0 {
            Some(sum / count as f64)
        } else {
            None
        };

        ImageStatistics {
            min,
            max,
            mean,
            count,
        }
    }
}

/// Advance a row-major position odometer by one cell.
///
/// Returns `false` once the position wraps past the end of the image, so the
/// operators can walk positions in lockstep with a flat index without
/// reconstructing the n-tuple each step.
pub fn advance_position(pos: &mut [usize], shape: &[usize]) -> bool {
    for d in (0..shape.len()).rev() {
        pos[d] += 1;
        if pos[d] < shape[d] {
            return true;
        }
        pos[d] = 0;
    }
    false
}

/// Basic statistics for an image
#[derive(Debug, Clone)]
pub struct ImageStatistics<T> {
    pub min: Option<T>,
    pub max: Option<T>,
    pub mean: Option<f64>,
    pub count: usize,
}
