//! Priority-queue flood for the marker-controlled watershed

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::marker::PhantomData;

use ndmorph_core::image::advance_position;
use ndmorph_core::{Algorithm, Error, MorphElement, NdImage, Result};

use crate::morphology::element::{neighbours, StructuringElement};

/// A queued cell, ordered by cost with an insertion-sequence tie-break
/// (min-heap via reversed comparisons).
#[derive(Debug, Clone)]
struct MarkerInfo<T> {
    cost: T,
    seq: u64,
    flat: usize,
    margin: isize,
}

impl<T: Ord> PartialEq for MarkerInfo<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.seq == other.seq
    }
}

impl<T: Ord> Eq for MarkerInfo<T> {}

impl<T: Ord> PartialOrd for MarkerInfo<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> Ord for MarkerInfo<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse: lower cost has higher priority, earlier insertion wins ties
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// A structuring-element neighbor with its flat-index delta and the
/// Chebyshev magnitude used as a margin threshold
#[derive(Debug, Clone)]
struct NeighbourElem {
    delta: isize,
    chebyshev: isize,
    offset: Vec<isize>,
}

/// Parameters for the marker-controlled watershed
#[derive(Debug, Clone)]
pub struct WatershedParams<T: MorphElement> {
    /// Structuring element defining flood connectivity
    pub element: StructuringElement<T>,
    /// Whether to also report watershed ridge lines
    pub return_lines: bool,
}

impl<T: MorphElement> Default for WatershedParams<T> {
    fn default() -> Self {
        Self {
            element: StructuringElement::default(),
            return_lines: false,
        }
    }
}

/// Watershed algorithm
#[derive(Debug, Clone, Default)]
pub struct Watershed<T: MorphElement>(PhantomData<T>);

impl<T: MorphElement> Algorithm for Watershed<T> {
    /// Cost image and marker image of the same shape and cell type
    type Input = (NdImage<T>, NdImage<T>);
    type Output = (NdImage<T>, Option<NdImage<bool>>);
    type Params = WatershedParams<T>;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Watershed"
    }

    fn description(&self) -> &'static str {
        "Marker-controlled watershed flooding over a cost image"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        let (cost, markers) = input;
        let mask = params.element.to_mask(cost.rank())?;
        cwatershed(&cost, &markers, &mask, params.return_lines)
    }
}

/// Flood a cost image from labeled markers
///
/// Every nonzero cell of `markers` seeds the flood with its label. Cells are
/// finalized in order of increasing cost, FIFO within equal cost, and each
/// finalized cell propagates its label to any neighbor it reaches at a
/// strictly lower cost than previously recorded there. With `return_lines`,
/// a cell first re-reached at no improvement from a differently labeled
/// region is recorded as a ridge.
///
/// Each queue entry carries the popped cell's boundary margin; a neighbor
/// whose Chebyshev magnitude fits inside that margin is provably in bounds
/// and skips the n-dimensional bounds check. When the fast path fails the
/// margin is recomputed from the full position rather than trusted, because
/// flat-index arithmetic can wrap to a valid but wrong cell near the
/// boundary.
///
/// # Arguments
/// * `a` - Cost image
/// * `markers` - Marker labels, same shape and cell type as `a`; zero means
///   no marker
/// * `bc` - Structuring element mask defining connectivity
/// * `return_lines` - Whether to report ridge cells as a second output
///
/// # Returns
/// The label image, and the ridge mask when `return_lines` is set
pub fn cwatershed<T: MorphElement>(
    a: &NdImage<T>,
    markers: &NdImage<T>,
    bc: &NdImage<T>,
    return_lines: bool,
) -> Result<(NdImage<T>, Option<NdImage<bool>>)> {
    if !a.same_shape(markers) {
        return Err(Error::ShapeMismatch {
            expected: a.shape().to_vec(),
            actual: markers.shape().to_vec(),
        });
    }
    if bc.rank() != a.rank() {
        return Err(Error::RankMismatch {
            image: a.rank(),
            element: bc.rank(),
        });
    }

    // Neighbor descriptors from the nonzero, non-centre cells of bc
    let neighbour_elems: Vec<NeighbourElem> = neighbours(bc, false)
        .into_iter()
        .map(|offset| NeighbourElem {
            delta: a.pos_to_flat(&offset),
            chebyshev: offset.iter().map(|&d| d.abs()).max().unwrap_or(0),
            offset,
        })
        .collect();

    let n = a.size();
    let mut cost = vec![T::max_value(); n];
    let mut status = vec![false; n];
    let mut res: NdImage<T> = NdImage::new(a.shape());
    let mut lines: Option<NdImage<bool>> = return_lines.then(|| NdImage::new(a.shape()));

    // Seed the queue from every marker cell
    let mut heap: BinaryHeap<MarkerInfo<T>> = BinaryHeap::new();
    let mut seq: u64 = 0;
    let shape = a.shape().to_vec();
    let mut pos = vec![0usize; a.rank()];
    for i in 0..n {
        let label = markers.at_flat(i);
        if label.is_set() {
            heap.push(MarkerInfo {
                cost: a.at_flat(i),
                seq,
                flat: i,
                margin: a.margin(&pos) as isize,
            });
            seq += 1;
            res.set_flat(i, label);
            cost[i] = a.at_flat(i);
        }
        advance_position(&mut pos, &shape);
    }

    while let Some(next) = heap.pop() {
        if status[next.flat] {
            continue;
        }
        status[next.flat] = true;

        for neighbour in &neighbour_elems {
            let mut nmargin = next.margin - neighbour.chebyshev;
            if nmargin < 0 {
                let p = a.flat_to_pos(next.flat);
                let Some(npos) = a.offset_within(&p, &neighbour.offset) else {
                    continue;
                };
                nmargin = a.margin(&npos) as isize;
            }
            let nflat = (next.flat as isize + neighbour.delta) as usize;

            if status[nflat] {
                continue;
            }
            let ncost = a.at_flat(nflat);
            if ncost < cost[nflat] {
                cost[nflat] = ncost;
                res.set_flat(nflat, res.at_flat(next.flat));
                heap.push(MarkerInfo {
                    cost: ncost,
                    seq,
                    flat: nflat,
                    margin: nmargin,
                });
                seq += 1;
            } else if let Some(lines) = lines.as_mut() {
                if res.at_flat(next.flat) != res.at_flat(nflat) && !lines.at_flat(nflat) {
                    lines.set_flat(nflat, true);
                }
            }
        }
    }

    Ok((res, lines))
}
