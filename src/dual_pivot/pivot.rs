use std::array;

use super::smallsort::insertion_sort;

/// Number of elements sampled for pivot selection.
pub(super) const SAMPLE_COUNT: usize = 5;

/// Outcome of pivot selection for one partition step. Every pivot comes with the index of the
/// sampled slot holding it, the partition step reuses that slot as scratch.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(super) enum Pivots<T> {
    /// `pivot1 < pivot2`.
    Dual {
        pivot1: T,
        pivot1_at: usize,
        pivot2: T,
        pivot2_at: usize,
    },
    /// The candidates for pivot1 and pivot2 were equal, which hints at many duplicates.
    Single { pivot: T, pivot_at: usize },
}

/// Sample indices for `v[low..high]`, one in the middle of each fifth of the range.
pub(super) fn sample_positions(low: usize, high: usize) -> [usize; SAMPLE_COUNT] {
    let size = high - low;
    debug_assert!(size >= SAMPLE_COUNT);

    let stride = size / SAMPLE_COUNT;
    let first = low + stride / 2;

    array::from_fn(|i| first + i * stride)
}

/// Sorts the sampled elements of `v[low..high]` in place and picks the pivots.
///
/// The sampled slots are written back in sorted order. The middle sample therefore lies strictly
/// between the two pivot slots and holds a value in `[pivot1, pivot2]`, which partitioning relies
/// on to bound its initial scans.
pub(super) fn choose<T: Copy + Ord>(v: &mut [T], low: usize, high: usize) -> Pivots<T> {
    let at = sample_positions(low, high);
    let mut sample = at.map(|i| v[i]);

    insertion_sort(&mut sample);
    for (&i, &x) in at.iter().zip(sample.iter()) {
        v[i] = x;
    }

    if sample[1] < sample[3] {
        Pivots::Dual {
            pivot1: sample[1],
            pivot1_at: at[1],
            pivot2: sample[3],
            pivot2_at: at[3],
        }
    } else {
        Pivots::Single {
            pivot: sample[2],
            pivot_at: at[2],
        }
    }
}
