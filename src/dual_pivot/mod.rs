//! Dual-pivot quicksort with tunable small-range cutoffs.
//!
//! The driver partitions with two pivots sampled from five evenly spaced elements, recurses into
//! the middle and right zones and iterates on the left zone. Ranges below the configured
//! thresholds go to insertion sort, or to mixed insertion sort when a placed pivot directly left
//! of the range can act as sentinel. Every call chain carries a recursion budget, once it runs out
//! the remaining range is heapsorted, which caps the worst case at *O*(*n* \* log(*n*)).

use std::cell::Cell;
use std::cmp::Ordering;
use std::ops::Range;

mod heapsort;
mod partition;
mod pivot;
mod smallsort;

pub use heapsort::heapsort;
pub use smallsort::insertion_sort;

use pivot::{Pivots, SAMPLE_COUNT};

/// Size cutoffs below which the driver stops partitioning.
///
/// Read-only for the duration of a sort call, every call takes its own copy of the configuration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Thresholds {
    /// Ranges shorter than this are insertion sorted.
    pub insertion: usize,
    /// Ranges shorter than this that were produced by a partition step are sorted with mixed
    /// insertion sort. Checked before `insertion`.
    pub mixed_insertion: usize,
}

impl Thresholds {
    pub const fn new(insertion: usize, mixed_insertion: usize) -> Self {
        Self {
            insertion,
            mixed_insertion,
        }
    }

    /// Shortest range the driver partitions. Pivot selection needs `SAMPLE_COUNT` distinct slots,
    /// so smaller insertion thresholds are raised to that.
    fn min_partition_len(&self) -> usize {
        self.insertion.max(SAMPLE_COUNT)
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::new(44, 65)
    }
}

/// Sorts `v` in place into non-decreasing order.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not allocate),
/// and *O*(*n* \* log(*n*)) worst-case.
pub fn sort(v: &mut [i32], thresholds: &Thresholds) {
    sort_with_thresholds(v, thresholds);
}

/// Sorts `v[range]` in place, leaving every element outside of `range` untouched.
///
/// # Panics
///
/// Panics if `range` is out of bounds for `v` or its start is past its end.
pub fn sort_range(v: &mut [i32], range: Range<usize>, thresholds: &Thresholds) {
    sort(&mut v[range], thresholds);
}

/// Sorts `v` like [`sort`] and returns the number of element comparisons performed.
pub fn sort_counting_comparisons(v: &mut [i32], thresholds: &Thresholds) -> u64 {
    let comparisons = Cell::new(0);
    let mut counted: Vec<Counted> = v
        .iter()
        .map(|&value| Counted {
            value,
            comparisons: &comparisons,
        })
        .collect();

    sort_with_thresholds(&mut counted, thresholds);

    for (dst, src) in v.iter_mut().zip(&counted) {
        *dst = src.value;
    }

    comparisons.get()
}

#[derive(Copy, Clone)]
struct Counted<'a> {
    value: i32,
    comparisons: &'a Cell<u64>,
}

impl PartialEq for Counted<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Counted<'_> {}

impl PartialOrd for Counted<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Counted<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.comparisons.set(self.comparisons.get() + 1);
        self.value.cmp(&other.value)
    }
}

fn sort_with_thresholds<T: Copy + Ord>(v: &mut [T], thresholds: &Thresholds) {
    let len = v.len();
    if len < 2 {
        return;
    }

    // Only checked once at the top, recursive calls would pay for it on every level.
    if len >= thresholds.min_partition_len() && is_presorted(v) {
        return;
    }

    quicksort(v, 0, len, true, recursion_budget(len), thresholds);
}

/// Number of partition steps a call chain may take before falling back to heapsort.
fn recursion_budget(len: usize) -> u32 {
    2 * (usize::BITS - len.leading_zeros())
}

/// Returns `true` if `v` was already sorted, or strictly descending and has been reversed.
fn is_presorted<T: Ord>(v: &mut [T]) -> bool {
    let len = v.len();
    let mut end = 1;

    if v[1] < v[0] {
        while end < len && v[end] < v[end - 1] {
            end += 1;
        }

        if end == len {
            v.reverse();
            return true;
        }
    } else {
        while end < len && v[end] >= v[end - 1] {
            end += 1;
        }

        if end == len {
            return true;
        }
    }

    false
}

/// Sorts `v[low..high]`.
///
/// If `leftmost` is false, `v[low - 1]` is not greater than any element of the range. `budget` is
/// the number of partition steps left for this call chain.
fn quicksort<T: Copy + Ord>(
    v: &mut [T],
    low: usize,
    mut high: usize,
    leftmost: bool,
    mut budget: u32,
    thresholds: &Thresholds,
) {
    loop {
        let size = high - low;

        if !leftmost && size < thresholds.mixed_insertion {
            smallsort::mixed_insertion_sort(v, low, high);
            return;
        }

        if size < thresholds.min_partition_len() {
            insertion_sort(&mut v[low..high]);
            return;
        }

        if budget == 0 {
            log::trace!("recursion budget exhausted, heapsorting {size} elements");
            heapsort(&mut v[low..high]);
            return;
        }
        budget -= 1;

        match pivot::choose(v, low, high) {
            Pivots::Dual {
                pivot1,
                pivot1_at,
                pivot2,
                pivot2_at,
            } => {
                let (lower, upper) =
                    partition::dual(v, low, high, (pivot1, pivot1_at), (pivot2, pivot2_at));

                // The pivots at `lower` and `upper` are in their final position and serve as
                // sentinels for the zones to their right.
                quicksort(v, lower + 1, upper, false, budget, thresholds);
                quicksort(v, upper + 1, high, false, budget, thresholds);
                high = lower;
            }
            Pivots::Single { pivot, pivot_at } => {
                let (lower, upper) = partition::single(v, low, high, (pivot, pivot_at));

                // The central zone only holds elements equal to the pivot.
                quicksort(v, upper, high, false, budget, thresholds);
                high = lower;
            }
        }
    }
}
