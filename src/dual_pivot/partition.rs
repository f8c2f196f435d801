//! In-place partitioning around the pivots picked by [`super::pivot::choose`].

/// Partitions `v[low..high]` into three zones around `pivot1 < pivot2`.
///
/// `pivot1_at` and `pivot2_at` are the slots the pivots were sampled from, and a slot strictly
/// between them must hold a value in `[pivot1, pivot2]`.
///
/// Returns `(lower, upper)` such that
///
/// ```text
/// v[low..lower]        < pivot1 == v[lower]
/// v[lower + 1..upper] in [pivot1, pivot2]
/// v[upper]            == pivot2 < v[upper + 1..high]
/// ```
pub(super) fn dual<T: Copy + Ord>(
    v: &mut [T],
    low: usize,
    high: usize,
    (pivot1, pivot1_at): (T, usize),
    (pivot2, pivot2_at): (T, usize),
) -> (usize, usize) {
    debug_assert!(pivot1 < pivot2);
    debug_assert!(low <= pivot1_at && pivot1_at < pivot2_at && pivot2_at < high);

    let end = high - 1;

    // The first and last slots take over the pivot slots and become holes, the pivots are
    // dropped back into them once the boundaries are known.
    v[pivot1_at] = v[low];
    v[pivot2_at] = v[end];

    let mut lower = low;
    let mut upper = end;

    // Skip elements that are already in their zone.
    loop {
        lower += 1;
        if v[lower] >= pivot1 {
            break;
        }
    }
    loop {
        upper -= 1;
        if v[upper] <= pivot2 {
            break;
        }
    }

    // Backward three-interval partitioning.
    //
    //   left part          unknown        central part            right part
    // +-------------------------------------------------------------------------+
    // |   < pivot1   |        ?        |  pivot1 <= && <= pivot2  |  > pivot2   |
    // +-------------------------------------------------------------------------+
    //                ^                 ^                          ^
    //              lower               k                        upper
    //
    // All in (low, lower] < pivot1, all in (k, upper) within the pivots, all in [upper, end)
    // > pivot2.
    lower -= 1;
    upper += 1;
    let mut k = upper;

    loop {
        k -= 1;
        if k <= lower {
            break;
        }

        let ak = v[k];

        if ak < pivot1 {
            while lower < k {
                lower += 1;

                if v[lower] >= pivot1 {
                    if v[lower] > pivot2 {
                        upper -= 1;
                        v[k] = v[upper];
                        v[upper] = v[lower];
                    } else {
                        v[k] = v[lower];
                    }

                    v[lower] = ak;
                    break;
                }
            }
        } else if ak > pivot2 {
            upper -= 1;
            v[k] = v[upper];
            v[upper] = ak;
        }
    }

    v[low] = v[lower];
    v[lower] = pivot1;
    v[end] = v[upper];
    v[upper] = pivot2;

    (lower, upper)
}

/// Partitions `v[low..high]` around a single pivot, grouping all elements equal to it.
///
/// `pivot_at` is the slot the pivot was sampled from. Returns `(lower, upper)` such that
///
/// ```text
/// v[low..lower]   < pivot
/// v[lower..upper] == pivot
/// v[upper..high]  > pivot
/// ```
pub(super) fn single<T: Copy + Ord>(
    v: &mut [T],
    low: usize,
    high: usize,
    (pivot, pivot_at): (T, usize),
) -> (usize, usize) {
    debug_assert!(low <= pivot_at && pivot_at < high);

    v[pivot_at] = v[low];

    // Dutch national flag partitioning, scanning backward.
    //
    //   left part      unknown      central part    right part
    // +--------------------------------------------------------+
    // |  < pivot  |       ?       |  == pivot  |    > pivot    |
    // +--------------------------------------------------------+
    //             ^               ^            ^
    //           lower             k          upper
    let mut lower = low;
    let mut upper = high;
    let mut k = upper;

    loop {
        k -= 1;
        if k <= lower {
            break;
        }

        let ak = v[k];

        if ak != pivot {
            v[k] = pivot;

            if ak < pivot {
                // `v[k]` now equals the pivot and stops the scan.
                loop {
                    lower += 1;
                    if v[lower] >= pivot {
                        break;
                    }
                }

                if v[lower] > pivot {
                    upper -= 1;
                    v[upper] = v[lower];
                }

                v[lower] = ak;
            } else {
                upper -= 1;
                v[upper] = ak;
            }
        }
    }

    v[low] = v[lower];
    v[lower] = pivot;

    (lower, upper)
}
