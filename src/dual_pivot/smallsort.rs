//! Small-range sorts used as base cases of the dual-pivot driver.

/// Sorts `v` with plain insertion sort.
///
/// Quadratic, but with the lowest overhead of everything in this crate for short slices.
pub fn insertion_sort<T: Copy + Ord>(v: &mut [T]) {
    for i in 1..v.len() {
        let x = v[i];
        let mut j = i;

        while j > 0 && x < v[j - 1] {
            v[j] = v[j - 1];
            j -= 1;
        }

        v[j] = x;
    }
}

/// Sorts `v[low..high]` with a combination of pin insertion sort and pair insertion sort.
///
/// The inner loops are unguarded: `v[low - 1]` must exist and must not be greater than any element
/// of `v[low..high]`. Every range carved out right of a placed pivot satisfies this.
pub(super) fn mixed_insertion_sort<T: Copy + Ord>(v: &mut [T], low: usize, high: usize) {
    debug_assert!(low > 0 && low <= high);
    debug_assert!(v[low..high].iter().all(|x| v[low - 1] <= *x));

    let size = high - low;
    // Length of the tail finished by pair insertion, always even.
    let end = high - 3 * ((size >> 5) << 3);

    if end == high {
        for i in (low + 1)..high {
            let ai = v[i];
            let mut j = i;

            while ai < v[j - 1] {
                v[j] = v[j - 1];
                j -= 1;
            }

            v[j] = ai;
        }

        return;
    }

    // Pin insertion sort on the head. Elements larger than the pin belong to the tail, so instead
    // of dragging them through the sorted head they are exchanged with small elements found
    // scanning backward from the end.
    let pin = v[end];
    let mut p = high;
    let mut cur = low;

    loop {
        cur += 1;
        if cur >= end {
            break;
        }

        let mut i = cur;
        let mut ai = v[i];

        if ai < v[i - 1] {
            i -= 1;
            v[i + 1] = v[i];

            loop {
                i -= 1;
                if ai >= v[i] {
                    break;
                }
                v[i + 1] = v[i];
            }

            v[i + 1] = ai;
        } else if p > i && ai > pin {
            // The pin itself, or at the latest the sentinel, stops this scan.
            loop {
                p -= 1;
                if v[p] <= pin {
                    break;
                }
            }

            if p > i {
                ai = v[p];
                v[p] = v[i];
            }

            loop {
                i -= 1;
                if ai >= v[i] {
                    break;
                }
                v[i + 1] = v[i];
            }

            v[i + 1] = ai;
        }
    }

    // Pair insertion sort on the tail: insert the larger of two elements first, then continue
    // with the smaller one from where the larger one landed.
    while cur < high {
        let mut i = cur;
        let a1 = v[i];
        let a2 = v[i + 1];
        cur += 1;

        if a1 > a2 {
            loop {
                i -= 1;
                if a1 >= v[i] {
                    break;
                }
                v[i + 2] = v[i];
            }

            i += 1;
            v[i + 1] = a1;

            loop {
                i -= 1;
                if a2 >= v[i] {
                    break;
                }
                v[i + 1] = v[i];
            }

            v[i + 1] = a2;
        } else if a1 < v[i - 1] {
            loop {
                i -= 1;
                if a2 >= v[i] {
                    break;
                }
                v[i + 2] = v[i];
            }

            i += 1;
            v[i + 1] = a2;

            loop {
                i -= 1;
                if a1 >= v[i] {
                    break;
                }
                v[i + 1] = v[i];
            }

            v[i + 1] = a1;
        }

        cur += 1;
    }
}
