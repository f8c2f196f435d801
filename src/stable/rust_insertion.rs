use crate::dual_pivot::{self, Thresholds};

sort_impl!("rust_insertion_stable");

/// Quadratic, only meant as a baseline on small inputs.
#[inline]
pub fn sort(v: &mut [i32], _thresholds: &Thresholds) {
    dual_pivot::insertion_sort(v);
}
