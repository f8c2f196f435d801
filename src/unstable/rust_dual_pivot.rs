use crate::dual_pivot::{self, Thresholds};

sort_impl!("rust_dual_pivot_unstable");

#[inline]
pub fn sort(v: &mut [i32], thresholds: &Thresholds) {
    dual_pivot::sort(v, thresholds);
}
