use crate::dual_pivot::{self, Thresholds};

sort_impl!("rust_heapsort_unstable");

#[inline]
pub fn sort(v: &mut [i32], _thresholds: &Thresholds) {
    dual_pivot::heapsort(v);
}
