use crate::dual_pivot::Thresholds;

sort_impl!("rust_std_unstable");

#[inline]
pub fn sort(v: &mut [i32], _thresholds: &Thresholds) {
    v.sort_unstable();
}
