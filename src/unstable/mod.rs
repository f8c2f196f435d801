pub mod rust_dual_pivot;
pub mod rust_heapsort;
pub mod rust_std;
