/// A sort implementation under test or benchmark, over the `i32` sequences the harness loads.
pub trait Sort {
    fn name() -> String;

    fn sort(arr: &mut [i32]);
}

pub mod patterns;
