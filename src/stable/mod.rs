pub mod rust_insertion;
pub mod rust_std;
