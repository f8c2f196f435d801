macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort(arr: &mut [i32]) {
                sort(arr, &$crate::dual_pivot::Thresholds::default());
            }
        }
    };
}

pub mod dual_pivot;
pub mod stable;
pub mod unstable;

pub mod datagen;
pub mod error;
pub mod input;
pub mod measure;
pub mod method;
pub mod report;
pub mod run;

pub use error::{Error, Result};
