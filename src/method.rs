//! The set of sorting methods the harness can time.

use std::fmt;

use clap::ValueEnum;

use crate::dual_pivot::Thresholds;
use crate::{stable, unstable};

/// Shared contract of every method: sort the whole slice in place. Methods without tunable
/// cutoffs ignore the thresholds.
pub type SortFn = fn(&mut [i32], &Thresholds);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum Method {
    #[value(name = "DualPivotQuicksort", alias = "DualPartitionQuicksort")]
    DualPivotQuicksort,
    #[value(name = "InsertionSort")]
    InsertionSort,
    #[value(name = "HeapSort")]
    HeapSort,
    #[value(name = "StdUnstable")]
    StdUnstable,
    #[value(name = "StdStable")]
    StdStable,
}

impl Method {
    pub const ALL: [Method; 5] = [
        Method::DualPivotQuicksort,
        Method::InsertionSort,
        Method::HeapSort,
        Method::StdUnstable,
        Method::StdStable,
    ];

    /// Identifier written to the `method` column.
    pub fn name(self) -> &'static str {
        match self {
            Method::DualPivotQuicksort => "DualPivotQuicksort",
            Method::InsertionSort => "InsertionSort",
            Method::HeapSort => "HeapSort",
            Method::StdUnstable => "StdUnstable",
            Method::StdStable => "StdStable",
        }
    }

    /// Whether the configured thresholds change what this method does.
    pub fn uses_thresholds(self) -> bool {
        matches!(self, Method::DualPivotQuicksort)
    }

    pub fn sort_fn(self) -> SortFn {
        match self {
            Method::DualPivotQuicksort => unstable::rust_dual_pivot::sort,
            Method::InsertionSort => stable::rust_insertion::sort,
            Method::HeapSort => unstable::rust_heapsort::sort,
            Method::StdUnstable => unstable::rust_std::sort,
            Method::StdStable => stable::rust_std::sort,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Selection for `--show-methods`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum MethodType {
    Threshold,
    #[value(name = "nonthreshold")]
    NonThreshold,
    All,
}

impl MethodType {
    pub fn methods(self) -> impl Iterator<Item = Method> {
        Method::ALL.into_iter().filter(move |method| match self {
            MethodType::Threshold => method.uses_thresholds(),
            MethodType::NonThreshold => !method.uses_thresholds(),
            MethodType::All => true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse_back() {
        for method in Method::ALL {
            assert_eq!(Method::from_str(method.name(), false), Ok(method));
        }

        assert_eq!(
            Method::from_str("DualPartitionQuicksort", false),
            Ok(Method::DualPivotQuicksort)
        );
    }

    #[test]
    fn method_types_partition_all() {
        let threshold: Vec<_> = MethodType::Threshold.methods().collect();
        let nonthreshold: Vec<_> = MethodType::NonThreshold.methods().collect();

        assert_eq!(threshold, [Method::DualPivotQuicksort]);
        assert_eq!(nonthreshold.len() + threshold.len(), Method::ALL.len());
        assert_eq!(MethodType::All.methods().count(), Method::ALL.len());
    }

    #[test]
    fn every_method_sorts() {
        for method in Method::ALL {
            let mut v = vec![5, 3, 3, 1, 4, 1, 5, 9, 2, 6];
            (method.sort_fn())(&mut v, &Thresholds::new(4, 2));
            assert_eq!(v, [1, 1, 2, 3, 3, 4, 5, 5, 6, 9], "{method}");
        }
    }
}
