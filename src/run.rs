//! One benchmark invocation: load the input, time repeated sorts, collect the results.

use std::hint::black_box;
use std::path::{self, Path};

use crate::dual_pivot::Thresholds;
use crate::input;
use crate::measure::{measure, Times};
use crate::method::Method;
use crate::report::Results;
use crate::{Error, Result};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Benchmark {
    pub method: Method,
    pub thresholds: Thresholds,
    pub runs: usize,
    /// Verify every sorted copy, failing with [`Error::Unsorted`].
    pub check: bool,
}

impl Benchmark {
    pub fn run(&self, input: &Path) -> Result<Results> {
        let data = input::load(input)?;
        let runs = self.time(&data)?;
        let input = path::absolute(input).map_err(|e| Error::io(input, e))?;

        Ok(Results {
            method: self.method,
            input,
            size: data.len(),
            threshold: self.thresholds.insertion,
            runs,
        })
    }

    /// Sorts a fresh copy of `data` once per run and measures each sort.
    pub fn time(&self, data: &[i32]) -> Result<Vec<Times>> {
        let sort = self.method.sort_fn();
        let mut runs = Vec::with_capacity(self.runs);

        for run in 0..self.runs {
            let mut v = data.to_vec();
            let times = measure(|| sort(black_box(&mut v), &self.thresholds));
            log::debug!("{} run {run}: {:?}", self.method, times.wall);

            if self.check && !v.windows(2).all(|w| w[0] <= w[1]) {
                return Err(Error::Unsorted {
                    method: self.method.to_string(),
                });
            }

            runs.push(times);
        }

        Ok(runs)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use sort_test_tools::patterns;

    use super::*;

    fn benchmark(method: Method, runs: usize) -> Benchmark {
        Benchmark {
            method,
            thresholds: Thresholds::new(4, 4),
            runs,
            check: true,
        }
    }

    #[test]
    fn one_result_per_run() {
        let data = patterns::random(1_000);

        for method in Method::ALL {
            let runs = benchmark(method, 3).time(&data).unwrap();
            assert_eq!(runs.len(), 3);
        }
    }

    #[test]
    fn zero_runs() {
        let runs = benchmark(Method::HeapSort, 0).time(&[3, 2, 1]).unwrap();
        assert!(runs.is_empty());
    }

    #[test]
    fn run_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.dat");
        fs::write(&path, "9\n8\n7\n1\n2\n3\n").unwrap();

        let results = benchmark(Method::DualPivotQuicksort, 2).run(&path).unwrap();

        assert_eq!(results.size, 6);
        assert_eq!(results.threshold, 4);
        assert_eq!(results.runs.len(), 2);
        assert!(results.input.is_absolute());
    }
}
