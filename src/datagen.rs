//! Generation of gzip compressed benchmark inputs.
//!
//! Layout of the output directory:
//!
//! ```text
//! <output>/details.txt
//! <output>/<pattern>/<i>.dat.gz    one file per size, i counting from 0
//! ```

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;
use rand::prelude::*;

use crate::{Error, Result};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Pattern {
    Ascending,
    Descending,
    Random,
    SingleNum,
    PipeOrgan,
    SawMixed,
}

impl Pattern {
    pub const ALL: [Pattern; 6] = [
        Pattern::Ascending,
        Pattern::Descending,
        Pattern::Random,
        Pattern::SingleNum,
        Pattern::PipeOrgan,
        Pattern::SawMixed,
    ];

    /// Name of the pattern's directory.
    pub fn name(self) -> &'static str {
        match self {
            Pattern::Ascending => "ascending",
            Pattern::Descending => "descending",
            Pattern::Random => "random",
            Pattern::SingleNum => "single_num",
            Pattern::PipeOrgan => "pipe_organ",
            Pattern::SawMixed => "saw_mixed",
        }
    }

    /// Values of random patterns are drawn from `0..=bound`.
    fn generate(self, len: usize, bound: i32, rng: &mut StdRng) -> Vec<i32> {
        let mut random = || -> Vec<i32> { (0..len).map(|_| rng.gen_range(0..=bound)).collect() };

        match self {
            Pattern::Ascending => (0..len as i32).collect(),
            Pattern::Descending => (0..len as i32).rev().collect(),
            Pattern::Random => random(),
            Pattern::SingleNum => vec![42; len],
            Pattern::PipeOrgan => {
                let mut v = random();
                let (first_half, second_half) = v.split_at_mut(len / 2);
                first_half.sort_unstable();
                second_half.sort_unstable_by(|a, b| b.cmp(a));
                v
            }
            Pattern::SawMixed => {
                let mut v = random();
                let saw_count = (len.max(2) as f64).log2().round() as usize;
                let chunk_size = (len / saw_count).max(1);

                for (i, chunk) in v.chunks_mut(chunk_size).enumerate() {
                    if i % 2 == 0 {
                        chunk.sort_unstable();
                    } else {
                        chunk.sort_unstable_by(|a, b| b.cmp(a));
                    }
                }
                v
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataGen {
    pub output: PathBuf,
    pub min: usize,
    pub max: usize,
    pub increment: usize,
    /// Replace an existing output directory.
    pub force: bool,
}

impl DataGen {
    /// Element counts of the generated files, `min` up to and including `max`.
    pub fn sizes(&self) -> impl Iterator<Item = usize> {
        (self.min..=self.max).step_by(self.increment.max(1))
    }

    pub fn generate(&self) -> Result<()> {
        if self.max <= self.min || self.increment == 0 {
            return Err(Error::InvalidSizeRange {
                min: self.min,
                max: self.max,
                increment: self.increment,
            });
        }

        self.prepare_output()?;

        let seed = sort_test_tools::patterns::random_init_seed();
        log::info!("generating into {} with seed {seed}", self.output.display());

        let mut rng = StdRng::seed_from_u64(seed);
        let bound = i32::try_from(self.max.saturating_add(self.increment)).unwrap_or(i32::MAX);

        for pattern in Pattern::ALL {
            let dir = self.output.join(pattern.name());
            fs::create_dir(&dir).map_err(|e| Error::io(&dir, e))?;

            for (i, size) in self.sizes().enumerate() {
                let data = pattern.generate(size, bound, &mut rng);
                write_gz(&dir.join(format!("{i}.dat.gz")), &data)?;
            }

            log::info!("wrote {} files to {}", self.sizes().count(), dir.display());
        }

        let details = self.output.join("details.txt");
        fs::write(
            &details,
            format!(
                "MIN_ELEMENTS: {}\nMAX_ELEMENTS: {}\nINCREMENT: {}\n",
                self.min, self.max, self.increment
            ),
        )
        .map_err(|e| Error::io(&details, e))
    }

    fn prepare_output(&self) -> Result<()> {
        let output = &self.output;

        if output.exists() && !self.force {
            return Err(Error::OutputExists {
                path: output.clone(),
            });
        }
        if output.is_file() {
            return Err(Error::NotADirectory {
                path: output.clone(),
            });
        }

        if output.exists() {
            log::warn!("removing existing {}", output.display());
            fs::remove_dir_all(output).map_err(|e| Error::io(output, e))?;
        }

        fs::create_dir_all(output).map_err(|e| Error::io(output, e))
    }
}

fn write_gz(path: &Path, data: &[i32]) -> Result<()> {
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::default());

    for x in data {
        writeln!(encoder, "{x}").map_err(|e| Error::io(path, e))?;
    }

    encoder
        .finish()
        .and_then(|mut writer| writer.flush())
        .map_err(|e| Error::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input;

    fn datagen(output: PathBuf) -> DataGen {
        DataGen {
            output,
            min: 10,
            max: 30,
            increment: 10,
            force: false,
        }
    }

    #[test]
    fn sizes_include_max() {
        let dir = tempfile::tempdir().unwrap();
        let config = datagen(dir.path().join("data"));
        assert_eq!(config.sizes().collect::<Vec<_>>(), [10, 20, 30]);
    }

    #[test]
    fn generates_all_patterns() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("data");
        datagen(output.clone()).generate().unwrap();

        for pattern in Pattern::ALL {
            for (i, size) in [10, 20, 30].into_iter().enumerate() {
                let path = output.join(pattern.name()).join(format!("{i}.dat.gz"));
                let data = input::load(&path).unwrap();
                assert_eq!(data.len(), size, "{}", path.display());

                match pattern {
                    Pattern::Ascending => assert!(data.windows(2).all(|w| w[0] < w[1])),
                    Pattern::Descending => assert!(data.windows(2).all(|w| w[0] > w[1])),
                    Pattern::SingleNum => assert!(data.iter().all(|&x| x == 42)),
                    _ => assert!(data.iter().all(|&x| (0..=40).contains(&x))),
                }
            }
        }

        let details = fs::read_to_string(output.join("details.txt")).unwrap();
        assert!(details.contains("MAX_ELEMENTS: 30"));
    }

    #[test]
    fn existing_output_requires_force() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("data");
        fs::create_dir(&output).unwrap();
        fs::write(output.join("stale.txt"), "").unwrap();

        let mut config = datagen(output.clone());
        assert!(matches!(config.generate(), Err(Error::OutputExists { .. })));

        config.force = true;
        config.generate().unwrap();
        assert!(!output.join("stale.txt").exists());
        assert!(output.join("random").join("2.dat.gz").exists());
    }

    #[test]
    fn output_must_be_directory() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("data");
        fs::write(&output, "").unwrap();

        let mut config = datagen(output);
        config.force = true;
        assert!(matches!(config.generate(), Err(Error::NotADirectory { .. })));
    }

    #[test]
    fn invalid_ranges() {
        let dir = tempfile::tempdir().unwrap();

        for (min, max, increment) in [(10, 10, 1), (20, 10, 1), (0, 10, 0)] {
            let config = DataGen {
                output: dir.path().join("data"),
                min,
                max,
                increment,
                force: false,
            };
            assert!(matches!(
                config.generate(),
                Err(Error::InvalidSizeRange { .. })
            ));
        }
    }
}
