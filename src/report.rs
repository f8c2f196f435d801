//! CSV emission of timing results.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use csv::WriterBuilder;

use crate::measure::Times;
use crate::method::Method;
use crate::{Error, Result};

pub const HEADER: [&str; 7] = [
    "method",
    "input",
    "size",
    "threshold",
    "wall_nsecs",
    "user_nsecs",
    "system_nsecs",
];

/// Operator supplied columns appended verbatim to every row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PassThrough {
    columns: Vec<String>,
    values: Vec<String>,
}

impl PassThrough {
    pub fn new(columns: Vec<String>, values: Vec<String>) -> Result<Self> {
        if columns.len() != values.len() {
            return Err(Error::ColumnMismatch {
                columns: columns.len(),
                values: values.len(),
            });
        }

        Ok(Self { columns, values })
    }
}

/// All runs of one method over one input.
#[derive(Clone, Debug)]
pub struct Results {
    pub method: Method,
    /// Absolute path of the input file.
    pub input: PathBuf,
    pub size: usize,
    pub threshold: usize,
    pub runs: Vec<Times>,
}

/// Writes `results` as CSV to `output`, or to stdout if `None`.
///
/// Stdout always gets a header. A file is appended to and only gets a header if it did not exist
/// before.
pub fn write_results(
    output: Option<&Path>,
    results: &Results,
    pass_through: &PassThrough,
) -> Result<()> {
    match output {
        None => write_csv(io::stdout().lock(), true, results, pass_through),
        Some(path) => {
            let write_header = !path.exists();
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| Error::io(path, e))?;

            write_csv(file, write_header, results, pass_through)?;
            log::info!("appended {} rows to {}", results.runs.len(), path.display());

            Ok(())
        }
    }
}

fn write_csv<W: Write>(
    writer: W,
    write_header: bool,
    results: &Results,
    pass_through: &PassThrough,
) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(writer);

    if write_header {
        writer.write_record(
            HEADER
                .iter()
                .copied()
                .chain(pass_through.columns.iter().map(String::as_str)),
        )?;
    }

    let method = results.method.name();
    let input = results.input.display().to_string();
    let size = results.size.to_string();
    let threshold = results.threshold.to_string();

    for times in &results.runs {
        let wall = times.wall.as_nanos().to_string();
        let user = times.user.as_nanos().to_string();
        let system = times.system.as_nanos().to_string();

        writer.write_record(
            [
                method,
                input.as_str(),
                size.as_str(),
                threshold.as_str(),
                wall.as_str(),
                user.as_str(),
                system.as_str(),
            ]
            .into_iter()
            .chain(pass_through.values.iter().map(String::as_str)),
        )?;
    }

    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}
