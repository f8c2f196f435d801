use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}:{line}: invalid integer '{value}': {source}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("number of columns ({columns}) and values ({values}) do not match")]
    ColumnMismatch { columns: usize, values: usize },

    #[error("{method} left the data unsorted")]
    Unsorted { method: String },

    #[error("output directory {} already exists, use --force to overwrite", path.display())]
    OutputExists { path: PathBuf },

    #[error("output requires a directory, not a file: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("invalid size range: min {min}, max {max}, increment {increment}")]
    InvalidSizeRange {
        min: usize,
        max: usize,
        increment: usize,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
