//! Loading newline-delimited integer data, optionally gzip compressed.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;

use crate::{Error, Result};

/// Reads one `i32` per line from `path`. Files with a `gz` extension are decompressed on the fly.
pub fn load(path: &Path) -> Result<Vec<i32>> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;

    let reader: Box<dyn Read> = if path.extension().is_some_and(|ext| ext == "gz") {
        Box::new(GzDecoder::new(file))
    } else {
        Box::new(file)
    };

    let data = parse(path, BufReader::new(reader))?;
    log::info!("loaded {} values from {}", data.len(), path.display());

    Ok(data)
}

fn parse(path: &Path, reader: impl BufRead) -> Result<Vec<i32>> {
    let mut data = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| Error::io(path, e))?;
        let value = line.trim();

        let parsed = value.parse().map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            line: i + 1,
            value: value.to_string(),
            source,
        })?;
        data.push(parsed);
    }

    Ok(data)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use flate2::write::GzEncoder;
    use flate2::Compression;

    use super::*;

    #[test]
    fn plain_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.dat");
        std::fs::write(&path, "3\n-1\n  7 \n2147483647\n").unwrap();

        assert_eq!(load(&path).unwrap(), [3, -1, 7, i32::MAX]);
    }

    #[test]
    fn gzip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("0.dat.gz");

        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"5\n4\n3\n").unwrap();
        std::fs::write(&path, encoder.finish().unwrap()).unwrap();

        assert_eq!(load(&path).unwrap(), [5, 4, 3]);
    }

    #[test]
    fn empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.dat");
        std::fs::write(&path, "").unwrap();

        assert!(load(&path).unwrap().is_empty());
    }

    #[test]
    fn bad_line_reports_position() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.dat");
        std::fs::write(&path, "1\n2\n\n4\n").unwrap();

        match load(&path) {
            Err(Error::Parse { line, value, .. }) => {
                assert_eq!(line, 3);
                assert_eq!(value, "");
            }
            other => panic!("expected a parse error, got {other:?}"),
        }
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.dat");

        assert!(matches!(load(&path), Err(Error::Io { .. })));
    }
}
