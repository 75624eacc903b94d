//! File formats read and written by the slicer.
//!
//! - [`records`]: transient two-column `chord,depth` tables, one per section
//! - [`coords`]: the final space-separated coordinate files
//! - `stl`: model loading (behind the `stl-io` feature)

use std::path::{Path, PathBuf};

pub mod coords;
pub mod records;

#[cfg(feature = "stl-io")]
pub mod stl;

/// Generic I/O and format‑conversion errors.
///
/// Every variant that touches the file system carries the offending path.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("{path}: {source}")]
    StdIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse STL data: {0}")]
    Stl(#[source] std::io::Error),

    #[error("Input is malformed: {0}")]
    MalformedInput(String),
}

impl IoError {
    /// Wrap a `std::io::Error` with the path it occurred on.
    pub fn at(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        IoError::StdIo {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

/// Create `dir` (and parents) if it does not exist yet.
pub fn ensure_dir(dir: &Path) -> Result<(), IoError> {
    std::fs::create_dir_all(dir).map_err(|e| IoError::at(dir, e))
}

/// Remove a transient file.
pub fn remove_file(path: &Path) -> Result<(), IoError> {
    std::fs::remove_file(path).map_err(|e| IoError::at(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn std_io_error_names_path() {
        let err = IoError::at(
            "out/section_3.csv",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        let text = format!("{err}");
        assert!(text.contains("out/section_3.csv"));
        assert!(text.contains("missing"));
    }

    #[test]
    fn ensure_dir_is_idempotent() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let dir = tmp.path().join("a").join("b");
        ensure_dir(&dir).expect("first create");
        ensure_dir(&dir).expect("second create");
        assert!(dir.is_dir());
    }
}
