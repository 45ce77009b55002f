use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Supplies the full raw text of a log resource.
///
/// Implementations only resolve bytes; splitting and aggregation live in the
/// engine. Relative paths are expected to be resolved by the caller before
/// they reach this layer.
pub trait LineSource: std::fmt::Debug {
    /// Path identifying the resource (used in error reporting).
    fn path(&self) -> &Path;

    /// Full raw text of the resource.
    fn read(&self) -> Result<String>;
}

/// Plain-text log file on the local filesystem.
///
/// Validates eagerly so that configuration errors surface at construction
/// rather than at the first read.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source for `path`.
    ///
    /// Fails with [`Error::FileMissing`] when the path is empty or does not
    /// point at an existing file.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return Err(Error::FileMissing("no log file provided".to_string()));
        }
        if !path.is_file() {
            return Err(Error::FileMissing(format!(
                "no such file exists '{}'",
                path.display()
            )));
        }
        Ok(Self { path })
    }
}

impl LineSource for FileSource {
    fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<String> {
        std::fs::read_to_string(&self.path).map_err(|source| Error::File {
            path: self.path.clone(),
            source,
        })
    }
}
