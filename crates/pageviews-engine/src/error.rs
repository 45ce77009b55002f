use std::fmt;
use std::path::PathBuf;

/// Result type for pageviews-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the engine layer
#[derive(Debug)]
pub enum Error {
    /// No usable file reference (empty name, or path does not exist)
    FileMissing(String),

    /// IO failure while reading the resource at `path`
    File {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Supplied strategy object does not satisfy the statistic contract
    InvalidStrategy(String),

    /// Statistic name outside the supported set
    StatisticNotSupported(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FileMissing(msg) => write!(f, "File missing: {}", msg),
            Error::File { path, source } => {
                write!(f, "IO error while reading '{}': {}", path.display(), source)
            }
            Error::InvalidStrategy(msg) => write!(f, "Invalid strategy: {}", msg),
            Error::StatisticNotSupported(name) => {
                write!(f, "Statistic not supported '{}'", name)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::File { source, .. } => Some(source),
            Error::FileMissing(_) | Error::InvalidStrategy(_) | Error::StatisticNotSupported(_) => {
                None
            }
        }
    }
}
