//! Error types for cobotics-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise while loading content data files.
#[derive(Debug, Error)]
pub enum DataError {
    /// The data file did not exist at the expected path.
    #[error("data file not found at {path}")]
    NotFound { path: PathBuf },

    /// YAML parse error: includes file path and line context from serde_yaml.
    #[error("failed to parse data file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Any other I/O failure while reading (permission denied, is a directory, ...).
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DataError {
    /// Path of the data file this error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            DataError::NotFound { path }
            | DataError::Parse { path, .. }
            | DataError::Io { path, .. } => path,
        }
    }
}
