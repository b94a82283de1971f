//! Error types for cobotics-build.

use std::path::PathBuf;

use thiserror::Error;

use cobotics_core::DataError;
use cobotics_renderer::RenderError;

/// All errors that can arise from a build run.
#[derive(Debug, Error)]
pub enum BuildError {
    /// A data file was missing or malformed.
    #[error("data error: {0}")]
    Data(#[from] DataError),

    /// An error from the rendering engine.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`BuildError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> BuildError {
    BuildError::Io {
        path: path.into(),
        source,
    }
}
