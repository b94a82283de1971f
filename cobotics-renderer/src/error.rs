//! Error types for cobotics-renderer.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from template loading and rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The requested template is not present in the template directory.
    #[error("template '{name}' not found in {dir}")]
    TemplateNotFound { name: String, dir: PathBuf },

    /// Tera template engine error (syntax, undefined variable, filter failure).
    #[error("template engine error: {0}")]
    Tera(#[from] tera::Error),

    /// JSON serialization error (building tera context).
    #[error("context serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Filesystem error while loading templates.
    #[error("template io error at {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },
}
