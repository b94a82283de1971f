//! Output writer.
//!
//! ## `write_output` protocol
//!
//! 1. Render content (already done by caller).
//! 2. Ensure the parent directory exists.
//! 3. Write the UTF-8 bytes to `<path>.cobotics.tmp`; on failure remove it.
//! 4. Rename over the destination; on failure remove the `.tmp` and leave the
//!    destination untouched.
//!
//! The destination is replaced on every build, even when its content is
//! already identical.

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::error::{io_err, BuildError};

/// Outcome of writing the output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written.
    Written { path: PathBuf, bytes: usize },
    /// `--dry-run` mode: the file *would* have been written.
    WouldWrite { path: PathBuf, bytes: usize },
}

impl WriteResult {
    pub fn path(&self) -> &Path {
        match self {
            WriteResult::Written { path, .. } | WriteResult::WouldWrite { path, .. } => path,
        }
    }

    pub fn bytes(&self) -> usize {
        match self {
            WriteResult::Written { bytes, .. } | WriteResult::WouldWrite { bytes, .. } => *bytes,
        }
    }
}

/// Lowercase hex SHA-256 of the rendered text.
pub fn content_digest(content: &str) -> String {
    let mut h = Sha256::new();
    h.update(content.as_bytes());
    hex::encode(h.finalize())
}

/// Replace the file at `path` with `content`.
pub fn write_output(path: &Path, content: &str, dry_run: bool) -> Result<WriteResult, BuildError> {
    let tmp = PathBuf::from(format!("{}.cobotics.tmp", path.display()));
    write_output_with_tmp(path, content, dry_run, &tmp)
}

fn write_output_with_tmp(
    path: &Path,
    content: &str,
    dry_run: bool,
    tmp: &Path,
) -> Result<WriteResult, BuildError> {
    let bytes = content.len();

    if dry_run {
        tracing::info!("[dry-run] would write: {}", path.display());
        return Ok(WriteResult::WouldWrite {
            path: path.to_path_buf(),
            bytes,
        });
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }
    if let Some(tmp_parent) = tmp.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(tmp_parent).map_err(|e| io_err(tmp_parent, e))?;
    }
    if let Err(e) = std::fs::write(tmp, content) {
        let _ = std::fs::remove_file(tmp);
        return Err(io_err(tmp, e));
    }

    if let Err(e) = std::fs::rename(tmp, path) {
        let _ = std::fs::remove_file(tmp);
        return Err(io_err(path, e));
    }

    tracing::info!("wrote: {} ({bytes} bytes)", path.display());
    Ok(WriteResult::Written {
        path: path.to_path_buf(),
        bytes,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
