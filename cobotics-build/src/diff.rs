//! Unified diff of the rendered page against the current output file.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use similar::TextDiff;

use cobotics_core::BuildConfig;

use crate::{error::io_err, pipeline, BuildError};

/// Diff result for the output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDiff {
    pub path: PathBuf,
    /// `None` when the rendered page matches the file on disk.
    pub unified_diff: Option<String>,
}

/// Render what `build` would generate and compare it to current on-disk content.
///
/// No files are written.
pub fn diff_output(config: &BuildConfig) -> Result<OutputDiff, BuildError> {
    let site = pipeline::load(config)?;
    let rendered = pipeline::render(config, &site)?;
    let existing = read_existing_or_empty(&config.output_file)?;

    let unified_diff = if existing == rendered {
        None
    } else {
        let name = config.output_display_name();
        let old_header = format!("a/{name}");
        let new_header = format!("b/{name}");
        Some(
            TextDiff::from_lines(&existing, &rendered)
                .unified_diff()
                .header(&old_header, &new_header)
                .context_radius(3)
                .to_string(),
        )
    };

    Ok(OutputDiff {
        path: config.output_file.clone(),
        unified_diff,
    })
}

fn read_existing_or_empty(path: &Path) -> Result<String, BuildError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(String::new()),
        Err(err) => Err(io_err(path, err)),
    }
}
