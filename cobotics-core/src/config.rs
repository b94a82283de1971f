//! Build paths.
//!
//! The defaults are relative to the working directory:
//!
//! ```text
//! ./
//!   data/
//!     challenges.yaml
//!     missions.yaml
//!     task_plots.yaml
//!     skills.yaml
//!   templates/
//!     index.html        (Tera template)
//!   index.html          (generated)
//! ```

use std::path::{Path, PathBuf};

/// Directory holding the four category YAML files.
pub const DATA_DIR: &str = "data";
/// Directory the template engine loads from.
pub const TEMPLATE_DIR: &str = "templates";
/// Template rendered for the site.
pub const TEMPLATE_NAME: &str = "index.html";
/// Generated page.
pub const OUTPUT_FILE: &str = "index.html";

/// Where a build reads from and writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    pub data_dir: PathBuf,
    pub template_dir: PathBuf,
    /// Template name relative to `template_dir`, `/`-separated.
    pub template_name: String,
    pub output_file: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig {
            data_dir: PathBuf::from(DATA_DIR),
            template_dir: PathBuf::from(TEMPLATE_DIR),
            template_name: TEMPLATE_NAME.to_string(),
            output_file: PathBuf::from(OUTPUT_FILE),
        }
    }
}

impl BuildConfig {
    /// Default layout resolved against a project root instead of the cwd.
    pub fn rooted_at(root: &Path) -> Self {
        BuildConfig {
            data_dir: root.join(DATA_DIR),
            template_dir: root.join(TEMPLATE_DIR),
            template_name: TEMPLATE_NAME.to_string(),
            output_file: root.join(OUTPUT_FILE),
        }
    }

    /// Output file name for console messages (`index.html`).
    pub fn output_display_name(&self) -> String {
        self.output_file
            .file_name()
            .unwrap_or(self.output_file.as_os_str())
            .to_string_lossy()
            .into_owned()
    }
}
