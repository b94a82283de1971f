//! YAML data loading.
//!
//! # API pattern
//!
//! Loaders take the data directory explicitly (`*_at(data_dir, …)`); callers
//! resolve it from [`BuildConfig`](crate::BuildConfig). Tests point them at a
//! `TempDir`.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::DataError;
use crate::types::{Category, Record, SiteData};

/// `<data_dir>/<category>.yaml`: pure, no I/O.
pub fn data_path_at(data_dir: &Path, category: Category) -> PathBuf {
    data_dir.join(category.file_name())
}

/// Load one category from `<data_dir>/<category>.yaml`.
///
/// Merge keys (`<<: *anchor`) are resolved. Returns `DataError::NotFound` if
/// absent, `DataError::Parse` (with path + line context) if the YAML is
/// malformed or is not a sequence. A file with no
/// YAML document at all (empty, or only comments) is an empty sequence.
pub fn load_category_at(data_dir: &Path, category: Category) -> Result<Vec<Record>, DataError> {
    let path = data_path_at(data_dir, category);
    let contents = match std::fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(DataError::NotFound { path });
        }
        Err(e) => return Err(DataError::Io { path, source: e }),
    };

    let records = parse_records(&contents).map_err(|e| DataError::Parse {
        path: path.clone(),
        source: e,
    })?;
    tracing::debug!("loaded {} {} from {}", records.len(), category, path.display());
    Ok(records)
}

/// Load all four categories, in [`Category::all`] order.
///
/// Stops at the first failure; a partially loaded [`SiteData`] is never
/// returned.
pub fn load_all_at(data_dir: &Path) -> Result<SiteData, DataError> {
    let mut data = SiteData::default();
    for category in Category::all() {
        let records = load_category_at(data_dir, *category)?;
        data.set(*category, records);
    }
    Ok(data)
}

fn parse_records(contents: &str) -> Result<Vec<Record>, serde_yaml::Error> {
    if is_blank_document(contents) {
        return Ok(Vec::new());
    }
    let mut value = serde_yaml::from_str::<Record>(contents)?;
    value.apply_merge()?;
    match value {
        Record::Null => Ok(Vec::new()),
        value => serde_yaml::from_value(value),
    }
}

fn is_blank_document(contents: &str) -> bool {
    contents.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#')
    })
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
