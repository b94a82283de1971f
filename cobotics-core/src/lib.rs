//! Cobotics core library: content categories, build paths, YAML loading.
//!
//! Public API surface:
//! - [`types`]: [`Category`], [`Record`], [`SiteData`]
//! - [`config`]: [`BuildConfig`]
//! - [`data`]: load one category or all four
//! - [`error`]: [`DataError`]

pub mod config;
pub mod data;
pub mod error;
pub mod types;

pub use config::BuildConfig;
pub use error::DataError;
pub use types::{Category, Record, SiteData};
