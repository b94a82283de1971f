//! # cobotics-build
//!
//! Build pipeline and output writer.
//!
//! Call [`run`] to load the data directory, render the site template and write
//! the page, or [`check`] to do everything except the write. [`diff_output`]
//! previews what a build would change.

pub mod diff;
pub mod error;
pub mod pipeline;
pub mod writer;

pub use diff::{diff_output, OutputDiff};
pub use error::BuildError;
pub use pipeline::{check, run, BuildReport, CheckReport, Mode};
pub use writer::{write_output, WriteResult};
