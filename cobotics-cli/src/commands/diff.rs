//! `cobotics diff`: show the unified diff a build would apply to the page.

use anyhow::Result;
use clap::Args;

use cobotics_build::diff_output;
use cobotics_core::BuildConfig;

/// Arguments for `cobotics diff`.
#[derive(Args, Debug)]
pub struct DiffArgs {}

impl DiffArgs {
    pub fn run(self, config: &BuildConfig) -> Result<()> {
        let result = diff_output(config)?;

        let Some(diff) = result.unified_diff else {
            println!("No differences for {}.", result.path.display());
            return Ok(());
        };

        print!("{diff}");
        if !diff.ends_with('\n') {
            println!();
        }
        Ok(())
    }
}
