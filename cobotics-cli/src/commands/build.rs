//! `cobotics build`: render and write the site page.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use cobotics_build::{
    pipeline::{self, loaded_summary, Mode},
    WriteResult,
};
use cobotics_core::BuildConfig;

/// Arguments for `cobotics build`.
#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    /// Render everything but do not write the page.
    #[arg(long)]
    pub dry_run: bool,
}

impl BuildArgs {
    pub fn run(self, config: &BuildConfig) -> Result<()> {
        let mode = if self.dry_run { Mode::DryRun } else { Mode::Build };
        let prefix = if self.dry_run { "[dry-run] " } else { "" };

        println!("{prefix}🚀 Starting Cobotics4All Build...");

        let site = pipeline::load(config)?;
        println!("{prefix}✅ Loaded {}.", loaded_summary(&site.counts()));

        let report = pipeline::build(config, &site, mode)?;
        tracing::debug!("sha256 {}", report.digest);

        let name = config.output_display_name();
        match report.write {
            WriteResult::Written { .. } => {
                println!("{} Generated {name}", "🎉 Build Complete!".green().bold());
            }
            WriteResult::WouldWrite { bytes, .. } => {
                println!("{prefix}~ would generate {name} ({bytes} bytes)");
            }
        }
        Ok(())
    }
}
