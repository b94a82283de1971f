//! `cobotics check`: validate data and template without writing.

use std::collections::BTreeMap;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use cobotics_build::pipeline::{self, loaded_summary, CheckReport};
use cobotics_core::BuildConfig;

/// Arguments for `cobotics check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct CheckReportJson<'a> {
    counts: BTreeMap<&'static str, usize>,
    template: &'a str,
    bytes: usize,
    sha256: &'a str,
}

impl CheckArgs {
    pub fn run(self, config: &BuildConfig) -> Result<()> {
        let report = pipeline::check(config)?;
        if self.json {
            print_json(config, &report)?;
            return Ok(());
        }

        println!("✅ Loaded {}.", loaded_summary(&report.counts));
        println!(
            "{} {} renders {} bytes (sha256 {})",
            "✓".green(),
            config.template_name,
            report.bytes,
            &report.digest[..12],
        );
        Ok(())
    }
}

fn print_json(config: &BuildConfig, report: &CheckReport) -> Result<()> {
    let out = CheckReportJson {
        counts: report.counts.iter().map(|(c, n)| (c.key(), *n)).collect(),
        template: &config.template_name,
        bytes: report.bytes,
        sha256: &report.digest,
    };
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
