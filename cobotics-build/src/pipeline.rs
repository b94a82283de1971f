//! Build pipeline: load → assemble context → render → write.
//!
//! [`run`] is the whole pipeline. The CLI drives [`load`] and [`build`]
//! separately so it can report the loaded counts before rendering starts.

use cobotics_core::{data, BuildConfig, Category, SiteData};
use cobotics_renderer::Renderer;

use crate::error::BuildError;
use crate::writer::{self, content_digest, WriteResult};

/// Whether the rendered page is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Build,
    DryRun,
}

/// Outcome of a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Record count per category, in [`Category::all`] order.
    pub counts: Vec<(Category, usize)>,
    pub write: WriteResult,
    /// SHA-256 of the rendered page.
    pub digest: String,
}

/// Outcome of [`check`]: everything a build does except writing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub counts: Vec<(Category, usize)>,
    pub bytes: usize,
    pub digest: String,
}

/// `3 challenges, 2 missions, 1 plots`: the categories reported after loading.
pub fn loaded_summary(counts: &[(Category, usize)]) -> String {
    counts
        .iter()
        .filter(|(c, _)| *c != Category::Skills)
        .map(|(c, n)| format!("{n} {}", c.label()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Stage 1: load all four categories. Fails before anything is rendered.
pub fn load(config: &BuildConfig) -> Result<SiteData, BuildError> {
    Ok(data::load_all_at(&config.data_dir)?)
}

/// Stage 2 + 3: assemble the context and render the configured template.
pub fn render(config: &BuildConfig, site: &SiteData) -> Result<String, BuildError> {
    let renderer = Renderer::new(config)?;
    Ok(renderer.render(site)?)
}

/// Stages 2–4 for already loaded data.
pub fn build(config: &BuildConfig, site: &SiteData, mode: Mode) -> Result<BuildReport, BuildError> {
    let html = render(config, site)?;
    let digest = content_digest(&html);
    let write = writer::write_output(&config.output_file, &html, mode == Mode::DryRun)?;
    Ok(BuildReport {
        counts: site.counts(),
        write,
        digest,
    })
}

/// Run the whole pipeline.
pub fn run(config: &BuildConfig, mode: Mode) -> Result<BuildReport, BuildError> {
    let site = load(config)?;
    build(config, &site, mode)
}

/// Load and render without touching the output file.
pub fn check(config: &BuildConfig) -> Result<CheckReport, BuildError> {
    let site = load(config)?;
    let html = render(config, &site)?;
    Ok(CheckReport {
        counts: site.counts(),
        bytes: html.len(),
        digest: content_digest(&html),
    })
}
