pub mod build;
pub mod check;
pub mod diff;

use std::path::PathBuf;

use clap::Args;

use cobotics_core::BuildConfig;

/// Path overrides shared by every command. Unset flags keep the defaults.
#[derive(Args, Debug, Default)]
pub struct PathArgs {
    /// Project root the default `data/`, `templates/` and `index.html` resolve against.
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Directory holding challenges.yaml, missions.yaml, task_plots.yaml, skills.yaml.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Directory the template engine loads from.
    #[arg(long, global = true)]
    pub template_dir: Option<PathBuf>,

    /// Template to render, relative to the template directory.
    #[arg(long, global = true)]
    pub template: Option<String>,

    /// Page to write.
    #[arg(long, global = true)]
    pub output: Option<PathBuf>,
}

impl PathArgs {
    pub fn to_config(&self) -> BuildConfig {
        let mut config = match &self.root {
            Some(root) => BuildConfig::rooted_at(root),
            None => BuildConfig::default(),
        };
        if let Some(dir) = &self.data_dir {
            config.data_dir = dir.clone();
        }
        if let Some(dir) = &self.template_dir {
            config.template_dir = dir.clone();
        }
        if let Some(name) = &self.template {
            config.template_name = name.clone();
        }
        if let Some(path) = &self.output {
            config.output_file = path.clone();
        }
        config
    }
}
