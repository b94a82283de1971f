//! Template context: the four content categories plus the `json` helper.

use serde::Serialize;

use cobotics_core::{Category, Record, SiteData};

use crate::error::RenderError;
use crate::helpers::JSON_HELPER;

/// Rendering payload built from [`SiteData`].
///
/// Each category is exposed under its key (`challenges`, `missions`,
/// `task_plots`, `skills`). The `json` helper is registered on the engine as
/// both a function and a filter, so templates can embed any of these values in
/// `<script>` blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SiteContext {
    pub challenges: Vec<Record>,
    pub missions: Vec<Record>,
    pub task_plots: Vec<Record>,
    pub skills: Vec<Record>,
}

impl SiteContext {
    /// Build a [`SiteContext`] from loaded [`SiteData`].
    pub fn from_data(data: &SiteData) -> Self {
        SiteContext {
            challenges: data.challenges.clone(),
            missions: data.missions.clone(),
            task_plots: data.task_plots.clone(),
            skills: data.skills.clone(),
        }
    }

    /// Records for one category.
    pub fn get(&self, category: Category) -> &[Record] {
        match category {
            Category::Challenges => &self.challenges,
            Category::Missions   => &self.missions,
            Category::TaskPlots  => &self.task_plots,
            Category::Skills     => &self.skills,
        }
    }

    /// Names visible to templates: the four category keys, then the helper.
    pub fn keys(&self) -> Vec<&'static str> {
        Category::all()
            .iter()
            .map(|c| c.key())
            .chain(std::iter::once(JSON_HELPER))
            .collect()
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        let mut ctx = tera::Context::new();
        for category in Category::all() {
            let value = serde_json::to_value(self.get(*category))?;
            ctx.insert(category.key(), &value);
        }
        Ok(ctx)
    }
}
