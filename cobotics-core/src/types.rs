//! Content categories and the loaded site data.
//!
//! Records keep whatever shape the YAML source gives them; only the
//! category-level container (an ordered sequence) is fixed.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single content record. Shape is defined by the data file, not by us.
pub type Record = serde_yaml::Value;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// The four content categories the site is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Challenges,
    Missions,
    TaskPlots,
    Skills,
}

impl Category {
    /// All categories in load order.
    pub fn all() -> &'static [Category] {
        &[
            Category::Challenges,
            Category::Missions,
            Category::TaskPlots,
            Category::Skills,
        ]
    }

    /// Context key under which the category is exposed to templates.
    pub fn key(&self) -> &'static str {
        match self {
            Category::Challenges => "challenges",
            Category::Missions   => "missions",
            Category::TaskPlots  => "task_plots",
            Category::Skills     => "skills",
        }
    }

    /// Data file name, relative to the data directory.
    pub fn file_name(&self) -> String {
        format!("{}.yaml", self.key())
    }

    /// Noun used in console summaries ("Loaded 3 challenges, ... 1 plots").
    pub fn label(&self) -> &'static str {
        match self {
            Category::Challenges => "challenges",
            Category::Missions   => "missions",
            Category::TaskPlots  => "plots",
            Category::Skills     => "skills",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ---------------------------------------------------------------------------
// SiteData
// ---------------------------------------------------------------------------

/// Everything loaded from the data directory for one build.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteData {
    #[serde(default)]
    pub challenges: Vec<Record>,
    #[serde(default)]
    pub missions: Vec<Record>,
    #[serde(default)]
    pub task_plots: Vec<Record>,
    #[serde(default)]
    pub skills: Vec<Record>,
}

impl SiteData {
    /// Records for a single category.
    pub fn get(&self, category: Category) -> &[Record] {
        match category {
            Category::Challenges => &self.challenges,
            Category::Missions   => &self.missions,
            Category::TaskPlots  => &self.task_plots,
            Category::Skills     => &self.skills,
        }
    }

    pub(crate) fn set(&mut self, category: Category, records: Vec<Record>) {
        match category {
            Category::Challenges => self.challenges = records,
            Category::Missions   => self.missions = records,
            Category::TaskPlots  => self.task_plots = records,
            Category::Skills     => self.skills = records,
        }
    }

    /// Record count per category, in [`Category::all`] order.
    pub fn counts(&self) -> Vec<(Category, usize)> {
        Category::all()
            .iter()
            .map(|c| (*c, self.get(*c).len()))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
