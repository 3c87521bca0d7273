//! Core data types for the portfolio.

pub mod impact;
pub mod project;
pub mod stack;

pub use impact::{metric_label, Impact, ImpactMetric};
pub use project::{format_date, Project, DEFAULT_CATEGORY, DEFAULT_ROLE, UNKNOWN_DATE};
pub use stack::{
    capitalize, category_icon, project_icon, stack_badge, stack_icon, Stack,
    DEFAULT_PROJECT_ICON, DEFAULT_STACK_ICON, WEB_BADGE,
};

use serde::{Deserialize, Serialize};

/// Shape of the project data resource: `{ "projects": [ ... ] }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectsDocument {
    pub projects: Vec<Project>,
}
