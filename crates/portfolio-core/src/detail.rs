//! Standalone project detail page.
//!
//! The page is addressed as `/portfolio-details?id=<project-id>`. With no id,
//! or an id the store does not know, the page keeps its placeholder content.

use url::form_urlencoded;

use crate::store::StoreHandle;
use crate::types::Project;

/// Name of the query parameter carrying the project id.
pub const ID_PARAM: &str = "id";

/// One row of the detail page's info list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InfoItem {
    pub label: &'static str,
    pub value: String,
}

/// One carousel slide.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slide {
    pub image: String,
    pub alt: String,
}

/// Content of the detail page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailView {
    pub title: String,
    pub description: String,
    pub info: Vec<InfoItem>,
    pub slides: Vec<Slide>,
}

impl DetailView {
    /// Content shown before (or instead of) a bound project.
    pub fn placeholder() -> Self {
        Self {
            title: "Project Details".to_string(),
            description: "Select a project from the portfolio to see its details.".to_string(),
            info: Vec::new(),
            slides: Vec::new(),
        }
    }

    /// Populated content for `project`; the carousel holds exactly one slide.
    pub fn from_project(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            description: project.detail_text().to_string(),
            info: vec![
                InfoItem {
                    label: "Category",
                    value: project.category_or_default().to_string(),
                },
                InfoItem {
                    label: "Technologies",
                    value: project.tech.join(", "),
                },
                InfoItem {
                    label: "Project date",
                    value: project.formatted_date(),
                },
            ],
            slides: vec![Slide {
                image: project.image.clone(),
                alt: project.title.clone(),
            }],
        }
    }
}

/// Extract `name` from a URL query string (with or without the leading `?`).
///
/// Values are form-urlencoded (`%XX` escapes, `+` for space). The first
/// occurrence wins, and an empty value counts as absent.
pub fn query_param(query: &str, name: &str) -> Option<String> {
    form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// Wait for the store to settle, then bind `id`.
///
/// `None` means a silent miss: the page keeps its placeholder.
pub async fn bind(store: &StoreHandle, id: Option<&str>) -> Option<DetailView> {
    let id = id.filter(|id| !id.is_empty())?;
    let store = store.settled().await;
    let view = store.find_by_id(id).map(DetailView::from_project);
    if view.is_none() {
        tracing::debug!(id, "detail page: no project with this id");
    }
    view
}
