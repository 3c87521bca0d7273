//! Card view models and the grid container they are mounted into.

use url::form_urlencoded;

use crate::types::{project_icon, stack_badge, stack_icon, ImpactMetric, Project};

/// Message shown when a filter matches nothing.
pub const NO_RESULTS_MESSAGE: &str = "No projects match this filter yet.";

/// Detail page path; the project id goes in the `id` query parameter.
pub const DETAIL_PAGE_PATH: &str = "/portfolio-details";

/// Impact highlight shown on a card (first metric only).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImpactHighlight {
    pub value: String,
    pub label: String,
}

impl From<&ImpactMetric> for ImpactHighlight {
    fn from(metric: &ImpactMetric) -> Self {
        Self {
            value: metric.value.clone(),
            label: metric.label(),
        }
    }
}

/// Everything a card displays, pre-formatted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView {
    /// Project id, rendered as `data-project-id`
    pub id: String,
    pub icon: &'static str,
    pub stack_icon: &'static str,
    pub stack_badge: String,
    pub title: String,
    pub short: String,
    pub tech: Vec<String>,
    pub impact: Option<ImpactHighlight>,
    pub role: String,
    pub date: String,
    pub demo_url: Option<String>,
    pub github_url: Option<String>,
    pub detail_href: String,
}

impl CardView {
    pub fn from_project(project: &Project) -> Self {
        Self {
            id: project.id.clone(),
            icon: project_icon(project.stack.as_ref(), &project.category),
            stack_icon: stack_icon(project.stack.as_ref()),
            stack_badge: stack_badge(project.stack.as_ref()),
            title: project.title.clone(),
            short: project.short.clone(),
            tech: project.tech.clone(),
            impact: project
                .impact()
                .and_then(|impact| impact.first())
                .map(ImpactHighlight::from),
            role: project.role_or_default().to_string(),
            date: project.formatted_date(),
            demo_url: project.demo_url().map(str::to_string),
            github_url: project.github_url().map(str::to_string),
            detail_href: detail_href(&project.id),
        }
    }
}

/// Link to the standalone detail page for `id`.
pub fn detail_href(id: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(id.as_bytes()).collect();
    format!("{DETAIL_PAGE_PATH}?id={encoded}")
}

/// One mounted child of the card grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridNode {
    Card(CardView),
    /// Shown instead of an empty grid
    Placeholder(&'static str),
}

/// The card grid's mounted contents.
///
/// Every [`render`](Self::render) replaces whatever was mounted before.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardContainer {
    nodes: Vec<GridNode>,
}

impl CardContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the container and mount one card per record, in order.
    ///
    /// An empty input mounts a single "no results" placeholder.
    pub fn render<'a, I>(&mut self, records: I)
    where
        I: IntoIterator<Item = &'a Project>,
    {
        self.nodes.clear();
        self.nodes
            .extend(records.into_iter().map(|p| GridNode::Card(CardView::from_project(p))));
        if self.nodes.is_empty() {
            self.nodes.push(GridNode::Placeholder(NO_RESULTS_MESSAGE));
        }
        tracing::debug!(mounted = self.card_count(), "card grid rendered");
    }

    pub fn nodes(&self) -> &[GridNode] {
        &self.nodes
    }

    /// Mounted cards, skipping the placeholder.
    pub fn cards(&self) -> impl Iterator<Item = &CardView> {
        self.nodes.iter().filter_map(|node| match node {
            GridNode::Card(card) => Some(card),
            GridNode::Placeholder(_) => None,
        })
    }

    pub fn card_count(&self) -> usize {
        self.cards().count()
    }

    /// Number of mounted children, placeholder included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn has_placeholder(&self) -> bool {
        matches!(self.nodes.as_slice(), [GridNode::Placeholder(_)])
    }

    /// The card carrying `data-project-id == id`.
    pub fn card_by_id(&self, id: &str) -> Option<&CardView> {
        self.cards().find(|card| card.id == id)
    }
}
