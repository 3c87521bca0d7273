//! Populated modal content.

use super::focus::FocusTarget;
use crate::types::{project_icon, stack_badge, stack_icon, Project};

/// One cell of the impact grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImpactEntry {
    pub value: String,
    pub label: String,
}

/// Everything the modal's fixed slots display for one project.
///
/// Section visibility is a pure function of the content, so a project
/// without highlights never inherits a hidden/shown state from the one
/// displayed before it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalView {
    pub project_id: String,
    pub title: String,
    pub icon: &'static str,
    pub stack_icon: &'static str,
    pub stack_name: String,
    pub description: String,
    pub highlights: Vec<String>,
    pub tech: Vec<String>,
    pub impact: Vec<ImpactEntry>,
    pub role: String,
    pub category: String,
    pub date: String,
    pub demo_url: Option<String>,
    pub github_url: Option<String>,
}

impl ModalView {
    pub fn from_project(project: &Project) -> Self {
        Self {
            project_id: project.id.clone(),
            title: project.title.clone(),
            icon: project_icon(project.stack.as_ref(), &project.category),
            stack_icon: stack_icon(project.stack.as_ref()),
            stack_name: stack_badge(project.stack.as_ref()),
            description: project.long_description().to_string(),
            highlights: project.highlights.clone(),
            tech: project.tech.clone(),
            impact: project
                .impact()
                .map(|impact| {
                    impact
                        .metrics()
                        .iter()
                        .map(|m| ImpactEntry {
                            value: m.value.clone(),
                            label: m.label(),
                        })
                        .collect()
                })
                .unwrap_or_default(),
            role: project.role_or_default().to_string(),
            category: project.category_or_default().to_string(),
            date: project.formatted_date(),
            demo_url: project.demo_url().map(str::to_string),
            github_url: project.github_url().map(str::to_string),
        }
    }

    pub fn show_highlights(&self) -> bool {
        !self.highlights.is_empty()
    }

    pub fn show_tech(&self) -> bool {
        !self.tech.is_empty()
    }

    pub fn show_impact(&self) -> bool {
        !self.impact.is_empty()
    }

    /// Focusable controls currently visible, in document order.
    pub fn focus_order(&self) -> Vec<FocusTarget> {
        let mut order = vec![FocusTarget::HeaderClose, FocusTarget::FooterClose];
        if self.demo_url.is_some() {
            order.push(FocusTarget::DemoLink);
        }
        if self.github_url.is_some() {
            order.push(FocusTarget::CodeLink);
        }
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Impact, ImpactMetric, Stack};

    #[test]
    fn sections_hide_when_empty() {
        let view = ModalView::from_project(&Project::new("bare", "Bare"));
        assert!(!view.show_highlights());
        assert!(!view.show_tech());
        assert!(!view.show_impact());
        assert_eq!(view.stack_name, "WEB");
        assert_eq!(view.role, "Developer");
        assert_eq!(view.date, "Unknown");
        assert_eq!(
            view.focus_order(),
            [FocusTarget::HeaderClose, FocusTarget::FooterClose]
        );
    }

    #[test]
    fn impact_labels_and_links() {
        let mut p = Project::new("shop", "Shop");
        p.stack = Some(Stack::Mern);
        p.url = Some("https://shop.example".into());
        p.github = Some("https://github.com/me/shop".into());
        p.impact = Some(Impact::new(vec![
            ImpactMetric::new("conversion", "+18%"),
            ImpactMetric::new("orders", "3k/mo"),
        ]));

        let view = ModalView::from_project(&p);
        assert_eq!(view.icon, "fab fa-react");
        assert_eq!(view.stack_name, "MERN");
        assert_eq!(
            view.impact,
            [
                ImpactEntry { value: "+18%".into(), label: "Conversion Rate".into() },
                ImpactEntry { value: "3k/mo".into(), label: "Orders".into() },
            ]
        );
        assert_eq!(view.focus_order().last(), Some(&FocusTarget::CodeLink));
    }

    #[test]
    fn empty_impact_object_is_hidden() {
        let mut p = Project::new("x", "X");
        p.impact = Some(Impact::default());
        assert!(!ModalView::from_project(&p).show_impact());
    }
}
