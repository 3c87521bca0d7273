//! Project records.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use super::impact::Impact;
use super::stack::Stack;

/// Role shown when a record does not name one.
pub const DEFAULT_ROLE: &str = "Developer";

/// Category shown when a record's category is blank.
pub const DEFAULT_CATEGORY: &str = "Web Development";

/// Text shown for missing or unparseable dates.
pub const UNKNOWN_DATE: &str = "Unknown";

/// A single portfolio entry.
///
/// Records are immutable once loaded into a
/// [`ProjectStore`](crate::store::ProjectStore).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique slug, also the card anchor attribute
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub category: String,
    /// One-line summary shown on cards
    #[serde(default)]
    pub short: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<Stack>,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<Impact>,
}

impl Project {
    /// Minimal record; the remaining fields take their defaults.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category: String::new(),
            short: String::new(),
            description: None,
            details: None,
            stack: None,
            tech: Vec::new(),
            date: None,
            image: String::new(),
            url: None,
            github: None,
            role: None,
            highlights: Vec::new(),
            impact: None,
        }
    }

    /// Long-form text for the modal: description, then details, then short.
    pub fn long_description(&self) -> &str {
        non_empty(self.description.as_deref())
            .or_else(|| non_empty(self.details.as_deref()))
            .unwrap_or(self.short.as_str())
    }

    /// Long-form text for the detail page: details, then description, then short.
    pub fn detail_text(&self) -> &str {
        non_empty(self.details.as_deref())
            .or_else(|| non_empty(self.description.as_deref()))
            .unwrap_or(self.short.as_str())
    }

    pub fn role_or_default(&self) -> &str {
        non_empty(self.role.as_deref()).unwrap_or(DEFAULT_ROLE)
    }

    pub fn category_or_default(&self) -> &str {
        non_empty(Some(self.category.as_str())).unwrap_or(DEFAULT_CATEGORY)
    }

    pub fn formatted_date(&self) -> String {
        format_date(self.date.as_deref())
    }

    /// Live demo link, if one is set and non-blank.
    pub fn demo_url(&self) -> Option<&str> {
        non_empty(self.url.as_deref())
    }

    /// Source code link, if one is set and non-blank.
    pub fn github_url(&self) -> Option<&str> {
        non_empty(self.github.as_deref())
    }

    /// Impact metrics, treating an empty object like an absent one.
    pub fn impact(&self) -> Option<&Impact> {
        self.impact.as_ref().filter(|impact| !impact.is_empty())
    }
}

/// Format an ISO date (`2023-08-01` or an RFC 3339 timestamp) as
/// `August 1, 2023`.
pub fn format_date(date: Option<&str>) -> String {
    let Some(raw) = date.map(str::trim).filter(|s| !s.is_empty()) else {
        return UNKNOWN_DATE.to_string();
    };

    let parsed = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()));

    match parsed {
        Some(day) => day.format("%B %-d, %Y").to_string(),
        None => UNKNOWN_DATE.to_string(),
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_date_variants() {
        assert_eq!(format_date(Some("2023-08-01")), "August 1, 2023");
        assert_eq!(format_date(Some("2021-11-20T08:30:00Z")), "November 20, 2021");
        assert_eq!(format_date(Some("sometime")), UNKNOWN_DATE);
        assert_eq!(format_date(Some("")), UNKNOWN_DATE);
        assert_eq!(format_date(None), UNKNOWN_DATE);
    }

    #[test]
    fn defaults_apply_to_missing_fields() {
        let p = Project::new("x", "X");
        assert_eq!(p.role_or_default(), DEFAULT_ROLE);
        assert_eq!(p.category_or_default(), DEFAULT_CATEGORY);
        assert!(p.demo_url().is_none());
        assert!(p.github_url().is_none());
        assert!(p.impact().is_none());
    }

    #[test]
    fn description_precedence() {
        let mut p = Project::new("x", "X");
        p.short = "short".into();
        assert_eq!(p.long_description(), "short");
        p.details = Some("details".into());
        assert_eq!(p.long_description(), "details");
        assert_eq!(p.detail_text(), "details");
        p.description = Some("description".into());
        assert_eq!(p.long_description(), "description");
        assert_eq!(p.detail_text(), "details");
    }

    #[test]
    fn deserializes_sparse_record() {
        let p: Project = serde_json::from_str(
            r#"{"id": "a", "title": "A", "stack": "go", "tech": ["Go", "Postgres"], "url": null}"#,
        )
        .unwrap();
        assert_eq!(p.stack, Some(Stack::Go));
        assert_eq!(p.tech, ["Go", "Postgres"]);
        assert!(p.url.is_none());
        assert!(p.highlights.is_empty());
    }

    #[test]
    fn blank_links_are_absent() {
        let mut p = Project::new("x", "X");
        p.url = Some("  ".into());
        assert!(p.demo_url().is_none());
    }
}
