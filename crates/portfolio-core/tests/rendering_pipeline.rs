//! Store → filter → card grid integration tests
//!
//! These tests drive the same path the home page takes: load a document,
//! pick a filter button, and mount the matching cards.

use portfolio_core::{
    CardContainer, FilterBar, FilterToken, GridNode, Project, ProjectStore, Stack,
};

// ============================================================================
// Test Utilities
// ============================================================================

const DOCUMENT: &str = r#"{
  "projects": [
    {
      "id": "siakad",
      "title": "Academic Information System",
      "category": "Web",
      "short": "Enrollment, grading and transcripts.",
      "stack": "laravel",
      "tech": ["Laravel", "MySQL", "Livewire"],
      "date": "2024-01-10",
      "role": "Lead Developer",
      "impact": { "users": "12,000+", "efficiency": "40%" }
    },
    {
      "id": "tracker",
      "title": "Shipment Tracker",
      "category": "Web",
      "short": "Real-time parcel tracking.",
      "stack": "go",
      "tech": ["Go", "PostgreSQL"],
      "date": "2023-06-01",
      "url": "https://tracker.example"
    },
    {
      "id": "eoffice",
      "title": "E-Office",
      "category": "Management",
      "short": "Paperless correspondence for a university.",
      "stack": "laravel",
      "tech": ["Laravel", "Vue"],
      "date": "2022-03-15",
      "github": "https://github.com/me/eoffice"
    },
    {
      "id": "landing",
      "title": "Company Landing Page",
      "category": "Corporate",
      "short": "Marketing site.",
      "tech": ["HTML", "Tailwind"]
    }
  ]
}"#;

fn store() -> ProjectStore {
    ProjectStore::from_json(DOCUMENT.as_bytes()).expect("valid document")
}

fn card_ids(container: &CardContainer) -> Vec<&str> {
    container.cards().map(|c| c.id.as_str()).collect()
}

// ============================================================================
// Lookup
// ============================================================================

#[test]
fn test_find_by_id_returns_equal_record() {
    let store = store();
    for record in store.list() {
        assert_eq!(store.find_by_id(&record.id), Some(record));
    }
    assert!(store.find_by_id("does-not-exist").is_none());
}

#[test]
fn test_list_preserves_document_order() {
    let store = store();
    let ids: Vec<_> = store.list().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["siakad", "tracker", "eoffice", "landing"]);
}

// ============================================================================
// Filtering + Rendering
// ============================================================================

#[test]
fn test_laravel_subset_count_and_order() {
    let store = store();
    let mut filters = FilterBar::default();
    let mut grid = CardContainer::new();

    grid.render(filters.apply(store.list()));
    assert_eq!(grid.card_count(), store.len());

    filters.select_token(&FilterToken::Stack(Stack::Laravel)).unwrap();
    grid.render(filters.apply(store.list()));

    let expected = store
        .list()
        .iter()
        .filter(|p| p.stack == Some(Stack::Laravel))
        .count();
    assert_eq!(grid.card_count(), expected);
    assert_eq!(card_ids(&grid), ["siakad", "eoffice"]);
}

#[test]
fn test_zero_matches_mounts_single_placeholder() {
    let store = store();
    let mut filters = FilterBar::default();
    let mut grid = CardContainer::new();

    filters.select_token(&FilterToken::Stack(Stack::Kotlin)).unwrap();
    grid.render(filters.apply(store.list()));

    assert_eq!(grid.len(), 1);
    assert!(matches!(grid.nodes(), [GridNode::Placeholder(_)]));
}

#[test]
fn test_all_button_restores_full_list() {
    let store = store();
    let mut filters = FilterBar::default();
    let mut grid = CardContainer::new();

    filters.select_token(&FilterToken::Stack(Stack::Go)).unwrap();
    grid.render(filters.apply(store.list()));
    assert_eq!(card_ids(&grid), ["tracker"]);

    filters.select(0).unwrap();
    grid.render(filters.apply(store.list()));
    assert_eq!(card_ids(&grid), ["siakad", "tracker", "eoffice", "landing"]);
}

/// Two records, filtering by "go" mounts only the Go card with its tags in order
#[test]
fn test_go_filter_scenario() {
    let mut a = Project::new("a", "A");
    a.stack = Some(Stack::Go);
    a.tech = vec!["Go".into(), "Postgres".into()];
    let mut b = Project::new("b", "B");
    b.stack = Some(Stack::Php);
    b.tech = vec!["PHP".into()];
    let store = ProjectStore::new(vec![a, b]);

    let token: FilterToken = "go".parse().unwrap();
    let mut grid = CardContainer::new();
    grid.render(token.apply(store.list()));

    let cards: Vec<_> = grid.cards().collect();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].id, "a");
    assert_eq!(cards[0].tech, ["Go", "Postgres"]);
}

// ============================================================================
// Card Content
// ============================================================================

#[test]
fn test_card_without_impact_has_no_highlight() {
    let store = store();
    let mut grid = CardContainer::new();
    grid.render(store.list());

    assert!(grid.card_by_id("tracker").unwrap().impact.is_none());
    let siakad = grid.card_by_id("siakad").unwrap();
    let highlight = siakad.impact.as_ref().unwrap();
    assert_eq!(highlight.value, "12,000+");
    assert_eq!(highlight.label, "Active Users");
}

#[test]
fn test_card_links_follow_optional_fields() {
    let store = store();
    let mut grid = CardContainer::new();
    grid.render(store.list());

    let tracker = grid.card_by_id("tracker").unwrap();
    assert_eq!(tracker.demo_url.as_deref(), Some("https://tracker.example"));
    assert!(tracker.github_url.is_none());

    let eoffice = grid.card_by_id("eoffice").unwrap();
    assert!(eoffice.demo_url.is_none());
    assert!(eoffice.github_url.is_some());
}

#[test]
fn test_card_icons_and_defaults() {
    let store = store();
    let mut grid = CardContainer::new();
    grid.render(store.list());

    let landing = grid.card_by_id("landing").unwrap();
    assert_eq!(landing.icon, "fas fa-building");
    assert_eq!(landing.stack_badge, "WEB");
    assert_eq!(landing.role, "Developer");
    assert_eq!(landing.date, "Unknown");

    let siakad = grid.card_by_id("siakad").unwrap();
    assert_eq!(siakad.icon, "fab fa-laravel");
    assert_eq!(siakad.role, "Lead Developer");
    assert_eq!(siakad.date, "January 10, 2024");
}

#[test]
fn test_markup_in_fields_is_kept_as_text() {
    let json = r#"{"projects": [{"id": "x", "title": "<script>alert(1)</script>"}]}"#;
    let store = ProjectStore::from_json(json.as_bytes()).unwrap();
    let mut grid = CardContainer::new();
    grid.render(store.list());
    // The view model carries raw text; the UI inserts it as a text node.
    assert_eq!(grid.card_by_id("x").unwrap().title, "<script>alert(1)</script>");
}

// ============================================================================
// Bundled Data
// ============================================================================

#[test]
fn test_bundled_data_covers_every_filter() {
    let bytes = include_bytes!("../../../assets/data/projects.json");
    let store = ProjectStore::from_json(bytes).expect("bundled data parses");
    assert!(!store.is_fallback());

    for stack in Stack::FILTERABLE {
        let token = FilterToken::Stack(stack.clone());
        assert!(
            !token.apply(store.list()).is_empty(),
            "no bundled project for {stack}"
        );
    }
}
