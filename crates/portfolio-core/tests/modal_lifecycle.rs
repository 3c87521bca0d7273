//! Modal lifecycle tests
//!
//! Open/close transitions, content replacement and keyboard handling of
//! the project modal.

use portfolio_core::modal::ImpactEntry;
use portfolio_core::{
    FocusTarget, HideOutcome, KeyOutcome, ModalController, ModalKey, ModalState, ProjectStore,
};

// ============================================================================
// Test Utilities
// ============================================================================

fn store() -> ProjectStore {
    ProjectStore::from_json(
        br#"{
      "projects": [
        {
          "id": "crm",
          "title": "Sales CRM",
          "category": "Management",
          "short": "Pipeline tracking.",
          "description": "A CRM for a regional distributor.",
          "stack": "nextjs",
          "tech": ["Next.js", "Prisma"],
          "highlights": ["Kanban pipeline", "Role-based access"],
          "impact": { "conversion": "+22%", "satisfaction": "4.8/5" },
          "role": "Full-stack Developer",
          "date": "2024-05-02",
          "url": "https://crm.example",
          "github": "https://github.com/me/crm"
        },
        {
          "id": "poster",
          "title": "Event Posters",
          "category": "Design",
          "short": "Print material."
        }
      ]
    }"#,
    )
    .unwrap()
}

// ============================================================================
// Show / Hide
// ============================================================================

#[test]
fn test_show_valid_id_opens_with_title() {
    let store = store();
    let mut modal = ModalController::new();

    assert!(modal.show(&store, "crm"));
    assert_eq!(modal.state(), ModalState::Open);
    assert_eq!(modal.view().unwrap().title, "Sales CRM");
    assert_eq!(modal.current_project().unwrap().id, "crm");
    assert_eq!(modal.aria_hidden(), "false");
}

#[test]
fn test_show_invalid_id_keeps_state() {
    let store = store();
    let mut modal = ModalController::new();

    assert!(!modal.show(&store, "missing"));
    assert_eq!(modal.state(), ModalState::Closed);
    assert!(modal.current_project().is_none());

    modal.show(&store, "crm");
    assert!(!modal.show(&store, "missing"));
    assert_eq!(modal.state(), ModalState::Open);
    assert_eq!(modal.current_project().unwrap().id, "crm");
    assert_eq!(modal.view().unwrap().title, "Sales CRM");
}

#[test]
fn test_hide_while_closed_is_noop() {
    let store = store();
    let mut modal = ModalController::new();
    assert!(modal.hide().is_none());

    modal.show(&store, "crm");
    assert!(modal.hide().is_some());
    assert!(modal.hide().is_none());
    assert_eq!(modal.state(), ModalState::Closed);
}

#[test]
fn test_hide_after_show_clears_current_record() {
    let store = store();
    let mut modal = ModalController::new();
    modal.show(&store, "poster");

    let outcome = modal.hide().unwrap();
    assert_eq!(modal.state(), ModalState::Closed);
    assert!(modal.current_project().is_none());
    assert_eq!(modal.aria_hidden(), "true");
    assert!(!modal.scroll_locked());
    // Focus goes back to the card that opened the modal.
    assert_eq!(
        outcome,
        HideOutcome {
            restore_focus_to: "poster".into()
        }
    );
}

// ============================================================================
// Content
// ============================================================================

#[test]
fn test_full_record_populates_every_slot() {
    let store = store();
    let mut modal = ModalController::new();
    modal.show(&store, "crm");
    let view = modal.view().unwrap();

    assert_eq!(view.icon, "fas fa-cube");
    assert_eq!(view.stack_icon, "fas fa-cube");
    assert_eq!(view.stack_name, "NEXTJS");
    assert_eq!(view.description, "A CRM for a regional distributor.");
    assert_eq!(view.highlights, ["Kanban pipeline", "Role-based access"]);
    assert_eq!(view.tech, ["Next.js", "Prisma"]);
    assert_eq!(
        view.impact,
        [
            ImpactEntry { value: "+22%".into(), label: "Conversion Rate".into() },
            ImpactEntry { value: "4.8/5".into(), label: "User Rating".into() },
        ]
    );
    assert_eq!(view.role, "Full-stack Developer");
    assert_eq!(view.category, "Management");
    assert_eq!(view.date, "May 2, 2024");
    assert_eq!(view.demo_url.as_deref(), Some("https://crm.example"));
    assert_eq!(view.github_url.as_deref(), Some("https://github.com/me/crm"));
}

#[test]
fn test_missing_impact_hides_section() {
    let store = store();
    let mut modal = ModalController::new();
    modal.show(&store, "poster");
    let view = modal.view().unwrap();

    assert!(!view.show_impact());
    assert!(!view.show_highlights());
    assert!(!view.show_tech());
    assert!(view.demo_url.is_none());
    assert!(view.github_url.is_none());
    assert_eq!(view.description, "Print material.");
}

#[test]
fn test_second_show_replaces_all_content() {
    let store = store();
    let mut modal = ModalController::new();

    modal.show(&store, "crm");
    modal.show(&store, "poster");

    let view = modal.view().unwrap();
    assert_eq!(view.project_id, "poster");
    assert_eq!(view.title, "Event Posters");
    assert!(view.highlights.is_empty());
    assert!(view.tech.is_empty());
    assert!(view.impact.is_empty());
    assert_eq!(view.role, "Developer");
    assert!(view.demo_url.is_none());
    assert!(view.github_url.is_none());
    assert_eq!(modal.current_project().unwrap().id, "poster");

    // And back again: sections hidden for "poster" reappear.
    modal.show(&store, "crm");
    let view = modal.view().unwrap();
    assert!(view.show_highlights());
    assert!(view.show_impact());
}

// ============================================================================
// Keyboard
// ============================================================================

#[test]
fn test_focus_trap_with_links() {
    let store = store();
    let mut modal = ModalController::new();
    modal.show(&store, "crm");

    assert_eq!(
        modal.focus_order(),
        [
            FocusTarget::HeaderClose,
            FocusTarget::FooterClose,
            FocusTarget::DemoLink,
            FocusTarget::CodeLink
        ]
    );
    assert_eq!(
        modal.handle_key(ModalKey::Tab, false, Some(FocusTarget::CodeLink)),
        KeyOutcome::MoveFocus(FocusTarget::HeaderClose)
    );
    assert_eq!(
        modal.handle_key(ModalKey::Tab, true, Some(FocusTarget::HeaderClose)),
        KeyOutcome::MoveFocus(FocusTarget::CodeLink)
    );
    assert_eq!(
        modal.handle_key(ModalKey::Tab, false, Some(FocusTarget::FooterClose)),
        KeyOutcome::Ignored
    );
}

#[test]
fn test_focus_set_recomputed_after_content_change() {
    let store = store();
    let mut modal = ModalController::new();
    modal.show(&store, "crm");
    modal.show(&store, "poster");

    // The code link is gone, so Tab from the footer close button wraps.
    assert_eq!(
        modal.handle_key(ModalKey::Tab, false, Some(FocusTarget::FooterClose)),
        KeyOutcome::MoveFocus(FocusTarget::HeaderClose)
    );
}

#[test]
fn test_escape_only_when_open() {
    let store = store();
    let mut modal = ModalController::new();
    assert_eq!(modal.handle_key(ModalKey::Escape, false, None), KeyOutcome::Ignored);

    modal.show(&store, "crm");
    let outcome = modal.handle_key(ModalKey::Escape, false, None);
    assert!(matches!(outcome, KeyOutcome::Closed(ref h) if h.restore_focus_to == "crm"));
    assert!(outcome.prevents_default());
    assert!(!modal.is_open());
}

/// Clicking modal text parks focus on the dialog itself, outside every control
#[test]
fn test_tab_from_dialog_body_returns_to_controls() {
    let store = store();
    let mut modal = ModalController::new();
    modal.show(&store, "crm");

    assert_eq!(
        modal.handle_key(ModalKey::Tab, false, None),
        KeyOutcome::MoveFocus(FocusTarget::HeaderClose)
    );
    assert_eq!(
        modal.handle_key(ModalKey::Tab, true, None),
        KeyOutcome::MoveFocus(FocusTarget::CodeLink)
    );
    assert!(modal.is_open());
}

#[test]
fn test_other_keys_leave_modal_untouched() {
    let store = store();
    let mut modal = ModalController::new();
    modal.show(&store, "crm");
    let before = modal.clone();

    let outcome = modal.handle_key(ModalKey::Other, false, Some(FocusTarget::HeaderClose));
    assert_eq!(outcome, KeyOutcome::Ignored);
    assert!(!outcome.prevents_default());
    assert_eq!(modal, before);
}
