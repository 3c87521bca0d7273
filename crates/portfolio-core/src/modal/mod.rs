//! Project modal state machine.
//!
//! A single overlay shows one project at a time. It is `Closed` until
//! [`ModalController::show`] finds the requested project, and goes back to
//! `Closed` on [`ModalController::hide`], Escape, or a backdrop click. While
//! open, Tab and Shift+Tab cycle through the modal's own controls only.
//!
//! The controller is UI-agnostic: it owns state and content, and tells the
//! caller where focus has to go. The Dioxus overlay renders from it.

mod focus;
mod view;

pub use focus::{trap_focus, FocusTarget, ModalKey};
pub use view::{ImpactEntry, ModalView};

use crate::store::ProjectStore;
use crate::types::Project;

/// Modal lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

/// Result of an Open → Closed transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HideOutcome {
    /// Id of the dismissed project, captured before the current record is
    /// cleared; the card with this `data-project-id` gets focus back.
    pub restore_focus_to: String,
}

/// What a key press did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Not handled; the default action proceeds
    Ignored,
    /// Escape closed the modal
    Closed(HideOutcome),
    /// Tab wrapped; focus must move to this control
    MoveFocus(FocusTarget),
}

impl KeyOutcome {
    /// Whether the browser's default handling must be suppressed.
    pub fn prevents_default(&self) -> bool {
        !matches!(self, KeyOutcome::Ignored)
    }
}

/// The singleton project modal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalController {
    mounted: bool,
    state: ModalState,
    current: Option<Project>,
    view: Option<ModalView>,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the overlay once. Returns `true` only on the first call.
    pub fn mount(&mut self) -> bool {
        if self.mounted {
            return false;
        }
        self.mounted = true;
        tracing::debug!("project modal mounted");
        true
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == ModalState::Open
    }

    /// The project on display, `None` while closed.
    pub fn current_project(&self) -> Option<&Project> {
        self.current.as_ref()
    }

    /// Content of the overlay slots.
    ///
    /// Kept after closing so the close transition still has something to
    /// show; replaced wholesale by the next successful `show`.
    pub fn view(&self) -> Option<&ModalView> {
        self.view.as_ref()
    }

    /// Open the modal on project `id`.
    ///
    /// Unknown ids are logged and leave the state untouched. Showing while
    /// already open replaces the content.
    pub fn show(&mut self, store: &ProjectStore, id: &str) -> bool {
        self.mount();

        let Some(project) = store.find_by_id(id) else {
            tracing::error!(id, "project not found, modal not opened");
            return false;
        };

        self.view = Some(ModalView::from_project(project));
        self.current = Some(project.clone());
        self.state = ModalState::Open;
        tracing::debug!(id, "project modal opened");
        true
    }

    /// Close the modal. No-op (returns `None`) when already closed.
    pub fn hide(&mut self) -> Option<HideOutcome> {
        if !self.mounted || !self.is_open() {
            return None;
        }

        let restore_focus_to = self
            .current
            .take()
            .map(|p| p.id)
            .unwrap_or_default();
        self.state = ModalState::Closed;
        tracing::debug!(id = %restore_focus_to, "project modal closed");

        Some(HideOutcome { restore_focus_to })
    }

    /// React to a key press while the modal may be open.
    ///
    /// `focused` is the modal control holding focus, if any.
    pub fn handle_key(
        &mut self,
        key: ModalKey,
        shift: bool,
        focused: Option<FocusTarget>,
    ) -> KeyOutcome {
        if !self.is_open() {
            return KeyOutcome::Ignored;
        }
        match key {
            ModalKey::Escape => match self.hide() {
                Some(outcome) => KeyOutcome::Closed(outcome),
                None => KeyOutcome::Ignored,
            },
            ModalKey::Tab => {
                let order = self.focus_order();
                match trap_focus(&order, focused, shift) {
                    Some(target) => KeyOutcome::MoveFocus(target),
                    None => KeyOutcome::Ignored,
                }
            }
            ModalKey::Other => KeyOutcome::Ignored,
        }
    }

    /// Visible focusable controls, recomputed from the current content.
    pub fn focus_order(&self) -> Vec<FocusTarget> {
        self.view
            .as_ref()
            .map(ModalView::focus_order)
            .unwrap_or_default()
    }

    /// Value of the overlay's `aria-hidden` attribute.
    pub fn aria_hidden(&self) -> &'static str {
        if self.is_open() {
            "false"
        } else {
            "true"
        }
    }

    /// CSS classes of the overlay root.
    pub fn class(&self) -> &'static str {
        if self.is_open() {
            "project-modal modal-open"
        } else {
            "project-modal"
        }
    }

    /// Whether page scrolling is suspended.
    pub fn scroll_locked(&self) -> bool {
        self.is_open()
    }
}
