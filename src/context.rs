//! Shared state for the portfolio pages.
//!
//! ## Usage
//!
//! ```ignore
//! let store = use_store();
//! let mut modal = use_modal();
//!
//! if let Some(loaded) = store.get() {
//!     modal.write().show(&loaded, "perpus-sisinfo");
//! }
//! ```

use std::collections::HashMap;
use std::rc::Rc;

use dioxus::prelude::*;
use portfolio_core::{ModalController, PortfolioConfig, StoreHandle};

/// Mounted "Details" buttons keyed by project id.
///
/// Closing the modal returns focus to the button that opened it.
pub type CardFocus = HashMap<String, Rc<MountedData>>;

/// Get the session configuration.
pub fn get_config() -> PortfolioConfig {
    crate::get_config()
}

/// Hook to access the project store handle.
///
/// The handle is available immediately; await `settled()` for the data.
pub fn use_store() -> StoreHandle {
    use_context::<StoreHandle>()
}

/// Hook to access the single modal controller.
pub fn use_modal() -> Signal<ModalController> {
    use_context::<Signal<ModalController>>()
}

/// Hook to access the card focus registry.
pub fn use_card_focus() -> Signal<CardFocus> {
    use_context::<Signal<CardFocus>>()
}

/// Move keyboard focus to a mounted element, if it is still alive.
pub fn focus_element(element: Option<Rc<MountedData>>) {
    let Some(element) = element else {
        return;
    };
    spawn(async move {
        if let Err(e) = element.set_focus(true).await {
            tracing::debug!(error = ?e, "could not move focus");
        }
    });
}
