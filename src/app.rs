use dioxus::prelude::*;
use portfolio_core::{store, ModalController, StoreHandle};

use crate::context::{get_config, CardFocus};
use crate::pages::{Home, ProjectDetails};
use crate::theme::GLOBAL_STYLES;

const FONT_AWESOME: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";

/// Application routes.
///
/// - `/` - Project grid with stack filters and the detail modal
/// - `/portfolio-details?id=<id>` - Standalone detail page for one project
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/portfolio-details?:id")]
    ProjectDetails { id: String },
}

/// Root application component.
///
/// Provides global styles, the project store, the modal controller and
/// routing. The store is loaded once and settled for every consumer.
#[component]
pub fn App() -> Element {
    let handle = use_context_provider(StoreHandle::new);
    let modal: Signal<ModalController> = use_signal(ModalController::new);
    let card_focus: Signal<CardFocus> = use_signal(CardFocus::default);

    use_context_provider(|| modal);
    use_context_provider(|| card_focus);

    use_effect(move || {
        let handle = handle.clone();
        spawn(async move {
            let config = get_config();
            let loaded = store::load(&config).await;
            tracing::info!(projects = loaded.len(), origin = ?loaded.origin(), "project store ready");
            handle.settle(loaded);
        });
    });

    rsx! {
        document::Link { rel: "stylesheet", href: FONT_AWESOME }
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
