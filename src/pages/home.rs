//! Home page - the project grid with stack filters.
//!
//! The grid waits for the store to settle, then re-renders whenever the
//! active filter changes. "Details" on a card opens the project modal.

use dioxus::prelude::*;
use portfolio_core::{CardContainer, FilterBar};
use portfolio_ui::FilterPills;

use crate::components::{ProjectGrid, ProjectModal};
use crate::context::{use_modal, use_store};

#[component]
pub fn Home() -> Element {
    let store = use_store();
    let mut modal = use_modal();
    let mut filters = use_signal(FilterBar::default);

    let loaded = use_resource(move || {
        let store = store.clone();
        async move { store.settled().await }
    });

    let grid = use_memo(move || {
        let loaded = loaded.cloned()?;
        let mut grid = CardContainer::new();
        grid.render(filters.read().apply(loaded.list()));
        Some(grid)
    });

    let open_details = move |id: String| {
        if let Some(loaded) = loaded.cloned() {
            modal.write().show(&loaded, &id);
        }
    };

    rsx! {
        main { class: "portfolio",
            header { class: "section-title",
                h2 { "Portfolio" }
                p { "Selected projects, filterable by the stack they are built on." }
            }

            FilterPills {
                bar: filters(),
                on_select: move |idx| {
                    if let Some(token) = filters.write().select(idx) {
                        tracing::debug!(filter = %token, "filter selected");
                    }
                },
            }

            if let Some(grid) = grid() {
                ProjectGrid { grid, on_details: open_details }
            } else {
                div { class: "loading-state", "Loading projects..." }
            }

            ProjectModal {}
        }
    }
}
