//! Standalone detail page, reached via `/portfolio-details?id=<id>`.
//!
//! Shows a placeholder until the store settles. Unknown or missing ids keep
//! the placeholder.

use dioxus::prelude::*;
use portfolio_core::{detail, DetailView};

use crate::app::Route;
use crate::context::use_store;

#[component]
pub fn ProjectDetails(id: String) -> Element {
    let store = use_store();

    let bound = use_resource(use_reactive!(|id| {
        let store = store.clone();
        async move { detail::bind(&store, Some(id.as_str())).await }
    }));

    let view = bound
        .cloned()
        .flatten()
        .unwrap_or_else(DetailView::placeholder);

    rsx! {
        main { class: "portfolio-details",
            nav { class: "breadcrumbs",
                Link { to: Route::Home {}, "Home" }
                span { " / " }
                span { "Portfolio Details" }
            }

            div { class: "details-layout",
                div { class: "portfolio-details-slider",
                    for slide in view.slides.iter() {
                        div { class: "swiper-slide",
                            img { src: "{slide.image}", alt: "{slide.alt}" }
                        }
                    }
                }

                aside { class: "portfolio-info",
                    h3 { "{view.title}" }
                    ul {
                        for item in view.info.iter() {
                            li {
                                strong { "{item.label}" }
                                ": {item.value}"
                            }
                        }
                    }
                }
            }

            div { class: "portfolio-description",
                h2 { "{view.title}" }
                p { "{view.description}" }
            }
        }
    }
}
