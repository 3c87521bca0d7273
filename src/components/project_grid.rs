//! Project Grid Component
//!
//! Mounts one card per node of a rendered [`CardContainer`], or the
//! single placeholder when the filter matched nothing.

use dioxus::prelude::*;
use portfolio_core::{CardContainer, GridNode};

use super::ProjectCard;

#[component]
pub fn ProjectGrid(
    /// Rendered grid content
    grid: CardContainer,
    /// Called with the project id when a card's "Details" is pressed
    on_details: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "portfolio-grid", id: "portfolioGrid",
            for node in grid.nodes().iter() {
                {
                    match node {
                        GridNode::Card(card) => rsx! {
                            ProjectCard { key: "{card.id}", card: card.clone(), on_details }
                        },
                        GridNode::Placeholder(message) => rsx! {
                            div { class: "no-results",
                                i { class: "fas fa-search" }
                                p { "{message}" }
                            }
                        },
                    }
                }
            }
        }
    }
}
