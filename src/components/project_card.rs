//! Project Card Component

use dioxus::prelude::*;
use portfolio_core::CardView;
use portfolio_ui::{Button, ButtonVariant, ImpactBadge, LinkButton, ProjectMeta, StackBadge, TechTags};

use crate::context::use_card_focus;

/// One project card in the grid.
///
/// The "Details" button registers itself in the card focus registry so the
/// modal can hand focus back to it on close.
#[component]
pub fn ProjectCard(card: CardView, on_details: EventHandler<String>) -> Element {
    let mut card_focus = use_card_focus();

    let details_id = card.id.clone();
    let mounted_id = card.id.clone();

    rsx! {
        article { class: "portfolio-card", "data-project-id": "{card.id}",
            div { class: "card-header",
                div { class: "project-icon",
                    i { class: "{card.icon}" }
                }
                StackBadge { icon: card.stack_icon, label: card.stack_badge.clone() }
            }

            div { class: "card-body",
                h3 { class: "project-title", "{card.title}" }
                p { class: "project-short", "{card.short}" }
                TechTags { tags: card.tech.clone() }
                if let Some(highlight) = card.impact.clone() {
                    ImpactBadge { highlight }
                }
                ProjectMeta { role: card.role.clone(), date: card.date.clone() }
            }

            div { class: "card-actions",
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_details.call(details_id.clone()),
                    onmounted: move |evt: MountedEvent| {
                        card_focus.write().insert(mounted_id.clone(), evt.data());
                    },
                    i { class: "fas fa-eye" }
                    " Details"
                }
                Link { class: "btn btn-ghost".to_string(), to: card.detail_href.clone(), "Read more" }
                if let Some(href) = card.demo_url.clone() {
                    LinkButton { href, icon: "fas fa-external-link-alt", label: "Live Demo".to_string() }
                }
                if let Some(href) = card.github_url.clone() {
                    LinkButton { href, icon: "fab fa-github", label: "Code".to_string() }
                }
            }
        }
    }
}
