//! Stack and impact badges shown on project cards.

use dioxus::prelude::*;
use portfolio_core::ImpactHighlight;

/// Small badge naming the project's stack, e.g. "LARAVEL" or "WEB".
#[component]
pub fn StackBadge(icon: &'static str, label: String) -> Element {
    rsx! {
        span { class: "stack-badge",
            i { class: "{icon}" }
            " {label}"
        }
    }
}

/// Headline impact metric; the first entry of the record's impact map.
#[component]
pub fn ImpactBadge(highlight: ImpactHighlight) -> Element {
    rsx! {
        div { class: "impact-highlight",
            span { class: "impact-value", "{highlight.value}" }
            span { class: "impact-label", "{highlight.label}" }
        }
    }
}

/// Role and date line under a card title.
#[component]
pub fn ProjectMeta(role: String, date: String) -> Element {
    rsx! {
        div { class: "project-meta",
            span { class: "project-role",
                i { class: "fas fa-user" }
                " {role}"
            }
            span { class: "project-date",
                i { class: "fas fa-calendar" }
                " {date}"
            }
        }
    }
}
