//! Filter Pills Component
//!
//! The row of stack filter buttons above the project grid. Exactly one
//! pill is active; selection is owned by a [`FilterBar`].

use dioxus::prelude::*;
use portfolio_core::FilterBar;

/// Properties for the FilterPills component
#[derive(Clone, PartialEq, Props)]
pub struct FilterPillsProps {
    pub bar: FilterBar,
    /// Called with the index of the clicked button
    pub on_select: EventHandler<usize>,
}

/// CSS class of a pill in the given selection state.
pub fn pill_class(active: bool) -> &'static str {
    if active {
        "filter-btn active"
    } else {
        "filter-btn"
    }
}

/// Displays the filter buttons as a tab list
///
/// # Example
///
/// ```rust,ignore
/// let mut filters = use_signal(FilterBar::default);
///
/// rsx! {
///     FilterPills {
///         bar: filters(),
///         on_select: move |idx| { filters.write().select(idx); }
///     }
/// }
/// ```
#[component]
pub fn FilterPills(props: FilterPillsProps) -> Element {
    rsx! {
        div {
            class: "portfolio-filters",
            role: "tablist",
            "aria-label": "Filter projects by stack",
            for (idx, button) in props.bar.buttons().iter().enumerate() {
                {
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            key: "{button.token}",
                            class: pill_class(button.active),
                            r#type: "button",
                            role: "tab",
                            "data-filter": "{button.token}",
                            "aria-selected": button.aria_selected(),
                            onclick: move |_| on_select.call(idx),
                            "{button.label}"
                        }
                    }
                }
            }
        }
    }
}
