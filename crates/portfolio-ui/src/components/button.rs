//! Button Components
//!
//! - Primary: filled call to action
//! - Outline: card actions such as "Details"
//! - Ghost: low-emphasis actions such as the modal footer "Close"

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Outline => "btn btn-outline",
            ButtonVariant::Ghost => "btn btn-ghost",
        }
    }
}

fn join_class(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{base} {extra}"),
        _ => base.to_string(),
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    pub children: Element,
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Fired once the element exists, e.g. to keep a focus handle
    #[props(default)]
    pub onmounted: Option<EventHandler<MountedEvent>>,
    #[props(default)]
    pub onfocus: Option<EventHandler<()>>,
    #[props(default)]
    pub aria_label: Option<String>,
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Outline,
///         onclick: move |_| open_modal(),
///         "Details"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let class = join_class(props.variant.class(), props.class.as_deref());
    let (onclick, onmounted, onfocus) = (props.onclick, props.onmounted, props.onfocus);

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            "aria-label": props.aria_label.clone(),
            onmounted: move |evt| {
                if let Some(handler) = onmounted {
                    handler.call(evt);
                }
            },
            onfocus: move |_| {
                if let Some(handler) = onfocus {
                    handler.call(());
                }
            },
            onclick: move |_| {
                if let Some(handler) = onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Close button with an x glyph
#[derive(Clone, PartialEq, Props)]
pub struct CloseButtonProps {
    pub onclick: EventHandler<()>,
    #[props(default)]
    pub onmounted: Option<EventHandler<MountedEvent>>,
    #[props(default)]
    pub onfocus: Option<EventHandler<()>>,
}

#[component]
pub fn CloseButton(props: CloseButtonProps) -> Element {
    let (onclick, onmounted, onfocus) = (props.onclick, props.onmounted, props.onfocus);

    rsx! {
        button {
            class: "btn btn-ghost close-btn",
            r#type: "button",
            "aria-label": "Close",
            onmounted: move |evt| {
                if let Some(handler) = onmounted {
                    handler.call(evt);
                }
            },
            onfocus: move |_| {
                if let Some(handler) = onfocus {
                    handler.call(());
                }
            },
            onclick: move |_| onclick.call(()),
            "\u{00D7}"
        }
    }
}

/// External link styled as a button, opened in a new window.
#[derive(Clone, PartialEq, Props)]
pub struct LinkButtonProps {
    pub href: String,
    /// Font Awesome classes for the leading icon
    pub icon: &'static str,
    pub label: String,
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default)]
    pub onmounted: Option<EventHandler<MountedEvent>>,
    #[props(default)]
    pub onfocus: Option<EventHandler<()>>,
}

#[component]
pub fn LinkButton(props: LinkButtonProps) -> Element {
    let (onmounted, onfocus) = (props.onmounted, props.onfocus);
    let class = props.variant.class();

    rsx! {
        a {
            class: class,
            href: "{props.href}",
            target: "_blank",
            rel: "noopener",
            onmounted: move |evt| {
                if let Some(handler) = onmounted {
                    handler.call(evt);
                }
            },
            onfocus: move |_| {
                if let Some(handler) = onfocus {
                    handler.call(());
                }
            },
            i { class: "{props.icon}" }
            " {props.label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn btn-primary");
        assert_eq!(ButtonVariant::Outline.class(), "btn btn-outline");
        assert_eq!(ButtonVariant::Ghost.class(), "btn btn-ghost");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }

    #[test]
    fn extra_class_is_appended() {
        assert_eq!(join_class("btn", None), "btn");
        assert_eq!(join_class("btn", Some("")), "btn");
        assert_eq!(join_class("btn", Some("close-btn")), "btn close-btn");
    }
}
