//! Project Modal Component
//!
//! The single detail overlay on the home page. It is mounted once and only
//! its content and visibility change. State transitions live in
//! [`ModalController`]; this component applies their side effects: page
//! scroll lock, initial focus, the Tab trap and focus restoration.

use std::collections::HashMap;
use std::rc::Rc;

use dioxus::prelude::*;
use portfolio_core::{FocusTarget, HideOutcome, KeyOutcome, ModalController, ModalKey, ModalView};
use portfolio_ui::{Button, ButtonVariant, CloseButton, LinkButton, TechTags};

use crate::context::{focus_element, get_config, use_card_focus, use_modal, CardFocus};

type FocusHandles = HashMap<FocusTarget, Rc<MountedData>>;

fn modal_key(key: &Key) -> ModalKey {
    match key {
        Key::Escape => ModalKey::Escape,
        Key::Tab => ModalKey::Tab,
        _ => ModalKey::Other,
    }
}

fn register(mut handles: Signal<FocusHandles>, target: FocusTarget) -> EventHandler<MountedEvent> {
    EventHandler::new(move |evt: MountedEvent| {
        handles.write().insert(target, evt.data());
    })
}

fn track(mut focused: Signal<Option<FocusTarget>>, target: FocusTarget) -> EventHandler<()> {
    EventHandler::new(move |_| focused.set(Some(target)))
}

fn restore_card_focus(card_focus: Signal<CardFocus>, outcome: HideOutcome) {
    focus_element(card_focus.read().get(&outcome.restore_focus_to).cloned());
}

/// Suspend or resume page scrolling behind the overlay.
fn set_page_scroll(locked: bool) {
    let overflow = if locked { "hidden" } else { "" };
    // The script returns nothing, so the handle is not awaited.
    let _ = dioxus::document::eval(&format!("document.body.style.overflow = '{overflow}';"));
}

/// Run `on_change` with the open state on mount and on every Closed/Open
/// transition.
///
/// The memo only notifies when `is_open` flips, so content replacement and
/// key presses that leave the modal open do not re-run `on_change`.
fn use_open_transitions(modal: Signal<ModalController>, mut on_change: impl FnMut(bool) + 'static) {
    let is_open = use_memo(move || modal.read().is_open());
    use_effect(move || on_change(is_open()));
}

#[component]
pub fn ProjectModal() -> Element {
    let mut modal = use_modal();
    let card_focus = use_card_focus();
    let handles: Signal<FocusHandles> = use_signal(HashMap::new);
    let mut focused: Signal<Option<FocusTarget>> = use_signal(|| None);
    let mut content: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    use_effect(move || {
        modal.write().mount();
    });

    use_open_transitions(modal, move |open| {
        set_page_scroll(open);
        if !open {
            return;
        }

        // Keys reach the overlay's handler while the dialog holds focus.
        focus_element(content.peek().clone());

        let delay = get_config().open_focus_delay;
        spawn(async move {
            tokio::time::sleep(delay).await;
            if modal.peek().is_open() {
                let close = handles.peek().get(&FocusTarget::HeaderClose).cloned();
                focus_element(close);
            }
        });
    });

    let mut close = move || {
        if let Some(outcome) = modal.write().hide() {
            focused.set(None);
            restore_card_focus(card_focus, outcome);
        }
    };

    let on_keydown = move |evt: KeyboardEvent| {
        let key = modal_key(&evt.key());
        if key == ModalKey::Other || !modal.peek().is_open() {
            return;
        }

        let outcome = modal
            .write()
            .handle_key(key, evt.modifiers().shift(), focused());
        if outcome.prevents_default() {
            evt.prevent_default();
        }
        match outcome {
            KeyOutcome::Closed(hidden) => {
                focused.set(None);
                restore_card_focus(card_focus, hidden);
            }
            KeyOutcome::MoveFocus(target) => {
                focused.set(Some(target));
                focus_element(handles.peek().get(&target).cloned());
            }
            KeyOutcome::Ignored => {}
        }
    };

    let (class, aria_hidden, view) = {
        let state: &ModalController = &modal.read();
        (state.class(), state.aria_hidden(), state.view().cloned())
    };

    rsx! {
        div {
            class: "{class}",
            id: "projectModal",
            role: "dialog",
            "aria-modal": "true",
            "aria-hidden": aria_hidden,
            "aria-labelledby": "modalTitle",
            onkeydown: on_keydown,
            onclick: move |_| close(),

            // Focusable so clicks on plain text keep focus inside the dialog.
            div {
                class: "modal-content",
                tabindex: "-1",
                onmounted: move |evt: MountedEvent| content.set(Some(evt.data())),
                onfocus: move |_| focused.set(None),
                onclick: move |e| e.stop_propagation(),

                if let Some(view) = view {
                    ModalBody {
                        view,
                        on_close: move |_| close(),
                        handles,
                        focused,
                    }
                }
            }
        }
    }
}

#[component]
fn ModalBody(
    view: ModalView,
    on_close: EventHandler<()>,
    handles: Signal<FocusHandles>,
    focused: Signal<Option<FocusTarget>>,
) -> Element {
    rsx! {
        header { class: "modal-header",
            div { class: "modal-icon",
                i { class: "{view.icon}" }
            }
            div { class: "modal-heading",
                h2 { id: "modalTitle", class: "modal-title", "{view.title}" }
                span { class: "stack-badge",
                    i { class: "{view.stack_icon}" }
                    " {view.stack_name}"
                }
            }
            CloseButton {
                onclick: on_close,
                onmounted: register(handles, FocusTarget::HeaderClose),
                onfocus: track(focused, FocusTarget::HeaderClose),
            }
        }

        div { class: "modal-body",
            p { class: "modal-description", "{view.description}" }

            if view.show_highlights() {
                section { class: "modal-section",
                    h4 { "Key Features" }
                    ul { class: "modal-highlights",
                        for (idx, item) in view.highlights.iter().enumerate() {
                            li { key: "{idx}",
                                i { class: "fas fa-check" }
                                " {item}"
                            }
                        }
                    }
                }
            }

            if view.show_tech() {
                section { class: "modal-section",
                    h4 { "Technologies" }
                    TechTags { tags: view.tech.clone(), class: "modal-tech".to_string() }
                }
            }

            if view.show_impact() {
                section { class: "modal-section",
                    h4 { "Impact" }
                    div { class: "impact-grid",
                        for (idx, entry) in view.impact.iter().enumerate() {
                            div { key: "{idx}", class: "impact-item",
                                span { class: "impact-value", "{entry.value}" }
                                span { class: "impact-label", "{entry.label}" }
                            }
                        }
                    }
                }
            }

            ul { class: "modal-info",
                li {
                    strong { "Role" }
                    ": {view.role}"
                }
                li {
                    strong { "Category" }
                    ": {view.category}"
                }
                li {
                    strong { "Date" }
                    ": {view.date}"
                }
            }
        }

        footer { class: "modal-footer",
            Button {
                variant: ButtonVariant::Ghost,
                onclick: on_close,
                onmounted: register(handles, FocusTarget::FooterClose),
                onfocus: track(focused, FocusTarget::FooterClose),
                "Close"
            }
            if let Some(href) = view.demo_url.clone() {
                LinkButton {
                    href,
                    icon: "fas fa-external-link-alt",
                    label: "Live Demo".to_string(),
                    variant: ButtonVariant::Primary,
                    onmounted: register(handles, FocusTarget::DemoLink),
                    onfocus: track(focused, FocusTarget::DemoLink),
                }
            }
            if let Some(href) = view.github_url.clone() {
                LinkButton {
                    href,
                    icon: "fab fa-github",
                    label: "View Code".to_string(),
                    variant: ButtonVariant::Outline,
                    onmounted: register(handles, FocusTarget::CodeLink),
                    onfocus: track(focused, FocusTarget::CodeLink),
                }
            }
        }
    }
}
