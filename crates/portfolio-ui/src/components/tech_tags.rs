//! Technology tag list, one tag per entry in the record's `tech` field.

use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct TechTagsProps {
    pub tags: Vec<String>,
    /// Container class; cards and the modal style their tags differently
    #[props(default = "tech-tags".to_string())]
    pub class: String,
}

/// Tags in source order. Renders nothing for an empty list.
#[component]
pub fn TechTags(props: TechTagsProps) -> Element {
    if props.tags.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "{props.class}",
            for (idx, tag) in props.tags.iter().enumerate() {
                span { key: "{idx}", class: "tech-tag", "{tag}" }
            }
        }
    }
}
