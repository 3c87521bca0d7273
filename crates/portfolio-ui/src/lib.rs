//! Portfolio UI Components
//!
//! Dioxus building blocks shared by the portfolio pages: buttons, the stack
//! filter bar, technology tags and stack/impact badges.
//!
//! Components here are presentational. They take view models from
//! `portfolio-core` and report user intent through event handlers; state
//! lives with the pages that own the store and the modal controller.

pub mod components;

pub use components::*;
