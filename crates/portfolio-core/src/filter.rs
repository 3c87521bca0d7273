//! Stack filter buttons with exclusive selection.

use std::fmt;
use std::str::FromStr;

use crate::types::{Project, Stack};

/// Reserved token that disables filtering.
pub const ALL_TOKEN: &str = "all";

/// Which records a filter button selects.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FilterToken {
    #[default]
    All,
    Stack(Stack),
}

impl FilterToken {
    pub fn matches(&self, project: &Project) -> bool {
        match self {
            FilterToken::All => true,
            FilterToken::Stack(stack) => project.stack.as_ref() == Some(stack),
        }
    }

    /// Records matching this token, in their original order.
    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|p| self.matches(p)).collect()
    }

    pub fn label(&self) -> String {
        match self {
            FilterToken::All => "All".to_string(),
            FilterToken::Stack(stack) => stack.display_name(),
        }
    }
}

impl FromStr for FilterToken {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case(ALL_TOKEN) || s == "*" {
            Ok(FilterToken::All)
        } else {
            Ok(FilterToken::Stack(Stack::from(s.to_string())))
        }
    }
}

impl fmt::Display for FilterToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterToken::All => f.write_str(ALL_TOKEN),
            FilterToken::Stack(stack) => write!(f, "{stack}"),
        }
    }
}

/// One button in the filter group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterButton {
    pub token: FilterToken,
    pub label: String,
    pub active: bool,
}

impl FilterButton {
    pub fn new(token: FilterToken) -> Self {
        Self {
            label: token.label(),
            token,
            active: false,
        }
    }

    /// Value for the button's `aria-selected` attribute.
    pub fn aria_selected(&self) -> &'static str {
        if self.active {
            "true"
        } else {
            "false"
        }
    }
}

/// A fixed group of filter buttons; exactly one is active.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterBar {
    buttons: Vec<FilterButton>,
    active: usize,
}

impl Default for FilterBar {
    /// "All" followed by one button per filterable stack.
    fn default() -> Self {
        let tokens = std::iter::once(FilterToken::All)
            .chain(Stack::FILTERABLE.into_iter().map(FilterToken::Stack));
        Self::new(tokens)
    }
}

impl FilterBar {
    /// Build a group from tokens; the first button starts active.
    ///
    /// An empty token list yields a single "All" button.
    pub fn new(tokens: impl IntoIterator<Item = FilterToken>) -> Self {
        let mut buttons: Vec<FilterButton> = tokens.into_iter().map(FilterButton::new).collect();
        if buttons.is_empty() {
            buttons.push(FilterButton::new(FilterToken::All));
        }
        buttons[0].active = true;
        Self { buttons, active: 0 }
    }

    pub fn buttons(&self) -> &[FilterButton] {
        &self.buttons
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_token(&self) -> &FilterToken {
        &self.buttons[self.active].token
    }

    /// Click the button at `index`: it becomes the only active one.
    ///
    /// Returns the newly active token, or `None` for an out-of-range index
    /// (selection is left as it was).
    pub fn select(&mut self, index: usize) -> Option<&FilterToken> {
        if index >= self.buttons.len() {
            return None;
        }
        for (i, button) in self.buttons.iter_mut().enumerate() {
            button.active = i == index;
        }
        self.active = index;
        let token = &self.buttons[index].token;
        tracing::debug!(filter = %token, "filter selected");
        Some(token)
    }

    /// Select the button carrying `token`, if the group has one.
    pub fn select_token(&mut self, token: &FilterToken) -> Option<&FilterToken> {
        let index = self.buttons.iter().position(|b| &b.token == token)?;
        self.select(index)
    }

    /// Records matching the active button, in list order.
    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        self.active_token().apply(projects)
    }
}
