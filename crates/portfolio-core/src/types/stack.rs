//! Technology stack identifiers and their presentation tables.
//!
//! A project's `stack` drives three things: which filter button selects it,
//! the small badge on its card, and the large icon shown on the card and in
//! the modal. All three are total functions over [`Stack`]; stacks we have
//! no dedicated artwork for land in [`Stack::Other`] and take the explicit
//! default arm.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Icon used when neither stack nor category has an entry.
pub const DEFAULT_PROJECT_ICON: &str = "fas fa-laptop-code";

/// Stack badge icon for stacks without dedicated artwork.
pub const DEFAULT_STACK_ICON: &str = "fas fa-code";

/// Badge label for projects that carry no stack at all.
pub const WEB_BADGE: &str = "WEB";

/// Technology stack a project is built on.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Stack {
    Laravel,
    NextJs,
    Mern,
    Go,
    Java,
    Kotlin,
    Php,
    JavaScript,
    React,
    /// Any other stack token, kept lowercase.
    Other(String),
}

impl Stack {
    /// Stacks offered as filter buttons, in button order.
    pub const FILTERABLE: [Stack; 7] = [
        Stack::Laravel,
        Stack::NextJs,
        Stack::Mern,
        Stack::Go,
        Stack::Java,
        Stack::Kotlin,
        Stack::Php,
    ];

    /// Canonical lowercase token, as written in the data resource.
    pub fn token(&self) -> &str {
        match self {
            Stack::Laravel => "laravel",
            Stack::NextJs => "nextjs",
            Stack::Mern => "mern",
            Stack::Go => "go",
            Stack::Java => "java",
            Stack::Kotlin => "kotlin",
            Stack::Php => "php",
            Stack::JavaScript => "javascript",
            Stack::React => "react",
            Stack::Other(raw) => raw,
        }
    }

    /// Human-facing name used on filter buttons.
    pub fn display_name(&self) -> String {
        match self {
            Stack::Laravel => "Laravel".to_string(),
            Stack::NextJs => "Next.js".to_string(),
            Stack::Mern => "MERN".to_string(),
            Stack::Go => "Go".to_string(),
            Stack::Java => "Java".to_string(),
            Stack::Kotlin => "Kotlin".to_string(),
            Stack::Php => "PHP".to_string(),
            Stack::JavaScript => "JavaScript".to_string(),
            Stack::React => "React".to_string(),
            Stack::Other(raw) => capitalize(raw),
        }
    }

    /// Badge text: the token upper-cased.
    pub fn badge(&self) -> String {
        self.token().to_uppercase()
    }

    /// Icon for the small stack badge.
    pub fn stack_icon(&self) -> &'static str {
        match self {
            Stack::Laravel => "fab fa-laravel",
            Stack::NextJs => "fas fa-cube",
            Stack::Mern => "fab fa-react",
            Stack::Go => "fab fa-golang",
            Stack::Java => "fab fa-java",
            Stack::Kotlin => "fab fa-android",
            Stack::Php => "fab fa-php",
            Stack::JavaScript => "fab fa-js",
            Stack::React | Stack::Other(_) => DEFAULT_STACK_ICON,
        }
    }

    /// Large project icon for this stack, if the stack has one.
    ///
    /// `Other` stacks return `None` so the caller can fall through to the
    /// category table.
    fn project_icon(&self) -> Option<&'static str> {
        match self {
            Stack::Laravel => Some("fab fa-laravel"),
            Stack::NextJs => Some("fas fa-cube"),
            Stack::Mern | Stack::React => Some("fab fa-react"),
            Stack::Go => Some("fab fa-golang"),
            Stack::Java => Some("fab fa-java"),
            Stack::Kotlin => Some("fab fa-android"),
            Stack::Php => Some("fab fa-php"),
            Stack::JavaScript => Some("fab fa-js-square"),
            Stack::Other(_) => None,
        }
    }
}

impl From<String> for Stack {
    fn from(raw: String) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "laravel" => Stack::Laravel,
            "nextjs" | "next.js" | "next" => Stack::NextJs,
            "mern" => Stack::Mern,
            "go" | "golang" => Stack::Go,
            "java" => Stack::Java,
            "kotlin" => Stack::Kotlin,
            "php" => Stack::Php,
            "javascript" | "js" => Stack::JavaScript,
            "react" => Stack::React,
            other => Stack::Other(other.to_string()),
        }
    }
}

impl From<Stack> for String {
    fn from(stack: Stack) -> Self {
        stack.token().to_string()
    }
}

impl FromStr for Stack {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Stack::from(s.to_string()))
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Badge text for an optional stack (absent stacks read as web projects).
pub fn stack_badge(stack: Option<&Stack>) -> String {
    stack.map(Stack::badge).unwrap_or_else(|| WEB_BADGE.to_string())
}

/// Badge icon for an optional stack.
pub fn stack_icon(stack: Option<&Stack>) -> &'static str {
    stack.map(Stack::stack_icon).unwrap_or(DEFAULT_STACK_ICON)
}

/// Large project icon: by stack first, then by category, then the default.
///
/// An `Other` stack token is looked up in the category table before the
/// category itself, so a project tagged `stack: "mobile"` still gets the
/// mobile icon.
pub fn project_icon(stack: Option<&Stack>, category: &str) -> &'static str {
    if let Some(stack) = stack {
        if let Some(icon) = stack.project_icon() {
            return icon;
        }
        if let Some(icon) = category_icon(stack.token()) {
            return icon;
        }
    }
    category_icon(category).unwrap_or(DEFAULT_PROJECT_ICON)
}

/// Icon for a coarse project category, case-insensitive.
pub fn category_icon(category: &str) -> Option<&'static str> {
    let icon = match category.trim().to_lowercase().as_str() {
        "web" => "fas fa-globe",
        "mobile" => "fas fa-mobile-alt",
        "api" => "fas fa-plug",
        "system" => "fas fa-server",
        "database" => "fas fa-database",
        "education" => "fas fa-graduation-cap",
        "ecommerce" => "fas fa-shopping-cart",
        "finance" => "fas fa-coins",
        "management" => "fas fa-tasks",
        "library" => "fas fa-book",
        "corporate" => "fas fa-building",
        _ => return None,
    };
    Some(icon)
}

/// Upper-case the first character, leave the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Stack::from("Laravel".to_string()), Stack::Laravel);
        assert_eq!(Stack::from(" GO ".to_string()), Stack::Go);
        assert_eq!(
            Stack::from("Rust".to_string()),
            Stack::Other("rust".to_string())
        );
    }

    #[test]
    fn token_roundtrips_through_serde() {
        let json = serde_json::to_string(&Stack::NextJs).unwrap();
        assert_eq!(json, "\"nextjs\"");
        let back: Stack = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Stack::NextJs);
    }

    #[test]
    fn badge_defaults_to_web() {
        assert_eq!(stack_badge(None), "WEB");
        assert_eq!(stack_badge(Some(&Stack::Php)), "PHP");
        assert_eq!(stack_badge(Some(&Stack::Other("elixir".into()))), "ELIXIR");
    }

    #[test]
    fn stack_icon_table() {
        assert_eq!(stack_icon(Some(&Stack::JavaScript)), "fab fa-js");
        assert_eq!(stack_icon(Some(&Stack::React)), DEFAULT_STACK_ICON);
        assert_eq!(stack_icon(None), DEFAULT_STACK_ICON);
    }

    #[test]
    fn project_icon_prefers_stack_then_category() {
        assert_eq!(project_icon(Some(&Stack::Go), "Web"), "fab fa-golang");
        assert_eq!(project_icon(Some(&Stack::JavaScript), "Web"), "fab fa-js-square");
        assert_eq!(project_icon(None, "Web"), "fas fa-globe");
        assert_eq!(
            project_icon(Some(&Stack::Other("mobile".into())), "Design"),
            "fas fa-mobile-alt"
        );
        assert_eq!(
            project_icon(Some(&Stack::Other("elixir".into())), "Library"),
            "fas fa-book"
        );
        assert_eq!(project_icon(None, "Design"), DEFAULT_PROJECT_ICON);
    }

    #[test]
    fn capitalize_first_char_only() {
        assert_eq!(capitalize("uptime"), "Uptime");
        assert_eq!(capitalize("aBC"), "ABC");
        assert_eq!(capitalize(""), "");
    }
}
