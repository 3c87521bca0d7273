//! Configuration for loading and presenting the portfolio.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use reqwest::Url;

use crate::error::{PortfolioError, PortfolioResult};
use crate::offline::DEFAULT_CACHE_NAME;

/// Default location of the project data resource.
pub const DEFAULT_DATA_PATH: &str = "assets/data/projects.json";

/// Delay before focus moves into a freshly opened modal, letting the open
/// transition render first.
pub const OPEN_FOCUS_DELAY: Duration = Duration::from_millis(100);

/// Where the project data resource lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProjectSource {
    /// Local JSON file
    File(PathBuf),
    /// Remote JSON document, fetched through the offline worker
    Url(Url),
}

impl Default for ProjectSource {
    fn default() -> Self {
        ProjectSource::File(PathBuf::from(DEFAULT_DATA_PATH))
    }
}

impl FromStr for ProjectSource {
    type Err = PortfolioError;

    /// `http://` and `https://` strings are URLs, anything else is a path.
    fn from_str(s: &str) -> PortfolioResult<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(PortfolioError::InvalidSource("empty source".to_string()));
        }
        if s.starts_with("http://") || s.starts_with("https://") {
            let url = Url::parse(s).map_err(|e| PortfolioError::InvalidSource(format!("{s}: {e}")))?;
            Ok(ProjectSource::Url(url))
        } else {
            Ok(ProjectSource::File(PathBuf::from(s)))
        }
    }
}

impl fmt::Display for ProjectSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectSource::File(path) => write!(f, "{}", path.display()),
            ProjectSource::Url(url) => write!(f, "{url}"),
        }
    }
}

/// Configuration for a portfolio session.
#[derive(Debug, Clone)]
pub struct PortfolioConfig {
    /// Project data resource.
    pub source: ProjectSource,
    /// Current offline cache generation.
    pub cache_name: String,
    /// On-disk cache database; `None` keeps the cache in memory.
    pub cache_path: Option<PathBuf>,
    /// Delay before focusing the modal's close control.
    pub open_focus_delay: Duration,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            source: ProjectSource::default(),
            cache_name: DEFAULT_CACHE_NAME.to_string(),
            cache_path: None,
            open_focus_delay: OPEN_FOCUS_DELAY,
        }
    }
}

impl PortfolioConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the project data resource.
    #[must_use]
    pub fn with_source(mut self, source: ProjectSource) -> Self {
        self.source = source;
        self
    }

    /// Sets the cache generation name.
    #[must_use]
    pub fn with_cache_name(mut self, name: impl Into<String>) -> Self {
        self.cache_name = name.into();
        self
    }

    /// Persists the offline cache at `path`.
    #[must_use]
    pub fn with_cache_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.cache_path = Some(path.into());
        self
    }

    /// Sets the modal focus delay.
    #[must_use]
    pub const fn with_open_focus_delay(mut self, delay: Duration) -> Self {
        self.open_focus_delay = delay;
        self
    }
}
