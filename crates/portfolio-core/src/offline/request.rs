//! Request and response values seen by the offline worker.

use bytes::Bytes;
use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, PortfolioResult};

/// How the request was initiated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RequestMode {
    /// Top-level page navigation; may fall back to the cached shell
    Navigate,
    /// Subresource fetch (script, image, data)
    #[default]
    Subresource,
}

/// An intercepted GET request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    url: Url,
    mode: RequestMode,
}

impl Request {
    pub fn new(url: Url, mode: RequestMode) -> Self {
        Self { url, mode }
    }

    /// Parse a subresource request.
    pub fn get(url: &str) -> PortfolioResult<Self> {
        Ok(Self::new(parse_url(url)?, RequestMode::Subresource))
    }

    /// Parse a navigation request.
    pub fn navigate(url: &str) -> PortfolioResult<Self> {
        Ok(Self::new(parse_url(url)?, RequestMode::Navigate))
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn mode(&self) -> RequestMode {
        self.mode
    }

    pub fn is_navigation(&self) -> bool {
        self.mode == RequestMode::Navigate
    }

    /// Key under which the response is cached: the URL without its fragment.
    pub fn cache_key(&self) -> String {
        cache_key(&self.url)
    }
}

/// A response body plus the bits of metadata worth caching.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl Response {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            content_type: None,
            body: body.into(),
        }
    }

    pub fn ok(body: impl Into<Bytes>) -> Self {
        Self::new(200, body)
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Only exact 200s are stored in the cache.
    pub fn is_cacheable(&self) -> bool {
        self.status == 200
    }
}

pub(crate) fn parse_url(raw: &str) -> PortfolioResult<Url> {
    Url::parse(raw).map_err(|e| PortfolioError::InvalidUrl(format!("{raw}: {e}")))
}

pub(crate) fn cache_key(url: &Url) -> String {
    let mut url = url.clone();
    url.set_fragment(None);
    url.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_key_drops_fragment() {
        let req = Request::get("https://example.org/index.html#projects").unwrap();
        assert_eq!(req.cache_key(), "https://example.org/index.html");
    }

    #[test]
    fn invalid_url_is_an_error() {
        assert!(matches!(
            Request::get("not a url"),
            Err(PortfolioError::InvalidUrl(_))
        ));
    }

    #[test]
    fn only_200_is_cacheable() {
        assert!(Response::ok("x").is_cacheable());
        assert!(!Response::new(204, "").is_cacheable());
        assert!(!Response::new(404, "missing").is_cacheable());
    }
}
