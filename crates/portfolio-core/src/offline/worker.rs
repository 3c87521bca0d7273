//! Network-first request interception with cache fallback.

use reqwest::Url;

use super::network::Network;
use super::request::{cache_key, Request, Response};
use super::storage::CacheStorage;
use crate::error::{PortfolioError, PortfolioResult};

/// Current cache generation. Bump to invalidate everything cached before.
pub const DEFAULT_CACHE_NAME: &str = "portfolio-v2";

/// Shell document served for navigations when offline, relative to the scope.
pub const SHELL_PATH: &str = "./index.html";

/// Lifecycle of the worker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WorkerState {
    #[default]
    Parsed,
    /// Installed; activation happens straight away rather than waiting
    /// for older workers to go idle
    Installed,
    /// Stale generations deleted, serving requests
    Activated,
}

/// What the worker did with a request.
#[derive(Debug)]
pub enum FetchOutcome {
    /// Cross-origin: left to the default network path
    PassThrough,
    /// Served from the live network
    Network(Response),
    /// Network failed, served from the cache
    Cache(Response),
    /// Network failed and nothing usable was cached
    Failed(PortfolioError),
}

impl FetchOutcome {
    pub fn response(&self) -> Option<&Response> {
        match self {
            FetchOutcome::Network(resp) | FetchOutcome::Cache(resp) => Some(resp),
            FetchOutcome::PassThrough | FetchOutcome::Failed(_) => None,
        }
    }
}

/// Offline-capable fetch interceptor for one origin.
pub struct OfflineWorker<N, C> {
    network: N,
    cache: C,
    cache_name: String,
    scope: Url,
    state: WorkerState,
}

impl<N: Network, C: CacheStorage> OfflineWorker<N, C> {
    /// Create a worker controlling `scope` (its origin decides what is intercepted).
    pub fn new(network: N, cache: C, scope: Url, cache_name: impl Into<String>) -> Self {
        Self {
            network,
            cache,
            cache_name: cache_name.into(),
            scope,
            state: WorkerState::Parsed,
        }
    }

    pub fn cache_name(&self) -> &str {
        &self.cache_name
    }

    pub fn scope(&self) -> &Url {
        &self.scope
    }

    pub fn state(&self) -> WorkerState {
        self.state
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Install step; nothing is precached.
    pub fn install(&mut self) {
        tracing::debug!(cache = %self.cache_name, "offline worker installed");
        self.state = WorkerState::Installed;
    }

    /// Delete every cache whose name is not the current one.
    ///
    /// Returns the deleted names.
    pub fn activate(&mut self) -> PortfolioResult<Vec<String>> {
        let mut deleted = Vec::new();
        for name in self.cache.cache_names()? {
            if name != self.cache_name && self.cache.delete(&name)? {
                deleted.push(name);
            }
        }
        if !deleted.is_empty() {
            tracing::info!(?deleted, current = %self.cache_name, "removed stale caches");
        }
        self.state = WorkerState::Activated;
        Ok(deleted)
    }

    /// Whether `request` targets the worker's own origin.
    pub fn is_same_origin(&self, request: &Request) -> bool {
        request.url().origin() == self.scope.origin()
    }

    /// Absolute URL of the cached shell document.
    pub fn shell_url(&self) -> PortfolioResult<Url> {
        self.scope
            .join(SHELL_PATH)
            .map_err(|e| PortfolioError::InvalidUrl(format!("{SHELL_PATH}: {e}")))
    }

    /// Intercept one request.
    pub async fn handle_fetch(&self, request: &Request) -> FetchOutcome {
        if !self.is_same_origin(request) {
            return FetchOutcome::PassThrough;
        }

        let err = match self.network.fetch(request).await {
            Ok(resp) => {
                if resp.is_cacheable() {
                    if let Err(e) = self.cache.put(&self.cache_name, &request.cache_key(), &resp) {
                        tracing::warn!(url = %request.url(), error = %e, "failed to cache response");
                    }
                }
                return FetchOutcome::Network(resp);
            }
            Err(e) => e,
        };

        tracing::debug!(url = %request.url(), error = %err, "network failed, trying cache");

        match self.cache_fallback(request) {
            Ok(Some(resp)) => FetchOutcome::Cache(resp),
            Ok(None) => FetchOutcome::Failed(PortfolioError::NotCached(format!(
                "{} ({err})",
                request.url()
            ))),
            Err(cache_err) => {
                tracing::warn!(url = %request.url(), error = %cache_err, "cache lookup failed");
                FetchOutcome::Failed(err)
            }
        }
    }

    /// Fetch through the worker, flattening the outcome into a result.
    ///
    /// Cross-origin requests go straight to the network.
    pub async fn fetch(&self, request: &Request) -> PortfolioResult<Response> {
        match self.handle_fetch(request).await {
            FetchOutcome::PassThrough => self.network.fetch(request).await,
            FetchOutcome::Network(resp) | FetchOutcome::Cache(resp) => Ok(resp),
            FetchOutcome::Failed(e) => Err(e),
        }
    }

    fn cache_fallback(&self, request: &Request) -> PortfolioResult<Option<Response>> {
        if let Some(resp) = self.cache.match_any(&request.cache_key())? {
            return Ok(Some(resp));
        }
        if request.is_navigation() {
            let shell = cache_key(&self.shell_url()?);
            return self.cache.match_any(&shell);
        }
        Ok(None)
    }
}
