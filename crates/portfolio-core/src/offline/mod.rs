//! Offline cache layer.
//!
//! Requests for the site's own origin go to the network first; successful
//! responses are stored in a version-stamped cache, and when the network is
//! unreachable the cache answers instead. Navigations that miss fall back to
//! the cached shell page. Requests for other origins are not touched.
//!
//! ```ignore
//! use portfolio_core::offline::{HttpNetwork, MemoryCacheStorage, OfflineWorker, Request};
//!
//! let scope = reqwest::Url::parse("https://me.example/")?;
//! let mut worker = OfflineWorker::new(HttpNetwork::new()?, MemoryCacheStorage::new(), scope, "portfolio-v2");
//! worker.install();
//! worker.activate()?;
//! let resp = worker.fetch(&Request::get("https://me.example/assets/data/projects.json")?).await?;
//! ```

mod network;
mod request;
mod storage;
mod worker;

pub use network::{HttpNetwork, Network};
pub use request::{Request, RequestMode, Response};
pub use storage::{CacheStorage, MemoryCacheStorage, RedbCacheStorage};
pub use reqwest::Url;
pub use worker::{FetchOutcome, OfflineWorker, WorkerState, DEFAULT_CACHE_NAME, SHELL_PATH};
