//! Project store and its one-shot settlement signal.
//!
//! The store is populated exactly once per run: either from the project data
//! resource or, when that cannot be read or parsed, from a small embedded
//! list. Consumers never see a half-loaded state; they either hold a settled
//! [`ProjectStore`] or wait on [`StoreHandle::settled`].

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use reqwest::Url;
use tokio::sync::watch;

use crate::config::{PortfolioConfig, ProjectSource};
use crate::error::{PortfolioError, PortfolioResult};
use crate::offline::{
    CacheStorage, HttpNetwork, MemoryCacheStorage, Network, OfflineWorker, RedbCacheStorage,
    Request,
};
use crate::types::{Project, ProjectsDocument, Stack};

/// Where a settled store's records came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreOrigin {
    /// Parsed from the project data resource
    Loaded,
    /// Embedded fallback list
    Fallback,
}

/// Read-only, ordered collection of projects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectStore {
    projects: Vec<Project>,
    origin: StoreOrigin,
}

impl ProjectStore {
    pub fn new(projects: Vec<Project>) -> Self {
        Self {
            projects,
            origin: StoreOrigin::Loaded,
        }
    }

    /// The embedded list used when the data resource is unavailable.
    pub fn fallback() -> Self {
        Self {
            projects: fallback_projects(),
            origin: StoreOrigin::Fallback,
        }
    }

    /// Parse a `{ "projects": [...] }` document, rejecting duplicate ids.
    pub fn from_json(bytes: &[u8]) -> PortfolioResult<Self> {
        let doc: ProjectsDocument = serde_json::from_slice(bytes)?;
        let mut seen = HashSet::new();
        for project in &doc.projects {
            if !seen.insert(project.id.as_str()) {
                return Err(PortfolioError::DuplicateId(project.id.clone()));
            }
        }
        Ok(Self::new(doc.projects))
    }

    /// All projects in display order.
    pub fn list(&self) -> &[Project] {
        &self.projects
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Like [`find_by_id`](Self::find_by_id) but as an error for callers that propagate.
    pub fn get(&self, id: &str) -> PortfolioResult<&Project> {
        self.find_by_id(id)
            .ok_or_else(|| PortfolioError::ProjectNotFound(id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn origin(&self) -> StoreOrigin {
        self.origin
    }

    pub fn is_fallback(&self) -> bool {
        self.origin == StoreOrigin::Fallback
    }

    /// Read a local data file. Never fails: problems yield the fallback list.
    pub async fn load_file(path: &Path) -> Self {
        let result = match tokio::fs::read(path).await {
            Ok(bytes) => Self::from_json(&bytes),
            Err(e) => Err(e.into()),
        };
        Self::settle_result(result, &path.display().to_string())
    }

    /// Fetch a remote data document through the offline worker.
    ///
    /// Never fails: problems yield the fallback list.
    pub async fn load_url<N: Network, C: CacheStorage>(
        url: &Url,
        worker: &OfflineWorker<N, C>,
    ) -> Self {
        let request = Request::new(url.clone(), Default::default());
        let result = match worker.fetch(&request).await {
            Ok(resp) if resp.status == 200 => Self::from_json(&resp.body),
            Ok(resp) => Err(PortfolioError::HttpStatus(resp.status)),
            Err(e) => Err(e),
        };
        Self::settle_result(result, url.as_str())
    }

    fn settle_result(result: PortfolioResult<Self>, source: &str) -> Self {
        match result {
            Ok(store) => {
                tracing::info!(source, projects = store.len(), "project data loaded");
                store
            }
            Err(e) => {
                tracing::warn!(source, error = %e, "project data unavailable, using fallback list");
                Self::fallback()
            }
        }
    }
}

/// Load the store described by `config`.
///
/// URL sources go through an [`OfflineWorker`] scoped to the URL's origin,
/// backed by the on-disk cache when `cache_path` is set.
pub async fn load(config: &PortfolioConfig) -> ProjectStore {
    match &config.source {
        ProjectSource::File(path) => ProjectStore::load_file(path).await,
        ProjectSource::Url(url) => {
            let network = match HttpNetwork::new() {
                Ok(network) => network,
                Err(e) => {
                    tracing::warn!(error = %e, "HTTP client unavailable, using fallback list");
                    return ProjectStore::fallback();
                }
            };
            let scope = scope_of(url);
            match &config.cache_path {
                Some(path) => match RedbCacheStorage::open(path) {
                    Ok(cache) => load_via_worker(url, network, cache, scope, config).await,
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "cache database unavailable, caching in memory");
                        load_via_worker(url, network, MemoryCacheStorage::new(), scope, config).await
                    }
                },
                None => load_via_worker(url, network, MemoryCacheStorage::new(), scope, config).await,
            }
        }
    }
}

async fn load_via_worker<N: Network, C: CacheStorage>(
    url: &Url,
    network: N,
    cache: C,
    scope: Url,
    config: &PortfolioConfig,
) -> ProjectStore {
    let mut worker = OfflineWorker::new(network, cache, scope, config.cache_name.clone());
    worker.install();
    if let Err(e) = worker.activate() {
        tracing::warn!(error = %e, "cache activation failed");
    }
    ProjectStore::load_url(url, &worker).await
}

/// Origin root of a URL (`https://host:port/`).
fn scope_of(url: &Url) -> Url {
    let mut scope = url.clone();
    scope.set_path("/");
    scope.set_query(None);
    scope.set_fragment(None);
    scope
}

/// Cloneable access point to the store, settled exactly once.
///
/// Created at start-up and handed to every consumer; consumers that run
/// before settlement await [`settled`](Self::settled).
#[derive(Clone, Debug)]
pub struct StoreHandle {
    tx: Arc<watch::Sender<Option<Arc<ProjectStore>>>>,
}

impl Default for StoreHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreHandle {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx: Arc::new(tx) }
    }

    /// A handle that is already settled with `store`.
    pub fn settled_with(store: ProjectStore) -> Self {
        let handle = Self::new();
        handle.settle(store);
        handle
    }

    /// Publish the store. Only the first call has any effect.
    ///
    /// Returns whether this call settled the handle.
    pub fn settle(&self, store: ProjectStore) -> bool {
        let store = Arc::new(store);
        let settled = self.tx.send_if_modified(|slot| {
            if slot.is_some() {
                return false;
            }
            *slot = Some(store);
            true
        });
        if !settled {
            tracing::warn!("project store already settled, ignoring second settlement");
        }
        settled
    }

    /// The store, if settled.
    pub fn get(&self) -> Option<Arc<ProjectStore>> {
        self.tx.borrow().clone()
    }

    pub fn is_settled(&self) -> bool {
        self.tx.borrow().is_some()
    }

    /// Wait for settlement.
    pub async fn settled(&self) -> Arc<ProjectStore> {
        let mut rx = self.tx.subscribe();
        loop {
            let current = rx.borrow_and_update().clone();
            if let Some(store) = current {
                return store;
            }
            // The sender lives in `self`, so this only ends on settlement.
            if rx.changed().await.is_err() {
                return Arc::new(ProjectStore::fallback());
            }
        }
    }
}

/// Embedded projects, a display-sufficient subset of the full records.
pub fn fallback_projects() -> Vec<Project> {
    let mut repo = Project::new("repo-unida-repository", "Institutional Repository (REPO UNIDA)");
    repo.category = "Web".into();
    repo.short = "Institutional repository for scholarly publications, built with Laravel + MySQL.".into();
    repo.image = "assets/img/portfolio/portfolio-1.jpg".into();
    repo.stack = Some(Stack::Laravel);
    repo.tech = vec!["Laravel".into(), "MySQL".into(), "Bootstrap".into()];
    repo.date = Some("2023-08-01".into());
    repo.details = Some(
        "Designed and implemented the institutional repository: publications, metadata, \
         authentication and an admin panel, with a focus on data availability, backups \
         and open access."
            .into(),
    );

    let mut library = Project::new("perpus-sisinfo", "Library Information System");
    library.category = "Web".into();
    library.short = "Catalogue, lending and reporting for a university library.".into();
    library.image = "assets/img/portfolio/portfolio-2.jpg".into();
    library.stack = Some(Stack::Php);
    library.tech = vec!["PHP".into(), "jQuery".into(), "Bootstrap".into()];
    library.date = Some("2022-05-15".into());
    library.details = Some(
        "Built the lending module, overdue notifications and usage statistics reports, \
         speeding up circulation of the collection."
            .into(),
    );

    let mut attendance = Project::new("mobile-attendance", "Mobile Attendance (Prototype)");
    attendance.category = "App".into();
    attendance.short = "Prototype mobile app for location-based attendance.".into();
    attendance.image = "assets/img/portfolio/portfolio-6.jpg".into();
    attendance.tech = vec!["Flutter".into(), "Firebase".into()];
    attendance.date = Some("2021-11-20".into());
    attendance.details = Some(
        "Prototype with authentication, simple geofencing and daily reports, focused on \
         a plain UX for non-technical users."
            .into(),
    );

    let mut design = Project::new("design-gontor-tv", "Gontor TV - Visual Design");
    design.category = "Design".into();
    design.short = "Graphic design for the campus channel: thumbnails, posters and banners.".into();
    design.image = "assets/img/portfolio/portfolio-7.jpg".into();
    design.tech = vec!["Figma".into(), "Photoshop".into()];
    design.date = Some("2020-09-10".into());
    design.details = Some(
        "Worked with the media team on editorial visuals while keeping the brand \
         consistent and accessible."
            .into(),
    );

    vec![repo, library, attendance, design]
}
