//! Named cache stores.
//!
//! A cache store holds any number of named caches, each mapping a request
//! key to a stored response. Cache names carry a version stamp
//! (`portfolio-v2`); bumping the name and activating the worker discards
//! every older generation.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use redb::{Database, TableDefinition, TableError, TableHandle};

use super::request::Response;
use crate::error::PortfolioResult;

/// Storage for named response caches.
pub trait CacheStorage {
    /// Store `response` under `key` in cache `cache`, creating the cache if needed.
    fn put(&self, cache: &str, key: &str, response: &Response) -> PortfolioResult<()>;

    /// Look `key` up in a single cache.
    fn lookup(&self, cache: &str, key: &str) -> PortfolioResult<Option<Response>>;

    /// Names of all caches currently present.
    fn cache_names(&self) -> PortfolioResult<Vec<String>>;

    /// Delete a whole cache. Returns whether it existed.
    fn delete(&self, cache: &str) -> PortfolioResult<bool>;

    /// Look `key` up across every cache, first hit wins.
    fn match_any(&self, key: &str) -> PortfolioResult<Option<Response>> {
        for name in self.cache_names()? {
            if let Some(resp) = self.lookup(&name, key)? {
                return Ok(Some(resp));
            }
        }
        Ok(None)
    }
}

impl<T: CacheStorage + ?Sized> CacheStorage for Arc<T> {
    fn put(&self, cache: &str, key: &str, response: &Response) -> PortfolioResult<()> {
        (**self).put(cache, key, response)
    }

    fn lookup(&self, cache: &str, key: &str) -> PortfolioResult<Option<Response>> {
        (**self).lookup(cache, key)
    }

    fn cache_names(&self) -> PortfolioResult<Vec<String>> {
        (**self).cache_names()
    }

    fn delete(&self, cache: &str) -> PortfolioResult<bool> {
        (**self).delete(cache)
    }
}

/// Process-local cache store; contents vanish with the process.
#[derive(Clone, Debug, Default)]
pub struct MemoryCacheStorage {
    caches: Arc<RwLock<BTreeMap<String, BTreeMap<String, Response>>>>,
}

impl MemoryCacheStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CacheStorage for MemoryCacheStorage {
    fn put(&self, cache: &str, key: &str, response: &Response) -> PortfolioResult<()> {
        self.caches
            .write()
            .entry(cache.to_string())
            .or_default()
            .insert(key.to_string(), response.clone());
        Ok(())
    }

    fn lookup(&self, cache: &str, key: &str) -> PortfolioResult<Option<Response>> {
        Ok(self
            .caches
            .read()
            .get(cache)
            .and_then(|entries| entries.get(key))
            .cloned())
    }

    fn cache_names(&self) -> PortfolioResult<Vec<String>> {
        Ok(self.caches.read().keys().cloned().collect())
    }

    fn delete(&self, cache: &str) -> PortfolioResult<bool> {
        Ok(self.caches.write().remove(cache).is_some())
    }
}

/// Table-name prefix separating cache tables from anything else in the file.
const CACHE_TABLE_PREFIX: &str = "cache:";

/// redb-backed cache store: one table per named cache, responses encoded
/// with postcard.
#[derive(Clone)]
pub struct RedbCacheStorage {
    db: Arc<RwLock<Database>>,
}

impl RedbCacheStorage {
    /// Open (or create) the cache database at `path`.
    pub fn open(path: impl AsRef<Path>) -> PortfolioResult<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;
        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }
}

fn table_name(cache: &str) -> String {
    format!("{CACHE_TABLE_PREFIX}{cache}")
}

impl CacheStorage for RedbCacheStorage {
    fn put(&self, cache: &str, key: &str, response: &Response) -> PortfolioResult<()> {
        let name = table_name(cache);
        let definition: TableDefinition<&str, &[u8]> = TableDefinition::new(&name);
        let data = postcard::to_allocvec(response)?;

        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(definition)?;
            table.insert(key, data.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    fn lookup(&self, cache: &str, key: &str) -> PortfolioResult<Option<Response>> {
        let name = table_name(cache);
        let definition: TableDefinition<&str, &[u8]> = TableDefinition::new(&name);

        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = match read_txn.open_table(definition) {
            Ok(table) => table,
            Err(TableError::TableDoesNotExist(_)) => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match table.get(key)? {
            Some(v) => Ok(Some(postcard::from_bytes(v.value())?)),
            None => Ok(None),
        }
    }

    fn cache_names(&self) -> PortfolioResult<Vec<String>> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let names = read_txn
            .list_tables()?
            .filter_map(|handle| {
                handle
                    .name()
                    .strip_prefix(CACHE_TABLE_PREFIX)
                    .map(str::to_string)
            })
            .collect();
        Ok(names)
    }

    fn delete(&self, cache: &str) -> PortfolioResult<bool> {
        let name = table_name(cache);
        let definition: TableDefinition<&str, &[u8]> = TableDefinition::new(&name);

        let db = self.db.read();
        let write_txn = db.begin_write()?;
        let existed = write_txn.delete_table(definition)?;
        write_txn.commit()?;
        Ok(existed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn exercise(storage: &impl CacheStorage) {
        let resp = Response::ok("<html></html>").with_content_type("text/html");
        storage.put("portfolio-v1", "https://a.test/index.html", &resp).unwrap();
        storage
            .put("portfolio-v2", "https://a.test/app.css", &Response::ok("body{}"))
            .unwrap();

        assert_eq!(
            storage.lookup("portfolio-v1", "https://a.test/index.html").unwrap(),
            Some(resp.clone())
        );
        assert_eq!(storage.lookup("portfolio-v2", "https://a.test/index.html").unwrap(), None);
        assert_eq!(storage.lookup("missing", "https://a.test/index.html").unwrap(), None);
        assert_eq!(storage.match_any("https://a.test/index.html").unwrap(), Some(resp));

        let mut names = storage.cache_names().unwrap();
        names.sort();
        assert_eq!(names, ["portfolio-v1", "portfolio-v2"]);

        assert!(storage.delete("portfolio-v1").unwrap());
        assert!(!storage.delete("portfolio-v1").unwrap());
        assert_eq!(storage.match_any("https://a.test/index.html").unwrap(), None);
    }

    #[test]
    fn memory_storage_contract() {
        exercise(&MemoryCacheStorage::new());
    }

    #[test]
    fn redb_storage_contract() {
        let dir = TempDir::new().unwrap();
        let storage = RedbCacheStorage::open(dir.path().join("cache.redb")).unwrap();
        exercise(&storage);
    }

    #[test]
    fn redb_storage_persists_across_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cache.redb");
        {
            let storage = RedbCacheStorage::open(&path).unwrap();
            storage
                .put("portfolio-v2", "https://a.test/", &Response::ok("shell"))
                .unwrap();
        }
        let storage = RedbCacheStorage::open(&path).unwrap();
        let hit = storage.lookup("portfolio-v2", "https://a.test/").unwrap().unwrap();
        assert_eq!(hit.body.as_ref(), b"shell");
    }
}
