// crates/chunkyard-store/src/location.rs
//
// Store locations: strings naming a store.
//
//   - `http://...` / `https://...` -> HttpStore
//   - `memory`                     -> MemoryStore
//   - anything else                -> RocksStore at that path

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use chunkyard_core::{Store, StoreError, WriteStore};

use crate::cache::CacheStore;
use crate::http::HttpStore;
use crate::memory::MemoryStore;
use crate::rocks::RocksStore;
use crate::router::StoreRouter;

/// Location string that selects an in-memory store.
pub const MEMORY_LOCATION: &str = "memory";

/// A parsed store location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// Remote HTTP(S) store at the given base URL.
    Http(String),
    /// Fresh in-memory store.
    Memory,
    /// Local RocksDB store at the given path.
    Path(String),
}

impl FromStr for Location {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(StoreError::Config("empty store location".to_string()));
        }
        if s.starts_with("http://") || s.starts_with("https://") {
            return Ok(Location::Http(s.to_string()));
        }
        if s == MEMORY_LOCATION {
            return Ok(Location::Memory);
        }
        Ok(Location::Path(s.to_string()))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Http(url) => f.write_str(url),
            Location::Memory => f.write_str(MEMORY_LOCATION),
            Location::Path(path) => f.write_str(path),
        }
    }
}

impl Location {
    /// Open the store for reading.
    pub fn open(&self) -> Result<Arc<dyn Store>, StoreError> {
        let store: Arc<dyn Store> = match self {
            Location::Http(url) => Arc::new(HttpStore::new(url)),
            Location::Memory => Arc::new(MemoryStore::new()),
            Location::Path(path) => Arc::new(RocksStore::open(path)?),
        };
        Ok(store)
    }

    /// Open the store for writing.
    pub fn open_writable(&self) -> Result<Arc<dyn WriteStore>, StoreError> {
        let store: Arc<dyn WriteStore> = match self {
            Location::Http(url) => Arc::new(HttpStore::new(url)),
            Location::Memory => Arc::new(MemoryStore::new()),
            Location::Path(path) => Arc::new(RocksStore::open(path)?),
        };
        Ok(store)
    }
}

/// Open every location and route over them in order.
pub fn build_router(locations: &[Location]) -> Result<StoreRouter, StoreError> {
    let stores = locations
        .iter()
        .map(Location::open)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(StoreRouter::new(stores))
}

/// Build a router over `locations` in order.
///
/// With a `cache` location, the router is wrapped in a `CacheStore` so chunks
/// found in any member are written back to the cache.
pub fn open_router(
    locations: &[Location],
    cache: Option<&Location>,
) -> Result<Arc<dyn Store>, StoreError> {
    let router = build_router(locations)?;
    tracing::debug!("Routing over stores: {}", router.describe());

    match cache {
        Some(cache) => {
            let local = cache.open_writable()?;
            Ok(Arc::new(CacheStore::new(local, Arc::new(router))))
        }
        None => Ok(Arc::new(router)),
    }
}
