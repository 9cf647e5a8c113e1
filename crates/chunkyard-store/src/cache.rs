// crates/chunkyard-store/src/cache.rs
//
// CacheStore: a remote store fronted by a writable local cache.
//
//   - `get_chunk`: try the local cache first, then fall back to the remote
//     store and write what it returns into the cache.
//   - `has_chunk`: local or remote.
//   - `close`: closes both sides, reporting the first failure.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use chunkyard_core::{Chunk, ChunkId, Store, StoreError, WriteStore};

/// Read-through cache over a remote store.
pub struct CacheStore {
    /// Local writable cache consulted first.
    local: Arc<dyn WriteStore>,
    /// Store consulted on a cache miss.
    remote: Arc<dyn Store>,
}

impl CacheStore {
    /// Create a new `CacheStore` caching `remote` into `local`.
    pub fn new(local: Arc<dyn WriteStore>, remote: Arc<dyn Store>) -> Self {
        Self { local, remote }
    }
}

impl fmt::Display for CacheStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <- {}", self.local, self.remote)
    }
}

impl fmt::Debug for CacheStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheStore")
            .field("local", &self.local.to_string())
            .field("remote", &self.remote.to_string())
            .finish()
    }
}

#[async_trait]
impl Store for CacheStore {
    async fn get_chunk(&self, id: &ChunkId) -> Result<Option<Chunk>, StoreError> {
        // Try local cache first.
        if let Some(chunk) = self.local.get_chunk(id).await? {
            return Ok(Some(chunk));
        }

        let chunk = match self.remote.get_chunk(id).await? {
            Some(chunk) => chunk,
            None => return Ok(None),
        };

        // Cache locally for future lookups.
        self.local.store_chunk(&chunk).await?;
        tracing::debug!("Cached chunk {} from {} in {}", id, self.remote, self.local);

        Ok(Some(chunk))
    }

    async fn has_chunk(&self, id: &ChunkId) -> bool {
        self.local.has_chunk(id).await || self.remote.has_chunk(id).await
    }

    async fn close(&self) -> Result<(), StoreError> {
        let local = self.local.close().await;
        let remote = self.remote.close().await;
        local.and(remote)
    }
}
