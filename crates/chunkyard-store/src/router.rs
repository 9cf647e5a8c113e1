// crates/chunkyard-store/src/router.rs
//
// StoreRouter: presents an ordered list of stores as a single store.
//
// Lookups walk the members in priority order. A member answering "absent"
// (`Ok(None)`, or `StoreError::ChunkMissing` from stores that forward
// `fetch_chunk`) sends the lookup on to the next member; the first member
// that returns the chunk wins. Any other member failure aborts the lookup and
// is returned wrapped with that member's descriptor, so a broken backend is
// never hidden behind a later store that happens to hold the chunk.
//
// The member list is fixed at construction and there is no other state, so a
// router can be shared across tasks without locking.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use chunkyard_core::{Chunk, ChunkId, Store, StoreError};

/// Separator placed between member descriptors in the router's descriptor.
const DESCRIPTOR_SEPARATOR: &str = ",";

/// Routes chunk lookups across an ordered list of stores.
#[derive(Clone, Default)]
pub struct StoreRouter {
    stores: Vec<Arc<dyn Store>>,
}

impl StoreRouter {
    /// Create a router over `stores`. Iteration order is lookup priority.
    pub fn new(stores: impl IntoIterator<Item = Arc<dyn Store>>) -> Self {
        Self {
            stores: stores.into_iter().collect(),
        }
    }

    /// Member stores in lookup order.
    pub fn stores(&self) -> &[Arc<dyn Store>] {
        &self.stores
    }

    pub fn len(&self) -> usize {
        self.stores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }

    /// Fetch a chunk from the first member that holds it.
    ///
    /// Returns `StoreError::ChunkMissing` carrying `id` when every member
    /// reports the chunk absent, and `StoreError::Backend` as soon as a
    /// member fails for any other reason.
    pub async fn retrieve(&self, id: &ChunkId) -> Result<Chunk, StoreError> {
        self.get_chunk(id)
            .await?
            .ok_or(StoreError::ChunkMissing(*id))
    }

    /// Whether any member holds the chunk. Stops at the first member that does.
    pub async fn contains(&self, id: &ChunkId) -> bool {
        self.has_chunk(id).await
    }

    /// Descriptors of all members, joined in lookup order.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for StoreRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, store) in self.stores.iter().enumerate() {
            if i > 0 {
                f.write_str(DESCRIPTOR_SEPARATOR)?;
            }
            write!(f, "{}", store)?;
        }
        Ok(())
    }
}

impl fmt::Debug for StoreRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreRouter")
            .field("stores", &self.to_string())
            .finish()
    }
}

#[async_trait]
impl Store for StoreRouter {
    async fn get_chunk(&self, id: &ChunkId) -> Result<Option<Chunk>, StoreError> {
        for store in &self.stores {
            match store.get_chunk(id).await {
                Ok(Some(chunk)) => {
                    tracing::debug!(chunk = %id, store = %store, "chunk found");
                    return Ok(Some(chunk));
                }
                Ok(None) => {
                    tracing::debug!(chunk = %id, store = %store, "chunk absent, trying next store");
                }
                Err(e) if e.is_missing() => {
                    tracing::debug!(chunk = %id, store = %store, "chunk missing, trying next store");
                }
                Err(e) => {
                    tracing::warn!(chunk = %id, store = %store, error = %e, "store failed, aborting lookup");
                    return Err(StoreError::backend(store.to_string(), e));
                }
            }
        }
        Ok(None)
    }

    async fn has_chunk(&self, id: &ChunkId) -> bool {
        for store in &self.stores {
            if store.has_chunk(id).await {
                return true;
            }
        }
        false
    }

    /// Close every member, even after a failure. Returns the first failure.
    async fn close(&self) -> Result<(), StoreError> {
        let mut first_err = None;
        for store in &self.stores {
            if let Err(e) = store.close().await {
                tracing::warn!(store = %store, error = %e, "failed to close store");
                if first_err.is_none() {
                    first_err = Some(e);
                }
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
