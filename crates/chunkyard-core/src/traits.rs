// crates/chunkyard-core/src/traits.rs

use std::fmt;

use async_trait::async_trait;

use crate::chunk::{Chunk, ChunkId};
use crate::error::StoreError;

/// Read capability of a chunk store.
///
/// Implemented by every backend in chunkyard-store and by `StoreRouter`
/// itself, so routers can be nested and handed to anything that expects a
/// single store.
///
/// The `Display` impl is the store's descriptor: a stable, human-readable
/// identifier (a path or URL) used in error messages and diagnostics.
#[async_trait]
pub trait Store: fmt::Display + Send + Sync {
    /// Look up a chunk.
    ///
    /// `Ok(None)` means this store definitively does not hold the chunk.
    /// `Err` means the store failed for some other reason.
    async fn get_chunk(&self, id: &ChunkId) -> Result<Option<Chunk>, StoreError>;

    /// Best-effort existence check. Never fails; a store that cannot answer
    /// reports `false`.
    async fn has_chunk(&self, id: &ChunkId) -> bool;

    /// Release any resources held by the store.
    async fn close(&self) -> Result<(), StoreError> {
        Ok(())
    }

    /// Look up a chunk that must exist, turning absence into
    /// `StoreError::ChunkMissing`.
    async fn fetch_chunk(&self, id: &ChunkId) -> Result<Chunk, StoreError> {
        self.get_chunk(id)
            .await?
            .ok_or(StoreError::ChunkMissing(*id))
    }
}

/// A store that chunks can be written to.
#[async_trait]
pub trait WriteStore: Store {
    /// Persist a chunk. Writing a chunk that is already present is a no-op.
    async fn store_chunk(&self, chunk: &Chunk) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SingleChunk(Chunk);

    impl fmt::Display for SingleChunk {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "single:{}", self.0.id())
        }
    }

    #[async_trait]
    impl Store for SingleChunk {
        async fn get_chunk(&self, id: &ChunkId) -> Result<Option<Chunk>, StoreError> {
            Ok((*id == self.0.id()).then(|| self.0.clone()))
        }

        async fn has_chunk(&self, id: &ChunkId) -> bool {
            *id == self.0.id()
        }
    }

    #[tokio::test]
    async fn fetch_chunk_returns_present_chunk() {
        let chunk = Chunk::new(b"present".to_vec());
        let store = SingleChunk(chunk.clone());
        assert_eq!(store.fetch_chunk(&chunk.id()).await.unwrap(), chunk);
    }

    #[tokio::test]
    async fn fetch_chunk_maps_absence_to_missing() {
        let store = SingleChunk(Chunk::new(b"present".to_vec()));
        let other = ChunkId::digest(b"absent");
        match store.fetch_chunk(&other).await {
            Err(StoreError::ChunkMissing(id)) => assert_eq!(id, other),
            other => panic!("Expected ChunkMissing, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn default_close_succeeds() {
        let store = SingleChunk(Chunk::new(Vec::new()));
        assert!(store.close().await.is_ok());
    }
}
