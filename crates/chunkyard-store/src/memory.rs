// crates/chunkyard-store/src/memory.rs
//
// In-memory chunk store.
//
// Holds chunks in a HashMap behind a RwLock. Contents are lost when the store
// is dropped. Used as a scratch cache layer and in tests.

use std::collections::HashMap;
use std::fmt;
use std::sync::RwLock;

use async_trait::async_trait;

use chunkyard_core::{Chunk, ChunkId, Store, StoreError, WriteStore};

/// Writable chunk store kept entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Map from chunk id to chunk.
    chunks: RwLock<HashMap<ChunkId, Chunk>>,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the number of chunks currently stored.
    pub fn len(&self) -> usize {
        self.chunks.read().map(|chunks| chunks.len()).unwrap_or(0)
    }

    /// Return whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned<T>(_: T) -> StoreError {
    StoreError::Storage("memory store lock poisoned".to_string())
}

impl fmt::Display for MemoryStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("memory")
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn get_chunk(&self, id: &ChunkId) -> Result<Option<Chunk>, StoreError> {
        let chunks = self.chunks.read().map_err(poisoned)?;
        Ok(chunks.get(id).cloned())
    }

    async fn has_chunk(&self, id: &ChunkId) -> bool {
        self.chunks
            .read()
            .map(|chunks| chunks.contains_key(id))
            .unwrap_or(false)
    }
}

#[async_trait]
impl WriteStore for MemoryStore {
    async fn store_chunk(&self, chunk: &Chunk) -> Result<(), StoreError> {
        let mut chunks = self.chunks.write().map_err(poisoned)?;
        chunks.entry(chunk.id()).or_insert_with(|| chunk.clone());
        Ok(())
    }
}
