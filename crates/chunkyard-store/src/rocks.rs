// crates/chunkyard-store/src/rocks.rs
//
// RocksDB-backed local chunk store.
//
// Key format:
//   - `chunk:{hex id}` -> raw chunk bytes
//
// Reads re-hash the stored bytes, so on-disk corruption surfaces as
// `StoreError::InvalidChunk` rather than as bad data handed to the caller.

use std::fmt;

use async_trait::async_trait;
use rocksdb::{DBWithThreadMode, MultiThreaded, Options};

use chunkyard_core::{Chunk, ChunkId, Store, StoreError, WriteStore};

/// RocksDB wrapper implementing the `Store` and `WriteStore` traits.
#[derive(Debug)]
pub struct RocksStore {
    db: DBWithThreadMode<MultiThreaded>,
    path: String,
}

impl RocksStore {
    /// Open a RocksDB database at the given filesystem path.
    ///
    /// Creates the database directory if it does not exist.
    pub fn open(path: &str) -> Result<Self, StoreError> {
        let mut opts = Options::default();
        opts.create_if_missing(true);

        let db = DBWithThreadMode::<MultiThreaded>::open(&opts, path).map_err(|e| {
            StoreError::Storage(format!("Failed to open RocksDB at {}: {}", path, e))
        })?;

        tracing::debug!("Opened chunk store at {}", path);
        Ok(Self {
            db,
            path: path.to_string(),
        })
    }

    /// Build the key for a chunk: `chunk:{hex id}`.
    fn chunk_key(id: &ChunkId) -> Vec<u8> {
        format!("chunk:{}", id).into_bytes()
    }

    /// Get raw bytes from RocksDB, mapping errors to StoreError::Storage.
    fn get_raw(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        self.db
            .get(key)
            .map_err(|e| StoreError::Storage(format!("RocksDB get failed: {}", e)))
    }

    /// Put raw bytes into RocksDB, mapping errors to StoreError::Storage.
    fn put_raw(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError> {
        self.db
            .put(key, value)
            .map_err(|e| StoreError::Storage(format!("RocksDB put failed: {}", e)))
    }

    /// Overwrite the bytes stored under `id` without hashing them.
    ///
    /// Only useful for simulating on-disk corruption in tests.
    #[doc(hidden)]
    pub fn put_unchecked(&self, id: &ChunkId, data: &[u8]) -> Result<(), StoreError> {
        self.put_raw(&Self::chunk_key(id), data)
    }
}

impl fmt::Display for RocksStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

#[async_trait]
impl Store for RocksStore {
    async fn get_chunk(&self, id: &ChunkId) -> Result<Option<Chunk>, StoreError> {
        match self.get_raw(&Self::chunk_key(id))? {
            Some(bytes) => {
                let chunk = Chunk::from_parts(*id, bytes);
                chunk.verify()?;
                Ok(Some(chunk))
            }
            None => Ok(None),
        }
    }

    async fn has_chunk(&self, id: &ChunkId) -> bool {
        match self.db.get_pinned(Self::chunk_key(id)) {
            Ok(value) => value.is_some(),
            Err(e) => {
                tracing::warn!("RocksDB lookup for {} in {} failed: {}", id, self.path, e);
                false
            }
        }
    }

    /// Flush the memtable so everything written so far is on disk.
    async fn close(&self) -> Result<(), StoreError> {
        self.db
            .flush()
            .map_err(|e| StoreError::Storage(format!("RocksDB flush failed: {}", e)))
    }
}

#[async_trait]
impl WriteStore for RocksStore {
    async fn store_chunk(&self, chunk: &Chunk) -> Result<(), StoreError> {
        self.put_raw(&Self::chunk_key(&chunk.id()), chunk.data())
    }
}
