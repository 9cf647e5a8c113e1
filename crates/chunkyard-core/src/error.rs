use thiserror::Error;

use crate::chunk::ChunkId;

/// Error type shared by every store and by the store router.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The requested chunk is not held by any consulted store.
    #[error("chunk {0} missing")]
    ChunkMissing(ChunkId),

    /// A member store of a router failed. `store` is the member's descriptor.
    #[error("{store}: {source}")]
    Backend {
        store: String,
        #[source]
        source: Box<StoreError>,
    },

    /// Local storage engine error (RocksDB).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Remote store transport or protocol error.
    #[error("Network error: {0}")]
    Network(String),

    /// Chunk bytes do not hash to the id they were stored under.
    #[error("Invalid chunk {id}: content hashes to {actual}")]
    InvalidChunk { id: ChunkId, actual: ChunkId },

    /// A string could not be parsed as a chunk id.
    #[error("Invalid chunk id: {0}")]
    InvalidId(String),

    /// Filesystem error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Store location or configuration could not be understood.
    #[error("Config error: {0}")]
    Config(String),
}

impl StoreError {
    /// Wrap a member store's failure with that store's descriptor.
    pub fn backend(store: impl Into<String>, source: StoreError) -> Self {
        StoreError::Backend {
            store: store.into(),
            source: Box::new(source),
        }
    }

    /// Whether this error is the "chunk missing" signal.
    pub fn is_missing(&self) -> bool {
        matches!(self, StoreError::ChunkMissing(_))
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn test_backend_wraps_source_with_descriptor() {
        let err = StoreError::backend(
            "https://mirror.example.com",
            StoreError::Network("connection refused".to_string()),
        );
        assert_eq!(
            err.to_string(),
            "https://mirror.example.com: Network error: connection refused"
        );
        let source = err.source().expect("backend error has a source");
        assert_eq!(source.to_string(), "Network error: connection refused");
        assert!(!err.is_missing());
    }

    #[test]
    fn test_missing_carries_id() {
        let id = ChunkId::from_bytes([7u8; 32]);
        let err = StoreError::ChunkMissing(id);
        assert!(err.is_missing());
        assert_eq!(err.to_string(), format!("chunk {} missing", id));
    }
}
