// crates/chunkyard-core/src/chunk.rs
//
// Chunk content model: a chunk is an immutable byte payload addressed by the
// SHA-256 digest of those bytes.

use std::fmt;
use std::str::FromStr;

use crate::crypto::hash_bytes;
use crate::error::StoreError;

/// Content fingerprint of a chunk (SHA-256 of its bytes).
///
/// Displayed and parsed as 64 lowercase hex characters.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChunkId([u8; 32]);

impl ChunkId {
    /// Wrap raw digest bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Compute the id of the given content.
    pub fn digest(data: &[u8]) -> Self {
        Self(hash_bytes(data))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hex form, as used in storage keys and URLs.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for ChunkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for ChunkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChunkId({})", self.to_hex())
    }
}

impl FromStr for ChunkId {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(s, &mut bytes)
            .map_err(|e| StoreError::InvalidId(format!("{:?}: {}", s, e)))?;
        Ok(Self(bytes))
    }
}

/// An immutable chunk of content together with its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    id: ChunkId,
    data: Vec<u8>,
}

impl Chunk {
    /// Create a chunk from its content, computing the id.
    pub fn new(data: Vec<u8>) -> Self {
        let id = ChunkId::digest(&data);
        Self { id, data }
    }

    /// Create a chunk whose id is asserted by the caller (e.g. the key it was
    /// stored under). Use [`Chunk::verify`] before trusting the pairing.
    pub fn from_parts(id: ChunkId, data: Vec<u8>) -> Self {
        Self { id, data }
    }

    pub fn id(&self) -> ChunkId {
        self.id
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Check that the content hashes to the chunk's id.
    pub fn verify(&self) -> Result<(), StoreError> {
        let actual = ChunkId::digest(&self.data);
        if actual != self.id {
            return Err(StoreError::InvalidChunk {
                id: self.id,
                actual,
            });
        }
        Ok(())
    }
}
