// crates/chunkyard-core/src/lib.rs
//
// chunkyard-core: Core types and traits for Chunkyard.
//
// This is the leaf crate that all other crates in the workspace depend on.
// It defines the chunk identifier and content model, the shared error type,
// and the `Store` / `WriteStore` capability traits implemented by every
// backend and by the store router.

pub mod chunk;
pub mod crypto;
pub mod error;
pub mod traits;

// Re-export key types for ergonomic access from downstream crates.
// Usage: `use chunkyard_core::ChunkId;`
pub use chunk::{Chunk, ChunkId};
pub use error::StoreError;
pub use traits::{Store, WriteStore};
