// crates/chunkyard-store/src/lib.rs
//
// chunkyard-store: Store composition and backends for Chunkyard.
//
// Provides the `StoreRouter` that presents an ordered list of stores as one,
// and the concrete backends it is usually built from: an in-memory store,
// a RocksDB-backed local store, an HTTP remote store, and a read-through
// cache combining a local and a remote store.

pub mod cache;
pub mod http;
pub mod location;
pub mod memory;
pub mod rocks;
pub mod router;

// Re-export key types for ergonomic access from downstream crates.
pub use cache::CacheStore;
pub use http::HttpStore;
pub use location::{build_router, open_router, Location};
pub use memory::MemoryStore;
pub use rocks::RocksStore;
pub use router::StoreRouter;
