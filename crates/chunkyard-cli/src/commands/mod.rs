// crates/chunkyard-cli/src/commands/mod.rs
//
// Command module declarations for the Chunkyard CLI, plus the store routing
// settings every read command shares.

pub mod cat;
pub mod has;
pub mod put;
pub mod stores;

use std::sync::Arc;

use chunkyard_core::{Store, StoreError};
use chunkyard_store::{open_router, Location};

/// Which stores read commands route through, resolved from flags and config.
#[derive(Debug, Clone, Default)]
pub struct Routing {
    /// Store locations in lookup order.
    pub locations: Vec<Location>,
    /// Optional read-through cache in front of the router.
    pub cache: Option<Location>,
}

impl Routing {
    /// Parse location strings; the first unparsable one is an error.
    pub fn parse(locations: &[String], cache: Option<&str>) -> Result<Self, StoreError> {
        let locations = locations
            .iter()
            .map(|l| l.parse::<Location>())
            .collect::<Result<Vec<Location>, _>>()?;
        let cache = cache.map(|c| c.parse::<Location>()).transpose()?;
        Ok(Self { locations, cache })
    }

    /// Open every store and compose them.
    pub fn open(&self) -> Result<Arc<dyn Store>, StoreError> {
        if self.locations.is_empty() {
            tracing::warn!("No stores configured; every lookup will miss");
        }
        open_router(&self.locations, self.cache.as_ref())
    }
}
