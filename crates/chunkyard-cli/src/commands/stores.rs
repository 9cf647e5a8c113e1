// crates/chunkyard-cli/src/commands/stores.rs
//
// `chunkyard stores`: show the stores lookups are routed through.

use std::sync::Arc;

use serde::Serialize;
use tabled::Tabled;

use chunkyard_core::StoreError;
use chunkyard_store::{build_router, CacheStore, Location};

use super::Routing;
use crate::output::{format_json, format_table};

/// One routed store, in lookup order.
#[derive(Debug, Serialize, Tabled)]
struct StoreRow {
    priority: usize,
    kind: &'static str,
    location: String,
}

/// JSON form of the command output.
#[derive(Debug, Serialize)]
struct StoresReport {
    descriptor: String,
    stores: Vec<StoreRow>,
}

fn kind(location: &Location) -> &'static str {
    match location {
        Location::Http(_) => "http",
        Location::Memory => "memory",
        Location::Path(_) => "rocksdb",
    }
}

fn rows(routing: &Routing) -> Vec<StoreRow> {
    routing
        .locations
        .iter()
        .enumerate()
        .map(|(i, location)| StoreRow {
            priority: i + 1,
            kind: kind(location),
            location: location.to_string(),
        })
        .collect()
}

/// Open the routed stores and return the composite descriptor, with the
/// cache (if any) shown as `cache <- router`.
fn descriptor(routing: &Routing) -> Result<String, StoreError> {
    let router = build_router(&routing.locations)?;
    match &routing.cache {
        Some(cache) => {
            let local = cache.open_writable()?;
            Ok(CacheStore::new(local, Arc::new(router)).to_string())
        }
        None => Ok(router.describe()),
    }
}

/// Run the stores command.
pub async fn run(routing: &Routing, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let descriptor = descriptor(routing)?;
    let rows = rows(routing);
    if json {
        let report = StoresReport {
            descriptor,
            stores: rows,
        };
        println!("{}", format_json(&report));
        return Ok(());
    }

    println!("Routing: {}", descriptor);
    if rows.is_empty() {
        println!("No stores configured.");
    } else {
        println!("{}", format_table(&rows));
    }
    Ok(())
}
