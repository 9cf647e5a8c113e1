// crates/chunkyard-cli/src/commands/cat.rs
//
// `chunkyard cat <id>`: read a chunk through the routed stores.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use chunkyard_core::ChunkId;

use super::Routing;

/// Run the cat command. Writes the chunk to `out`, or stdout when `None`.
pub async fn run(
    routing: &Routing,
    id: &str,
    out: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let id: ChunkId = id.parse()?;
    let store = routing.open()?;

    let result = store.fetch_chunk(&id).await;
    let closed = store.close().await;
    let chunk = result?;
    closed?;

    tracing::debug!("Read chunk {} ({} bytes)", id, chunk.len());
    match out {
        Some(path) => fs::write(path, chunk.data())?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(chunk.data())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
