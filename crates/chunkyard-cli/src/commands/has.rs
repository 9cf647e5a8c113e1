// crates/chunkyard-cli/src/commands/has.rs
//
// `chunkyard has <id>`: print whether any routed store holds a chunk.

use chunkyard_core::ChunkId;

use super::Routing;

/// Whether any routed store holds the chunk named by `id`.
async fn check(routing: &Routing, id: &str) -> Result<bool, Box<dyn std::error::Error>> {
    let id: ChunkId = id.parse()?;
    let store = routing.open()?;
    let present = store.has_chunk(&id).await;
    store.close().await?;
    Ok(present)
}

/// Run the has command.
pub async fn run(routing: &Routing, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", check(routing, id).await?);
    Ok(())
}
