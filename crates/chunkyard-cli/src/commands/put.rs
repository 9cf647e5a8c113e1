// crates/chunkyard-cli/src/commands/put.rs
//
// `chunkyard put <file> --to <location>`: store a file as one chunk.

use std::fs;
use std::path::Path;

use chunkyard_core::Chunk;
use chunkyard_store::Location;

/// Run the put command. Prints the id of the stored chunk.
pub async fn run(file: &Path, target: &str) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(file)?;
    let chunk = Chunk::new(data);
    let location: Location = target.parse()?;
    let store = location.open_writable()?;

    let result = store.store_chunk(&chunk).await;
    let closed = store.close().await;
    result?;
    closed?;

    tracing::info!("Stored {} ({} bytes) in {}", chunk.id(), chunk.len(), store);
    println!("{}", chunk.id());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chunkyard_core::Store;

    #[tokio::test]
    async fn put_stores_file_contents() {
        let dir = std::env::temp_dir();
        let file = dir.join(format!("chunkyard_put_{}.bin", uuid::Uuid::new_v4()));
        let db = dir.join(format!("chunkyard_put_db_{}", uuid::Uuid::new_v4()));
        fs::write(&file, b"file body").unwrap();

        let db = db.to_string_lossy().to_string();
        run(&file, &db).await.unwrap();

        let store = Location::Path(db).open().unwrap();
        let id = Chunk::new(b"file body".to_vec()).id();
        assert!(store.has_chunk(&id).await);
        let _ = fs::remove_file(&file);
    }
}
