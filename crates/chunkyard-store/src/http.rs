// crates/chunkyard-store/src/http.rs
//
// Remote chunk store served over HTTP.
//
// Chunks live under `{base_url}/{first 4 hex chars}/{hex id}.chunk`:
//   - GET  -> 200 with the chunk bytes, or 404 when the chunk is absent
//   - HEAD -> existence check
//   - PUT  -> upload

use std::fmt;

use async_trait::async_trait;
use reqwest::StatusCode;

use chunkyard_core::{Chunk, ChunkId, Store, StoreError, WriteStore};

/// File extension of chunk objects on the server.
const CHUNK_EXTENSION: &str = "chunk";

/// HTTP client for a remote chunk store.
#[derive(Debug, Clone)]
pub struct HttpStore {
    /// Base URL of the store (e.g., "https://mirror.example.com/chunks").
    pub base_url: String,
    /// HTTP client instance.
    client: reqwest::Client,
}

impl HttpStore {
    /// Create a new client pointing at the given base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// URL of the object holding the given chunk.
    fn chunk_url(&self, id: &ChunkId) -> String {
        let hex = id.to_hex();
        format!("{}/{}/{}.{}", self.base_url, &hex[..4], hex, CHUNK_EXTENSION)
    }
}

impl fmt::Display for HttpStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base_url)
    }
}

#[async_trait]
impl Store for HttpStore {
    async fn get_chunk(&self, id: &ChunkId) -> Result<Option<Chunk>, StoreError> {
        let url = self.chunk_url(id);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| StoreError::Network(format!("GET {} failed: {}", url, e)))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Network(format!(
                "GET {} failed ({}): {}",
                url, status, body
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| StoreError::Network(format!("GET {} body read failed: {}", url, e)))?;

        let chunk = Chunk::from_parts(*id, bytes.to_vec());
        chunk.verify()?;
        Ok(Some(chunk))
    }

    async fn has_chunk(&self, id: &ChunkId) -> bool {
        let url = self.chunk_url(id);
        match self.client.head(&url).send().await {
            Ok(response) => {
                let status = response.status();
                if !status.is_success() && status != StatusCode::NOT_FOUND {
                    tracing::warn!("HEAD {} failed ({})", url, status);
                }
                status.is_success()
            }
            Err(e) => {
                tracing::warn!("HEAD {} failed: {}", url, e);
                false
            }
        }
    }
}

#[async_trait]
impl WriteStore for HttpStore {
    async fn store_chunk(&self, chunk: &Chunk) -> Result<(), StoreError> {
        let url = self.chunk_url(&chunk.id());
        let response = self
            .client
            .put(&url)
            .body(chunk.data().to_vec())
            .send()
            .await
            .map_err(|e| StoreError::Network(format!("PUT {} failed: {}", url, e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Network(format!(
                "PUT {} failed ({}): {}",
                url, status, body
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Helper to start a mock HTTP server that answers one request with the
    /// given status line and body, and hands back the raw request it saw.
    async fn mock_server(
        status: &str,
        body: &[u8],
    ) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);
        let mut response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/octet-stream\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            status,
            body.len()
        )
        .into_bytes();
        response.extend_from_slice(body);

        let handle = tokio::spawn(async move {
            let mut request = String::new();
            if let Ok((mut stream, _)) = listener.accept().await {
                let mut buf = vec![0u8; 4096];
                let n = stream.read(&mut buf).await.unwrap_or(0);
                request = String::from_utf8_lossy(&buf[..n]).to_string();
                let _ = stream.write_all(&response).await;
            }
            request
        });

        (base_url, handle)
    }

    #[test]
    fn chunk_url_layout() {
        let store = HttpStore::new("https://mirror.example.com/chunks/");
        let id = ChunkId::digest(b"abc");
        assert_eq!(
            store.chunk_url(&id),
            "https://mirror.example.com/chunks/ba78/ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad.chunk"
        );
        assert_eq!(store.to_string(), "https://mirror.example.com/chunks");
    }

    #[tokio::test]
    async fn get_returns_chunk() {
        let chunk = Chunk::new(b"remote bytes".to_vec());
        let (base_url, handle) = mock_server("200 OK", chunk.data()).await;
        let store = HttpStore::new(&base_url);

        let got = store.get_chunk(&chunk.id()).await.unwrap();
        assert_eq!(got, Some(chunk.clone()));

        let request = handle.await.unwrap();
        let hex = chunk.id().to_hex();
        assert!(request.starts_with(&format!("GET /{}/{}.chunk", &hex[..4], hex)));
    }

    #[tokio::test]
    async fn not_found_is_absent() {
        let (base_url, _handle) = mock_server("404 Not Found", b"").await;
        let store = HttpStore::new(&base_url);
        let result = store.get_chunk(&ChunkId::digest(b"nope")).await;
        assert!(matches!(result, Ok(None)));
    }

    #[tokio::test]
    async fn server_error_is_failure() {
        let (base_url, _handle) = mock_server("500 Internal Server Error", b"boom").await;
        let store = HttpStore::new(&base_url);
        match store.get_chunk(&ChunkId::digest(b"x")).await {
            Err(StoreError::Network(msg)) => {
                assert!(msg.contains("500"));
                assert!(msg.contains("boom"));
            }
            other => panic!("Expected Network error, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn mismatched_body_is_invalid_chunk() {
        let (base_url, _handle) = mock_server("200 OK", b"not what was asked for").await;
        let store = HttpStore::new(&base_url);
        let result = store.get_chunk(&ChunkId::digest(b"wanted")).await;
        assert!(matches!(result, Err(StoreError::InvalidChunk { .. })));
    }

    #[tokio::test]
    async fn has_chunk_uses_head() {
        let (base_url, handle) = mock_server("200 OK", b"").await;
        let store = HttpStore::new(&base_url);
        assert!(store.has_chunk(&ChunkId::digest(b"x")).await);
        assert!(handle.await.unwrap().starts_with("HEAD /"));
    }

    #[tokio::test]
    async fn has_chunk_false_on_not_found() {
        let (base_url, _handle) = mock_server("404 Not Found", b"").await;
        let store = HttpStore::new(&base_url);
        assert!(!store.has_chunk(&ChunkId::digest(b"x")).await);
    }

    #[tokio::test]
    async fn has_chunk_false_on_server_error() {
        let (base_url, handle) = mock_server("500 Internal Server Error", b"").await;
        let store = HttpStore::new(&base_url);
        assert!(!store.has_chunk(&ChunkId::digest(b"x")).await);
        assert!(handle.await.unwrap().starts_with("HEAD /"));
    }

    #[tokio::test]
    async fn store_chunk_puts_bytes() {
        let chunk = Chunk::new(b"upload me".to_vec());
        let (base_url, handle) = mock_server("201 Created", b"").await;
        let store = HttpStore::new(&base_url);

        store.store_chunk(&chunk).await.unwrap();
        let request = handle.await.unwrap();
        assert!(request.starts_with("PUT /"));
    }

    #[tokio::test]
    async fn connection_error_returns_network_error() {
        let store = HttpStore::new("http://127.0.0.1:1"); // Nothing listening
        let id = ChunkId::digest(b"x");
        match store.get_chunk(&id).await {
            Err(StoreError::Network(msg)) => assert!(msg.contains("failed")),
            other => panic!("Expected Network error, got: {:?}", other),
        }
        assert!(!store.has_chunk(&id).await);
    }
}
