// crates/chunkyard-cli/src/output.rs
//
// Output helpers for the Chunkyard CLI: tables for humans, JSON for scripts.

use serde::Serialize;
use tabled::{Table, Tabled};

/// Format a slice of Tabled items as a table string.
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    Table::new(data).to_string()
}

/// Render `data` as pretty-printed JSON. A value that cannot be encoded is
/// reported as a JSON object with an `error` field, so the output stays JSON.
pub fn format_json<T: Serialize>(data: &T) -> String {
    serde_json::to_string_pretty(data)
        .unwrap_or_else(|e| serde_json::json!({ "error": e.to_string() }).to_string())
}
