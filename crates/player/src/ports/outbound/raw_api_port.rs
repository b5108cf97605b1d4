//! Raw API Port - Object-safe HTTP boundary
//!
//! `ApiPort` is generic over response/request types which makes it not
//! object-safe. The composition root needs something it can store behind
//! `Arc<dyn ...>`, so adapters implement this JSON-level trait and the
//! application layer provides the typed wrapper on top.

use serde_json::Value;

use super::ApiError;

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait RawApiPort: Send + Sync {
    /// GET a JSON document. `Ok(None)` when the server has nothing to return
    /// (204 or 404).
    async fn get_optional_json(&self, path: &str) -> Result<Option<Value>, ApiError>;

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;

    /// POST a JSON body and read the response as plain text
    async fn post_text(&self, path: &str, body: &Value) -> Result<String, ApiError>;
}
