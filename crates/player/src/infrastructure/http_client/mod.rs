//! HTTP adapters implementing [`RawApiPort`](crate::ports::outbound::RawApiPort)
//!
//! The correct client is selected at compile time based on the target architecture.

#[cfg(not(target_arch = "wasm32"))]
mod desktop;

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::ApiAdapter;

#[cfg(target_arch = "wasm32")]
pub use wasm::ApiAdapter;

/// Join a base URL (already trimmed of trailing slashes) and an absolute path
pub(crate) fn join_url(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url, path.trim_start_matches('/'))
}
