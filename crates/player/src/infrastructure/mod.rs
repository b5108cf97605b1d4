//! Infrastructure adapters (HTTP, configuration, task spawning)

pub mod config;
pub mod http_client;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

use std::future::Future;

/// Spawn a fire-and-forget task on the Dioxus runtime.
///
/// Must be called from inside a component scope or an event handler.
pub fn spawn_task(future: impl Future<Output = ()> + 'static) {
    dioxus::prelude::spawn(future);
}
