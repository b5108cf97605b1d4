//! Application layer - Use cases and orchestration

pub mod api;
pub mod services;

pub use api::Api;
