//! Presentation layer - Dioxus components, view state and effect handlers

pub mod components;
pub mod handlers;
pub mod services;
pub mod state;
pub mod views;

pub use services::Services;
