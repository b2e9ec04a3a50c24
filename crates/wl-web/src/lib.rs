//! WedLink web entrypoint and common exports.
//!
//! This crate hosts the Dioxus-based web UI for the WedLink marketplace. The
//! server half of the fullstack build proxies the external marketplace REST
//! API; no marketplace business logic lives here.

pub mod app;
pub mod app_root;
pub mod error;

// Server-side infrastructure (upstream HTTP client and its configuration).
#[cfg(feature = "server")]
pub mod server;

pub use app::{components, pages, routes};
pub use routes::Routes;
