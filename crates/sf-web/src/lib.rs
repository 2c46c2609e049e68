//! StudyForum web entrypoint and common exports.
//!
//! This crate hosts the Dioxus-based web UI and the Axum server that serves
//! it, together with the typed server functions the pages call.

pub mod app;
pub mod app_root;
pub mod error;

#[cfg(feature = "server")]
pub mod server;

pub use app::routes::Routes;
pub use app::{components, pages, routes};
#[cfg(feature = "server")]
pub use server::config::WebServerConfig;
#[cfg(feature = "server")]
pub use server::run_web_server;
