//! Learning Library - Dioxus Web Application
//!
//! Single-page browser for a static collection of learning resources.
//! The collection is fetched once from `/resources.json` on startup.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web
//! ```

#![allow(non_snake_case)]

mod app;
mod catalog;
mod components;
mod config;
mod pages;
mod routes;
mod state;
mod types;

use crate::config::{init_config, AppConfig};

fn main() {
    init_logging();

    match AppConfig::from_env() {
        Ok(config) => init_config(config),
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration, using defaults");
        }
    }

    dioxus::launch(app::App);
}

/// Initialize logging
#[cfg(target_arch = "wasm32")]
fn init_logging() {
    // Browser console
    dioxus::logger::init(tracing::Level::INFO).ok();
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
