//! # portal
//!
//! Client-side core for the account portal: login, signup, dashboard and
//! profile update against a REST backend.
//!
//! This crate contains the HTTP API client and its auth interceptor, the
//! persisted session store, the route guard, and the page controllers that a
//! view layer binds to. Rendering lives elsewhere.

pub mod app;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

pub use app::App;
pub use config::ClientConfig;
pub use net::types::User;

/// Install the default `tracing` fmt subscriber.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt::try_init();
}
