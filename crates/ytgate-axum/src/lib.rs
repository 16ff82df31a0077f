//! Axum web adapter for ytgate.
//!
//! Exposes the three-endpoint API (`/api/info`, `/api/download`,
//! `/api/health`) plus static serving for the browser client, and the
//! bootstrap that wires the subprocess runtime into the router.

#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings for the integration test suite
#[cfg(test)]
use async_trait as _;
#[cfg(test)]
use http_body_util as _;
#[cfg(test)]
use tempfile as _;
#[cfg(test)]
use tower as _;

// Dependencies used by the `ytgate` binary only
use clap as _;
use dotenvy as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-export primary types
pub use bootstrap::{AxumContext, CorsConfig, ServerConfig, bootstrap, start_server};
pub use error::HttpError;
pub use routes::{create_router, create_spa_router};
pub use state::AppState;
