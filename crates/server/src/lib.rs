//! Lost & Found Server - HTTP API for the item registry
//!
//! This crate exposes the [`lostfound`] registry over HTTP. Reported items
//! live in memory for the lifetime of the process.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `POST /report` - Report an item (JSON). `200 Item reported successfully`
//!   or `400 Missing required fields`.
//! - `POST /search` - Search by `id` or `description`; `{"results": [...]}`.
//! - `POST /test_report` - Report an item from a form-urlencoded body.
//! - `GET /health` - Liveness probe.
//! - `GET /*` - Static files from the configured directory.
//!
//! Configuration comes from an optional `server.toml` and
//! `LOSTFOUND_SERVER__*` environment variables; see [`ServerConfig`].

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use crate::config::ServerConfig;
pub use crate::error::{ServerError, ServerResult};
pub use crate::server::{build_router, start_server};
pub use crate::state::ServerState;
