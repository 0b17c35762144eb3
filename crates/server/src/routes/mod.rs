//! API route handlers
//!
//! - `items`: report and search lost & found items
//! - `health`: liveness probe

pub mod health;
pub mod items;

use crate::error::ServerError;

/// 404 Not Found handler
///
/// Used when the static directory has no file for the requested path.
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
