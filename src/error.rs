//! Error types produced by the registry.
//!
//! | Error | Category | Description |
//! |-------|----------|-------------|
//! | [`MissingRequiredFields`](RegistryError::MissingRequiredFields) | Validation | Report lacks a truthy `id` or `description` |
//! | [`LockPoisoned`](RegistryError::LockPoisoned) | Internal | A writer panicked while holding the registry lock |
//!
//! Validation errors are recoverable: the report is rejected and the registry
//! is left untouched. Callers exposing the registry over HTTP map them to
//! `400 Bad Request`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The display text is the exact body returned to HTTP clients.
    #[error("Missing required fields")]
    MissingRequiredFields,

    #[error("registry lock poisoned")]
    LockPoisoned,
}

impl RegistryError {
    /// Whether the caller sent bad input (as opposed to an internal failure).
    pub fn is_validation(&self) -> bool {
        matches!(self, RegistryError::MissingRequiredFields)
    }
}
