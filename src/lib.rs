//! In-memory registry for lost & found item reports.
//!
//! This crate holds the domain logic behind the lost & found HTTP service:
//! the [`Item`] record, the loose value rules used to validate and compare
//! reports, the [`SearchQuery`] matching policy, and the append-only
//! [`Registry`] itself. The HTTP surface lives in the `server` crate under
//! `crates/server`.
//!
//! # Matching policy
//!
//! A search picks exactly one branch, in priority order:
//!
//! 1. a truthy `id` selects items whose id loosely equals it (`5` == `"5"`);
//! 2. otherwise a truthy `description` selects items whose description or
//!    tags contain it, case-insensitively;
//! 3. otherwise every item is returned.
//!
//! Results always keep insertion order.
//!
//! # Example
//!
//! ```
//! use lostfound::{Registry, SearchQuery};
//! use serde_json::json;
//!
//! let registry = Registry::new();
//! registry
//!     .report(json!({"id": 1, "description": "Lost wallet", "tags": "brown,leather"}))
//!     .unwrap();
//!
//! let hits = registry.search(&SearchQuery::by_description("LEATHER")).unwrap();
//! assert_eq!(hits.results.len(), 1);
//! ```

pub mod error;
pub mod item;
pub mod query;
pub mod registry;
pub mod value;

pub use error::RegistryError;
pub use item::{Item, TAGS_FIELD};
pub use query::{SearchFilter, SearchQuery, SearchResults};
pub use registry::Registry;
pub use value::{is_truthy, loose_text, loosely_equal};
