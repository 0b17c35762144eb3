use crate::error::RegistryError;
use crate::item::Item;
use crate::query::{SearchQuery, SearchResults};
use serde_json::Value;
use std::sync::RwLock;

/// In-memory, append-only collection of reported items.
///
/// Items keep their insertion order and are never updated or removed.
/// Duplicate ids are allowed. The `RwLock` lets the registry sit behind an
/// `Arc` on a multi-threaded runtime: reports take the write lock, searches
/// take the read lock and clone their matches out.
#[derive(Debug, Default)]
pub struct Registry {
    items: RwLock<Vec<Item>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a raw JSON report and append it.
    pub fn report(&self, report: Value) -> Result<(), RegistryError> {
        let item = Item::from_report(report).inspect_err(|err| {
            tracing::warn!(error = %err, "report rejected");
        })?;
        self.insert(item)
    }

    /// Append an already-validated item.
    pub fn insert(&self, item: Item) -> Result<(), RegistryError> {
        // The write lock is held only for the push.
        let mut guard = self
            .items
            .write()
            .map_err(|_| RegistryError::LockPoisoned)?;
        tracing::debug!(id = %item.id_key(), position = guard.len(), "item reported");
        guard.push(item);
        Ok(())
    }

    /// Run a search and return matching items in insertion order.
    pub fn search(&self, query: &SearchQuery) -> Result<SearchResults, RegistryError> {
        let filter = query.filter();
        let guard = self
            .items
            .read()
            .map_err(|_| RegistryError::LockPoisoned)?;
        let results: Vec<Item> = guard
            .iter()
            .filter(|item| filter.matches(item))
            .cloned()
            .collect();
        tracing::debug!(
            filter = filter.kind(),
            hits = results.len(),
            total = guard.len(),
            "search completed"
        );
        Ok(SearchResults { results })
    }

    /// Snapshot of every stored item.
    pub fn all(&self) -> Result<Vec<Item>, RegistryError> {
        let guard = self
            .items
            .read()
            .map_err(|_| RegistryError::LockPoisoned)?;
        Ok(guard.clone())
    }

    pub fn len(&self) -> usize {
        self.items
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
