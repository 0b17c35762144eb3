use crate::item::Item;
use crate::value::{is_truthy, loose_text};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Search request body.
///
/// Both fields are optional; any other keys sent by the client (including
/// `tags`) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,
}

impl SearchQuery {
    pub fn by_id(id: impl Into<Value>) -> Self {
        Self {
            id: Some(id.into()),
            description: None,
        }
    }

    pub fn by_description(text: impl Into<Value>) -> Self {
        Self {
            id: None,
            description: Some(text.into()),
        }
    }

    /// Resolve which matching branch applies.
    ///
    /// A truthy `id` always wins over `description`; with neither provided
    /// the query selects everything.
    pub fn filter(&self) -> SearchFilter {
        match (&self.id, &self.description) {
            (Some(id), _) if is_truthy(Some(id)) => SearchFilter::Id(id.clone()),
            (_, Some(text)) if is_truthy(Some(text)) => {
                SearchFilter::Text(loose_text(text).to_lowercase())
            }
            _ => SearchFilter::All,
        }
    }
}

/// The single matching policy selected for a search.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchFilter {
    /// Loose id equality.
    Id(Value),
    /// Lowercased substring over description or tags.
    Text(String),
    All,
}

impl SearchFilter {
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            SearchFilter::Id(id) => item.id_matches(id),
            SearchFilter::Text(needle) => item.text_matches(needle),
            SearchFilter::All => true,
        }
    }

    /// Short label used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            SearchFilter::Id(_) => "id",
            SearchFilter::Text(_) => "description",
            SearchFilter::All => "all",
        }
    }
}

/// Search response envelope: `{ "results": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchResults {
    pub results: Vec<Item>,
}

impl SearchResults {
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
