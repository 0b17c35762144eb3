use crate::error::RegistryError;
use crate::value::{is_truthy, loose_text, loosely_equal};
use serde::Serialize;
use serde_json::{Map, Value};
use std::borrow::Cow;

/// Key under which optional free-text tags are stored.
pub const TAGS_FIELD: &str = "tags";

/// A reported lost (or found) item.
///
/// `id` and `description` are required and keep whatever JSON type the
/// reporter used. Every other submitted field lives in `extra` and is
/// serialized back verbatim, so an item round-trips to the exact object that
/// was reported.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub id: Value,
    pub description: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Item {
    /// Build an item from a raw JSON report.
    ///
    /// Fails with [`RegistryError::MissingRequiredFields`] when the value is
    /// not an object, or when `id` or `description` is absent or falsy.
    pub fn from_report(report: Value) -> Result<Self, RegistryError> {
        match report {
            Value::Object(fields) => Self::from_fields(fields),
            _ => Err(RegistryError::MissingRequiredFields),
        }
    }

    /// Build an item from an already-decoded field map.
    pub fn from_fields(mut fields: Map<String, Value>) -> Result<Self, RegistryError> {
        if !is_truthy(fields.get("id")) || !is_truthy(fields.get("description")) {
            return Err(RegistryError::MissingRequiredFields);
        }
        let id = fields.remove("id").unwrap_or(Value::Null);
        let description = fields.remove("description").unwrap_or(Value::Null);
        Ok(Self {
            id,
            description,
            extra: fields,
        })
    }

    /// Tags text, when the item carries a truthy `tags` field.
    pub fn tags(&self) -> Option<&Value> {
        self.extra.get(TAGS_FIELD).filter(|v| is_truthy(Some(*v)))
    }

    /// Canonical string form of the id.
    pub fn id_key(&self) -> Cow<'_, str> {
        loose_text(&self.id)
    }

    pub fn id_matches(&self, id: &Value) -> bool {
        loosely_equal(&self.id, id)
    }

    /// Case-insensitive substring match over description, then tags.
    ///
    /// `needle` must already be lowercased.
    pub fn text_matches(&self, needle: &str) -> bool {
        if loose_text(&self.description).to_lowercase().contains(needle) {
            return true;
        }
        self.tags()
            .is_some_and(|tags| loose_text(tags).to_lowercase().contains(needle))
    }

    /// Full record as a JSON object, including extra fields.
    pub fn to_value(&self) -> Value {
        let mut fields = Map::with_capacity(self.extra.len() + 2);
        fields.insert("id".to_string(), self.id.clone());
        fields.insert("description".to_string(), self.description.clone());
        for (key, value) in &self.extra {
            fields.insert(key.clone(), value.clone());
        }
        Value::Object(fields)
    }
}

impl TryFrom<Value> for Item {
    type Error = RegistryError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Item::from_report(value)
    }
}
