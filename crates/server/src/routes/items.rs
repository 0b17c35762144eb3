use crate::error::ServerResult;
use crate::state::ServerState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Form, Json};
use lostfound::{Item, RegistryError, SearchQuery, SearchResults};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;

pub const REPORTED: &str = "Item reported successfully";
pub const FORM_REPORTED: &str = "Test item reported successfully";

/// Report a lost or found item
///
/// Accepts any JSON object carrying a truthy `id` and `description`; every
/// other field is stored as sent. Rejections answer `400` with the plain-text
/// body `Missing required fields`.
pub async fn report_item(
    State(state): State<Arc<ServerState>>,
    Json(report): Json<Value>,
) -> ServerResult<impl IntoResponse> {
    state.registry.report(report)?;
    Ok((StatusCode::OK, REPORTED))
}

/// Search reported items by id, by description/tags text, or list all
pub async fn search_items(
    State(state): State<Arc<ServerState>>,
    Json(query): Json<SearchQuery>,
) -> ServerResult<Json<SearchResults>> {
    let results = state.registry.search(&query)?;
    Ok(Json(results))
}

/// Report an item from an `application/x-www-form-urlencoded` body
///
/// Presence is checked on the raw form strings, so only empty values count
/// as missing. After that `isLost` becomes a boolean and an `id` whose text
/// is exactly an integer's decimal form becomes a number, so form reports
/// are found by the same id searches as JSON reports.
pub async fn report_item_form(
    State(state): State<Arc<ServerState>>,
    Form(fields): Form<HashMap<String, String>>,
) -> ServerResult<impl IntoResponse> {
    let item = form_item(fields).inspect_err(|err| {
        tracing::warn!(error = %err, "form report rejected");
    })?;
    state.registry.insert(item)?;
    Ok((StatusCode::OK, FORM_REPORTED))
}

fn form_item(fields: HashMap<String, String>) -> Result<Item, RegistryError> {
    let raw: Map<String, Value> = fields
        .into_iter()
        .map(|(key, value)| (key, Value::String(value)))
        .collect();
    let mut item = Item::from_fields(raw)?;

    if let Some(id) = item.id.as_str().and_then(exact_integer) {
        item.id = Value::from(id);
    }
    if let Some(is_lost) = item.extra.get_mut("isLost") {
        *is_lost = Value::Bool(is_lost.as_str() == Some("true"));
    }
    Ok(item)
}

/// Integer value of `raw` when printing it back gives the same text.
fn exact_integer(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok().filter(|n| n.to_string() == raw)
}
