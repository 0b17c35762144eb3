//! Loose JSON value semantics.
//!
//! Reports arrive as untyped JSON, so presence checks and id comparison
//! follow the loose rules clients expect from a dynamically typed API:
//!
//! - [`is_truthy`] decides whether a field counts as "provided". `null`,
//!   `false`, zero and the empty string are all treated as missing.
//! - [`loose_text`] renders a value to the canonical string used for id
//!   equality and substring search, so `5`, `5.0` and `"5"` compare equal.

use serde_json::Value;
use std::borrow::Cow;

/// Returns `true` when `value` is present and not falsy.
///
/// ```
/// use lostfound::is_truthy;
/// use serde_json::json;
///
/// assert!(is_truthy(Some(&json!("wallet"))));
/// assert!(!is_truthy(Some(&json!(0))));
/// assert!(!is_truthy(Some(&json!(""))));
/// assert!(!is_truthy(None));
/// ```
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Canonical string form of a JSON value.
///
/// Strings are borrowed as-is. Numbers with an integral value print without
/// a fractional part. Arrays and objects fall back to compact JSON text.
pub fn loose_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Cow::Owned(i.to_string())
            } else if let Some(u) = n.as_u64() {
                Cow::Owned(u.to_string())
            } else {
                // f64 Display already drops a zero fraction ("1" for 1.0).
                // It never switches to exponent form: 1e21 prints all 22
                // digits and 1e-7 prints "0.0000001", so those ids only
                // match their plain decimal spelling.
                Cow::Owned(n.as_f64().map(|f| f.to_string()).unwrap_or_default())
            }
        }
        Value::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
        Value::Null => Cow::Borrowed("null"),
        other => Cow::Owned(other.to_string()),
    }
}

/// Loose equality: both sides compared by their canonical string form.
pub fn loosely_equal(a: &Value, b: &Value) -> bool {
    loose_text(a) == loose_text(b)
}
