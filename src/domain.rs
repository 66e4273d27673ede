use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::errors::ServiceError;

/// Canonical string form of a record identifier.
///
/// Ids arrive either as JSON values (numbers or strings) or as URL path
/// segments. Both are normalized here so that comparisons are plain string
/// equality: integral numbers render without a fractional part (`1` and `1.0`
/// both become `"1"`), strings and path segments are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordId(String);

impl RecordId {
    pub fn from_path(segment: &str) -> Self {
        RecordId(segment.to_string())
    }

    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(RecordId(s.clone())),
            Value::Number(n) => Some(RecordId(canonical_number(n))),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        RecordId(id.to_string())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn canonical_number(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        // integral floats print in plain decimal, so `1e16` matches "10000000000000000"
        Some(f) if f == 0.0 => String::from("0"),
        Some(f) if f.is_finite() && f.fract() == 0.0 => format!("{:.0}", f),
        _ => n.to_string(),
    }
}

/// A cart entry. The body is whatever object the client posted; only the
/// `id` is interpreted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CartItem {
    #[serde(skip)]
    pub id: RecordId,
    pub body: Map<String, Value>,
}

impl TryFrom<Value> for CartItem {
    type Error = ServiceError;

    fn try_from(payload: Value) -> Result<Self, Self::Error> {
        let body = match payload {
            Value::Object(map) => map,
            other => {
                return Err(ServiceError::Validation(format!(
                    "Cart item must be a JSON object, got {}",
                    json_kind(&other)
                )))
            }
        };

        let id = match body.get("id") {
            Some(value) => RecordId::from_json(value).ok_or_else(|| {
                ServiceError::Validation(format!(
                    "Cart item id must be a string or a number, got {}",
                    json_kind(value)
                ))
            })?,
            None => return Err(ServiceError::Validation(String::from("Cart item id is required"))),
        };

        Ok(CartItem { id, body })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Created,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: u64,
    pub items: Vec<Value>,
    pub total: Number,
    pub status: OrderStatus,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn from_draft(id: u64, draft: NewOrder, created_at: DateTime<Utc>) -> Self {
        Order {
            id,
            items: draft.items,
            total: draft.total,
            status: OrderStatus::Created,
            created_at,
        }
    }

    pub fn record_id(&self) -> RecordId {
        RecordId::from(self.id)
    }
}

/// Validated order payload, before the store assigns an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub items: Vec<Value>,
    pub total: Number,
}

impl Default for NewOrder {
    fn default() -> Self {
        NewOrder {
            items: Vec::new(),
            total: Number::from(0),
        }
    }
}

impl TryFrom<Value> for NewOrder {
    type Error = ServiceError;

    fn try_from(payload: Value) -> Result<Self, Self::Error> {
        let mut body = match payload {
            Value::Object(map) => map,
            Value::Null => return Ok(NewOrder::default()),
            other => {
                return Err(ServiceError::Validation(format!(
                    "Order must be a JSON object, got {}",
                    json_kind(&other)
                )))
            }
        };

        let items = match body.remove("items") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items,
            Some(other) => {
                return Err(ServiceError::Validation(format!(
                    "Order items must be an array, got {}",
                    json_kind(&other)
                )))
            }
        };

        let total = match body.remove("total") {
            None | Some(Value::Null) => Number::from(0),
            Some(Value::Number(n)) => {
                if n.as_f64().is_some_and(|f| f < 0.0) {
                    return Err(ServiceError::Validation(format!(
                        "Order total must not be negative, got {}",
                        n
                    )));
                }
                n
            }
            Some(other) => {
                return Err(ServiceError::Validation(format!(
                    "Order total must be a number, got {}",
                    json_kind(&other)
                )))
            }
        };

        Ok(NewOrder { items, total })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
