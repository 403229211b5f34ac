//! Product Model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Product entity
///
/// The storefront treats products as opaque payloads: only the identifier is
/// interpreted (list-item identity). Everything else the backend sends is
/// kept verbatim in `fields`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Backend identifier (`_id` on the wire, `id` accepted)
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Product {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: Map::new(),
        }
    }

    /// Attach an extra field
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Display name, if the backend sent one
    pub fn name(&self) -> Option<&str> {
        self.field("name").and_then(Value::as_str)
    }

    /// Unit price, if the backend sent a numeric one
    pub fn price(&self) -> Option<f64> {
        self.field("price").and_then(Value::as_f64)
    }
}
