//! Opaque list row

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

use crate::error::RowError;

/// Stable rendering key of a row, taken from its `id` field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RowId {
    /// Integer id, as served by json-server for auto-increment keys.
    Number(i64),
    /// String id.
    Text(String),
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RowId {
    fn from(id: i64) -> Self {
        Self::Number(id)
    }
}

impl From<i32> for RowId {
    fn from(id: i32) -> Self {
        Self::Number(i64::from(id))
    }
}

impl From<&str> for RowId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

impl From<String> for RowId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

impl From<RowId> for Value {
    fn from(id: RowId) -> Self {
        match id {
            RowId::Number(n) => Value::from(n),
            RowId::Text(s) => Value::String(s),
        }
    }
}

/// A single record returned by the list endpoint.
///
/// Rows are opaque JSON objects. The only field the library relies on is `id`,
/// which is extracted on decode and used as the rendering key.
///
/// # Example
///
/// ```
/// use listview_lib::model::Row;
///
/// let row = Row::new(7).set("title", "qui est esse");
///
/// assert_eq!(row.id().to_string(), "7");
/// assert_eq!(row.get_str("title"), Some("qui est esse"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Row {
    id: RowId,
    /// The full object, `id` included.
    fields: Map<String, Value>,
}

impl Row {
    /// Creates a row holding only its id.
    pub fn new(id: impl Into<RowId>) -> Self {
        let id = id.into();
        let mut fields = Map::new();
        fields.insert("id".to_string(), Value::from(id.clone()));
        Self { id, fields }
    }

    /// Sets a field value. Setting `id` is ignored; the id is fixed at creation.
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        let field = field.into();
        if field != "id" {
            self.fields.insert(field, value.into());
        }
        self
    }

    /// Returns the row id.
    pub fn id(&self) -> &RowId {
        &self.id
    }

    /// Returns a field value.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns a field value if it is a string.
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_str)
    }

    /// Returns all fields of the row.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Consumes the row and returns its fields.
    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }
}

impl TryFrom<Map<String, Value>> for Row {
    type Error = RowError;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        let id = match fields.get("id") {
            None => return Err(RowError::MissingId),
            Some(Value::Number(n)) => match n.as_i64() {
                Some(id) => RowId::Number(id),
                None if n.is_u64() => RowId::Text(n.to_string()),
                None => return Err(RowError::invalid_id("non-integer number")),
            },
            Some(Value::String(s)) => RowId::Text(s.clone()),
            Some(Value::Null) => return Err(RowError::invalid_id("null")),
            Some(Value::Bool(_)) => return Err(RowError::invalid_id("boolean")),
            Some(Value::Array(_)) => return Err(RowError::invalid_id("array")),
            Some(Value::Object(_)) => return Err(RowError::invalid_id("object")),
        };
        Ok(Self { id, fields })
    }
}

impl From<Row> for Map<String, Value> {
    fn from(row: Row) -> Self {
        row.fields
    }
}
