//! Record identity and the dynamic record type

use std::collections::HashMap;

use chrono::DateTime;
use chrono::Utc;

use super::Value;
use crate::error::FieldError;

/// Trait for anything the engine can display as a table row.
///
/// The only requirement is a stable, unique identifier. Field values are read
/// through a [`Schema`](super::Schema), never through the record itself.
///
/// # Example
///
/// ```
/// use dataview_lib::model::ViewRecord;
///
/// struct User {
///     id: String,
///     name: String,
/// }
///
/// impl ViewRecord for User {
///     fn id(&self) -> &str {
///         &self.id
///     }
/// }
/// ```
pub trait ViewRecord {
    /// Unique identifier of this record within its source.
    fn id(&self) -> &str;
}

/// A dynamic record with fields stored by name.
///
/// Useful when the record shape is only known at runtime, e.g. rows decoded
/// from JSON. Fields can be absent on individual records; filters on an
/// absent field simply do not match.
///
/// # Example
///
/// ```
/// use dataview_lib::model::Record;
///
/// let record = Record::new("u1")
///     .set("name", "Ada")
///     .set("status", "active");
///
/// assert_eq!(record.get_string("name").unwrap(), Some("Ada"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    id: String,
    fields: HashMap<String, Value>,
}

impl ViewRecord for Record {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record {
    /// Creates a new empty record with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: HashMap::new(),
        }
    }

    /// Builds a record from a JSON object.
    ///
    /// `id_field` names the string property holding the identifier; it is also
    /// kept as a regular field so it can be searched. Strings that parse as
    /// RFC 3339 become [`Value::DateTime`].
    pub fn from_json(id_field: &str, json: &serde_json::Value) -> Result<Self, FieldError> {
        let object = json.as_object().ok_or_else(|| FieldError::MissingId {
            field: id_field.to_string(),
        })?;

        let id = object
            .get(id_field)
            .and_then(|v| v.as_str())
            .ok_or_else(|| FieldError::MissingId {
                field: id_field.to_string(),
            })?;

        let mut record = Record::new(id);
        for (name, raw) in object {
            record.insert(name.clone(), json_to_value(name, raw)?);
        }
        Ok(record)
    }

    // =========================================================================
    // Raw field access
    // =========================================================================

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    // =========================================================================
    // Setters
    // =========================================================================

    /// Sets a field value (builder pattern).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Inserts a field value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Reads a text field.
    ///
    /// Errors when the field is absent or not a string; `Ok(None)` means the
    /// field is present and null.
    pub fn get_string(&self, field: &str) -> Result<Option<&str>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(FieldError::type_mismatch(
                field,
                "string",
                other.type_name(),
            )),
        }
    }
}

fn json_to_value(field: &str, raw: &serde_json::Value) -> Result<Value, FieldError> {
    use serde_json::Value as Json;

    let value = match raw {
        Json::Null => Value::Null,
        Json::Bool(b) => Value::Bool(*b),
        Json::Number(n) => match n.as_i64() {
            Some(i) => Value::Int(i),
            None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        Json::String(s) => match DateTime::parse_from_rfc3339(s) {
            Ok(dt) => Value::DateTime(dt.with_timezone(&Utc)),
            Err(_) => Value::String(s.clone()),
        },
        Json::Array(_) => {
            return Err(FieldError::NotScalar {
                field: field.to_string(),
                kind: "array",
            });
        }
        Json::Object(_) => {
            return Err(FieldError::NotScalar {
                field: field.to_string(),
                kind: "object",
            });
        }
    };
    Ok(value)
}
