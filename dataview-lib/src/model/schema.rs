//! Typed field accessor map
//!
//! A [`Schema`] is resolved once when the engine is built. Filters, search and
//! sorting look fields up by name here instead of probing records at runtime.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::Record;
use super::Value;
use crate::error::SchemaError;

/// The kind of value a field produces.
///
/// Used when decoding persisted filter values back into [`Value`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Free text.
    Text,
    /// A label from a closed set (status, role).
    Enum,
    /// A date or timestamp.
    DateTime,
    /// An integer.
    Int,
    /// A floating point number.
    Float,
    /// A flag.
    Bool,
}

type Accessor<R> = Arc<dyn Fn(&R) -> Option<Value> + Send + Sync>;

/// A named field with its accessor.
///
/// # Example
///
/// ```
/// use dataview_lib::model::Field;
///
/// struct User {
///     name: String,
///     status: String,
/// }
///
/// let name = Field::text("name", |u: &User| u.name.as_str()).searchable().sortable();
/// let status = Field::enumerated("status", |u: &User| u.status.as_str()).sortable();
/// ```
pub struct Field<R> {
    name: String,
    kind: FieldKind,
    searchable: bool,
    sortable: bool,
    accessor: Accessor<R>,
}

impl<R> Field<R> {
    /// Create a field from an arbitrary accessor.
    ///
    /// Returning `None` means the field is absent on that record.
    pub fn new<F>(name: impl Into<String>, kind: FieldKind, accessor: F) -> Self
    where
        F: Fn(&R) -> Option<Value> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            kind,
            searchable: false,
            sortable: false,
            accessor: Arc::new(accessor),
        }
    }

    /// A free-text field.
    pub fn text<F>(name: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(&R) -> &str + Send + Sync + 'static,
    {
        Self::new(name, FieldKind::Text, move |r| {
            Some(Value::String(accessor(r).to_string()))
        })
    }

    /// An enumerated label field (status, role, category).
    pub fn enumerated<F>(name: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(&R) -> &str + Send + Sync + 'static,
    {
        Self::new(name, FieldKind::Enum, move |r| {
            Some(Value::String(accessor(r).to_string()))
        })
    }

    /// A date/time field.
    pub fn datetime<F>(name: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(&R) -> DateTime<Utc> + Send + Sync + 'static,
    {
        Self::new(name, FieldKind::DateTime, move |r| {
            Some(Value::DateTime(accessor(r)))
        })
    }

    /// An integer field.
    pub fn int<F>(name: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(&R) -> i64 + Send + Sync + 'static,
    {
        Self::new(name, FieldKind::Int, move |r| Some(Value::Int(accessor(r))))
    }

    /// Include this field in free-text search.
    pub fn searchable(mut self) -> Self {
        self.searchable = true;
        self
    }

    /// Allow this field to be used as the sort key.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn is_searchable(&self) -> bool {
        self.searchable
    }

    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    /// Read this field from a record.
    pub fn read(&self, record: &R) -> Option<Value> {
        (self.accessor)(record)
    }
}

impl Field<Record> {
    /// A field read by name from a dynamic [`Record`].
    pub fn dynamic(name: impl Into<String>, kind: FieldKind) -> Self {
        let name = name.into();
        let key = name.clone();
        Self::new(name, kind, move |r: &Record| r.get(&key).cloned())
    }
}

impl<R> Clone for Field<R> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            kind: self.kind,
            searchable: self.searchable,
            sortable: self.sortable,
            accessor: Arc::clone(&self.accessor),
        }
    }
}

impl<R> fmt::Debug for Field<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("searchable", &self.searchable)
            .field("sortable", &self.sortable)
            .finish_non_exhaustive()
    }
}

/// Ordered set of fields addressable by name.
pub struct Schema<R> {
    fields: Vec<Field<R>>,
    by_name: HashMap<String, usize>,
}

impl<R> Schema<R> {
    /// Build a schema, rejecting empty or duplicate field names.
    pub fn new(fields: impl IntoIterator<Item = Field<R>>) -> Result<Self, SchemaError> {
        let fields: Vec<Field<R>> = fields.into_iter().collect();
        let mut by_name = HashMap::with_capacity(fields.len());
        for (index, field) in fields.iter().enumerate() {
            if field.name.is_empty() {
                return Err(SchemaError::EmptyFieldName);
            }
            if by_name.insert(field.name.clone(), index).is_some() {
                return Err(SchemaError::duplicate(&field.name));
            }
        }
        Ok(Self { fields, by_name })
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&Field<R>> {
        self.by_name.get(name).map(|&i| &self.fields[i])
    }

    /// All fields in declaration order.
    pub fn fields(&self) -> &[Field<R>] {
        &self.fields
    }

    /// Fields that participate in free-text search.
    pub fn searchable_fields(&self) -> impl Iterator<Item = &Field<R>> {
        self.fields.iter().filter(|f| f.searchable)
    }

    /// Whether `name` is a field that may be used as the sort key.
    pub fn is_sortable(&self, name: &str) -> bool {
        self.field(name).is_some_and(|f| f.sortable)
    }

    /// Read a field by name. `None` if the field is unknown or absent on the record.
    pub fn value(&self, record: &R, name: &str) -> Option<Value> {
        self.field(name).and_then(|f| f.read(record))
    }
}

impl<R> Clone for Schema<R> {
    fn clone(&self) -> Self {
        Self {
            fields: self.fields.clone(),
            by_name: self.by_name.clone(),
        }
    }
}

impl<R> fmt::Debug for Schema<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema").field("fields", &self.fields).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        name: String,
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let result = Schema::new([
            Field::text("name", |r: &Row| r.name.as_str()),
            Field::text("name", |r: &Row| r.name.as_str()),
        ]);
        assert_eq!(result.unwrap_err(), SchemaError::duplicate("name"));
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = Schema::new([Field::text("", |r: &Row| r.name.as_str())]);
        assert_eq!(result.unwrap_err(), SchemaError::EmptyFieldName);
    }

    #[test]
    fn test_lookup_and_flags() {
        let schema = Schema::new([
            Field::text("name", |r: &Row| r.name.as_str()).searchable(),
            Field::int("len", |r: &Row| r.name.len() as i64).sortable(),
        ])
        .unwrap();

        let row = Row {
            name: "Ada".to_string(),
        };
        assert_eq!(schema.value(&row, "name"), Some(Value::from("Ada")));
        assert_eq!(schema.value(&row, "len"), Some(Value::Int(3)));
        assert_eq!(schema.value(&row, "missing"), None);
        assert!(schema.is_sortable("len"));
        assert!(!schema.is_sortable("name"));
        assert_eq!(schema.searchable_fields().count(), 1);
    }

    #[test]
    fn test_dynamic_field_absent() {
        let field = Field::dynamic("email", FieldKind::Text);
        assert_eq!(field.read(&Record::new("u1")), None);
        assert_eq!(
            field.read(&Record::new("u2").set("email", "a@b.c")),
            Some(Value::from("a@b.c"))
        );
    }
}
