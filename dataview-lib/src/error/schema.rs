//! SchemaError for field accessor maps

/// Error returned while building a [`Schema`](crate::model::Schema).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// Two fields were registered under the same name.
    #[error("Field '{field}' is defined more than once")]
    DuplicateField { field: String },

    /// A field was registered with an empty name.
    #[error("Field names must not be empty")]
    EmptyFieldName,
}

impl SchemaError {
    /// Creates a new duplicate field error.
    pub fn duplicate(field: impl Into<String>) -> Self {
        Self::DuplicateField {
            field: field.into(),
        }
    }
}
