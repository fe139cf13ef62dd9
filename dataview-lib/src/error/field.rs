//! FieldError for dynamic record access

/// Error type for reading or building fields on a dynamic [`Record`](crate::model::Record).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// The requested field does not exist in the record.
    #[error("Field '{field}' not found in record")]
    Missing { field: String },

    /// The field exists but has a different type than requested.
    #[error("Field '{field}' type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// A JSON value has no scalar representation (arrays and nested objects).
    #[error("Field '{field}' holds a JSON {kind}, which is not a scalar value")]
    NotScalar { field: String, kind: &'static str },

    /// The JSON input was not an object, or its id was missing or not a string.
    #[error("Record id field '{field}' is missing or not a string")]
    MissingId { field: String },
}

impl FieldError {
    /// Creates a new missing field error.
    pub fn missing(field: impl Into<String>) -> Self {
        Self::Missing {
            field: field.into(),
        }
    }

    /// Creates a new type mismatch error.
    pub fn type_mismatch(field: impl Into<String>, expected: &'static str, actual: &'static str) -> Self {
        Self::TypeMismatch {
            field: field.into(),
            expected,
            actual,
        }
    }
}
