//! CodecError for persisted view state

/// Error returned when decoding a view state from its query-string form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// A numeric parameter (`page`, `size`, or an integer filter) failed to parse.
    #[error("Parameter '{key}' expects a number, got '{value}'")]
    InvalidNumber { key: String, value: String },

    /// The `sort` parameter was not `<field>:asc` or `<field>:desc`.
    #[error("Invalid sort '{value}': expected '<field>:asc' or '<field>:desc'")]
    InvalidSort { value: String },

    /// A date filter value was not RFC 3339.
    #[error("Parameter '{key}' expects an RFC 3339 date, got '{value}'")]
    InvalidDate { key: String, value: String },

    /// A boolean filter value was not `true` or `false`.
    #[error("Parameter '{key}' expects true or false, got '{value}'")]
    InvalidBool { key: String, value: String },

    /// A filter names a field the schema does not define.
    #[error("Filter references unknown field '{field}'")]
    UnknownField { field: String },
}

impl CodecError {
    pub(crate) fn number(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidNumber {
            key: key.into(),
            value: value.into(),
        }
    }
}
