//! Free-text search and discrete field filters.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::model::Schema;
use crate::model::Value;

/// The constraint a discrete filter puts on one field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", content = "value", rename_all = "snake_case")]
pub enum FieldFilter {
    /// Sentinel: no constraint.
    #[default]
    Any,
    /// Field must equal this value exactly (case-sensitive for strings).
    Equals(Value),
}

impl FieldFilter {
    /// Creates an equality filter.
    pub fn equals(value: impl Into<Value>) -> Self {
        FieldFilter::Equals(value.into())
    }

    pub fn is_any(&self) -> bool {
        matches!(self, FieldFilter::Any)
    }
}

/// Query text plus per-field filters.
///
/// Filters set to [`FieldFilter::Any`] are not stored, so an empty query with
/// every filter at `Any` compares equal to `FilterState::default()`.
///
/// # Example
///
/// ```
/// use dataview_lib::query::{FieldFilter, FilterState};
///
/// let filters = FilterState::new()
///     .with_query("ada")
///     .with_filter("status", FieldFilter::equals("active"));
///
/// assert!(filters.is_active());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    query: String,
    #[serde(default)]
    fields: BTreeMap<String, FieldFilter>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search query (builder pattern).
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.set_query(query);
        self
    }

    /// Sets a discrete filter (builder pattern).
    pub fn with_filter(mut self, field: impl Into<String>, filter: FieldFilter) -> Self {
        self.set_filter(field, filter);
        self
    }

    /// The raw query as entered.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Set or clear the filter on `field`.
    pub fn set_filter(&mut self, field: impl Into<String>, filter: FieldFilter) {
        let field = field.into();
        match filter {
            FieldFilter::Any => {
                self.fields.remove(&field);
            }
            filter => {
                self.fields.insert(field, filter);
            }
        }
    }

    /// The filter on `field`, `Any` when none is set.
    pub fn filter(&self, field: &str) -> &FieldFilter {
        const ANY: &FieldFilter = &FieldFilter::Any;
        self.fields.get(field).unwrap_or(ANY)
    }

    /// Active discrete filters, ordered by field name.
    pub fn filters(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().filter_map(|(name, filter)| match filter {
            FieldFilter::Equals(value) => Some((name.as_str(), value)),
            FieldFilter::Any => None,
        })
    }

    /// Returns `true` if anything would be filtered out.
    pub fn is_active(&self) -> bool {
        !self.query.trim().is_empty() || self.filters().next().is_some()
    }

    /// Reset the query and every discrete filter.
    pub fn clear(&mut self) {
        self.query.clear();
        self.fields.clear();
    }

    /// Returns `true` if `record` passes the query and every discrete filter.
    pub fn matches<R>(&self, schema: &Schema<R>, record: &R) -> bool {
        let needle = fold(&self.query);
        Matcher::new(schema, self, &needle).matches(record)
    }
}

/// Keep the records that pass `filters`, in source order.
pub fn apply_filters<'a, R>(
    schema: &Schema<R>,
    records: impl IntoIterator<Item = &'a R>,
    filters: &FilterState,
) -> Vec<&'a R>
where
    R: 'a,
{
    let needle = fold(&filters.query);
    let matcher = Matcher::new(schema, filters, &needle);
    records.into_iter().filter(|r| matcher.matches(r)).collect()
}

fn fold(query: &str) -> String {
    query.trim().to_lowercase()
}

struct Matcher<'s, R> {
    schema: &'s Schema<R>,
    filters: &'s FilterState,
    needle: &'s str,
}

impl<'s, R> Matcher<'s, R> {
    fn new(schema: &'s Schema<R>, filters: &'s FilterState, needle: &'s str) -> Self {
        Self {
            schema,
            filters,
            needle,
        }
    }

    fn matches(&self, record: &R) -> bool {
        self.matches_query(record) && self.matches_fields(record)
    }

    fn matches_query(&self, record: &R) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        self.schema.searchable_fields().any(|field| {
            field
                .read(record)
                .and_then(|value| value.search_text().map(|t| t.to_lowercase()))
                .is_some_and(|text| text.contains(self.needle))
        })
    }

    fn matches_fields(&self, record: &R) -> bool {
        self.filters
            .filters()
            .all(|(name, expected)| self.schema.value(record, name).as_ref() == Some(expected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_is_not_stored() {
        let filters = FilterState::new()
            .with_filter("status", FieldFilter::equals("active"))
            .with_filter("status", FieldFilter::Any);
        assert_eq!(filters, FilterState::default());
        assert!(!filters.is_active());
    }

    #[test]
    fn test_whitespace_query_is_inactive() {
        assert!(!FilterState::new().with_query("   ").is_active());
        assert!(FilterState::new().with_query(" a ").is_active());
    }

    #[test]
    fn test_fold_trims_and_lowercases() {
        assert_eq!(fold("  AdA "), "ada");
    }
}
