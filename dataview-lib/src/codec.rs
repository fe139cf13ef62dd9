//! Query-string form of a [`ViewState`].
//!
//! Lets a host keep the view in a URL:
//!
//! | Key | Meaning |
//! |-----|---------|
//! | `q` | search text |
//! | `f.<field>` | discrete filter value |
//! | `sort` | `<field>:asc` or `<field>:desc` |
//! | `page` | 1-based page index |
//! | `size` | page size |
//!
//! Defaults are omitted when encoding. The selection is never persisted.
//! An empty `f.<field>=` decodes as no filter, so a filter whose value
//! renders as empty text (null or `""`) is left out of the encoding.

use chrono::DateTime;
use chrono::Utc;
use log::debug;
use url::form_urlencoded;

use crate::ViewEngine;
use crate::error::CodecError;
use crate::model::FieldKind;
use crate::model::Value;
use crate::model::ViewRecord;
use crate::query::Direction;
use crate::query::FieldFilter;
use crate::query::PaginationState;
use crate::query::SortState;
use crate::state::ViewState;

const FILTER_PREFIX: &str = "f.";

impl<R: ViewRecord> ViewEngine<R> {
    /// Encode the filter, sort and page parts of `state` as a query string.
    ///
    /// Filters on null or the empty string are dropped; see the module docs.
    ///
    /// # Example
    ///
    /// ```
    /// use dataview_lib::ViewEngine;
    /// use dataview_lib::model::{Field, FieldKind, Record, Schema};
    /// use dataview_lib::query::FieldFilter;
    ///
    /// let schema = Schema::new([
    ///     Field::dynamic("name", FieldKind::Text).searchable().sortable(),
    ///     Field::dynamic("status", FieldKind::Enum),
    /// ]).unwrap();
    /// let engine: ViewEngine<Record> = ViewEngine::new(schema);
    ///
    /// let state = engine.initial_state();
    /// let state = engine.set_query(&state, "ada l");
    /// let state = engine.set_filter(&state, "status", FieldFilter::equals("active"));
    /// let state = engine.toggle_sort(&state, "name");
    ///
    /// let encoded = engine.encode_state(&state);
    /// assert_eq!(encoded, "q=ada+l&f.status=active&sort=name%3Aasc");
    /// assert_eq!(engine.decode_state(&encoded).unwrap(), state);
    /// ```
    pub fn encode_state(&self, state: &ViewState) -> String {
        let mut out = form_urlencoded::Serializer::new(String::new());

        if !state.filters.query().is_empty() {
            out.append_pair("q", state.filters.query());
        }
        for (field, value) in state.filters.filters() {
            let text = value.to_string();
            if text.is_empty() {
                debug!("[codec] dropping empty filter on {:?}", field);
                continue;
            }
            out.append_pair(&format!("{}{}", FILTER_PREFIX, field), &text);
        }
        if let Some(key) = state.sort.key() {
            out.append_pair("sort", &format!("{}:{}", key.field, key.direction.as_str()));
        }
        if state.pagination.page_index() != 1 {
            out.append_pair("page", &state.pagination.page_index().to_string());
        }
        if state.pagination.page_size() != self.config.default_page_size {
            out.append_pair("size", &state.pagination.page_size().to_string());
        }

        out.finish()
    }

    /// Decode a query string produced by [`encode_state`](Self::encode_state).
    ///
    /// Unknown keys are ignored. `page` is only lifted to at least 1 here;
    /// it is clamped against the records when the view is computed.
    pub fn decode_state(&self, query: &str) -> Result<ViewState, CodecError> {
        let mut state = self.initial_state();
        let mut page = 1;
        let mut size = self.config.default_page_size;

        let query = query.strip_prefix('?').unwrap_or(query);
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "q" => state.filters.set_query(value.into_owned()),
                "sort" => state.sort = self.decode_sort(&value)?,
                "page" => page = parse_usize("page", &value)?,
                "size" => size = self.config.snap_page_size(parse_usize("size", &value)?),
                other => match other.strip_prefix(FILTER_PREFIX) {
                    Some(field) => {
                        let filter = self.decode_filter(field, &value)?;
                        state.filters.set_filter(field, filter);
                    }
                    None => debug!("[codec] ignoring unknown key {:?}", other),
                },
            }
        }

        state.pagination = PaginationState::new(size).with_page(page);
        Ok(state)
    }

    fn decode_sort(&self, raw: &str) -> Result<SortState, CodecError> {
        let invalid = || CodecError::InvalidSort {
            value: raw.to_string(),
        };
        let (field, direction) = raw.rsplit_once(':').ok_or_else(invalid)?;
        let direction = Direction::parse(direction).ok_or_else(invalid)?;

        match self.schema.field(field) {
            None => Err(CodecError::UnknownField {
                field: field.to_string(),
            }),
            Some(f) if !f.is_sortable() => {
                debug!("[codec] dropping sort on non-sortable field {:?}", field);
                Ok(SortState::none())
            }
            Some(_) => Ok(SortState::by(field, direction)),
        }
    }

    fn decode_filter(&self, field: &str, raw: &str) -> Result<FieldFilter, CodecError> {
        let kind = self
            .schema
            .field(field)
            .map(|f| f.kind())
            .ok_or_else(|| CodecError::UnknownField {
                field: field.to_string(),
            })?;

        if raw.is_empty() {
            return Ok(FieldFilter::Any);
        }

        let key = format!("{}{}", FILTER_PREFIX, field);
        let value = match kind {
            FieldKind::Text | FieldKind::Enum => Value::String(raw.to_string()),
            FieldKind::Int => raw
                .parse::<i64>()
                .map(Value::Int)
                .map_err(|_| CodecError::number(&key, raw))?,
            FieldKind::Float => raw
                .parse::<f64>()
                .map(Value::Float)
                .map_err(|_| CodecError::number(&key, raw))?,
            FieldKind::Bool => match raw {
                "true" => Value::Bool(true),
                "false" => Value::Bool(false),
                _ => {
                    return Err(CodecError::InvalidBool {
                        key,
                        value: raw.to_string(),
                    });
                }
            },
            FieldKind::DateTime => DateTime::parse_from_rfc3339(raw)
                .map(|dt| Value::DateTime(dt.with_timezone(&Utc)))
                .map_err(|_| CodecError::InvalidDate {
                    key: key.clone(),
                    value: raw.to_string(),
                })?,
        };
        Ok(FieldFilter::Equals(value))
    }
}

fn parse_usize(key: &str, raw: &str) -> Result<usize, CodecError> {
    raw.parse().map_err(|_| CodecError::number(key, raw))
}
