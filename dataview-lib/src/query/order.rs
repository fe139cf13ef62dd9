//! Single-column sort state and the stable sort over it.

use std::cmp::Ordering;

use serde::Deserialize;
use serde::Serialize;

use crate::model::Schema;
use crate::model::Value;

/// Sort direction for ordering results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Ascending order (A-Z, 0-9, oldest first).
    #[default]
    Asc,
    /// Descending order (Z-A, 9-0, newest first).
    Desc,
}

impl Direction {
    /// The opposite direction.
    pub fn flip(self) -> Self {
        match self {
            Direction::Asc => Direction::Desc,
            Direction::Desc => Direction::Asc,
        }
    }

    /// Apply this direction to an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }

    /// Parse `asc` or `desc`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(Direction::Asc),
            "desc" => Some(Direction::Desc),
            _ => None,
        }
    }
}

/// The active sort column and its direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    pub field: String,
    pub direction: Direction,
}

/// At most one active sort key.
///
/// Each field has two states, ascending and descending. Toggling the active
/// field flips between them; toggling any other field enters that field's
/// ascending state.
///
/// # Example
///
/// ```
/// use dataview_lib::query::{Direction, SortState};
///
/// let sort = SortState::none().toggled("name");
/// assert_eq!(sort.direction(), Some(Direction::Asc));
///
/// let sort = sort.toggled("name");
/// assert_eq!(sort.direction(), Some(Direction::Desc));
///
/// let sort = sort.toggled("joined");
/// assert_eq!(sort.field(), Some("joined"));
/// assert_eq!(sort.direction(), Some(Direction::Asc));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortState(Option<SortKey>);

impl SortState {
    /// No sort; records keep their filtered order.
    pub fn none() -> Self {
        Self(None)
    }

    /// Sort by `field` in `direction`.
    pub fn by(field: impl Into<String>, direction: Direction) -> Self {
        Self(Some(SortKey {
            field: field.into(),
            direction,
        }))
    }

    pub fn key(&self) -> Option<&SortKey> {
        self.0.as_ref()
    }

    pub fn field(&self) -> Option<&str> {
        self.0.as_ref().map(|k| k.field.as_str())
    }

    pub fn direction(&self) -> Option<Direction> {
        self.0.as_ref().map(|k| k.direction)
    }

    pub fn is_none(&self) -> bool {
        self.0.is_none()
    }

    /// Returns the state after toggling `field`.
    pub fn toggled(&self, field: &str) -> Self {
        match &self.0 {
            Some(key) if key.field == field => Self::by(field, key.direction.flip()),
            _ => Self::by(field, Direction::Asc),
        }
    }
}

/// Order `records` by the active sort key.
///
/// The sort is stable: records whose keys compare equal keep their input
/// order. With no active key the input is returned as-is.
pub fn apply_sort<'a, R>(schema: &Schema<R>, records: Vec<&'a R>, sort: &SortState) -> Vec<&'a R> {
    let Some(key) = sort.key() else {
        return records;
    };

    let mut keyed: Vec<(Value, &'a R)> = records
        .into_iter()
        .map(|r| (schema.value(r, &key.field).unwrap_or(Value::Null), r))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| key.direction.apply(a.total_cmp(b)));

    keyed.into_iter().map(|(_, r)| r).collect()
}
