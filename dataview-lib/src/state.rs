//! Explicit view state and the transitions that act on it.

use serde::Deserialize;
use serde::Serialize;

use crate::query::FieldFilter;
use crate::query::FilterState;
use crate::query::PaginationState;
use crate::query::SortState;
use crate::selection::Selection;

/// Everything a table view remembers between renders.
///
/// The engine never stores one of these; callers own it and pass it in.
/// Transitions return a new value instead of mutating in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub filters: FilterState,
    pub sort: SortState,
    pub pagination: PaginationState,
    pub selection: Selection,
}

impl ViewState {
    /// Empty filters, no sort, page 1, nothing selected.
    pub fn new(page_size: usize) -> Self {
        Self {
            filters: FilterState::default(),
            sort: SortState::none(),
            pagination: PaginationState::new(page_size),
            selection: Selection::new(),
        }
    }
}

/// A state transition described as data.
///
/// Hosts that route UI events through a single handler can forward these to
/// [`ViewEngine::apply`](crate::ViewEngine::apply).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViewAction {
    /// Replace the search text. Resets to page 1.
    SetQuery { query: String },
    /// Set or clear one discrete filter. Resets to page 1.
    SetFilter { field: String, filter: FieldFilter },
    /// Empty the query and reset every discrete filter. Resets to page 1.
    ClearFilters,
    /// Flip the active field's direction, or sort a new field ascending.
    /// Resets to page 1.
    ToggleSort { field: String },
    /// Back to source order. Resets to page 1.
    ClearSort,
    /// Jump to a page (clamped).
    SetPage { page: usize },
    NextPage,
    PreviousPage,
    /// Change the page size (snapped to the allowed set). Resets to page 1.
    SetPageSize { size: usize },
    /// Flip one row's selection.
    ToggleRow { id: String },
    SelectRow { id: String },
    DeselectRow { id: String },
    /// Select or deselect every row on the current page.
    ToggleAllOnPage { checked: bool },
    /// Drop the whole selection, e.g. after a bulk action ran.
    ClearSelection,
}

impl ViewAction {
    /// Short name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            ViewAction::SetQuery { .. } => "set_query",
            ViewAction::SetFilter { .. } => "set_filter",
            ViewAction::ClearFilters => "clear_filters",
            ViewAction::ToggleSort { .. } => "toggle_sort",
            ViewAction::ClearSort => "clear_sort",
            ViewAction::SetPage { .. } => "set_page",
            ViewAction::NextPage => "next_page",
            ViewAction::PreviousPage => "previous_page",
            ViewAction::SetPageSize { .. } => "set_page_size",
            ViewAction::ToggleRow { .. } => "toggle_row",
            ViewAction::SelectRow { .. } => "select_row",
            ViewAction::DeselectRow { .. } => "deselect_row",
            ViewAction::ToggleAllOnPage { .. } => "toggle_all_on_page",
            ViewAction::ClearSelection => "clear_selection",
        }
    }
}
