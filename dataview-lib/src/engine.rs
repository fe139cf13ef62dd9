//! The view engine: derives a [`ViewResult`] from records and a [`ViewState`],
//! and produces new states from transitions.

use std::collections::HashSet;

use log::debug;
use log::trace;

use crate::config::ViewConfig;
use crate::error::ConfigError;
use crate::model::Schema;
use crate::model::ViewRecord;
use crate::query::FieldFilter;
use crate::query::Page;
use crate::query::PaginationState;
use crate::query::SortState;
use crate::query::apply_filters;
use crate::query::apply_sort;
use crate::query::paginate;
use crate::result::ViewResult;
use crate::state::ViewAction;
use crate::state::ViewState;

/// Stateless filter → sort → paginate → select pipeline over records of type `R`.
///
/// The engine only holds the field schema and page-size configuration. All
/// view state lives in a caller-owned [`ViewState`]; every method is a pure
/// function of its arguments, so one engine can be shared across threads.
///
/// # Example
///
/// ```
/// use dataview_lib::ViewEngine;
/// use dataview_lib::model::{Field, Schema, ViewRecord};
/// use dataview_lib::query::FieldFilter;
///
/// struct User { id: String, name: String, status: String }
///
/// impl ViewRecord for User {
///     fn id(&self) -> &str { &self.id }
/// }
///
/// let schema = Schema::new([
///     Field::text("name", |u: &User| u.name.as_str()).searchable().sortable(),
///     Field::enumerated("status", |u: &User| u.status.as_str()),
/// ]).unwrap();
/// let engine = ViewEngine::new(schema);
///
/// let users = vec![
///     User { id: "u1".into(), name: "Ada".into(), status: "active".into() },
///     User { id: "u2".into(), name: "Brian".into(), status: "pending".into() },
/// ];
///
/// let state = engine.initial_state();
/// let state = engine.set_filter(&state, "status", FieldFilter::equals("active"));
/// let view = engine.compute_view(&users, &state);
///
/// assert_eq!(view.total_filtered, 1);
/// assert_eq!(view.page[0].name, "Ada");
/// ```
#[derive(Debug, Clone)]
pub struct ViewEngine<R> {
    pub(crate) schema: Schema<R>,
    pub(crate) config: ViewConfig,
}

impl<R: ViewRecord> ViewEngine<R> {
    /// Create an engine with the default [`ViewConfig`].
    pub fn new(schema: Schema<R>) -> Self {
        Self {
            schema,
            config: ViewConfig::default(),
        }
    }

    /// Create an engine with a custom page-size configuration.
    pub fn with_config(schema: Schema<R>, config: ViewConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { schema, config })
    }

    pub fn schema(&self) -> &Schema<R> {
        &self.schema
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Empty filters, no sort, page 1 at the default page size, nothing selected.
    pub fn initial_state(&self) -> ViewState {
        ViewState::new(self.config.default_page_size)
    }

    // =========================================================================
    // Derivation
    // =========================================================================

    /// Derive the visible view. Pure and total: identical inputs give
    /// identical output, and an empty source gives an empty single page.
    pub fn compute_view<'a>(&self, records: &'a [R], state: &ViewState) -> ViewResult<'a, R> {
        let sorted = self.filtered(records, state);
        let page = paginate(&sorted, state.pagination);

        let page_ids = page.records().iter().map(|r| r.id());
        let is_all_on_page_selected = state.selection.is_all_selected(page_ids);

        trace!(
            "[view] {} records, {} filtered, page {}/{} ({} rows), {} selected",
            records.len(),
            sorted.len(),
            page.page_index(),
            page.total_pages(),
            page.len(),
            state.selection.len()
        );

        ViewResult {
            total_filtered: page.total_count(),
            total_pages: page.total_pages(),
            page_index: page.page_index(),
            page_size: page.page_size(),
            has_previous: page.has_previous(),
            has_next: page.has_next(),
            range: page.range(),
            selected_count: state.selection.len(),
            is_all_on_page_selected,
            page: page.into_records(),
            filtered: sorted,
        }
    }

    /// The filtered and sorted records, without paging.
    pub fn filtered<'a>(&self, records: &'a [R], state: &ViewState) -> Vec<&'a R> {
        let filtered = apply_filters(&self.schema, records, &state.filters);
        apply_sort(&self.schema, filtered, &state.sort)
    }

    /// Number of records passing the filters. Skips the sort, which cannot
    /// change the count.
    pub fn filtered_len(&self, records: &[R], state: &ViewState) -> usize {
        apply_filters(&self.schema, records, &state.filters).len()
    }

    /// The current (clamped) page.
    pub fn current_page<'a>(&self, records: &'a [R], state: &ViewState) -> Page<'a, R> {
        paginate(&self.filtered(records, state), state.pagination)
    }

    /// Selected records in source order, the input to a bulk action.
    pub fn selected_records<'a>(&self, records: &'a [R], state: &ViewState) -> Vec<&'a R> {
        records
            .iter()
            .filter(|r| state.selection.is_selected(r.id()))
            .collect()
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Apply a transition described as data.
    pub fn apply(&self, records: &[R], state: &ViewState, action: ViewAction) -> ViewState {
        debug!("[view] apply {}", action.name());
        match action {
            ViewAction::SetQuery { query } => self.set_query(state, query),
            ViewAction::SetFilter { field, filter } => self.set_filter(state, field, filter),
            ViewAction::ClearFilters => self.clear_filters(state),
            ViewAction::ToggleSort { field } => self.toggle_sort(state, &field),
            ViewAction::ClearSort => self.clear_sort(state),
            ViewAction::SetPage { page } => self.set_page(records, state, page),
            ViewAction::NextPage => self.next_page(records, state),
            ViewAction::PreviousPage => self.previous_page(records, state),
            ViewAction::SetPageSize { size } => self.set_page_size(state, size),
            ViewAction::ToggleRow { id } => self.toggle_row(records, state, &id),
            ViewAction::SelectRow { id } => self.select_row(records, state, &id),
            ViewAction::DeselectRow { id } => self.deselect_row(state, &id),
            ViewAction::ToggleAllOnPage { checked } => {
                self.toggle_all_on_page(records, state, checked)
            }
            ViewAction::ClearSelection => self.clear_selection(state),
        }
    }

    /// Replace the search text and go back to page 1.
    pub fn set_query(&self, state: &ViewState, query: impl Into<String>) -> ViewState {
        let mut next = state.clone();
        next.filters.set_query(query);
        next.pagination.reset();
        debug!("[view] query = {:?}", next.filters.query());
        next
    }

    /// Set or clear a discrete filter and go back to page 1.
    ///
    /// Fields the schema does not define leave the state unchanged.
    pub fn set_filter(
        &self,
        state: &ViewState,
        field: impl Into<String>,
        filter: FieldFilter,
    ) -> ViewState {
        let field = field.into();
        if self.schema.field(&field).is_none() {
            debug!("[view] ignoring filter on unknown field {:?}", field);
            return state.clone();
        }
        debug!("[view] filter {} = {:?}", field, filter);
        let mut next = state.clone();
        next.filters.set_filter(field, filter);
        next.pagination.reset();
        next
    }

    /// Reset the query and every discrete filter, back to page 1.
    pub fn clear_filters(&self, state: &ViewState) -> ViewState {
        let mut next = state.clone();
        next.filters.clear();
        next.pagination.reset();
        next
    }

    /// Toggle the sort on `field` and go back to page 1.
    ///
    /// Fields not declared sortable in the schema leave the state unchanged.
    pub fn toggle_sort(&self, state: &ViewState, field: &str) -> ViewState {
        if !self.schema.is_sortable(field) {
            debug!("[view] ignoring sort on non-sortable field {:?}", field);
            return state.clone();
        }
        let mut next = state.clone();
        next.sort = state.sort.toggled(field);
        next.pagination.reset();
        debug!("[view] sort = {:?}", next.sort.key());
        next
    }

    /// Drop the sort key, back to page 1.
    pub fn clear_sort(&self, state: &ViewState) -> ViewState {
        let mut next = state.clone();
        next.sort = SortState::none();
        next.pagination.reset();
        next
    }

    /// Jump to `page`, clamped to the pages that exist.
    pub fn set_page(&self, records: &[R], state: &ViewState, page: usize) -> ViewState {
        let total = self.filtered_len(records, state);
        let mut next = state.clone();
        next.pagination = state.pagination.with_page(page).clamped(total);
        if next.pagination.page_index() != page {
            debug!(
                "[view] page {} clamped to {}",
                page,
                next.pagination.page_index()
            );
        }
        next
    }

    pub fn next_page(&self, records: &[R], state: &ViewState) -> ViewState {
        let page = state.pagination.page_index().saturating_add(1);
        self.set_page(records, state, page)
    }

    pub fn previous_page(&self, records: &[R], state: &ViewState) -> ViewState {
        let page = state.pagination.page_index().saturating_sub(1);
        self.set_page(records, state, page)
    }

    /// Change the page size and go back to page 1.
    ///
    /// Sizes outside the configured set snap to the nearest allowed size.
    pub fn set_page_size(&self, state: &ViewState, size: usize) -> ViewState {
        let snapped = self.config.snap_page_size(size);
        if snapped != size {
            debug!("[view] page size {} snapped to {}", size, snapped);
        }
        let mut next = state.clone();
        next.pagination = PaginationState::new(snapped);
        next
    }

    /// Flip one row's selection. Ids not in `records` are ignored.
    pub fn toggle_row(&self, records: &[R], state: &ViewState, id: &str) -> ViewState {
        let mut next = state.clone();
        if contains_id(records, id) {
            next.selection.toggle(id);
        } else {
            debug!("[view] toggle of unknown id {:?} ignored", id);
        }
        next
    }

    /// Select one row. Ids not in `records` are ignored.
    pub fn select_row(&self, records: &[R], state: &ViewState, id: &str) -> ViewState {
        let mut next = state.clone();
        if contains_id(records, id) {
            next.selection.select(id);
        }
        next
    }

    /// Deselect one row; a no-op when it was not selected.
    pub fn deselect_row(&self, state: &ViewState, id: &str) -> ViewState {
        let mut next = state.clone();
        next.selection.deselect(id);
        next
    }

    /// Select or deselect exactly the rows on the current page.
    ///
    /// Rows on other pages, or filtered out of view, keep their selection.
    pub fn toggle_all_on_page(&self, records: &[R], state: &ViewState, checked: bool) -> ViewState {
        let page = self.current_page(records, state);
        let mut next = state.clone();
        let changed = next
            .selection
            .toggle_all_on_page(page.records().iter().map(|r| r.id()), checked);
        debug!(
            "[view] {} {} rows on page {}",
            if checked { "selected" } else { "deselected" },
            changed.len(),
            page.page_index()
        );
        next
    }

    pub fn clear_selection(&self, state: &ViewState) -> ViewState {
        let mut next = state.clone();
        next.selection.clear();
        next
    }

    /// The record source was replaced: prune selection of ids that no longer
    /// exist and clamp the page to the new result set.
    pub fn source_changed(&self, records: &[R], state: &ViewState) -> ViewState {
        let valid: HashSet<&str> = records.iter().map(|r| r.id()).collect();
        let mut next = state.clone();
        let pruned = next.selection.prune(&valid);
        if !pruned.is_empty() {
            debug!("[view] pruned {} stale selections: {:?}", pruned.len(), pruned);
        }
        let total = self.filtered_len(records, &next);
        next.pagination = next.pagination.clamped(total);
        next
    }
}

fn contains_id<R: ViewRecord>(records: &[R], id: &str) -> bool {
    records.iter().any(|r| r.id() == id)
}
