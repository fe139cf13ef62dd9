//! Page windowing over a sorted result set.

use serde::Deserialize;
use serde::Serialize;

/// Page position and size.
///
/// `page_index` is 1-based. It may temporarily point past the last page (the
/// result set shrank); [`paginate`] and [`PaginationState::clamped`] pull it
/// back to the nearest valid page.
///
/// Deserialization goes through [`PaginationState::new`], so a persisted
/// index or size of zero is lifted to 1 just like a constructed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawPagination")]
pub struct PaginationState {
    page_index: usize,
    page_size: usize,
}

#[derive(Deserialize)]
struct RawPagination {
    page_index: usize,
    page_size: usize,
}

impl From<RawPagination> for PaginationState {
    fn from(raw: RawPagination) -> Self {
        PaginationState::new(raw.page_size).with_page(raw.page_index)
    }
}

impl PaginationState {
    /// First page at the given size.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_index: 1,
            page_size: page_size.max(1),
        }
    }

    /// Same size, different page (builder pattern).
    pub fn with_page(mut self, page_index: usize) -> Self {
        self.page_index = page_index.max(1);
        self
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Back to page 1.
    pub fn reset(&mut self) {
        self.page_index = 1;
    }

    /// Number of pages for `total` records at this size.
    pub fn total_pages(&self, total: usize) -> usize {
        total_pages(total, self.page_size)
    }

    /// This state with `page_index` forced into `[1, total_pages(total)]`.
    pub fn clamped(&self, total: usize) -> Self {
        Self {
            page_index: self.page_index.clamp(1, self.total_pages(total)),
            page_size: self.page_size.max(1),
        }
    }
}

/// `max(1, ceil(total / page_size))`.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

/// One page of a result set with pagination info.
///
/// # Example
///
/// ```
/// use dataview_lib::query::{paginate, PaginationState};
///
/// let rows = [1, 2, 3, 4, 5];
/// let refs: Vec<&i32> = rows.iter().collect();
///
/// let page = paginate(&refs, PaginationState::new(2).with_page(9));
/// assert_eq!(page.page_index(), 3);
/// assert_eq!(page.records(), &[&5]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, R> {
    records: Vec<&'a R>,
    page_index: usize,
    page_size: usize,
    total_pages: usize,
    total_count: usize,
}

impl<'a, R> Page<'a, R> {
    /// Records on this page.
    pub fn records(&self) -> &[&'a R] {
        &self.records
    }

    /// Consumes the page and returns the records.
    pub fn into_records(self) -> Vec<&'a R> {
        self.records
    }

    /// Effective (clamped) 1-based page index.
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Number of records across all pages.
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Returns `true` if this page has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of records in this page.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn has_previous(&self) -> bool {
        self.page_index > 1
    }

    pub fn has_next(&self) -> bool {
        self.page_index < self.total_pages
    }

    /// 1-based positions of the first and last record shown, `None` when empty.
    pub fn range(&self) -> Option<(usize, usize)> {
        if self.records.is_empty() {
            return None;
        }
        let first = (self.page_index - 1) * self.page_size + 1;
        Some((first, first + self.records.len() - 1))
    }
}

/// Cut the page described by `state` out of `records`.
///
/// The page index is clamped first, so a page that no longer exists yields
/// the last page rather than an empty one.
pub fn paginate<'a, R>(records: &[&'a R], state: PaginationState) -> Page<'a, R> {
    let total_count = records.len();
    let state = state.clamped(total_count);
    let page_size = state.page_size.max(1);

    let start = ((state.page_index - 1) * page_size).min(total_count);
    let end = (start + page_size).min(total_count);

    Page {
        records: records[start..end].to_vec(),
        page_index: state.page_index,
        page_size,
        total_pages: state.total_pages(total_count),
        total_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(8, 5), 2);
        assert_eq!(total_pages(3, 0), 3);
    }

    #[test]
    fn test_clamped() {
        let state = PaginationState::new(5).with_page(4);
        assert_eq!(state.clamped(8).page_index(), 2);
        assert_eq!(state.clamped(0).page_index(), 1);
        assert_eq!(state.clamped(100).page_index(), 4);
    }

    #[test]
    fn test_zero_index_and_size_are_lifted() {
        let state = PaginationState::new(0).with_page(0);
        assert_eq!(state.page_size(), 1);
        assert_eq!(state.page_index(), 1);
    }

    #[test]
    fn test_deserialize_lifts_zero() {
        let state: PaginationState =
            serde_json::from_str(r#"{"page_index":0,"page_size":0}"#).unwrap();
        assert_eq!(state, PaginationState::new(1));

        let state: PaginationState =
            serde_json::from_str(r#"{"page_index":3,"page_size":20}"#).unwrap();
        assert_eq!(state.page_index(), 3);
        assert_eq!(state.page_size(), 20);
    }
}
