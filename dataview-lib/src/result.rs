//! The derived view handed to the presentation layer.

/// Output of [`ViewEngine::compute_view`](crate::ViewEngine::compute_view).
///
/// Never stored; recompute it whenever records or state change.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewResult<'a, R> {
    /// Every record passing the filters, in sorted order.
    pub filtered: Vec<&'a R>,
    /// The slice of `filtered` on the current page.
    pub page: Vec<&'a R>,
    pub total_filtered: usize,
    /// Always at least 1, even for an empty result.
    pub total_pages: usize,
    /// Effective 1-based page after clamping.
    pub page_index: usize,
    pub page_size: usize,
    pub has_previous: bool,
    pub has_next: bool,
    /// 1-based positions of the first and last row shown, `None` when the page is empty.
    pub range: Option<(usize, usize)>,
    /// Size of the whole selection set, across pages.
    pub selected_count: usize,
    /// `true` iff the page is non-empty and every row on it is selected.
    pub is_all_on_page_selected: bool,
}

impl<R> ViewResult<'_, R> {
    /// "Showing X-Y of Z" text for a table footer.
    pub fn summary(&self) -> String {
        match self.range {
            Some((first, last)) => format!("Showing {}-{} of {}", first, last, self.total_filtered),
            None => "No results".to_string(),
        }
    }
}
