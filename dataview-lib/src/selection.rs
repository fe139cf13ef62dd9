//! Selection state for bulk actions.
//!
//! Selection uses string IDs so it stays stable while the view is re-filtered,
//! re-sorted, or paged. Only a change of the record source removes ids.

use std::collections::HashSet;

use serde::Deserialize;
use serde::Serialize;

/// ID-based selection set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection {
    selected: HashSet<String>,
}

impl Selection {
    /// Create a new empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all selected IDs (sorted for deterministic ordering).
    pub fn selected(&self) -> Vec<String> {
        let mut ids: Vec<_> = self.selected.iter().cloned().collect();
        ids.sort();
        ids
    }

    /// Check if an ID is selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Get the number of selected items.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Clear all selection.
    /// Returns the IDs that were deselected.
    pub fn clear(&mut self) -> Vec<String> {
        self.selected.drain().collect()
    }

    /// Add an ID. Returns `true` if it was not already selected.
    pub fn select(&mut self, id: &str) -> bool {
        self.selected.insert(id.to_string())
    }

    /// Remove an ID. Returns `true` if it was selected.
    pub fn deselect(&mut self, id: &str) -> bool {
        self.selected.remove(id)
    }

    /// Toggle selection of an ID.
    /// Returns whether the ID is selected afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.selected.remove(id) {
            false
        } else {
            self.selected.insert(id.to_string());
            true
        }
    }

    /// Select or deselect exactly the given page IDs.
    ///
    /// IDs outside `page_ids` are left untouched, so selections made on other
    /// pages survive. Returns the IDs whose state changed.
    pub fn toggle_all_on_page<'a>(
        &mut self,
        page_ids: impl IntoIterator<Item = &'a str>,
        checked: bool,
    ) -> Vec<String> {
        let mut changed = Vec::new();
        for id in page_ids {
            let did_change = if checked {
                self.selected.insert(id.to_string())
            } else {
                self.selected.remove(id)
            };
            if did_change {
                changed.push(id.to_string());
            }
        }
        changed
    }

    /// Returns `true` if `page_ids` is non-empty and every one is selected.
    pub fn is_all_selected<'a>(&self, page_ids: impl IntoIterator<Item = &'a str>) -> bool {
        let mut any = false;
        for id in page_ids {
            if !self.selected.contains(id) {
                return false;
            }
            any = true;
        }
        any
    }

    /// Drop every ID not in `valid_ids`.
    /// Returns the IDs that were removed (sorted).
    pub fn prune(&mut self, valid_ids: &HashSet<&str>) -> Vec<String> {
        let mut removed: Vec<String> = self
            .selected
            .iter()
            .filter(|id| !valid_ids.contains(id.as_str()))
            .cloned()
            .collect();
        for id in &removed {
            self.selected.remove(id);
        }
        removed.sort();
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut selection = Selection::new();
        assert!(selection.toggle("u1"));
        assert!(selection.is_selected("u1"));
        assert!(!selection.toggle("u1"));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_toggle_all_on_page_leaves_other_pages() {
        let mut selection = Selection::new();
        selection.select("u9");

        let added = selection.toggle_all_on_page(["u1", "u2"], true);
        assert_eq!(added, vec!["u1", "u2"]);
        assert_eq!(selection.len(), 3);

        let removed = selection.toggle_all_on_page(["u1", "u2"], false);
        assert_eq!(removed, vec!["u1", "u2"]);
        assert_eq!(selection.selected(), vec!["u9"]);
    }

    #[test]
    fn test_empty_page_is_never_all_selected() {
        let mut selection = Selection::new();
        selection.select("u1");
        assert!(!selection.is_all_selected(Vec::<&str>::new()));
        assert!(selection.is_all_selected(["u1"]));
        assert!(!selection.is_all_selected(["u1", "u2"]));
    }

    #[test]
    fn test_prune() {
        let mut selection = Selection::new();
        selection.select("u1");
        selection.select("u3");
        let valid: HashSet<&str> = ["u1", "u2"].into_iter().collect();
        assert_eq!(selection.prune(&valid), vec!["u3"]);
        assert_eq!(selection.selected(), vec!["u1"]);
    }
}
