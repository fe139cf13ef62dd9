//! View configuration

use serde::Deserialize;
use serde::Serialize;

use crate::error::ConfigError;

/// Configuration for page sizing.
///
/// Controls which page sizes a table offers and which one a fresh view starts
/// with.
///
/// # Example
///
/// ```
/// use dataview_lib::config::ViewConfig;
///
/// let config = ViewConfig::default()
///     .with_page_sizes([10, 25, 100])
///     .with_default_page_size(25);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Page sizes the table offers, in ascending order.
    ///
    /// Default: `[5, 10, 20, 50]`
    pub page_sizes: Vec<usize>,

    /// Page size of a freshly initialized view.
    ///
    /// Default: 10
    pub default_page_size: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_sizes: vec![5, 10, 20, 50],
            default_page_size: 10,
        }
    }
}

impl ViewConfig {
    /// Creates a new view config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the allowed page sizes (sorted and deduplicated).
    pub fn with_page_sizes(mut self, sizes: impl IntoIterator<Item = usize>) -> Self {
        let mut sizes: Vec<usize> = sizes.into_iter().collect();
        sizes.sort_unstable();
        sizes.dedup();
        self.page_sizes = sizes;
        self
    }

    /// Sets the default page size.
    pub fn with_default_page_size(mut self, size: usize) -> Self {
        self.default_page_size = size;
        self
    }

    /// Check that the config describes a usable page-size set.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_sizes.is_empty() {
            return Err(ConfigError::NoPageSizes);
        }
        if self.page_sizes.contains(&0) {
            return Err(ConfigError::ZeroPageSize);
        }
        if !self.page_sizes.contains(&self.default_page_size) {
            return Err(ConfigError::DefaultNotAllowed {
                size: self.default_page_size,
                allowed: self.page_sizes.clone(),
            });
        }
        Ok(())
    }

    /// Snap `size` to the nearest allowed page size; ties go to the smaller.
    pub fn snap_page_size(&self, size: usize) -> usize {
        self.page_sizes
            .iter()
            .copied()
            .min_by_key(|&allowed| (allowed.abs_diff(size), allowed))
            .unwrap_or(self.default_page_size)
            .max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(ViewConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_validate_errors() {
        let config = ViewConfig::new().with_page_sizes(Vec::new());
        assert_eq!(config.validate(), Err(ConfigError::NoPageSizes));

        let config = ViewConfig::new().with_page_sizes([0, 10]);
        assert_eq!(config.validate(), Err(ConfigError::ZeroPageSize));

        let config = ViewConfig::new().with_default_page_size(7);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DefaultNotAllowed { size: 7, .. })
        ));
    }

    #[test]
    fn test_snap_page_size() {
        let config = ViewConfig::default();
        assert_eq!(config.snap_page_size(10), 10);
        assert_eq!(config.snap_page_size(0), 5);
        assert_eq!(config.snap_page_size(14), 10);
        assert_eq!(config.snap_page_size(15), 10);
        assert_eq!(config.snap_page_size(16), 20);
        assert_eq!(config.snap_page_size(1000), 50);
    }
}
