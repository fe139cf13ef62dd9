//! ConfigError for view configuration

/// Error returned when a [`ViewConfig`](crate::config::ViewConfig) cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// No page sizes were configured.
    #[error("At least one page size must be allowed")]
    NoPageSizes,

    /// A page size of zero was configured.
    #[error("Page size must be greater than zero")]
    ZeroPageSize,

    /// The default page size is not one of the allowed sizes.
    #[error("Default page size {size} is not in the allowed set {allowed:?}")]
    DefaultNotAllowed { size: usize, allowed: Vec<usize> },
}
