//! The filter → sort → paginate pipeline.
//!
//! Each stage is a free function over borrowed records, so stages can be used
//! on their own or composed by [`ViewEngine`](crate::ViewEngine).
//!
//! # Shared Types
//!
//! - [`FilterState`] - Query text and discrete field filters
//! - [`SortState`] - Single active sort key with direction
//! - [`PaginationState`] - Page position and size
//! - [`Page`] - A page of results with pagination info

mod filter;
mod order;
mod page;

pub use filter::FieldFilter;
pub use filter::FilterState;
pub use filter::apply_filters;
pub use order::Direction;
pub use order::SortKey;
pub use order::SortState;
pub use order::apply_sort;
pub use page::Page;
pub use page::PaginationState;
pub use page::paginate;
pub use page::total_pages;
