//! Tabular data-view engine
//!
//! Drives an interactive records table: free-text search, per-column filters,
//! single-column sort, page windowing, and page-scoped row selection for bulk
//! actions. The engine is a pure function of a record snapshot and an
//! explicit, caller-owned [`ViewState`]; it performs no I/O and keeps no
//! hidden state.
//!
//! ```text
//! records ─► filter ─► sort ─► paginate ─► ViewResult
//!                                   ▲
//!                          ViewState (filters, sort, page, selection)
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod query;
pub mod selection;

mod codec;
mod engine;
mod result;
mod state;

pub use engine::*;
pub use result::*;
pub use state::*;
