//! Error types

mod codec;
mod config;
mod field;
mod schema;

pub use codec::*;
pub use config::*;
pub use field::*;
pub use schema::*;

/// Top-level error for the fallible edges of the crate.
///
/// The view pipeline itself never fails; errors only come from building a
/// schema or config, reading dynamic records, and decoding persisted state.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Field(#[from] FieldError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Convenience alias used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
