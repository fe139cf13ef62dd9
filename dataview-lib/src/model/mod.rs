//! Record model: values, records, and the field schema.

mod record;
mod schema;
mod value;

pub use record::*;
pub use schema::*;
pub use value::*;
