//! Access to Bear's SQLite database: locating it, running statements, mapping rows.

mod error;
mod executor;
pub mod locator;
mod queries;
pub mod schema;
mod transaction;

#[cfg(test)]
pub(crate) mod fixture;

pub use error::{StoreError, StoreResult};
pub use executor::{FromRow, QueryExecutor};
pub use locator::{exists, locate};
