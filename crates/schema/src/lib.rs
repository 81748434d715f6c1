#![forbid(unsafe_code)]

mod error;
mod history;
mod store;
pub mod support;

pub use error::SchemaError;
pub use store::{AppliedMigration, MigrationStatus, SchemaStore, StatusReport};
