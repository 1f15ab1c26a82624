pub mod error;
pub mod parse;
pub mod schema;
pub mod validate;
pub mod wasm;

pub use error::{Check, SchemaError, ValidationIssue};
pub use schema::{DEFAULT_SCHEMA_PATH, Schema};
pub use validate::{ValidationResult, WorkflowValidator};
