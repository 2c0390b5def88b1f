pub mod cli;
pub mod config;
pub mod loader;
pub mod observability;
pub mod registry;
pub mod sources;
pub mod validation;

pub use loader::{load, LoadError};
pub use registry::{registry, run_query, QueryError, QueryOutput, QueryParams};
