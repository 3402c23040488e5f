//! Typeahead core: candidate data model, configuration, errors, and the
//! bounded recency cache used to memoize query results.

pub mod cache;
pub mod config;
pub mod error;
pub mod types;

pub use cache::BoundedRecencyCache;
pub use config::TypeaheadConfig;
pub use error::{ConfigError, Error, Result, ValidationError};
