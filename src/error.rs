//! Error types for the cache
//!
//! The public cache API never returns these; they describe failures reading
//! or exporting a stored value and are turned into "absent" by the facade.

use thiserror::Error;

// == Cache Error Enum ==
/// Failure reading or exporting a cached value.
#[derive(Error, Debug)]
pub enum CacheError {
    /// The value could not be serialized to JSON
    #[error("Failed to encode value of type {type_name}: {source}")]
    Encode {
        type_name: String,
        #[source]
        source: serde_json::Error,
    },

    /// The value was stored as a different type than the one requested
    #[error("Cached value is a {stored}, not a {requested}")]
    TypeMismatch { stored: String, requested: String },
}

// == Result Type Alias ==
/// Convenience Result type for cached value operations.
pub type Result<T> = std::result::Result<T, CacheError>;
