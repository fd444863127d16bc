//! Cached Value Module
//!
//! The type-erased payload stored by providers.

use std::any::{type_name, Any, TypeId};
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::error::{CacheError, Result};

// == Erased Payload ==
/// Object-safe view of a stored value: typed access plus serialization.
trait ErasedPayload: Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn to_json(&self) -> serde_json::Result<serde_json::Value>;
}

impl<T: Serialize + Send + Sync + 'static> ErasedPayload for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

// == Cached Value ==
/// A stored value tagged with the type it was stored as.
///
/// The value is kept as-is, not serialized, so lookups return exactly what
/// was cached. Reads must name the same type: an `i32` never reads back as
/// an `i64`, `f64`, or `serde_json::Value`. The one normalisation is that a
/// `&'static str` is stored as a `String`.
#[derive(Clone)]
pub struct CachedValue {
    /// The stored value
    payload: Arc<dyn ErasedPayload>,
    /// Type tag checked on every read
    type_id: TypeId,
    /// Type name, for diagnostics
    type_name: &'static str,
}

impl CachedValue {
    // == Constructor ==
    /// Wraps `value`, recording its type.
    pub fn new<T: Serialize + Send + Sync + 'static>(value: T) -> Self {
        let any: &dyn Any = &value;
        if let Some(text) = any.downcast_ref::<&'static str>() {
            return Self::tagged(text.to_string());
        }
        Self::tagged(value)
    }

    fn tagged<T: Serialize + Send + Sync + 'static>(value: T) -> Self {
        Self {
            payload: Arc::new(value),
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
        }
    }

    // == Downcast ==
    /// Returns a copy of the value if it was stored as a `T`.
    pub fn downcast<T: Clone + 'static>(&self) -> Result<T> {
        let mismatch = || CacheError::TypeMismatch {
            stored: self.type_name.to_string(),
            requested: type_name::<T>().to_string(),
        };

        if self.type_id != TypeId::of::<T>() {
            return Err(mismatch());
        }
        self.payload
            .as_any()
            .downcast_ref::<T>()
            .cloned()
            .ok_or_else(mismatch)
    }

    /// Returns true if the value was stored as a `T`.
    pub fn is<T: 'static>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    // == To JSON ==
    /// Serializes the value for providers that store outside the process.
    ///
    /// JSON has no representation for non-finite floats; serde_json writes
    /// them as `null`, so such values do not survive this path.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        self.payload.to_json().map_err(|source| CacheError::Encode {
            type_name: self.type_name.to_string(),
            source,
        })
    }

    /// The type name the value was stored as.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Debug for CachedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CachedValue")
            .field("type_name", &self.type_name)
            .finish()
    }
}
