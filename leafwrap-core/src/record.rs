//! Wrapper records substituted for leaf values

use crate::error::TransformError;
use crate::kind::ValueKind;
use serde_json::{Map, Value};

/// Default name of the field holding the original value
pub const DEFAULT_CONTENT_KEY: &str = "content";
/// Default name of the field holding the type label
pub const DEFAULT_TYPE_KEY: &str = "type";

/// Field names used when building wrapper records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapperKeys {
    /// Key for the original value
    pub content: String,
    /// Key for the type label
    pub type_key: String,
}

impl Default for WrapperKeys {
    fn default() -> Self {
        Self {
            content: DEFAULT_CONTENT_KEY.to_string(),
            type_key: DEFAULT_TYPE_KEY.to_string(),
        }
    }
}

impl WrapperKeys {
    /// Both keys must be non-empty and distinct
    pub fn validate(&self) -> Result<(), TransformError> {
        if self.content.is_empty() || self.type_key.is_empty() {
            return Err(TransformError::InvalidWrapperKeys(
                "wrapper keys must not be empty".to_string(),
            ));
        }
        if self.content == self.type_key {
            return Err(TransformError::InvalidWrapperKeys(format!(
                "content and type keys are both '{}'",
                self.content
            )));
        }
        Ok(())
    }
}

/// A leaf value paired with its kind
#[derive(Debug, Clone, PartialEq)]
pub struct WrapperRecord {
    /// Original leaf value, never itself wrapped
    pub content: Value,
    /// Kind of `content`
    pub kind: ValueKind,
}

impl WrapperRecord {
    /// Wrap a copy of `value`
    pub fn new(value: &Value) -> Self {
        Self {
            content: value.clone(),
            kind: ValueKind::of(value),
        }
    }

    /// Render as a two-field object, content first
    pub fn into_value(self, keys: &WrapperKeys) -> Value {
        let mut map = Map::with_capacity(2);
        map.insert(keys.content.clone(), self.content);
        map.insert(
            keys.type_key.clone(),
            Value::String(self.kind.label().to_string()),
        );
        Value::Object(map)
    }
}
