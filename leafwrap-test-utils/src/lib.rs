//! leafwrap Test Utilities
//!
//! Shared builders, tree generators and assertions for the leafwrap crates.

use serde_json::{Map, Value};

/// Builder for creating test objects with insertion order preserved
pub struct ObjectBuilder {
    fields: Map<String, Value>,
}

impl ObjectBuilder {
    /// Create a new object builder
    pub fn new() -> Self {
        Self { fields: Map::new() }
    }

    /// Add a field with a string value
    pub fn string(mut self, key: &str, value: &str) -> Self {
        self.fields
            .insert(key.to_string(), Value::String(value.to_string()));
        self
    }

    /// Add a field with an integer value
    pub fn int(mut self, key: &str, value: i64) -> Self {
        self.fields
            .insert(key.to_string(), Value::Number(value.into()));
        self
    }

    /// Add a field with a floating-point value
    pub fn float(mut self, key: &str, value: f64) -> Self {
        self.fields.insert(key.to_string(), Value::from(value));
        self
    }

    /// Add a field with a boolean value
    pub fn bool(mut self, key: &str, value: bool) -> Self {
        self.fields.insert(key.to_string(), Value::Bool(value));
        self
    }

    /// Add a field with a null value
    pub fn null(mut self, key: &str) -> Self {
        self.fields.insert(key.to_string(), Value::Null);
        self
    }

    /// Add a field with an object value
    pub fn object(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    /// Add a field with an arbitrary value
    pub fn value(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    /// Add a field with an array value
    pub fn array(mut self, key: &str, value: Vec<Value>) -> Self {
        self.fields.insert(key.to_string(), Value::Array(value));
        self
    }

    /// Build the object
    pub fn build(self) -> Value {
        Value::Object(self.fields)
    }
}

impl Default for ObjectBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate test trees with various shapes
pub struct TreeGenerator;

impl TreeGenerator {
    /// One field of every leaf kind, in a fixed order
    pub fn all_leaf_kinds() -> Value {
        ObjectBuilder::new()
            .null("null")
            .bool("boolean", true)
            .int("integer", 42)
            .float("float", 3.25)
            .string("string", "hello")
            .array("array", vec![Value::from(1), Value::from("two")])
            .build()
    }

    /// A chain of `levels` single-key objects ending in `leaf`
    ///
    /// `nested_chain(2, v)` is `{"level_0": {"level_1": v}}`.
    pub fn nested_chain(levels: usize, leaf: Value) -> Value {
        (0..levels).rev().fold(leaf, |inner, i| {
            ObjectBuilder::new()
                .object(&format!("level_{}", i), inner)
                .build()
        })
    }

    /// Objects containing a sibling leaf at each level, `levels` deep
    ///
    /// Every object has a `"leaf"` integer equal to its level and, except the
    /// last, a `"child"` object.
    pub fn layered(levels: usize) -> Value {
        (0..levels).rev().fold(Value::Null, |inner, level| {
            let builder = ObjectBuilder::new().int("leaf", level as i64);
            if inner.is_null() {
                builder.build()
            } else {
                builder.object("child", inner).build()
            }
        })
    }

    /// Unicode keys and values
    pub fn unicode_object() -> Value {
        ObjectBuilder::new()
            .string("ascii", "Hello, World!")
            .string("unicode", "Hello, 世界! 🌍")
            .object(
                "中文",
                ObjectBuilder::new().string("mixed", "ASCII + 中文 + 🎯").build(),
            )
            .build()
    }

    /// Boundary values for numbers, strings and containers
    pub fn boundary_values() -> Value {
        ObjectBuilder::new()
            .int("int_max", i64::MAX)
            .int("int_min", i64::MIN)
            .value("u64_max", Value::from(u64::MAX))
            .string("empty_string", "")
            .array("empty_array", vec![])
            .object("empty_object", Value::Object(Map::new()))
            .build()
    }
}

/// Count leaf values reachable through objects only
pub fn count_object_leaves(value: &Value) -> usize {
    match value {
        Value::Object(map) => map.values().map(count_object_leaves).sum(),
        _ => 1,
    }
}

/// Utility functions for test assertions
pub mod assertions {
    use serde_json::Value;

    /// Assert that two JSON values are semantically equal (ignoring formatting)
    pub fn assert_json_equal(actual: &Value, expected: &Value, context: &str) {
        if actual != expected {
            panic!(
                "JSON assertion failed in {}:\nExpected: {}\nActual: {}",
                context,
                serde_json::to_string_pretty(expected).unwrap(),
                serde_json::to_string_pretty(actual).unwrap()
            );
        }
    }

    /// Assert that `value` is a wrapper record around `content` with `label`
    pub fn assert_wrapped(value: &Value, content: &Value, label: &str) {
        let expected = serde_json::json!({"content": content, "type": label});
        assert_json_equal(value, &expected, "wrapper record");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_builder_keeps_order() {
        let object = ObjectBuilder::new()
            .string("name", "test")
            .int("age", 25)
            .bool("active", true)
            .build();

        let keys: Vec<_> = object.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["name", "age", "active"]);
        assert_eq!(object["age"].as_i64().unwrap(), 25);
    }

    #[test]
    fn test_nested_chain() {
        let chain = TreeGenerator::nested_chain(3, Value::from(7));
        assert_eq!(chain["level_0"]["level_1"]["level_2"], Value::from(7));
        assert_eq!(TreeGenerator::nested_chain(0, Value::from(7)), Value::from(7));
    }

    #[test]
    fn test_layered() {
        let tree = TreeGenerator::layered(3);
        assert_eq!(tree["leaf"], Value::from(0));
        assert_eq!(tree["child"]["child"]["leaf"], Value::from(2));
        assert!(tree["child"]["child"].get("child").is_none());
    }

    #[test]
    fn test_count_object_leaves() {
        assert_eq!(count_object_leaves(&TreeGenerator::layered(4)), 4);
        assert_eq!(count_object_leaves(&TreeGenerator::all_leaf_kinds()), 6);
    }
}
