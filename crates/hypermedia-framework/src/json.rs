//! # JSON Object Builder
//!
//! Mappers do not build `serde_json::Value`s by hand; they address the document by
//! field name and nested path and let the builder create intermediate objects on
//! demand:
//!
//! ```rust
//! use hypermedia_framework::JsonObjectBuilder;
//!
//! let mut builder = JsonObjectBuilder::new();
//! builder.nested_field(&["_links", "self", "href"]).value("https://example.com/p/people/1");
//! builder.field("name").value("Ada");
//!
//! let json = builder.build();
//! assert_eq!(json["_links"]["self"]["href"], "https://example.com/p/people/1");
//! assert_eq!(json["name"], "Ada");
//! ```
//!
//! Writing the same path twice replaces the earlier value. Key order follows
//! insertion order.

use serde_json::{Map, Value};

/// Mutable JSON object under construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonObjectBuilder {
    object: Map<String, Value>,
}

impl JsonObjectBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Addresses a top level field.
    pub fn field(&mut self, name: &str) -> FieldBuilder<'_> {
        FieldBuilder {
            slot: Some(self.object.entry(name.to_string()).or_insert(Value::Null)),
        }
    }

    /// Addresses a field below nested objects, creating them as needed.
    ///
    /// An intermediate value that is not an object is replaced by one.
    pub fn nested_field<S: AsRef<str>>(&mut self, path: &[S]) -> FieldBuilder<'_> {
        let Some((last, parents)) = path.split_last() else {
            return FieldBuilder::detached();
        };
        let mut current = &mut self.object;
        for segment in parents {
            let slot = current
                .entry(segment.as_ref().to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !slot.is_object() {
                *slot = Value::Object(Map::new());
            }
            let Value::Object(map) = slot else {
                return FieldBuilder::detached();
            };
            current = map;
        }
        FieldBuilder {
            slot: Some(
                current
                    .entry(last.as_ref().to_string())
                    .or_insert(Value::Null),
            ),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.object.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.object.is_empty()
    }

    /// Finishes the object.
    pub fn build(self) -> Value {
        Value::Object(self.object)
    }
}

/// A position in a [`JsonObjectBuilder`] awaiting a value.
///
/// A builder for an empty nested path is detached: whatever is written to it is
/// discarded.
#[derive(Debug)]
pub struct FieldBuilder<'a> {
    slot: Option<&'a mut Value>,
}

impl<'a> FieldBuilder<'a> {
    fn detached() -> Self {
        FieldBuilder { slot: None }
    }

    /// Sets the value of the field.
    pub fn value(self, value: impl Into<Value>) {
        if let Some(slot) = self.slot {
            *slot = value.into();
        }
    }

    /// Turns the field into an array (keeping existing elements) for appending.
    pub fn array_value(self) -> ArrayBuilder<'a> {
        let items = self.slot.and_then(|slot| {
            if !slot.is_array() {
                *slot = Value::Array(Vec::new());
            }
            slot.as_array_mut()
        });
        ArrayBuilder { items }
    }
}

/// Appends elements to an array field.
#[derive(Debug)]
pub struct ArrayBuilder<'a> {
    items: Option<&'a mut Vec<Value>>,
}

impl ArrayBuilder<'_> {
    /// Appends a finished object.
    pub fn add(self, builder: JsonObjectBuilder) -> Self {
        self.add_value(builder.build())
    }

    pub fn add_value(mut self, value: impl Into<Value>) -> Self {
        if let Some(items) = self.items.as_deref_mut() {
            items.push(value.into());
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_fields_share_parents() {
        let mut builder = JsonObjectBuilder::new();
        builder.nested_field(&["_links", "self", "href"]).value("a");
        builder.nested_field(&["_links", "next", "href"]).value("b");
        builder.field("total").value(3);

        assert_eq!(
            builder.build(),
            json!({"_links": {"self": {"href": "a"}, "next": {"href": "b"}}, "total": 3})
        );
    }

    #[test]
    fn test_non_object_parent_is_replaced() {
        let mut builder = JsonObjectBuilder::new();
        builder.field("author").value("plain");
        builder.nested_field(&["author", "name"]).value("Ada");
        assert_eq!(builder.build(), json!({"author": {"name": "Ada"}}));
    }

    #[test]
    fn test_array_value_appends() {
        let mut builder = JsonObjectBuilder::new();
        let mut item = JsonObjectBuilder::new();
        item.field("name").value("first");
        builder.field("items").array_value().add(item);
        builder
            .nested_field(&["items"])
            .array_value()
            .add_value(json!({"name": "second"}));

        assert_eq!(
            builder.build(),
            json!({"items": [{"name": "first"}, {"name": "second"}]})
        );
    }

    #[test]
    fn test_empty_path_is_ignored() {
        let mut builder = JsonObjectBuilder::new();
        builder.nested_field::<&str>(&[]).value("lost");
        assert!(builder.is_empty());
    }
}
