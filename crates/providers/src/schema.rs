//! Declarative response-shape descriptors.
//!
//! A schema-constrained call declares the JSON shape it expects back so
//! the backend can be asked to conform to it. Every such call builds its
//! declaration from this one descriptor type instead of hand-writing the
//! provider's schema JSON per call site.

use serde::ser::{Serialize, Serializer};
use serde_json::{json, Map, Value};

#[derive(Debug, Clone)]
pub enum ResponseSchema {
    String,
    Boolean,
    Array(Box<ResponseSchema>),
    Object {
        /// Declaration order is kept in the serialized form.
        properties: Vec<(String, ResponseSchema)>,
        required: Vec<String>,
    },
}

impl ResponseSchema {
    pub fn array(items: ResponseSchema) -> Self {
        ResponseSchema::Array(Box::new(items))
    }

    pub fn object(properties: Vec<(&str, ResponseSchema)>, required: &[&str]) -> Self {
        ResponseSchema::Object {
            properties: properties
                .into_iter()
                .map(|(name, schema)| (name.to_string(), schema))
                .collect(),
            required: required.iter().map(|name| name.to_string()).collect(),
        }
    }

    /// The provider's `responseSchema` JSON form, with upper-case type tags.
    pub fn to_value(&self) -> Value {
        match self {
            ResponseSchema::String => json!({"type": "STRING"}),
            ResponseSchema::Boolean => json!({"type": "BOOLEAN"}),
            ResponseSchema::Array(items) => json!({
                "type": "ARRAY",
                "items": items.to_value(),
            }),
            ResponseSchema::Object {
                properties,
                required,
            } => {
                let mut props = Map::new();
                for (name, schema) in properties {
                    props.insert(name.clone(), schema.to_value());
                }
                json!({
                    "type": "OBJECT",
                    "properties": Value::Object(props),
                    "required": required,
                })
            }
        }
    }
}

impl Serialize for ResponseSchema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}
