//! Codec Error Types
//!
//! Failures the JSON Schema importer can report. Import is all-or-nothing: any
//! of these is detected before a schema is built.

use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while importing a JSON Schema document
#[derive(Error, Debug)]
pub enum CodecError {
    /// Input is not syntactically valid JSON
    #[error("Malformed JSON Schema document: {0}")]
    Parse(#[from] serde_json::Error),

    /// Top-level value is valid JSON but not an object
    #[error("JSON Schema document must be an object, got {found}")]
    NotAnObject { found: &'static str },

    /// `properties` is present but not an object
    #[error("JSON Schema `properties` must be an object, got {found}")]
    InvalidProperties { found: &'static str },

    /// A property's schema is not an object
    #[error("Schema for property '{name}' must be an object, got {found}")]
    InvalidPropertySchema { name: String, found: &'static str },

    /// A choice property's `enum` is present but not an array
    #[error("`enum` of property '{name}' must be an array, got {found}")]
    InvalidEnum { name: String, found: &'static str },
}

impl CodecError {
    pub fn not_an_object(value: &Value) -> Self {
        Self::NotAnObject {
            found: json_type_name(value),
        }
    }

    pub fn invalid_properties(value: &Value) -> Self {
        Self::InvalidProperties {
            found: json_type_name(value),
        }
    }

    pub fn invalid_property_schema(name: impl Into<String>, value: &Value) -> Self {
        Self::InvalidPropertySchema {
            name: name.into(),
            found: json_type_name(value),
        }
    }

    pub fn invalid_enum(name: impl Into<String>, value: &Value) -> Self {
        Self::InvalidEnum {
            name: name.into(),
            found: json_type_name(value),
        }
    }
}

/// JSON type name of a value, for error messages
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
