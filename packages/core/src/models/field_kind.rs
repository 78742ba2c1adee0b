//! Field Kinds
//!
//! The twelve recognized form-element types. Each kind belongs to exactly one
//! [`KindFamily`], which decides the shape of the variant-specific properties
//! an element of that kind carries.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Recognized form field kind
///
/// Serializes to the lowercase tag used by the editor (`"text"`,
/// `"datetime"`, `"checkbox"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Email,
    Password,
    Textarea,
    Number,
    Range,
    Date,
    Datetime,
    Time,
    Select,
    Radio,
    Checkbox,
}

/// Property family shared by several field kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindFamily {
    /// text, email, password, textarea
    Text,
    /// number, range
    Number,
    /// date, datetime, time
    Date,
    /// select, radio, checkbox
    Choice,
}

impl FieldKind {
    /// All kinds, in toolbar order
    pub const ALL: [FieldKind; 12] = [
        FieldKind::Text,
        FieldKind::Email,
        FieldKind::Password,
        FieldKind::Textarea,
        FieldKind::Number,
        FieldKind::Range,
        FieldKind::Date,
        FieldKind::Datetime,
        FieldKind::Time,
        FieldKind::Select,
        FieldKind::Radio,
        FieldKind::Checkbox,
    ];

    /// Lowercase tag for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Textarea => "textarea",
            Self::Number => "number",
            Self::Range => "range",
            Self::Date => "date",
            Self::Datetime => "datetime",
            Self::Time => "time",
            Self::Select => "select",
            Self::Radio => "radio",
            Self::Checkbox => "checkbox",
        }
    }

    pub fn family(&self) -> KindFamily {
        match self {
            Self::Text | Self::Email | Self::Password | Self::Textarea => KindFamily::Text,
            Self::Number | Self::Range => KindFamily::Number,
            Self::Date | Self::Datetime | Self::Time => KindFamily::Date,
            Self::Select | Self::Radio | Self::Checkbox => KindFamily::Choice,
        }
    }

    /// JSON Schema `type` a property of this kind exports as
    pub fn json_schema_type(&self) -> &'static str {
        match self {
            Self::Number | Self::Range => "number",
            Self::Checkbox => "boolean",
            // date/datetime/time are plain strings in JSON Schema
            _ => "string",
        }
    }
}

impl FromStr for FieldKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("Unknown field kind: {}", s))
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
