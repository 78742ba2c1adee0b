//! Schema Codec
//!
//! Bidirectional mapping between [`FormSchema`](crate::models::FormSchema)
//! and the JSON-Schema-shaped exchange document.
//!
//! ## Exchange Format
//!
//! ```json
//! {
//!   "type": "object",
//!   "title": "Signup",
//!   "properties": {
//!     "email": { "type": "string", "title": "Email" },
//!     "age": { "type": "number", "title": "Age", "minimum": 18 }
//!   },
//!   "required": ["email"]
//! }
//! ```
//!
//! ## Kind Mapping
//!
//! | Field kind                     | Exported `type` | Re-imported as |
//! |--------------------------------|-----------------|----------------|
//! | number, range                  | `number`        | number         |
//! | checkbox                       | `boolean`       | checkbox       |
//! | select, radio                  | `string`+`enum` | select         |
//! | everything else                | `string`        | text           |
//!
//! Imports additionally recognize `format: "date"` and `format: "email"`.
//! With [`FormBuilderConfig::preserve_field_kinds`](crate::config::FormBuilderConfig)
//! the `x-field-kind` member makes the round-trip kind-exact.

mod error;
mod export;
mod import;

pub use error::CodecError;
pub use export::{export_json_schema, to_pretty_string};
pub use import::{import_json_schema, infer_kind};
