//! Data Models
//!
//! This module contains the data structures of the form builder:
//!
//! - `FieldKind` - The twelve recognized field kinds and their families
//! - `FieldElement` - A typed form field with kind-specific properties
//! - `ElementUpdate` - Partial update applied to an element in place
//! - `FormSchema` - The form definition with its order-preserving helpers
//! - `ValidationIssue` - Non-fatal findings of a validation pass

mod element;
mod field_kind;
mod form_schema;
mod validation;

pub use element::{
    ChoiceDefault, ChoiceOption, ChoiceProperties, ChoicePropertiesUpdate, DateProperties,
    DatePropertiesUpdate, ElementError, ElementUpdate, FieldElement, FieldProperties,
    NumberProperties, NumberPropertiesUpdate, PropertiesUpdate, TextProperties,
    TextPropertiesUpdate,
};
pub use field_kind::{FieldKind, KindFamily};
pub use form_schema::FormSchema;
pub use validation::{ValidationIssue, ValidationRule};
