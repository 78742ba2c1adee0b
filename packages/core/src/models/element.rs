//! Field Element Data Structures
//!
//! This module defines [`FieldElement`], the unit a form is assembled from, and
//! the partial-update structure used to edit one in place.
//!
//! # Architecture
//!
//! - **Common attributes** live directly on `FieldElement` (label, name,
//!   required flag, order, ...)
//! - **Variant-specific attributes** live in [`FieldProperties`], a sum type
//!   tagged by the field kind. The kind is never stored separately, so an
//!   element's kind and its property shape cannot drift apart.
//!
//! # Examples
//!
//! ```rust
//! use formcraft_core::models::{FieldElement, FieldKind, FieldProperties, NumberProperties};
//!
//! let element = FieldElement::new(
//!     "form-1-abc".to_string(),
//!     "Age".to_string(),
//!     "age".to_string(),
//!     FieldProperties::Number(NumberProperties {
//!         min: Some(18.0),
//!         max: Some(65.0),
//!         ..Default::default()
//!     }),
//! );
//!
//! assert_eq!(element.kind(), FieldKind::Number);
//! assert_eq!(element.number().and_then(|n| n.min), Some(18.0));
//! ```

use crate::models::field_kind::{FieldKind, KindFamily};
use serde::{Deserialize, Deserializer, Serialize};

/// A single `{value, label}` pair offered by a choice field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub value: String,
    pub label: String,
}

impl ChoiceOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Default selection of a choice field
///
/// Single-selection fields default to one value, multi-selection fields may
/// default to several.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChoiceDefault {
    Single(String),
    Multiple(Vec<String>),
}

/// Properties of text-like fields (text, email, password, textarea)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,

    /// Regex the value must match
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

/// Properties of numeric fields (number, range)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<f64>,
}

/// Properties of date/time fields (date, datetime, time)
///
/// Bounds are kept as the strings the editor produced (`"2024-01-01"`,
/// `"09:30"`, ...); they are not parsed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

/// Properties of choice fields (select, radio, checkbox)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceProperties {
    #[serde(default)]
    pub options: Vec<ChoiceOption>,

    /// Whether more than one option may be selected
    #[serde(default)]
    pub multiple: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<ChoiceDefault>,
}

impl ChoiceProperties {
    /// Option values in declaration order
    pub fn option_values(&self) -> Vec<String> {
        self.options.iter().map(|opt| opt.value.clone()).collect()
    }
}

/// Variant-specific properties, tagged by field kind
///
/// Serialized inline with the owning element under the `"type"` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldProperties {
    Text(TextProperties),
    Email(TextProperties),
    Password(TextProperties),
    Textarea(TextProperties),
    Number(NumberProperties),
    Range(NumberProperties),
    Date(DateProperties),
    Datetime(DateProperties),
    Time(DateProperties),
    Select(ChoiceProperties),
    Radio(ChoiceProperties),
    Checkbox(ChoiceProperties),
}

impl FieldProperties {
    /// The field kind this property set belongs to
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Text(_) => FieldKind::Text,
            Self::Email(_) => FieldKind::Email,
            Self::Password(_) => FieldKind::Password,
            Self::Textarea(_) => FieldKind::Textarea,
            Self::Number(_) => FieldKind::Number,
            Self::Range(_) => FieldKind::Range,
            Self::Date(_) => FieldKind::Date,
            Self::Datetime(_) => FieldKind::Datetime,
            Self::Time(_) => FieldKind::Time,
            Self::Select(_) => FieldKind::Select,
            Self::Radio(_) => FieldKind::Radio,
            Self::Checkbox(_) => FieldKind::Checkbox,
        }
    }
}

/// Validation errors for structural element problems
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ElementError {
    #[error("Property update for {update:?} fields does not apply to a '{kind}' element")]
    FamilyMismatch { kind: FieldKind, update: KindFamily },
}

/// A typed form field
///
/// # Fields
///
/// - `id`: Unique identifier, generated by the element factory or the codec
/// - `label`: Human-readable label shown next to the input
/// - `name`: Machine-readable field name, the key in the exported schema
/// - `required`: Whether the form cannot be submitted without a value
/// - `order`: Zero-based position within the owning schema
///
/// The field kind is derived from [`FieldProperties`] and is read through
/// [`FieldElement::kind`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldElement {
    pub id: String,

    pub label: String,

    pub name: String,

    pub required: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Position within the schema; contiguous from zero after every mutation
    pub order: usize,

    #[serde(flatten)]
    properties: FieldProperties,
}

impl FieldElement {
    /// Create an optional, unordered element with the given properties
    pub fn new(id: String, label: String, name: String, properties: FieldProperties) -> Self {
        Self {
            id,
            label,
            name,
            required: false,
            placeholder: None,
            description: None,
            order: 0,
            properties,
        }
    }

    pub fn kind(&self) -> FieldKind {
        self.properties.kind()
    }

    pub fn properties(&self) -> &FieldProperties {
        &self.properties
    }

    /// Text-like properties, if this is a text, email, password or textarea field
    pub fn text(&self) -> Option<&TextProperties> {
        match &self.properties {
            FieldProperties::Text(p)
            | FieldProperties::Email(p)
            | FieldProperties::Password(p)
            | FieldProperties::Textarea(p) => Some(p),
            _ => None,
        }
    }

    pub fn text_mut(&mut self) -> Option<&mut TextProperties> {
        match &mut self.properties {
            FieldProperties::Text(p)
            | FieldProperties::Email(p)
            | FieldProperties::Password(p)
            | FieldProperties::Textarea(p) => Some(p),
            _ => None,
        }
    }

    /// Numeric properties, if this is a number or range field
    pub fn number(&self) -> Option<&NumberProperties> {
        match &self.properties {
            FieldProperties::Number(p) | FieldProperties::Range(p) => Some(p),
            _ => None,
        }
    }

    pub fn number_mut(&mut self) -> Option<&mut NumberProperties> {
        match &mut self.properties {
            FieldProperties::Number(p) | FieldProperties::Range(p) => Some(p),
            _ => None,
        }
    }

    /// Date/time properties, if this is a date, datetime or time field
    pub fn date(&self) -> Option<&DateProperties> {
        match &self.properties {
            FieldProperties::Date(p) | FieldProperties::Datetime(p) | FieldProperties::Time(p) => {
                Some(p)
            }
            _ => None,
        }
    }

    pub fn date_mut(&mut self) -> Option<&mut DateProperties> {
        match &mut self.properties {
            FieldProperties::Date(p) | FieldProperties::Datetime(p) | FieldProperties::Time(p) => {
                Some(p)
            }
            _ => None,
        }
    }

    /// Choice properties, if this is a select, radio or checkbox field
    pub fn choice(&self) -> Option<&ChoiceProperties> {
        match &self.properties {
            FieldProperties::Select(p) | FieldProperties::Radio(p) | FieldProperties::Checkbox(p) => {
                Some(p)
            }
            _ => None,
        }
    }

    pub fn choice_mut(&mut self) -> Option<&mut ChoiceProperties> {
        match &mut self.properties {
            FieldProperties::Select(p) | FieldProperties::Radio(p) | FieldProperties::Checkbox(p) => {
                Some(p)
            }
            _ => None,
        }
    }

    /// Copy the common attributes of `other` onto this element
    ///
    /// Used when an element is rebuilt as a different kind: identity, naming
    /// and position carry over, variant-specific properties do not.
    pub fn copy_common_from(&mut self, other: &FieldElement) {
        self.id = other.id.clone();
        self.label = other.label.clone();
        self.name = other.name.clone();
        self.required = other.required;
        self.placeholder = other.placeholder.clone();
        self.description = other.description.clone();
        self.order = other.order;
    }

    /// Merge a partial update into this element (shallow field overwrite)
    ///
    /// Fields absent from the update are retained. The update's `kind` is not
    /// applied here; kind changes rebuild the element through the factory.
    ///
    /// # Errors
    ///
    /// Returns [`ElementError::FamilyMismatch`] when the update carries
    /// variant-specific properties for a different family. Common fields are
    /// still applied in that case.
    pub fn merge(&mut self, update: &ElementUpdate) -> Result<(), ElementError> {
        if let Some(label) = &update.label {
            self.label = label.clone();
        }
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(required) = update.required {
            self.required = required;
        }
        merge_field(&mut self.placeholder, &update.placeholder);
        merge_field(&mut self.description, &update.description);

        let Some(properties) = &update.properties else {
            return Ok(());
        };

        let kind = self.kind();
        let applied = match properties {
            PropertiesUpdate::Text(u) => self.text_mut().map(|p| u.apply(p)),
            PropertiesUpdate::Number(u) => self.number_mut().map(|p| u.apply(p)),
            PropertiesUpdate::Date(u) => self.date_mut().map(|p| u.apply(p)),
            PropertiesUpdate::Choice(u) => self.choice_mut().map(|p| u.apply(p)),
        };

        applied.ok_or(ElementError::FamilyMismatch {
            kind,
            update: properties.family(),
        })
    }
}

/// Apply a double-Option update to a nullable field
fn merge_field<T: Clone>(target: &mut Option<T>, update: &Option<Option<T>>) {
    if let Some(value) = update {
        *target = value.clone();
    }
}

/// Custom deserializer for optional fields that accepts both plain values and nested Options
///
/// Maps three input formats to the double-Option pattern:
/// - Missing field → None (don't update)
/// - null → Some(None) (clear the field)
/// - "value" → Some(Some("value")) (set to value)
fn deserialize_optional_field<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Some(Option::<T>::deserialize(deserializer)?))
}

/// Partial element update
///
/// All fields are optional; only provided fields are written. Nullable
/// attributes use the double-`Option` pattern:
///
/// - `None`: Don't change this field
/// - `Some(None)`: Clear the field
/// - `Some(Some(value))`: Set the field to the specified value
///
/// Setting `kind` to a different kind replaces the element with a fresh
/// default of that kind, keeping only its common attributes.
///
/// # Examples
///
/// ```rust
/// use formcraft_core::models::{ElementUpdate, NumberPropertiesUpdate, PropertiesUpdate};
///
/// // Rename and make required
/// let update = ElementUpdate::new()
///     .with_name("age")
///     .with_required(true);
///
/// // Tighten a numeric range and clear its step
/// let update = ElementUpdate::new().with_properties(PropertiesUpdate::Number(
///     NumberPropertiesUpdate {
///         max: Some(Some(120.0)),
///         step: Some(None),
///         ..Default::default()
///     },
/// ));
/// assert!(!update.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementUpdate {
    /// Change the field kind (full replacement through the factory)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<FieldKind>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_field"
    )]
    pub placeholder: Option<Option<String>>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_field"
    )]
    pub description: Option<Option<String>>,

    /// Variant-specific changes; must match the element's family
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<PropertiesUpdate>,
}

impl ElementUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_kind(mut self, kind: FieldKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    pub fn with_placeholder(mut self, placeholder: Option<String>) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_properties(mut self, properties: PropertiesUpdate) -> Self {
        self.properties = Some(properties);
        self
    }

    /// Check if update contains any changes
    pub fn is_empty(&self) -> bool {
        self.kind.is_none()
            && self.label.is_none()
            && self.name.is_none()
            && self.required.is_none()
            && self.placeholder.is_none()
            && self.description.is_none()
            && self.properties.is_none()
    }
}

/// Variant-specific part of an [`ElementUpdate`], one case per kind family
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertiesUpdate {
    Text(TextPropertiesUpdate),
    Number(NumberPropertiesUpdate),
    Date(DatePropertiesUpdate),
    Choice(ChoicePropertiesUpdate),
}

impl PropertiesUpdate {
    pub fn family(&self) -> KindFamily {
        match self {
            Self::Text(_) => KindFamily::Text,
            Self::Number(_) => KindFamily::Number,
            Self::Date(_) => KindFamily::Date,
            Self::Choice(_) => KindFamily::Choice,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextPropertiesUpdate {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_field"
    )]
    pub min_length: Option<Option<u64>>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_field"
    )]
    pub max_length: Option<Option<u64>>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_field"
    )]
    pub pattern: Option<Option<String>>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_field"
    )]
    pub default_value: Option<Option<String>>,
}

impl TextPropertiesUpdate {
    fn apply(&self, target: &mut TextProperties) {
        merge_field(&mut target.min_length, &self.min_length);
        merge_field(&mut target.max_length, &self.max_length);
        merge_field(&mut target.pattern, &self.pattern);
        merge_field(&mut target.default_value, &self.default_value);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberPropertiesUpdate {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_field"
    )]
    pub min: Option<Option<f64>>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_field"
    )]
    pub max: Option<Option<f64>>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_field"
    )]
    pub step: Option<Option<f64>>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_field"
    )]
    pub default_value: Option<Option<f64>>,
}

impl NumberPropertiesUpdate {
    fn apply(&self, target: &mut NumberProperties) {
        merge_field(&mut target.min, &self.min);
        merge_field(&mut target.max, &self.max);
        merge_field(&mut target.step, &self.step);
        merge_field(&mut target.default_value, &self.default_value);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatePropertiesUpdate {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_field"
    )]
    pub min: Option<Option<String>>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_field"
    )]
    pub max: Option<Option<String>>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_field"
    )]
    pub default_value: Option<Option<String>>,
}

impl DatePropertiesUpdate {
    fn apply(&self, target: &mut DateProperties) {
        merge_field(&mut target.min, &self.min);
        merge_field(&mut target.max, &self.max);
        merge_field(&mut target.default_value, &self.default_value);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoicePropertiesUpdate {
    /// Replaces the whole option list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<ChoiceOption>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiple: Option<bool>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_field"
    )]
    pub default_value: Option<Option<ChoiceDefault>>,
}

impl ChoicePropertiesUpdate {
    fn apply(&self, target: &mut ChoiceProperties) {
        if let Some(options) = &self.options {
            target.options = options.clone();
        }
        if let Some(multiple) = self.multiple {
            target.multiple = multiple;
        }
        merge_field(&mut target.default_value, &self.default_value);
    }
}

#[cfg(test)]
#[path = "element_test.rs"]
mod element_test;
