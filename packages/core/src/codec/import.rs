//! JSON Schema import
//!
//! Rebuilds a form schema from a JSON-Schema-shaped document. Field kinds are
//! inferred from each property's `type`, `enum` and `format` members, so
//! kinds JSON Schema cannot express (password, textarea, range, radio,
//! checkbox options) come back as their closest relative unless the
//! `x-field-kind` extension is enabled.

use crate::codec::CodecError;
use crate::config::{FormBuilderConfig, FIELD_KIND_EXTENSION};
use crate::factory::{create_default_element, generate_id};
use crate::models::{ChoiceDefault, ChoiceOption, FieldElement, FieldKind, FormSchema};
use serde_json::{Map, Value};

/// Parse `text` and build a fresh form schema from it
///
/// The new schema gets a new id and new timestamps. Elements are ordered by
/// the document's property order starting at 0.
///
/// # Errors
///
/// - `Parse`: `text` is not valid JSON
/// - `NotAnObject`: the document is not a JSON object
/// - `InvalidProperties`: `properties` is present but not an object
/// - `InvalidPropertySchema`: a property's schema is not an object
/// - `InvalidEnum`: a choice property's `enum` is neither an array nor null
///
/// # Examples
///
/// ```rust
/// use formcraft_core::codec::import_json_schema;
/// use formcraft_core::config::FormBuilderConfig;
/// use formcraft_core::models::FieldKind;
///
/// let doc = r#"{"type":"object","properties":{"age":{"type":"number","minimum":18}}}"#;
/// let schema = import_json_schema(doc, &FormBuilderConfig::default())?;
///
/// assert_eq!(schema.title, "Imported Form");
/// assert_eq!(schema.elements[0].kind(), FieldKind::Number);
/// # Ok::<(), formcraft_core::codec::CodecError>(())
/// ```
pub fn import_json_schema(text: &str, config: &FormBuilderConfig) -> Result<FormSchema, CodecError> {
    let document: Value = serde_json::from_str(text)?;
    let document = document
        .as_object()
        .ok_or_else(|| CodecError::not_an_object(&document))?;

    let required: Vec<&str> = document
        .get("required")
        .and_then(Value::as_array)
        .map(|names| names.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    let empty = Map::new();
    let properties = match document.get("properties") {
        None | Some(Value::Null) => &empty,
        Some(Value::Object(properties)) => properties,
        Some(other) => return Err(CodecError::invalid_properties(other)),
    };

    let mut elements = Vec::with_capacity(properties.len());
    for (order, (name, property)) in properties.iter().enumerate() {
        let property = property
            .as_object()
            .ok_or_else(|| CodecError::invalid_property_schema(name, property))?;

        let mut element = element_from_property(name, property, order, config)?;
        if required.contains(&name.as_str()) {
            element.required = true;
        }
        elements.push(element);
    }

    let title = non_empty_str(document.get("title"))
        .unwrap_or(config.imported_form_title.as_str())
        .to_string();
    let description = document
        .get("description")
        .and_then(Value::as_str)
        .map(str::to_string);

    Ok(FormSchema::with_elements(
        generate_id(),
        title,
        description,
        elements,
    ))
}

/// Infer the field kind a property schema describes
pub fn infer_kind(property: &Map<String, Value>, config: &FormBuilderConfig) -> FieldKind {
    if config.preserve_field_kinds {
        let recorded = property
            .get(FIELD_KIND_EXTENSION)
            .and_then(Value::as_str)
            .and_then(|tag| tag.parse::<FieldKind>().ok());
        if let Some(kind) = recorded {
            return kind;
        }
    }

    match property.get("type").and_then(Value::as_str) {
        Some("number") => return FieldKind::Number,
        Some("boolean") => return FieldKind::Checkbox,
        _ => {}
    }

    if property.get("enum").is_some_and(|v| !v.is_null()) {
        return FieldKind::Select;
    }

    match property.get("format").and_then(Value::as_str) {
        Some("date") => FieldKind::Date,
        Some("email") => FieldKind::Email,
        _ => FieldKind::Text,
    }
}

fn element_from_property(
    name: &str,
    property: &Map<String, Value>,
    order: usize,
    config: &FormBuilderConfig,
) -> Result<FieldElement, CodecError> {
    let mut element = create_default_element(infer_kind(property, config));
    element.name = name.to_string();
    element.label = non_empty_str(property.get("title"))
        .unwrap_or(name)
        .to_string();
    element.description = property
        .get("description")
        .and_then(Value::as_str)
        .map(str::to_string);
    element.order = order;

    // Present members are kept as-is, including `0` and `""`, so that every
    // value the exporter writes comes back unchanged.
    if let Some(text) = element.text_mut() {
        if let Some(min_length) = property.get("minLength").and_then(Value::as_u64) {
            text.min_length = Some(min_length);
        }
        if let Some(max_length) = property.get("maxLength").and_then(Value::as_u64) {
            text.max_length = Some(max_length);
        }
        if let Some(pattern) = property.get("pattern").and_then(Value::as_str) {
            text.pattern = Some(pattern.to_string());
        }
        if let Some(default) = property.get("default").and_then(scalar_string) {
            text.default_value = Some(default);
        }
    } else if let Some(number) = element.number_mut() {
        if let Some(min) = property.get("minimum").and_then(Value::as_f64) {
            number.min = Some(min);
        }
        if let Some(max) = property.get("maximum").and_then(Value::as_f64) {
            number.max = Some(max);
        }
        if let Some(default) = property.get("default").and_then(Value::as_f64) {
            number.default_value = Some(default);
        }
    } else if let Some(choice) = element.choice_mut() {
        match property.get("enum") {
            Some(Value::Array(values)) => {
                choice.options = values
                    .iter()
                    .map(|value| {
                        let text = stringify(value);
                        ChoiceOption::new(text.clone(), text)
                    })
                    .collect();
            }
            // Without an `enum` a checkbox keeps its preset options
            None | Some(Value::Null) => {}
            Some(other) => return Err(CodecError::invalid_enum(name, other)),
        }
        if let Some(default) = property.get("default").and_then(choice_default) {
            choice.default_value = Some(default);
        }
    }

    Ok(element)
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

/// String form of an enum entry (`"a"` stays `a`, `1` becomes `1`)
fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// String form of a scalar default; null, arrays and objects are skipped
fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(_) | Value::Number(_) | Value::Bool(_) => Some(stringify(value)),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn choice_default(value: &Value) -> Option<ChoiceDefault> {
    match value {
        Value::Array(values) => Some(ChoiceDefault::Multiple(
            values.iter().map(stringify).collect(),
        )),
        other => scalar_string(other).map(ChoiceDefault::Single),
    }
}
