//! JSON Schema export
//!
//! Builds the JSON-Schema-shaped view of a form schema. Property keys are the
//! element names, inserted in the order of the underlying element collection
//! (not display order); callers wanting display order sort first.

use crate::config::{FormBuilderConfig, FIELD_KIND_EXTENSION};
use crate::models::{ChoiceDefault, FieldElement, FieldProperties, FormSchema};
use serde_json::{Map, Value};

/// Largest integer an f64 represents exactly
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Build the JSON Schema document for `schema`
///
/// # Examples
///
/// ```rust
/// use formcraft_core::codec::export_json_schema;
/// use formcraft_core::config::FormBuilderConfig;
/// use formcraft_core::models::FormSchema;
///
/// let schema = FormSchema::new("form-1".into(), "Contact".into(), None);
/// let doc = export_json_schema(&schema, &FormBuilderConfig::default());
///
/// assert_eq!(doc["type"], "object");
/// assert_eq!(doc["title"], "Contact");
/// assert!(doc.get("description").is_none());
/// ```
pub fn export_json_schema(schema: &FormSchema, config: &FormBuilderConfig) -> Value {
    let mut properties = Map::new();
    let mut required = Vec::new();

    for element in &schema.elements {
        properties.insert(
            element.name.clone(),
            Value::Object(export_property(element, config)),
        );
        if element.required {
            required.push(Value::String(element.name.clone()));
        }
    }

    let mut document = Map::new();
    document.insert("type".to_string(), Value::from("object"));
    document.insert("title".to_string(), Value::from(schema.title.as_str()));
    if let Some(description) = &schema.description {
        document.insert("description".to_string(), Value::from(description.as_str()));
    }
    document.insert("properties".to_string(), Value::Object(properties));
    document.insert("required".to_string(), Value::Array(required));

    Value::Object(document)
}

/// Pretty-print an optional document with two-space indentation
///
/// An absent schema renders as `null`.
pub fn to_pretty_string(document: Option<&Value>) -> String {
    match document {
        Some(value) => format!("{:#}", value),
        None => Value::Null.to_string(),
    }
}

fn export_property(element: &FieldElement, config: &FormBuilderConfig) -> Map<String, Value> {
    let kind = element.kind();
    let mut property = Map::new();
    property.insert("type".to_string(), Value::from(kind.json_schema_type()));
    property.insert("title".to_string(), Value::from(element.label.as_str()));

    if let Some(description) = &element.description {
        property.insert("description".to_string(), Value::from(description.as_str()));
    }

    match element.properties() {
        FieldProperties::Text(p)
        | FieldProperties::Email(p)
        | FieldProperties::Password(p)
        | FieldProperties::Textarea(p) => {
            insert_some(&mut property, "minLength", p.min_length.map(Value::from));
            insert_some(&mut property, "maxLength", p.max_length.map(Value::from));
            insert_some(&mut property, "pattern", p.pattern.as_deref().map(Value::from));
            insert_some(&mut property, "default", p.default_value.as_deref().map(Value::from));
        }
        FieldProperties::Number(p) | FieldProperties::Range(p) => {
            insert_some(&mut property, "minimum", p.min.map(number_value));
            insert_some(&mut property, "maximum", p.max.map(number_value));
            insert_some(&mut property, "default", p.default_value.map(number_value));
        }
        FieldProperties::Select(p) | FieldProperties::Radio(p) => {
            property.insert("enum".to_string(), enum_values(&p.option_values()));
            insert_some(&mut property, "default", p.default_value.as_ref().map(choice_default_value));
        }
        // Checkbox exports as a plain boolean; its options only survive when
        // the kind extension is on, so the importer can rebuild them.
        FieldProperties::Checkbox(p) if config.preserve_field_kinds => {
            property.insert("enum".to_string(), enum_values(&p.option_values()));
            insert_some(&mut property, "default", p.default_value.as_ref().map(choice_default_value));
        }
        FieldProperties::Checkbox(_)
        | FieldProperties::Date(_)
        | FieldProperties::Datetime(_)
        | FieldProperties::Time(_) => {}
    }

    if config.preserve_field_kinds {
        property.insert(FIELD_KIND_EXTENSION.to_string(), Value::from(kind.as_str()));
    }

    property
}

fn insert_some(map: &mut Map<String, Value>, key: &str, value: Option<Value>) {
    if let Some(value) = value {
        map.insert(key.to_string(), value);
    }
}

fn enum_values(values: &[String]) -> Value {
    Value::Array(values.iter().map(|v| Value::from(v.as_str())).collect())
}

fn choice_default_value(default: &ChoiceDefault) -> Value {
    match default {
        ChoiceDefault::Single(value) => Value::from(value.as_str()),
        ChoiceDefault::Multiple(values) => enum_values(values),
    }
}

/// Whole numbers export as JSON integers (`18`, not `18.0`)
fn number_value(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        Value::from(n as i64)
    } else {
        serde_json::Number::from_f64(n).map_or(Value::Null, Value::Number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::create_default_element;
    use crate::models::{ChoiceOption, ElementUpdate, FieldKind};
    use serde_json::json;

    fn schema_with(elements: Vec<FieldElement>) -> FormSchema {
        FormSchema::with_elements(
            "form-1".to_string(),
            "Signup".to_string(),
            Some("Create an account".to_string()),
            elements,
        )
    }

    fn named(kind: FieldKind, name: &str) -> FieldElement {
        let mut element = create_default_element(kind);
        element
            .merge(&ElementUpdate::new().with_name(name).with_label(name.to_uppercase()))
            .unwrap();
        element
    }

    #[test]
    fn test_document_shape() {
        let mut email = named(FieldKind::Email, "email");
        email.required = true;
        let doc = export_json_schema(&schema_with(vec![email]), &FormBuilderConfig::default());

        assert_eq!(doc["type"], "object");
        assert_eq!(doc["title"], "Signup");
        assert_eq!(doc["description"], "Create an account");
        assert_eq!(doc["required"], json!(["email"]));
        assert_eq!(
            doc["properties"]["email"],
            json!({ "type": "string", "title": "EMAIL" })
        );
    }

    #[test]
    fn test_text_constraints() {
        let mut text = named(FieldKind::Textarea, "bio");
        let props = text.text_mut().unwrap();
        props.min_length = Some(10);
        props.max_length = Some(500);
        props.pattern = Some("^\\S".to_string());
        props.default_value = Some("Hello".to_string());
        text.description = Some("About you".to_string());

        let doc = export_json_schema(&schema_with(vec![text]), &FormBuilderConfig::default());
        let bio = &doc["properties"]["bio"];

        assert_eq!(bio["minLength"], 10);
        assert_eq!(bio["maxLength"], 500);
        assert_eq!(bio["pattern"], "^\\S");
        assert_eq!(bio["default"], "Hello");
        assert_eq!(bio["description"], "About you");
    }

    #[test]
    fn test_number_constraints_export_as_integers() {
        let mut age = named(FieldKind::Number, "age");
        age.number_mut().unwrap().min = Some(18.0);
        age.number_mut().unwrap().default_value = Some(21.5);

        let doc = export_json_schema(&schema_with(vec![age]), &FormBuilderConfig::default());
        let property = &doc["properties"]["age"];

        assert_eq!(property["type"], "number");
        assert_eq!(property["minimum"], json!(18));
        assert_eq!(property["maximum"], json!(100));
        assert_eq!(property["default"], json!(21.5));
        assert!(property.get("step").is_none());
        assert!(format!("{}", property).contains("\"minimum\":18,"));
    }

    #[test]
    fn test_select_and_radio_export_enum() {
        let mut color = named(FieldKind::Radio, "color");
        let choice = color.choice_mut().unwrap();
        choice.options = vec![ChoiceOption::new("red", "Red"), ChoiceOption::new("blue", "Blue")];
        choice.default_value = Some(ChoiceDefault::Single("blue".to_string()));

        let doc = export_json_schema(&schema_with(vec![color]), &FormBuilderConfig::default());
        let property = &doc["properties"]["color"];

        assert_eq!(property["type"], "string");
        assert_eq!(property["enum"], json!(["red", "blue"]));
        assert_eq!(property["default"], "blue");
    }

    #[test]
    fn test_checkbox_and_dates_carry_no_constraints() {
        let doc = export_json_schema(
            &schema_with(vec![named(FieldKind::Checkbox, "agree"), named(FieldKind::Time, "at")]),
            &FormBuilderConfig::default(),
        );

        assert_eq!(
            doc["properties"]["agree"],
            json!({ "type": "boolean", "title": "AGREE" })
        );
        assert_eq!(
            doc["properties"]["at"],
            json!({ "type": "string", "title": "AT" })
        );
    }

    #[test]
    fn test_properties_follow_collection_order() {
        let mut first = named(FieldKind::Text, "zeta");
        first.order = 1;
        let mut second = named(FieldKind::Text, "alpha");
        second.order = 0;

        let doc = export_json_schema(&schema_with(vec![first, second]), &FormBuilderConfig::default());
        let keys: Vec<&String> = doc["properties"].as_object().unwrap().keys().collect();

        assert_eq!(keys, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_kind_extension_when_enabled() {
        let doc = export_json_schema(
            &schema_with(vec![named(FieldKind::Password, "secret"), named(FieldKind::Checkbox, "tags")]),
            &FormBuilderConfig::preserving_kinds(),
        );

        assert_eq!(doc["properties"]["secret"][FIELD_KIND_EXTENSION], "password");
        assert_eq!(doc["properties"]["tags"][FIELD_KIND_EXTENSION], "checkbox");
        assert_eq!(doc["properties"]["tags"]["enum"], json!(["option1", "option2"]));
    }

    #[test]
    fn test_pretty_string() {
        assert_eq!(to_pretty_string(None), "null");
        assert_eq!(to_pretty_string(Some(&json!({ "a": 1 }))), "{\n  \"a\": 1\n}");
    }
}
