//! Integration tests for JSON Schema export and import
//!
//! Tests cover:
//! - Round-trip fidelity for text, number, date, email and select fields
//! - Kind-exact round-trip with the `x-field-kind` extension
//! - Import scenarios and rejected documents

use anyhow::{Context, Result};
use formcraft_core::codec::{export_json_schema, import_json_schema, CodecError};
use formcraft_core::models::{
    ChoiceOption, ElementUpdate, FieldElement, FieldKind, FormSchema, NumberPropertiesUpdate,
    PropertiesUpdate, TextPropertiesUpdate,
};
use formcraft_core::{FormBuilder, FormBuilderConfig};
use serde_json::json;

/// Build a form exercising every round-trippable kind with constraints set
fn populated_builder(config: FormBuilderConfig) -> Result<FormBuilder> {
    let mut builder = FormBuilder::with_config(config);
    builder.create_new_form("Registration", Some("Sign up for the event".to_string()));

    builder.add_element(FieldKind::Text, None);
    let id = selected(&builder)?;
    builder.update_element(
        &id,
        ElementUpdate::new()
            .with_name("username")
            .with_label("Username")
            .with_required(true)
            .with_properties(PropertiesUpdate::Text(TextPropertiesUpdate {
                min_length: Some(Some(3)),
                max_length: Some(Some(20)),
                pattern: Some(Some("^[a-z0-9_]+$".to_string())),
                ..Default::default()
            })),
    );

    builder.add_element(FieldKind::Number, None);
    let id = selected(&builder)?;
    builder.update_element(
        &id,
        ElementUpdate::new()
            .with_name("age")
            .with_label("Age")
            .with_properties(PropertiesUpdate::Number(NumberPropertiesUpdate {
                min: Some(Some(18.0)),
                max: Some(Some(99.5)),
                ..Default::default()
            })),
    );

    builder.add_element(FieldKind::Date, None);
    let id = selected(&builder)?;
    builder.update_element(
        &id,
        ElementUpdate::new().with_name("birthday").with_label("Birthday"),
    );

    builder.add_element(FieldKind::Email, None);
    let id = selected(&builder)?;
    builder.update_element(
        &id,
        ElementUpdate::new()
            .with_name("email")
            .with_label("Email")
            .with_required(true)
            .with_properties(PropertiesUpdate::Text(TextPropertiesUpdate {
                max_length: Some(Some(120)),
                ..Default::default()
            })),
    );

    builder.add_element(FieldKind::Select, None);
    let id = selected(&builder)?;
    builder.update_element(&id, ElementUpdate::new().with_name("track").with_label("Track"));
    let schema = builder.current_schema().context("schema")?;
    assert_eq!(schema.elements.len(), 5);

    Ok(builder)
}

fn selected(builder: &FormBuilder) -> Result<String> {
    builder
        .selected_element()
        .map(|el| el.id.clone())
        .context("no element selected")
}

fn by_name<'a>(schema: &'a FormSchema, name: &str) -> Result<&'a FieldElement> {
    schema
        .elements
        .iter()
        .find(|el| el.name == name)
        .with_context(|| format!("element {} missing", name))
}

// =========================================================================
// Round-trip
// =========================================================================

#[test]
fn test_round_trip_preserves_names_labels_and_constraints() -> Result<()> {
    let original = populated_builder(FormBuilderConfig::default())?;
    let exported = original.export_to_json_schema();

    let mut restored = FormBuilder::new();
    assert!(restored.import_from_json_schema(&exported));

    let before = original.current_schema().context("original")?;
    let after = restored.current_schema().context("restored")?;

    assert_eq!(after.title, before.title);
    assert_eq!(after.description, before.description);
    assert_eq!(after.elements.len(), before.elements.len());

    for element in &before.elements {
        let copy = by_name(after, &element.name)?;
        assert_eq!(copy.label, element.label);
        assert_eq!(copy.required, element.required);
        assert_eq!(copy.order, element.order);
    }

    let username = by_name(after, "username")?.text().context("text props")?;
    assert_eq!(username.min_length, Some(3));
    assert_eq!(username.max_length, Some(20));
    assert_eq!(username.pattern.as_deref(), Some("^[a-z0-9_]+$"));

    let age = by_name(after, "age")?;
    assert_eq!(age.kind(), FieldKind::Number);
    let age = age.number().context("number props")?;
    assert_eq!(age.min, Some(18.0));
    assert_eq!(age.max, Some(99.5));

    let email = by_name(after, "email")?.text().context("email props")?;
    assert_eq!(email.max_length, Some(120));

    let track = by_name(after, "track")?;
    assert_eq!(track.kind(), FieldKind::Select);
    assert_eq!(
        track.choice().context("choice props")?.option_values(),
        vec!["option1".to_string(), "option2".to_string()]
    );
    Ok(())
}

#[test]
fn test_round_trip_with_kind_extension_is_kind_exact() -> Result<()> {
    let config = FormBuilderConfig::preserving_kinds();
    let mut original = FormBuilder::with_config(config.clone());
    original.create_new_form("Every Kind", None);
    for (index, kind) in FieldKind::ALL.iter().enumerate() {
        original.add_element(*kind, None);
        let id = selected(&original)?;
        original.update_element(&id, ElementUpdate::new().with_name(format!("field_{}", index)));
    }

    let document = original.json_schema().context("document")?;
    let imported = import_json_schema(&document.to_string(), &config)?;

    let kinds: Vec<FieldKind> = imported.sorted_elements().iter().map(|el| el.kind()).collect();
    assert_eq!(kinds, FieldKind::ALL.to_vec());

    let checkbox = imported
        .elements
        .iter()
        .find(|el| el.kind() == FieldKind::Checkbox)
        .context("checkbox")?;
    let choice = checkbox.choice().context("choice props")?;
    assert!(choice.multiple);
    assert_eq!(choice.option_values(), vec!["option1", "option2"]);
    Ok(())
}

#[test]
fn test_date_and_email_reimport_as_text_without_extension() -> Result<()> {
    let original = populated_builder(FormBuilderConfig::default())?;
    let document = original.json_schema().context("document")?;

    assert!(document["properties"]["birthday"].get("format").is_none());

    let imported = import_json_schema(&document.to_string(), &FormBuilderConfig::default())?;
    assert_eq!(by_name(&imported, "birthday")?.kind(), FieldKind::Text);
    assert_eq!(by_name(&imported, "email")?.kind(), FieldKind::Text);
    Ok(())
}

#[test]
fn test_round_trip_keeps_zero_and_empty_text_constraints() -> Result<()> {
    let mut original = FormBuilder::new();
    original.create_new_form("Edge Values", None);
    for (kind, name) in [(FieldKind::Text, "note"), (FieldKind::Email, "contact")] {
        original.add_element(kind, None);
        let id = selected(&original)?;
        original.update_element(
            &id,
            ElementUpdate::new()
                .with_name(name)
                .with_properties(PropertiesUpdate::Text(TextPropertiesUpdate {
                    min_length: Some(Some(0)),
                    pattern: Some(Some(String::new())),
                    default_value: Some(Some(String::new())),
                    ..Default::default()
                })),
        );
    }

    let mut restored = FormBuilder::new();
    assert!(restored.import_from_json_schema(&original.export_to_json_schema()));

    let before = original.current_schema().context("original")?;
    let after = restored.current_schema().context("restored")?;
    for name in ["note", "contact"] {
        assert_eq!(
            by_name(after, name)?.text(),
            by_name(before, name)?.text(),
            "constraints of {} changed",
            name
        );
    }
    Ok(())
}

// =========================================================================
// Import scenarios
// =========================================================================

#[test]
fn test_import_number_scenario() -> Result<()> {
    let schema = import_json_schema(
        r#"{"type":"object","properties":{"age":{"type":"number","minimum":18,"maximum":65}}}"#,
        &FormBuilderConfig::default(),
    )?;

    assert_eq!(schema.elements.len(), 1);
    let age = &schema.elements[0];
    assert_eq!(age.kind(), FieldKind::Number);
    assert_eq!(age.name, "age");
    assert_eq!(age.label, "age");
    let number = age.number().context("number props")?;
    assert_eq!(number.min, Some(18.0));
    assert_eq!(number.max, Some(65.0));
    Ok(())
}

#[test]
fn test_import_recognizes_formats_and_enums() -> Result<()> {
    let document = json!({
        "title": "Formats",
        "properties": {
            "start": { "type": "string", "format": "date" },
            "contact": { "type": "string", "format": "email" },
            "size": { "type": "string", "enum": ["s", "m", 3] },
            "agree": { "type": "boolean" }
        }
    });
    let schema = import_json_schema(&document.to_string(), &FormBuilderConfig::default())?;

    assert_eq!(by_name(&schema, "start")?.kind(), FieldKind::Date);
    assert_eq!(by_name(&schema, "contact")?.kind(), FieldKind::Email);
    assert_eq!(by_name(&schema, "agree")?.kind(), FieldKind::Checkbox);

    let size = by_name(&schema, "size")?;
    assert_eq!(size.kind(), FieldKind::Select);
    assert_eq!(
        size.choice().context("choice props")?.options,
        vec![
            ChoiceOption::new("s", "s"),
            ChoiceOption::new("m", "m"),
            ChoiceOption::new("3", "3")
        ]
    );
    Ok(())
}

#[test]
fn test_invalid_documents_are_rejected() {
    let config = FormBuilderConfig::default();

    assert!(matches!(
        import_json_schema("not json", &config),
        Err(CodecError::Parse(_))
    ));
    assert!(matches!(
        import_json_schema("[1, 2]", &config),
        Err(CodecError::NotAnObject { .. })
    ));
    assert!(matches!(
        import_json_schema(r#"{"properties": []}"#, &config),
        Err(CodecError::InvalidProperties { .. })
    ));
    assert!(matches!(
        import_json_schema(r#"{"properties": {"a": 1}}"#, &config),
        Err(CodecError::InvalidPropertySchema { .. })
    ));
    assert!(matches!(
        import_json_schema(r#"{"properties": {"size": {"enum": "small"}}}"#, &config),
        Err(CodecError::InvalidEnum { .. })
    ));
}

#[test]
fn test_failed_import_leaves_builder_untouched() -> Result<()> {
    let mut builder = populated_builder(FormBuilderConfig::default())?;
    let before = builder.current_schema().cloned();

    assert!(!builder.import_from_json_schema("not json"));
    assert!(!builder.import_from_json_schema(r#"{"properties": "nope"}"#));
    assert!(!builder.import_from_json_schema(r#"{"properties":{"size":{"enum":"small"}}}"#));

    assert_eq!(builder.current_schema().cloned(), before);
    Ok(())
}

#[test]
fn test_export_document_layout() -> Result<()> {
    let builder = populated_builder(FormBuilderConfig::default())?;
    let document = export_json_schema(
        builder.current_schema().context("schema")?,
        builder.config(),
    );

    let keys: Vec<&String> = document.as_object().context("object")?.keys().collect();
    assert_eq!(keys, vec!["type", "title", "description", "properties", "required"]);
    assert_eq!(document["required"], json!(["username", "email"]));
    assert_eq!(document["properties"]["age"]["minimum"], json!(18));
    assert_eq!(document["properties"]["track"]["enum"], json!(["option1", "option2"]));
    Ok(())
}
