//! Element Factory
//!
//! Produces fully initialized, type-correct field elements. Every element the
//! form builder adds starts here, and the JSON Schema importer builds on the
//! same defaults before applying imported constraints.
//!
//! ## Defaults per family
//!
//! | Kinds                                | Defaults                                  |
//! |--------------------------------------|-------------------------------------------|
//! | text, email, password, textarea      | placeholder `"Enter <label lowercased>"`  |
//! | number, range                        | min 0, max 100, step 1                    |
//! | date, datetime, time                 | none                                      |
//! | select, radio                        | two preset options, single selection      |
//! | checkbox                             | two preset options, multiple selection    |

mod ids;

pub use ids::{generate_id, provisional_field_name};

use crate::models::{
    ChoiceOption, ChoiceProperties, DateProperties, FieldElement, FieldKind, FieldProperties,
    NumberProperties, TextProperties,
};

/// Label used for type strings the factory does not recognize
pub const FALLBACK_LABEL: &str = "Form Field";

/// Default display label for a field kind
pub fn default_label(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Text => "Text Field",
        FieldKind::Email => "Email Field",
        FieldKind::Password => "Password Field",
        FieldKind::Textarea => "Text Area",
        FieldKind::Number => "Number Field",
        FieldKind::Range => "Range Slider",
        FieldKind::Date => "Date Picker",
        FieldKind::Datetime => "Date Time Picker",
        FieldKind::Time => "Time Picker",
        FieldKind::Select => "Select Dropdown",
        FieldKind::Radio => "Radio Button Group",
        FieldKind::Checkbox => "Checkbox Group",
    }
}

/// Default label for a raw type tag, falling back to [`FALLBACK_LABEL`]
pub fn default_label_for_type(type_tag: &str) -> &'static str {
    type_tag
        .parse::<FieldKind>()
        .map(default_label)
        .unwrap_or(FALLBACK_LABEL)
}

/// Create a default element of `kind`
///
/// The element gets a fresh id, the kind's default label, a provisional
/// time-based name, `required = false` and `order = 0`.
///
/// # Examples
///
/// ```rust
/// use formcraft_core::factory::create_default_element;
/// use formcraft_core::models::FieldKind;
///
/// let element = create_default_element(FieldKind::Range);
/// assert_eq!(element.label, "Range Slider");
/// assert_eq!(element.number().and_then(|n| n.max), Some(100.0));
/// ```
pub fn create_default_element(kind: FieldKind) -> FieldElement {
    let label = default_label(kind);
    let mut element = FieldElement::new(
        generate_id(),
        label.to_string(),
        provisional_field_name(),
        default_properties(kind),
    );

    if element.text().is_some() {
        element.placeholder = Some(format!("Enter {}", label.to_lowercase()));
    }

    element
}

fn default_properties(kind: FieldKind) -> FieldProperties {
    match kind {
        FieldKind::Text => FieldProperties::Text(TextProperties::default()),
        FieldKind::Email => FieldProperties::Email(TextProperties::default()),
        FieldKind::Password => FieldProperties::Password(TextProperties::default()),
        FieldKind::Textarea => FieldProperties::Textarea(TextProperties::default()),
        FieldKind::Number => FieldProperties::Number(default_number_properties()),
        FieldKind::Range => FieldProperties::Range(default_number_properties()),
        FieldKind::Date => FieldProperties::Date(DateProperties::default()),
        FieldKind::Datetime => FieldProperties::Datetime(DateProperties::default()),
        FieldKind::Time => FieldProperties::Time(DateProperties::default()),
        FieldKind::Select => FieldProperties::Select(default_choice_properties(false)),
        FieldKind::Radio => FieldProperties::Radio(default_choice_properties(false)),
        FieldKind::Checkbox => FieldProperties::Checkbox(default_choice_properties(true)),
    }
}

fn default_number_properties() -> NumberProperties {
    NumberProperties {
        min: Some(0.0),
        max: Some(100.0),
        step: Some(1.0),
        default_value: None,
    }
}

fn default_choice_properties(multiple: bool) -> ChoiceProperties {
    ChoiceProperties {
        options: vec![
            ChoiceOption::new("option1", "Option 1"),
            ChoiceOption::new("option2", "Option 2"),
        ],
        multiple,
        default_value: None,
    }
}
