//! Configuration for the form builder and its JSON Schema codec

use serde::{Deserialize, Serialize};

/// Title given to imported documents that carry none
pub const DEFAULT_IMPORTED_FORM_TITLE: &str = "Imported Form";

/// Extension member recording the exact field kind of an exported property
pub const FIELD_KIND_EXTENSION: &str = "x-field-kind";

/// Form builder configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormBuilderConfig {
    /// Title used when an imported document has no usable `title`
    pub imported_form_title: String,

    /// Write and honor the `x-field-kind` extension member
    ///
    /// Plain JSON Schema cannot tell password from text or radio from select,
    /// so those kinds degrade on a round-trip. With this flag set, export
    /// records the kind on every property and import restores it.
    pub preserve_field_kinds: bool,
}

impl Default for FormBuilderConfig {
    fn default() -> Self {
        Self {
            imported_form_title: DEFAULT_IMPORTED_FORM_TITLE.to_string(),
            preserve_field_kinds: false,
        }
    }
}

impl FormBuilderConfig {
    /// Default configuration with the kind-preserving extension enabled
    pub fn preserving_kinds() -> Self {
        Self {
            preserve_field_kinds: true,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let config = FormBuilderConfig::default();
        assert_eq!(config.imported_form_title, "Imported Form");
        assert!(!config.preserve_field_kinds);
    }

    #[test]
    fn test_partial_deserialization_fills_defaults() {
        let config: FormBuilderConfig =
            serde_json::from_value(json!({ "preserve_field_kinds": true })).unwrap();
        assert!(config.preserve_field_kinds);
        assert_eq!(config.imported_form_title, DEFAULT_IMPORTED_FORM_TITLE);
    }
}
