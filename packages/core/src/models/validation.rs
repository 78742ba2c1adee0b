//! Validation Issues
//!
//! Findings recorded by a form validation pass. Issues are non-fatal: they are
//! surfaced through builder state for the editor to display, never returned as
//! errors.

use serde::{Deserialize, Serialize};

/// Rule a validation issue was raised for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationRule {
    /// A mandatory attribute (name or label) is blank
    Required,
    /// A field name is used by more than one element
    Unique,
}

impl std::fmt::Display for ValidationRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Required => write!(f, "required"),
            Self::Unique => write!(f, "unique"),
        }
    }
}

/// A single validation finding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Identifier of the element the issue concerns
    pub field: String,

    pub rule: ValidationRule,

    /// Human-readable message for the editor
    pub message: String,

    /// Offending value, when there is one worth showing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

impl ValidationIssue {
    /// A blank mandatory attribute, e.g. `required(id, "name")`
    pub fn required(field: impl Into<String>, attribute: &str) -> Self {
        Self {
            field: field.into(),
            rule: ValidationRule::Required,
            message: format!("Field {} is required", attribute),
            value: None,
        }
    }

    /// A repeated field name
    pub fn unique(field: impl Into<String>, name: &str) -> Self {
        Self {
            field: field.into(),
            rule: ValidationRule::Unique,
            message: format!("Field name \"{}\" must be unique", name),
            value: Some(serde_json::Value::String(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_required_issue_message() {
        let issue = ValidationIssue::required("form-1-abc", "label");
        assert_eq!(issue.rule, ValidationRule::Required);
        assert_eq!(issue.message, "Field label is required");
        assert!(issue.value.is_none());
    }

    #[test]
    fn test_unique_issue_carries_name() {
        let issue = ValidationIssue::unique("form-1-abc", "email");
        assert_eq!(issue.rule, ValidationRule::Unique);
        assert_eq!(issue.message, "Field name \"email\" must be unique");
        assert_eq!(issue.value, Some(json!("email")));
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_value(ValidationIssue::required("x", "name")).unwrap();
        assert_eq!(json["rule"], "required");
        assert_eq!(json["field"], "x");
        assert!(json.get("value").is_none());
    }
}
