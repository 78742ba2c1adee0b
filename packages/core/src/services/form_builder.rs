//! Form Builder Service
//!
//! [`FormBuilder`] owns the form currently being edited together with the
//! editor state around it: the selected element, the latest validation
//! issues, and the preview and dragging flags. It exposes the whole mutation,
//! query, validation and conversion surface the editor drives.
//!
//! ## Failure Semantics
//!
//! - **Silent no-op**: operations given an unknown element id, or invoked
//!   while no form exists, change nothing and report nothing
//! - **Validation issues**: recorded in builder state, never returned as errors
//! - **Import failure**: reported through the `false` return; the current form
//!   is left untouched
//!
//! ## Example Usage
//!
//! ```rust
//! use formcraft_core::models::{ElementUpdate, FieldKind};
//! use formcraft_core::services::FormBuilder;
//!
//! let mut builder = FormBuilder::new();
//! builder.create_new_form("Contact", None);
//!
//! builder.add_element(FieldKind::Text, None);
//! builder.add_element(FieldKind::Email, None);
//! builder.add_element(FieldKind::Password, Some(1));
//!
//! let kinds: Vec<FieldKind> = builder.sorted_elements().iter().map(|el| el.kind()).collect();
//! assert_eq!(kinds, vec![FieldKind::Text, FieldKind::Password, FieldKind::Email]);
//!
//! // Newly added elements are selected; give the password field a real name
//! let id = builder.selected_element().map(|el| el.id.clone()).unwrap_or_default();
//! builder.update_element(&id, ElementUpdate::new().with_name("password"));
//! ```

use crate::codec::{export_json_schema, import_json_schema, to_pretty_string};
use crate::config::FormBuilderConfig;
use crate::factory::{create_default_element, generate_id};
use crate::models::{ElementUpdate, FieldElement, FieldKind, FormSchema, ValidationIssue};
use serde_json::Value;
use std::collections::HashSet;

/// Editor-facing state holder for a single form schema
///
/// Construct one per editor; there is no shared global instance.
#[derive(Debug, Clone, Default)]
pub struct FormBuilder {
    config: FormBuilderConfig,
    current_schema: Option<FormSchema>,
    selected_element_id: Option<String>,
    validation_issues: Vec<ValidationIssue>,
    preview_mode: bool,
    is_dragging: bool,
}

impl FormBuilder {
    /// Create a builder with the default configuration and no form
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with an explicit configuration
    pub fn with_config(config: FormBuilderConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &FormBuilderConfig {
        &self.config
    }

    // ------------------------------------------------------------------------
    // State access
    // ------------------------------------------------------------------------

    pub fn current_schema(&self) -> Option<&FormSchema> {
        self.current_schema.as_ref()
    }

    /// The selected element, looked up in the current schema
    pub fn selected_element(&self) -> Option<&FieldElement> {
        let id = self.selected_element_id.as_deref()?;
        self.current_schema.as_ref()?.find_element(id)
    }

    pub fn validation_issues(&self) -> &[ValidationIssue] {
        &self.validation_issues
    }

    pub fn is_preview_mode(&self) -> bool {
        self.preview_mode
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// Record whether the editor is in the middle of a drag gesture
    pub fn set_dragging(&mut self, dragging: bool) {
        self.is_dragging = dragging;
    }

    // ------------------------------------------------------------------------
    // Derived queries
    // ------------------------------------------------------------------------

    /// Elements of the current schema ascending by order; empty without a schema
    pub fn sorted_elements(&self) -> Vec<&FieldElement> {
        self.current_schema
            .as_ref()
            .map(FormSchema::sorted_elements)
            .unwrap_or_default()
    }

    pub fn has_elements(&self) -> bool {
        self.current_schema
            .as_ref()
            .is_some_and(FormSchema::has_elements)
    }

    /// JSON Schema view of the current schema, `None` without a schema
    pub fn json_schema(&self) -> Option<Value> {
        self.current_schema
            .as_ref()
            .map(|schema| export_json_schema(schema, &self.config))
    }

    // ------------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------------

    /// Replace the current schema with a new, empty one
    pub fn create_new_form(&mut self, title: impl Into<String>, description: Option<String>) {
        let schema = FormSchema::new(generate_id(), title.into(), description);
        tracing::info!("Created form '{}' ({})", schema.title, schema.id);
        self.current_schema = Some(schema);
        self.selected_element_id = None;
    }

    /// Add a default element of `kind` and select it
    ///
    /// Without `position` the element is appended. With one, every element at
    /// or after `position` shifts up first; positions past the end append.
    pub fn add_element(&mut self, kind: FieldKind, position: Option<usize>) {
        let Some(schema) = self.current_schema.as_mut() else {
            tracing::debug!("add_element ignored: no current form");
            return;
        };

        let element = create_default_element(kind);
        let id = element.id.clone();
        let order = schema.insert_element(element, position);
        schema.touch();
        tracing::debug!("Added {} element {} at order {}", kind, id, order);

        self.selected_element_id = Some(id);
    }

    /// Merge `update` into the element with `id`
    ///
    /// A kind change rebuilds the element from the factory defaults of the new
    /// kind, keeping its common attributes, before the rest of the update is
    /// merged. Variant-specific updates for the wrong family are ignored.
    pub fn update_element(&mut self, id: &str, update: ElementUpdate) {
        let Some(schema) = self.current_schema.as_mut() else {
            tracing::debug!("update_element ignored: no current form");
            return;
        };
        let Some(element) = schema.find_element_mut(id) else {
            tracing::debug!("update_element ignored: no element {}", id);
            return;
        };

        if let Some(kind) = update.kind.filter(|kind| *kind != element.kind()) {
            let mut replacement = create_default_element(kind);
            replacement.copy_common_from(element);
            *element = replacement;
        }

        if let Err(e) = element.merge(&update) {
            tracing::debug!("Partially applied update to {}: {}", id, e);
        }
        schema.touch();
    }

    /// Remove the element with `id`, clearing the selection if it was selected
    pub fn remove_element(&mut self, id: &str) {
        let Some(schema) = self.current_schema.as_mut() else {
            tracing::debug!("remove_element ignored: no current form");
            return;
        };
        if schema.remove_element(id).is_none() {
            tracing::debug!("remove_element ignored: no element {}", id);
            return;
        }
        schema.touch();

        if self.selected_element_id.as_deref() == Some(id) {
            self.selected_element_id = None;
        }
    }

    /// Move the element with `id` to `new_order`
    ///
    /// Elements between the old and new position shift by one to make room.
    /// Out-of-range targets are clamped to the last position.
    pub fn reorder_element(&mut self, id: &str, new_order: usize) {
        let Some(schema) = self.current_schema.as_mut() else {
            tracing::debug!("reorder_element ignored: no current form");
            return;
        };
        match schema.move_element(id, new_order) {
            Some(assigned) => {
                if assigned != new_order {
                    tracing::debug!(
                        "Clamped reorder of {} from {} to {}",
                        id,
                        new_order,
                        assigned
                    );
                }
                schema.touch();
            }
            None => tracing::debug!("reorder_element ignored: no element {}", id),
        }
    }

    /// Select the element with `id`, or clear the selection with `None`
    ///
    /// Selecting an id that is not in the current schema clears the selection.
    pub fn select_element(&mut self, id: Option<&str>) {
        self.selected_element_id = id
            .filter(|id| {
                self.current_schema
                    .as_ref()
                    .is_some_and(|schema| schema.find_element(id).is_some())
            })
            .map(str::to_string);
    }

    /// Flip preview mode; entering it clears the selection
    pub fn toggle_preview_mode(&mut self) {
        self.preview_mode = !self.preview_mode;
        if self.preview_mode {
            self.selected_element_id = None;
        }
    }

    // ------------------------------------------------------------------------
    // Validation
    // ------------------------------------------------------------------------

    /// Recompute validation issues for the current schema
    ///
    /// Previous issues are discarded. Repeated names are flagged on every
    /// occurrence after the first; blank names and labels are flagged on every
    /// element. Returns `true` iff no issue was recorded, and `false` without
    /// a schema.
    pub fn validate_form(&mut self) -> bool {
        self.validation_issues.clear();

        let Some(schema) = self.current_schema.as_ref() else {
            return false;
        };

        let mut names = HashSet::new();
        for element in &schema.elements {
            if !names.insert(element.name.as_str()) {
                self.validation_issues
                    .push(ValidationIssue::unique(&element.id, &element.name));
            }
        }

        for element in &schema.elements {
            if element.name.trim().is_empty() {
                self.validation_issues
                    .push(ValidationIssue::required(&element.id, "name"));
            }
            if element.label.trim().is_empty() {
                self.validation_issues
                    .push(ValidationIssue::required(&element.id, "label"));
            }
        }

        self.validation_issues.is_empty()
    }

    // ------------------------------------------------------------------------
    // Import / export
    // ------------------------------------------------------------------------

    /// Pretty-printed JSON Schema of the current form (`null` without one)
    pub fn export_to_json_schema(&self) -> String {
        to_pretty_string(self.json_schema().as_ref())
    }

    /// Replace the current form with one parsed from a JSON Schema document
    ///
    /// Returns `false` and keeps the current form when `text` cannot be
    /// imported.
    pub fn import_from_json_schema(&mut self, text: &str) -> bool {
        match import_json_schema(text, &self.config) {
            Ok(schema) => {
                self.load_form(schema);
                true
            }
            Err(e) => {
                tracing::error!("Failed to import JSON Schema: {}", e);
                false
            }
        }
    }

    /// Replace the current form with an already built schema
    ///
    /// The selection is cleared; validation issues are left for the next
    /// [`validate_form`](Self::validate_form) pass.
    pub fn load_form(&mut self, schema: FormSchema) {
        tracing::info!(
            "Loaded form '{}' with {} elements",
            schema.title,
            schema.elements.len()
        );
        self.current_schema = Some(schema);
        self.selected_element_id = None;
    }

    /// Drop the current form and everything tied to it
    pub fn clear_form(&mut self) {
        self.current_schema = None;
        self.selected_element_id = None;
        self.validation_issues.clear();
    }
}

#[cfg(test)]
#[path = "form_builder_test.rs"]
mod form_builder_test;
