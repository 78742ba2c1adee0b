//! Form Schema
//!
//! A [`FormSchema`] is the form definition being edited: a title, an optional
//! description and an unordered collection of [`FieldElement`]s whose `order`
//! attributes define their display sequence.
//!
//! ## Order Invariant
//!
//! After every completed mutation the `order` values of a schema's N elements
//! are exactly `0..N`, with no gaps and no duplicates. The shift helpers in
//! this module keep that invariant; list position inside `elements` carries no
//! meaning.

use crate::models::FieldElement;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Form definition owned by the form builder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSchema {
    pub id: String,

    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Elements in insertion order; display order comes from `order`
    pub elements: Vec<FieldElement>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl FormSchema {
    /// Create an empty schema stamped with the current time
    pub fn new(id: String, title: String, description: Option<String>) -> Self {
        Self::with_elements(id, title, description, Vec::new())
    }

    pub fn with_elements(
        id: String,
        title: String,
        description: Option<String>,
        elements: Vec<FieldElement>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            title,
            description,
            elements,
            created_at: now,
            updated_at: now,
        }
    }

    /// Refresh the last-updated timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn has_elements(&self) -> bool {
        !self.elements.is_empty()
    }

    /// Elements sorted ascending by `order`
    pub fn sorted_elements(&self) -> Vec<&FieldElement> {
        let mut sorted: Vec<&FieldElement> = self.elements.iter().collect();
        sorted.sort_by_key(|el| el.order);
        sorted
    }

    pub fn find_element(&self, id: &str) -> Option<&FieldElement> {
        self.elements.iter().find(|el| el.id == id)
    }

    pub fn find_element_mut(&mut self, id: &str) -> Option<&mut FieldElement> {
        self.elements.iter_mut().find(|el| el.id == id)
    }

    /// Check that orders form the permutation `0..N`
    pub fn orders_are_contiguous(&self) -> bool {
        let mut seen = vec![false; self.elements.len()];
        for element in &self.elements {
            match seen.get_mut(element.order) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }
        true
    }

    /// Insert `element` at `position`, or append when `position` is `None`
    ///
    /// Every element at or after `position` shifts up by one first. Positions
    /// past the end are clamped to an append. Returns the order assigned.
    pub fn insert_element(&mut self, mut element: FieldElement, position: Option<usize>) -> usize {
        let count = self.elements.len();
        let order = position.map_or(count, |p| p.min(count));

        for el in self.elements.iter_mut().filter(|el| el.order >= order) {
            el.order += 1;
        }

        element.order = order;
        self.elements.push(element);
        order
    }

    /// Remove the element with `id`, closing the gap it leaves
    ///
    /// Returns the removed element, or `None` when no element matches.
    pub fn remove_element(&mut self, id: &str) -> Option<FieldElement> {
        let index = self.elements.iter().position(|el| el.id == id)?;
        let removed = self.elements.remove(index);

        for el in self.elements.iter_mut().filter(|el| el.order > removed.order) {
            el.order -= 1;
        }

        Some(removed)
    }

    /// Move the element with `id` to `new_order`, shifting the elements between
    ///
    /// `new_order` is clamped to the last valid position. Returns the order
    /// actually assigned, or `None` when no element matches.
    pub fn move_element(&mut self, id: &str, new_order: usize) -> Option<usize> {
        let old_order = self.find_element(id)?.order;
        let new_order = new_order.min(self.elements.len().saturating_sub(1));

        if old_order < new_order {
            // Moving down: close the gap behind the old slot
            for el in self
                .elements
                .iter_mut()
                .filter(|el| el.order > old_order && el.order <= new_order)
            {
                el.order -= 1;
            }
        } else if old_order > new_order {
            // Moving up: open a slot at the new position
            for el in self
                .elements
                .iter_mut()
                .filter(|el| el.order >= new_order && el.order < old_order)
            {
                el.order += 1;
            }
        }

        if let Some(element) = self.find_element_mut(id) {
            element.order = new_order;
        }
        Some(new_order)
    }
}
