//! Business Services
//!
//! This module contains the editor-facing services:
//!
//! - `FormBuilder` - Form schema state, element mutations, validation and
//!   JSON Schema import/export
//!
//! Services coordinate the models, factory and codec layers, implementing the
//! editing rules the UI relies on.

pub mod form_builder;

pub use form_builder::FormBuilder;
