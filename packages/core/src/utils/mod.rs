//! Utility functions for FormCraft Core
//!
//! This module provides helpers shared by the editor-facing API.

mod field_name;

pub use field_name::{is_valid_field_name, sanitize_field_name};
