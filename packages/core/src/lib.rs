//! FormCraft Core Business Logic Layer
//!
//! This crate provides the form schema model, element factory, JSON Schema
//! codec and editor state service for the FormCraft visual form builder.
//!
//! # Architecture
//!
//! - **Typed elements**: Each field kind carries only the properties valid for it
//! - **Contiguous ordering**: Element orders are always a permutation of `0..N`
//! - **JSON Schema exchange**: Forms export to and import from JSON Schema documents
//! - **No I/O**: Reading and writing files is left to the callers
//!
//! # Modules
//!
//! - [`models`] - Data structures (FormSchema, FieldElement, FieldKind, etc.)
//! - [`factory`] - Default elements and identifiers
//! - [`codec`] - JSON Schema export and import
//! - [`config`] - Builder configuration
//! - [`services`] - Editor state service (FormBuilder)
//! - [`utils`] - Field name helpers

pub mod codec;
pub mod config;
pub mod factory;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use config::FormBuilderConfig;
pub use models::*;
pub use services::*;
