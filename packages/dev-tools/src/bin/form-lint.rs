//! Form Schema Lint Binary
//!
//! Reads a JSON Schema document, imports it as a form, runs form validation
//! and prints the normalized export produced by the builder.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin form-lint -- path/to/form.json
//!
//! # Keep exact field kinds through the x-field-kind extension
//! FORMCRAFT_PRESERVE_KINDS=1 cargo run --bin form-lint -- path/to/form.json
//! ```
//!
//! # Environment Variables
//!
//! - `FORMCRAFT_PRESERVE_KINDS`: Read and write `x-field-kind` (`1`/`true` to enable)
//! - `RUST_LOG`: Logging level (e.g., "info", "debug", "trace")
//!
//! Exits non-zero when the document cannot be imported or the form has
//! validation issues.

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context};
use formcraft_core::codec::import_json_schema;
use formcraft_core::{FormBuilder, FormBuilderConfig};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let path: PathBuf = env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .context("Usage: form-lint <schema.json>")?;

    let config = FormBuilderConfig {
        preserve_field_kinds: preserve_kinds_from_env(),
        ..FormBuilderConfig::default()
    };
    tracing::debug!("Using config: {:?}", config);

    let text = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let schema = import_json_schema(&text, &config)
        .with_context(|| format!("{} is not an importable form schema", path.display()))?;

    let mut builder = FormBuilder::with_config(config);
    builder.load_form(schema);

    let element_count = builder.sorted_elements().len();
    tracing::info!("Loaded {} with {} elements", path.display(), element_count);

    let valid = builder.validate_form();
    for issue in builder.validation_issues() {
        tracing::warn!("[{}] {}: {}", issue.rule, issue.field, issue.message);
    }

    println!("{}", builder.export_to_json_schema());

    if !valid {
        bail!(
            "{} has {} validation issue(s)",
            path.display(),
            builder.validation_issues().len()
        );
    }

    Ok(())
}

fn preserve_kinds_from_env() -> bool {
    env::var("FORMCRAFT_PRESERVE_KINDS")
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}
