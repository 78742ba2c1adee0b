//! Field name checks
//!
//! Field names become JSON Schema property keys and form-submission keys, so
//! the editor nudges users toward identifier-like names: a leading ASCII letter
//! followed by letters, digits or underscores.

use regex::Regex;
use std::sync::OnceLock;

const VALID_NAME_PATTERN: &str = r"^[a-zA-Z][a-zA-Z0-9_]*$";

/// Check whether `name` is an identifier-like field name
///
/// # Examples
///
/// ```
/// # use formcraft_core::utils::is_valid_field_name;
/// assert!(is_valid_field_name("first_name"));
/// assert!(!is_valid_field_name("1st"));
/// assert!(!is_valid_field_name("_private"));
/// ```
pub fn is_valid_field_name(name: &str) -> bool {
    static VALID_NAME_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = VALID_NAME_REGEX.get_or_init(|| Regex::new(VALID_NAME_PATTERN).unwrap());
    regex.is_match(name)
}

/// Turn arbitrary text into a field name
///
/// Lowercases, replaces every character outside `[a-zA-Z0-9_]` with `_`,
/// prefixes a leading digit with `field_`, collapses underscore runs and
/// strips a leading and trailing underscore. Empty input stays empty.
///
/// # Examples
///
/// ```
/// # use formcraft_core::utils::sanitize_field_name;
/// assert_eq!(sanitize_field_name("My Field Name 123!"), "my_field_name_123");
/// assert_eq!(sanitize_field_name("123field"), "field_123field");
/// ```
pub fn sanitize_field_name(name: &str) -> String {
    static INVALID_CHARS: OnceLock<Regex> = OnceLock::new();
    static LEADING_DIGIT: OnceLock<Regex> = OnceLock::new();
    static UNDERSCORE_RUNS: OnceLock<Regex> = OnceLock::new();
    static EDGE_UNDERSCORE: OnceLock<Regex> = OnceLock::new();

    let invalid_chars = INVALID_CHARS.get_or_init(|| Regex::new(r"[^a-zA-Z0-9_]").unwrap());
    let leading_digit = LEADING_DIGIT.get_or_init(|| Regex::new(r"^[0-9]").unwrap());
    let underscore_runs = UNDERSCORE_RUNS.get_or_init(|| Regex::new(r"_+").unwrap());
    let edge_underscore = EDGE_UNDERSCORE.get_or_init(|| Regex::new(r"^_|_$").unwrap());

    let lowered = name.to_lowercase();
    let replaced = invalid_chars.replace_all(&lowered, "_");
    let prefixed = leading_digit.replace(&replaced, "field_${0}");
    let collapsed = underscore_runs.replace_all(&prefixed, "_");
    edge_underscore.replace_all(&collapsed, "").into_owned()
}
