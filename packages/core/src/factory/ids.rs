//! Identifier generation
//!
//! Identifiers combine the current Unix time in milliseconds with a random
//! suffix: `form-1704067200000-3f9a1c0b2`. Collisions within one process are
//! practically impossible; the ids are not meant to be unguessable.

use chrono::Utc;
use uuid::Uuid;

/// Length of the random suffix
const SUFFIX_LEN: usize = 9;

/// Generate a unique id for a form schema or field element
pub fn generate_id() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!(
        "form-{}-{}",
        Utc::now().timestamp_millis(),
        &suffix[..SUFFIX_LEN]
    )
}

/// Provisional machine name for a freshly created element
///
/// Time based and not guaranteed unique; the editor is expected to rename.
pub fn provisional_field_name() -> String {
    format!("field_{}", Utc::now().timestamp_millis())
}
