//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create DTO for inserts
//! - An update DTO (all `Option` fields) for patches
//!
//! DTOs are built from raw JSON with `from_json`, which applies the rules in
//! `notekeeper_core` and reports the first problem as a `ValidationError`.

pub mod category;
pub mod note;

use notekeeper_core::validation::ValidationError;

/// Attach a field name to a rule failure.
pub(crate) fn check(field: &str, result: Result<(), String>) -> Result<(), ValidationError> {
    result.map_err(|message| ValidationError::new(field, message))
}
