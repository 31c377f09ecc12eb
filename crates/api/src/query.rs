//! Query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for `GET /api/notes` (`?categoryId=`).
///
/// Kept as a raw string so the handler can coerce it and report a
/// field-level validation error instead of a bare extractor rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteListParams {
    pub category_id: Option<String>,
}
