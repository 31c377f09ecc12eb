//! Request handlers.
//!
//! Each submodule provides async handler functions (list, get_by_id, create,
//! update, delete) for a single entity type. Handlers validate input,
//! delegate to the corresponding repository in `notekeeper_db` and map
//! errors via [`AppError`].

pub mod category;
pub mod note;

use axum::extract::rejection::JsonRejection;
use axum::Json;
use notekeeper_core::types::DbId;
use notekeeper_core::validation::parse_id;
use serde_json::Value;

use crate::error::{AppError, AppResult};

/// Coerce a raw `{id}` path segment into a database id.
pub(crate) fn path_id(raw: &str) -> AppResult<DbId> {
    Ok(parse_id(raw, "id")?)
}

/// Unwrap a JSON body, turning extractor rejections into 400 responses.
pub(crate) fn json_body(payload: Result<Json<Value>, JsonRejection>) -> AppResult<Value> {
    let Json(body) = payload.map_err(AppError::from)?;
    Ok(body)
}
