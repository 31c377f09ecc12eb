//! Handlers for the `/notes` resource.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use notekeeper_core::error::CoreError;
use notekeeper_core::types::DbId;
use notekeeper_core::validation::{parse_id, ValidationError};
use notekeeper_db::models::note::{CreateNote, Note, UpdateNote};
use notekeeper_db::repositories::{CategoryRepo, NoteRepo};
use serde_json::Value;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::handlers::{json_body, path_id};
use crate::query::NoteListParams;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Reject a `categoryId` that does not name an existing category.
async fn ensure_category_exists(pool: &PgPool, category_id: DbId) -> AppResult<()> {
    if CategoryRepo::exists(pool, category_id).await? {
        Ok(())
    } else {
        Err(ValidationError::new(
            "categoryId",
            format!("Category with id {category_id} does not exist"),
        )
        .into())
    }
}

fn note_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Note", id })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/notes?categoryId=
///
/// Oldest first. An empty `categoryId` is treated as no filter.
pub async fn list(
    State(state): State<AppState>,
    params: Result<Query<NoteListParams>, QueryRejection>,
) -> AppResult<Json<Vec<Note>>> {
    let Query(params) = params?;
    let category_id = params
        .category_id
        .as_deref()
        .filter(|raw| !raw.trim().is_empty())
        .map(|raw| parse_id(raw, "categoryId"))
        .transpose()?;

    let notes = NoteRepo::list(&state.pool, category_id).await?;
    Ok(Json(notes))
}

/// GET /api/notes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Note>> {
    let id = path_id(&raw_id)?;
    let note = NoteRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| note_not_found(id))?;
    Ok(Json(note))
}

/// POST /api/notes
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Note>)> {
    let input = CreateNote::from_json(&json_body(payload)?)?;
    if let Some(category_id) = input.category_id {
        ensure_category_exists(&state.pool, category_id).await?;
    }

    let note = NoteRepo::create(&state.pool, &input).await?;

    tracing::info!(
        note_id = note.id,
        category_id = ?note.category_id,
        "Note created"
    );

    Ok((StatusCode::CREATED, Json(note)))
}

/// PUT /api/notes/{id}
///
/// Partial update. `createdAt` is never changed; `categoryId: null` moves
/// the note out of its category.
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<Note>> {
    let id = path_id(&raw_id)?;
    let input = UpdateNote::from_json(&json_body(payload)?)?;
    if let Some(category_id) = input.target_category() {
        ensure_category_exists(&state.pool, category_id).await?;
    }

    let note = NoteRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| note_not_found(id))?;

    tracing::info!(note_id = id, "Note updated");

    Ok(Json(note))
}

/// DELETE /api/notes/{id}
///
/// Deleting an unknown id is a no-op success.
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<StatusCode> {
    let id = path_id(&raw_id)?;
    if NoteRepo::delete(&state.pool, id).await? {
        tracing::info!(note_id = id, "Note deleted");
    } else {
        tracing::debug!(note_id = id, "Note delete matched no rows");
    }
    Ok(StatusCode::NO_CONTENT)
}
