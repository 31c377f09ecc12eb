//! Handlers for the `/categories` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use notekeeper_core::error::CoreError;
use notekeeper_db::models::category::{Category, CreateCategory, UpdateCategory};
use notekeeper_db::repositories::CategoryRepo;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::handlers::{json_body, path_id};
use crate::state::AppState;

/// Unique constraint on `categories.name`.
const NAME_CONSTRAINT: &str = "uq_categories_name";

/// Report a duplicate category name as a conflict on the `name` field.
///
/// Any other database error passes through unchanged.
fn name_conflict(err: sqlx::Error, name: &str) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() && db_err.constraint() == Some(NAME_CONSTRAINT) {
            return AppError::Core(CoreError::Conflict {
                message: format!("Category with name '{name}' already exists"),
                field: Some("name".to_string()),
            });
        }
    }
    AppError::Database(err)
}

/// GET /api/categories
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(categories))
}

/// GET /api/categories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Category>> {
    let id = path_id(&raw_id)?;
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;
    Ok(Json(category))
}

/// POST /api/categories
///
/// A duplicate name is a 409 on `name`.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Category>)> {
    let input = CreateCategory::from_json(&json_body(payload)?)?;
    let category = CategoryRepo::create(&state.pool, &input)
        .await
        .map_err(|e| name_conflict(e, &input.name))?;

    tracing::info!(
        category_id = category.id,
        name = %category.name,
        "Category created"
    );

    Ok((StatusCode::CREATED, Json(category)))
}

/// PUT /api/categories/{id}
///
/// Partial update: only fields present in the body change.
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<Category>> {
    let id = path_id(&raw_id)?;
    let input = UpdateCategory::from_json(&json_body(payload)?)?;
    let category = CategoryRepo::update(&state.pool, id, &input)
        .await
        .map_err(|e| name_conflict(e, input.name.as_deref().unwrap_or_default()))?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;

    tracing::info!(category_id = id, "Category updated");

    Ok(Json(category))
}

/// DELETE /api/categories/{id}
///
/// Deleting an unknown id is a no-op success. Notes in the category keep
/// their `categoryId`.
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<StatusCode> {
    let id = path_id(&raw_id)?;
    if CategoryRepo::delete(&state.pool, id).await? {
        tracing::info!(category_id = id, "Category deleted");
    } else {
        tracing::debug!(category_id = id, "Category delete matched no rows");
    }
    Ok(StatusCode::NO_CONTENT)
}
