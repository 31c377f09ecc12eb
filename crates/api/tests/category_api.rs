//! HTTP-level integration tests for the `/api/categories` endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_bytes, body_json, build_test_app, delete, get, post_json, post_raw, put_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_category_returns_201(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(
        app,
        "/api/categories",
        json!({"name": "Work", "color": "#3b82f6"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json, json!({"id": 1, "name": "Work", "color": "#3b82f6"}));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_without_color_defaults_to_black(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(app, "/api/categories", json!({"name": "Misc"})).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["color"], "#000000");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_duplicate_name_returns_409(pool: PgPool) {
    let app = build_test_app(pool.clone());
    post_json(app, "/api/categories", json!({"name": "Work"})).await;

    let app = build_test_app(pool.clone());
    let response = post_json(app, "/api/categories", json!({"name": "Work"})).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
    assert_eq!(json["message"], "Category with name 'Work' already exists");
    assert_eq!(json["field"], "name");

    let app = build_test_app(pool);
    let list = body_json(get(app, "/api/categories").await).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_missing_name_returns_400_with_field(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(app, "/api/categories", json!({"color": "#ffffff"})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Required");
    assert_eq!(json["field"], "name");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_name_with_nul_returns_400(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let response = post_json(app, "/api/categories", json!({"name": "x\u{0}"})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["field"], "name");

    let app = build_test_app(pool);
    let list = body_json(get(app, "/api/categories").await).await;
    assert_eq!(list, json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_invalid_color_returns_400(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(
        app,
        "/api/categories",
        json!({"name": "Work", "color": "blue"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["field"], "color");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_with_malformed_json_returns_400(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_raw(app, "/api/categories", "{\"name\": ").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["message"].is_string());
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_categories_in_id_order(pool: PgPool) {
    for name in ["Recipes", "Work", "GitHub"] {
        let app = build_test_app(pool.clone());
        post_json(app, "/api/categories", json!({"name": name})).await;
    }

    let app = build_test_app(pool);
    let response = get(app, "/api/categories").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let names: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["Recipes", "Work", "GitHub"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_category_by_id(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let created = body_json(post_json(app, "/api/categories", json!({"name": "Work"})).await).await;
    let id = created["id"].as_i64().unwrap();

    let app = build_test_app(pool.clone());
    let response = get(app, &format!("/api/categories/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, created);

    let app = build_test_app(pool);
    let response = get(app, "/api/categories/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Category with id 999 not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_non_numeric_id_returns_400(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(app, "/api/categories/abc").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["field"], "id");
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_category_partial(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/categories",
            json!({"name": "Work", "color": "#3b82f6"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/categories/{id}"),
        json!({"name": "Office"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Office");
    assert_eq!(json["color"], "#3b82f6");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_category_returns_404(pool: PgPool) {
    let app = build_test_app(pool);
    let response = put_json(app, "/api/categories/42", json!({"name": "Nope"})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_with_blank_name_returns_400(pool: PgPool) {
    let app = build_test_app(pool.clone());
    post_json(app, "/api/categories", json!({"name": "Work"})).await;

    let app = build_test_app(pool);
    let response = put_json(app, "/api/categories/1", json!({"name": ""})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["field"], "name");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_rename_to_existing_name_returns_409(pool: PgPool) {
    for name in ["Work", "Home"] {
        let app = build_test_app(pool.clone());
        post_json(app, "/api/categories", json!({"name": name})).await;
    }

    let app = build_test_app(pool);
    let response = put_json(app, "/api/categories/2", json!({"name": "Work"})).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Category with name 'Work' already exists");
    assert_eq!(json["field"], "name");
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_category_returns_204(pool: PgPool) {
    let app = build_test_app(pool.clone());
    post_json(app, "/api/categories", json!({"name": "Work"})).await;

    let app = build_test_app(pool.clone());
    let response = delete(app, "/api/categories/1").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());

    let app = build_test_app(pool);
    let response = get(app, "/api/categories/1").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_missing_category_is_silent(pool: PgPool) {
    let app = build_test_app(pool);
    let response = delete(app, "/api/categories/31337").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_category_keeps_its_notes(pool: PgPool) {
    let app = build_test_app(pool.clone());
    post_json(app, "/api/categories", json!({"name": "Work"})).await;
    let app = build_test_app(pool.clone());
    post_json(
        app,
        "/api/notes",
        json!({"title": "T", "content": "C", "categoryId": 1}),
    )
    .await;

    let app = build_test_app(pool.clone());
    let response = delete(app, "/api/categories/1").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = build_test_app(pool);
    let note = body_json(get(app, "/api/notes/1").await).await;
    assert_eq!(note["categoryId"], 1);
}
