//! Category route handlers.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

use crate::db::CategoryRepository;
use crate::error::{AdminError, Result};
use crate::middleware::RequireAdminAuth;
use crate::models::{Category, CategoryInput};
use crate::state::AppState;

/// List all categories.
///
/// GET /api/categories
pub async fn index(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
) -> Result<Json<Vec<Category>>> {
    let categories = CategoryRepository::new(state.pool()).list().await?;
    Ok(Json(categories))
}

/// Create a category.
///
/// POST /api/categories
pub async fn create(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
    Json(input): Json<CategoryInput>,
) -> Result<impl IntoResponse> {
    input.validate().map_err(AdminError::Validation)?;

    let id = CategoryRepository::new(state.pool()).create(&input).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "id": id, "message": "Category created" })),
    ))
}
