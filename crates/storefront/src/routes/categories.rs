//! Category route handlers.

use axum::{Json, extract::State};

use crate::db::CategoryRepository;
use crate::error::Result;
use crate::models::Category;
use crate::state::AppState;

/// List all categories in display order.
///
/// GET /api/categories
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Category>>> {
    let categories = CategoryRepository::new(state.pool()).list().await?;
    Ok(Json(categories))
}
