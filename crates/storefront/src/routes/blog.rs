//! Blog route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::db::BlogRepository;
use crate::error::{AppError, Result};
use crate::models::BlogPost;
use crate::state::AppState;

/// Listing filter query parameters.
#[derive(Debug, Deserialize)]
pub struct BlogListQuery {
    pub category: Option<String>,
}

/// List published posts, newest first.
///
/// GET /api/blog?category=<tag>
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<BlogListQuery>,
) -> Result<Json<Vec<BlogPost>>> {
    let posts = BlogRepository::new(state.pool())
        .list_published(query.category.as_deref())
        .await?;

    Ok(Json(posts))
}

/// Get a published post by slug.
///
/// GET /api/blog/{slug}
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<BlogPost>> {
    let post = BlogRepository::new(state.pool())
        .get_published_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound("Blog post".to_string()))?;

    Ok(Json(post))
}
