//! Blog CRUD route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::db::BlogRepository;
use crate::error::{AdminError, Result};
use crate::middleware::RequireAdminAuth;
use crate::models::{BlogPost, BlogPostInput, BlogPostUpdate};
use crate::state::AppState;

/// Listing filter query parameters.
#[derive(Debug, Deserialize)]
pub struct BlogListQuery {
    pub category: Option<String>,
}

/// List all posts, drafts included, newest first.
///
/// GET /api/blog?category=<tag>
pub async fn index(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
    Query(query): Query<BlogListQuery>,
) -> Result<Json<Vec<BlogPost>>> {
    let posts = BlogRepository::new(state.pool())
        .list(query.category.as_deref())
        .await?;

    Ok(Json(posts))
}

/// Get a post by slug, published or not.
///
/// GET /api/blog/{slug}
pub async fn show(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
    Path(slug): Path<String>,
) -> Result<Json<BlogPost>> {
    let post = BlogRepository::new(state.pool())
        .get_by_slug(&slug)
        .await?
        .ok_or_else(|| AdminError::NotFound("Blog post".to_string()))?;

    Ok(Json(post))
}

/// Create a post; the slug is derived from the English title when absent.
///
/// POST /api/blog
pub async fn create(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
    Json(input): Json<BlogPostInput>,
) -> Result<impl IntoResponse> {
    input.validate().map_err(AdminError::Validation)?;
    let slug = input.final_slug();
    if slug.is_empty() {
        return Err(AdminError::Validation(
            "slug could not be derived from title_en".to_string(),
        ));
    }

    let id = BlogRepository::new(state.pool()).create(&slug, &input).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "id": id, "slug": slug, "message": "Blog post created" })),
    ))
}

/// Replace a post's fields; `new_slug` renames it.
///
/// PUT /api/blog/{slug}
pub async fn update(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
    Path(slug): Path<String>,
    Json(update): Json<BlogPostUpdate>,
) -> Result<Json<Value>> {
    BlogRepository::new(state.pool()).update(&slug, &update).await?;

    let final_slug = update.new_slug.unwrap_or(slug);
    Ok(Json(
        json!({ "message": "Blog post updated", "slug": final_slug }),
    ))
}

/// Delete a post.
///
/// DELETE /api/blog/{slug}
pub async fn destroy(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
    Path(slug): Path<String>,
) -> Result<Json<Value>> {
    BlogRepository::new(state.pool()).delete(&slug).await?;

    Ok(Json(json!({ "message": "Blog post deleted" })))
}
