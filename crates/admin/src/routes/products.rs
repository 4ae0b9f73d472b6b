//! Product CRUD route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::{Value, json};

use lunaris_core::ProductId;

use crate::db::ProductRepository;
use crate::error::{AdminError, Result};
use crate::middleware::RequireAdminAuth;
use crate::models::{Product, ProductInput};
use crate::state::AppState;

/// List all products.
///
/// GET /api/products
pub async fn index(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
) -> Result<Json<Vec<Product>>> {
    let products = ProductRepository::new(state.pool()).list().await?;
    Ok(Json(products))
}

/// Get a product with its image URLs for the edit form.
///
/// GET /api/products/{id}
pub async fn show(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
    Path(id): Path<i32>,
) -> Result<Json<Value>> {
    let (product, images) = ProductRepository::new(state.pool())
        .get(ProductId::new(id))
        .await?
        .ok_or_else(|| AdminError::NotFound("Product".to_string()))?;

    Ok(Json(json!({ "product": product, "images": images })))
}

/// Create a product with its images.
///
/// POST /api/products
pub async fn create(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
    Json(input): Json<ProductInput>,
) -> Result<impl IntoResponse> {
    input.validate().map_err(AdminError::Validation)?;

    let id = ProductRepository::new(state.pool()).create(&input).await?;

    tracing::info!(product_id = %id, "Product created");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "id": id, "message": "Product created" })),
    ))
}

/// Update a product; when `images` is present the set is replaced.
///
/// PUT /api/products/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
    Path(id): Path<i32>,
    Json(input): Json<ProductInput>,
) -> Result<Json<Value>> {
    input.validate().map_err(AdminError::Validation)?;

    ProductRepository::new(state.pool())
        .update(ProductId::new(id), &input)
        .await?;

    Ok(Json(json!({ "message": "Product updated" })))
}

/// Delete a product.
///
/// DELETE /api/products/{id}
pub async fn destroy(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
    Path(id): Path<i32>,
) -> Result<Json<Value>> {
    ProductRepository::new(state.pool())
        .delete(ProductId::new(id))
        .await?;

    tracing::info!(product_id = id, "Product deleted");

    Ok(Json(json!({ "message": "Product deleted" })))
}
