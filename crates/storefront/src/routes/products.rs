//! Product route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use lunaris_core::{CategoryId, ProductId};

use crate::db::{ProductFilter, ProductRepository};
use crate::error::{AppError, Result};
use crate::models::Product;
use crate::state::AppState;

/// Listing filter query parameters.
#[derive(Debug, Deserialize)]
pub struct ProductListQuery {
    pub category: Option<i32>,
    pub featured: Option<bool>,
}

/// List products, optionally filtered.
///
/// GET /api/products?category=<id>&featured=true
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ProductListQuery>,
) -> Result<Json<Vec<Product>>> {
    let filter = ProductFilter {
        category: query.category.map(CategoryId::new),
        featured: query.featured.unwrap_or(false),
    };

    let products = ProductRepository::new(state.pool()).list(filter).await?;
    Ok(Json(products))
}

/// Get a single product with its images.
///
/// GET /api/products/{id}
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Product>> {
    let product = ProductRepository::new(state.pool())
        .get(ProductId::new(id))
        .await?
        .ok_or_else(|| AppError::NotFound("Product".to_string()))?;

    Ok(Json(product))
}
