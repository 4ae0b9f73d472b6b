//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                  - Liveness check
//! GET  /health/ready            - Readiness check (verifies database)
//!
//! # Catalog
//! GET  /api/products            - Product listing (?category=<id>&featured=true)
//! GET  /api/products/{id}       - Product detail with images
//! GET  /api/categories          - Category listing
//!
//! # Blog
//! GET  /api/blog                - Published posts (?category=<tag>)
//! GET  /api/blog/{slug}         - Published post by slug
//!
//! # Checkout
//! GET  /api/exchange-rates      - Display rates {"EUR": .., "USD": ..}
//! POST /api/orders              - Submit an order
//! ```

pub mod blog;
pub mod categories;
pub mod orders;
pub mod products;
pub mod rates;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create all API routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/products", get(products::index))
        .route("/api/products/{id}", get(products::show))
        .route("/api/categories", get(categories::index))
        .route("/api/blog", get(blog::index))
        .route("/api/blog/{slug}", get(blog::show))
        .route("/api/exchange-rates", get(rates::index))
        .route("/api/orders", post(orders::create))
}
