//! HTTP route handlers for the admin back office.
//!
//! Everything except `/api/auth/login` and `/health` requires a live
//! admin session (the [`RequireAdminAuth`](crate::middleware::RequireAdminAuth)
//! extractor in each handler).
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                    - Liveness check
//!
//! # Auth
//! POST /api/auth/login            - Login, sets session cookie
//! POST /api/auth/logout           - Logout, clears session
//! GET  /api/auth/me               - Current admin identity or 401
//!
//! # Products
//! GET    /api/products            - List products
//! POST   /api/products            - Create product (+ images)
//! GET    /api/products/{id}       - Product with image URLs
//! PUT    /api/products/{id}       - Update product (images replaced if sent)
//! DELETE /api/products/{id}       - Delete product
//!
//! # Categories
//! GET  /api/categories            - List categories
//! POST /api/categories            - Create category
//!
//! # Orders
//! GET  /api/orders                - All orders, items embedded
//! GET  /api/orders/{id}           - Single order
//! PUT  /api/orders/{id}           - Partial update {status?, payment_status?, notes?}
//!
//! # Blog
//! GET    /api/blog                - All posts, drafts included
//! POST   /api/blog                - Create post (slug derived if absent)
//! GET    /api/blog/{slug}         - Post by slug
//! PUT    /api/blog/{slug}         - Replace post (new_slug renames)
//! DELETE /api/blog/{slug}         - Delete post
//!
//! # Rates & uploads
//! GET  /api/exchange-rates        - Current display rates
//! PUT  /api/exchange-rates        - Overwrite display rates
//! POST /api/uploads               - Multipart image upload -> {"url": ..}
//! ```

pub mod auth;
pub mod blog;
pub mod categories;
pub mod orders;
pub mod products;
pub mod rates;
pub mod uploads;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create all API routes for the admin.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::me))
        .route("/api/products", get(products::index).post(products::create))
        .route(
            "/api/products/{id}",
            get(products::show)
                .put(products::update)
                .delete(products::destroy),
        )
        .route(
            "/api/categories",
            get(categories::index).post(categories::create),
        )
        .route("/api/orders", get(orders::index))
        .route("/api/orders/{id}", get(orders::show).put(orders::update))
        .route("/api/blog", get(blog::index).post(blog::create))
        .route(
            "/api/blog/{slug}",
            get(blog::show).put(blog::update).delete(blog::destroy),
        )
        .route("/api/exchange-rates", get(rates::show).put(rates::update))
        .route("/api/uploads", post(uploads::create))
}
