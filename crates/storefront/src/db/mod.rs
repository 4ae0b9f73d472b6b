//! Database operations for the storefront.
//!
//! The storefront and admin binaries share one `PostgreSQL` database; the
//! storefront only reads the catalog/blog/rates tables and inserts orders.
//!
//! ## Tables touched here
//!
//! - `products`, `product_images`, `categories` - catalog reads
//! - `blog_posts` - published-post reads
//! - `exchange_rates` - display-rate reads
//! - `orders`, `order_items` - order intake inserts
//!
//! # Migrations
//!
//! Migrations live in `crates/admin/migrations/` and run via:
//! ```bash
//! cargo run -p lunaris-cli -- migrate
//! ```

pub mod blog;
pub mod categories;
pub mod orders;
pub mod products;
pub mod rates;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use blog::BlogRepository;
pub use categories::CategoryRepository;
pub use orders::OrderRepository;
pub use products::{ProductFilter, ProductRepository};
pub use rates::RateRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
