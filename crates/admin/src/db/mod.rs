//! Database operations for the admin back office.
//!
//! The admin binary owns every write to the store: catalog and blog CRUD,
//! order status updates, and exchange-rate edits. It shares one
//! `PostgreSQL` database with the storefront.
//!
//! ## Tables
//!
//! - `products`, `product_images`, `categories` - catalog CRUD
//! - `orders`, `order_items` - order management
//! - `blog_posts` - blog CRUD
//! - `exchange_rates` - display-rate edits
//! - `admin_users` - back-office authentication
//! - `session` (tower-sessions) - admin session storage
//!
//! # Migrations
//!
//! Migrations are stored in `crates/admin/migrations/` and run via:
//! ```bash
//! cargo run -p lunaris-cli -- migrate
//! ```

pub mod admin_users;
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

pub use admin_users::AdminUserRepository;
pub use blog::BlogRepository;
pub use categories::CategoryRepository;
pub use orders::OrderRepository;
pub use products::ProductRepository;
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

    /// Constraint violation (e.g., duplicate slug).
    #[error("constraint violation: {0}")]
    Conflict(String),
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
