//! Database migration command.
//!
//! Applies the SQL migrations embedded from `crates/admin/migrations/`
//! (the admin crate owns the schema; both binaries share the database).

use secrecy::ExposeSecret;
use sqlx::PgPool;

use super::MissingDatabaseUrl;

/// Errors that can occur while migrating.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    #[error(transparent)]
    MissingEnvVar(#[from] MissingDatabaseUrl),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Run all pending migrations.
///
/// # Errors
///
/// Returns `MigrationError` if the database is unreachable or a
/// migration fails.
pub async fn run() -> Result<(), MigrationError> {
    let database_url = super::database_url()?;

    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(database_url.expose_secret()).await?;

    tracing::info!("Running migrations...");
    sqlx::migrate!("../admin/migrations").run(&pool).await?;

    tracing::info!("Migrations complete!");
    Ok(())
}
