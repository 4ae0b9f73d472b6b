//! CLI subcommands.

pub mod admin;
pub mod migrate;
pub mod seed;

use secrecy::SecretString;

/// Resolve the database URL from `ADMIN_DATABASE_URL` or `DATABASE_URL`.
pub(crate) fn database_url() -> Result<SecretString, MissingDatabaseUrl> {
    dotenvy::dotenv().ok();

    std::env::var("ADMIN_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| MissingDatabaseUrl)
}

/// Neither `ADMIN_DATABASE_URL` nor `DATABASE_URL` is set.
#[derive(Debug, thiserror::Error)]
#[error("Missing environment variable: ADMIN_DATABASE_URL (or DATABASE_URL)")]
pub struct MissingDatabaseUrl;
