//! Admin user management commands.

use lunaris_core::AdminRole;

use lunaris_admin::db;
use lunaris_admin::services::AuthService;
use lunaris_admin::services::auth::AuthError;

use super::MissingDatabaseUrl;

/// Errors that can occur while managing admin users.
#[derive(Debug, thiserror::Error)]
pub enum AdminCommandError {
    #[error(transparent)]
    MissingEnvVar(#[from] MissingDatabaseUrl),

    #[error("Invalid role: {0} (expected `admin` or `editor`)")]
    InvalidRole(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),
}

/// Create a new admin user.
///
/// # Errors
///
/// Returns `AdminCommandError` if the role is unknown, the password is
/// too weak, or the username already exists.
pub async fn create_user(
    username: &str,
    password: &str,
    name: &str,
    role: &str,
) -> Result<(), AdminCommandError> {
    let role: AdminRole = role
        .parse()
        .map_err(|_| AdminCommandError::InvalidRole(role.to_owned()))?;

    let database_url = super::database_url()?;
    let pool = db::create_pool(&database_url).await?;

    let id = AuthService::new(&pool)
        .create_user(username, password, name, role)
        .await?;

    tracing::info!(%id, username, %role, "Admin user created");
    Ok(())
}
