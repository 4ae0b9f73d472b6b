//! Admin user repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use lunaris_core::{AdminRole, AdminUserId};

use super::RepositoryError;
use crate::models::AdminUser;

/// Raw admin user row including the password hash.
#[derive(sqlx::FromRow)]
struct AdminUserRow {
    id: AdminUserId,
    username: String,
    password_hash: String,
    name: String,
    role: AdminRole,
    last_login: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl AdminUserRow {
    fn into_user(self) -> (AdminUser, String) {
        let user = AdminUser {
            id: self.id,
            username: self.username,
            name: self.name,
            role: self.role,
            last_login: self.last_login,
            created_at: self.created_at,
        };
        (user, self.password_hash)
    }
}

const USER_SELECT: &str = r"
    SELECT id, username, password_hash, name, role, last_login, created_at
    FROM admin_users
";

/// Repository for admin user database operations.
pub struct AdminUserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AdminUserRepository<'a> {
    /// Create a new admin user repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get a user and their password hash by username.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_with_password(
        &self,
        username: &str,
    ) -> Result<Option<(AdminUser, String)>, RepositoryError> {
        let sql = format!("{USER_SELECT} WHERE username = $1");

        let row: Option<AdminUserRow> = sqlx::query_as(&sql)
            .bind(username)
            .fetch_optional(self.pool)
            .await?;

        Ok(row.map(AdminUserRow::into_user))
    }

    /// Get a user by their ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: AdminUserId) -> Result<Option<AdminUser>, RepositoryError> {
        let sql = format!("{USER_SELECT} WHERE id = $1");

        let row: Option<AdminUserRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        Ok(row.map(|r| AdminUserRow::into_user(r).0))
    }

    /// Create a new admin user with a pre-hashed password.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the username already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        username: &str,
        password_hash: &str,
        name: &str,
        role: AdminRole,
    ) -> Result<AdminUserId, RepositoryError> {
        let id: i32 = sqlx::query_scalar(
            r"
            INSERT INTO admin_users (username, password_hash, name, role)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            ",
        )
        .bind(username)
        .bind(password_hash)
        .bind(name)
        .bind(role)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("username already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        Ok(AdminUserId::new(id))
    }

    /// Record a successful login.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the user doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update_last_login(&self, id: AdminUserId) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE admin_users SET last_login = NOW() WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
