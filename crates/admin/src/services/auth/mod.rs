//! Admin authentication service.
//!
//! Username/password authentication backed by Argon2id hashes in the
//! `admin_users` table. A successful login is recorded in `last_login`
//! and the caller stores a [`CurrentAdmin`](crate::models::CurrentAdmin)
//! in the session.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use sqlx::PgPool;

use lunaris_core::{AdminRole, AdminUserId};

use crate::db::admin_users::AdminUserRepository;
use crate::models::AdminUser;

/// Minimum password length for newly created admins.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Admin authentication service.
pub struct AuthService<'a> {
    users: AdminUserRepository<'a>,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            users: AdminUserRepository::new(pool),
        }
    }

    /// Login with username and password.
    ///
    /// Updates `last_login` on success.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` whether the username is
    /// unknown or the password is wrong; the two cases are intentionally
    /// indistinguishable.
    pub async fn login(&self, username: &str, password: &str) -> Result<AdminUser, AuthError> {
        let (user, password_hash) = self
            .users
            .get_with_password(username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(password, &password_hash)?;

        self.users.update_last_login(user.id).await?;

        Ok(user)
    }

    /// Get an admin user by ID.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the user no longer
    /// exists (e.g. deleted while a session was still live).
    pub async fn get_user(&self, id: AdminUserId) -> Result<AdminUser, AuthError> {
        self.users
            .get_by_id(id)
            .await?
            .ok_or(AuthError::InvalidCredentials)
    }

    /// Create a new admin user.
    ///
    /// Used by the CLI; the HTTP surface has no self-registration.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::WeakPassword` if the password doesn't meet
    /// requirements, or `AuthError::Repository` on conflict/failure.
    pub async fn create_user(
        &self,
        username: &str,
        password: &str,
        name: &str,
        role: AdminRole,
    ) -> Result<AdminUserId, AuthError> {
        validate_password(password)?;
        let password_hash = hash_password(password)?;

        let id = self
            .users
            .create(username, &password_hash, name, role)
            .await?;

        Ok(id)
    }
}

/// Validate password meets requirements.
fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hash = hash_password("correct horse battery").unwrap();
        assert!(verify_password("correct horse battery", &hash).is_ok());
    }

    #[test]
    fn test_wrong_password_fails() {
        let hash = hash_password("correct horse battery").unwrap();
        let err = verify_password("incorrect horse", &hash).unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[test]
    fn test_garbage_hash_fails_closed() {
        let err = verify_password("anything", "not-a-phc-string").unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[test]
    fn test_short_password_rejected() {
        let err = validate_password("short").unwrap_err();
        assert!(matches!(err, AuthError::WeakPassword(_)));
    }

    #[test]
    fn test_hashes_are_salted() {
        let first = hash_password("correct horse battery").unwrap();
        let second = hash_password("correct horse battery").unwrap();
        assert_ne!(first, second);
    }
}
