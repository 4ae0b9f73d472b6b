//! Admin user domain types.
//!
//! These types represent validated domain objects for admin
//! authentication. The password hash never leaves the repository layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use lunaris_core::{AdminRole, AdminUserId};

/// An admin user (domain type).
#[derive(Debug, Clone)]
pub struct AdminUser {
    /// Unique admin user ID.
    pub id: AdminUserId,
    /// Login name.
    pub username: String,
    /// Display name shown in the back office.
    pub name: String,
    /// Permission level.
    pub role: AdminRole,
    /// When this admin last logged in, if ever.
    pub last_login: Option<DateTime<Utc>>,
    /// When the admin was created.
    pub created_at: DateTime<Utc>,
}

/// The session payload identifying a logged-in admin.
///
/// Stored in the tower-sessions store and round-tripped on every
/// authenticated request; keep it small.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentAdmin {
    pub id: AdminUserId,
    pub username: String,
    pub name: String,
    pub role: AdminRole,
}

impl From<&AdminUser> for CurrentAdmin {
    fn from(user: &AdminUser) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            name: user.name.clone(),
            role: user.role,
        }
    }
}

/// Well-known session keys.
pub mod session_keys {
    /// Key under which [`CurrentAdmin`](super::CurrentAdmin) is stored.
    pub const CURRENT_ADMIN: &str = "current_admin";
}
