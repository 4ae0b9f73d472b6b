//! Session middleware configuration for the admin.
//!
//! Sets up `PostgreSQL`-backed sessions using tower-sessions. The cookie
//! is the admin login: HTTP-only, SameSite=Lax, and valid for 7 days of
//! inactivity.

use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::PostgresStore;

use crate::config::AdminConfig;

/// Session cookie name for the admin.
pub const SESSION_COOKIE_NAME: &str = "lunaris_admin_session";

/// Session expiry time in seconds (7 days, refreshed on activity).
const SESSION_EXPIRY_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Create the session layer over a `PostgreSQL` store.
///
/// The store's backing table must exist before requests arrive; `main`
/// runs the store's own migration at startup.
#[must_use]
pub fn create_session_layer(
    store: PostgresStore,
    config: &AdminConfig,
) -> SessionManagerLayer<PostgresStore> {
    // Secure cookies only make sense when the admin is actually served
    // over HTTPS; local development isn't.
    let is_secure = config.base_url.starts_with("https://");

    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(is_secure)
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}
