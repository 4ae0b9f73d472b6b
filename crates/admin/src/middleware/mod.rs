//! Middleware and extractors for the admin.

pub mod auth;
pub mod session;

pub use auth::{RequireAdminAuth, clear_current_admin, set_current_admin};
pub use session::{SESSION_COOKIE_NAME, create_session_layer};
