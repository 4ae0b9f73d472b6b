//! Authentication route handlers for the admin.

use axum::{Json, extract::State};
use serde::Deserialize;
use serde_json::{Value, json};
use tower_sessions::Session;

use crate::error::{AdminError, Result};
use crate::middleware::auth::RequireAdminAuth;
use crate::middleware::{clear_current_admin, set_current_admin};
use crate::models::CurrentAdmin;
use crate::services::AuthService;
use crate::state::AppState;

/// Login form payload.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login with username and password, establishing a session.
///
/// POST /api/auth/login
///
/// Unknown usernames and wrong passwords both produce the same 401
/// "Invalid credentials" response.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<LoginRequest>,
) -> Result<Json<Value>> {
    let user = AuthService::new(state.pool())
        .login(&request.username, &request.password)
        .await?;

    let admin = CurrentAdmin::from(&user);

    // Rotate the session ID on privilege change (login)
    session
        .cycle_id()
        .await
        .map_err(|e| AdminError::Internal(e.to_string()))?;
    set_current_admin(&session, &admin)
        .await
        .map_err(|e| AdminError::Internal(e.to_string()))?;

    tracing::info!(username = %admin.username, "Admin logged in");

    Ok(Json(json!({ "user": admin })))
}

/// Logout and clear the session.
///
/// POST /api/auth/logout
pub async fn logout(session: Session) -> Json<Value> {
    // Clear the current admin from session
    let _ = clear_current_admin(&session).await;

    Json(json!({ "message": "Logged out" }))
}

/// The current admin identity.
///
/// GET /api/auth/me
pub async fn me(RequireAdminAuth(admin): RequireAdminAuth) -> Json<Value> {
    Json(json!({ "user": admin }))
}
