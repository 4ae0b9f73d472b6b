//! Image upload route handler.
//!
//! Accepts a multipart `file` field, validates that it is a JPEG, PNG, or
//! WebP image, and writes it under the uploads directory with a generated
//! name. Both binaries serve that directory statically at `/uploads`, so
//! the returned URL can go straight into a product or blog post.

use axum::{
    Json,
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use rand::Rng;
use rand::distr::Alphanumeric;
use serde_json::json;

use crate::error::{AdminError, Result};
use crate::middleware::RequireAdminAuth;
use crate::state::AppState;

/// Image formats the store accepts.
const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

/// Upload an image.
///
/// POST /api/uploads (multipart, field name `file`)
pub async fn create(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
    mut multipart: Multipart,
) -> Result<impl IntoResponse> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AdminError::Validation(format!("invalid multipart payload: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let extension = extension_for(field.content_type(), field.file_name())?;

        let data = field
            .bytes()
            .await
            .map_err(|e| AdminError::Validation(format!("failed to read upload: {e}")))?;
        if data.is_empty() {
            return Err(AdminError::Validation("uploaded file is empty".to_string()));
        }

        let suffix: String = rand::rng()
            .sample_iter(Alphanumeric)
            .take(8)
            .map(char::from)
            .collect();
        let file_name = format!("{}-{}.{}", Utc::now().timestamp_millis(), suffix, extension);

        let uploads_dir = &state.config().uploads_dir;
        tokio::fs::create_dir_all(uploads_dir)
            .await
            .map_err(|e| AdminError::Internal(format!("failed to create uploads dir: {e}")))?;
        tokio::fs::write(uploads_dir.join(&file_name), &data)
            .await
            .map_err(|e| AdminError::Internal(format!("failed to write upload: {e}")))?;

        tracing::info!(file = %file_name, bytes = data.len(), "Image uploaded");

        return Ok((
            StatusCode::CREATED,
            Json(json!({ "url": format!("/uploads/{file_name}") })),
        ));
    }

    Err(AdminError::Validation("file field is required".to_string()))
}

/// Pick the stored extension from the declared content type, falling back
/// to the client's file name.
fn extension_for(
    content_type: Option<&str>,
    file_name: Option<&str>,
) -> Result<&'static str> {
    match content_type {
        Some("image/jpeg") => return Ok("jpg"),
        Some("image/png") => return Ok("png"),
        Some("image/webp") => return Ok("webp"),
        _ => {}
    }

    let from_name = file_name
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext.to_ascii_lowercase());

    match from_name.as_deref() {
        Some("jpg" | "jpeg") => Ok("jpg"),
        Some("png") => Ok("png"),
        Some("webp") => Ok("webp"),
        _ => Err(AdminError::Validation(format!(
            "only {} images are allowed",
            ALLOWED_EXTENSIONS.join("/")
        ))),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_from_content_type() {
        assert_eq!(extension_for(Some("image/jpeg"), None).unwrap(), "jpg");
        assert_eq!(extension_for(Some("image/png"), None).unwrap(), "png");
        assert_eq!(extension_for(Some("image/webp"), None).unwrap(), "webp");
    }

    #[test]
    fn test_extension_falls_back_to_file_name() {
        assert_eq!(
            extension_for(Some("application/octet-stream"), Some("vase.JPEG")).unwrap(),
            "jpg"
        );
        assert_eq!(extension_for(None, Some("bowl.webp")).unwrap(), "webp");
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(extension_for(Some("image/gif"), Some("anim.gif")).is_err());
        assert!(extension_for(None, Some("notes.txt")).is_err());
        assert!(extension_for(None, None).is_err());
    }
}
