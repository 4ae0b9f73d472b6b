//! Blog read model.

use chrono::{DateTime, Utc};
use serde::Serialize;

use lunaris_core::BlogPostId;

/// A blog post.
///
/// Content is stored as rich text (HTML) authored in the admin editor.
/// The storefront only ever sees published posts.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct BlogPost {
    pub id: BlogPostId,
    pub slug: String,
    pub title_en: String,
    pub title_tr: String,
    pub excerpt_en: String,
    pub excerpt_tr: String,
    pub content_en: String,
    pub content_tr: String,
    pub cover_image: String,
    pub category: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
