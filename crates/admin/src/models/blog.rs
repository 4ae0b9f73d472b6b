//! Blog models for the back office.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use lunaris_core::BlogPostId;

/// A blog post, drafts included.
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

/// Payload for creating a blog post.
///
/// When `slug` is absent one is derived from the English title.
#[derive(Debug, Clone, Deserialize)]
pub struct BlogPostInput {
    pub slug: Option<String>,
    pub title_en: String,
    pub title_tr: String,
    #[serde(default)]
    pub excerpt_en: String,
    #[serde(default)]
    pub excerpt_tr: String,
    pub content_en: String,
    pub content_tr: String,
    #[serde(default)]
    pub cover_image: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub published: bool,
}

fn default_category() -> String {
    "production".to_string()
}

impl BlogPostInput {
    /// Field-level validation.
    ///
    /// # Errors
    ///
    /// Returns a message naming the first invalid field.
    pub fn validate(&self) -> Result<(), String> {
        if self.title_en.trim().is_empty() {
            return Err("title_en is required".to_string());
        }
        if self.title_tr.trim().is_empty() {
            return Err("title_tr is required".to_string());
        }
        Ok(())
    }

    /// The slug to store: the explicit one, or one derived from the
    /// English title.
    #[must_use]
    pub fn final_slug(&self) -> String {
        match &self.slug {
            Some(slug) if !slug.trim().is_empty() => slug.trim().to_owned(),
            _ => slugify(&self.title_en),
        }
    }
}

/// Payload for updating a blog post (full replacement, addressed by the
/// current slug; `new_slug` renames it).
#[derive(Debug, Clone, Deserialize)]
pub struct BlogPostUpdate {
    pub title_en: String,
    pub title_tr: String,
    #[serde(default)]
    pub excerpt_en: String,
    #[serde(default)]
    pub excerpt_tr: String,
    pub content_en: String,
    pub content_tr: String,
    #[serde(default)]
    pub cover_image: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub published: bool,
    pub new_slug: Option<String>,
}

/// Derive a URL slug from a title.
///
/// Lowercases, collapses every non-alphanumeric run into a single dash,
/// and trims leading/trailing dashes. Characters outside ASCII (e.g.
/// Turkish letters) are dropped, which is why slugs derive from the
/// English title.
#[must_use]
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    for c in title.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }

    slug
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Firing the Kiln"), "firing-the-kiln");
    }

    #[test]
    fn test_slugify_collapses_punctuation() {
        assert_eq!(slugify("Glaze, Slip & Stain!"), "glaze-slip-stain");
    }

    #[test]
    fn test_slugify_trims_edges() {
        assert_eq!(slugify("  ...Wood Ash?  "), "wood-ash");
    }

    #[test]
    fn test_slugify_drops_non_ascii() {
        assert_eq!(slugify("Çömlek 101"), "mlek-101");
    }

    #[test]
    fn test_final_slug_prefers_explicit() {
        let mut input = post_input();
        input.slug = Some("custom-slug".to_string());
        assert_eq!(input.final_slug(), "custom-slug");

        input.slug = Some("   ".to_string());
        assert_eq!(input.final_slug(), "firing-the-kiln");

        input.slug = None;
        assert_eq!(input.final_slug(), "firing-the-kiln");
    }

    #[test]
    fn test_input_defaults() {
        let json = r#"{
            "title_en": "Firing the Kiln",
            "title_tr": "Fırını Yakmak",
            "content_en": "<p>...</p>",
            "content_tr": "<p>...</p>"
        }"#;
        let parsed: BlogPostInput = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.category, "production");
        assert!(!parsed.published);
        assert!(parsed.excerpt_en.is_empty());
    }

    fn post_input() -> BlogPostInput {
        BlogPostInput {
            slug: None,
            title_en: "Firing the Kiln".to_string(),
            title_tr: "Fırını Yakmak".to_string(),
            excerpt_en: String::new(),
            excerpt_tr: String::new(),
            content_en: "<p>...</p>".to_string(),
            content_tr: "<p>...</p>".to_string(),
            cover_image: String::new(),
            category: "production".to_string(),
            published: false,
        }
    }
}
