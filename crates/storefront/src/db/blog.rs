//! Blog repository for published-post reads.

use sqlx::PgPool;

use super::RepositoryError;
use crate::models::BlogPost;

const POST_SELECT: &str = r"
    SELECT id, slug, title_en, title_tr, excerpt_en, excerpt_tr,
           content_en, content_tr, cover_image, category, published,
           created_at, updated_at
    FROM blog_posts
";

/// Repository for public blog reads.
///
/// Only published posts are visible here; drafts exist solely on the
/// admin side.
pub struct BlogRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> BlogRepository<'a> {
    /// Create a new blog repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List published posts, newest first, optionally by category tag.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_published(
        &self,
        category: Option<&str>,
    ) -> Result<Vec<BlogPost>, RepositoryError> {
        let sql = format!(
            "{POST_SELECT}
             WHERE published AND ($1::text IS NULL OR category = $1)
             ORDER BY created_at DESC"
        );

        let posts = sqlx::query_as(&sql)
            .bind(category)
            .fetch_all(self.pool)
            .await?;

        Ok(posts)
    }

    /// Get a published post by slug.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_published_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<BlogPost>, RepositoryError> {
        let sql = format!("{POST_SELECT} WHERE slug = $1 AND published");

        let post = sqlx::query_as(&sql)
            .bind(slug)
            .fetch_optional(self.pool)
            .await?;

        Ok(post)
    }
}
