//! Blog repository, drafts included.

use sqlx::PgPool;

use lunaris_core::BlogPostId;

use super::RepositoryError;
use crate::models::{BlogPost, BlogPostInput, BlogPostUpdate};

const POST_SELECT: &str = r"
    SELECT id, slug, title_en, title_tr, excerpt_en, excerpt_tr,
           content_en, content_tr, cover_image, category, published,
           created_at, updated_at
    FROM blog_posts
";

/// Repository for blog CRUD.
pub struct BlogRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> BlogRepository<'a> {
    /// Create a new blog repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all posts (drafts included), newest first, optionally by
    /// category tag.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self, category: Option<&str>) -> Result<Vec<BlogPost>, RepositoryError> {
        let sql = format!(
            "{POST_SELECT}
             WHERE ($1::text IS NULL OR category = $1)
             ORDER BY created_at DESC"
        );

        let posts = sqlx::query_as(&sql)
            .bind(category)
            .fetch_all(self.pool)
            .await?;

        Ok(posts)
    }

    /// Get a post by slug, published or not.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, RepositoryError> {
        let sql = format!("{POST_SELECT} WHERE slug = $1");

        let post = sqlx::query_as(&sql)
            .bind(slug)
            .fetch_optional(self.pool)
            .await?;

        Ok(post)
    }

    /// Create a post under the given slug.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the slug already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        slug: &str,
        input: &BlogPostInput,
    ) -> Result<BlogPostId, RepositoryError> {
        let id: i32 = sqlx::query_scalar(
            r"
            INSERT INTO blog_posts
                (slug, title_en, title_tr, excerpt_en, excerpt_tr,
                 content_en, content_tr, cover_image, category, published)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id
            ",
        )
        .bind(slug)
        .bind(&input.title_en)
        .bind(&input.title_tr)
        .bind(&input.excerpt_en)
        .bind(&input.excerpt_tr)
        .bind(&input.content_en)
        .bind(&input.content_tr)
        .bind(&input.cover_image)
        .bind(&input.category)
        .bind(input.published)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("slug already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        Ok(BlogPostId::new(id))
    }

    /// Replace a post's fields, optionally renaming its slug.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the slug doesn't exist.
    /// Returns `RepositoryError::Conflict` if `new_slug` is taken.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(&self, slug: &str, update: &BlogPostUpdate) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE blog_posts SET
                title_en = $1, title_tr = $2,
                excerpt_en = $3, excerpt_tr = $4,
                content_en = $5, content_tr = $6,
                cover_image = $7, category = $8, published = $9,
                slug = COALESCE($10, slug),
                updated_at = NOW()
            WHERE slug = $11
            ",
        )
        .bind(&update.title_en)
        .bind(&update.title_tr)
        .bind(&update.excerpt_en)
        .bind(&update.excerpt_tr)
        .bind(&update.content_en)
        .bind(&update.content_tr)
        .bind(&update.cover_image)
        .bind(&update.category)
        .bind(update.published)
        .bind(&update.new_slug)
        .bind(slug)
        .execute(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("slug already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Delete a post by slug.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the slug doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn delete(&self, slug: &str) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM blog_posts WHERE slug = $1")
            .bind(slug)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
