//! Category repository.

use sqlx::PgPool;

use lunaris_core::CategoryId;

use super::RepositoryError;
use crate::models::{Category, CategoryInput};

/// Repository for category reads and writes.
pub struct CategoryRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryRepository<'a> {
    /// Create a new category repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all categories in display order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Category>, RepositoryError> {
        let categories = sqlx::query_as(
            r"
            SELECT id, name_en, name_tr, slug, image, sort_order
            FROM categories
            ORDER BY sort_order ASC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(categories)
    }

    /// Create a new category.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the slug already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(&self, input: &CategoryInput) -> Result<CategoryId, RepositoryError> {
        let id: i32 = sqlx::query_scalar(
            r"
            INSERT INTO categories (name_en, name_tr, slug, image, sort_order)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            ",
        )
        .bind(&input.name_en)
        .bind(&input.name_tr)
        .bind(&input.slug)
        .bind(&input.image)
        .bind(input.sort_order)
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

        Ok(CategoryId::new(id))
    }
}
