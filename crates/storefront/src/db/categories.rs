//! Category repository for storefront navigation.

use sqlx::PgPool;

use super::RepositoryError;
use crate::models::product::Category;

/// Repository for category reads.
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
}
