//! Catalog write repository.

use sqlx::{PgPool, Postgres, Transaction};

use lunaris_core::ProductId;

use super::RepositoryError;
use crate::models::{Product, ProductInput};

/// Repository for catalog CRUD.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all products in catalog display order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let products = sqlx::query_as(
            r"
            SELECT id, category_id, name_en, name_tr, description_en, description_tr,
                   price_try, in_stock, featured, sort_order, created_at, updated_at
            FROM products
            ORDER BY sort_order ASC, created_at DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(products)
    }

    /// Get a single product and its image URLs (display order).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn get(
        &self,
        id: ProductId,
    ) -> Result<Option<(Product, Vec<String>)>, RepositoryError> {
        let product: Option<Product> = sqlx::query_as(
            r"
            SELECT id, category_id, name_en, name_tr, description_en, description_tr,
                   price_try, in_stock, featured, sort_order, created_at, updated_at
            FROM products
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        let Some(product) = product else {
            return Ok(None);
        };

        let images: Vec<String> = sqlx::query_scalar(
            r"
            SELECT image_url FROM product_images
            WHERE product_id = $1
            ORDER BY is_primary DESC, sort_order ASC
            ",
        )
        .bind(id)
        .fetch_all(self.pool)
        .await?;

        Ok(Some((product, images)))
    }

    /// Create a product with its images.
    ///
    /// The first image URL becomes the primary image.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if any insert fails.
    pub async fn create(&self, input: &ProductInput) -> Result<ProductId, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let id: i32 = sqlx::query_scalar(
            r"
            INSERT INTO products
                (category_id, name_en, name_tr, description_en, description_tr,
                 price_try, in_stock, featured, sort_order)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id
            ",
        )
        .bind(input.category_id)
        .bind(&input.name_en)
        .bind(&input.name_tr)
        .bind(&input.description_en)
        .bind(&input.description_tr)
        .bind(input.price_try)
        .bind(input.in_stock)
        .bind(input.featured)
        .bind(input.sort_order)
        .fetch_one(&mut *tx)
        .await?;

        if let Some(images) = &input.images {
            insert_images(&mut tx, id, images).await?;
        }

        tx.commit().await?;

        Ok(ProductId::new(id))
    }

    /// Update a product; when `images` is provided they replace the
    /// existing set wholesale.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the product doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        id: ProductId,
        input: &ProductInput,
    ) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r"
            UPDATE products SET
                category_id = $1, name_en = $2, name_tr = $3,
                description_en = $4, description_tr = $5,
                price_try = $6, in_stock = $7, featured = $8, sort_order = $9,
                updated_at = NOW()
            WHERE id = $10
            ",
        )
        .bind(input.category_id)
        .bind(&input.name_en)
        .bind(&input.name_tr)
        .bind(&input.description_en)
        .bind(&input.description_tr)
        .bind(input.price_try)
        .bind(input.in_stock)
        .bind(input.featured)
        .bind(input.sort_order)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        if let Some(images) = &input.images {
            sqlx::query("DELETE FROM product_images WHERE product_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            insert_images(&mut tx, id.as_i32(), images).await?;
        }

        tx.commit().await?;

        Ok(())
    }

    /// Delete a product (images cascade).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the product doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

/// Insert image rows for a product, first URL primary.
async fn insert_images(
    tx: &mut Transaction<'_, Postgres>,
    product_id: i32,
    images: &[String],
) -> Result<(), RepositoryError> {
    for (position, url) in images.iter().enumerate() {
        let sort_order = i32::try_from(position).unwrap_or(i32::MAX);
        sqlx::query(
            r"
            INSERT INTO product_images (product_id, image_url, is_primary, sort_order)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(product_id)
        .bind(url)
        .bind(position == 0)
        .bind(sort_order)
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}
