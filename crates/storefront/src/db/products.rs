//! Catalog repository for the public product listing and detail reads.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use lunaris_core::{CategoryId, ProductId};

use super::RepositoryError;
use crate::models::product::{CategorySummary, Product, ProductImage};

/// Filters for the product listing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductFilter {
    /// Only products in this category.
    pub category: Option<CategoryId>,
    /// Only products flagged as featured.
    pub featured: bool,
}

/// Raw product row with its category joined in.
#[derive(sqlx::FromRow)]
struct ProductRow {
    id: ProductId,
    category_id: CategoryId,
    name_en: String,
    name_tr: String,
    description_en: String,
    description_tr: String,
    price_try: Decimal,
    in_stock: bool,
    featured: bool,
    sort_order: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    category_name_en: Option<String>,
    category_name_tr: Option<String>,
    category_slug: Option<String>,
}

impl ProductRow {
    fn into_product(self, images: Vec<ProductImage>) -> Product {
        let category = match (
            self.category_name_en,
            self.category_name_tr,
            self.category_slug,
        ) {
            (Some(name_en), Some(name_tr), Some(slug)) => Some(CategorySummary {
                id: self.category_id,
                name_en,
                name_tr,
                slug,
            }),
            _ => None,
        };

        Product {
            id: self.id,
            category_id: self.category_id,
            name_en: self.name_en,
            name_tr: self.name_tr,
            description_en: self.description_en,
            description_tr: self.description_tr,
            price_try: self.price_try,
            in_stock: self.in_stock,
            featured: self.featured,
            sort_order: self.sort_order,
            created_at: self.created_at,
            updated_at: self.updated_at,
            category,
            images,
        }
    }
}

const PRODUCT_SELECT: &str = r"
    SELECT p.id, p.category_id, p.name_en, p.name_tr,
           p.description_en, p.description_tr,
           p.price_try, p.in_stock, p.featured, p.sort_order,
           p.created_at, p.updated_at,
           c.name_en AS category_name_en,
           c.name_tr AS category_name_tr,
           c.slug AS category_slug
    FROM products p
    LEFT JOIN categories c ON p.category_id = c.id
";

/// Repository for catalog reads.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List products, optionally filtered by category and featured flag.
    ///
    /// Ordered by `sort_order`, then newest first. Images are fetched in a
    /// single batch and attached primary-first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn list(&self, filter: ProductFilter) -> Result<Vec<Product>, RepositoryError> {
        let sql = format!(
            "{PRODUCT_SELECT}
             WHERE ($1::int IS NULL OR p.category_id = $1)
               AND (NOT $2 OR p.featured)
             ORDER BY p.sort_order ASC, p.created_at DESC"
        );

        let rows: Vec<ProductRow> = sqlx::query_as(&sql)
            .bind(filter.category.map(|c| c.as_i32()))
            .bind(filter.featured)
            .fetch_all(self.pool)
            .await?;

        let ids: Vec<i32> = rows.iter().map(|r| r.id.as_i32()).collect();
        let mut images = self.images_for(&ids).await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let product_images = images.remove(&row.id).unwrap_or_default();
                row.into_product(product_images)
            })
            .collect())
    }

    /// Get a single product with its images.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let sql = format!("{PRODUCT_SELECT} WHERE p.id = $1");

        let row: Option<ProductRow> = sqlx::query_as(&sql)
            .bind(id.as_i32())
            .fetch_optional(self.pool)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut images = self.images_for(&[id.as_i32()]).await?;
        let product_images = images.remove(&id).unwrap_or_default();

        Ok(Some(row.into_product(product_images)))
    }

    /// Fetch images for a set of products, grouped by product.
    ///
    /// Within each product, images come back primary-first, then by sort
    /// order, so the first image is always the thumbnail.
    async fn images_for(
        &self,
        product_ids: &[i32],
    ) -> Result<HashMap<ProductId, Vec<ProductImage>>, RepositoryError> {
        if product_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let images: Vec<ProductImage> = sqlx::query_as(
            r"
            SELECT id, product_id, image_url, is_primary, sort_order
            FROM product_images
            WHERE product_id = ANY($1)
            ORDER BY is_primary DESC, sort_order ASC
            ",
        )
        .bind(product_ids)
        .fetch_all(self.pool)
        .await?;

        let mut grouped: HashMap<ProductId, Vec<ProductImage>> = HashMap::new();
        for image in images {
            grouped.entry(image.product_id).or_default().push(image);
        }
        Ok(grouped)
    }
}
