//! Catalog read models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use lunaris_core::{CategoryId, ProductId, ProductImageId};

/// A catalog product with its images and category, as served to shoppers.
///
/// All shopper-visible text is bilingual (English/Turkish); the client
/// picks the field for its locale. `price_try` is the base-currency price;
/// display-currency conversion happens client-side with the published
/// rates.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub category_id: CategoryId,
    pub name_en: String,
    pub name_tr: String,
    pub description_en: String,
    pub description_tr: String,
    pub price_try: Decimal,
    pub in_stock: bool,
    pub featured: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// The product's category, if it still exists.
    pub category: Option<CategorySummary>,
    /// Images ordered primary-first, then by sort order.
    pub images: Vec<ProductImage>,
}

impl Product {
    /// The image flagged as the representative thumbnail, if any.
    ///
    /// Falls back to the first image when none is flagged.
    #[must_use]
    pub fn primary_image(&self) -> Option<&ProductImage> {
        self.images
            .iter()
            .find(|i| i.is_primary)
            .or_else(|| self.images.first())
    }
}

/// One image of a product.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ProductImage {
    pub id: ProductImageId,
    pub product_id: ProductId,
    pub image_url: String,
    pub is_primary: bool,
    pub sort_order: i32,
}

/// The category fields embedded in a product response.
#[derive(Debug, Clone, Serialize)]
pub struct CategorySummary {
    pub id: CategoryId,
    pub name_en: String,
    pub name_tr: String,
    pub slug: String,
}

/// A product category, as served by `GET /api/categories`.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Category {
    pub id: CategoryId,
    pub name_en: String,
    pub name_tr: String,
    pub slug: String,
    pub image: Option<String>,
    pub sort_order: i32,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn image(id: i32, is_primary: bool) -> ProductImage {
        ProductImage {
            id: ProductImageId::new(id),
            product_id: ProductId::new(1),
            image_url: format!("/uploads/p{id}.webp"),
            is_primary,
            sort_order: id,
        }
    }

    fn product(images: Vec<ProductImage>) -> Product {
        Product {
            id: ProductId::new(1),
            category_id: CategoryId::new(1),
            name_en: "Moon Vase".to_string(),
            name_tr: "Ay Vazosu".to_string(),
            description_en: String::new(),
            description_tr: String::new(),
            price_try: Decimal::from(450),
            in_stock: true,
            featured: false,
            sort_order: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            category: None,
            images,
        }
    }

    #[test]
    fn test_primary_image_prefers_flag() {
        let p = product(vec![image(1, false), image(2, true)]);
        assert_eq!(p.primary_image().unwrap().id, ProductImageId::new(2));
    }

    #[test]
    fn test_primary_image_falls_back_to_first() {
        let p = product(vec![image(1, false), image(2, false)]);
        assert_eq!(p.primary_image().unwrap().id, ProductImageId::new(1));
    }

    #[test]
    fn test_primary_image_empty() {
        assert!(product(vec![]).primary_image().is_none());
    }
}
