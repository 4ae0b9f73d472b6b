//! Catalog models for the back office.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use lunaris_core::{CategoryId, ProductId};

/// A product row as the back office lists it.
///
/// The admin table view doesn't need the category join or images the
/// storefront embeds; edit forms load images separately.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
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
}

/// Payload for creating or updating a product.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductInput {
    pub category_id: CategoryId,
    pub name_en: String,
    pub name_tr: String,
    #[serde(default)]
    pub description_en: String,
    #[serde(default)]
    pub description_tr: String,
    pub price_try: Decimal,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub sort_order: i32,
    /// Image URLs in display order; the first becomes the primary image.
    /// On update, `None` leaves the existing images untouched while
    /// `Some(..)` replaces them wholesale.
    pub images: Option<Vec<String>>,
}

const fn default_in_stock() -> bool {
    true
}

impl ProductInput {
    /// Field-level validation.
    ///
    /// # Errors
    ///
    /// Returns a message naming the first invalid field.
    pub fn validate(&self) -> Result<(), String> {
        if self.name_en.trim().is_empty() {
            return Err("name_en is required".to_string());
        }
        if self.name_tr.trim().is_empty() {
            return Err("name_tr is required".to_string());
        }
        if self.price_try.is_sign_negative() {
            return Err("price_try cannot be negative".to_string());
        }
        Ok(())
    }
}

/// A product category.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Category {
    pub id: CategoryId,
    pub name_en: String,
    pub name_tr: String,
    pub slug: String,
    pub image: Option<String>,
    pub sort_order: i32,
}

/// Payload for creating a category.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryInput {
    pub name_en: String,
    pub name_tr: String,
    pub slug: String,
    pub image: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
}

impl CategoryInput {
    /// Field-level validation.
    ///
    /// # Errors
    ///
    /// Returns a message naming the first invalid field.
    pub fn validate(&self) -> Result<(), String> {
        if self.name_en.trim().is_empty() {
            return Err("name_en is required".to_string());
        }
        if self.name_tr.trim().is_empty() {
            return Err("name_tr is required".to_string());
        }
        if self.slug.trim().is_empty() {
            return Err("slug is required".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn input() -> ProductInput {
        ProductInput {
            category_id: CategoryId::new(1),
            name_en: "Moon Vase".to_string(),
            name_tr: "Ay Vazosu".to_string(),
            description_en: String::new(),
            description_tr: String::new(),
            price_try: Decimal::from(450),
            in_stock: true,
            featured: false,
            sort_order: 0,
            images: None,
        }
    }

    #[test]
    fn test_valid_input() {
        assert!(input().validate().is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut i = input();
        i.name_en = "  ".to_string();
        assert_eq!(i.validate().unwrap_err(), "name_en is required");
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut i = input();
        i.price_try = Decimal::from(-1);
        assert!(i.validate().is_err());
    }

    #[test]
    fn test_input_defaults() {
        // in_stock defaults on, featured off, images untouched
        let json = r#"{
            "category_id": 1,
            "name_en": "Moon Vase",
            "name_tr": "Ay Vazosu",
            "price_try": "450"
        }"#;
        let parsed: ProductInput = serde_json::from_str(json).unwrap();
        assert!(parsed.in_stock);
        assert!(!parsed.featured);
        assert!(parsed.images.is_none());
    }
}
