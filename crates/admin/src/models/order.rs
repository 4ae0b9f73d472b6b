//! Order models for the back office.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use lunaris_core::{
    Currency, OrderId, OrderItemId, OrderNumber, OrderStatus, PaymentMethod, PaymentStatus,
    ProductId,
};

/// A full order with its snapshotted line items.
///
/// `total_try` is the authoritative amount owed; `display_total` is what
/// the shopper saw in their chosen currency and is informational only.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    pub id: OrderId,
    pub order_number: OrderNumber,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub customer_address: String,
    pub customer_city: String,
    pub customer_country: String,
    pub total_try: Decimal,
    pub currency: Currency,
    pub display_total: Decimal,
    pub status: OrderStatus,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub items: Vec<OrderItem>,
}

/// One snapshotted order line.
///
/// `product_name` and `price_try` are frozen copies from order time;
/// editing the live product later never changes them.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct OrderItem {
    pub id: OrderItemId,
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: i32,
    pub price_try: Decimal,
}

/// Partial update applied by `PUT /api/orders/{id}`.
///
/// Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderUpdate {
    pub status: Option<OrderStatus>,
    pub payment_status: Option<PaymentStatus>,
    pub notes: Option<String>,
}

impl OrderUpdate {
    /// Whether the update carries no changes at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.status.is_none() && self.payment_status.is_none() && self.notes.is_none()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_update() {
        assert!(OrderUpdate::default().is_empty());

        let update = OrderUpdate {
            status: Some(OrderStatus::Shipped),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }

    #[test]
    fn test_update_deserializes_partial_payload() {
        let update: OrderUpdate = serde_json::from_str(r#"{"payment_status": "paid"}"#).unwrap();
        assert_eq!(update.payment_status, Some(PaymentStatus::Paid));
        assert!(update.status.is_none());
        assert!(update.notes.is_none());
    }
}
