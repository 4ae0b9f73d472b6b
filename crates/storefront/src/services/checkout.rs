//! Checkout validation and order assembly.
//!
//! Takes the raw order submission (customer form + cart snapshot), checks
//! the invariants the storefront promises, and produces a [`NewOrder`]
//! with a freshly generated order number. Everything here is pure so it
//! can be tested without a database.

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use lunaris_core::{Currency, Email, EmailError, OrderNumber, ProductId};

use crate::models::{NewOrder, NewOrderItem};

/// Errors produced by order validation.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// A required customer field is empty.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// The customer email is malformed.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// The submitted cart has no items.
    #[error("cart is empty")]
    EmptyCart,

    /// A line item has a non-positive quantity.
    #[error("item quantity must be positive")]
    InvalidQuantity,

    /// The submitted total is negative.
    #[error("total cannot be negative")]
    NegativeTotal,
}

/// The raw order submission from the checkout page.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderRequest {
    pub customer_name: String,
    pub customer_email: String,
    #[serde(default)]
    pub customer_phone: String,
    pub customer_address: String,
    pub customer_city: String,
    pub customer_country: String,
    pub items: Vec<OrderItemRequest>,
    /// Cart total in TRY; the authoritative amount.
    pub total_try: Decimal,
    /// The display currency the shopper was browsing in.
    pub currency: Currency,
    /// The converted total shown at checkout. Informational only.
    pub display_total: Decimal,
    #[serde(default)]
    pub notes: String,
}

/// One cart line as submitted at checkout.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderItemRequest {
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: i64,
    pub price_try: Decimal,
}

/// Validate a submission and assemble a persistable order.
///
/// Required fields must be non-empty after trimming, the email must be
/// well-formed, and the cart must contain at least one line with a
/// positive quantity. A new order number is generated on every call.
///
/// # Errors
///
/// Returns a [`CheckoutError`] describing the first failed check.
pub fn build_order(request: CreateOrderRequest) -> Result<NewOrder, CheckoutError> {
    let customer_name = required(&request.customer_name, "customer_name")?;
    let email_input = required(&request.customer_email, "customer_email")?;
    let customer_address = required(&request.customer_address, "customer_address")?;
    let customer_city = required(&request.customer_city, "customer_city")?;
    let customer_country = required(&request.customer_country, "customer_country")?;

    let customer_email = Email::parse(&email_input)?;

    if request.items.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }
    if request.total_try.is_sign_negative() || request.display_total.is_sign_negative() {
        return Err(CheckoutError::NegativeTotal);
    }

    let mut items = Vec::with_capacity(request.items.len());
    for item in request.items {
        if item.quantity <= 0 {
            return Err(CheckoutError::InvalidQuantity);
        }
        let quantity = i32::try_from(item.quantity).map_err(|_| CheckoutError::InvalidQuantity)?;

        items.push(NewOrderItem {
            product_id: item.product_id,
            product_name: item.product_name,
            quantity,
            price_try: item.price_try,
        });
    }

    Ok(NewOrder {
        order_number: OrderNumber::generate(),
        customer_name,
        customer_email,
        customer_phone: request.customer_phone.trim().to_owned(),
        customer_address,
        customer_city,
        customer_country,
        total_try: request.total_try,
        currency: request.currency,
        display_total: request.display_total,
        notes: request.notes,
        items,
    })
}

/// Trim a required field, rejecting empty values.
fn required(value: &str, field: &'static str) -> Result<String, CheckoutError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CheckoutError::MissingField(field));
    }
    Ok(trimmed.to_owned())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn valid_request() -> CreateOrderRequest {
        CreateOrderRequest {
            customer_name: "Ayşe Yılmaz".to_string(),
            customer_email: "ayse@example.com".to_string(),
            customer_phone: "+90 555 000 0000".to_string(),
            customer_address: "Çamlık Sok. 12".to_string(),
            customer_city: "İzmir".to_string(),
            customer_country: "Türkiye".to_string(),
            items: vec![
                OrderItemRequest {
                    product_id: ProductId::new(1),
                    product_name: "Moon Vase".to_string(),
                    quantity: 2,
                    price_try: dec("450"),
                },
                OrderItemRequest {
                    product_id: ProductId::new(2),
                    product_name: "Crater Bowl".to_string(),
                    quantity: 1,
                    price_try: dec("680"),
                },
            ],
            total_try: dec("1580"),
            currency: Currency::Eur,
            display_total: dec("44.24"),
            notes: String::new(),
        }
    }

    #[test]
    fn test_valid_request_builds_order() {
        let order = build_order(valid_request()).unwrap();

        assert_eq!(order.customer_name, "Ayşe Yılmaz");
        assert_eq!(order.customer_email.as_str(), "ayse@example.com");
        assert_eq!(order.total_try, dec("1580"));
        assert_eq!(order.currency, Currency::Eur);
        assert_eq!(order.display_total, dec("44.24"));
        assert_eq!(order.items.len(), 2);

        // Line items are snapshots of what was submitted
        assert_eq!(order.items[0].product_name, "Moon Vase");
        assert_eq!(order.items[0].quantity, 2);
        assert_eq!(order.items[0].price_try, dec("450"));
    }

    #[test]
    fn test_order_number_matches_pattern() {
        let order = build_order(valid_request()).unwrap();
        // LC + yymm + 6 uppercase alphanumerics
        assert!(OrderNumber::parse(order.order_number.as_str()).is_ok());
    }

    #[test]
    fn test_each_order_gets_fresh_number() {
        let first = build_order(valid_request()).unwrap();
        let second = build_order(valid_request()).unwrap();
        // Not guaranteed distinct in general, but 36^6 makes a collision
        // in a two-sample test vanishingly unlikely
        assert_ne!(first.order_number, second.order_number);
    }

    #[test]
    fn test_missing_required_fields() {
        for field in [
            "customer_name",
            "customer_email",
            "customer_address",
            "customer_city",
            "customer_country",
        ] {
            let mut request = valid_request();
            match field {
                "customer_name" => request.customer_name = "   ".to_string(),
                "customer_email" => request.customer_email = String::new(),
                "customer_address" => request.customer_address = String::new(),
                "customer_city" => request.customer_city = String::new(),
                "customer_country" => request.customer_country = String::new(),
                _ => unreachable!(),
            }
            let err = build_order(request).unwrap_err();
            assert!(
                matches!(err, CheckoutError::MissingField(f) if f == field),
                "expected MissingField({field}), got {err:?}"
            );
        }
    }

    #[test]
    fn test_invalid_email() {
        let mut request = valid_request();
        request.customer_email = "not-an-email".to_string();
        assert!(matches!(
            build_order(request),
            Err(CheckoutError::InvalidEmail(_))
        ));
    }

    #[test]
    fn test_empty_cart_rejected() {
        let mut request = valid_request();
        request.items.clear();
        assert!(matches!(build_order(request), Err(CheckoutError::EmptyCart)));
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let mut request = valid_request();
        request.items[0].quantity = 0;
        assert!(matches!(
            build_order(request),
            Err(CheckoutError::InvalidQuantity)
        ));
    }

    #[test]
    fn test_negative_total_rejected() {
        let mut request = valid_request();
        request.total_try = dec("-1");
        assert!(matches!(
            build_order(request),
            Err(CheckoutError::NegativeTotal)
        ));
    }

    #[test]
    fn test_fields_are_trimmed() {
        let mut request = valid_request();
        request.customer_name = "  Ayşe Yılmaz  ".to_string();
        let order = build_order(request).unwrap();
        assert_eq!(order.customer_name, "Ayşe Yılmaz");
    }
}
