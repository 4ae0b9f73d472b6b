//! Order intake write models.
//!
//! A `NewOrder` is a validated, ready-to-persist order: the checkout
//! service builds one from the raw request and the repository inserts it.
//! Line items are snapshots of the product name and price at order time,
//! deliberately decoupled from the live catalog so later price edits never
//! change what a historical order says.

use rust_decimal::Decimal;

use lunaris_core::{Currency, Email, OrderNumber, ProductId};

/// A validated order ready for insertion.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub order_number: OrderNumber,
    pub customer_name: String,
    pub customer_email: Email,
    pub customer_phone: String,
    pub customer_address: String,
    pub customer_city: String,
    pub customer_country: String,
    /// Authoritative total in the base currency.
    pub total_try: Decimal,
    /// The display currency the shopper was browsing in.
    pub currency: Currency,
    /// The converted total the shopper saw. Informational only; never used
    /// to recompute amounts owed.
    pub display_total: Decimal,
    pub notes: String,
    pub items: Vec<NewOrderItem>,
}

/// One snapshotted order line.
#[derive(Debug, Clone)]
pub struct NewOrderItem {
    /// The product at order time; kept for reference, not a live link.
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: i32,
    pub price_try: Decimal,
}
