//! The client-held shopping cart.
//!
//! Carts live in the shopper's browser storage, never on the server. This
//! module models the cart as an explicit value type with a small mutation
//! interface so the aggregation logic can be unit-tested without any UI
//! or HTTP machinery. Clients serialize the whole cart to durable storage
//! after each mutation and send a snapshot of it at checkout.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::ProductId;

/// Upper bound on a single line's quantity.
///
/// The store sells handmade one-off pieces; quantities beyond this are
/// either a typo or abuse, so `update_quantity` clamps to it.
pub const MAX_QUANTITY: u32 = 99;

/// One line of the cart: a product snapshot and a positive quantity.
///
/// `name` and `price_try` are copied from the product at the time it was
/// added so the cart can render without re-fetching the catalog. The
/// checkout endpoint snapshots these again into the order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: ProductId,
    pub name: String,
    pub price_try: Decimal,
    pub quantity: u32,
}

impl CartItem {
    /// Line total in TRY.
    #[must_use]
    pub fn line_total_try(&self) -> Decimal {
        self.price_try * Decimal::from(self.quantity)
    }
}

/// A shopper's cart: product lines in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add one unit of a product.
    ///
    /// If the product is already in the cart its quantity is incremented
    /// (up to [`MAX_QUANTITY`]); otherwise a new line is appended with
    /// quantity 1.
    pub fn add(&mut self, product_id: ProductId, name: &str, price_try: Decimal) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product_id) {
            item.quantity = (item.quantity + 1).min(MAX_QUANTITY);
        } else {
            self.items.push(CartItem {
                product_id,
                name: name.to_owned(),
                price_try,
                quantity: 1,
            });
        }
    }

    /// Set the quantity of a line.
    ///
    /// A quantity of zero or less removes the line. Quantities above
    /// [`MAX_QUANTITY`] are clamped. Unknown product IDs are a no-op.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove(product_id);
            return;
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX).min(MAX_QUANTITY);
        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product_id) {
            item.quantity = quantity;
        }
    }

    /// Remove a line; no-op if the product is not in the cart.
    pub fn remove(&mut self, product_id: ProductId) {
        self.items.retain(|i| i.product_id != product_id);
    }

    /// Get a line by product ID.
    #[must_use]
    pub fn get(&self, product_id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product_id == product_id)
    }

    /// All lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of distinct product lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total units across all lines (what the cart badge shows).
    #[must_use]
    pub fn total_units(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Cart total in the base currency.
    ///
    /// Line totals are summed in TRY; display-currency conversion happens
    /// afterwards, exactly once, on this sum.
    #[must_use]
    pub fn total_try(&self) -> Decimal {
        self.items.iter().map(CartItem::line_total_try).sum()
    }

    /// Empty the cart. Called by clients after a successful order.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::currency::{Currency, ExchangeRates};

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn vase() -> (ProductId, &'static str, Decimal) {
        (ProductId::new(1), "Moon Vase", Decimal::from(450))
    }

    fn bowl() -> (ProductId, &'static str, Decimal) {
        (ProductId::new(2), "Crater Bowl", Decimal::from(680))
    }

    #[test]
    fn test_empty_cart_totals_zero() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total_try(), Decimal::ZERO);

        // Zero in every display currency too
        let rates = ExchangeRates::default();
        assert_eq!(rates.convert(cart.total_try(), Currency::Eur), Decimal::ZERO);
        assert_eq!(rates.convert(cart.total_try(), Currency::Usd), Decimal::ZERO);
    }

    #[test]
    fn test_add_new_and_existing() {
        let mut cart = Cart::new();
        let (id, name, price) = vase();

        cart.add(id, name, price);
        assert_eq!(cart.get(id).unwrap().quantity, 1);

        cart.add(id, name, price);
        assert_eq!(cart.get(id).unwrap().quantity, 2);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_total_matches_sum_of_lines() {
        let mut cart = Cart::new();
        let (vid, vname, vprice) = vase();
        let (bid, bname, bprice) = bowl();

        cart.add(vid, vname, vprice);
        cart.add(vid, vname, vprice);
        cart.add(bid, bname, bprice);

        // 450 * 2 + 680 * 1 = 1580
        assert_eq!(cart.total_try(), Decimal::from(1580));
        assert_eq!(cart.total_units(), 3);
    }

    #[test]
    fn test_total_is_insertion_order_independent() {
        let (vid, vname, vprice) = vase();
        let (bid, bname, bprice) = bowl();

        let mut forward = Cart::new();
        forward.add(vid, vname, vprice);
        forward.add(bid, bname, bprice);
        forward.update_quantity(vid, 2);

        let mut reverse = Cart::new();
        reverse.add(bid, bname, bprice);
        reverse.add(vid, vname, vprice);
        reverse.update_quantity(vid, 2);

        assert_eq!(forward.total_try(), reverse.total_try());
    }

    #[test]
    fn test_display_total_scenario() {
        // Cart [{450, qty 2}, {680, qty 1}] at EUR=0.028 -> €44.24
        let mut cart = Cart::new();
        let (vid, vname, vprice) = vase();
        let (bid, bname, bprice) = bowl();
        cart.add(vid, vname, vprice);
        cart.update_quantity(vid, 2);
        cart.add(bid, bname, bprice);

        let rates = ExchangeRates {
            eur: dec("0.028"),
            usd: dec("0.030"),
        };
        assert_eq!(cart.total_try(), Decimal::from(1580));
        assert_eq!(rates.convert(cart.total_try(), Currency::Eur), dec("44.24"));
        assert_eq!(rates.display(cart.total_try(), Currency::Eur), "€44.24");
    }

    #[test]
    fn test_update_quantity_zero_removes() {
        let mut cart = Cart::new();
        let (id, name, price) = vase();
        cart.add(id, name, price);

        cart.update_quantity(id, 0);
        assert!(cart.get(id).is_none());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_negative_removes() {
        let mut cart = Cart::new();
        let (id, name, price) = vase();
        cart.add(id, name, price);

        cart.update_quantity(id, -3);
        assert!(cart.get(id).is_none());
    }

    #[test]
    fn test_update_quantity_sets_and_clamps() {
        let mut cart = Cart::new();
        let (id, name, price) = vase();
        cart.add(id, name, price);

        cart.update_quantity(id, 5);
        assert_eq!(cart.get(id).unwrap().quantity, 5);

        cart.update_quantity(id, 10_000);
        assert_eq!(cart.get(id).unwrap().quantity, MAX_QUANTITY);
    }

    #[test]
    fn test_update_quantity_unknown_product_is_noop() {
        let mut cart = Cart::new();
        cart.update_quantity(ProductId::new(99), 3);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut cart = Cart::new();
        let (id, name, price) = vase();
        cart.add(id, name, price);

        cart.remove(id);
        assert!(cart.is_empty());
        cart.remove(id);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear_leaves_empty_cart() {
        let mut cart = Cart::new();
        let (vid, vname, vprice) = vase();
        let (bid, bname, bprice) = bowl();
        cart.add(vid, vname, vprice);
        cart.add(bid, bname, bprice);

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_try(), Decimal::ZERO);
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut cart = Cart::new();
        let (id, name, price) = vase();
        cart.add(id, name, price);
        cart.update_quantity(id, 2);

        let json = serde_json::to_string(&cart).unwrap();
        let restored: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, cart);
        assert_eq!(restored.total_try(), Decimal::from(900));
    }
}
