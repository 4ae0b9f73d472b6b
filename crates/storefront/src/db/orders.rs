//! Order intake repository.

use sqlx::PgPool;

use lunaris_core::OrderId;

use super::RepositoryError;
use crate::models::NewOrder;

/// Repository for persisting shopper orders.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert an order and its line items in a single transaction.
    ///
    /// Either the order and every line item land together, or nothing
    /// does; a failed item insert can never leave a visible order with
    /// missing lines.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if any insert fails.
    pub async fn create(&self, order: &NewOrder) -> Result<OrderId, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let order_id: i32 = sqlx::query_scalar(
            r"
            INSERT INTO orders
                (order_number, customer_name, customer_email, customer_phone,
                 customer_address, customer_city, customer_country,
                 total_try, currency, display_total, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id
            ",
        )
        .bind(&order.order_number)
        .bind(&order.customer_name)
        .bind(&order.customer_email)
        .bind(&order.customer_phone)
        .bind(&order.customer_address)
        .bind(&order.customer_city)
        .bind(&order.customer_country)
        .bind(order.total_try)
        .bind(order.currency)
        .bind(order.display_total)
        .bind(&order.notes)
        .fetch_one(&mut *tx)
        .await?;

        for item in &order.items {
            sqlx::query(
                r"
                INSERT INTO order_items
                    (order_id, product_id, product_name, quantity, price_try)
                VALUES ($1, $2, $3, $4, $5)
                ",
            )
            .bind(order_id)
            .bind(item.product_id)
            .bind(&item.product_name)
            .bind(item.quantity)
            .bind(item.price_try)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(OrderId::new(order_id))
    }
}
