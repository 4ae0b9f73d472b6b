//! Order management repository.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use lunaris_core::{
    Currency, OrderId, OrderNumber, OrderStatus, PaymentMethod, PaymentStatus,
};

use super::RepositoryError;
use crate::models::{Order, OrderItem, OrderUpdate};

/// Raw order row without its items.
#[derive(sqlx::FromRow)]
struct OrderRow {
    id: OrderId,
    order_number: OrderNumber,
    customer_name: String,
    customer_email: String,
    customer_phone: String,
    customer_address: String,
    customer_city: String,
    customer_country: String,
    total_try: Decimal,
    currency: Currency,
    display_total: Decimal,
    status: OrderStatus,
    payment_method: PaymentMethod,
    payment_status: PaymentStatus,
    notes: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl OrderRow {
    fn into_order(self, items: Vec<OrderItem>) -> Order {
        Order {
            id: self.id,
            order_number: self.order_number,
            customer_name: self.customer_name,
            customer_email: self.customer_email,
            customer_phone: self.customer_phone,
            customer_address: self.customer_address,
            customer_city: self.customer_city,
            customer_country: self.customer_country,
            total_try: self.total_try,
            currency: self.currency,
            display_total: self.display_total,
            status: self.status,
            payment_method: self.payment_method,
            payment_status: self.payment_status,
            notes: self.notes,
            created_at: self.created_at,
            updated_at: self.updated_at,
            items,
        }
    }
}

const ORDER_SELECT: &str = r"
    SELECT id, order_number, customer_name, customer_email, customer_phone,
           customer_address, customer_city, customer_country,
           total_try, currency, display_total,
           status, payment_method, payment_status, notes,
           created_at, updated_at
    FROM orders
";

/// Repository for order reads and status updates.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all orders with items embedded, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn list(&self) -> Result<Vec<Order>, RepositoryError> {
        let sql = format!("{ORDER_SELECT} ORDER BY created_at DESC");

        let rows: Vec<OrderRow> = sqlx::query_as(&sql).fetch_all(self.pool).await?;

        let ids: Vec<i32> = rows.iter().map(|r| r.id.as_i32()).collect();
        let mut items = self.items_for(&ids).await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let order_items = items.remove(&row.id).unwrap_or_default();
                row.into_order(order_items)
            })
            .collect())
    }

    /// Get a single order with its items.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn get(&self, id: OrderId) -> Result<Option<Order>, RepositoryError> {
        let sql = format!("{ORDER_SELECT} WHERE id = $1");

        let row: Option<OrderRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut items = self.items_for(&[id.as_i32()]).await?;
        let order_items = items.remove(&id).unwrap_or_default();

        Ok(Some(row.into_order(order_items)))
    }

    /// Apply a partial update to an order.
    ///
    /// Absent fields keep their stored value via `COALESCE`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the order doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(&self, id: OrderId, update: &OrderUpdate) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE orders SET
                status = COALESCE($1, status),
                payment_status = COALESCE($2, payment_status),
                notes = COALESCE($3, notes),
                updated_at = NOW()
            WHERE id = $4
            ",
        )
        .bind(update.status)
        .bind(update.payment_status)
        .bind(&update.notes)
        .bind(id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Fetch items for a set of orders, grouped by order.
    async fn items_for(
        &self,
        order_ids: &[i32],
    ) -> Result<HashMap<OrderId, Vec<OrderItem>>, RepositoryError> {
        if order_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let items: Vec<OrderItem> = sqlx::query_as(
            r"
            SELECT id, order_id, product_id, product_name, quantity, price_try
            FROM order_items
            WHERE order_id = ANY($1)
            ORDER BY id ASC
            ",
        )
        .bind(order_ids)
        .fetch_all(self.pool)
        .await?;

        let mut grouped: HashMap<OrderId, Vec<OrderItem>> = HashMap::new();
        for item in items {
            grouped.entry(item.order_id).or_default().push(item);
        }
        Ok(grouped)
    }
}
