//! Order management route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Value, json};

use lunaris_core::OrderId;

use crate::db::OrderRepository;
use crate::error::{AdminError, Result};
use crate::middleware::RequireAdminAuth;
use crate::models::{Order, OrderUpdate};
use crate::state::AppState;

/// List all orders with items embedded, newest first.
///
/// GET /api/orders
pub async fn index(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
) -> Result<Json<Vec<Order>>> {
    let orders = OrderRepository::new(state.pool()).list().await?;
    Ok(Json(orders))
}

/// Get a single order.
///
/// GET /api/orders/{id}
pub async fn show(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
    Path(id): Path<i32>,
) -> Result<Json<Order>> {
    let order = OrderRepository::new(state.pool())
        .get(OrderId::new(id))
        .await?
        .ok_or_else(|| AdminError::NotFound("Order".to_string()))?;

    Ok(Json(order))
}

/// Apply a partial update to an order.
///
/// PUT /api/orders/{id} with `{status?, payment_status?, notes?}`
pub async fn update(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
    Path(id): Path<i32>,
    Json(update): Json<OrderUpdate>,
) -> Result<Json<Value>> {
    if update.is_empty() {
        return Err(AdminError::Validation("No updates provided".to_string()));
    }

    OrderRepository::new(state.pool())
        .update(OrderId::new(id), &update)
        .await?;

    Ok(Json(json!({ "message": "Order updated" })))
}
