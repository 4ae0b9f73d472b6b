//! Order intake route handlers.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

use crate::db::OrderRepository;
use crate::error::Result;
use crate::services::checkout::{self, CreateOrderRequest};
use crate::state::AppState;

/// Submit an order.
///
/// POST /api/orders
///
/// Validates the customer form and cart snapshot, generates an order
/// number, and persists the order with its line items in one
/// transaction. The client clears its cart on a 201 response.
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateOrderRequest>,
) -> Result<impl IntoResponse> {
    let order = checkout::build_order(request)?;

    let order_id = OrderRepository::new(state.pool()).create(&order).await?;

    tracing::info!(
        order_id = %order_id,
        order_number = %order.order_number,
        "Order created"
    );

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "id": order_id,
            "order_number": order.order_number,
            "message": "Order created successfully",
        })),
    ))
}
