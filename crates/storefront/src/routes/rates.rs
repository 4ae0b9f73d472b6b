//! Exchange-rate route handlers.

use axum::{Json, extract::State};

use lunaris_core::ExchangeRates;

use crate::state::AppState;

/// The current display rates.
///
/// GET /api/exchange-rates
///
/// Always succeeds: if the store cannot be read the hardcoded fallback
/// pair is returned, since a missing rate should never block browsing.
pub async fn index(State(state): State<AppState>) -> Json<ExchangeRates> {
    Json(state.rates().current().await)
}
