//! Exchange-rate route handlers.

use axum::{Json, extract::State};
use serde_json::{Value, json};

use lunaris_core::ExchangeRates;

use crate::db::RateRepository;
use crate::error::{AdminError, Result};
use crate::middleware::RequireAdminAuth;
use crate::state::AppState;

/// The stored display rates, for the settings form.
///
/// GET /api/exchange-rates
pub async fn show(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
) -> Result<Json<ExchangeRates>> {
    let rates = RateRepository::new(state.pool()).get().await?;
    Ok(Json(rates))
}

/// Overwrite the display rates.
///
/// PUT /api/exchange-rates with `{"EUR": <rate>, "USD": <rate>}`
pub async fn update(
    State(state): State<AppState>,
    RequireAdminAuth(admin): RequireAdminAuth,
    Json(rates): Json<ExchangeRates>,
) -> Result<Json<Value>> {
    if rates.eur.is_sign_negative()
        || rates.usd.is_sign_negative()
        || rates.eur.is_zero()
        || rates.usd.is_zero()
    {
        return Err(AdminError::Validation(
            "rates must be positive".to_string(),
        ));
    }

    RateRepository::new(state.pool()).update(rates).await?;

    tracing::info!(
        username = %admin.username,
        eur = %rates.eur,
        usd = %rates.usd,
        "Exchange rates updated"
    );

    Ok(Json(json!({ "message": "Rates updated" })))
}
