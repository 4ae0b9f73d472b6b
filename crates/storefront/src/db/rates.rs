//! Exchange-rate reads.

use rust_decimal::Decimal;
use sqlx::PgPool;

use lunaris_core::ExchangeRates;

use super::RepositoryError;

/// Repository for display-rate reads.
pub struct RateRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RateRepository<'a> {
    /// Create a new rate repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Read the stored EUR/USD rates.
    ///
    /// Missing rows keep their fallback value, so a half-seeded table
    /// still yields a usable pair.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self) -> Result<ExchangeRates, RepositoryError> {
        let rows: Vec<(String, Decimal)> =
            sqlx::query_as("SELECT currency, rate FROM exchange_rates")
                .fetch_all(self.pool)
                .await?;

        let mut rates = ExchangeRates::FALLBACK;
        for (currency, rate) in rows {
            match currency.as_str() {
                "EUR" => rates.eur = rate,
                "USD" => rates.usd = rate,
                _ => {}
            }
        }

        Ok(rates)
    }
}
