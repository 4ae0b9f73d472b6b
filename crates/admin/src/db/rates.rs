//! Exchange-rate reads and writes.

use rust_decimal::Decimal;
use sqlx::PgPool;

use lunaris_core::ExchangeRates;

use super::RepositoryError;

/// Repository for display-rate management.
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

    /// Overwrite both display rates.
    ///
    /// Both rows update in one transaction so the storefront can never
    /// observe a half-applied pair.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if an update fails.
    pub async fn update(&self, rates: ExchangeRates) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await?;

        for (currency, rate) in [("EUR", rates.eur), ("USD", rates.usd)] {
            sqlx::query(
                r"
                UPDATE exchange_rates SET rate = $1, updated_at = NOW()
                WHERE currency = $2
                ",
            )
            .bind(rate)
            .bind(currency)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(())
    }
}
