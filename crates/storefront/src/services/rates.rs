//! Cached display rates.
//!
//! Rates change rarely (an admin edits them by hand), so the storefront
//! reads them through a small in-memory cache instead of hitting the
//! store on every price render. A stale entry only affects display
//! prices; settlement always uses the TRY total.

use std::time::Duration;

use moka::future::Cache;
use sqlx::PgPool;

use lunaris_core::ExchangeRates;

use crate::db::RateRepository;

/// How long a fetched rate pair is served before re-reading the store.
const RATE_TTL: Duration = Duration::from_secs(300);

/// Store-backed rate lookup with an in-memory TTL cache.
///
/// Cheaply cloneable; the cache is shared between clones.
#[derive(Clone)]
pub struct RateService {
    pool: PgPool,
    cache: Cache<(), ExchangeRates>,
}

impl RateService {
    /// Create a new rate service over a connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        let cache = Cache::builder()
            .max_capacity(1)
            .time_to_live(RATE_TTL)
            .build();

        Self { pool, cache }
    }

    /// The current display rates.
    ///
    /// Served from cache when fresh; otherwise read from the store. If
    /// the read fails the hardcoded fallback pair is returned (and not
    /// cached, so the next call retries the store).
    pub async fn current(&self) -> ExchangeRates {
        let pool = self.pool.clone();
        let fetched = self
            .cache
            .try_get_with((), async move { RateRepository::new(&pool).get().await })
            .await;

        match fetched {
            Ok(rates) => rates,
            Err(err) => {
                tracing::warn!(error = %err, "Failed to load exchange rates, using fallback");
                ExchangeRates::FALLBACK
            }
        }
    }
}
