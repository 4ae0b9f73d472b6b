//! Human-readable order references.
//!
//! Order numbers double as the bank-transfer payment reference, so they
//! need to be short enough to type and unambiguous enough to match. The
//! format is `LC` + two-digit year + two-digit month + six random
//! uppercase alphanumerics, e.g. `LC2608K3F9ZQ`.
//!
//! The random suffix makes collisions unlikely but does not guarantee
//! uniqueness; nothing checks existing orders before insert.

use chrono::{DateTime, Datelike, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing an [`OrderNumber`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderNumberError {
    /// The value does not start with the `LC` prefix.
    #[error("order number must start with {}", OrderNumber::PREFIX)]
    BadPrefix,
    /// The value has the wrong length.
    #[error("order number must be {} characters", OrderNumber::LENGTH)]
    BadLength,
    /// The year/month digits are not numeric.
    #[error("order number date digits must be numeric")]
    BadDate,
    /// The suffix contains characters outside `[0-9A-Z]`.
    #[error("order number suffix must be uppercase alphanumeric")]
    BadSuffix,
}

/// A generated order reference like `LC2608K3F9ZQ`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderNumber(String);

impl OrderNumber {
    /// Fixed prefix on every order number.
    pub const PREFIX: &'static str = "LC";
    /// Length of the random suffix.
    pub const SUFFIX_LENGTH: usize = 6;
    /// Total length: prefix + yymm + suffix.
    pub const LENGTH: usize = 2 + 4 + Self::SUFFIX_LENGTH;

    const SUFFIX_CHARSET: &'static [u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

    /// Generate an order number for the current month.
    #[must_use]
    pub fn generate() -> Self {
        Self::generate_at(Utc::now(), &mut rand::rng())
    }

    /// Generate an order number for a given instant with a given RNG.
    ///
    /// Split out from [`generate`](Self::generate) so tests can pin both
    /// the date and the randomness.
    #[must_use]
    pub fn generate_at<R: Rng + ?Sized>(now: DateTime<Utc>, rng: &mut R) -> Self {
        let year = now.year().rem_euclid(100);
        let month = now.month();
        let suffix: String = (0..Self::SUFFIX_LENGTH)
            .map(|_| {
                let idx = rng.random_range(0..Self::SUFFIX_CHARSET.len());
                char::from(Self::SUFFIX_CHARSET[idx])
            })
            .collect();

        Self(format!("{}{year:02}{month:02}{suffix}", Self::PREFIX))
    }

    /// Parse and validate an order number.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not match
    /// `LC<2-digit year><2-digit month><6 uppercase alphanumerics>`.
    pub fn parse(s: &str) -> Result<Self, OrderNumberError> {
        if s.len() != Self::LENGTH {
            return Err(OrderNumberError::BadLength);
        }
        let rest = s
            .strip_prefix(Self::PREFIX)
            .ok_or(OrderNumberError::BadPrefix)?;

        let (date, suffix) = rest.split_at(4);
        if !date.chars().all(|c| c.is_ascii_digit()) {
            return Err(OrderNumberError::BadDate);
        }
        if !suffix
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        {
            return Err(OrderNumberError::BadSuffix);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the order number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `OrderNumber` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for OrderNumber {
    type Err = OrderNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// SQLx support (with postgres feature)
#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for OrderNumber {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for OrderNumber {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <String as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        // Database values are assumed valid
        Ok(Self(s))
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for OrderNumber {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <String as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_generate_shape() {
        let now = Utc.with_ymd_and_hms(2026, 8, 7, 12, 0, 0).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let number = OrderNumber::generate_at(now, &mut rng);

        let s = number.as_str();
        assert_eq!(s.len(), OrderNumber::LENGTH);
        assert!(s.starts_with("LC2608"));
        assert!(
            s.chars()
                .skip(6)
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        );
    }

    #[test]
    fn test_generate_pads_single_digit_month() {
        let now = Utc.with_ymd_and_hms(2027, 1, 15, 0, 0, 0).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let number = OrderNumber::generate_at(now, &mut rng);
        assert!(number.as_str().starts_with("LC2701"));
    }

    #[test]
    fn test_generate_parses_back() {
        let number = OrderNumber::generate();
        let parsed = OrderNumber::parse(number.as_str()).unwrap();
        assert_eq!(parsed, number);
    }

    #[test]
    fn test_parse_rejects_bad_values() {
        assert_eq!(
            OrderNumber::parse("LC2608ABC"),
            Err(OrderNumberError::BadLength)
        );
        assert_eq!(
            OrderNumber::parse("XX2608ABCDEF"),
            Err(OrderNumberError::BadPrefix)
        );
        assert_eq!(
            OrderNumber::parse("LCABCDEFGHIJ"),
            Err(OrderNumberError::BadDate)
        );
        assert_eq!(
            OrderNumber::parse("LC2608abcdef"),
            Err(OrderNumberError::BadSuffix)
        );
    }

    #[test]
    fn test_display_and_from_str() {
        let number: OrderNumber = "LC2608K3F9ZQ".parse().unwrap();
        assert_eq!(number.to_string(), "LC2608K3F9ZQ");
    }
}
