//! Display-currency conversion and formatting.
//!
//! All prices and order totals are stored in Turkish lira (TRY). Shoppers
//! can view prices in EUR or USD, converted with admin-maintained display
//! rates. The converted figure is informational only: settlement always
//! uses the TRY total, so a stale or wrong rate can never change what a
//! customer owes.
//!
//! Conversion is applied exactly once, to a TRY total that has already
//! been summed. Never convert line items individually and then sum.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Currencies the storefront can display prices in.
///
/// TRY is the base currency; EUR and USD are display-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "currency_code", rename_all = "UPPERCASE")
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Turkish lira, the base currency.
    #[default]
    Try,
    Eur,
    Usd,
}

impl Currency {
    /// ISO 4217 currency code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Try => "TRY",
            Self::Eur => "EUR",
            Self::Usd => "USD",
        }
    }

    /// Currency symbol used in formatted amounts.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Try => "\u{20ba}",
            Self::Eur => "\u{20ac}",
            Self::Usd => "$",
        }
    }

    /// Format an amount in this currency for display.
    ///
    /// TRY uses Turkish digit grouping (`₺1.580,00`); EUR and USD use
    /// en-US grouping (`€44.24`, `$1,234.56`). The amount is rounded to
    /// two decimal places first.
    #[must_use]
    pub fn format(self, amount: Decimal) -> String {
        let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let sign = if rounded.is_sign_negative() { "-" } else { "" };
        let fixed = format!("{:.2}", rounded.abs());
        let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

        let (group_sep, decimal_sep) = match self {
            Self::Try => ('.', ','),
            Self::Eur | Self::Usd => (',', '.'),
        };

        format!(
            "{sign}{}{}{decimal_sep}{frac_part}",
            self.symbol(),
            group_thousands(int_part, group_sep)
        )
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TRY" => Ok(Self::Try),
            "EUR" => Ok(Self::Eur),
            "USD" => Ok(Self::Usd),
            _ => Err(format!("unknown currency: {s}")),
        }
    }
}

/// Display rates from TRY into each supported foreign currency.
///
/// Rates are multipliers: `eur = 0.028` means 1 TRY buys 0.028 EUR.
/// The TRY rate is implicitly 1 and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRates {
    #[serde(rename = "EUR")]
    pub eur: Decimal,
    #[serde(rename = "USD")]
    pub usd: Decimal,
}

impl ExchangeRates {
    /// Hardcoded fallback rates used when the stored rates cannot be read.
    pub const FALLBACK: Self = Self {
        eur: Decimal::from_parts(28, 0, 0, false, 3),
        usd: Decimal::from_parts(30, 0, 0, false, 3),
    };

    /// The multiplier from TRY into `currency`.
    #[must_use]
    pub fn rate(&self, currency: Currency) -> Decimal {
        match currency {
            Currency::Try => Decimal::ONE,
            Currency::Eur => self.eur,
            Currency::Usd => self.usd,
        }
    }

    /// Convert a TRY amount into `currency`, rounded to 2 decimal places.
    ///
    /// TRY amounts pass through unchanged.
    #[must_use]
    pub fn convert(&self, amount_try: Decimal, currency: Currency) -> Decimal {
        match currency {
            Currency::Try => amount_try,
            Currency::Eur | Currency::Usd => (amount_try * self.rate(currency))
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        }
    }

    /// Convert and format a TRY amount in one step.
    #[must_use]
    pub fn display(&self, amount_try: Decimal, currency: Currency) -> String {
        currency.format(self.convert(amount_try, currency))
    }
}

impl Default for ExchangeRates {
    fn default() -> Self {
        Self::FALLBACK
    }
}

/// Insert a thousands separator into a plain digit string.
fn group_thousands(digits: &str, sep: char) -> String {
    let len = digits.chars().count();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn rates() -> ExchangeRates {
        ExchangeRates {
            eur: dec("0.028"),
            usd: dec("0.030"),
        }
    }

    #[test]
    fn test_try_passes_through() {
        assert_eq!(rates().convert(dec("1580"), Currency::Try), dec("1580"));
        assert_eq!(rates().rate(Currency::Try), Decimal::ONE);
    }

    #[test]
    fn test_convert_rounds_to_cents() {
        // 1580 * 0.028 = 44.24
        assert_eq!(rates().convert(dec("1580"), Currency::Eur), dec("44.24"));
        // 1580 * 0.030 = 47.40
        assert_eq!(rates().convert(dec("1580"), Currency::Usd), dec("47.40"));
        // 333 * 0.028 = 9.324 -> 9.32
        assert_eq!(rates().convert(dec("333"), Currency::Eur), dec("9.32"));
        // 312.5 * 0.028 = 8.75 exactly
        assert_eq!(rates().convert(dec("312.5"), Currency::Eur), dec("8.75"));
    }

    #[test]
    fn test_convert_midpoint_rounds_away_from_zero() {
        // 0.125 at rate 1 stays 0.125 only for TRY; force the midpoint case
        let r = ExchangeRates {
            eur: dec("1"),
            usd: dec("1"),
        };
        assert_eq!(r.convert(dec("0.125"), Currency::Eur), dec("0.13"));
    }

    #[test]
    fn test_convert_zero() {
        assert_eq!(rates().convert(Decimal::ZERO, Currency::Eur), Decimal::ZERO);
        assert_eq!(rates().convert(Decimal::ZERO, Currency::Try), Decimal::ZERO);
    }

    #[test]
    fn test_fallback_rates() {
        let fallback = ExchangeRates::default();
        assert_eq!(fallback.eur, dec("0.028"));
        assert_eq!(fallback.usd, dec("0.030"));
    }

    #[test]
    fn test_format_eur_usd() {
        assert_eq!(Currency::Eur.format(dec("44.24")), "€44.24");
        assert_eq!(Currency::Usd.format(dec("47.4")), "$47.40");
        assert_eq!(Currency::Usd.format(dec("1234.56")), "$1,234.56");
    }

    #[test]
    fn test_format_try_turkish_grouping() {
        assert_eq!(Currency::Try.format(dec("1580")), "₺1.580,00");
        assert_eq!(Currency::Try.format(dec("450")), "₺450,00");
        assert_eq!(Currency::Try.format(dec("1234567.5")), "₺1.234.567,50");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(Currency::Usd.format(dec("-12.5")), "-$12.50");
    }

    #[test]
    fn test_display_converts_once() {
        assert_eq!(rates().display(dec("1580"), Currency::Eur), "€44.24");
        assert_eq!(rates().display(dec("1580"), Currency::Try), "₺1.580,00");
    }

    #[test]
    fn test_currency_serde_uppercase() {
        assert_eq!(serde_json::to_string(&Currency::Try).unwrap(), "\"TRY\"");
        let parsed: Currency = serde_json::from_str("\"EUR\"").unwrap();
        assert_eq!(parsed, Currency::Eur);
    }

    #[test]
    fn test_rates_serde_wire_shape() {
        let json = serde_json::to_value(rates()).unwrap();
        assert!(json.get("EUR").is_some());
        assert!(json.get("USD").is_some());
    }
}
