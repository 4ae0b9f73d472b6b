//! Business logic services for the storefront.

pub mod checkout;
pub mod rates;

pub use rates::RateService;
