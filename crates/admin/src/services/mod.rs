//! Business logic services for the admin back office.

pub mod auth;

pub use auth::AuthService;
