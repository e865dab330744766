//! Infrastructure Layer
//!
//! External service integrations.

pub mod newsapi;

pub use newsapi::NewsApiClient;
