//! News Backend Module
//!
//! Protected endpoints for news preferences and top headlines.
//!
//! - `domain/` - Headline query and provider trait
//! - `application/` - Provider config and the get-news use case
//! - `infra/` - NewsAPI HTTP client
//! - `presentation/` - HTTP handlers and router

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::NewsConfig;
pub use domain::{HeadlinesClient, HeadlinesQuery};
pub use error::{NewsError, NewsResult};
pub use infra::newsapi::NewsApiClient;
pub use presentation::router::{news_router, news_router_generic};
