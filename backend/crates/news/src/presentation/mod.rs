//! Presentation Layer
//!
//! HTTP handlers and router for the protected news endpoints.

pub mod handlers;
pub mod router;

pub use handlers::NewsAppState;
pub use router::{news_router, news_router_generic};
