//! Application Layer

pub mod config;
pub mod get_news;

// Re-exports
pub use config::NewsConfig;
pub use get_news::GetNewsUseCase;
