//! Domain Layer
//!
//! Headline query shape and the provider trait.

pub mod headlines;

// Re-exports
pub use headlines::{HeadlinesClient, HeadlinesQuery};
