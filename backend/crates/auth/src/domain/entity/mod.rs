//! Entity Module

pub mod auth_context;
pub mod token_claims;
pub mod user;
