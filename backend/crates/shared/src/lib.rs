//! Shared Kernel
//!
//! Domain vocabulary that every crate in the workspace agrees on:
//! - The error classification and unified application error
//! - Typed identifiers
//!
//! Nothing here knows about users, tokens or news.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
