//! Infrastructure Layer
//!
//! Database implementations of the domain repository traits.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryUserRepository;
pub use postgres::PgUserRepository;
