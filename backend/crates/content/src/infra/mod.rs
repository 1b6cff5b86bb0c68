//! Infrastructure Layer
//!
//! Database implementations.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryContentRepository;
pub use postgres::PgContentRepository;
