//! PostgreSQL Repository Implementations
//!
//! One table per entity. Updates write every column of a row the service
//! has already patched; upserts rely on `ON CONFLICT`.

mod contact;
mod resources;
mod singletons;
mod skills;

use sqlx::PgPool;

/// PostgreSQL-backed content repository
#[derive(Clone)]
pub struct PgContentRepository {
    pool: PgPool,
}

impl PgContentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}
