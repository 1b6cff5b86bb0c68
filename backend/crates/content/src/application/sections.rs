//! Content Section Service

use std::sync::Arc;

use crate::domain::entity::section::validate_section_key;
use crate::domain::entity::{ContentSection, SectionInput};
use crate::domain::repository::SectionRepository;
use crate::error::{ContentError, ContentResult};

pub struct SectionService<R>
where
    R: SectionRepository,
{
    repo: Arc<R>,
}

impl<R> SectionService<R>
where
    R: SectionRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn get(&self, key: &str) -> ContentResult<ContentSection> {
        self.repo
            .find_section(key)
            .await?
            .ok_or(ContentError::NotFound("Section"))
    }

    /// Create or replace the section under `key`
    pub async fn upsert(&self, key: &str, input: SectionInput) -> ContentResult<ContentSection> {
        validate_section_key(key)?;

        let section = self.repo.upsert_section(key, &input).await?;
        tracing::info!(section_key = %section.section_key, "Content section saved");
        Ok(section)
    }
}
