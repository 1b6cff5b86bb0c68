//! Skill Catalog Service

use std::sync::Arc;

use crate::domain::entity::SkillWithCategory;
use crate::domain::repository::SkillCatalogRepository;
use crate::error::ContentResult;

pub struct SkillCatalogService<R>
where
    R: SkillCatalogRepository,
{
    repo: Arc<R>,
}

impl<R> SkillCatalogService<R>
where
    R: SkillCatalogRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn list_with_categories(&self) -> ContentResult<Vec<SkillWithCategory>> {
        self.repo.list_skills_with_categories().await
    }
}
