//! Resource Service
//!
//! Validate-then-persist CRUD shared by every [`Resource`].

use std::marker::PhantomData;
use std::sync::Arc;

use chrono::Utc;
use kernel::id::Id;
use kernel::validation::Validate;

use crate::domain::repository::ResourceRepository;
use crate::domain::resource::Resource;
use crate::error::{ContentError, ContentResult};

/// Generic CRUD service for one entity type
pub struct ResourceService<R, E>
where
    R: ResourceRepository<E>,
    E: Resource,
{
    repo: Arc<R>,
    _entity: PhantomData<fn() -> E>,
}

impl<R, E> ResourceService<R, E>
where
    R: ResourceRepository<E>,
    E: Resource,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self {
            repo,
            _entity: PhantomData,
        }
    }

    /// List rows; `flag` is interpreted by the entity's [`ListFilter`](crate::domain::ListFilter)
    pub async fn list(&self, flag: Option<bool>) -> ContentResult<Vec<E>> {
        self.repo.list(flag).await
    }

    pub async fn get(&self, id: Id<E>) -> ContentResult<E> {
        self.repo
            .find(id)
            .await?
            .ok_or(ContentError::NotFound(E::NAME))
    }

    pub async fn create(&self, mut payload: E::Create) -> ContentResult<E> {
        payload.validate()?;
        E::prepare(&mut payload, Utc::now());

        let created = self.repo.insert(&payload).await?;
        tracing::info!(resource = E::NAME, id = %created.id(), "Created");
        Ok(created)
    }

    /// Apply a partial update to an existing row
    pub async fn update(&self, id: Id<E>, patch: E::Patch) -> ContentResult<E> {
        patch.validate()?;

        let mut row = self.get(id).await?;
        row.apply(patch, Utc::now());

        let updated = self
            .repo
            .update(&row)
            .await?
            .ok_or(ContentError::NotFound(E::NAME))?;
        tracing::info!(resource = E::NAME, id = %id, "Updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: Id<E>) -> ContentResult<()> {
        if !self.repo.delete(id).await? {
            return Err(ContentError::NotFound(E::NAME));
        }
        tracing::info!(resource = E::NAME, id = %id, "Deleted");
        Ok(())
    }
}
