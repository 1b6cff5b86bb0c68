//! Profile Service

use std::sync::Arc;

use kernel::validation::Validate;

use crate::domain::entity::{Profile, ProfileInput, PublicProfile};
use crate::domain::repository::ProfileRepository;
use crate::error::{ContentError, ContentResult};

pub struct ProfileService<R>
where
    R: ProfileRepository,
{
    repo: Arc<R>,
}

impl<R> ProfileService<R>
where
    R: ProfileRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Full record, contact details included
    pub async fn get(&self) -> ContentResult<Profile> {
        self.repo
            .find_profile()
            .await?
            .ok_or(ContentError::NotFound("Profile"))
    }

    /// Projection for the public site
    pub async fn get_public(&self) -> ContentResult<PublicProfile> {
        self.get().await.map(PublicProfile::from)
    }

    /// Replace the singleton, creating it on first use
    pub async fn upsert(&self, input: ProfileInput) -> ContentResult<Profile> {
        input.validate()?;

        let profile = self.repo.upsert_profile(&input).await?;
        tracing::info!(profile_id = %profile.id, "Profile saved");
        Ok(profile)
    }
}
