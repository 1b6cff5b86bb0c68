//! Contact Inbox Service

use std::sync::Arc;

use kernel::id::Id;
use kernel::validation::Validate;

use crate::domain::entity::{ContactMessage, NewContactMessage};
use crate::domain::repository::ContactRepository;
use crate::error::{ContentError, ContentResult};

const NOT_FOUND: ContentError = ContentError::NotFound("Message");

pub struct ContactInbox<R>
where
    R: ContactRepository,
{
    repo: Arc<R>,
}

impl<R> ContactInbox<R>
where
    R: ContactRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Store a message from the public form (unread, stamped now)
    pub async fn submit(&self, new: NewContactMessage) -> ContentResult<ContactMessage> {
        new.validate()?;

        let message = self.repo.submit_message(&new).await?;
        tracing::info!(message_id = %message.id, "Contact message received");
        Ok(message)
    }

    pub async fn list(&self) -> ContentResult<Vec<ContactMessage>> {
        self.repo.list_messages().await
    }

    pub async fn mark_read(&self, id: Id<ContactMessage>) -> ContentResult<()> {
        if !self.repo.mark_message_read(id).await? {
            return Err(NOT_FOUND);
        }
        Ok(())
    }

    pub async fn delete(&self, id: Id<ContactMessage>) -> ContentResult<()> {
        if !self.repo.delete_message(id).await? {
            return Err(NOT_FOUND);
        }
        tracing::info!(message_id = %id, "Contact message deleted");
        Ok(())
    }
}
