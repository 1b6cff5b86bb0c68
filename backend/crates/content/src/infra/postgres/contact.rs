//! Contact inbox

use kernel::id::Id;

use super::PgContentRepository;
use crate::domain::entity::{ContactMessage, NewContactMessage};
use crate::domain::repository::ContactRepository;
use crate::error::ContentResult;

impl ContactRepository for PgContentRepository {
    async fn submit_message(&self, new: &NewContactMessage) -> ContentResult<ContactMessage> {
        let row = sqlx::query_as::<_, ContactMessage>(
            r#"
            INSERT INTO contact_messages (name, email, subject, message)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&new.name)
        .bind(&new.email)
        .bind(&new.subject)
        .bind(&new.message)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn list_messages(&self) -> ContentResult<Vec<ContactMessage>> {
        let rows = sqlx::query_as::<_, ContactMessage>(
            "SELECT * FROM contact_messages ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn mark_message_read(&self, id: Id<ContactMessage>) -> ContentResult<bool> {
        let updated = sqlx::query("UPDATE contact_messages SET is_read = TRUE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(updated > 0)
    }

    async fn delete_message(&self, id: Id<ContactMessage>) -> ContentResult<bool> {
        let deleted = sqlx::query("DELETE FROM contact_messages WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}
