//! Upsert-only tables: keyed sections and the singleton profile

use super::PgContentRepository;
use crate::domain::entity::{ContentSection, Profile, ProfileInput, SectionInput};
use crate::domain::repository::{ProfileRepository, SectionRepository};
use crate::error::ContentResult;

const PROFILE_COLUMNS: &str = "id, name, title, email, phone, location, bio, avatar_url, \
     resume_url, social_links, theme_preference, created_at, updated_at";

impl SectionRepository for PgContentRepository {
    async fn find_section(&self, key: &str) -> ContentResult<Option<ContentSection>> {
        let row =
            sqlx::query_as::<_, ContentSection>("SELECT * FROM content_sections WHERE section_key = $1")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row)
    }

    async fn upsert_section(
        &self,
        key: &str,
        input: &SectionInput,
    ) -> ContentResult<ContentSection> {
        let row = sqlx::query_as::<_, ContentSection>(
            r#"
            INSERT INTO content_sections (section_key, title, subtitle, content, metadata)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (section_key) DO UPDATE
            SET title = EXCLUDED.title,
                subtitle = EXCLUDED.subtitle,
                content = EXCLUDED.content,
                metadata = EXCLUDED.metadata,
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(key)
        .bind(&input.title)
        .bind(&input.subtitle)
        .bind(&input.content)
        .bind(&input.metadata)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }
}

impl ProfileRepository for PgContentRepository {
    async fn find_profile(&self) -> ContentResult<Option<Profile>> {
        let row = sqlx::query_as::<_, Profile>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profile WHERE singleton"
        ))
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn upsert_profile(&self, input: &ProfileInput) -> ContentResult<Profile> {
        // `singleton` is UNIQUE and always TRUE, so at most one row exists
        let row = sqlx::query_as::<_, Profile>(&format!(
            r#"
            INSERT INTO profile (
                name, title, email, phone, location, bio, avatar_url,
                resume_url, social_links, theme_preference
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT (singleton) DO UPDATE
            SET name = EXCLUDED.name,
                title = EXCLUDED.title,
                email = EXCLUDED.email,
                phone = EXCLUDED.phone,
                location = EXCLUDED.location,
                bio = EXCLUDED.bio,
                avatar_url = EXCLUDED.avatar_url,
                resume_url = EXCLUDED.resume_url,
                social_links = EXCLUDED.social_links,
                theme_preference = EXCLUDED.theme_preference,
                updated_at = NOW()
            RETURNING {PROFILE_COLUMNS}
            "#
        ))
        .bind(&input.name)
        .bind(&input.title)
        .bind(&input.email)
        .bind(&input.phone)
        .bind(&input.location)
        .bind(&input.bio)
        .bind(&input.avatar_url)
        .bind(&input.resume_url)
        .bind(&input.social_links)
        .bind(&input.theme_preference)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }
}
