//! Skills joined with their categories

use kernel::id::Id;

use super::PgContentRepository;
use crate::domain::entity::{Skill, SkillCategory, SkillWithCategory};
use crate::domain::repository::SkillCatalogRepository;
use crate::error::ContentResult;

#[derive(sqlx::FromRow)]
struct SkillJoinRow {
    id: Id<Skill>,
    category_id: Option<Id<SkillCategory>>,
    name: String,
    level: i32,
    order: i32,
    category_name: Option<String>,
    category_order: Option<i32>,
}

impl SkillJoinRow {
    fn into_entry(self) -> SkillWithCategory {
        // LEFT JOIN: the category columns are all set or all NULL
        let category = match (self.category_id, self.category_name, self.category_order) {
            (Some(id), Some(name), Some(order)) => Some(SkillCategory { id, name, order }),
            _ => None,
        };

        SkillWithCategory {
            skill: Skill {
                id: self.id,
                category_id: self.category_id,
                name: self.name,
                level: self.level,
                order: self.order,
            },
            category,
        }
    }
}

impl SkillCatalogRepository for PgContentRepository {
    async fn list_skills_with_categories(&self) -> ContentResult<Vec<SkillWithCategory>> {
        let rows = sqlx::query_as::<_, SkillJoinRow>(
            r#"
            SELECT
                s.id, s.category_id, s.name, s.level, s."order",
                c.name AS category_name, c."order" AS category_order
            FROM skills s
            LEFT JOIN skill_categories c ON c.id = s.category_id
            ORDER BY c."order" ASC NULLS LAST, c.id ASC NULLS LAST, s."order", s.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(SkillJoinRow::into_entry).collect())
    }
}
