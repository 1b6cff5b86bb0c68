//! CRUD tables

use kernel::id::Id;

use super::PgContentRepository;
use crate::domain::entity::{
    BlogPost, Education, Experience, NavigationItem, NewBlogPost, NewEducation, NewExperience,
    NewNavigationItem, NewProject, NewSkill, NewSkillCategory, Project, Skill, SkillCategory,
};
use crate::domain::repository::ResourceRepository;
use crate::error::ContentResult;

async fn delete_by_id(repo: &PgContentRepository, table: &str, id: i32) -> ContentResult<bool> {
    let deleted = sqlx::query(&format!("DELETE FROM {table} WHERE id = $1"))
        .bind(id)
        .execute(&repo.pool)
        .await?
        .rows_affected();
    Ok(deleted > 0)
}

// ============================================================================
// Navigation
// ============================================================================

impl ResourceRepository<NavigationItem> for PgContentRepository {
    async fn list(&self, flag: Option<bool>) -> ContentResult<Vec<NavigationItem>> {
        let rows = sqlx::query_as::<_, NavigationItem>(
            r#"
            SELECT * FROM navigation_items
            WHERE ($1::BOOLEAN IS NULL OR is_visible = $1)
            ORDER BY "order", id
            "#,
        )
        .bind(flag)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn find(&self, id: Id<NavigationItem>) -> ContentResult<Option<NavigationItem>> {
        let row = sqlx::query_as::<_, NavigationItem>("SELECT * FROM navigation_items WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    async fn insert(&self, new: &NewNavigationItem) -> ContentResult<NavigationItem> {
        let row = sqlx::query_as::<_, NavigationItem>(
            r#"
            INSERT INTO navigation_items (label, href, icon, "order", is_visible)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&new.label)
        .bind(&new.href)
        .bind(&new.icon)
        .bind(new.order)
        .bind(new.is_visible)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn update(&self, item: &NavigationItem) -> ContentResult<Option<NavigationItem>> {
        let row = sqlx::query_as::<_, NavigationItem>(
            r#"
            UPDATE navigation_items
            SET label = $2, href = $3, icon = $4, "order" = $5, is_visible = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(item.id)
        .bind(&item.label)
        .bind(&item.href)
        .bind(&item.icon)
        .bind(item.order)
        .bind(item.is_visible)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn delete(&self, id: Id<NavigationItem>) -> ContentResult<bool> {
        delete_by_id(self, "navigation_items", id.get()).await
    }
}

// ============================================================================
// Blog
// ============================================================================

impl ResourceRepository<BlogPost> for PgContentRepository {
    async fn list(&self, flag: Option<bool>) -> ContentResult<Vec<BlogPost>> {
        let rows = sqlx::query_as::<_, BlogPost>(
            r#"
            SELECT * FROM blog_posts
            WHERE ($1::BOOLEAN IS NULL OR is_published = $1)
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(flag)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn find(&self, id: Id<BlogPost>) -> ContentResult<Option<BlogPost>> {
        let row = sqlx::query_as::<_, BlogPost>("SELECT * FROM blog_posts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    async fn insert(&self, new: &NewBlogPost) -> ContentResult<BlogPost> {
        let row = sqlx::query_as::<_, BlogPost>(
            r#"
            INSERT INTO blog_posts (
                title, slug, excerpt, content, category, tags,
                published_at, is_published, read_time
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(&new.title)
        .bind(&new.slug)
        .bind(&new.excerpt)
        .bind(&new.content)
        .bind(&new.category)
        .bind(&new.tags)
        .bind(new.published_at)
        .bind(new.is_published)
        .bind(new.read_time)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn update(&self, post: &BlogPost) -> ContentResult<Option<BlogPost>> {
        let row = sqlx::query_as::<_, BlogPost>(
            r#"
            UPDATE blog_posts
            SET title = $2, slug = $3, excerpt = $4, content = $5, category = $6,
                tags = $7, published_at = $8, is_published = $9, read_time = $10,
                updated_at = $11
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(post.id)
        .bind(&post.title)
        .bind(&post.slug)
        .bind(&post.excerpt)
        .bind(&post.content)
        .bind(&post.category)
        .bind(&post.tags)
        .bind(post.published_at)
        .bind(post.is_published)
        .bind(post.read_time)
        .bind(post.updated_at)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn delete(&self, id: Id<BlogPost>) -> ContentResult<bool> {
        delete_by_id(self, "blog_posts", id.get()).await
    }
}

// ============================================================================
// Experience
// ============================================================================

impl ResourceRepository<Experience> for PgContentRepository {
    async fn list(&self, _flag: Option<bool>) -> ContentResult<Vec<Experience>> {
        let rows = sqlx::query_as::<_, Experience>(
            r#"SELECT * FROM experiences ORDER BY "order", id"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn find(&self, id: Id<Experience>) -> ContentResult<Option<Experience>> {
        let row = sqlx::query_as::<_, Experience>("SELECT * FROM experiences WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    async fn insert(&self, new: &NewExperience) -> ContentResult<Experience> {
        let row = sqlx::query_as::<_, Experience>(
            r#"
            INSERT INTO experiences (
                title, company, location, start_date, end_date,
                description, achievements, technologies, "order"
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(&new.title)
        .bind(&new.company)
        .bind(&new.location)
        .bind(&new.start_date)
        .bind(&new.end_date)
        .bind(&new.description)
        .bind(&new.achievements)
        .bind(&new.technologies)
        .bind(new.order)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn update(&self, entry: &Experience) -> ContentResult<Option<Experience>> {
        let row = sqlx::query_as::<_, Experience>(
            r#"
            UPDATE experiences
            SET title = $2, company = $3, location = $4, start_date = $5, end_date = $6,
                description = $7, achievements = $8, technologies = $9, "order" = $10
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(entry.id)
        .bind(&entry.title)
        .bind(&entry.company)
        .bind(&entry.location)
        .bind(&entry.start_date)
        .bind(&entry.end_date)
        .bind(&entry.description)
        .bind(&entry.achievements)
        .bind(&entry.technologies)
        .bind(entry.order)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn delete(&self, id: Id<Experience>) -> ContentResult<bool> {
        delete_by_id(self, "experiences", id.get()).await
    }
}

// ============================================================================
// Education
// ============================================================================

impl ResourceRepository<Education> for PgContentRepository {
    async fn list(&self, _flag: Option<bool>) -> ContentResult<Vec<Education>> {
        let rows = sqlx::query_as::<_, Education>(
            r#"SELECT * FROM education ORDER BY "order", id"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn find(&self, id: Id<Education>) -> ContentResult<Option<Education>> {
        let row = sqlx::query_as::<_, Education>("SELECT * FROM education WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    async fn insert(&self, new: &NewEducation) -> ContentResult<Education> {
        let row = sqlx::query_as::<_, Education>(
            r#"
            INSERT INTO education (
                degree, institution, location, start_year, end_year,
                description, gpa, "order"
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(&new.degree)
        .bind(&new.institution)
        .bind(&new.location)
        .bind(&new.start_year)
        .bind(&new.end_year)
        .bind(&new.description)
        .bind(&new.gpa)
        .bind(new.order)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn update(&self, entry: &Education) -> ContentResult<Option<Education>> {
        let row = sqlx::query_as::<_, Education>(
            r#"
            UPDATE education
            SET degree = $2, institution = $3, location = $4, start_year = $5,
                end_year = $6, description = $7, gpa = $8, "order" = $9
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(entry.id)
        .bind(&entry.degree)
        .bind(&entry.institution)
        .bind(&entry.location)
        .bind(&entry.start_year)
        .bind(&entry.end_year)
        .bind(&entry.description)
        .bind(&entry.gpa)
        .bind(entry.order)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn delete(&self, id: Id<Education>) -> ContentResult<bool> {
        delete_by_id(self, "education", id.get()).await
    }
}

// ============================================================================
// Skill categories
// ============================================================================

impl ResourceRepository<SkillCategory> for PgContentRepository {
    async fn list(&self, _flag: Option<bool>) -> ContentResult<Vec<SkillCategory>> {
        let rows = sqlx::query_as::<_, SkillCategory>(
            r#"SELECT * FROM skill_categories ORDER BY "order", id"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn find(&self, id: Id<SkillCategory>) -> ContentResult<Option<SkillCategory>> {
        let row = sqlx::query_as::<_, SkillCategory>("SELECT * FROM skill_categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    async fn insert(&self, new: &NewSkillCategory) -> ContentResult<SkillCategory> {
        let row = sqlx::query_as::<_, SkillCategory>(
            r#"INSERT INTO skill_categories (name, "order") VALUES ($1, $2) RETURNING *"#,
        )
        .bind(&new.name)
        .bind(new.order)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn update(&self, category: &SkillCategory) -> ContentResult<Option<SkillCategory>> {
        let row = sqlx::query_as::<_, SkillCategory>(
            r#"UPDATE skill_categories SET name = $2, "order" = $3 WHERE id = $1 RETURNING *"#,
        )
        .bind(category.id)
        .bind(&category.name)
        .bind(category.order)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn delete(&self, id: Id<SkillCategory>) -> ContentResult<bool> {
        delete_by_id(self, "skill_categories", id.get()).await
    }
}

// ============================================================================
// Skills
// ============================================================================

impl ResourceRepository<Skill> for PgContentRepository {
    async fn list(&self, _flag: Option<bool>) -> ContentResult<Vec<Skill>> {
        let rows = sqlx::query_as::<_, Skill>(r#"SELECT * FROM skills ORDER BY "order", id"#)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    async fn find(&self, id: Id<Skill>) -> ContentResult<Option<Skill>> {
        let row = sqlx::query_as::<_, Skill>("SELECT * FROM skills WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    async fn insert(&self, new: &NewSkill) -> ContentResult<Skill> {
        let row = sqlx::query_as::<_, Skill>(
            r#"
            INSERT INTO skills (category_id, name, level, "order")
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(new.category_id)
        .bind(&new.name)
        .bind(new.level)
        .bind(new.order)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn update(&self, skill: &Skill) -> ContentResult<Option<Skill>> {
        let row = sqlx::query_as::<_, Skill>(
            r#"
            UPDATE skills
            SET category_id = $2, name = $3, level = $4, "order" = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(skill.id)
        .bind(skill.category_id)
        .bind(&skill.name)
        .bind(skill.level)
        .bind(skill.order)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn delete(&self, id: Id<Skill>) -> ContentResult<bool> {
        delete_by_id(self, "skills", id.get()).await
    }
}

// ============================================================================
// Projects
// ============================================================================

impl ResourceRepository<Project> for PgContentRepository {
    async fn list(&self, flag: Option<bool>) -> ContentResult<Vec<Project>> {
        let rows = sqlx::query_as::<_, Project>(
            r#"
            SELECT * FROM projects
            WHERE ($1::BOOLEAN IS NULL OR featured = $1)
            ORDER BY "order", id
            "#,
        )
        .bind(flag)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn find(&self, id: Id<Project>) -> ContentResult<Option<Project>> {
        let row = sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    async fn insert(&self, new: &NewProject) -> ContentResult<Project> {
        let row = sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects (
                name, description, technologies, github_url, live_url, image_url,
                featured, stars, forks, language, "order"
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(&new.name)
        .bind(&new.description)
        .bind(&new.technologies)
        .bind(&new.github_url)
        .bind(&new.live_url)
        .bind(&new.image_url)
        .bind(new.featured)
        .bind(new.stars)
        .bind(new.forks)
        .bind(&new.language)
        .bind(new.order)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn update(&self, project: &Project) -> ContentResult<Option<Project>> {
        let row = sqlx::query_as::<_, Project>(
            r#"
            UPDATE projects
            SET name = $2, description = $3, technologies = $4, github_url = $5,
                live_url = $6, image_url = $7, featured = $8, stars = $9, forks = $10,
                language = $11, "order" = $12, updated_at = $13
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(project.id)
        .bind(&project.name)
        .bind(&project.description)
        .bind(&project.technologies)
        .bind(&project.github_url)
        .bind(&project.live_url)
        .bind(&project.image_url)
        .bind(project.featured)
        .bind(project.stars)
        .bind(project.forks)
        .bind(&project.language)
        .bind(project.order)
        .bind(project.updated_at)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn delete(&self, id: Id<Project>) -> ContentResult<bool> {
        delete_by_id(self, "projects", id.get()).await
    }
}
