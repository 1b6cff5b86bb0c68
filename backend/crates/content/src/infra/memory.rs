//! In-memory Repository Implementation
//!
//! Same contract as [`PgContentRepository`](super::postgres::PgContentRepository),
//! including the unique and foreign key constraints the schema enforces.
//! Used by tests and database-less runs.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use kernel::id::Id;
use tokio::sync::RwLock;

use crate::domain::entity::{
    BlogPost, ContactMessage, ContentSection, Education, Experience, NavigationItem,
    NewContactMessage, Profile, ProfileInput, Project, SectionInput, Skill, SkillCategory,
    SkillWithCategory,
};
use crate::domain::repository::{
    ContactRepository, ProfileRepository, ResourceRepository, SectionRepository,
    SkillCatalogRepository,
};
use crate::domain::resource::Resource;
use crate::error::{ContentError, ContentResult};

/// Rows keyed by id plus the serial counter
struct Table<T> {
    rows: BTreeMap<i32, T>,
    next_id: i32,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 0,
        }
    }
}

impl<T> Table<T> {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Default)]
struct Store {
    navigation: Table<NavigationItem>,
    blog: Table<BlogPost>,
    experience: Table<Experience>,
    education: Table<Education>,
    skill_categories: Table<SkillCategory>,
    skills: Table<Skill>,
    projects: Table<Project>,
    sections: Table<ContentSection>,
    profile: Option<Profile>,
    profile_next_id: i32,
    messages: Table<ContactMessage>,
}

/// Table lookup and write-time constraint checks per resource
trait Stored: Resource {
    fn table(store: &Store) -> &Table<Self>;
    fn table_mut(store: &mut Store) -> &mut Table<Self>;

    /// Constraints a row must satisfy before it is written
    fn check_write(_store: &Store, _row: &Self) -> ContentResult<()> {
        Ok(())
    }

    /// Constraints that block deleting the row with `id`
    fn check_delete(_store: &Store, _id: Id<Self>) -> ContentResult<()> {
        Ok(())
    }
}

fn conflict(message: &str) -> ContentError {
    ContentError::Conflict(message.to_string())
}

macro_rules! stored {
    ($entity:ty, $field:ident) => {
        fn table(store: &Store) -> &Table<$entity> {
            &store.$field
        }

        fn table_mut(store: &mut Store) -> &mut Table<$entity> {
            &mut store.$field
        }
    };
}

impl Stored for NavigationItem {
    stored!(NavigationItem, navigation);
}

impl Stored for BlogPost {
    stored!(BlogPost, blog);

    fn check_write(store: &Store, row: &Self) -> ContentResult<()> {
        let taken = store
            .blog
            .rows
            .values()
            .any(|post| post.slug == row.slug && post.id != row.id);
        if taken {
            return Err(conflict("A record with this key already exists"));
        }
        Ok(())
    }
}

impl Stored for Experience {
    stored!(Experience, experience);
}

impl Stored for Education {
    stored!(Education, education);
}

impl Stored for SkillCategory {
    stored!(SkillCategory, skill_categories);

    fn check_delete(store: &Store, id: Id<Self>) -> ContentResult<()> {
        if store.skills.rows.values().any(|skill| skill.category_id == Some(id)) {
            return Err(conflict(
                "Referenced record does not exist or is still in use",
            ));
        }
        Ok(())
    }
}

impl Stored for Skill {
    stored!(Skill, skills);

    fn check_write(store: &Store, row: &Self) -> ContentResult<()> {
        let dangling = row
            .category_id
            .is_some_and(|id| !store.skill_categories.rows.contains_key(&id.get()));
        if dangling {
            return Err(conflict(
                "Referenced record does not exist or is still in use",
            ));
        }
        Ok(())
    }
}

impl Stored for Project {
    stored!(Project, projects);
}

/// Memory-backed content repository; clones share state
#[derive(Clone, Default)]
pub struct InMemoryContentRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryContentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

// Generic table operations behind the per-entity trait impls
impl InMemoryContentRepository {
    async fn list_rows<E: Stored>(&self, flag: Option<bool>) -> Vec<E> {
        let store = self.store.read().await;
        let mut rows: Vec<E> = E::table(&store)
            .rows
            .values()
            .filter(|row| flag.is_none_or(|flag| row.matches(flag)))
            .cloned()
            .collect();
        rows.sort_by(E::listing_cmp);
        rows
    }

    async fn find_row<E: Stored>(&self, id: Id<E>) -> Option<E> {
        let store = self.store.read().await;
        E::table(&store).rows.get(&id.get()).cloned()
    }

    async fn insert_row<E: Stored>(&self, new: &E::Create) -> ContentResult<E> {
        let mut store = self.store.write().await;
        let id = Id::new(E::table(&store).next_id + 1);
        let row = E::build(id, new.clone(), Utc::now());
        E::check_write(&store, &row)?;

        let table = E::table_mut(&mut store);
        table.next_id();
        table.rows.insert(id.get(), row.clone());
        Ok(row)
    }

    async fn update_row<E: Stored>(&self, row: &E) -> ContentResult<Option<E>> {
        let mut store = self.store.write().await;
        if !E::table(&store).rows.contains_key(&row.id().get()) {
            return Ok(None);
        }
        E::check_write(&store, row)?;

        E::table_mut(&mut store)
            .rows
            .insert(row.id().get(), row.clone());
        Ok(Some(row.clone()))
    }

    async fn delete_row<E: Stored>(&self, id: Id<E>) -> ContentResult<bool> {
        let mut store = self.store.write().await;
        if !E::table(&store).rows.contains_key(&id.get()) {
            return Ok(false);
        }
        E::check_delete(&store, id)?;

        Ok(E::table_mut(&mut store).rows.remove(&id.get()).is_some())
    }
}

macro_rules! memory_resource {
    ($($entity:ty),+ $(,)?) => {
        $(
            impl ResourceRepository<$entity> for InMemoryContentRepository {
                async fn list(&self, flag: Option<bool>) -> ContentResult<Vec<$entity>> {
                    Ok(self.list_rows(flag).await)
                }

                async fn find(&self, id: Id<$entity>) -> ContentResult<Option<$entity>> {
                    Ok(self.find_row(id).await)
                }

                async fn insert(
                    &self,
                    new: &<$entity as Resource>::Create,
                ) -> ContentResult<$entity> {
                    self.insert_row::<$entity>(new).await
                }

                async fn update(&self, row: &$entity) -> ContentResult<Option<$entity>> {
                    self.update_row(row).await
                }

                async fn delete(&self, id: Id<$entity>) -> ContentResult<bool> {
                    self.delete_row(id).await
                }
            }
        )+
    };
}

memory_resource!(
    NavigationItem,
    BlogPost,
    Experience,
    Education,
    SkillCategory,
    Skill,
    Project,
);

impl SectionRepository for InMemoryContentRepository {
    async fn find_section(&self, key: &str) -> ContentResult<Option<ContentSection>> {
        let store = self.store.read().await;
        Ok(store
            .sections
            .rows
            .values()
            .find(|section| section.section_key == key)
            .cloned())
    }

    async fn upsert_section(
        &self,
        key: &str,
        input: &SectionInput,
    ) -> ContentResult<ContentSection> {
        let now = Utc::now();
        let mut store = self.store.write().await;

        if let Some(section) = store
            .sections
            .rows
            .values_mut()
            .find(|section| section.section_key == key)
        {
            section.replace(input.clone(), now);
            return Ok(section.clone());
        }

        let id = store.sections.next_id();
        let mut section = ContentSection {
            id: Id::new(id),
            section_key: key.to_string(),
            title: None,
            subtitle: None,
            content: None,
            metadata: None,
            updated_at: now,
        };
        section.replace(input.clone(), now);
        store.sections.rows.insert(id, section.clone());
        Ok(section)
    }
}

impl ProfileRepository for InMemoryContentRepository {
    async fn find_profile(&self) -> ContentResult<Option<Profile>> {
        Ok(self.store.read().await.profile.clone())
    }

    async fn upsert_profile(&self, input: &ProfileInput) -> ContentResult<Profile> {
        let now = Utc::now();
        let mut store = self.store.write().await;

        let profile = match store.profile.take() {
            Some(mut profile) => {
                profile.replace(input.clone(), now);
                profile
            }
            None => {
                store.profile_next_id += 1;
                Profile::create(Id::new(store.profile_next_id), input.clone(), now)
            }
        };
        store.profile = Some(profile.clone());
        Ok(profile)
    }
}

impl SkillCatalogRepository for InMemoryContentRepository {
    async fn list_skills_with_categories(&self) -> ContentResult<Vec<SkillWithCategory>> {
        let store = self.store.read().await;
        let mut entries: Vec<SkillWithCategory> = store
            .skills
            .rows
            .values()
            .map(|skill| SkillWithCategory {
                category: skill
                    .category_id
                    .and_then(|id| store.skill_categories.rows.get(&id.get()).cloned()),
                skill: skill.clone(),
            })
            .collect();
        entries.sort_by(SkillWithCategory::listing_cmp);
        Ok(entries)
    }
}

impl ContactRepository for InMemoryContentRepository {
    async fn submit_message(&self, new: &NewContactMessage) -> ContentResult<ContactMessage> {
        let mut store = self.store.write().await;
        let id = store.messages.next_id();
        let message = ContactMessage::receive(Id::new(id), new.clone(), Utc::now());
        store.messages.rows.insert(id, message.clone());
        Ok(message)
    }

    async fn list_messages(&self) -> ContentResult<Vec<ContactMessage>> {
        let store = self.store.read().await;
        let mut messages: Vec<ContactMessage> = store.messages.rows.values().cloned().collect();
        messages.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(messages)
    }

    async fn mark_message_read(&self, id: Id<ContactMessage>) -> ContentResult<bool> {
        let mut store = self.store.write().await;
        match store.messages.rows.get_mut(&id.get()) {
            Some(message) => {
                message.is_read = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_message(&self, id: Id<ContactMessage>) -> ContentResult<bool> {
        let mut store = self.store.write().await;
        Ok(store.messages.rows.remove(&id.get()).is_some())
    }
}
