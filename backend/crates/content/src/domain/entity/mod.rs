//! Domain Entities

pub mod blog;
pub mod contact;
pub mod navigation;
pub mod profile;
pub mod project;
pub mod resume;
pub mod section;
pub mod skill;

pub use blog::{BlogPost, BlogPostPatch, NewBlogPost};
pub use contact::{ContactMessage, NewContactMessage};
pub use navigation::{NavigationItem, NavigationItemPatch, NewNavigationItem};
pub use profile::{Profile, ProfileInput, PublicProfile};
pub use project::{NewProject, Project, ProjectPatch};
pub use resume::{Education, EducationPatch, Experience, ExperiencePatch, NewEducation, NewExperience};
pub use section::{ContentSection, SectionInput};
pub use skill::{
    NewSkill, NewSkillCategory, Skill, SkillCategory, SkillCategoryPatch, SkillPatch,
    SkillWithCategory,
};
