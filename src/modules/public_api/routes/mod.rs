pub mod achievements;
pub mod categories;
pub mod experience;
pub mod profile;
pub mod projects;
pub mod skills;
pub mod summary;

pub use achievements::{get_public_achievement_handler, list_public_achievements_handler};
pub use categories::{get_public_category_handler, list_public_categories_handler};
pub use experience::{get_public_experience_handler, list_public_experience_handler};
pub use profile::get_public_profile_handler;
pub use projects::{
    featured_public_projects_handler, get_public_project_handler, list_public_projects_handler,
};
pub use skills::{get_public_skill_handler, list_public_skills_handler, top_public_skills_handler};
pub use summary::portfolio_summary_handler;
