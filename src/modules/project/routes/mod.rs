pub mod create_project;
pub mod delete_project;
pub mod edit_project;
pub mod list_projects;
pub mod manage_projects;

pub use create_project::{create_project_handler, new_project_handler};
pub use delete_project::delete_project_handler;
pub use edit_project::{edit_project_form_handler, edit_project_handler};
pub use list_projects::list_projects_handler;
pub use manage_projects::{manage_projects_handler, toggle_project_handler};
