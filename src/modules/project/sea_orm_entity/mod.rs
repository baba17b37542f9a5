pub mod project_screenshots;
pub mod projects;
