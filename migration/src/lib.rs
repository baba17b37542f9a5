pub use sea_orm_migration::prelude::*;

mod m20260715_000001_create_table_categories;
mod m20260715_000002_create_table_projects;
mod m20260715_000003_create_table_project_screenshots;
mod m20260715_000004_create_table_experiences;
mod m20260715_000005_create_table_experience_images;
mod m20260715_000006_create_table_skills;
mod m20260715_000007_create_table_achievements;
mod m20260715_000008_create_table_user_profiles;
mod m20260715_000009_create_table_notifications;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260715_000001_create_table_categories::Migration),
            Box::new(m20260715_000002_create_table_projects::Migration),
            Box::new(m20260715_000003_create_table_project_screenshots::Migration),
            Box::new(m20260715_000004_create_table_experiences::Migration),
            Box::new(m20260715_000005_create_table_experience_images::Migration),
            Box::new(m20260715_000006_create_table_skills::Migration),
            Box::new(m20260715_000007_create_table_achievements::Migration),
            Box::new(m20260715_000008_create_table_user_profiles::Migration),
            Box::new(m20260715_000009_create_table_notifications::Migration),
        ]
    }
}
