// src/modules/project/ports.rs

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::sea_orm_entity::projects::ProjectStatus;
use crate::shared::attachments::NewAttachment;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

/// Validated project fields. The slug is never submitted: it is derived from
/// the title at create time and immutable afterwards.
#[derive(Debug, Clone)]
pub struct ProjectFields {
    pub title: String,
    pub project_name: Option<String>,
    pub description: String,
    pub documentation: Option<String>,
    pub category_id: Option<Uuid>,
    pub technologies: String,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub demo_url: Option<String>,
    pub other_url: Option<String>,
    /// `None` on update keeps the stored thumbnail.
    pub thumbnail: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub client: Option<String>,
    pub status: ProjectStatus,
    pub is_active: bool,
    pub is_featured: bool,
    pub is_draft: bool,
    pub order: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScreenshotResult {
    pub id: Uuid,
    pub image: String,
    pub caption: String,
    pub order: i32,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectResult {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub project_name: Option<String>,
    pub description: String,
    pub documentation: Option<String>,
    pub category_id: Option<Uuid>,
    pub technologies: String,
    pub technologies_list: Vec<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub demo_url: Option<String>,
    pub other_url: Option<String>,
    pub thumbnail: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub client: Option<String>,
    pub status: ProjectStatus,
    pub is_active: bool,
    pub is_featured: bool,
    pub is_draft: bool,
    pub views: i32,
    pub likes: i32,
    pub order: i32,
    pub screenshots: Vec<ScreenshotResult>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct DeletedProject {
    pub title: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectListFilter {
    #[default]
    All,
    /// `status = draft`; the draft status doubles as the listing filter.
    Draft,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProjectCounts {
    pub total: u64,
    pub draft: u64,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("Project not found")]
    NotFound,

    #[error("Slug already exists")]
    SlugAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Persist the project and its screenshots (ordinals follow upload
    /// order) in one transaction.
    async fn create(
        &self,
        fields: ProjectFields,
        screenshots: Vec<NewAttachment>,
    ) -> Result<ProjectResult, ProjectRepositoryError>;

    async fn get(&self, project_id: Uuid) -> Result<ProjectResult, ProjectRepositoryError>;

    /// Ordered `(-order, -created_at)`.
    async fn list(
        &self,
        filter: ProjectListFilter,
    ) -> Result<Vec<ProjectResult>, ProjectRepositoryError>;

    /// Latest rows by creation time, for the manage page.
    async fn recent(&self, limit: u64) -> Result<Vec<ProjectResult>, ProjectRepositoryError>;

    async fn counts(&self) -> Result<ProjectCounts, ProjectRepositoryError>;

    /// Full-record update. `Some(files)` replaces the entire screenshot set
    /// in the same transaction; `None` leaves it untouched.
    async fn update(
        &self,
        project_id: Uuid,
        fields: ProjectFields,
        new_screenshots: Option<Vec<NewAttachment>>,
    ) -> Result<ProjectResult, ProjectRepositoryError>;

    /// Flips only `is_active`.
    async fn set_active(
        &self,
        project_id: Uuid,
        active: bool,
    ) -> Result<(), ProjectRepositoryError>;

    /// Hard delete; screenshots cascade and stored blobs are discarded
    /// best-effort.
    async fn delete(&self, project_id: Uuid) -> Result<DeletedProject, ProjectRepositoryError>;
}
