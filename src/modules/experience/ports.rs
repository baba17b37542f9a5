// src/modules/experience/ports.rs

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::sea_orm_entity::experiences::{EmploymentStatus, EmploymentType};
use crate::shared::attachments::NewAttachment;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

/// Validated experience fields. The slug is derived from the position at
/// create time and immutable afterwards. `end_date` is already cleared when
/// `currently_working` is set.
#[derive(Debug, Clone)]
pub struct ExperienceFields {
    pub position: String,
    pub company_name: String,
    /// `None` on update keeps the stored logo.
    pub company_logo: Option<String>,
    pub location: Option<String>,
    pub employment_type: EmploymentType,
    pub employment_status: EmploymentStatus,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub currently_working: bool,
    pub short_description: String,
    pub detailed_description: String,
    pub is_active: bool,
    pub is_draft: bool,
    pub order: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExperienceImageResult {
    pub id: Uuid,
    pub image: String,
    pub caption: String,
    pub order: i32,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExperienceResult {
    pub id: Uuid,
    pub position: String,
    pub slug: String,
    pub company_name: String,
    pub company_logo: Option<String>,
    pub location: Option<String>,
    pub employment_type: EmploymentType,
    pub employment_status: EmploymentStatus,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub currently_working: bool,
    pub short_description: String,
    pub detailed_description: String,
    pub is_active: bool,
    pub is_draft: bool,
    pub order: i32,
    pub images: Vec<ExperienceImageResult>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct DeletedExperience {
    pub position: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExperienceListFilter {
    #[default]
    All,
    Draft,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ExperienceCounts {
    pub total: u64,
    pub draft: u64,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ExperienceRepositoryError {
    #[error("Experience not found")]
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
pub trait ExperienceRepository: Send + Sync {
    /// Persist the experience and its workplace images (ordinals follow
    /// upload order) in one transaction.
    async fn create(
        &self,
        fields: ExperienceFields,
        images: Vec<NewAttachment>,
    ) -> Result<ExperienceResult, ExperienceRepositoryError>;

    async fn get(&self, experience_id: Uuid)
        -> Result<ExperienceResult, ExperienceRepositoryError>;

    /// Ordered `(-order, -start_date)`.
    async fn list(
        &self,
        filter: ExperienceListFilter,
    ) -> Result<Vec<ExperienceResult>, ExperienceRepositoryError>;

    /// First rows of the fixed ordering, for the manage page.
    async fn recent(&self, limit: u64) -> Result<Vec<ExperienceResult>, ExperienceRepositoryError>;

    async fn counts(&self) -> Result<ExperienceCounts, ExperienceRepositoryError>;

    /// Full-record update. `Some(files)` replaces the entire image set in the
    /// same transaction; `None` leaves it untouched.
    async fn update(
        &self,
        experience_id: Uuid,
        fields: ExperienceFields,
        new_images: Option<Vec<NewAttachment>>,
    ) -> Result<ExperienceResult, ExperienceRepositoryError>;

    /// Flips only `is_active`.
    async fn set_active(
        &self,
        experience_id: Uuid,
        active: bool,
    ) -> Result<(), ExperienceRepositoryError>;

    /// Hard delete; images cascade and stored blobs are discarded best-effort.
    async fn delete(
        &self,
        experience_id: Uuid,
    ) -> Result<DeletedExperience, ExperienceRepositoryError>;
}
