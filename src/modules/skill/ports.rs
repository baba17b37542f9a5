// src/modules/skill/ports.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::sea_orm_entity::{CertificateType, IconType, SkillLevel};

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

/// Validated skill fields; `proficiency` is already within 0..=100. File
/// fields set to `None` on update keep the stored references.
#[derive(Debug, Clone)]
pub struct SkillFields {
    pub name: String,
    pub category_id: Option<Uuid>,
    pub description: Option<String>,
    pub skill_level: SkillLevel,
    pub proficiency: i32,
    pub years_of_experience: i32,
    pub icon_type: IconType,
    pub icon_class: Option<String>,
    pub icon_image: Option<String>,
    pub certificate_type: CertificateType,
    pub certificate_file: Option<String>,
    pub certificate_url: Option<String>,
    pub is_active: bool,
    pub is_draft: bool,
    pub order: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillResult {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub category_id: Option<Uuid>,
    pub description: Option<String>,
    pub skill_level: SkillLevel,
    pub skill_level_display: String,
    pub proficiency: i32,
    pub years_of_experience: i32,
    pub icon_type: IconType,
    pub icon_class: Option<String>,
    pub icon_image: Option<String>,
    pub certificate_type: CertificateType,
    pub certificate_file: Option<String>,
    pub certificate_url: Option<String>,
    pub is_active: bool,
    pub is_draft: bool,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct DeletedSkill {
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkillListFilter {
    #[default]
    All,
    Draft,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SkillCounts {
    pub total: u64,
    pub draft: u64,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum SkillRepositoryError {
    #[error("Skill not found")]
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
pub trait SkillRepository: Send + Sync {
    async fn create(&self, fields: SkillFields) -> Result<SkillResult, SkillRepositoryError>;

    async fn get(&self, skill_id: Uuid) -> Result<SkillResult, SkillRepositoryError>;

    /// Ordered `(-proficiency, name)`.
    async fn list(&self, filter: SkillListFilter)
        -> Result<Vec<SkillResult>, SkillRepositoryError>;

    /// Latest rows by creation time, for the manage page.
    async fn recent(&self, limit: u64) -> Result<Vec<SkillResult>, SkillRepositoryError>;

    async fn counts(&self) -> Result<SkillCounts, SkillRepositoryError>;

    async fn update(
        &self,
        skill_id: Uuid,
        fields: SkillFields,
    ) -> Result<SkillResult, SkillRepositoryError>;

    /// Flips only `is_active`.
    async fn set_active(&self, skill_id: Uuid, active: bool)
        -> Result<(), SkillRepositoryError>;

    /// Hard delete; stored icon/certificate blobs are discarded best-effort.
    async fn delete(&self, skill_id: Uuid) -> Result<DeletedSkill, SkillRepositoryError>;
}
