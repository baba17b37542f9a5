// src/modules/achievement/ports.rs

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::sea_orm_entity::{AchievementCategory, CredentialType};
use crate::modules::skill::sea_orm_entity::IconType;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

/// Validated achievement fields. `expiration_date` is already cleared when
/// `no_expiration` is set; an absent slug is derived from the title.
#[derive(Debug, Clone)]
pub struct AchievementFields {
    pub title: String,
    pub slug: Option<String>,
    pub category: AchievementCategory,
    pub description: Option<String>,
    pub issuing_organization: String,
    pub achievement_date: NaiveDate,
    pub expiration_date: Option<NaiveDate>,
    pub no_expiration: bool,
    pub icon_type: IconType,
    pub icon_class: Option<String>,
    pub icon_image: Option<String>,
    pub credential_type: CredentialType,
    pub credential_file: Option<String>,
    pub credential_url: Option<String>,
    pub is_active: bool,
    pub is_draft: bool,
    pub order: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct AchievementResult {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub category: AchievementCategory,
    pub description: Option<String>,
    pub issuing_organization: String,
    pub achievement_date: NaiveDate,
    pub expiration_date: Option<NaiveDate>,
    pub no_expiration: bool,
    pub icon_type: IconType,
    pub icon_class: Option<String>,
    pub icon_image: Option<String>,
    pub credential_type: CredentialType,
    pub credential_file: Option<String>,
    pub credential_url: Option<String>,
    pub is_active: bool,
    pub is_draft: bool,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct DeletedAchievement {
    pub title: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AchievementListFilter {
    #[default]
    All,
    Draft,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct AchievementCounts {
    pub total: u64,
    pub draft: u64,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum AchievementRepositoryError {
    #[error("Achievement not found")]
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
pub trait AchievementRepository: Send + Sync {
    async fn create(
        &self,
        fields: AchievementFields,
    ) -> Result<AchievementResult, AchievementRepositoryError>;

    async fn get(
        &self,
        achievement_id: Uuid,
    ) -> Result<AchievementResult, AchievementRepositoryError>;

    /// Ordered `(-achievement_date, title)`.
    async fn list(
        &self,
        filter: AchievementListFilter,
    ) -> Result<Vec<AchievementResult>, AchievementRepositoryError>;

    /// Latest rows by creation time, for the manage page.
    async fn recent(&self, limit: u64)
        -> Result<Vec<AchievementResult>, AchievementRepositoryError>;

    async fn counts(&self) -> Result<AchievementCounts, AchievementRepositoryError>;

    async fn update(
        &self,
        achievement_id: Uuid,
        fields: AchievementFields,
    ) -> Result<AchievementResult, AchievementRepositoryError>;

    /// Flips only `is_active`.
    async fn set_active(
        &self,
        achievement_id: Uuid,
        active: bool,
    ) -> Result<(), AchievementRepositoryError>;

    /// Hard delete; stored icon/credential blobs are discarded best-effort.
    async fn delete(
        &self,
        achievement_id: Uuid,
    ) -> Result<DeletedAchievement, AchievementRepositoryError>;
}
