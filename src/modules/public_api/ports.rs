// src/modules/public_api/ports.rs

use async_trait::async_trait;
use uuid::Uuid;

use super::schemas::{
    PortfolioSummary, PublicAchievement, PublicCategory, PublicExperience, PublicProject,
    PublicSkill,
};
use crate::modules::profile::ports::ProfileResult;

//
// ──────────────────────────────────────────────────────────
// Filters
// ──────────────────────────────────────────────────────────
//

/// Equality filters applied only when the query string supplies them.
#[derive(Debug, Clone, Default)]
pub struct PublicProjectFilter {
    /// Category slug.
    pub category: Option<String>,
    /// Stored status value, e.g. "completed".
    pub status: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum PublicQueryError {
    #[error("Not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

/// Read-only view over published content. Every listing excludes inactive
/// and draft rows unconditionally.
#[async_trait]
pub trait PublicPortfolioQuery: Send + Sync {
    async fn list_projects(
        &self,
        filter: PublicProjectFilter,
    ) -> Result<Vec<PublicProject>, PublicQueryError>;

    async fn project_by_slug(&self, slug: &str) -> Result<PublicProject, PublicQueryError>;

    /// Featured rows only, capped at a fixed count.
    async fn featured_projects(&self) -> Result<Vec<PublicProject>, PublicQueryError>;

    async fn list_experience(&self) -> Result<Vec<PublicExperience>, PublicQueryError>;

    async fn experience_by_id(&self, id: Uuid) -> Result<PublicExperience, PublicQueryError>;

    async fn list_skills(
        &self,
        category: Option<String>,
    ) -> Result<Vec<PublicSkill>, PublicQueryError>;

    async fn skill_by_id(&self, id: Uuid) -> Result<PublicSkill, PublicQueryError>;

    /// Highest-proficiency rows, capped at a fixed count.
    async fn top_skills(&self) -> Result<Vec<PublicSkill>, PublicQueryError>;

    async fn list_achievements(
        &self,
        category: Option<String>,
    ) -> Result<Vec<PublicAchievement>, PublicQueryError>;

    async fn achievement_by_id(&self, id: Uuid) -> Result<PublicAchievement, PublicQueryError>;

    async fn list_categories(
        &self,
        category_type: Option<String>,
    ) -> Result<Vec<PublicCategory>, PublicQueryError>;

    async fn category_by_slug(&self, slug: &str) -> Result<PublicCategory, PublicQueryError>;

    /// First profile by creation order; `None` when no row exists.
    async fn profile(&self) -> Result<Option<ProfileResult>, PublicQueryError>;

    async fn summary(&self) -> Result<PortfolioSummary, PublicQueryError>;
}
