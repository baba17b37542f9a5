// src/modules/dashboard/ports.rs

use async_trait::async_trait;
use serde::Serialize;

use crate::modules::achievement::ports::AchievementResult;
use crate::modules::experience::ports::ExperienceResult;
use crate::modules::project::ports::ProjectResult;
use crate::modules::skill::ports::SkillResult;

/// Projects-per-category tally for the dashboard chart, largest first.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryTally {
    pub name: String,
    pub icon: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardData {
    pub total_projects: u64,
    pub total_experience: u64,
    pub total_achievements: u64,
    pub total_skills: u64,
    pub recent_projects: Vec<ProjectResult>,
    pub recent_experience: Vec<ExperienceResult>,
    pub recent_achievements: Vec<AchievementResult>,
    pub top_skills: Vec<SkillResult>,
    pub category_counts: Vec<CategoryTally>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum DashboardQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait DashboardQuery: Send + Sync {
    /// Entity totals, the three most recent rows per entity, the top five
    /// active skills and the top five project-category tallies.
    async fn overview(&self) -> Result<DashboardData, DashboardQueryError>;
}
