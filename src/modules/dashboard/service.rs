// src/modules/dashboard/service.rs
//
// The dashboard aggregates the other modules' repositories instead of
// issuing its own SQL; every number it shows is already answerable through
// an existing port.

use async_trait::async_trait;
use std::sync::Arc;

use super::ports::{CategoryTally, DashboardData, DashboardQuery, DashboardQueryError};
use crate::modules::achievement::ports::AchievementRepository;
use crate::modules::category::ports::CategoryRepository;
use crate::modules::category::sea_orm_entity::CategoryType;
use crate::modules::experience::ports::ExperienceRepository;
use crate::modules::project::ports::ProjectRepository;
use crate::modules::skill::ports::{SkillListFilter, SkillRepository};

const RECENT_LIMIT: u64 = 3;
const TOP_SKILLS: usize = 5;
const TOP_CATEGORIES: usize = 5;

pub struct DashboardService {
    projects: Arc<dyn ProjectRepository>,
    experience: Arc<dyn ExperienceRepository>,
    skills: Arc<dyn SkillRepository>,
    achievements: Arc<dyn AchievementRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl DashboardService {
    pub fn new(
        projects: Arc<dyn ProjectRepository>,
        experience: Arc<dyn ExperienceRepository>,
        skills: Arc<dyn SkillRepository>,
        achievements: Arc<dyn AchievementRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            projects,
            experience,
            skills,
            achievements,
            categories,
        }
    }
}

fn db_err(msg: impl ToString) -> DashboardQueryError {
    DashboardQueryError::DatabaseError(msg.to_string())
}

#[async_trait]
impl DashboardQuery for DashboardService {
    async fn overview(&self) -> Result<DashboardData, DashboardQueryError> {
        let project_counts = self.projects.counts().await.map_err(db_err)?;
        let experience_counts = self.experience.counts().await.map_err(db_err)?;
        let skill_counts = self.skills.counts().await.map_err(db_err)?;
        let achievement_counts = self.achievements.counts().await.map_err(db_err)?;

        let recent_projects = self.projects.recent(RECENT_LIMIT).await.map_err(db_err)?;
        let recent_experience = self.experience.recent(RECENT_LIMIT).await.map_err(db_err)?;
        let recent_achievements = self
            .achievements
            .recent(RECENT_LIMIT)
            .await
            .map_err(db_err)?;

        let top_skills: Vec<_> = self
            .skills
            .list(SkillListFilter::All)
            .await
            .map_err(db_err)?
            .into_iter()
            .filter(|s| s.is_active)
            .take(TOP_SKILLS)
            .collect();

        let mut category_counts: Vec<CategoryTally> = self
            .categories
            .list(Some(CategoryType::Project))
            .await
            .map_err(db_err)?
            .into_iter()
            .filter(|c| c.item_count > 0)
            .map(|c| CategoryTally {
                name: c.name,
                icon: c.icon,
                count: c.item_count,
            })
            .collect();
        category_counts.sort_by(|a, b| b.count.cmp(&a.count).then(a.name.cmp(&b.name)));
        category_counts.truncate(TOP_CATEGORIES);

        Ok(DashboardData {
            total_projects: project_counts.total,
            total_experience: experience_counts.total,
            total_achievements: achievement_counts.total,
            total_skills: skill_counts.total,
            recent_projects,
            recent_experience,
            recent_achievements,
            top_skills,
            category_counts,
        })
    }
}
