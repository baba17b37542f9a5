// src/tests/support/mocks.rs
//
// Hand-rolled port mocks for handler tests. Every field is optional: set the
// results a test exercises, leave the rest to panic (or, for list-shaped
// reads, to answer empty) so unrelated calls surface loudly.

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::achievement::ports::{
    AchievementCounts, AchievementFields, AchievementListFilter, AchievementRepository,
    AchievementRepositoryError, AchievementResult, DeletedAchievement,
};
use crate::modules::category::ports::{
    CategoryFields, CategoryRepository, CategoryRepositoryError, CategoryResult,
};
use crate::modules::category::sea_orm_entity::CategoryType;
use crate::modules::dashboard::ports::{DashboardData, DashboardQuery, DashboardQueryError};
use crate::modules::experience::ports::{
    DeletedExperience, ExperienceCounts, ExperienceFields, ExperienceListFilter,
    ExperienceRepository, ExperienceRepositoryError, ExperienceResult,
};
use crate::modules::notification::ports::{
    NotificationCounts, NotificationFields, NotificationFilter, NotificationRepository,
    NotificationRepositoryError, NotificationResult,
};
use crate::modules::profile::ports::{
    ProfileRepository, ProfileRepositoryError, ProfileResult, ProfileUpdate,
};
use crate::modules::project::ports::{
    DeletedProject, ProjectCounts, ProjectFields, ProjectListFilter, ProjectRepository,
    ProjectRepositoryError, ProjectResult,
};
use crate::modules::public_api::ports::{
    PublicPortfolioQuery, PublicProjectFilter, PublicQueryError,
};
use crate::modules::public_api::schemas::{
    PortfolioSummary, PublicAchievement, PublicCategory, PublicExperience, PublicProject,
    PublicSkill,
};
use crate::modules::skill::ports::{
    DeletedSkill, SkillCounts, SkillFields, SkillListFilter, SkillRepository,
    SkillRepositoryError, SkillResult,
};
use crate::shared::attachments::NewAttachment;

/* --------------------------------------------------
 * Category
 * -------------------------------------------------- */

#[derive(Default)]
pub struct MockCategoryRepository {
    pub create_result: Option<Result<CategoryResult, CategoryRepositoryError>>,
    pub get_result: Option<Result<CategoryResult, CategoryRepositoryError>>,
    pub list_result: Option<Result<Vec<CategoryResult>, CategoryRepositoryError>>,
    pub update_result: Option<Result<CategoryResult, CategoryRepositoryError>>,
    pub delete_result: Option<Result<String, CategoryRepositoryError>>,
}

#[async_trait]
impl CategoryRepository for MockCategoryRepository {
    async fn create(
        &self,
        _fields: CategoryFields,
    ) -> Result<CategoryResult, CategoryRepositoryError> {
        self.create_result.clone().expect("create not mocked")
    }

    async fn get(&self, _id: Uuid) -> Result<CategoryResult, CategoryRepositoryError> {
        self.get_result.clone().expect("get not mocked")
    }

    async fn list(
        &self,
        _category_type: Option<CategoryType>,
    ) -> Result<Vec<CategoryResult>, CategoryRepositoryError> {
        self.list_result.clone().unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn update(
        &self,
        _id: Uuid,
        _fields: CategoryFields,
    ) -> Result<CategoryResult, CategoryRepositoryError> {
        self.update_result.clone().expect("update not mocked")
    }

    async fn delete(&self, _id: Uuid) -> Result<String, CategoryRepositoryError> {
        self.delete_result.clone().expect("delete not mocked")
    }
}

/* --------------------------------------------------
 * Project
 * -------------------------------------------------- */

#[derive(Default)]
pub struct MockProjectRepository {
    pub create_result: Option<Result<ProjectResult, ProjectRepositoryError>>,
    pub get_result: Option<Result<ProjectResult, ProjectRepositoryError>>,
    pub list_result: Option<Result<Vec<ProjectResult>, ProjectRepositoryError>>,
    pub recent_result: Option<Result<Vec<ProjectResult>, ProjectRepositoryError>>,
    pub counts_result: Option<Result<ProjectCounts, ProjectRepositoryError>>,
    pub update_result: Option<Result<ProjectResult, ProjectRepositoryError>>,
    pub set_active_result: Option<Result<(), ProjectRepositoryError>>,
    pub delete_result: Option<Result<DeletedProject, ProjectRepositoryError>>,
}

#[async_trait]
impl ProjectRepository for MockProjectRepository {
    async fn create(
        &self,
        _fields: ProjectFields,
        _screenshots: Vec<NewAttachment>,
    ) -> Result<ProjectResult, ProjectRepositoryError> {
        self.create_result.clone().expect("create not mocked")
    }

    async fn get(&self, _id: Uuid) -> Result<ProjectResult, ProjectRepositoryError> {
        self.get_result.clone().expect("get not mocked")
    }

    async fn list(
        &self,
        _filter: ProjectListFilter,
    ) -> Result<Vec<ProjectResult>, ProjectRepositoryError> {
        self.list_result.clone().unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn recent(&self, _limit: u64) -> Result<Vec<ProjectResult>, ProjectRepositoryError> {
        self.recent_result.clone().unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn counts(&self) -> Result<ProjectCounts, ProjectRepositoryError> {
        self.counts_result.clone().expect("counts not mocked")
    }

    async fn update(
        &self,
        _id: Uuid,
        _fields: ProjectFields,
        _new_screenshots: Option<Vec<NewAttachment>>,
    ) -> Result<ProjectResult, ProjectRepositoryError> {
        self.update_result.clone().expect("update not mocked")
    }

    async fn set_active(&self, _id: Uuid, _active: bool) -> Result<(), ProjectRepositoryError> {
        self.set_active_result.clone().expect("set_active not mocked")
    }

    async fn delete(&self, _id: Uuid) -> Result<DeletedProject, ProjectRepositoryError> {
        self.delete_result.clone().expect("delete not mocked")
    }
}

/* --------------------------------------------------
 * Experience
 * -------------------------------------------------- */

#[derive(Default)]
pub struct MockExperienceRepository {
    pub create_result: Option<Result<ExperienceResult, ExperienceRepositoryError>>,
    pub get_result: Option<Result<ExperienceResult, ExperienceRepositoryError>>,
    pub list_result: Option<Result<Vec<ExperienceResult>, ExperienceRepositoryError>>,
    pub recent_result: Option<Result<Vec<ExperienceResult>, ExperienceRepositoryError>>,
    pub counts_result: Option<Result<ExperienceCounts, ExperienceRepositoryError>>,
    pub update_result: Option<Result<ExperienceResult, ExperienceRepositoryError>>,
    pub set_active_result: Option<Result<(), ExperienceRepositoryError>>,
    pub delete_result: Option<Result<DeletedExperience, ExperienceRepositoryError>>,
}

#[async_trait]
impl ExperienceRepository for MockExperienceRepository {
    async fn create(
        &self,
        _fields: ExperienceFields,
        _images: Vec<NewAttachment>,
    ) -> Result<ExperienceResult, ExperienceRepositoryError> {
        self.create_result.clone().expect("create not mocked")
    }

    async fn get(&self, _id: Uuid) -> Result<ExperienceResult, ExperienceRepositoryError> {
        self.get_result.clone().expect("get not mocked")
    }

    async fn list(
        &self,
        _filter: ExperienceListFilter,
    ) -> Result<Vec<ExperienceResult>, ExperienceRepositoryError> {
        self.list_result.clone().unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn recent(&self, _limit: u64) -> Result<Vec<ExperienceResult>, ExperienceRepositoryError> {
        self.recent_result.clone().unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn counts(&self) -> Result<ExperienceCounts, ExperienceRepositoryError> {
        self.counts_result.clone().expect("counts not mocked")
    }

    async fn update(
        &self,
        _id: Uuid,
        _fields: ExperienceFields,
        _new_images: Option<Vec<NewAttachment>>,
    ) -> Result<ExperienceResult, ExperienceRepositoryError> {
        self.update_result.clone().expect("update not mocked")
    }

    async fn set_active(&self, _id: Uuid, _active: bool) -> Result<(), ExperienceRepositoryError> {
        self.set_active_result.clone().expect("set_active not mocked")
    }

    async fn delete(&self, _id: Uuid) -> Result<DeletedExperience, ExperienceRepositoryError> {
        self.delete_result.clone().expect("delete not mocked")
    }
}

/* --------------------------------------------------
 * Skill
 * -------------------------------------------------- */

#[derive(Default)]
pub struct MockSkillRepository {
    pub create_result: Option<Result<SkillResult, SkillRepositoryError>>,
    pub get_result: Option<Result<SkillResult, SkillRepositoryError>>,
    pub list_result: Option<Result<Vec<SkillResult>, SkillRepositoryError>>,
    pub recent_result: Option<Result<Vec<SkillResult>, SkillRepositoryError>>,
    pub counts_result: Option<Result<SkillCounts, SkillRepositoryError>>,
    pub update_result: Option<Result<SkillResult, SkillRepositoryError>>,
    pub set_active_result: Option<Result<(), SkillRepositoryError>>,
    pub delete_result: Option<Result<DeletedSkill, SkillRepositoryError>>,
}

#[async_trait]
impl SkillRepository for MockSkillRepository {
    async fn create(&self, _fields: SkillFields) -> Result<SkillResult, SkillRepositoryError> {
        self.create_result.clone().expect("create not mocked")
    }

    async fn get(&self, _id: Uuid) -> Result<SkillResult, SkillRepositoryError> {
        self.get_result.clone().expect("get not mocked")
    }

    async fn list(
        &self,
        _filter: SkillListFilter,
    ) -> Result<Vec<SkillResult>, SkillRepositoryError> {
        self.list_result.clone().unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn recent(&self, _limit: u64) -> Result<Vec<SkillResult>, SkillRepositoryError> {
        self.recent_result.clone().unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn counts(&self) -> Result<SkillCounts, SkillRepositoryError> {
        self.counts_result.clone().expect("counts not mocked")
    }

    async fn update(
        &self,
        _id: Uuid,
        _fields: SkillFields,
    ) -> Result<SkillResult, SkillRepositoryError> {
        self.update_result.clone().expect("update not mocked")
    }

    async fn set_active(&self, _id: Uuid, _active: bool) -> Result<(), SkillRepositoryError> {
        self.set_active_result.clone().expect("set_active not mocked")
    }

    async fn delete(&self, _id: Uuid) -> Result<DeletedSkill, SkillRepositoryError> {
        self.delete_result.clone().expect("delete not mocked")
    }
}

/* --------------------------------------------------
 * Achievement
 * -------------------------------------------------- */

#[derive(Default)]
pub struct MockAchievementRepository {
    pub create_result: Option<Result<AchievementResult, AchievementRepositoryError>>,
    pub get_result: Option<Result<AchievementResult, AchievementRepositoryError>>,
    pub list_result: Option<Result<Vec<AchievementResult>, AchievementRepositoryError>>,
    pub recent_result: Option<Result<Vec<AchievementResult>, AchievementRepositoryError>>,
    pub counts_result: Option<Result<AchievementCounts, AchievementRepositoryError>>,
    pub update_result: Option<Result<AchievementResult, AchievementRepositoryError>>,
    pub set_active_result: Option<Result<(), AchievementRepositoryError>>,
    pub delete_result: Option<Result<DeletedAchievement, AchievementRepositoryError>>,
}

#[async_trait]
impl AchievementRepository for MockAchievementRepository {
    async fn create(
        &self,
        _fields: AchievementFields,
    ) -> Result<AchievementResult, AchievementRepositoryError> {
        self.create_result.clone().expect("create not mocked")
    }

    async fn get(&self, _id: Uuid) -> Result<AchievementResult, AchievementRepositoryError> {
        self.get_result.clone().expect("get not mocked")
    }

    async fn list(
        &self,
        _filter: AchievementListFilter,
    ) -> Result<Vec<AchievementResult>, AchievementRepositoryError> {
        self.list_result.clone().unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn recent(
        &self,
        _limit: u64,
    ) -> Result<Vec<AchievementResult>, AchievementRepositoryError> {
        self.recent_result.clone().unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn counts(&self) -> Result<AchievementCounts, AchievementRepositoryError> {
        self.counts_result.clone().expect("counts not mocked")
    }

    async fn update(
        &self,
        _id: Uuid,
        _fields: AchievementFields,
    ) -> Result<AchievementResult, AchievementRepositoryError> {
        self.update_result.clone().expect("update not mocked")
    }

    async fn set_active(
        &self,
        _id: Uuid,
        _active: bool,
    ) -> Result<(), AchievementRepositoryError> {
        self.set_active_result.clone().expect("set_active not mocked")
    }

    async fn delete(&self, _id: Uuid) -> Result<DeletedAchievement, AchievementRepositoryError> {
        self.delete_result.clone().expect("delete not mocked")
    }
}

/* --------------------------------------------------
 * Profile
 * -------------------------------------------------- */

#[derive(Default)]
pub struct MockProfileRepository {
    pub get_or_create_result: Option<Result<ProfileResult, ProfileRepositoryError>>,
    pub first_result: Option<Result<Option<ProfileResult>, ProfileRepositoryError>>,
    pub apply_result: Option<Result<ProfileResult, ProfileRepositoryError>>,
}

#[async_trait]
impl ProfileRepository for MockProfileRepository {
    async fn get_or_create(&self) -> Result<ProfileResult, ProfileRepositoryError> {
        self.get_or_create_result
            .clone()
            .expect("get_or_create not mocked")
    }

    async fn first(&self) -> Result<Option<ProfileResult>, ProfileRepositoryError> {
        self.first_result.clone().unwrap_or(Ok(None))
    }

    async fn apply(&self, _update: ProfileUpdate) -> Result<ProfileResult, ProfileRepositoryError> {
        self.apply_result.clone().expect("apply not mocked")
    }
}

/* --------------------------------------------------
 * Notification
 * -------------------------------------------------- */

#[derive(Default)]
pub struct MockNotificationRepository {
    pub save_result: Option<Result<NotificationResult, NotificationRepositoryError>>,
    pub get_result: Option<Result<NotificationResult, NotificationRepositoryError>>,
    pub list_result: Option<Result<Vec<NotificationResult>, NotificationRepositoryError>>,
    pub counts_result: Option<Result<NotificationCounts, NotificationRepositoryError>>,
    pub delete_result: Option<Result<(), NotificationRepositoryError>>,
    pub mark_read_result: Option<Result<(), NotificationRepositoryError>>,
    pub mark_all_read_result: Option<Result<u64, NotificationRepositoryError>>,
}

#[async_trait]
impl NotificationRepository for MockNotificationRepository {
    async fn save(
        &self,
        _id: Option<Uuid>,
        _fields: NotificationFields,
    ) -> Result<NotificationResult, NotificationRepositoryError> {
        self.save_result.clone().expect("save not mocked")
    }

    async fn get(&self, _id: Uuid) -> Result<NotificationResult, NotificationRepositoryError> {
        self.get_result.clone().expect("get not mocked")
    }

    async fn list(
        &self,
        _filter: NotificationFilter,
    ) -> Result<Vec<NotificationResult>, NotificationRepositoryError> {
        self.list_result.clone().unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn counts(&self) -> Result<NotificationCounts, NotificationRepositoryError> {
        self.counts_result.clone().expect("counts not mocked")
    }

    async fn delete(&self, _id: Uuid) -> Result<(), NotificationRepositoryError> {
        self.delete_result.clone().expect("delete not mocked")
    }

    async fn mark_read(&self, _id: Uuid) -> Result<(), NotificationRepositoryError> {
        self.mark_read_result.clone().expect("mark_read not mocked")
    }

    async fn mark_all_read(&self) -> Result<u64, NotificationRepositoryError> {
        self.mark_all_read_result.clone().unwrap_or(Ok(0))
    }
}

/* --------------------------------------------------
 * Dashboard
 * -------------------------------------------------- */

#[derive(Default)]
pub struct MockDashboardQuery {
    pub overview_result: Option<Result<DashboardData, DashboardQueryError>>,
}

#[async_trait]
impl DashboardQuery for MockDashboardQuery {
    async fn overview(&self) -> Result<DashboardData, DashboardQueryError> {
        self.overview_result.clone().expect("overview not mocked")
    }
}

/* --------------------------------------------------
 * Public API
 * -------------------------------------------------- */

#[derive(Default)]
pub struct MockPublicPortfolioQuery {
    pub list_projects_result: Option<Result<Vec<PublicProject>, PublicQueryError>>,
    pub project_by_slug_result: Option<Result<PublicProject, PublicQueryError>>,
    pub featured_projects_result: Option<Result<Vec<PublicProject>, PublicQueryError>>,
    pub list_experience_result: Option<Result<Vec<PublicExperience>, PublicQueryError>>,
    pub experience_by_id_result: Option<Result<PublicExperience, PublicQueryError>>,
    pub list_skills_result: Option<Result<Vec<PublicSkill>, PublicQueryError>>,
    pub skill_by_id_result: Option<Result<PublicSkill, PublicQueryError>>,
    pub top_skills_result: Option<Result<Vec<PublicSkill>, PublicQueryError>>,
    pub list_achievements_result: Option<Result<Vec<PublicAchievement>, PublicQueryError>>,
    pub achievement_by_id_result: Option<Result<PublicAchievement, PublicQueryError>>,
    pub list_categories_result: Option<Result<Vec<PublicCategory>, PublicQueryError>>,
    pub category_by_slug_result: Option<Result<PublicCategory, PublicQueryError>>,
    pub profile_result: Option<Result<Option<ProfileResult>, PublicQueryError>>,
    pub summary_result: Option<Result<PortfolioSummary, PublicQueryError>>,
}

#[async_trait]
impl PublicPortfolioQuery for MockPublicPortfolioQuery {
    async fn list_projects(
        &self,
        _filter: PublicProjectFilter,
    ) -> Result<Vec<PublicProject>, PublicQueryError> {
        self.list_projects_result
            .clone()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn project_by_slug(&self, _slug: &str) -> Result<PublicProject, PublicQueryError> {
        self.project_by_slug_result
            .clone()
            .expect("project_by_slug not mocked")
    }

    async fn featured_projects(&self) -> Result<Vec<PublicProject>, PublicQueryError> {
        self.featured_projects_result
            .clone()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn list_experience(&self) -> Result<Vec<PublicExperience>, PublicQueryError> {
        self.list_experience_result
            .clone()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn experience_by_id(&self, _id: Uuid) -> Result<PublicExperience, PublicQueryError> {
        self.experience_by_id_result
            .clone()
            .expect("experience_by_id not mocked")
    }

    async fn list_skills(
        &self,
        _category: Option<String>,
    ) -> Result<Vec<PublicSkill>, PublicQueryError> {
        self.list_skills_result
            .clone()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn skill_by_id(&self, _id: Uuid) -> Result<PublicSkill, PublicQueryError> {
        self.skill_by_id_result
            .clone()
            .expect("skill_by_id not mocked")
    }

    async fn top_skills(&self) -> Result<Vec<PublicSkill>, PublicQueryError> {
        self.top_skills_result
            .clone()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn list_achievements(
        &self,
        _category: Option<String>,
    ) -> Result<Vec<PublicAchievement>, PublicQueryError> {
        self.list_achievements_result
            .clone()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn achievement_by_id(&self, _id: Uuid) -> Result<PublicAchievement, PublicQueryError> {
        self.achievement_by_id_result
            .clone()
            .expect("achievement_by_id not mocked")
    }

    async fn list_categories(
        &self,
        _category_type: Option<String>,
    ) -> Result<Vec<PublicCategory>, PublicQueryError> {
        self.list_categories_result
            .clone()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn category_by_slug(&self, _slug: &str) -> Result<PublicCategory, PublicQueryError> {
        self.category_by_slug_result
            .clone()
            .expect("category_by_slug not mocked")
    }

    async fn profile(&self) -> Result<Option<ProfileResult>, PublicQueryError> {
        self.profile_result.clone().unwrap_or(Ok(None))
    }

    async fn summary(&self) -> Result<PortfolioSummary, PublicQueryError> {
        self.summary_result.clone().expect("summary not mocked")
    }
}
