// src/tests/support/app_state_builder.rs
//
// Builds an AppState for handler tests: every port defaults to a mock that
// answers list-shaped reads with empty data and panics on anything else, so
// each test only wires the port it exercises.

use actix_web::web;
use std::sync::Arc;

use super::mocks::{
    MockAchievementRepository, MockCategoryRepository, MockDashboardQuery,
    MockExperienceRepository, MockNotificationRepository, MockProfileRepository,
    MockProjectRepository, MockPublicPortfolioQuery, MockSkillRepository,
};
use crate::modules::achievement::ports::AchievementRepository;
use crate::modules::category::ports::CategoryRepository;
use crate::modules::dashboard::ports::DashboardQuery;
use crate::modules::experience::ports::ExperienceRepository;
use crate::modules::notification::ports::NotificationRepository;
use crate::modules::profile::ports::ProfileRepository;
use crate::modules::project::ports::ProjectRepository;
use crate::modules::public_api::ports::PublicPortfolioQuery;
use crate::modules::skill::ports::SkillRepository;
use crate::AppState;

pub struct TestAppStateBuilder {
    categories: Arc<dyn CategoryRepository>,
    projects: Arc<dyn ProjectRepository>,
    experience: Arc<dyn ExperienceRepository>,
    skills: Arc<dyn SkillRepository>,
    achievements: Arc<dyn AchievementRepository>,
    profile: Arc<dyn ProfileRepository>,
    notifications: Arc<dyn NotificationRepository>,
    dashboard: Arc<dyn DashboardQuery>,
    public_query: Arc<dyn PublicPortfolioQuery>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            categories: Arc::new(MockCategoryRepository::default()),
            projects: Arc::new(MockProjectRepository::default()),
            experience: Arc::new(MockExperienceRepository::default()),
            skills: Arc::new(MockSkillRepository::default()),
            achievements: Arc::new(MockAchievementRepository::default()),
            profile: Arc::new(MockProfileRepository::default()),
            notifications: Arc::new(MockNotificationRepository::default()),
            dashboard: Arc::new(MockDashboardQuery::default()),
            public_query: Arc::new(MockPublicPortfolioQuery::default()),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_categories(mut self, repo: impl CategoryRepository + 'static) -> Self {
        self.categories = Arc::new(repo);
        self
    }

    pub fn with_projects(mut self, repo: impl ProjectRepository + 'static) -> Self {
        self.projects = Arc::new(repo);
        self
    }

    pub fn with_experience(mut self, repo: impl ExperienceRepository + 'static) -> Self {
        self.experience = Arc::new(repo);
        self
    }

    pub fn with_skills(mut self, repo: impl SkillRepository + 'static) -> Self {
        self.skills = Arc::new(repo);
        self
    }

    pub fn with_achievements(mut self, repo: impl AchievementRepository + 'static) -> Self {
        self.achievements = Arc::new(repo);
        self
    }

    pub fn with_profile(mut self, repo: impl ProfileRepository + 'static) -> Self {
        self.profile = Arc::new(repo);
        self
    }

    pub fn with_notifications(mut self, repo: impl NotificationRepository + 'static) -> Self {
        self.notifications = Arc::new(repo);
        self
    }

    pub fn with_dashboard(mut self, query: impl DashboardQuery + 'static) -> Self {
        self.dashboard = Arc::new(query);
        self
    }

    pub fn with_public_query(mut self, query: impl PublicPortfolioQuery + 'static) -> Self {
        self.public_query = Arc::new(query);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            categories: self.categories,
            projects: self.projects,
            experience: self.experience,
            skills: self.skills,
            achievements: self.achievements,
            profile: self.profile,
            notifications: self.notifications,
            dashboard: self.dashboard,
            public_query: self.public_query,
        })
    }
}
