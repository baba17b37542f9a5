pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::achievement;
pub use modules::category;
pub use modules::dashboard;
pub use modules::experience;
pub use modules::notification;
pub use modules::profile;
pub use modules::project;
pub use modules::public_api;
pub use modules::skill;

use crate::achievement::ports::AchievementRepository;
use crate::achievement::repository_postgres::AchievementRepositoryPostgres;
use crate::category::ports::CategoryRepository;
use crate::category::repository_postgres::CategoryRepositoryPostgres;
use crate::dashboard::ports::DashboardQuery;
use crate::dashboard::service::DashboardService;
use crate::experience::ports::ExperienceRepository;
use crate::experience::repository_postgres::ExperienceRepositoryPostgres;
use crate::notification::ports::NotificationRepository;
use crate::notification::repository_postgres::NotificationRepositoryPostgres;
use crate::profile::ports::ProfileRepository;
use crate::profile::repository_postgres::ProfileRepositoryPostgres;
use crate::project::ports::ProjectRepository;
use crate::project::repository_postgres::ProjectRepositoryPostgres;
use crate::public_api::ports::PublicPortfolioQuery;
use crate::public_api::query_postgres::PublicPortfolioQueryPostgres;
use crate::shared::api::json_config::custom_json_config;
use crate::shared::storage::{FileStore, LocalFileStore};
use crate::skill::ports::SkillRepository;
use crate::skill::repository_postgres::SkillRepositoryPostgres;

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub categories: Arc<dyn CategoryRepository>,
    pub projects: Arc<dyn ProjectRepository>,
    pub experience: Arc<dyn ExperienceRepository>,
    pub skills: Arc<dyn SkillRepository>,
    pub achievements: Arc<dyn AchievementRepository>,
    pub profile: Arc<dyn ProfileRepository>,
    pub notifications: Arc<dyn NotificationRepository>,
    pub dashboard: Arc<dyn DashboardQuery>,
    pub public_query: Arc<dyn PublicPortfolioQuery>,
}

#[actix_web::main]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let environment = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{environment}");
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let media_root = env::var("MEDIA_ROOT").unwrap_or_else(|_| "media".to_string());

    let server_url = format!("{host}:{port}");
    info!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Stored-file backend for attachment and document blobs
    let files: Arc<dyn FileStore> = Arc::new(LocalFileStore::new(media_root));

    // Repositories
    let categories: Arc<dyn CategoryRepository> =
        Arc::new(CategoryRepositoryPostgres::new(Arc::clone(&db_arc)));
    let projects: Arc<dyn ProjectRepository> = Arc::new(ProjectRepositoryPostgres::new(
        Arc::clone(&db_arc),
        Arc::clone(&files),
    ));
    let experience: Arc<dyn ExperienceRepository> = Arc::new(ExperienceRepositoryPostgres::new(
        Arc::clone(&db_arc),
        Arc::clone(&files),
    ));
    let skills: Arc<dyn SkillRepository> = Arc::new(SkillRepositoryPostgres::new(
        Arc::clone(&db_arc),
        Arc::clone(&files),
    ));
    let achievements: Arc<dyn AchievementRepository> = Arc::new(
        AchievementRepositoryPostgres::new(Arc::clone(&db_arc), Arc::clone(&files)),
    );
    let profile: Arc<dyn ProfileRepository> = Arc::new(ProfileRepositoryPostgres::new(
        Arc::clone(&db_arc),
        Arc::clone(&files),
    ));
    let notifications: Arc<dyn NotificationRepository> =
        Arc::new(NotificationRepositoryPostgres::new(Arc::clone(&db_arc)));

    // Cross-entity read sides
    let dashboard: Arc<dyn DashboardQuery> = Arc::new(DashboardService::new(
        Arc::clone(&projects),
        Arc::clone(&experience),
        Arc::clone(&skills),
        Arc::clone(&achievements),
        Arc::clone(&categories),
    ));
    let public_query: Arc<dyn PublicPortfolioQuery> =
        Arc::new(PublicPortfolioQueryPostgres::new(Arc::clone(&db_arc)));

    let state = AppState {
        categories,
        projects,
        experience,
        skills,
        achievements,
        profile,
        notifications,
        dashboard,
        public_query,
    };

    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", crate::api::openapi::ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);

    // Dashboard
    cfg.service(crate::dashboard::routes::dashboard_handler);

    // Projects
    cfg.service(crate::project::routes::manage_projects_handler);
    cfg.service(crate::project::routes::toggle_project_handler);
    cfg.service(crate::project::routes::new_project_handler);
    cfg.service(crate::project::routes::create_project_handler);
    cfg.service(crate::project::routes::list_projects_handler);
    cfg.service(crate::project::routes::edit_project_form_handler);
    cfg.service(crate::project::routes::edit_project_handler);
    cfg.service(crate::project::routes::delete_project_handler);

    // Experience
    cfg.service(crate::experience::routes::manage_experience_handler);
    cfg.service(crate::experience::routes::toggle_experience_handler);
    cfg.service(crate::experience::routes::create_experience_handler);
    cfg.service(crate::experience::routes::list_experience_handler);
    cfg.service(crate::experience::routes::edit_experience_form_handler);
    cfg.service(crate::experience::routes::edit_experience_handler);
    cfg.service(crate::experience::routes::delete_experience_handler);

    // Skills
    cfg.service(crate::skill::routes::manage_skills_handler);
    cfg.service(crate::skill::routes::toggle_skill_handler);
    cfg.service(crate::skill::routes::create_skill_handler);
    cfg.service(crate::skill::routes::list_skills_handler);
    cfg.service(crate::skill::routes::edit_skill_form_handler);
    cfg.service(crate::skill::routes::edit_skill_handler);
    cfg.service(crate::skill::routes::delete_skill_handler);

    // Achievements
    cfg.service(crate::achievement::routes::manage_achievements_handler);
    cfg.service(crate::achievement::routes::toggle_achievement_handler);
    cfg.service(crate::achievement::routes::create_achievement_handler);
    cfg.service(crate::achievement::routes::list_achievements_handler);
    cfg.service(crate::achievement::routes::edit_achievement_form_handler);
    cfg.service(crate::achievement::routes::edit_achievement_handler);
    cfg.service(crate::achievement::routes::delete_achievement_handler);

    // Categories
    cfg.service(crate::category::routes::manage_categories_handler);
    cfg.service(crate::category::routes::category_action_handler);

    // Profile details
    cfg.service(crate::profile::routes::manage_details_handler);
    cfg.service(crate::profile::routes::update_details_handler);

    // Notifications
    cfg.service(crate::notification::routes::manage_notifications_handler);
    cfg.service(crate::notification::routes::save_notification_handler);
    cfg.service(crate::notification::routes::mark_all_notifications_read_handler);
    cfg.service(crate::notification::routes::get_notification_handler);
    cfg.service(crate::notification::routes::delete_notification_handler);
    cfg.service(crate::notification::routes::mark_notification_read_handler);

    // Public read-only API. Fixed segments before slug captures.
    cfg.service(crate::public_api::routes::featured_public_projects_handler);
    cfg.service(crate::public_api::routes::list_public_projects_handler);
    cfg.service(crate::public_api::routes::get_public_project_handler);
    cfg.service(crate::public_api::routes::list_public_experience_handler);
    cfg.service(crate::public_api::routes::get_public_experience_handler);
    cfg.service(crate::public_api::routes::top_public_skills_handler);
    cfg.service(crate::public_api::routes::list_public_skills_handler);
    cfg.service(crate::public_api::routes::get_public_skill_handler);
    cfg.service(crate::public_api::routes::list_public_achievements_handler);
    cfg.service(crate::public_api::routes::get_public_achievement_handler);
    cfg.service(crate::public_api::routes::list_public_categories_handler);
    cfg.service(crate::public_api::routes::get_public_category_handler);
    cfg.service(crate::public_api::routes::get_public_profile_handler);
    cfg.service(crate::public_api::routes::portfolio_summary_handler);
}

fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
