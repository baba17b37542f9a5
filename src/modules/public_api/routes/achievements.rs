// src/modules/public_api/routes/achievements.rs

use actix_web::{get, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::modules::public_api::ports::PublicQueryError;
use crate::shared::api::{ApiKey, ApiResponse};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct AchievementListQuery {
    /// Achievement category value, e.g. "certification".
    #[serde(default)]
    pub category: Option<String>,
}

#[get("/api/achievements/")]
pub async fn list_public_achievements_handler(
    _key: ApiKey,
    query: web::Query<AchievementListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .public_query
        .list_achievements(query.category.clone())
        .await
    {
        Ok(achievements) => HttpResponse::Ok().json(achievements),
        Err(e) => {
            error!("Query error listing public achievements: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/achievements/{id}/")]
pub async fn get_public_achievement_handler(
    _key: ApiKey,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.public_query.achievement_by_id(path.into_inner()).await {
        Ok(achievement) => HttpResponse::Ok().json(achievement),
        Err(PublicQueryError::NotFound) => {
            ApiResponse::not_found("ACHIEVEMENT_NOT_FOUND", "Achievement not found")
        }
        Err(e) => {
            error!("Query error fetching public achievement: {}", e);
            ApiResponse::internal_error()
        }
    }
}
