// src/modules/public_api/routes/skills.rs

use actix_web::{get, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::modules::public_api::ports::PublicQueryError;
use crate::shared::api::{ApiKey, ApiResponse};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SkillListQuery {
    #[serde(default)]
    pub category: Option<String>,
}

/// Published skills ordered by proficiency, optionally narrowed to one
/// category slug.
#[get("/api/skills/")]
pub async fn list_public_skills_handler(
    _key: ApiKey,
    query: web::Query<SkillListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.public_query.list_skills(query.category.clone()).await {
        Ok(skills) => HttpResponse::Ok().json(skills),
        Err(e) => {
            error!("Query error listing public skills: {}", e);
            ApiResponse::internal_error()
        }
    }
}

/// Top ten skills by proficiency.
#[get("/api/skills/top/")]
pub async fn top_public_skills_handler(_key: ApiKey, data: web::Data<AppState>) -> impl Responder {
    match data.public_query.top_skills().await {
        Ok(skills) => HttpResponse::Ok().json(skills),
        Err(e) => {
            error!("Query error listing top skills: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/skills/{id}/")]
pub async fn get_public_skill_handler(
    _key: ApiKey,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.public_query.skill_by_id(path.into_inner()).await {
        Ok(skill) => HttpResponse::Ok().json(skill),
        Err(PublicQueryError::NotFound) => {
            ApiResponse::not_found("SKILL_NOT_FOUND", "Skill not found")
        }
        Err(e) => {
            error!("Query error fetching public skill: {}", e);
            ApiResponse::internal_error()
        }
    }
}
