// src/modules/public_api/routes/experience.rs

use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::public_api::ports::PublicQueryError;
use crate::shared::api::{ApiKey, ApiResponse};
use crate::AppState;

/// Published experience, newest first.
#[get("/api/experience/")]
pub async fn list_public_experience_handler(
    _key: ApiKey,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.public_query.list_experience().await {
        Ok(experience) => HttpResponse::Ok().json(experience),
        Err(e) => {
            error!("Query error listing public experience: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/experience/{id}/")]
pub async fn get_public_experience_handler(
    _key: ApiKey,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.public_query.experience_by_id(path.into_inner()).await {
        Ok(experience) => HttpResponse::Ok().json(experience),
        Err(PublicQueryError::NotFound) => {
            ApiResponse::not_found("EXPERIENCE_NOT_FOUND", "Experience not found")
        }
        Err(e) => {
            error!("Query error fetching public experience: {}", e);
            ApiResponse::internal_error()
        }
    }
}
