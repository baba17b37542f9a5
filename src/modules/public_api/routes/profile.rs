// src/modules/public_api/routes/profile.rs

use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use crate::shared::api::{ApiKey, ApiResponse};
use crate::AppState;

/// The singleton profile: the first row by creation order, 404 when none
/// exists. The public surface never creates one.
#[get("/api/profile/")]
pub async fn get_public_profile_handler(
    _key: ApiKey,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.public_query.profile().await {
        Ok(Some(profile)) => HttpResponse::Ok().json(profile),
        Ok(None) => ApiResponse::not_found("PROFILE_NOT_FOUND", "Profile not found"),
        Err(e) => {
            error!("Query error fetching public profile: {}", e);
            ApiResponse::internal_error()
        }
    }
}
