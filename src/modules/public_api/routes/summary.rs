// src/modules/public_api/routes/summary.rs

use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use crate::shared::api::{ApiKey, ApiResponse};
use crate::AppState;

/// Total and active counts per entity type plus the configured years of
/// experience.
#[get("/api/summary/")]
pub async fn portfolio_summary_handler(_key: ApiKey, data: web::Data<AppState>) -> impl Responder {
    match data.public_query.summary().await {
        Ok(summary) => HttpResponse::Ok().json(summary),
        Err(e) => {
            error!("Query error building portfolio summary: {}", e);
            ApiResponse::internal_error()
        }
    }
}
