// src/modules/dashboard/routes.rs

use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use crate::shared::api::MgmtResponse;
use crate::AppState;

#[get("/")]
pub async fn dashboard_handler(data: web::Data<AppState>) -> impl Responder {
    match data.dashboard.overview().await {
        Ok(overview) => HttpResponse::Ok().json(overview),
        Err(e) => {
            error!("Query error building dashboard overview: {}", e);
            MgmtResponse::internal_error()
        }
    }
}
