// src/modules/project/routes/manage_projects.rs

use actix_web::{get, post, web, Either, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;
use tracing::error;
use uuid::Uuid;

use crate::modules::project::ports::ProjectRepositoryError;
use crate::shared::api::{MgmtResponse, RequestOrigin};
use crate::AppState;

const RECENT_LIMIT: u64 = 6;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub struct ToggleProjectRequest {
    pub project_id: Uuid,
    pub is_active: bool,
}

//
// ──────────────────────────────────────────────────────────
// Handlers
// ──────────────────────────────────────────────────────────
//

/// Manage page payload: the latest six projects regardless of status, plus
/// the total count.
#[get("/projects/")]
pub async fn manage_projects_handler(data: web::Data<AppState>) -> impl Responder {
    let recent = match data.projects.recent(RECENT_LIMIT).await {
        Ok(recent) => recent,
        Err(e) => {
            error!("Repository error loading recent projects: {}", e);
            return MgmtResponse::internal_error();
        }
    };

    match data.projects.counts().await {
        Ok(counts) => HttpResponse::Ok().json(json!({
            "recent_projects": recent,
            "total_count": counts.total,
        })),
        Err(e) => {
            error!("Repository error counting projects: {}", e);
            MgmtResponse::internal_error()
        }
    }
}

/// AJAX visibility toggle; flips only `is_active`.
#[post("/projects/")]
pub async fn toggle_project_handler(
    origin: RequestOrigin,
    body: Either<web::Json<ToggleProjectRequest>, web::Form<ToggleProjectRequest>>,
    data: web::Data<AppState>,
) -> impl Responder {
    if !origin.is_ajax() {
        return MgmtResponse::invalid_request();
    }

    let req = body.into_inner();

    match data.projects.set_active(req.project_id, req.is_active).await {
        Ok(()) => MgmtResponse::ok("Project status updated"),
        Err(ProjectRepositoryError::NotFound) => MgmtResponse::not_found("Project not found"),
        Err(e) => {
            error!("Repository error toggling project: {}", e);
            MgmtResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────
//
