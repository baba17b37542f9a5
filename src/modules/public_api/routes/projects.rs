// src/modules/public_api/routes/projects.rs

use actix_web::{get, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::public_api::ports::{PublicProjectFilter, PublicQueryError};
use crate::shared::api::{ApiKey, ApiResponse};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ProjectListQuery {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Published projects only; category/status filters apply when supplied.
#[get("/api/projects/")]
pub async fn list_public_projects_handler(
    _key: ApiKey,
    query: web::Query<ProjectListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter = PublicProjectFilter {
        category: query.category.clone(),
        status: query.status.clone(),
    };

    match data.public_query.list_projects(filter).await {
        Ok(projects) => HttpResponse::Ok().json(projects),
        Err(e) => {
            error!("Query error listing public projects: {}", e);
            ApiResponse::internal_error()
        }
    }
}

/// Featured projects, capped at six.
#[get("/api/projects/featured/")]
pub async fn featured_public_projects_handler(
    _key: ApiKey,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.public_query.featured_projects().await {
        Ok(projects) => HttpResponse::Ok().json(projects),
        Err(e) => {
            error!("Query error listing featured projects: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/projects/{slug}/")]
pub async fn get_public_project_handler(
    _key: ApiKey,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.public_query.project_by_slug(&path.into_inner()).await {
        Ok(project) => HttpResponse::Ok().json(project),
        Err(PublicQueryError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
        Err(e) => {
            error!("Query error fetching public project: {}", e);
            ApiResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────
//
