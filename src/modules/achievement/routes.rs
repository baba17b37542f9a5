// src/modules/achievement/routes.rs

use actix_web::{get, post, web, Either, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;
use tracing::error;
use uuid::Uuid;

use super::form::AchievementForm;
use super::ports::{AchievementListFilter, AchievementRepositoryError};
use crate::shared::api::{redirect_to, MgmtResponse, RequestOrigin};
use crate::shared::validation::FieldErrors;
use crate::AppState;

const RECENT_LIMIT: u64 = 6;

#[derive(Debug, Deserialize)]
pub struct ToggleAchievementRequest {
    pub achievement_id: Uuid,
    pub is_active: bool,
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub filter: Option<String>,
}

#[get("/achievements/")]
pub async fn manage_achievements_handler(data: web::Data<AppState>) -> impl Responder {
    let recent = match data.achievements.recent(RECENT_LIMIT).await {
        Ok(recent) => recent,
        Err(e) => {
            error!("Repository error loading recent achievements: {}", e);
            return MgmtResponse::internal_error();
        }
    };

    match data.achievements.counts().await {
        Ok(counts) => HttpResponse::Ok().json(json!({
            "recent_achievements": recent,
            "total_count": counts.total,
        })),
        Err(e) => {
            error!("Repository error counting achievements: {}", e);
            MgmtResponse::internal_error()
        }
    }
}

#[post("/achievements/")]
pub async fn toggle_achievement_handler(
    origin: RequestOrigin,
    body: Either<web::Json<ToggleAchievementRequest>, web::Form<ToggleAchievementRequest>>,
    data: web::Data<AppState>,
) -> impl Responder {
    if !origin.is_ajax() {
        return MgmtResponse::invalid_request();
    }

    let req = body.into_inner();

    match data
        .achievements
        .set_active(req.achievement_id, req.is_active)
        .await
    {
        Ok(()) => MgmtResponse::ok("Achievement status updated"),
        Err(AchievementRepositoryError::NotFound) => {
            MgmtResponse::not_found("Achievement not found")
        }
        Err(e) => {
            error!("Repository error toggling achievement: {}", e);
            MgmtResponse::internal_error()
        }
    }
}

#[post("/achievements/create/")]
pub async fn create_achievement_handler(
    origin: RequestOrigin,
    body: Either<web::Json<AchievementForm>, web::Form<AchievementForm>>,
    data: web::Data<AppState>,
) -> impl Responder {
    let fields = match body.into_inner().validate() {
        Ok(fields) => fields,
        Err(errors) => {
            return if origin.is_ajax() {
                MgmtResponse::invalid(&errors)
            } else {
                redirect_to("/achievements/create/")
            };
        }
    };

    match data.achievements.create(fields).await {
        Ok(created) => {
            if origin.is_ajax() {
                MgmtResponse::saved(
                    &format!("Achievement \"{}\" created successfully!", created.title),
                    created.id,
                    "/achievements/",
                )
            } else {
                redirect_to("/achievements/")
            }
        }
        Err(AchievementRepositoryError::SlugAlreadyExists) => {
            MgmtResponse::invalid(&slug_conflict())
        }
        Err(e) => {
            error!("Repository error creating achievement: {}", e);
            MgmtResponse::internal_error()
        }
    }
}

#[get("/achievements/{achievement_id}/edit/")]
pub async fn edit_achievement_form_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.achievements.get(path.into_inner()).await {
        Ok(achievement) => HttpResponse::Ok().json(json!({ "achievement": achievement })),
        Err(AchievementRepositoryError::NotFound) => {
            MgmtResponse::not_found("Achievement not found")
        }
        Err(e) => {
            error!("Repository error fetching achievement: {}", e);
            MgmtResponse::internal_error()
        }
    }
}

#[post("/achievements/{achievement_id}/edit/")]
pub async fn edit_achievement_handler(
    origin: RequestOrigin,
    path: web::Path<Uuid>,
    body: Either<web::Json<AchievementForm>, web::Form<AchievementForm>>,
    data: web::Data<AppState>,
) -> impl Responder {
    let achievement_id = path.into_inner();

    let fields = match body.into_inner().validate() {
        Ok(fields) => fields,
        Err(errors) => {
            return if origin.is_ajax() {
                MgmtResponse::invalid(&errors)
            } else {
                redirect_to(&format!("/achievements/{achievement_id}/edit/"))
            };
        }
    };

    match data.achievements.update(achievement_id, fields).await {
        Ok(updated) => {
            if origin.is_ajax() {
                MgmtResponse::saved(
                    &format!("Achievement \"{}\" updated successfully!", updated.title),
                    updated.id,
                    "/achievements/",
                )
            } else {
                redirect_to("/achievements/")
            }
        }
        Err(AchievementRepositoryError::NotFound) => {
            MgmtResponse::not_found("Achievement not found")
        }
        Err(AchievementRepositoryError::SlugAlreadyExists) => {
            MgmtResponse::invalid(&slug_conflict())
        }
        Err(e) => {
            error!("Repository error updating achievement: {}", e);
            MgmtResponse::internal_error()
        }
    }
}

#[post("/achievements/{achievement_id}/delete/")]
pub async fn delete_achievement_handler(
    origin: RequestOrigin,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.achievements.delete(path.into_inner()).await {
        Ok(deleted) => {
            if origin.is_ajax() {
                MgmtResponse::ok(&format!(
                    "Achievement \"{}\" deleted successfully!",
                    deleted.title
                ))
            } else {
                redirect_to("/achievements/")
            }
        }
        Err(AchievementRepositoryError::NotFound) => {
            MgmtResponse::not_found("Achievement not found")
        }
        Err(e) => {
            error!("Repository error deleting achievement: {}", e);
            MgmtResponse::internal_error()
        }
    }
}

#[get("/achievements/list/")]
pub async fn list_achievements_handler(
    query: web::Query<ListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter = match query.filter.as_deref() {
        Some("draft") => AchievementListFilter::Draft,
        _ => AchievementListFilter::All,
    };

    let achievements = match data.achievements.list(filter).await {
        Ok(achievements) => achievements,
        Err(e) => {
            error!("Repository error listing achievements: {}", e);
            return MgmtResponse::internal_error();
        }
    };

    match data.achievements.counts().await {
        Ok(counts) => HttpResponse::Ok().json(json!({
            "achievements": achievements,
            "current_filter": match filter {
                AchievementListFilter::Draft => "draft",
                AchievementListFilter::All => "all",
            },
            "total_count": counts.total,
            "draft_count": counts.draft,
        })),
        Err(e) => {
            error!("Repository error counting achievements: {}", e);
            MgmtResponse::internal_error()
        }
    }
}

fn slug_conflict() -> FieldErrors {
    let mut errors = FieldErrors::default();
    errors.add("slug", "Achievement with this slug already exists.");
    errors
}

//
// ──────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────
//
