// src/modules/skill/routes.rs

use actix_web::{get, post, web, Either, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;
use tracing::error;
use uuid::Uuid;

use super::form::SkillForm;
use super::ports::{SkillListFilter, SkillRepositoryError};
use crate::shared::api::{redirect_to, MgmtResponse, RequestOrigin};
use crate::AppState;

const RECENT_LIMIT: u64 = 6;

#[derive(Debug, Deserialize)]
pub struct ToggleSkillRequest {
    pub skill_id: Uuid,
    pub is_active: bool,
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub filter: Option<String>,
}

#[get("/skills/")]
pub async fn manage_skills_handler(data: web::Data<AppState>) -> impl Responder {
    let recent = match data.skills.recent(RECENT_LIMIT).await {
        Ok(recent) => recent,
        Err(e) => {
            error!("Repository error loading recent skills: {}", e);
            return MgmtResponse::internal_error();
        }
    };

    match data.skills.counts().await {
        Ok(counts) => HttpResponse::Ok().json(json!({
            "recent_skills": recent,
            "total_count": counts.total,
        })),
        Err(e) => {
            error!("Repository error counting skills: {}", e);
            MgmtResponse::internal_error()
        }
    }
}

#[post("/skills/")]
pub async fn toggle_skill_handler(
    origin: RequestOrigin,
    body: Either<web::Json<ToggleSkillRequest>, web::Form<ToggleSkillRequest>>,
    data: web::Data<AppState>,
) -> impl Responder {
    if !origin.is_ajax() {
        return MgmtResponse::invalid_request();
    }

    let req = body.into_inner();

    match data.skills.set_active(req.skill_id, req.is_active).await {
        Ok(()) => MgmtResponse::ok("Skill status updated!"),
        Err(SkillRepositoryError::NotFound) => MgmtResponse::not_found("Skill not found"),
        Err(e) => {
            error!("Repository error toggling skill: {}", e);
            MgmtResponse::internal_error()
        }
    }
}

#[post("/skills/create/")]
pub async fn create_skill_handler(
    origin: RequestOrigin,
    body: Either<web::Json<SkillForm>, web::Form<SkillForm>>,
    data: web::Data<AppState>,
) -> impl Responder {
    let fields = match body.into_inner().validate() {
        Ok(fields) => fields,
        Err(errors) => {
            return if origin.is_ajax() {
                MgmtResponse::invalid(&errors)
            } else {
                redirect_to("/skills/create/")
            };
        }
    };

    match data.skills.create(fields).await {
        Ok(created) => {
            if origin.is_ajax() {
                MgmtResponse::saved(
                    &format!("Skill '{}' created successfully!", created.name),
                    created.id,
                    "/skills/",
                )
            } else {
                redirect_to("/skills/")
            }
        }
        Err(e) => {
            error!("Repository error creating skill: {}", e);
            MgmtResponse::internal_error()
        }
    }
}

#[get("/skills/{skill_id}/edit/")]
pub async fn edit_skill_form_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.skills.get(path.into_inner()).await {
        Ok(skill) => HttpResponse::Ok().json(json!({ "skill": skill })),
        Err(SkillRepositoryError::NotFound) => MgmtResponse::not_found("Skill not found"),
        Err(e) => {
            error!("Repository error fetching skill: {}", e);
            MgmtResponse::internal_error()
        }
    }
}

#[post("/skills/{skill_id}/edit/")]
pub async fn edit_skill_handler(
    origin: RequestOrigin,
    path: web::Path<Uuid>,
    body: Either<web::Json<SkillForm>, web::Form<SkillForm>>,
    data: web::Data<AppState>,
) -> impl Responder {
    let skill_id = path.into_inner();

    let fields = match body.into_inner().validate() {
        Ok(fields) => fields,
        Err(errors) => {
            return if origin.is_ajax() {
                MgmtResponse::invalid(&errors)
            } else {
                redirect_to(&format!("/skills/{skill_id}/edit/"))
            };
        }
    };

    match data.skills.update(skill_id, fields).await {
        Ok(updated) => {
            if origin.is_ajax() {
                MgmtResponse::saved(
                    &format!("Skill '{}' updated successfully!", updated.name),
                    updated.id,
                    "/skills/",
                )
            } else {
                redirect_to("/skills/")
            }
        }
        Err(SkillRepositoryError::NotFound) => MgmtResponse::not_found("Skill not found"),
        Err(e) => {
            error!("Repository error updating skill: {}", e);
            MgmtResponse::internal_error()
        }
    }
}

#[post("/skills/{skill_id}/delete/")]
pub async fn delete_skill_handler(
    origin: RequestOrigin,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.skills.delete(path.into_inner()).await {
        Ok(deleted) => {
            if origin.is_ajax() {
                MgmtResponse::ok(&format!("Skill \"{}\" deleted successfully!", deleted.name))
            } else {
                redirect_to("/skills/")
            }
        }
        Err(SkillRepositoryError::NotFound) => MgmtResponse::not_found("Skill not found"),
        Err(e) => {
            error!("Repository error deleting skill: {}", e);
            MgmtResponse::internal_error()
        }
    }
}

#[get("/skills/list/")]
pub async fn list_skills_handler(
    query: web::Query<ListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter = match query.filter.as_deref() {
        Some("draft") => SkillListFilter::Draft,
        _ => SkillListFilter::All,
    };

    let skills = match data.skills.list(filter).await {
        Ok(skills) => skills,
        Err(e) => {
            error!("Repository error listing skills: {}", e);
            return MgmtResponse::internal_error();
        }
    };

    match data.skills.counts().await {
        Ok(counts) => HttpResponse::Ok().json(json!({
            "skills": skills,
            "current_filter": match filter {
                SkillListFilter::Draft => "draft",
                SkillListFilter::All => "all",
            },
            "total_count": counts.total,
            "draft_count": counts.draft,
        })),
        Err(e) => {
            error!("Repository error counting skills: {}", e);
            MgmtResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────
//
