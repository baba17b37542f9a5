// src/modules/project/routes/create_project.rs

use actix_web::{get, post, web, Either, HttpResponse, Responder};
use serde_json::json;
use tracing::error;

use crate::modules::project::form::ProjectForm;
use crate::modules::project::ports::ProjectRepositoryError;
use crate::shared::api::{redirect_to, MgmtResponse, RequestOrigin};
use crate::shared::validation::FieldErrors;
use crate::AppState;

/// Form context for the create page: the selectable categories.
#[get("/projects/create/")]
pub async fn new_project_handler(data: web::Data<AppState>) -> impl Responder {
    match data.categories.list(None).await {
        Ok(categories) => HttpResponse::Ok().json(json!({ "categories": categories })),
        Err(e) => {
            error!("Repository error listing categories: {}", e);
            MgmtResponse::internal_error()
        }
    }
}

#[post("/projects/create/")]
pub async fn create_project_handler(
    origin: RequestOrigin,
    body: Either<web::Json<ProjectForm>, web::Form<ProjectForm>>,
    data: web::Data<AppState>,
) -> impl Responder {
    let submission = match body.into_inner().validate() {
        Ok(submission) => submission,
        Err(errors) => {
            return if origin.is_ajax() {
                MgmtResponse::invalid(&errors)
            } else {
                redirect_to("/projects/create/")
            };
        }
    };

    match data
        .projects
        .create(submission.fields, submission.screenshots)
        .await
    {
        Ok(created) => {
            if origin.is_ajax() {
                MgmtResponse::saved("Project created successfully!", created.id, "/projects/")
            } else {
                redirect_to("/projects/")
            }
        }
        Err(ProjectRepositoryError::SlugAlreadyExists) => MgmtResponse::invalid(&slug_conflict()),
        Err(e) => {
            error!("Repository error creating project: {}", e);
            MgmtResponse::internal_error()
        }
    }
}

fn slug_conflict() -> FieldErrors {
    let mut errors = FieldErrors::default();
    errors.add("slug", "Project with this slug already exists.");
    errors
}

//
// ──────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────
//
