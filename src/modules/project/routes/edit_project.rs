// src/modules/project/routes/edit_project.rs

use actix_web::{get, post, web, Either, HttpResponse, Responder};
use serde_json::json;
use tracing::error;
use uuid::Uuid;

use crate::modules::project::form::ProjectForm;
use crate::modules::project::ports::ProjectRepositoryError;
use crate::shared::api::{redirect_to, MgmtResponse, RequestOrigin};
use crate::AppState;

/// Edit page context: the current project plus the selectable categories.
#[get("/projects/{project_id}/edit/")]
pub async fn edit_project_form_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    let project = match data.projects.get(project_id).await {
        Ok(project) => project,
        Err(ProjectRepositoryError::NotFound) => {
            return MgmtResponse::not_found("Project not found");
        }
        Err(e) => {
            error!("Repository error fetching project: {}", e);
            return MgmtResponse::internal_error();
        }
    };

    match data.categories.list(None).await {
        Ok(categories) => HttpResponse::Ok().json(json!({
            "project": project,
            "categories": categories,
        })),
        Err(e) => {
            error!("Repository error listing categories: {}", e);
            MgmtResponse::internal_error()
        }
    }
}

/// Full-record update. Screenshots in the submission replace the whole set;
/// a submission without screenshots leaves the existing set untouched.
#[post("/projects/{project_id}/edit/")]
pub async fn edit_project_handler(
    origin: RequestOrigin,
    path: web::Path<Uuid>,
    body: Either<web::Json<ProjectForm>, web::Form<ProjectForm>>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    let submission = match body.into_inner().validate() {
        Ok(submission) => submission,
        Err(errors) => {
            return if origin.is_ajax() {
                MgmtResponse::invalid(&errors)
            } else {
                redirect_to(&format!("/projects/{project_id}/edit/"))
            };
        }
    };

    let new_screenshots = if submission.screenshots.is_empty() {
        None
    } else {
        Some(submission.screenshots)
    };

    match data
        .projects
        .update(project_id, submission.fields, new_screenshots)
        .await
    {
        Ok(updated) => {
            if origin.is_ajax() {
                MgmtResponse::saved("Project updated successfully!", updated.id, "/projects/")
            } else {
                redirect_to("/projects/")
            }
        }
        Err(ProjectRepositoryError::NotFound) => MgmtResponse::not_found("Project not found"),
        Err(e) => {
            error!("Repository error updating project: {}", e);
            MgmtResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::sample_project_result;
    use crate::tests::support::mocks::MockProjectRepository;

    #[actix_web::test]
    async fn edit_updates_and_reports_redirect() {
        let mock = MockProjectRepository {
            update_result: Some(Ok(sample_project_result())),
            ..Default::default()
        };

        let app_state = TestAppStateBuilder::default().with_projects(mock).build();
        let app = test::init_service(
            App::new().app_data(app_state).service(edit_project_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/projects/{}/edit/", Uuid::new_v4()))
            .insert_header(("X-Requested-With", "XMLHttpRequest"))
            .set_json(serde_json::json!({
                "title": "Portfolio Site",
                "description": "Updated description.",
                "technologies": "Rust",
                "status": "completed",
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Project updated successfully!");
        assert_eq!(body["redirect_url"], "/projects/");
    }

    #[actix_web::test]
    async fn edit_unknown_project_is_404() {
        let mock = MockProjectRepository {
            update_result: Some(Err(ProjectRepositoryError::NotFound)),
            ..Default::default()
        };

        let app_state = TestAppStateBuilder::default().with_projects(mock).build();
        let app = test::init_service(
            App::new().app_data(app_state).service(edit_project_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/projects/{}/edit/", Uuid::new_v4()))
            .insert_header(("X-Requested-With", "XMLHttpRequest"))
            .set_json(serde_json::json!({
                "title": "Portfolio Site",
                "description": "desc",
                "technologies": "Rust",
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn edit_form_returns_project_and_categories() {
        let mock = MockProjectRepository {
            get_result: Some(Ok(sample_project_result())),
            ..Default::default()
        };

        let app_state = TestAppStateBuilder::default().with_projects(mock).build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(edit_project_form_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/projects/{}/edit/", Uuid::new_v4()))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["project"]["slug"], "portfolio-site");
        assert!(body["categories"].is_array());
    }
}
