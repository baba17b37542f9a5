// src/modules/project/routes/delete_project.rs

use actix_web::{post, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::project::ports::ProjectRepositoryError;
use crate::shared::api::{redirect_to, MgmtResponse, RequestOrigin};
use crate::AppState;

/// Hard delete. Screenshots cascade with the row; stored blobs are discarded
/// best-effort by the repository.
#[post("/projects/{project_id}/delete/")]
pub async fn delete_project_handler(
    origin: RequestOrigin,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data.projects.delete(project_id).await {
        Ok(deleted) => {
            if origin.is_ajax() {
                MgmtResponse::ok(&format!(
                    "Project \"{}\" deleted successfully!",
                    deleted.title
                ))
            } else {
                redirect_to("/projects/")
            }
        }
        Err(ProjectRepositoryError::NotFound) => MgmtResponse::not_found("Project not found"),
        Err(e) => {
            error!("Repository error deleting project: {}", e);
            MgmtResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::modules::project::ports::DeletedProject;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::mocks::MockProjectRepository;

    #[actix_web::test]
    async fn delete_reports_title_in_message() {
        let mock = MockProjectRepository {
            delete_result: Some(Ok(DeletedProject {
                title: "Portfolio Site".to_string(),
            })),
            ..Default::default()
        };

        let app_state = TestAppStateBuilder::default().with_projects(mock).build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(delete_project_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/projects/{}/delete/", Uuid::new_v4()))
            .insert_header(("X-Requested-With", "XMLHttpRequest"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body["message"],
            "Project \"Portfolio Site\" deleted successfully!"
        );
    }

    #[actix_web::test]
    async fn delete_unknown_project_is_404() {
        let mock = MockProjectRepository {
            delete_result: Some(Err(ProjectRepositoryError::NotFound)),
            ..Default::default()
        };

        let app_state = TestAppStateBuilder::default().with_projects(mock).build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(delete_project_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/projects/{}/delete/", Uuid::new_v4()))
            .insert_header(("X-Requested-With", "XMLHttpRequest"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
