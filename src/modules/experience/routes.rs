// src/modules/experience/routes.rs

use actix_web::{get, post, web, Either, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;
use tracing::error;
use uuid::Uuid;

use super::form::ExperienceForm;
use super::ports::{ExperienceListFilter, ExperienceRepositoryError};
use crate::shared::api::{redirect_to, MgmtResponse, RequestOrigin};
use crate::AppState;

const RECENT_LIMIT: u64 = 6;

//
// ──────────────────────────────────────────────────────────
// Request DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub struct ToggleExperienceRequest {
    pub experience_id: Uuid,
    pub is_active: bool,
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub filter: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Handlers
// ──────────────────────────────────────────────────────────
//

#[get("/experience/")]
pub async fn manage_experience_handler(data: web::Data<AppState>) -> impl Responder {
    let recent = match data.experience.recent(RECENT_LIMIT).await {
        Ok(recent) => recent,
        Err(e) => {
            error!("Repository error loading recent experience: {}", e);
            return MgmtResponse::internal_error();
        }
    };

    match data.experience.counts().await {
        Ok(counts) => HttpResponse::Ok().json(json!({
            "experiences": recent,
            "total_count": counts.total,
        })),
        Err(e) => {
            error!("Repository error counting experience: {}", e);
            MgmtResponse::internal_error()
        }
    }
}

#[post("/experience/")]
pub async fn toggle_experience_handler(
    origin: RequestOrigin,
    body: Either<web::Json<ToggleExperienceRequest>, web::Form<ToggleExperienceRequest>>,
    data: web::Data<AppState>,
) -> impl Responder {
    if !origin.is_ajax() {
        return MgmtResponse::invalid_request();
    }

    let req = body.into_inner();

    match data
        .experience
        .set_active(req.experience_id, req.is_active)
        .await
    {
        Ok(()) => MgmtResponse::ok("Experience status updated"),
        Err(ExperienceRepositoryError::NotFound) => MgmtResponse::not_found("Experience not found"),
        Err(e) => {
            error!("Repository error toggling experience: {}", e);
            MgmtResponse::internal_error()
        }
    }
}

#[post("/experience/create/")]
pub async fn create_experience_handler(
    origin: RequestOrigin,
    body: Either<web::Json<ExperienceForm>, web::Form<ExperienceForm>>,
    data: web::Data<AppState>,
) -> impl Responder {
    let submission = match body.into_inner().validate() {
        Ok(submission) => submission,
        Err(errors) => {
            return if origin.is_ajax() {
                MgmtResponse::invalid(&errors)
            } else {
                redirect_to("/experience/create/")
            };
        }
    };

    match data
        .experience
        .create(submission.fields, submission.images)
        .await
    {
        Ok(created) => {
            if origin.is_ajax() {
                MgmtResponse::saved(
                    "Experience created successfully!",
                    created.id,
                    "/experience/",
                )
            } else {
                redirect_to("/experience/")
            }
        }
        Err(e) => {
            error!("Repository error creating experience: {}", e);
            MgmtResponse::internal_error()
        }
    }
}

#[get("/experience/{experience_id}/edit/")]
pub async fn edit_experience_form_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.experience.get(path.into_inner()).await {
        Ok(experience) => HttpResponse::Ok().json(json!({ "experience": experience })),
        Err(ExperienceRepositoryError::NotFound) => MgmtResponse::not_found("Experience not found"),
        Err(e) => {
            error!("Repository error fetching experience: {}", e);
            MgmtResponse::internal_error()
        }
    }
}

/// Full-record update; workplace images in the submission replace the whole
/// set, a submission without them leaves the existing set untouched.
#[post("/experience/{experience_id}/edit/")]
pub async fn edit_experience_handler(
    origin: RequestOrigin,
    path: web::Path<Uuid>,
    body: Either<web::Json<ExperienceForm>, web::Form<ExperienceForm>>,
    data: web::Data<AppState>,
) -> impl Responder {
    let experience_id = path.into_inner();

    let submission = match body.into_inner().validate() {
        Ok(submission) => submission,
        Err(errors) => {
            return if origin.is_ajax() {
                MgmtResponse::invalid(&errors)
            } else {
                redirect_to(&format!("/experience/{experience_id}/edit/"))
            };
        }
    };

    let new_images = if submission.images.is_empty() {
        None
    } else {
        Some(submission.images)
    };

    match data
        .experience
        .update(experience_id, submission.fields, new_images)
        .await
    {
        Ok(updated) => {
            if origin.is_ajax() {
                MgmtResponse::saved(
                    "Experience updated successfully!",
                    updated.id,
                    "/experience/",
                )
            } else {
                redirect_to("/experience/")
            }
        }
        Err(ExperienceRepositoryError::NotFound) => MgmtResponse::not_found("Experience not found"),
        Err(e) => {
            error!("Repository error updating experience: {}", e);
            MgmtResponse::internal_error()
        }
    }
}

#[post("/experience/{experience_id}/delete/")]
pub async fn delete_experience_handler(
    origin: RequestOrigin,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.experience.delete(path.into_inner()).await {
        Ok(deleted) => {
            if origin.is_ajax() {
                MgmtResponse::ok(&format!(
                    "Experience \"{}\" deleted successfully!",
                    deleted.position
                ))
            } else {
                redirect_to("/experience/")
            }
        }
        Err(ExperienceRepositoryError::NotFound) => MgmtResponse::not_found("Experience not found"),
        Err(e) => {
            error!("Repository error deleting experience: {}", e);
            MgmtResponse::internal_error()
        }
    }
}

#[get("/experience/list/")]
pub async fn list_experience_handler(
    query: web::Query<ListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter = match query.filter.as_deref() {
        Some("draft") => ExperienceListFilter::Draft,
        _ => ExperienceListFilter::All,
    };

    let experiences = match data.experience.list(filter).await {
        Ok(experiences) => experiences,
        Err(e) => {
            error!("Repository error listing experience: {}", e);
            return MgmtResponse::internal_error();
        }
    };

    match data.experience.counts().await {
        Ok(counts) => HttpResponse::Ok().json(json!({
            "experiences": experiences,
            "current_filter": match filter {
                ExperienceListFilter::Draft => "draft",
                ExperienceListFilter::All => "all",
            },
            "total_count": counts.total,
            "draft_count": counts.draft,
        })),
        Err(e) => {
            error!("Repository error counting experience: {}", e);
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

    use crate::modules::experience::ports::{DeletedExperience, ExperienceCounts};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::sample_experience_result;
    use crate::tests::support::mocks::MockExperienceRepository;

    fn valid_payload() -> Value {
        serde_json::json!({
            "position": "Backend Engineer",
            "company_name": "ACME",
            "start_date": "2024-03",
            "short_description": "Built services.",
            "detailed_description": "Built and ran backend services.",
            "workplace_images": [
                { "image": "office.png" },
            ],
        })
    }

    #[actix_web::test]
    async fn create_accepts_month_only_dates() {
        let created = sample_experience_result();
        let expected_id = created.id;

        let mock = MockExperienceRepository {
            create_result: Some(Ok(created)),
            ..Default::default()
        };

        let app_state = TestAppStateBuilder::default().with_experience(mock).build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(create_experience_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/experience/create/")
            .insert_header(("X-Requested-With", "XMLHttpRequest"))
            .set_json(valid_payload())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["id"], expected_id.to_string());
        assert_eq!(body["redirect_url"], "/experience/");
    }

    #[actix_web::test]
    async fn create_rejects_missing_required_fields() {
        let app_state = TestAppStateBuilder::default()
            .with_experience(MockExperienceRepository::default())
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(create_experience_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/experience/create/")
            .insert_header(("X-Requested-With", "XMLHttpRequest"))
            .set_json(serde_json::json!({ "position": "Engineer" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["errors"]["company_name"][0], "This field is required.");
        assert_eq!(body["errors"]["start_date"][0], "This field is required.");
    }

    #[actix_web::test]
    async fn toggle_unknown_experience_is_404() {
        let mock = MockExperienceRepository {
            set_active_result: Some(Err(ExperienceRepositoryError::NotFound)),
            ..Default::default()
        };

        let app_state = TestAppStateBuilder::default().with_experience(mock).build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(toggle_experience_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/experience/")
            .insert_header(("X-Requested-With", "XMLHttpRequest"))
            .set_json(serde_json::json!({
                "experience_id": Uuid::new_v4(),
                "is_active": false,
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Experience not found");
    }

    #[actix_web::test]
    async fn delete_reports_position_in_message() {
        let mock = MockExperienceRepository {
            delete_result: Some(Ok(DeletedExperience {
                position: "Backend Engineer".to_string(),
            })),
            ..Default::default()
        };

        let app_state = TestAppStateBuilder::default().with_experience(mock).build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(delete_experience_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/experience/{}/delete/", Uuid::new_v4()))
            .insert_header(("X-Requested-With", "XMLHttpRequest"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body["message"],
            "Experience \"Backend Engineer\" deleted successfully!"
        );
    }

    #[actix_web::test]
    async fn list_filters_drafts() {
        let mock = MockExperienceRepository {
            list_result: Some(Ok(vec![sample_experience_result()])),
            counts_result: Some(Ok(ExperienceCounts { total: 3, draft: 1 })),
            ..Default::default()
        };

        let app_state = TestAppStateBuilder::default().with_experience(mock).build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(list_experience_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/experience/list/?filter=draft")
            .to_request();

        let resp = test::call_service(&app, req).await;
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["current_filter"], "draft");
        assert_eq!(body["draft_count"], 1);
    }
}
