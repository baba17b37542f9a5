// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

use crate::shared::validation::FieldErrors;

/// Envelope for public API error bodies.
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

#[derive(Serialize, Clone)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            success: true,
            data: Some(data),
            error: None,
        })
    }
}

impl ApiResponse<()> {
    pub fn error(status: StatusCode, code: &str, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse::<()> {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.to_string(),
                message: message.to_string(),
            }),
        })
    }

    pub fn not_found(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, code, message)
    }

    pub fn bad_request(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, code, message)
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "An unexpected error occurred",
        )
    }
}

/// Flat `{success, message?, errors?}` payloads for the management surface.
///
/// The dashboard's AJAX submissions expect these bodies; the shape is part of
/// the management contract, so it stays distinct from the public API envelope.
pub struct MgmtResponse;

impl MgmtResponse {
    pub fn ok(message: &str) -> HttpResponse {
        HttpResponse::Ok().json(json!({ "success": true, "message": message }))
    }

    /// Create/edit success payload: the dashboard follows `redirect_url`.
    pub fn saved(message: &str, id: Uuid, redirect_url: &str) -> HttpResponse {
        HttpResponse::Ok().json(json!({
            "success": true,
            "message": message,
            "id": id,
            "redirect_url": redirect_url,
        }))
    }

    pub fn ok_with<T: Serialize>(message: &str, key: &str, value: T) -> HttpResponse {
        HttpResponse::Ok().json(json!({
            "success": true,
            "message": message,
            key: value,
        }))
    }

    pub fn not_found(message: &str) -> HttpResponse {
        HttpResponse::NotFound().json(json!({ "success": false, "message": message }))
    }

    pub fn invalid(errors: &FieldErrors) -> HttpResponse {
        HttpResponse::BadRequest().json(json!({ "success": false, "errors": errors }))
    }

    pub fn invalid_request() -> HttpResponse {
        HttpResponse::BadRequest().json(json!({ "success": false, "message": "Invalid request" }))
    }

    pub fn internal_error() -> HttpResponse {
        HttpResponse::InternalServerError().json(json!({
            "success": false,
            "message": "An unexpected error occurred",
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn mgmt_saved_includes_redirect_url() {
        let id = Uuid::new_v4();
        let resp = MgmtResponse::saved("Project created successfully!", id, "/projects/");
        assert_eq!(resp.status(), StatusCode::OK);

        let body = to_bytes(resp.into_body()).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["redirect_url"], "/projects/");
        assert_eq!(value["id"], id.to_string());
    }

    #[actix_web::test]
    async fn mgmt_invalid_carries_field_errors() {
        let mut errors = FieldErrors::default();
        errors.add("title", "This field is required.");

        let resp = MgmtResponse::invalid(&errors);
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(resp.into_body()).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["errors"]["title"][0], "This field is required.");
    }

    #[actix_web::test]
    async fn api_not_found_uses_error_envelope() {
        let resp = ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found");
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(resp.into_body()).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["error"]["code"], "PROJECT_NOT_FOUND");
    }
}
