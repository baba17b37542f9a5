// src/modules/notification/routes.rs

use actix_web::{get, post, web, Either, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;
use tracing::error;
use uuid::Uuid;

use super::form::NotificationForm;
use super::ports::{NotificationFilter, NotificationRepositoryError};
use crate::shared::api::MgmtResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub filter: Option<String>,
}

#[get("/notifications/")]
pub async fn manage_notifications_handler(
    query: web::Query<ListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter = NotificationFilter::parse(query.filter.as_deref());

    let notifications = match data.notifications.list(filter).await {
        Ok(notifications) => notifications,
        Err(e) => {
            error!("Repository error listing notifications: {}", e);
            return MgmtResponse::internal_error();
        }
    };

    match data.notifications.counts().await {
        Ok(counts) => HttpResponse::Ok().json(json!({
            "notifications": notifications,
            "current_filter": filter.as_str(),
            "total_count": counts.total,
            "unread_count": counts.unread,
            "read_count": counts.read,
            "info_count": counts.info,
            "success_count": counts.success,
            "warning_count": counts.warning,
            "error_count": counts.error,
        })),
        Err(e) => {
            error!("Repository error counting notifications: {}", e);
            MgmtResponse::internal_error()
        }
    }
}

/// Create, or update when the body carries a `notification_id`.
#[post("/notifications/save/")]
pub async fn save_notification_handler(
    body: Either<web::Json<NotificationForm>, web::Form<NotificationForm>>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (notification_id, fields) = match body.into_inner().validate() {
        Ok(validated) => validated,
        Err(errors) => return MgmtResponse::invalid(&errors),
    };

    match data.notifications.save(notification_id, fields).await {
        Ok(_) => HttpResponse::Ok().json(json!({ "success": true })),
        Err(NotificationRepositoryError::NotFound) => {
            MgmtResponse::not_found("Notification not found")
        }
        Err(e) => {
            error!("Repository error saving notification: {}", e);
            MgmtResponse::internal_error()
        }
    }
}

#[get("/notifications/{notification_id}/")]
pub async fn get_notification_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.notifications.get(path.into_inner()).await {
        Ok(notification) => HttpResponse::Ok().json(json!({
            "success": true,
            "notification": notification,
        })),
        Err(NotificationRepositoryError::NotFound) => {
            MgmtResponse::not_found("Notification not found")
        }
        Err(e) => {
            error!("Repository error fetching notification: {}", e);
            MgmtResponse::internal_error()
        }
    }
}

#[post("/notifications/{notification_id}/delete/")]
pub async fn delete_notification_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.notifications.delete(path.into_inner()).await {
        Ok(()) => HttpResponse::Ok().json(json!({ "success": true })),
        Err(NotificationRepositoryError::NotFound) => {
            MgmtResponse::not_found("Notification not found")
        }
        Err(e) => {
            error!("Repository error deleting notification: {}", e);
            MgmtResponse::internal_error()
        }
    }
}

#[post("/notifications/{notification_id}/read/")]
pub async fn mark_notification_read_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.notifications.mark_read(path.into_inner()).await {
        Ok(()) => HttpResponse::Ok().json(json!({ "success": true })),
        Err(NotificationRepositoryError::NotFound) => {
            MgmtResponse::not_found("Notification not found")
        }
        Err(e) => {
            error!("Repository error marking notification read: {}", e);
            MgmtResponse::internal_error()
        }
    }
}

#[post("/notifications/read-all/")]
pub async fn mark_all_notifications_read_handler(data: web::Data<AppState>) -> impl Responder {
    match data.notifications.mark_all_read().await {
        Ok(_) => HttpResponse::Ok().json(json!({ "success": true })),
        Err(e) => {
            error!("Repository error marking notifications read: {}", e);
            MgmtResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────
//
