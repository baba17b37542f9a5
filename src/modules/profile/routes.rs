// src/modules/profile/routes.rs

use actix_web::{get, post, web, HttpResponse, Responder};
use serde_json::json;
use tracing::error;

use super::ports::{ProfileRepositoryError, ProfileUpdate};
use crate::shared::api::{MgmtResponse, RequestOrigin};
use crate::AppState;

fn success_message(update: &ProfileUpdate) -> &'static str {
    match update {
        ProfileUpdate::PersonalInfo { .. } => "Personal information updated successfully!",
        ProfileUpdate::SocialLinks { .. } => "Social links updated successfully!",
        ProfileUpdate::Seo { .. } => "SEO settings updated successfully!",
        ProfileUpdate::Preferences { .. } => "Preferences updated successfully!",
        ProfileUpdate::ProfileImage { .. } => "Profile image updated successfully!",
        ProfileUpdate::DeleteProfileImage => "Profile image deleted successfully!",
        ProfileUpdate::UploadResume { .. } => "Resume uploaded successfully!",
        ProfileUpdate::DeleteResume => "Resume deleted successfully!",
        ProfileUpdate::UploadCoverLetter { .. } => "Cover letter uploaded successfully!",
        ProfileUpdate::DeleteCoverLetter => "Cover letter deleted successfully!",
        ProfileUpdate::VideoResume { .. } => "Video resume link updated successfully!",
    }
}

fn nothing_to_delete_message(update: &ProfileUpdate) -> &'static str {
    match update {
        ProfileUpdate::DeleteProfileImage => "No profile image to delete",
        ProfileUpdate::DeleteResume => "No resume to delete",
        ProfileUpdate::DeleteCoverLetter => "No cover letter to delete",
        _ => "Nothing to delete",
    }
}

/// Singleton profile, created lazily with placeholder values.
#[get("/details/")]
pub async fn manage_details_handler(data: web::Data<AppState>) -> impl Responder {
    match data.profile.get_or_create().await {
        Ok(profile) => HttpResponse::Ok().json(json!({ "profile": profile })),
        Err(e) => {
            error!("Repository error loading profile: {}", e);
            MgmtResponse::internal_error()
        }
    }
}

/// Section updates, dispatched on the `form_type` discriminator. Each
/// variant mutates only its own columns.
#[post("/details/")]
pub async fn update_details_handler(
    origin: RequestOrigin,
    body: web::Json<ProfileUpdate>,
    data: web::Data<AppState>,
) -> impl Responder {
    if !origin.is_ajax() {
        return MgmtResponse::invalid_request();
    }

    let update = match body.into_inner().validate() {
        Ok(update) => update,
        Err(errors) => return MgmtResponse::invalid(&errors),
    };

    let message = success_message(&update);
    let missing = nothing_to_delete_message(&update);
    let wants_image_url = matches!(update, ProfileUpdate::ProfileImage { .. });

    match data.profile.apply(update).await {
        Ok(profile) => {
            if wants_image_url {
                HttpResponse::Ok().json(json!({
                    "success": true,
                    "message": message,
                    "image_url": profile.profile_image,
                }))
            } else {
                MgmtResponse::ok(message)
            }
        }
        Err(ProfileRepositoryError::NothingToDelete) => {
            HttpResponse::BadRequest().json(json!({ "success": false, "message": missing }))
        }
        Err(e) => {
            error!("Repository error updating profile: {}", e);
            MgmtResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────
//
