// src/modules/profile/ports.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::sea_orm_entity::{AvailabilityStatus, WorkType};
use crate::shared::validation::{optional_url, FieldErrors};

//
// ──────────────────────────────────────────────────────────
// Section updates
// ──────────────────────────────────────────────────────────
//

/// One dashboard section per variant, dispatched exhaustively. The
/// discriminator rides in the request body as `form_type`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "form_type", rename_all = "snake_case")]
pub enum ProfileUpdate {
    PersonalInfo {
        /// Absent name/email/title keep their stored values.
        full_name: Option<String>,
        email: Option<String>,
        title: Option<String>,
        #[serde(default)]
        phone: String,
        #[serde(default)]
        location: String,
        #[serde(default)]
        bio: String,
    },
    SocialLinks {
        #[serde(default)]
        github: String,
        #[serde(default)]
        linkedin: String,
        #[serde(default)]
        twitter: String,
        #[serde(default)]
        instagram: String,
        #[serde(default)]
        youtube: String,
        #[serde(default)]
        website: String,
    },
    Seo {
        #[serde(default)]
        meta_title: String,
        #[serde(default)]
        meta_description: String,
        #[serde(default)]
        meta_keywords: String,
    },
    Preferences {
        #[serde(default = "default_status")]
        status: AvailabilityStatus,
        #[serde(default = "default_work_type")]
        work_type: WorkType,
        #[serde(default)]
        hourly_rate: Option<Decimal>,
        #[serde(default)]
        experience_years: i32,
        #[serde(default)]
        open_to_opportunities: bool,
        #[serde(default)]
        available_for_freelance: bool,
    },
    ProfileImage {
        image: String,
    },
    DeleteProfileImage,
    UploadResume {
        resume: String,
    },
    DeleteResume,
    UploadCoverLetter {
        cover_letter: String,
    },
    DeleteCoverLetter,
    VideoResume {
        #[serde(default)]
        video_resume: String,
    },
}

fn default_status() -> AvailabilityStatus {
    AvailabilityStatus::Available
}

fn default_work_type() -> WorkType {
    WorkType::Remote
}

impl ProfileUpdate {
    /// Field constraints checked before the repository sees the update.
    pub fn validate(self) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::default();

        match &self {
            ProfileUpdate::SocialLinks {
                github,
                linkedin,
                twitter,
                instagram,
                youtube,
                website,
            } => {
                for (field, value) in [
                    ("github", github),
                    ("linkedin", linkedin),
                    ("twitter", twitter),
                    ("instagram", instagram),
                    ("youtube", youtube),
                    ("website", website),
                ] {
                    optional_url(&mut errors, field, value);
                }
            }
            ProfileUpdate::VideoResume { video_resume } => {
                optional_url(&mut errors, "video_resume", video_resume);
            }
            ProfileUpdate::Preferences {
                hourly_rate,
                experience_years,
                ..
            } => {
                if let Some(rate) = hourly_rate {
                    if rate.is_sign_negative() {
                        errors.add("hourly_rate", "Ensure this value is not negative.");
                    }
                }
                if *experience_years < 0 {
                    errors.add("experience_years", "Ensure this value is not negative.");
                }
            }
            _ => {}
        }

        errors.into_result(self)
    }
}

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize)]
pub struct ProfileResult {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub title: String,
    pub bio: Option<String>,
    pub profile_image: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
    pub youtube: Option<String>,
    pub website: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub resume: Option<String>,
    pub cover_letter: Option<String>,
    pub video_resume: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
    pub status: AvailabilityStatus,
    pub work_type: WorkType,
    pub hourly_rate: Option<Decimal>,
    pub experience_years: i32,
    pub open_to_opportunities: bool,
    pub available_for_freelance: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileRepositoryError {
    /// Delete requested for a document that is not stored.
    #[error("Nothing to delete")]
    NothingToDelete,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// The singleton row, created lazily with placeholder values.
    async fn get_or_create(&self) -> Result<ProfileResult, ProfileRepositoryError>;

    /// First row by creation order, without creating one.
    async fn first(&self) -> Result<Option<ProfileResult>, ProfileRepositoryError>;

    /// Apply one section update to the singleton; only that section's
    /// columns are touched.
    async fn apply(&self, update: ProfileUpdate) -> Result<ProfileResult, ProfileRepositoryError>;
}
