// src/modules/profile/repository_postgres.rs

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::ports::{ProfileRepository, ProfileRepositoryError, ProfileResult, ProfileUpdate};
use super::sea_orm_entity::{
    self as profiles, ActiveModel, AvailabilityStatus, Column, Entity, WorkType,
};
use crate::shared::storage::{discard_blobs, FileStore};

const PLACEHOLDER_NAME: &str = "Your Name";
const PLACEHOLDER_EMAIL: &str = "your.email@example.com";
const PLACEHOLDER_TITLE: &str = "Your Professional Title";

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProfileRepositoryPostgres {
    db: Arc<DatabaseConnection>,
    files: Arc<dyn FileStore>,
}

impl ProfileRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>, files: Arc<dyn FileStore>) -> Self {
        Self { db, files }
    }

    async fn first_model(&self) -> Result<Option<profiles::Model>, ProfileRepositoryError> {
        Entity::find()
            .order_by_asc(Column::CreatedAt)
            .one(&*self.db)
            .await
            .map_err(map_db_err)
    }

    async fn get_or_create_model(&self) -> Result<profiles::Model, ProfileRepositoryError> {
        if let Some(existing) = self.first_model().await? {
            return Ok(existing);
        }

        let now = Utc::now().fixed_offset();
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            full_name: Set(PLACEHOLDER_NAME.to_string()),
            email: Set(PLACEHOLDER_EMAIL.to_string()),
            title: Set(PLACEHOLDER_TITLE.to_string()),
            status: Set(AvailabilityStatus::Available),
            work_type: Set(WorkType::Remote),
            experience_years: Set(0),
            open_to_opportunities: Set(true),
            available_for_freelance: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        model.insert(&*self.db).await.map_err(map_db_err)
    }
}

fn opt(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryPostgres {
    async fn get_or_create(&self) -> Result<ProfileResult, ProfileRepositoryError> {
        self.get_or_create_model().await.map(model_to_result)
    }

    async fn first(&self) -> Result<Option<ProfileResult>, ProfileRepositoryError> {
        Ok(self.first_model().await?.map(model_to_result))
    }

    async fn apply(&self, update: ProfileUpdate) -> Result<ProfileResult, ProfileRepositoryError> {
        let current = self.get_or_create_model().await?;

        let mut active = ActiveModel {
            id: Set(current.id),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        // Blobs displaced by this update, discarded after the row write.
        let mut displaced: Vec<String> = Vec::new();

        match update {
            ProfileUpdate::PersonalInfo {
                full_name,
                email,
                title,
                phone,
                location,
                bio,
            } => {
                active.full_name = Set(full_name.unwrap_or_else(|| current.full_name.clone()));
                active.email = Set(email.unwrap_or_else(|| current.email.clone()));
                active.title = Set(title.unwrap_or_else(|| current.title.clone()));
                active.phone = Set(opt(phone));
                active.location = Set(opt(location));
                active.bio = Set(opt(bio));
            }

            ProfileUpdate::SocialLinks {
                github,
                linkedin,
                twitter,
                instagram,
                youtube,
                website,
            } => {
                active.github = Set(opt(github));
                active.linkedin = Set(opt(linkedin));
                active.twitter = Set(opt(twitter));
                active.instagram = Set(opt(instagram));
                active.youtube = Set(opt(youtube));
                active.website = Set(opt(website));
            }

            ProfileUpdate::Seo {
                meta_title,
                meta_description,
                meta_keywords,
            } => {
                active.meta_title = Set(opt(meta_title));
                active.meta_description = Set(opt(meta_description));
                active.meta_keywords = Set(opt(meta_keywords));
            }

            ProfileUpdate::Preferences {
                status,
                work_type,
                hourly_rate,
                experience_years,
                open_to_opportunities,
                available_for_freelance,
            } => {
                active.status = Set(status);
                active.work_type = Set(work_type);
                active.hourly_rate = Set(hourly_rate);
                active.experience_years = Set(experience_years);
                active.open_to_opportunities = Set(open_to_opportunities);
                active.available_for_freelance = Set(available_for_freelance);
            }

            ProfileUpdate::ProfileImage { image } => {
                if let Some(old) = &current.profile_image {
                    if old != &image {
                        displaced.push(old.clone());
                    }
                }
                active.profile_image = Set(Some(image));
            }

            ProfileUpdate::DeleteProfileImage => match &current.profile_image {
                Some(old) => {
                    displaced.push(old.clone());
                    active.profile_image = Set(None);
                }
                None => return Err(ProfileRepositoryError::NothingToDelete),
            },

            ProfileUpdate::UploadResume { resume } => {
                if let Some(old) = &current.resume {
                    if old != &resume {
                        displaced.push(old.clone());
                    }
                }
                active.resume = Set(Some(resume));
            }

            ProfileUpdate::DeleteResume => match &current.resume {
                Some(old) => {
                    displaced.push(old.clone());
                    active.resume = Set(None);
                }
                None => return Err(ProfileRepositoryError::NothingToDelete),
            },

            ProfileUpdate::UploadCoverLetter { cover_letter } => {
                if let Some(old) = &current.cover_letter {
                    if old != &cover_letter {
                        displaced.push(old.clone());
                    }
                }
                active.cover_letter = Set(Some(cover_letter));
            }

            ProfileUpdate::DeleteCoverLetter => match &current.cover_letter {
                Some(old) => {
                    displaced.push(old.clone());
                    active.cover_letter = Set(None);
                }
                None => return Err(ProfileRepositoryError::NothingToDelete),
            },

            ProfileUpdate::VideoResume { video_resume } => {
                active.video_resume = Set(opt(video_resume));
            }
        }

        let updated = active.update(&*self.db).await.map_err(map_db_err)?;

        discard_blobs(self.files.as_ref(), &displaced).await;

        Ok(model_to_result(updated))
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_result(model: profiles::Model) -> ProfileResult {
    ProfileResult {
        id: model.id,
        full_name: model.full_name,
        email: model.email,
        phone: model.phone,
        location: model.location,
        title: model.title,
        bio: model.bio,
        profile_image: model.profile_image,
        github: model.github,
        linkedin: model.linkedin,
        twitter: model.twitter,
        instagram: model.instagram,
        youtube: model.youtube,
        website: model.website,
        contact_email: model.contact_email,
        contact_phone: model.contact_phone,
        address: model.address,
        city: model.city,
        state: model.state,
        country: model.country,
        resume: model.resume,
        cover_letter: model.cover_letter,
        video_resume: model.video_resume,
        meta_title: model.meta_title,
        meta_description: model.meta_description,
        meta_keywords: model.meta_keywords,
        status: model.status,
        work_type: model.work_type,
        hourly_rate: model.hourly_rate,
        experience_years: model.experience_years,
        open_to_opportunities: model.open_to_opportunities,
        available_for_freelance: model.available_for_freelance,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> ProfileRepositoryError {
    ProfileRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
