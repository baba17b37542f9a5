// src/modules/skill/repository_postgres.rs

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::ports::{
    DeletedSkill, SkillCounts, SkillFields, SkillListFilter, SkillRepository,
    SkillRepositoryError, SkillResult,
};
use super::sea_orm_entity::{self as skills, ActiveModel, Column, Entity, SkillManaged};
use crate::shared::manage::{self, ToggleError};
use crate::shared::slug::{candidate, slugify};
use crate::shared::storage::{discard_blobs, FileStore};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct SkillRepositoryPostgres {
    db: Arc<DatabaseConnection>,
    files: Arc<dyn FileStore>,
}

impl SkillRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>, files: Arc<dyn FileStore>) -> Self {
        Self { db, files }
    }

    async fn free_slug(&self, display: &str) -> Result<String, SkillRepositoryError> {
        let base = slugify(display);
        let mut attempt = 0;
        loop {
            let probe = candidate(&base, attempt);
            let taken = Entity::find()
                .filter(Column::Slug.eq(&probe))
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .is_some();
            if !taken {
                return Ok(probe);
            }
            attempt += 1;
        }
    }

    async fn find_existing(&self, skill_id: Uuid) -> Result<skills::Model, SkillRepositoryError> {
        Entity::find_by_id(skill_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(SkillRepositoryError::NotFound)
    }
}

#[async_trait]
impl SkillRepository for SkillRepositoryPostgres {
    async fn create(&self, fields: SkillFields) -> Result<SkillResult, SkillRepositoryError> {
        let slug = self.free_slug(&fields.name).await?;
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(fields.name),
            slug: Set(slug),
            category_id: Set(fields.category_id),
            description: Set(fields.description),
            skill_level: Set(fields.skill_level),
            proficiency: Set(fields.proficiency),
            years_of_experience: Set(fields.years_of_experience),
            icon_type: Set(fields.icon_type),
            icon_class: Set(fields.icon_class),
            icon_image: Set(fields.icon_image),
            certificate_type: Set(fields.certificate_type),
            certificate_file: Set(fields.certificate_file),
            certificate_url: Set(fields.certificate_url),
            is_active: Set(fields.is_active),
            is_draft: Set(fields.is_draft),
            order: Set(fields.order),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_slug_error)?;
        Ok(model_to_result(inserted))
    }

    async fn get(&self, skill_id: Uuid) -> Result<SkillResult, SkillRepositoryError> {
        self.find_existing(skill_id).await.map(model_to_result)
    }

    async fn list(
        &self,
        filter: SkillListFilter,
    ) -> Result<Vec<SkillResult>, SkillRepositoryError> {
        let mut query = Entity::find()
            .order_by_desc(Column::Proficiency)
            .order_by_asc(Column::Name);

        if filter == SkillListFilter::Draft {
            query = query.filter(Column::IsDraft.eq(true));
        }

        let models = query.all(&*self.db).await.map_err(map_db_err)?;
        Ok(models.into_iter().map(model_to_result).collect())
    }

    async fn recent(&self, limit: u64) -> Result<Vec<SkillResult>, SkillRepositoryError> {
        let models = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(model_to_result).collect())
    }

    async fn counts(&self) -> Result<SkillCounts, SkillRepositoryError> {
        let total = Entity::find().count(&*self.db).await.map_err(map_db_err)?;
        let draft = Entity::find()
            .filter(Column::IsDraft.eq(true))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(SkillCounts { total, draft })
    }

    async fn update(
        &self,
        skill_id: Uuid,
        fields: SkillFields,
    ) -> Result<SkillResult, SkillRepositoryError> {
        let existing = self.find_existing(skill_id).await?;
        let old_icon = existing.icon_image.clone();
        let old_certificate = existing.certificate_file.clone();

        let model = ActiveModel {
            id: Set(skill_id),
            name: Set(fields.name),
            category_id: Set(fields.category_id),
            description: Set(fields.description),
            skill_level: Set(fields.skill_level),
            proficiency: Set(fields.proficiency),
            years_of_experience: Set(fields.years_of_experience),
            icon_type: Set(fields.icon_type),
            icon_class: Set(fields.icon_class),
            // Absent uploads keep the stored files.
            icon_image: match &fields.icon_image {
                Some(new_ref) => Set(Some(new_ref.clone())),
                None => Set(old_icon.clone()),
            },
            certificate_type: Set(fields.certificate_type),
            certificate_file: match &fields.certificate_file {
                Some(new_ref) => Set(Some(new_ref.clone())),
                None => Set(old_certificate.clone()),
            },
            certificate_url: Set(fields.certificate_url),
            is_active: Set(fields.is_active),
            is_draft: Set(fields.is_draft),
            order: Set(fields.order),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let updated = model.update(&*self.db).await.map_err(map_slug_error)?;

        for (new_ref, old_ref) in [
            (&fields.icon_image, &old_icon),
            (&fields.certificate_file, &old_certificate),
        ] {
            if let (Some(new_ref), Some(old_ref)) = (new_ref, old_ref) {
                if new_ref != old_ref {
                    discard_blobs(self.files.as_ref(), std::slice::from_ref(old_ref)).await;
                }
            }
        }

        Ok(model_to_result(updated))
    }

    async fn set_active(&self, skill_id: Uuid, active: bool) -> Result<(), SkillRepositoryError> {
        manage::set_active::<SkillManaged, _>(&*self.db, skill_id, active)
            .await
            .map_err(|e| match e {
                ToggleError::NotFound => SkillRepositoryError::NotFound,
                ToggleError::DatabaseError(msg) => SkillRepositoryError::DatabaseError(msg),
            })
    }

    async fn delete(&self, skill_id: Uuid) -> Result<DeletedSkill, SkillRepositoryError> {
        let existing = self.find_existing(skill_id).await?;

        let blob_refs: Vec<String> = [&existing.icon_image, &existing.certificate_file]
            .into_iter()
            .flatten()
            .cloned()
            .collect();

        Entity::delete_by_id(skill_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        discard_blobs(self.files.as_ref(), &blob_refs).await;

        Ok(DeletedSkill {
            name: existing.name,
        })
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_result(model: skills::Model) -> SkillResult {
    SkillResult {
        id: model.id,
        skill_level_display: model.skill_level.display().to_string(),
        name: model.name,
        slug: model.slug,
        category_id: model.category_id,
        description: model.description,
        skill_level: model.skill_level,
        proficiency: model.proficiency,
        years_of_experience: model.years_of_experience,
        icon_type: model.icon_type,
        icon_class: model.icon_class,
        icon_image: model.icon_image,
        certificate_type: model.certificate_type,
        certificate_file: model.certificate_file,
        certificate_url: model.certificate_url,
        is_active: model.is_active,
        is_draft: model.is_draft,
        order: model.order,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_slug_error(e: DbErr) -> SkillRepositoryError {
    let msg = e.to_string().to_lowercase();

    if (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && msg.contains("slug")
    {
        SkillRepositoryError::SlugAlreadyExists
    } else {
        SkillRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> SkillRepositoryError {
    SkillRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
