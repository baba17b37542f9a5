// src/modules/experience/repository_postgres.rs

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use super::ports::{
    DeletedExperience, ExperienceCounts, ExperienceFields, ExperienceImageResult,
    ExperienceListFilter, ExperienceRepository, ExperienceRepositoryError, ExperienceResult,
};
use super::sea_orm_entity::experience_images::{self as images, ExperienceImageDef};
use super::sea_orm_entity::experiences::{self, ActiveModel, Column, Entity, ExperienceManaged};
use crate::shared::attachments::{self, NewAttachment};
use crate::shared::manage::{self, ToggleError};
use crate::shared::slug::{candidate, slugify};
use crate::shared::storage::{discard_blobs, FileStore};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ExperienceRepositoryPostgres {
    db: Arc<DatabaseConnection>,
    files: Arc<dyn FileStore>,
}

impl ExperienceRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>, files: Arc<dyn FileStore>) -> Self {
        Self { db, files }
    }

    async fn free_slug(&self, display: &str) -> Result<String, ExperienceRepositoryError> {
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

    async fn find_existing(
        &self,
        experience_id: Uuid,
    ) -> Result<experiences::Model, ExperienceRepositoryError> {
        Entity::find_by_id(experience_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ExperienceRepositoryError::NotFound)
    }

    async fn with_images(
        &self,
        models: Vec<experiences::Model>,
    ) -> Result<Vec<ExperienceResult>, ExperienceRepositoryError> {
        let ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();

        let mut by_parent: HashMap<Uuid, Vec<images::Model>> = HashMap::new();
        if !ids.is_empty() {
            let children = images::Entity::find()
                .filter(images::Column::ExperienceId.is_in(ids))
                .order_by_asc(images::Column::Order)
                .order_by_desc(images::Column::UploadedAt)
                .all(&*self.db)
                .await
                .map_err(map_db_err)?;

            for child in children {
                by_parent.entry(child.experience_id).or_default().push(child);
            }
        }

        Ok(models
            .into_iter()
            .map(|m| {
                let imgs = by_parent.remove(&m.id).unwrap_or_default();
                model_to_result(m, imgs)
            })
            .collect())
    }
}

async fn load_images<C: ConnectionTrait>(
    conn: &C,
    experience_id: Uuid,
) -> Result<Vec<images::Model>, ExperienceRepositoryError> {
    images::Entity::find()
        .filter(images::Column::ExperienceId.eq(experience_id))
        .order_by_asc(images::Column::Order)
        .order_by_desc(images::Column::UploadedAt)
        .all(conn)
        .await
        .map_err(map_db_err)
}

#[async_trait]
impl ExperienceRepository for ExperienceRepositoryPostgres {
    async fn create(
        &self,
        fields: ExperienceFields,
        new_images: Vec<NewAttachment>,
    ) -> Result<ExperienceResult, ExperienceRepositoryError> {
        let slug = self.free_slug(&fields.position).await?;
        let now = Utc::now().fixed_offset();

        let txn = self.db.begin().await.map_err(map_db_err)?;

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            position: Set(fields.position),
            slug: Set(slug),
            company_name: Set(fields.company_name),
            company_logo: Set(fields.company_logo),
            location: Set(fields.location),
            employment_type: Set(fields.employment_type),
            employment_status: Set(fields.employment_status),
            start_date: Set(fields.start_date),
            end_date: Set(fields.end_date),
            currently_working: Set(fields.currently_working),
            short_description: Set(fields.short_description),
            detailed_description: Set(fields.detailed_description),
            is_active: Set(fields.is_active),
            is_draft: Set(fields.is_draft),
            order: Set(fields.order),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&txn).await.map_err(map_slug_error)?;

        attachments::insert_ordered::<ExperienceImageDef, _>(&txn, inserted.id, &new_images)
            .await
            .map_err(map_db_err)?;

        let imgs = load_images(&txn, inserted.id).await?;

        txn.commit().await.map_err(map_db_err)?;

        Ok(model_to_result(inserted, imgs))
    }

    async fn get(
        &self,
        experience_id: Uuid,
    ) -> Result<ExperienceResult, ExperienceRepositoryError> {
        let model = self.find_existing(experience_id).await?;
        let imgs = load_images(&*self.db, experience_id).await?;
        Ok(model_to_result(model, imgs))
    }

    async fn list(
        &self,
        filter: ExperienceListFilter,
    ) -> Result<Vec<ExperienceResult>, ExperienceRepositoryError> {
        let mut query = Entity::find()
            .order_by_desc(Column::Order)
            .order_by_desc(Column::StartDate);

        if filter == ExperienceListFilter::Draft {
            query = query.filter(Column::IsDraft.eq(true));
        }

        let models = query.all(&*self.db).await.map_err(map_db_err)?;
        self.with_images(models).await
    }

    async fn recent(&self, limit: u64) -> Result<Vec<ExperienceResult>, ExperienceRepositoryError> {
        let models = Entity::find()
            .order_by_desc(Column::Order)
            .order_by_desc(Column::StartDate)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        self.with_images(models).await
    }

    async fn counts(&self) -> Result<ExperienceCounts, ExperienceRepositoryError> {
        let total = Entity::find().count(&*self.db).await.map_err(map_db_err)?;
        let draft = Entity::find()
            .filter(Column::IsDraft.eq(true))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(ExperienceCounts { total, draft })
    }

    async fn update(
        &self,
        experience_id: Uuid,
        fields: ExperienceFields,
        new_images: Option<Vec<NewAttachment>>,
    ) -> Result<ExperienceResult, ExperienceRepositoryError> {
        let existing = self.find_existing(experience_id).await?;
        let old_logo = existing.company_logo.clone();

        let txn = self.db.begin().await.map_err(map_db_err)?;

        let model = ActiveModel {
            id: Set(experience_id),
            position: Set(fields.position),
            company_name: Set(fields.company_name),
            company_logo: match &fields.company_logo {
                Some(new_ref) => Set(Some(new_ref.clone())),
                None => Set(old_logo.clone()),
            },
            location: Set(fields.location),
            employment_type: Set(fields.employment_type),
            employment_status: Set(fields.employment_status),
            start_date: Set(fields.start_date),
            end_date: Set(fields.end_date),
            currently_working: Set(fields.currently_working),
            short_description: Set(fields.short_description),
            detailed_description: Set(fields.detailed_description),
            is_active: Set(fields.is_active),
            is_draft: Set(fields.is_draft),
            order: Set(fields.order),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let updated = model.update(&txn).await.map_err(map_slug_error)?;

        let displaced = match &new_images {
            Some(files) => {
                attachments::replace_ordered::<ExperienceImageDef, _>(&txn, experience_id, files)
                    .await
                    .map_err(map_db_err)?
            }
            None => Vec::new(),
        };

        let imgs = load_images(&txn, experience_id).await?;

        txn.commit().await.map_err(map_db_err)?;

        discard_blobs(self.files.as_ref(), &displaced).await;
        if let (Some(new_ref), Some(old_ref)) = (&fields.company_logo, &old_logo) {
            if new_ref != old_ref {
                discard_blobs(self.files.as_ref(), std::slice::from_ref(old_ref)).await;
            }
        }

        Ok(model_to_result(updated, imgs))
    }

    async fn set_active(
        &self,
        experience_id: Uuid,
        active: bool,
    ) -> Result<(), ExperienceRepositoryError> {
        manage::set_active::<ExperienceManaged, _>(&*self.db, experience_id, active)
            .await
            .map_err(|e| match e {
                ToggleError::NotFound => ExperienceRepositoryError::NotFound,
                ToggleError::DatabaseError(msg) => ExperienceRepositoryError::DatabaseError(msg),
            })
    }

    async fn delete(
        &self,
        experience_id: Uuid,
    ) -> Result<DeletedExperience, ExperienceRepositoryError> {
        let existing = self.find_existing(experience_id).await?;
        let imgs = load_images(&*self.db, experience_id).await?;

        let mut blob_refs: Vec<String> = imgs.iter().map(|i| i.image.clone()).collect();
        if let Some(logo) = &existing.company_logo {
            blob_refs.push(logo.clone());
        }

        // Image rows go with the parent via FK cascade.
        Entity::delete_by_id(experience_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        discard_blobs(self.files.as_ref(), &blob_refs).await;

        Ok(DeletedExperience {
            position: existing.position,
        })
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_result(model: experiences::Model, imgs: Vec<images::Model>) -> ExperienceResult {
    ExperienceResult {
        id: model.id,
        position: model.position,
        slug: model.slug,
        company_name: model.company_name,
        company_logo: model.company_logo,
        location: model.location,
        employment_type: model.employment_type,
        employment_status: model.employment_status,
        start_date: model.start_date,
        end_date: model.end_date,
        currently_working: model.currently_working,
        short_description: model.short_description,
        detailed_description: model.detailed_description,
        is_active: model.is_active,
        is_draft: model.is_draft,
        order: model.order,
        images: imgs
            .into_iter()
            .map(|i| ExperienceImageResult {
                id: i.id,
                image: i.image,
                caption: i.caption,
                order: i.order,
                uploaded_at: i.uploaded_at.into(),
            })
            .collect(),
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_slug_error(e: DbErr) -> ExperienceRepositoryError {
    let msg = e.to_string().to_lowercase();

    if (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && msg.contains("slug")
    {
        ExperienceRepositoryError::SlugAlreadyExists
    } else {
        ExperienceRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> ExperienceRepositoryError {
    ExperienceRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    use super::super::sea_orm_entity::experiences::{EmploymentStatus, EmploymentType};
    use crate::shared::storage::test_support::{NoopFileStore, RecordingFileStore};

    fn experience_fields() -> ExperienceFields {
        ExperienceFields {
            position: "Backend Engineer".to_string(),
            company_name: "ACME".to_string(),
            company_logo: None,
            location: None,
            employment_type: EmploymentType::FullTime,
            employment_status: EmploymentStatus::Past,
            start_date: NaiveDate::from_ymd_opt(2022, 5, 1).unwrap(),
            end_date: Some(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()),
            currently_working: false,
            short_description: "Built services.".to_string(),
            detailed_description: "Built and ran backend services.".to_string(),
            is_active: true,
            is_draft: false,
            order: 0,
        }
    }

    fn experience_model(id: Uuid, slug: &str) -> experiences::Model {
        let now = Utc::now().fixed_offset();
        experiences::Model {
            id,
            position: "Backend Engineer".to_string(),
            slug: slug.to_string(),
            company_name: "ACME".to_string(),
            company_logo: None,
            location: None,
            employment_type: EmploymentType::FullTime,
            employment_status: EmploymentStatus::Past,
            start_date: NaiveDate::from_ymd_opt(2022, 5, 1).unwrap(),
            end_date: Some(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()),
            currently_working: false,
            short_description: "Built services.".to_string(),
            detailed_description: "Built and ran backend services.".to_string(),
            is_active: true,
            is_draft: false,
            order: 0,
            created_at: now,
            updated_at: now,
        }
    }

    fn image_model(experience_id: Uuid, image: &str, order: i32) -> images::Model {
        images::Model {
            id: Uuid::new_v4(),
            experience_id,
            image: image.to_string(),
            caption: String::new(),
            order,
            uploaded_at: Utc::now().fixed_offset(),
        }
    }

    fn uploads(names: &[&str]) -> Vec<NewAttachment> {
        names
            .iter()
            .map(|n| NewAttachment {
                image: n.to_string(),
                caption: String::new(),
            })
            .collect()
    }

    #[tokio::test]
    async fn create_persists_experience_with_ordered_images() {
        let id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![
                Vec::<experiences::Model>::new(),
                vec![experience_model(id, "backend-engineer")],
            ])
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 2,
            }])
            .append_query_results(vec![vec![
                image_model(id, "office.png", 0),
                image_model(id, "team.png", 1),
            ]])
            .into_connection();

        let repo = ExperienceRepositoryPostgres::new(Arc::new(db), Arc::new(NoopFileStore));
        let result = repo
            .create(experience_fields(), uploads(&["office.png", "team.png"]))
            .await
            .unwrap();

        assert_eq!(result.slug, "backend-engineer");
        assert_eq!(result.images.len(), 2);
        assert_eq!(result.images[0].order, 0);
        assert_eq!(result.images[1].order, 1);
    }

    #[tokio::test]
    async fn create_resolves_position_slug_collision() {
        let id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![
                vec![experience_model(Uuid::new_v4(), "backend-engineer")],
                Vec::<experiences::Model>::new(),
                vec![experience_model(id, "backend-engineer-1")],
            ])
            .append_query_results(vec![Vec::<images::Model>::new()])
            .into_connection();

        let repo = ExperienceRepositoryPostgres::new(Arc::new(db), Arc::new(NoopFileStore));
        let result = repo.create(experience_fields(), vec![]).await.unwrap();

        assert_eq!(result.slug, "backend-engineer-1");
    }

    #[tokio::test]
    async fn update_with_files_replaces_image_set() {
        let id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![
                vec![experience_model(id, "backend-engineer")],
                vec![experience_model(id, "backend-engineer")],
            ])
            .append_query_results(vec![vec![
                image_model(id, "old1.png", 0),
                image_model(id, "old2.png", 1),
            ]])
            .append_exec_results(vec![
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 2,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 2,
                },
            ])
            .append_query_results(vec![vec![
                image_model(id, "new1.png", 0),
                image_model(id, "new2.png", 1),
            ]])
            .into_connection();

        let files = Arc::new(RecordingFileStore::default());
        let repo = ExperienceRepositoryPostgres::new(Arc::new(db), files.clone());

        let result = repo
            .update(
                id,
                experience_fields(),
                Some(uploads(&["new1.png", "new2.png"])),
            )
            .await
            .unwrap();

        let ordinals: Vec<i32> = result.images.iter().map(|i| i.order).collect();
        assert_eq!(ordinals, vec![0, 1]);
        assert_eq!(result.images[0].image, "new1.png");
        assert_eq!(
            files.removed_paths(),
            vec!["old1.png".to_string(), "old2.png".to_string()]
        );
    }

    #[tokio::test]
    async fn delete_reports_position_and_discards_blobs() {
        let id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![experience_model(id, "backend-engineer")]])
            .append_query_results(vec![vec![image_model(id, "office.png", 0)]])
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let files = Arc::new(RecordingFileStore::default());
        let repo = ExperienceRepositoryPostgres::new(Arc::new(db), files.clone());

        let deleted = repo.delete(id).await.unwrap();

        assert_eq!(deleted.position, "Backend Engineer");
        assert_eq!(files.removed_paths(), vec!["office.png".to_string()]);
    }

    #[tokio::test]
    async fn set_active_unknown_id_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = ExperienceRepositoryPostgres::new(Arc::new(db), Arc::new(NoopFileStore));
        let result = repo.set_active(Uuid::new_v4(), true).await;

        assert!(matches!(
            result.unwrap_err(),
            ExperienceRepositoryError::NotFound
        ));
    }
}
