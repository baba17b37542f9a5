// src/modules/project/repository_postgres.rs

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
    DeletedProject, ProjectCounts, ProjectFields, ProjectListFilter, ProjectRepository,
    ProjectRepositoryError, ProjectResult, ScreenshotResult,
};
use super::sea_orm_entity::project_screenshots::{self as screenshots, ScreenshotDef};
use super::sea_orm_entity::projects::{self, ActiveModel, Column, Entity, ProjectManaged, ProjectStatus};
use crate::shared::attachments::{self, NewAttachment};
use crate::shared::manage::{self, ToggleError};
use crate::shared::slug::{candidate, slugify};
use crate::shared::storage::{discard_blobs, FileStore};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
    files: Arc<dyn FileStore>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>, files: Arc<dyn FileStore>) -> Self {
        Self { db, files }
    }

    async fn free_slug(&self, display: &str) -> Result<String, ProjectRepositoryError> {
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
        project_id: Uuid,
    ) -> Result<projects::Model, ProjectRepositoryError> {
        Entity::find_by_id(project_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ProjectRepositoryError::NotFound)
    }

    /// Attach ordered screenshots to an already-ordered set of projects with
    /// a single child query.
    async fn with_screenshots(
        &self,
        models: Vec<projects::Model>,
    ) -> Result<Vec<ProjectResult>, ProjectRepositoryError> {
        let ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();

        let mut by_parent: HashMap<Uuid, Vec<screenshots::Model>> = HashMap::new();
        if !ids.is_empty() {
            let children = screenshots::Entity::find()
                .filter(screenshots::Column::ProjectId.is_in(ids))
                .order_by_asc(screenshots::Column::Order)
                .order_by_desc(screenshots::Column::UploadedAt)
                .all(&*self.db)
                .await
                .map_err(map_db_err)?;

            for child in children {
                by_parent.entry(child.project_id).or_default().push(child);
            }
        }

        Ok(models
            .into_iter()
            .map(|m| {
                let shots = by_parent.remove(&m.id).unwrap_or_default();
                model_to_result(m, shots)
            })
            .collect())
    }
}

async fn load_screenshots<C: ConnectionTrait>(
    conn: &C,
    project_id: Uuid,
) -> Result<Vec<screenshots::Model>, ProjectRepositoryError> {
    screenshots::Entity::find()
        .filter(screenshots::Column::ProjectId.eq(project_id))
        .order_by_asc(screenshots::Column::Order)
        .order_by_desc(screenshots::Column::UploadedAt)
        .all(conn)
        .await
        .map_err(map_db_err)
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn create(
        &self,
        fields: ProjectFields,
        new_screenshots: Vec<NewAttachment>,
    ) -> Result<ProjectResult, ProjectRepositoryError> {
        let slug = self.free_slug(&fields.title).await?;
        let now = Utc::now().fixed_offset();

        let txn = self.db.begin().await.map_err(map_db_err)?;

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(fields.title),
            slug: Set(slug),
            project_name: Set(fields.project_name),
            description: Set(fields.description),
            documentation: Set(fields.documentation),
            category_id: Set(fields.category_id),
            technologies: Set(fields.technologies),
            github_url: Set(fields.github_url),
            live_url: Set(fields.live_url),
            demo_url: Set(fields.demo_url),
            other_url: Set(fields.other_url),
            thumbnail: Set(fields.thumbnail),
            start_date: Set(fields.start_date),
            end_date: Set(fields.end_date),
            client: Set(fields.client),
            status: Set(fields.status),
            is_active: Set(fields.is_active),
            is_featured: Set(fields.is_featured),
            is_draft: Set(fields.is_draft),
            views: Set(0),
            likes: Set(0),
            order: Set(fields.order),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&txn).await.map_err(map_slug_error)?;

        attachments::insert_ordered::<ScreenshotDef, _>(&txn, inserted.id, &new_screenshots)
            .await
            .map_err(map_db_err)?;

        let shots = load_screenshots(&txn, inserted.id).await?;

        txn.commit().await.map_err(map_db_err)?;

        Ok(model_to_result(inserted, shots))
    }

    async fn get(&self, project_id: Uuid) -> Result<ProjectResult, ProjectRepositoryError> {
        let model = self.find_existing(project_id).await?;
        let shots = load_screenshots(&*self.db, project_id).await?;
        Ok(model_to_result(model, shots))
    }

    async fn list(
        &self,
        filter: ProjectListFilter,
    ) -> Result<Vec<ProjectResult>, ProjectRepositoryError> {
        let mut query = Entity::find()
            .order_by_desc(Column::Order)
            .order_by_desc(Column::CreatedAt);

        if filter == ProjectListFilter::Draft {
            query = query.filter(Column::Status.eq(ProjectStatus::Draft));
        }

        let models = query.all(&*self.db).await.map_err(map_db_err)?;
        self.with_screenshots(models).await
    }

    async fn recent(&self, limit: u64) -> Result<Vec<ProjectResult>, ProjectRepositoryError> {
        let models = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        self.with_screenshots(models).await
    }

    async fn counts(&self) -> Result<ProjectCounts, ProjectRepositoryError> {
        let total = Entity::find().count(&*self.db).await.map_err(map_db_err)?;
        let draft = Entity::find()
            .filter(Column::Status.eq(ProjectStatus::Draft))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(ProjectCounts { total, draft })
    }

    async fn update(
        &self,
        project_id: Uuid,
        fields: ProjectFields,
        new_screenshots: Option<Vec<NewAttachment>>,
    ) -> Result<ProjectResult, ProjectRepositoryError> {
        let existing = self.find_existing(project_id).await?;
        let old_thumbnail = existing.thumbnail.clone();

        let txn = self.db.begin().await.map_err(map_db_err)?;

        let model = ActiveModel {
            id: Set(project_id),
            title: Set(fields.title),
            project_name: Set(fields.project_name),
            description: Set(fields.description),
            documentation: Set(fields.documentation),
            category_id: Set(fields.category_id),
            technologies: Set(fields.technologies),
            github_url: Set(fields.github_url),
            live_url: Set(fields.live_url),
            demo_url: Set(fields.demo_url),
            other_url: Set(fields.other_url),
            // Absent upload keeps the stored thumbnail.
            thumbnail: match &fields.thumbnail {
                Some(new_ref) => Set(Some(new_ref.clone())),
                None => Set(old_thumbnail.clone()),
            },
            start_date: Set(fields.start_date),
            end_date: Set(fields.end_date),
            client: Set(fields.client),
            status: Set(fields.status),
            is_active: Set(fields.is_active),
            is_featured: Set(fields.is_featured),
            is_draft: Set(fields.is_draft),
            order: Set(fields.order),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let updated = model.update(&txn).await.map_err(map_slug_error)?;

        let displaced = match &new_screenshots {
            Some(files) => attachments::replace_ordered::<ScreenshotDef, _>(&txn, project_id, files)
                .await
                .map_err(map_db_err)?,
            None => Vec::new(),
        };

        let shots = load_screenshots(&txn, project_id).await?;

        txn.commit().await.map_err(map_db_err)?;

        discard_blobs(self.files.as_ref(), &displaced).await;
        if let (Some(new_ref), Some(old_ref)) = (&fields.thumbnail, &old_thumbnail) {
            if new_ref != old_ref {
                discard_blobs(self.files.as_ref(), std::slice::from_ref(old_ref)).await;
            }
        }

        Ok(model_to_result(updated, shots))
    }

    async fn set_active(
        &self,
        project_id: Uuid,
        active: bool,
    ) -> Result<(), ProjectRepositoryError> {
        manage::set_active::<ProjectManaged, _>(&*self.db, project_id, active)
            .await
            .map_err(|e| match e {
                ToggleError::NotFound => ProjectRepositoryError::NotFound,
                ToggleError::DatabaseError(msg) => ProjectRepositoryError::DatabaseError(msg),
            })
    }

    async fn delete(&self, project_id: Uuid) -> Result<DeletedProject, ProjectRepositoryError> {
        let existing = self.find_existing(project_id).await?;
        let shots = load_screenshots(&*self.db, project_id).await?;

        let mut blob_refs: Vec<String> = shots.iter().map(|s| s.image.clone()).collect();
        if let Some(thumbnail) = &existing.thumbnail {
            blob_refs.push(thumbnail.clone());
        }

        // Screenshot rows go with the parent via FK cascade.
        Entity::delete_by_id(project_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        discard_blobs(self.files.as_ref(), &blob_refs).await;

        Ok(DeletedProject {
            title: existing.title,
        })
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn tech_list(technologies: &str) -> Vec<String> {
    technologies
        .split(',')
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
        .collect()
}

fn model_to_result(model: projects::Model, shots: Vec<screenshots::Model>) -> ProjectResult {
    ProjectResult {
        id: model.id,
        technologies_list: tech_list(&model.technologies),
        title: model.title,
        slug: model.slug,
        project_name: model.project_name,
        description: model.description,
        documentation: model.documentation,
        category_id: model.category_id,
        technologies: model.technologies,
        github_url: model.github_url,
        live_url: model.live_url,
        demo_url: model.demo_url,
        other_url: model.other_url,
        thumbnail: model.thumbnail,
        start_date: model.start_date,
        end_date: model.end_date,
        client: model.client,
        status: model.status,
        is_active: model.is_active,
        is_featured: model.is_featured,
        is_draft: model.is_draft,
        views: model.views,
        likes: model.likes,
        order: model.order,
        screenshots: shots
            .into_iter()
            .map(|s| ScreenshotResult {
                id: s.id,
                image: s.image,
                caption: s.caption,
                order: s.order,
                uploaded_at: s.uploaded_at.into(),
            })
            .collect(),
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_slug_error(e: DbErr) -> ProjectRepositoryError {
    let msg = e.to_string().to_lowercase();

    if (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && msg.contains("slug")
    {
        ProjectRepositoryError::SlugAlreadyExists
    } else {
        ProjectRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> ProjectRepositoryError {
    ProjectRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    use crate::shared::storage::test_support::{NoopFileStore, RecordingFileStore};

    fn project_fields() -> ProjectFields {
        ProjectFields {
            title: "Portfolio Site".to_string(),
            project_name: None,
            description: "A personal portfolio site.".to_string(),
            documentation: None,
            category_id: None,
            technologies: "Rust, Actix, PostgreSQL".to_string(),
            github_url: Some("https://github.com/x/portfolio".to_string()),
            live_url: None,
            demo_url: None,
            other_url: None,
            thumbnail: None,
            start_date: None,
            end_date: None,
            client: None,
            status: ProjectStatus::Active,
            is_active: true,
            is_featured: false,
            is_draft: false,
            order: 0,
        }
    }

    fn project_model(id: Uuid, title: &str, slug: &str) -> projects::Model {
        let now = Utc::now().fixed_offset();
        projects::Model {
            id,
            title: title.to_string(),
            slug: slug.to_string(),
            project_name: None,
            description: "A personal portfolio site.".to_string(),
            documentation: None,
            category_id: None,
            technologies: "Rust, Actix, PostgreSQL".to_string(),
            github_url: Some("https://github.com/x/portfolio".to_string()),
            live_url: None,
            demo_url: None,
            other_url: None,
            thumbnail: None,
            start_date: None,
            end_date: None,
            client: None,
            status: ProjectStatus::Active,
            is_active: true,
            is_featured: false,
            is_draft: false,
            views: 0,
            likes: 0,
            order: 0,
            created_at: now,
            updated_at: now,
        }
    }

    fn screenshot_model(project_id: Uuid, image: &str, order: i32) -> screenshots::Model {
        screenshots::Model {
            id: Uuid::new_v4(),
            project_id,
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
    async fn create_persists_project_and_ordered_screenshots() {
        let id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![
                // slug probe free
                Vec::<projects::Model>::new(),
                // insert returning
                vec![project_model(id, "Portfolio Site", "portfolio-site")],
            ])
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 2,
            }])
            .append_query_results(vec![vec![
                screenshot_model(id, "home.png", 0),
                screenshot_model(id, "about.png", 1),
            ]])
            .into_connection();

        let repo = ProjectRepositoryPostgres::new(Arc::new(db), Arc::new(NoopFileStore));
        let result = repo
            .create(project_fields(), uploads(&["home.png", "about.png"]))
            .await
            .unwrap();

        assert_eq!(result.slug, "portfolio-site");
        assert_eq!(result.screenshots.len(), 2);
        assert_eq!(result.screenshots[0].image, "home.png");
        assert_eq!(result.screenshots[0].order, 0);
        assert_eq!(result.screenshots[1].order, 1);
        assert_eq!(
            result.technologies_list,
            vec!["Rust", "Actix", "PostgreSQL"]
        );
    }

    #[tokio::test]
    async fn create_suffixes_slug_when_title_collides() {
        let id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![
                // "portfolio-site" taken
                vec![project_model(Uuid::new_v4(), "Portfolio Site", "portfolio-site")],
                // "portfolio-site-1" free
                Vec::<projects::Model>::new(),
                // insert returning
                vec![project_model(id, "Portfolio Site", "portfolio-site-1")],
            ])
            .append_query_results(vec![Vec::<screenshots::Model>::new()])
            .into_connection();

        let repo = ProjectRepositoryPostgres::new(Arc::new(db), Arc::new(NoopFileStore));
        let result = repo.create(project_fields(), vec![]).await.unwrap();

        assert_eq!(result.slug, "portfolio-site-1");
    }

    #[tokio::test]
    async fn update_without_files_leaves_screenshots_untouched() {
        let id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![
                // find existing
                vec![project_model(id, "Portfolio Site", "portfolio-site")],
                // update returning
                vec![project_model(id, "New Title", "portfolio-site")],
            ])
            .append_query_results(vec![vec![screenshot_model(id, "kept.png", 0)]])
            .into_connection();

        let files = Arc::new(RecordingFileStore::default());
        let repo = ProjectRepositoryPostgres::new(Arc::new(db), files.clone());

        let mut fields = project_fields();
        fields.title = "New Title".to_string();

        let result = repo.update(id, fields, None).await.unwrap();

        assert_eq!(result.title, "New Title");
        assert_eq!(result.screenshots[0].image, "kept.png");
        // Nothing replaced, nothing cleaned up.
        assert!(files.removed_paths().is_empty());
    }

    #[tokio::test]
    async fn update_with_files_replaces_set_and_discards_old_blobs() {
        let id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![
                // find existing
                vec![project_model(id, "Portfolio Site", "portfolio-site")],
                // update returning
                vec![project_model(id, "Portfolio Site", "portfolio-site")],
            ])
            .append_query_results(vec![
                // old screenshots fetched by the replace
                vec![
                    screenshot_model(id, "old1.png", 0),
                    screenshot_model(id, "old2.png", 1),
                ],
            ])
            .append_exec_results(vec![
                // delete old rows
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 2,
                },
                // insert new rows
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
            ])
            .append_query_results(vec![vec![screenshot_model(id, "new.png", 0)]])
            .into_connection();

        let files = Arc::new(RecordingFileStore::default());
        let repo = ProjectRepositoryPostgres::new(Arc::new(db), files.clone());

        let result = repo
            .update(id, project_fields(), Some(uploads(&["new.png"])))
            .await
            .unwrap();

        assert_eq!(result.screenshots.len(), 1);
        assert_eq!(result.screenshots[0].image, "new.png");
        assert_eq!(
            files.removed_paths(),
            vec!["old1.png".to_string(), "old2.png".to_string()]
        );
    }

    #[tokio::test]
    async fn update_missing_project_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<projects::Model>::new()])
            .into_connection();

        let repo = ProjectRepositoryPostgres::new(Arc::new(db), Arc::new(NoopFileStore));
        let result = repo.update(Uuid::new_v4(), project_fields(), None).await;

        assert!(matches!(
            result.unwrap_err(),
            ProjectRepositoryError::NotFound
        ));
    }

    #[tokio::test]
    async fn delete_reports_title_and_discards_blobs() {
        let id = Uuid::new_v4();

        let mut model = project_model(id, "Portfolio Site", "portfolio-site");
        model.thumbnail = Some("thumb.png".to_string());

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model]])
            .append_query_results(vec![vec![screenshot_model(id, "home.png", 0)]])
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let files = Arc::new(RecordingFileStore::default());
        let repo = ProjectRepositoryPostgres::new(Arc::new(db), files.clone());

        let deleted = repo.delete(id).await.unwrap();

        assert_eq!(deleted.title, "Portfolio Site");
        assert_eq!(
            files.removed_paths(),
            vec!["home.png".to_string(), "thumb.png".to_string()]
        );
    }

    #[tokio::test]
    async fn set_active_unknown_id_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = ProjectRepositoryPostgres::new(Arc::new(db), Arc::new(NoopFileStore));
        let result = repo.set_active(Uuid::new_v4(), false).await;

        assert!(matches!(
            result.unwrap_err(),
            ProjectRepositoryError::NotFound
        ));
    }
}
