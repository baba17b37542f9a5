// src/modules/public_api/query_postgres.rs

use async_trait::async_trait;
use sea_orm::{
    ActiveEnum, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use super::ports::{PublicPortfolioQuery, PublicProjectFilter, PublicQueryError};
use super::schemas::{
    duration_label, PortfolioSummary, PublicAchievement, PublicCategory, PublicExperience,
    PublicProject, PublicScreenshot, PublicSkill,
};
use crate::modules::achievement::sea_orm_entity::{self as achievements, AchievementCategory};
use crate::modules::category::sea_orm_entity::{self as categories, CategoryType};
use crate::modules::experience::sea_orm_entity::experience_images;
use crate::modules::experience::sea_orm_entity::experiences;
use crate::modules::profile::ports::ProfileResult;
use crate::modules::profile::sea_orm_entity as profiles;
use crate::modules::project::sea_orm_entity::project_screenshots;
use crate::modules::project::sea_orm_entity::projects::{self, ProjectStatus};
use crate::modules::skill::sea_orm_entity as skills;

const FEATURED_CAP: u64 = 6;
const TOP_SKILLS_CAP: u64 = 10;

// ============================================================================
// Query Implementation
// ============================================================================

#[derive(Clone)]
pub struct PublicPortfolioQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PublicPortfolioQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Resolve a category slug to its id; `Ok(None)` when it does not exist
    /// (the caller then returns an empty listing rather than an error).
    async fn category_id_by_slug(&self, slug: &str) -> Result<Option<Uuid>, PublicQueryError> {
        let category = categories::Entity::find()
            .filter(categories::Column::Slug.eq(slug.trim().to_lowercase()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(category.map(|c| c.id))
    }

    async fn category_item_count(
        &self,
        model: &categories::Model,
    ) -> Result<u64, PublicQueryError> {
        match model.category_type {
            CategoryType::Project => projects::Entity::find()
                .filter(projects::Column::CategoryId.eq(model.id))
                .count(&*self.db)
                .await
                .map_err(map_db_err),
            CategoryType::Skill => skills::Entity::find()
                .filter(skills::Column::CategoryId.eq(model.id))
                .count(&*self.db)
                .await
                .map_err(map_db_err),
            CategoryType::Achievement | CategoryType::Experience => Ok(0),
        }
    }

    async fn to_public_category(
        &self,
        model: categories::Model,
    ) -> Result<PublicCategory, PublicQueryError> {
        let item_count = self.category_item_count(&model).await?;
        Ok(PublicCategory {
            id: model.id,
            name: model.name,
            slug: model.slug,
            category_type: model.category_type.to_value(),
            category_type_display: model.category_type.display().to_string(),
            description: model.description,
            icon: model.icon,
            color: model.color,
            item_count,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        })
    }

    /// Embedded categories for the distinct ids of a result page.
    async fn category_map(
        &self,
        ids: Vec<Uuid>,
    ) -> Result<HashMap<Uuid, PublicCategory>, PublicQueryError> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let models = categories::Entity::find()
            .filter(categories::Column::Id.is_in(ids))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let mut map = HashMap::with_capacity(models.len());
        for model in models {
            let id = model.id;
            map.insert(id, self.to_public_category(model).await?);
        }
        Ok(map)
    }

    async fn assemble_projects(
        &self,
        models: Vec<projects::Model>,
    ) -> Result<Vec<PublicProject>, PublicQueryError> {
        let ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();

        let mut shots_by_parent: HashMap<Uuid, Vec<project_screenshots::Model>> = HashMap::new();
        if !ids.is_empty() {
            let shots = project_screenshots::Entity::find()
                .filter(project_screenshots::Column::ProjectId.is_in(ids))
                .order_by_asc(project_screenshots::Column::Order)
                .order_by_desc(project_screenshots::Column::UploadedAt)
                .all(&*self.db)
                .await
                .map_err(map_db_err)?;
            for shot in shots {
                shots_by_parent.entry(shot.project_id).or_default().push(shot);
            }
        }

        let category_ids: Vec<Uuid> = {
            let mut ids: Vec<Uuid> = models.iter().filter_map(|m| m.category_id).collect();
            ids.sort_unstable();
            ids.dedup();
            ids
        };
        let category_map = self.category_map(category_ids).await?;

        Ok(models
            .into_iter()
            .map(|m| {
                let screenshots = shots_by_parent
                    .remove(&m.id)
                    .unwrap_or_default()
                    .into_iter()
                    .map(to_public_screenshot)
                    .collect();
                let category = m.category_id.and_then(|id| category_map.get(&id).cloned());
                project_to_public(m, category, screenshots)
            })
            .collect())
    }

    async fn assemble_experience(
        &self,
        models: Vec<experiences::Model>,
    ) -> Result<Vec<PublicExperience>, PublicQueryError> {
        let ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();

        let mut images_by_parent: HashMap<Uuid, Vec<experience_images::Model>> = HashMap::new();
        if !ids.is_empty() {
            let images = experience_images::Entity::find()
                .filter(experience_images::Column::ExperienceId.is_in(ids))
                .order_by_asc(experience_images::Column::Order)
                .order_by_desc(experience_images::Column::UploadedAt)
                .all(&*self.db)
                .await
                .map_err(map_db_err)?;
            for image in images {
                images_by_parent
                    .entry(image.experience_id)
                    .or_default()
                    .push(image);
            }
        }

        Ok(models
            .into_iter()
            .map(|m| {
                let images = images_by_parent
                    .remove(&m.id)
                    .unwrap_or_default()
                    .into_iter()
                    .map(|i| PublicScreenshot {
                        id: i.id,
                        image: i.image,
                        caption: i.caption,
                        order: i.order,
                        uploaded_at: i.uploaded_at.into(),
                    })
                    .collect();
                experience_to_public(m, images)
            })
            .collect())
    }

    async fn assemble_skills(
        &self,
        models: Vec<skills::Model>,
    ) -> Result<Vec<PublicSkill>, PublicQueryError> {
        let category_ids: Vec<Uuid> = {
            let mut ids: Vec<Uuid> = models.iter().filter_map(|m| m.category_id).collect();
            ids.sort_unstable();
            ids.dedup();
            ids
        };
        let category_map = self.category_map(category_ids).await?;

        Ok(models
            .into_iter()
            .map(|m| {
                let category = m.category_id.and_then(|id| category_map.get(&id).cloned());
                skill_to_public(m, category)
            })
            .collect())
    }
}

fn published_projects() -> sea_orm::Select<projects::Entity> {
    projects::Entity::find()
        .filter(projects::Column::IsActive.eq(true))
        .filter(projects::Column::IsDraft.eq(false))
}

#[async_trait]
impl PublicPortfolioQuery for PublicPortfolioQueryPostgres {
    async fn list_projects(
        &self,
        filter: PublicProjectFilter,
    ) -> Result<Vec<PublicProject>, PublicQueryError> {
        let mut query = published_projects()
            .order_by_desc(projects::Column::Order)
            .order_by_desc(projects::Column::CreatedAt);

        if let Some(slug) = &filter.category {
            match self.category_id_by_slug(slug).await? {
                Some(category_id) => {
                    query = query.filter(projects::Column::CategoryId.eq(category_id));
                }
                None => return Ok(Vec::new()),
            }
        }

        if let Some(status) = &filter.status {
            match ProjectStatus::try_from_value(&status.to_string()) {
                Ok(status) => query = query.filter(projects::Column::Status.eq(status)),
                // A status outside the enum can never match a row.
                Err(_) => return Ok(Vec::new()),
            }
        }

        let models = query.all(&*self.db).await.map_err(map_db_err)?;
        self.assemble_projects(models).await
    }

    async fn project_by_slug(&self, slug: &str) -> Result<PublicProject, PublicQueryError> {
        let model = published_projects()
            .filter(projects::Column::Slug.eq(slug.trim().to_lowercase()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(PublicQueryError::NotFound)?;

        let mut assembled = self.assemble_projects(vec![model]).await?;
        Ok(assembled.remove(0))
    }

    async fn featured_projects(&self) -> Result<Vec<PublicProject>, PublicQueryError> {
        let models = published_projects()
            .filter(projects::Column::IsFeatured.eq(true))
            .order_by_desc(projects::Column::Order)
            .order_by_desc(projects::Column::CreatedAt)
            .limit(FEATURED_CAP)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        self.assemble_projects(models).await
    }

    async fn list_experience(&self) -> Result<Vec<PublicExperience>, PublicQueryError> {
        let models = experiences::Entity::find()
            .filter(experiences::Column::IsActive.eq(true))
            .filter(experiences::Column::IsDraft.eq(false))
            .order_by_desc(experiences::Column::StartDate)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        self.assemble_experience(models).await
    }

    async fn experience_by_id(&self, id: Uuid) -> Result<PublicExperience, PublicQueryError> {
        let model = experiences::Entity::find_by_id(id)
            .filter(experiences::Column::IsActive.eq(true))
            .filter(experiences::Column::IsDraft.eq(false))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(PublicQueryError::NotFound)?;

        let mut assembled = self.assemble_experience(vec![model]).await?;
        Ok(assembled.remove(0))
    }

    async fn list_skills(
        &self,
        category: Option<String>,
    ) -> Result<Vec<PublicSkill>, PublicQueryError> {
        let mut query = skills::Entity::find()
            .filter(skills::Column::IsActive.eq(true))
            .filter(skills::Column::IsDraft.eq(false))
            .order_by_desc(skills::Column::Proficiency)
            .order_by_asc(skills::Column::Name);

        if let Some(slug) = &category {
            match self.category_id_by_slug(slug).await? {
                Some(category_id) => {
                    query = query.filter(skills::Column::CategoryId.eq(category_id));
                }
                None => return Ok(Vec::new()),
            }
        }

        let models = query.all(&*self.db).await.map_err(map_db_err)?;
        self.assemble_skills(models).await
    }

    async fn skill_by_id(&self, id: Uuid) -> Result<PublicSkill, PublicQueryError> {
        let model = skills::Entity::find_by_id(id)
            .filter(skills::Column::IsActive.eq(true))
            .filter(skills::Column::IsDraft.eq(false))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(PublicQueryError::NotFound)?;

        let mut assembled = self.assemble_skills(vec![model]).await?;
        Ok(assembled.remove(0))
    }

    async fn top_skills(&self) -> Result<Vec<PublicSkill>, PublicQueryError> {
        let models = skills::Entity::find()
            .filter(skills::Column::IsActive.eq(true))
            .filter(skills::Column::IsDraft.eq(false))
            .order_by_desc(skills::Column::Proficiency)
            .order_by_asc(skills::Column::Name)
            .limit(TOP_SKILLS_CAP)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        self.assemble_skills(models).await
    }

    async fn list_achievements(
        &self,
        category: Option<String>,
    ) -> Result<Vec<PublicAchievement>, PublicQueryError> {
        let mut query = achievements::Entity::find()
            .filter(achievements::Column::IsActive.eq(true))
            .filter(achievements::Column::IsDraft.eq(false))
            .order_by_desc(achievements::Column::AchievementDate)
            .order_by_asc(achievements::Column::Title);

        if let Some(value) = &category {
            match AchievementCategory::try_from_value(&value.to_string()) {
                Ok(kind) => query = query.filter(achievements::Column::Category.eq(kind)),
                Err(_) => return Ok(Vec::new()),
            }
        }

        let models = query.all(&*self.db).await.map_err(map_db_err)?;
        Ok(models.into_iter().map(achievement_to_public).collect())
    }

    async fn achievement_by_id(&self, id: Uuid) -> Result<PublicAchievement, PublicQueryError> {
        achievements::Entity::find_by_id(id)
            .filter(achievements::Column::IsActive.eq(true))
            .filter(achievements::Column::IsDraft.eq(false))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(achievement_to_public)
            .ok_or(PublicQueryError::NotFound)
    }

    async fn list_categories(
        &self,
        category_type: Option<String>,
    ) -> Result<Vec<PublicCategory>, PublicQueryError> {
        let mut query = categories::Entity::find()
            .order_by_asc(categories::Column::CategoryType)
            .order_by_asc(categories::Column::Name);

        if let Some(value) = &category_type {
            match CategoryType::try_from_value(&value.to_string()) {
                Ok(ty) => query = query.filter(categories::Column::CategoryType.eq(ty)),
                Err(_) => return Ok(Vec::new()),
            }
        }

        let models = query.all(&*self.db).await.map_err(map_db_err)?;

        let mut results = Vec::with_capacity(models.len());
        for model in models {
            results.push(self.to_public_category(model).await?);
        }
        Ok(results)
    }

    async fn category_by_slug(&self, slug: &str) -> Result<PublicCategory, PublicQueryError> {
        let model = categories::Entity::find()
            .filter(categories::Column::Slug.eq(slug.trim().to_lowercase()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(PublicQueryError::NotFound)?;

        self.to_public_category(model).await
    }

    async fn profile(&self) -> Result<Option<ProfileResult>, PublicQueryError> {
        let model = profiles::Entity::find()
            .order_by_asc(profiles::Column::CreatedAt)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(profile_to_result))
    }

    async fn summary(&self) -> Result<PortfolioSummary, PublicQueryError> {
        let total_projects = count(projects::Entity::find(), &self.db).await?;
        let total_experience = count(experiences::Entity::find(), &self.db).await?;
        let total_skills = count(skills::Entity::find(), &self.db).await?;
        let total_achievements = count(achievements::Entity::find(), &self.db).await?;

        let active_projects = count(published_projects(), &self.db).await?;
        let active_experience = count(
            experiences::Entity::find()
                .filter(experiences::Column::IsActive.eq(true))
                .filter(experiences::Column::IsDraft.eq(false)),
            &self.db,
        )
        .await?;
        let active_skills = count(
            skills::Entity::find()
                .filter(skills::Column::IsActive.eq(true))
                .filter(skills::Column::IsDraft.eq(false)),
            &self.db,
        )
        .await?;
        let active_achievements = count(
            achievements::Entity::find()
                .filter(achievements::Column::IsActive.eq(true))
                .filter(achievements::Column::IsDraft.eq(false)),
            &self.db,
        )
        .await?;

        let years_of_experience = self
            .profile()
            .await?
            .map(|p| p.experience_years)
            .unwrap_or(0);

        Ok(PortfolioSummary {
            total_projects,
            total_experience,
            total_skills,
            total_achievements,
            active_projects,
            active_experience,
            active_skills,
            active_achievements,
            years_of_experience,
        })
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

async fn count<E>(
    query: sea_orm::Select<E>,
    db: &DatabaseConnection,
) -> Result<u64, PublicQueryError>
where
    E: EntityTrait,
    E::Model: Send + Sync,
{
    query.count(db).await.map_err(map_db_err)
}

fn to_public_screenshot(model: project_screenshots::Model) -> PublicScreenshot {
    PublicScreenshot {
        id: model.id,
        image: model.image,
        caption: model.caption,
        order: model.order,
        uploaded_at: model.uploaded_at.into(),
    }
}

fn project_to_public(
    model: projects::Model,
    category: Option<PublicCategory>,
    screenshots: Vec<PublicScreenshot>,
) -> PublicProject {
    let technologies_list = model
        .technologies
        .split(',')
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
        .collect();

    PublicProject {
        id: model.id,
        title: model.title,
        slug: model.slug,
        project_name: model.project_name,
        description: model.description,
        category,
        technologies: model.technologies,
        technologies_list,
        thumbnail: model.thumbnail,
        github_url: model.github_url,
        live_url: model.live_url,
        demo_url: model.demo_url,
        other_url: model.other_url,
        status: model.status.to_value(),
        is_featured: model.is_featured,
        order: model.order,
        screenshots,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn experience_to_public(
    model: experiences::Model,
    images: Vec<PublicScreenshot>,
) -> PublicExperience {
    PublicExperience {
        id: model.id,
        duration: duration_label(model.start_date, model.end_date, model.currently_working),
        position: model.position,
        slug: model.slug,
        company_name: model.company_name,
        company_logo: model.company_logo,
        location: model.location,
        employment_type: model.employment_type.to_value(),
        employment_status: model.employment_status.to_value(),
        start_date: model.start_date,
        end_date: model.end_date,
        currently_working: model.currently_working,
        short_description: model.short_description,
        detailed_description: model.detailed_description,
        images,
        order: model.order,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn skill_to_public(model: skills::Model, category: Option<PublicCategory>) -> PublicSkill {
    PublicSkill {
        id: model.id,
        skill_level_display: model.skill_level.display().to_string(),
        name: model.name,
        slug: model.slug,
        category,
        description: model.description,
        skill_level: model.skill_level.to_value(),
        proficiency: model.proficiency,
        years_of_experience: model.years_of_experience,
        icon_type: model.icon_type.to_value(),
        icon_class: model.icon_class,
        icon_image: model.icon_image,
        order: model.order,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn achievement_to_public(model: achievements::Model) -> PublicAchievement {
    PublicAchievement {
        id: model.id,
        title: model.title,
        slug: model.slug,
        category: model.category.to_value(),
        description: model.description,
        issuing_organization: model.issuing_organization,
        achievement_date: model.achievement_date,
        expiration_date: model.expiration_date,
        no_expiration: model.no_expiration,
        icon_type: model.icon_type.to_value(),
        icon_class: model.icon_class,
        icon_image: model.icon_image,
        credential_type: model.credential_type.to_value(),
        credential_url: model.credential_url,
        order: model.order,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn profile_to_result(model: profiles::Model) -> ProfileResult {
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

fn map_db_err(e: DbErr) -> PublicQueryError {
    PublicQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
