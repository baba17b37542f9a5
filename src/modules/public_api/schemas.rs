// src/modules/public_api/schemas.rs
//
// Wire representations for the read-only API. Enum fields are serialized as
// their stored string values so external consumers never see Rust variant
// names.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PublicCategory {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub category_type: String,
    pub category_type_display: String,
    pub description: Option<String>,
    pub icon: String,
    pub color: String,
    pub item_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PublicScreenshot {
    pub id: Uuid,
    pub image: String,
    pub caption: String,
    pub order: i32,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PublicProject {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub project_name: Option<String>,
    pub description: String,
    pub category: Option<PublicCategory>,
    pub technologies: String,
    pub technologies_list: Vec<String>,
    pub thumbnail: Option<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub demo_url: Option<String>,
    pub other_url: Option<String>,
    pub status: String,
    pub is_featured: bool,
    pub order: i32,
    pub screenshots: Vec<PublicScreenshot>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PublicExperience {
    pub id: Uuid,
    pub position: String,
    pub slug: String,
    pub company_name: String,
    pub company_logo: Option<String>,
    pub location: Option<String>,
    pub employment_type: String,
    pub employment_status: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub currently_working: bool,
    /// Human-readable range, e.g. "May 2022 - Jan 2024" or "May 2022 - Present".
    pub duration: String,
    pub short_description: String,
    pub detailed_description: String,
    pub images: Vec<PublicScreenshot>,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PublicSkill {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub category: Option<PublicCategory>,
    pub description: Option<String>,
    pub skill_level: String,
    pub skill_level_display: String,
    pub proficiency: i32,
    pub years_of_experience: i32,
    pub icon_type: String,
    pub icon_class: Option<String>,
    pub icon_image: Option<String>,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PublicAchievement {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub category: String,
    pub description: Option<String>,
    pub issuing_organization: String,
    pub achievement_date: NaiveDate,
    pub expiration_date: Option<NaiveDate>,
    pub no_expiration: bool,
    pub icon_type: String,
    pub icon_class: Option<String>,
    pub icon_image: Option<String>,
    pub credential_type: String,
    pub credential_url: Option<String>,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct PortfolioSummary {
    pub total_projects: u64,
    pub total_experience: u64,
    pub total_skills: u64,
    pub total_achievements: u64,
    pub active_projects: u64,
    pub active_experience: u64,
    pub active_skills: u64,
    pub active_achievements: u64,
    pub years_of_experience: i32,
}

/// "May 2022 - Jan 2024", with an open end rendered as "Present".
pub fn duration_label(start: NaiveDate, end: Option<NaiveDate>, currently_working: bool) -> String {
    let start_label = start.format("%b %Y").to_string();
    let end_label = match end {
        Some(end) if !currently_working => end.format("%b %Y").to_string(),
        _ => "Present".to_string(),
    };
    format!("{start_label} - {end_label}")
}
