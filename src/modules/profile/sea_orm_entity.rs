use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "kebab-case")]
pub enum AvailabilityStatus {
    #[sea_orm(string_value = "available")]
    Available,
    #[sea_orm(string_value = "busy")]
    Busy,
    #[sea_orm(string_value = "not-looking")]
    NotLooking,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "lowercase")]
pub enum WorkType {
    #[sea_orm(string_value = "remote")]
    Remote,
    #[sea_orm(string_value = "hybrid")]
    Hybrid,
    #[sea_orm(string_value = "onsite")]
    Onsite,
    #[sea_orm(string_value = "flexible")]
    Flexible,
}

/// Singleton table: the dashboard lazily creates the first row with
/// placeholder values and every access goes through the earliest row.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user_profiles")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    // Personal information
    #[sea_orm(column_type = "Text")]
    pub full_name: String,

    #[sea_orm(column_type = "Text")]
    pub email: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub phone: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub location: Option<String>,

    // Professional title.
    #[sea_orm(column_type = "Text")]
    pub title: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub bio: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub profile_image: Option<String>,

    // Social links
    #[sea_orm(column_type = "Text", nullable)]
    pub github: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub linkedin: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub twitter: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub instagram: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub youtube: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub website: Option<String>,

    // Contact information
    #[sea_orm(column_type = "Text", nullable)]
    pub contact_email: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub contact_phone: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub address: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub city: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub state: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub country: Option<String>,

    // Documents
    #[sea_orm(column_type = "Text", nullable)]
    pub resume: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub cover_letter: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub video_resume: Option<String>,

    // SEO metadata
    #[sea_orm(column_type = "Text", nullable)]
    pub meta_title: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub meta_description: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub meta_keywords: Option<String>,

    // Availability & preferences
    pub status: AvailabilityStatus,
    pub work_type: WorkType,

    #[sea_orm(column_type = "Decimal(Some((10, 2)))", nullable)]
    pub hourly_rate: Option<Decimal>,

    pub experience_years: i32,
    pub open_to_opportunities: bool,
    pub available_for_freelance: bool,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
