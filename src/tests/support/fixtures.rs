// src/tests/support/fixtures.rs
//
// Shared sample DTOs for handler tests.

use chrono::{NaiveDate, Utc};
use sea_orm::ActiveEnum;
use uuid::Uuid;

use crate::modules::achievement::ports::AchievementResult;
use crate::modules::achievement::sea_orm_entity::{AchievementCategory, CredentialType};
use crate::modules::category::sea_orm_entity::CategoryType;
use crate::modules::experience::ports::ExperienceResult;
use crate::modules::experience::sea_orm_entity::experiences::{EmploymentStatus, EmploymentType};
use crate::modules::notification::ports::NotificationResult;
use crate::modules::notification::sea_orm_entity::NotificationType;
use crate::modules::profile::ports::ProfileResult;
use crate::modules::profile::sea_orm_entity::{AvailabilityStatus, WorkType};
use crate::modules::project::ports::ProjectResult;
use crate::modules::project::sea_orm_entity::projects::ProjectStatus;
use crate::modules::public_api::schemas::{
    PublicAchievement, PublicCategory, PublicExperience, PublicProject, PublicScreenshot,
    PublicSkill,
};
use crate::modules::skill::ports::SkillResult;
use crate::modules::skill::sea_orm_entity::{IconType, SkillLevel};

pub fn sample_project_result() -> ProjectResult {
    ProjectResult {
        id: Uuid::new_v4(),
        title: "Portfolio Site".to_string(),
        slug: "portfolio-site".to_string(),
        project_name: None,
        description: "A personal portfolio site.".to_string(),
        documentation: None,
        category_id: None,
        technologies: "Rust, Actix".to_string(),
        technologies_list: vec!["Rust".to_string(), "Actix".to_string()],
        github_url: None,
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
        screenshots: vec![],
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn sample_experience_result() -> ExperienceResult {
    ExperienceResult {
        id: Uuid::new_v4(),
        position: "Backend Engineer".to_string(),
        slug: "backend-engineer".to_string(),
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
        images: vec![],
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn sample_skill_result() -> SkillResult {
    SkillResult {
        id: Uuid::new_v4(),
        name: "Rust".to_string(),
        slug: "rust".to_string(),
        category_id: None,
        description: None,
        skill_level: SkillLevel::Advanced,
        skill_level_display: "Advanced".to_string(),
        proficiency: 85,
        years_of_experience: 4,
        icon_type: IconType::Fontawesome,
        icon_class: Some("fab fa-rust".to_string()),
        icon_image: None,
        certificate_type: crate::modules::skill::sea_orm_entity::CertificateType::Link,
        certificate_file: None,
        certificate_url: None,
        is_active: true,
        is_draft: false,
        order: 0,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn sample_achievement_result() -> AchievementResult {
    AchievementResult {
        id: Uuid::new_v4(),
        title: "AWS Certified".to_string(),
        slug: "aws-certified".to_string(),
        category: AchievementCategory::Certification,
        description: None,
        issuing_organization: "Amazon Web Services".to_string(),
        achievement_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        expiration_date: None,
        no_expiration: true,
        icon_type: IconType::Fontawesome,
        icon_class: Some("fab fa-aws".to_string()),
        icon_image: None,
        credential_type: CredentialType::Link,
        credential_file: None,
        credential_url: None,
        is_active: true,
        is_draft: false,
        order: 0,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn sample_profile_result() -> ProfileResult {
    ProfileResult {
        id: Uuid::new_v4(),
        full_name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        phone: None,
        location: None,
        title: "Software Engineer".to_string(),
        bio: None,
        profile_image: None,
        github: None,
        linkedin: None,
        twitter: None,
        instagram: None,
        youtube: None,
        website: None,
        contact_email: None,
        contact_phone: None,
        address: None,
        city: None,
        state: None,
        country: None,
        resume: None,
        cover_letter: None,
        video_resume: None,
        meta_title: None,
        meta_description: None,
        meta_keywords: None,
        status: AvailabilityStatus::Available,
        work_type: WorkType::Remote,
        hourly_rate: None,
        experience_years: 7,
        open_to_opportunities: true,
        available_for_freelance: true,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn sample_notification_result() -> NotificationResult {
    NotificationResult {
        id: Uuid::new_v4(),
        title: "Deploy finished".to_string(),
        message: "The site is live.".to_string(),
        notification_type: NotificationType::Success,
        link: None,
        link_text: None,
        is_read: false,
        is_active: true,
        created_at: Utc::now(),
    }
}

pub fn sample_public_category() -> PublicCategory {
    PublicCategory {
        id: Uuid::new_v4(),
        name: "Web Dev".to_string(),
        slug: "web-dev".to_string(),
        category_type: CategoryType::Project.to_value(),
        category_type_display: "Project".to_string(),
        description: None,
        icon: "fas fa-folder".to_string(),
        color: "#3b82f6".to_string(),
        item_count: 1,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn sample_public_project() -> PublicProject {
    PublicProject {
        id: Uuid::new_v4(),
        title: "Portfolio Site".to_string(),
        slug: "portfolio-site".to_string(),
        project_name: None,
        description: "A personal portfolio site.".to_string(),
        category: Some(sample_public_category()),
        technologies: "Rust, Actix".to_string(),
        technologies_list: vec!["Rust".to_string(), "Actix".to_string()],
        thumbnail: None,
        github_url: None,
        live_url: None,
        demo_url: None,
        other_url: None,
        status: "active".to_string(),
        is_featured: false,
        order: 0,
        screenshots: vec![],
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn sample_public_experience() -> PublicExperience {
    PublicExperience {
        id: Uuid::new_v4(),
        position: "Backend Engineer".to_string(),
        slug: "backend-engineer".to_string(),
        company_name: "ACME".to_string(),
        company_logo: None,
        location: None,
        employment_type: "full-time".to_string(),
        employment_status: "past".to_string(),
        start_date: NaiveDate::from_ymd_opt(2022, 5, 1).unwrap(),
        end_date: Some(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()),
        currently_working: false,
        duration: "May 2022 - Jan 2024".to_string(),
        short_description: "Built services.".to_string(),
        detailed_description: "Built and ran backend services.".to_string(),
        images: vec![PublicScreenshot {
            id: Uuid::new_v4(),
            image: "office.png".to_string(),
            caption: String::new(),
            order: 0,
            uploaded_at: Utc::now(),
        }],
        order: 0,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn sample_public_skill() -> PublicSkill {
    PublicSkill {
        id: Uuid::new_v4(),
        name: "Rust".to_string(),
        slug: "rust".to_string(),
        category: None,
        description: None,
        skill_level: "advanced".to_string(),
        skill_level_display: "Advanced".to_string(),
        proficiency: 85,
        years_of_experience: 4,
        icon_type: "fontawesome".to_string(),
        icon_class: Some("fab fa-rust".to_string()),
        icon_image: None,
        order: 0,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn sample_public_achievement() -> PublicAchievement {
    PublicAchievement {
        id: Uuid::new_v4(),
        title: "AWS Certified".to_string(),
        slug: "aws-certified".to_string(),
        category: "certification".to_string(),
        description: None,
        issuing_organization: "Amazon Web Services".to_string(),
        achievement_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        expiration_date: None,
        no_expiration: true,
        icon_type: "fontawesome".to_string(),
        icon_class: Some("fab fa-aws".to_string()),
        icon_image: None,
        credential_type: "link".to_string(),
        credential_url: None,
        order: 0,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}
