// src/modules/achievement/form.rs

use serde::Deserialize;

use super::ports::AchievementFields;
use super::sea_orm_entity::{AchievementCategory, CredentialType};
use crate::modules::skill::sea_orm_entity::IconType;
use crate::shared::slug::slugify;
use crate::shared::validation::{
    bounded_i32, optional, optional_date, optional_url, require, required_date, FieldErrors,
};

#[derive(Debug, Clone, Deserialize)]
pub struct AchievementForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default = "default_category")]
    pub category: AchievementCategory,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub issuing_organization: String,
    #[serde(default)]
    pub achievement_date: String,
    #[serde(default)]
    pub expiration_date: String,
    #[serde(default)]
    pub no_expiration: bool,
    #[serde(default = "default_icon_type")]
    pub icon_type: IconType,
    #[serde(default)]
    pub icon_class: String,
    #[serde(default)]
    pub icon_image: Option<String>,
    #[serde(default = "default_credential_type")]
    pub credential_type: CredentialType,
    #[serde(default)]
    pub credential_file: Option<String>,
    #[serde(default)]
    pub credential_url: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_draft: bool,
    #[serde(default)]
    pub order: Option<i32>,
}

fn default_category() -> AchievementCategory {
    AchievementCategory::Other
}

fn default_icon_type() -> IconType {
    IconType::Fontawesome
}

fn default_credential_type() -> CredentialType {
    CredentialType::Link
}

fn default_true() -> bool {
    true
}

impl AchievementForm {
    pub fn validate(self) -> Result<AchievementFields, FieldErrors> {
        let mut errors = FieldErrors::default();

        let title = require(&mut errors, "title", &self.title);
        let issuing_organization =
            require(&mut errors, "issuing_organization", &self.issuing_organization);

        let slug = match optional(&self.slug) {
            Some(explicit) => {
                let normalized = explicit.to_lowercase();
                if slugify(&normalized) != normalized {
                    errors.add(
                        "slug",
                        "Enter a valid slug consisting of letters, numbers and hyphens.",
                    );
                }
                Some(normalized)
            }
            None => None,
        };

        let achievement_date =
            required_date(&mut errors, "achievement_date", &self.achievement_date);
        let expiration_date =
            optional_date(&mut errors, "expiration_date", &self.expiration_date);

        // A credential that never expires carries no expiration date.
        let expiration_date = if self.no_expiration {
            None
        } else {
            expiration_date
        };

        let credential_url = optional_url(&mut errors, "credential_url", &self.credential_url);

        let order = self
            .order
            .map(|o| bounded_i32(&mut errors, "order", o, 0, i32::MAX))
            .unwrap_or(Some(0))
            .unwrap_or(0);

        let achievement_date = match achievement_date {
            Some(date) => date,
            None => return Err(errors),
        };

        errors.into_result(AchievementFields {
            title,
            slug,
            category: self.category,
            description: optional(&self.description),
            issuing_organization,
            achievement_date,
            expiration_date,
            no_expiration: self.no_expiration,
            icon_type: self.icon_type,
            icon_class: optional(&self.icon_class),
            icon_image: self.icon_image.as_deref().and_then(optional),
            credential_type: self.credential_type,
            credential_file: self.credential_file.as_deref().and_then(optional),
            credential_url,
            is_active: self.is_active,
            is_draft: self.is_draft,
            order,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn base_form() -> AchievementForm {
        AchievementForm {
            title: "AWS Certified".to_string(),
            slug: String::new(),
            category: AchievementCategory::Certification,
            description: String::new(),
            issuing_organization: "Amazon Web Services".to_string(),
            achievement_date: "2024-01-15".to_string(),
            expiration_date: "2027-01-15".to_string(),
            no_expiration: false,
            icon_type: IconType::Fontawesome,
            icon_class: "fab fa-aws".to_string(),
            icon_image: None,
            credential_type: CredentialType::Link,
            credential_file: None,
            credential_url: String::new(),
            is_active: true,
            is_draft: false,
            order: None,
        }
    }

    #[test]
    fn valid_form_keeps_expiration_date() {
        let fields = base_form().validate().unwrap();
        assert_eq!(
            fields.expiration_date,
            Some(NaiveDate::from_ymd_opt(2027, 1, 15).unwrap())
        );
        assert_eq!(fields.slug, None);
    }

    #[test]
    fn no_expiration_clears_expiration_date() {
        let mut form = base_form();
        form.no_expiration = true;

        let fields = form.validate().unwrap();
        assert_eq!(fields.expiration_date, None);
    }

    #[test]
    fn achievement_date_is_required() {
        let mut form = base_form();
        form.achievement_date = String::new();

        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.messages("achievement_date"),
            &["This field is required.".to_string()]
        );
    }

    #[test]
    fn issuing_organization_is_required() {
        let mut form = base_form();
        form.issuing_organization = "  ".to_string();

        assert!(form.validate().is_err());
    }
}
