// src/modules/skill/form.rs

use serde::Deserialize;
use uuid::Uuid;

use super::ports::SkillFields;
use super::sea_orm_entity::{CertificateType, IconType, SkillLevel};
use crate::shared::validation::{bounded_i32, optional, optional_url, require, FieldErrors};

#[derive(Debug, Clone, Deserialize)]
pub struct SkillForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category_id: Option<Uuid>,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_level")]
    pub skill_level: SkillLevel,
    pub proficiency: Option<i32>,
    #[serde(default)]
    pub years_of_experience: Option<i32>,
    #[serde(default = "default_icon_type")]
    pub icon_type: IconType,
    #[serde(default)]
    pub icon_class: String,
    #[serde(default)]
    pub icon_image: Option<String>,
    #[serde(default = "default_certificate_type")]
    pub certificate_type: CertificateType,
    #[serde(default)]
    pub certificate_file: Option<String>,
    #[serde(default)]
    pub certificate_url: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_draft: bool,
    #[serde(default)]
    pub order: Option<i32>,
}

fn default_level() -> SkillLevel {
    SkillLevel::Beginner
}

fn default_icon_type() -> IconType {
    IconType::Fontawesome
}

fn default_certificate_type() -> CertificateType {
    CertificateType::Link
}

fn default_true() -> bool {
    true
}

impl SkillForm {
    pub fn validate(self) -> Result<SkillFields, FieldErrors> {
        let mut errors = FieldErrors::default();

        let name = require(&mut errors, "name", &self.name);

        // Proficiency is a percentage and is clamped hard at the boundary.
        let proficiency = match self.proficiency {
            Some(value) => bounded_i32(&mut errors, "proficiency", value, 0, 100).unwrap_or(0),
            None => {
                errors.add("proficiency", "This field is required.");
                0
            }
        };

        let years_of_experience = self
            .years_of_experience
            .map(|y| bounded_i32(&mut errors, "years_of_experience", y, 0, 100))
            .unwrap_or(Some(0))
            .unwrap_or(0);

        let certificate_url = optional_url(&mut errors, "certificate_url", &self.certificate_url);

        let order = self
            .order
            .map(|o| bounded_i32(&mut errors, "order", o, 0, i32::MAX))
            .unwrap_or(Some(0))
            .unwrap_or(0);

        errors.into_result(SkillFields {
            name,
            category_id: self.category_id,
            description: optional(&self.description),
            skill_level: self.skill_level,
            proficiency,
            years_of_experience,
            icon_type: self.icon_type,
            icon_class: optional(&self.icon_class),
            icon_image: self.icon_image.as_deref().and_then(optional),
            certificate_type: self.certificate_type,
            certificate_file: self.certificate_file.as_deref().and_then(optional),
            certificate_url,
            is_active: self.is_active,
            is_draft: self.is_draft,
            order,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_form() -> SkillForm {
        SkillForm {
            name: "Rust".to_string(),
            category_id: None,
            description: String::new(),
            skill_level: SkillLevel::Advanced,
            proficiency: Some(85),
            years_of_experience: Some(4),
            icon_type: IconType::Fontawesome,
            icon_class: "fab fa-rust".to_string(),
            icon_image: None,
            certificate_type: CertificateType::Link,
            certificate_file: None,
            certificate_url: String::new(),
            is_active: true,
            is_draft: false,
            order: None,
        }
    }

    #[test]
    fn valid_form_passes() {
        let fields = base_form().validate().unwrap();
        assert_eq!(fields.proficiency, 85);
        assert_eq!(fields.icon_class, Some("fab fa-rust".to_string()));
    }

    #[test]
    fn proficiency_above_100_is_rejected() {
        let mut form = base_form();
        form.proficiency = Some(101);

        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.messages("proficiency"),
            &["Ensure this value is between 0 and 100.".to_string()]
        );
    }

    #[test]
    fn negative_proficiency_is_rejected() {
        let mut form = base_form();
        form.proficiency = Some(-1);

        assert!(form.validate().is_err());
    }

    #[test]
    fn missing_proficiency_is_required() {
        let mut form = base_form();
        form.proficiency = None;

        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.messages("proficiency"),
            &["This field is required.".to_string()]
        );
    }

    #[test]
    fn certificate_url_must_be_absolute() {
        let mut form = base_form();
        form.certificate_url = "certificates/rust.pdf".to_string();

        let errors = form.validate().unwrap_err();
        assert!(!errors.messages("certificate_url").is_empty());
    }
}
