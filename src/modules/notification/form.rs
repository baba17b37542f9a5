// src/modules/notification/form.rs

use serde::Deserialize;
use uuid::Uuid;

use super::ports::NotificationFields;
use super::sea_orm_entity::NotificationType;
use crate::shared::validation::{optional, optional_url, require, FieldErrors};

#[derive(Debug, Clone, Deserialize)]
pub struct NotificationForm {
    /// Present when editing an existing notification.
    #[serde(default)]
    pub notification_id: Option<Uuid>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub message: String,
    #[serde(default = "default_type")]
    pub notification_type: NotificationType,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub link_text: String,
}

fn default_type() -> NotificationType {
    NotificationType::Info
}

impl NotificationForm {
    pub fn validate(self) -> Result<(Option<Uuid>, NotificationFields), FieldErrors> {
        let mut errors = FieldErrors::default();

        let title = require(&mut errors, "title", &self.title);
        let message = require(&mut errors, "message", &self.message);
        let link = optional_url(&mut errors, "link", &self.link);

        errors.into_result((
            self.notification_id,
            NotificationFields {
                title,
                message,
                notification_type: self.notification_type,
                link,
                link_text: optional(&self.link_text),
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_and_message_are_required() {
        let form = NotificationForm {
            notification_id: None,
            title: String::new(),
            message: "  ".to_string(),
            notification_type: NotificationType::Info,
            link: String::new(),
            link_text: String::new(),
        };

        let errors = form.validate().unwrap_err();
        assert!(!errors.messages("title").is_empty());
        assert!(!errors.messages("message").is_empty());
    }

    #[test]
    fn link_must_be_absolute_when_present() {
        let form = NotificationForm {
            notification_id: None,
            title: "Deploy finished".to_string(),
            message: "The site is live.".to_string(),
            notification_type: NotificationType::Success,
            link: "/projects/".to_string(),
            link_text: "View".to_string(),
        };

        let errors = form.validate().unwrap_err();
        assert!(!errors.messages("link").is_empty());
    }
}
