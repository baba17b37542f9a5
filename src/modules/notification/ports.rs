// src/modules/notification/ports.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::sea_orm_entity::NotificationType;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct NotificationFields {
    pub title: String,
    pub message: String,
    pub notification_type: NotificationType,
    pub link: Option<String>,
    pub link_text: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NotificationResult {
    pub id: Uuid,
    pub title: String,
    pub message: String,
    pub notification_type: NotificationType,
    pub link: Option<String>,
    pub link_text: Option<String>,
    pub is_read: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// List filters are mutually exclusive: one of read-state or type, never a
/// combination. Unknown values fall back to `All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationFilter {
    #[default]
    All,
    Unread,
    Read,
    Type(NotificationType),
}

impl NotificationFilter {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("unread") => NotificationFilter::Unread,
            Some("read") => NotificationFilter::Read,
            Some("info") => NotificationFilter::Type(NotificationType::Info),
            Some("success") => NotificationFilter::Type(NotificationType::Success),
            Some("warning") => NotificationFilter::Type(NotificationType::Warning),
            Some("error") => NotificationFilter::Type(NotificationType::Error),
            _ => NotificationFilter::All,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationFilter::All => "all",
            NotificationFilter::Unread => "unread",
            NotificationFilter::Read => "read",
            NotificationFilter::Type(NotificationType::Info) => "info",
            NotificationFilter::Type(NotificationType::Success) => "success",
            NotificationFilter::Type(NotificationType::Warning) => "warning",
            NotificationFilter::Type(NotificationType::Error) => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct NotificationCounts {
    pub total: u64,
    pub unread: u64,
    pub read: u64,
    pub info: u64,
    pub success: u64,
    pub warning: u64,
    pub error: u64,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum NotificationRepositoryError {
    #[error("Notification not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Create, or update when an id is supplied.
    async fn save(
        &self,
        notification_id: Option<Uuid>,
        fields: NotificationFields,
    ) -> Result<NotificationResult, NotificationRepositoryError>;

    async fn get(
        &self,
        notification_id: Uuid,
    ) -> Result<NotificationResult, NotificationRepositoryError>;

    /// Active rows only, newest first.
    async fn list(
        &self,
        filter: NotificationFilter,
    ) -> Result<Vec<NotificationResult>, NotificationRepositoryError>;

    async fn counts(&self) -> Result<NotificationCounts, NotificationRepositoryError>;

    async fn delete(&self, notification_id: Uuid) -> Result<(), NotificationRepositoryError>;

    async fn mark_read(&self, notification_id: Uuid) -> Result<(), NotificationRepositoryError>;

    /// Marks every active unread row read; returns how many changed.
    async fn mark_all_read(&self) -> Result<u64, NotificationRepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_parses_read_state_and_type_values() {
        assert_eq!(NotificationFilter::parse(Some("unread")), NotificationFilter::Unread);
        assert_eq!(
            NotificationFilter::parse(Some("warning")),
            NotificationFilter::Type(NotificationType::Warning)
        );
    }

    #[test]
    fn unknown_filter_falls_back_to_all() {
        assert_eq!(NotificationFilter::parse(Some("bogus")), NotificationFilter::All);
        assert_eq!(NotificationFilter::parse(None), NotificationFilter::All);
    }
}
