//! Announcement Endpoints

use serde::Serialize;

use super::{get_data, mutate, ApiResult};
use crate::config::AppConfig;
use crate::models::Announcement;

/// Writable fields of an announcement
#[derive(Debug, Clone, Serialize)]
pub struct AnnouncementPayload<'a> {
    pub title: &'a str,
    pub description: &'a str,
}

pub async fn list_announcements(config: &AppConfig) -> ApiResult<Vec<Announcement>> {
    get_data(config, "/api/announcement").await
}

pub async fn create_announcement(
    config: &AppConfig,
    payload: &AnnouncementPayload<'_>,
) -> ApiResult<()> {
    mutate(config, "POST", "/api/announcement", Some(payload)).await
}

pub async fn update_announcement(
    config: &AppConfig,
    id: &str,
    payload: &AnnouncementPayload<'_>,
) -> ApiResult<()> {
    mutate(
        config,
        "PUT",
        &format!("/api/announcement/{id}"),
        Some(payload),
    )
    .await
}

pub async fn delete_announcement(config: &AppConfig, id: &str) -> ApiResult<()> {
    mutate::<()>(config, "DELETE", &format!("/api/announcement/{id}"), None).await
}
