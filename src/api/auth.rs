//! Auth & Account Endpoints
//!
//! Login plus the user-management CRUD surface. The login endpoint answers
//! with `{success, user, message}` rather than the standard `data` envelope.

use serde::{Deserialize, Serialize};

use super::{fetch_value, get_data, mutate, ApiError, ApiResult, Rejection};
use crate::config::AppConfig;
use crate::models::User;

#[derive(Debug, Clone, Deserialize)]
struct LoginEnvelope {
    success: bool,
    #[serde(default)]
    user: Option<User>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
struct LoginPayload<'a> {
    username: &'a str,
    password: &'a str,
}

pub async fn login(config: &AppConfig, username: &str, password: &str) -> ApiResult<User> {
    let body = serde_json::to_string(&LoginPayload { username, password })
        .map_err(|err| ApiError::Network(format!("request encoding failed: {err}")))?;
    let envelope: LoginEnvelope = fetch_value(config, "POST", "/api/auth/login", Some(body)).await?;
    if envelope.success {
        envelope.user.ok_or(ApiError::NonJson)
    } else {
        Err(ApiError::Rejected(Rejection {
            message: envelope.message,
            ..Rejection::default()
        }))
    }
}

/// Writable fields for creating an account
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUserPayload<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub role: &'a str,
    pub full_name: &'a str,
    pub email: &'a str,
    pub contact_number: &'a str,
    pub student_id: &'a str,
}

pub async fn list_users(config: &AppConfig) -> ApiResult<Vec<User>> {
    get_data(config, "/api/auth/users").await
}

pub async fn create_user(config: &AppConfig, payload: &NewUserPayload<'_>) -> ApiResult<()> {
    mutate(config, "POST", "/api/auth/users", Some(payload)).await
}

pub async fn delete_user(config: &AppConfig, id: &str) -> ApiResult<()> {
    mutate::<()>(config, "DELETE", &format!("/api/auth/users/{id}"), None).await
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusPayload {
    is_active: bool,
}

pub async fn set_user_status(config: &AppConfig, id: &str, is_active: bool) -> ApiResult<()> {
    mutate(
        config,
        "PATCH",
        &format!("/api/auth/users/{id}/status"),
        Some(&StatusPayload { is_active }),
    )
    .await
}
