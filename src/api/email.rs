//! Email Testing Endpoints
//!
//! Unlike the rest of the API, a `success: false` envelope here is a test
//! outcome to display in the result log, not an error to raise. Only
//! transport failures become [`ApiError`](super::ApiError)s.

use serde::{Deserialize, Serialize};

use super::{fetch_value, ApiError, ApiResult};
use crate::config::AppConfig;

/// SMTP settings the server is currently configured with
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailConfig {
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub configured: bool,
}

#[derive(Debug, Clone, Deserialize)]
struct ConfigEnvelope {
    #[serde(default)]
    config: Option<EmailConfig>,
}

pub async fn email_config(config: &AppConfig) -> ApiResult<EmailConfig> {
    let envelope: ConfigEnvelope = fetch_value(config, "GET", "/api/test/email-config", None).await?;
    envelope.config.ok_or(ApiError::NonJson)
}

/// Outcome of one email test run, success or not
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TestOutcome {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct TestEmailPayload<'a> {
    test_email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<&'a str>,
}

async fn run_test(config: &AppConfig, path: &str, payload: &TestEmailPayload<'_>) -> ApiResult<TestOutcome> {
    let body = serde_json::to_string(payload)
        .map_err(|err| ApiError::Network(format!("request encoding failed: {err}")))?;
    fetch_value(config, "POST", path, Some(body)).await
}

pub async fn test_email_connection(config: &AppConfig, test_email: &str) -> ApiResult<TestOutcome> {
    run_test(
        config,
        "/api/test/email-connection",
        &TestEmailPayload { test_email, status: None },
    )
    .await
}

pub async fn test_request_status_email(
    config: &AppConfig,
    test_email: &str,
    status: &str,
) -> ApiResult<TestOutcome> {
    run_test(
        config,
        "/api/test/request-status-email",
        &TestEmailPayload { test_email, status: Some(status) },
    )
    .await
}

pub async fn test_inventory_email(config: &AppConfig, test_email: &str) -> ApiResult<TestOutcome> {
    run_test(
        config,
        "/api/test/inventory-email",
        &TestEmailPayload { test_email, status: None },
    )
    .await
}
