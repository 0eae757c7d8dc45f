//! API Client
//!
//! Wrappers over the clinic backend's JSON API, organized by domain. Every
//! endpoint answers with the envelope `{success, data?, message?}`; transport
//! failures, non-2xx statuses, and non-JSON bodies are distinguishable causes
//! that all collapse into [`ApiError`] before they reach any view state.

mod announcement;
mod auth;
mod email;
mod inventory;
mod reports;
mod requests;

pub use announcement::*;
pub use auth::*;
pub use email::*;
pub use inventory::*;
pub use reports::*;
pub use requests::*;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::config::AppConfig;

pub type ApiResult<T> = Result<T, ApiError>;

/// Duplicate category a user mutation can be rejected with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateKind {
    Username,
    FullName,
    StudentId,
    Email,
    ContactNumber,
}

impl DuplicateKind {
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "username" => Some(DuplicateKind::Username),
            "fullName" => Some(DuplicateKind::FullName),
            "studentId" => Some(DuplicateKind::StudentId),
            "email" => Some(DuplicateKind::Email),
            "contactNumber" => Some(DuplicateKind::ContactNumber),
            _ => None,
        }
    }
}

/// Existing record the server points at when rejecting a duplicate
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExistingUser {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub student_id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub contact_number: Option<String>,
}

/// A `success: false` envelope, with any conflict detail the server attached
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rejection {
    pub message: Option<String>,
    pub duplicate: Option<DuplicateKind>,
    pub existing_user: Option<ExistingUser>,
}

/// Uniform failure shape handed to the view-state layer
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Fetch itself failed: network unreachable, CORS, aborted
    Network(String),
    /// Non-2xx HTTP status
    Status(u16),
    /// Body was not JSON or did not match the expected shape
    NonJson,
    /// Well-formed envelope with `success: false`
    Rejected(Rejection),
}

impl ApiError {
    /// The message a page shows for this failure when it has no more
    /// specific handling
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => "Network error. Please try again.".to_string(),
            ApiError::Status(code) => format!("Server error: {code}"),
            ApiError::NonJson => "Server returned an unexpected response.".to_string(),
            ApiError::Rejected(rejection) => rejection
                .message
                .clone()
                .unwrap_or_else(|| "Request failed.".to_string()),
        }
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            ApiError::Rejected(rejection) => Some(rejection),
            _ => None,
        }
    }
}

/// Standard response envelope
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, rename = "type")]
    pub conflict_type: Option<String>,
    #[serde(default, rename = "existingUser")]
    pub existing_user: Option<ExistingUser>,
}

impl<T> Envelope<T> {
    pub fn into_result(self) -> Result<Option<T>, ApiError> {
        if self.success {
            Ok(self.data)
        } else {
            Err(ApiError::Rejected(Rejection {
                message: self.message,
                duplicate: self
                    .conflict_type
                    .as_deref()
                    .and_then(DuplicateKind::from_wire),
                existing_user: self.existing_user,
            }))
        }
    }
}

const QUERY: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'&')
    .add(b'=')
    .add(b'+')
    .add(b'%');

/// Percent-encoded query string, including the leading `?`; empty for no
/// parameters. Callers drop empty-valued filters before building.
pub fn query_string(params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return String::new();
    }
    let mut out = String::from("?");
    for (i, (key, value)) in params.iter().enumerate() {
        if i > 0 {
            out.push('&');
        }
        out.push_str(&utf8_percent_encode(key, QUERY).to_string());
        out.push('=');
        out.push_str(&utf8_percent_encode(value, QUERY).to_string());
    }
    out
}

fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Perform one request and deserialize the raw JSON body into `E`.
/// `path_and_query` is relative to the configured base URL.
pub(crate) async fn fetch_value<E: DeserializeOwned>(
    config: &AppConfig,
    method: &str,
    path_and_query: &str,
    body: Option<String>,
) -> Result<E, ApiError> {
    let url = format!("{}{}", config.api_url, path_and_query);

    let init = RequestInit::new();
    init.set_method(method);
    let has_body = body.is_some();
    if let Some(body) = body {
        init.set_body(&JsValue::from_str(&body));
    }

    let request = Request::new_with_str_and_init(&url, &init)
        .map_err(|err| ApiError::Network(js_message(&err)))?;
    if has_body {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|err| ApiError::Network(js_message(&err)))?;
    }

    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|err| ApiError::Network(js_message(&err)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| ApiError::Network("fetch returned a non-Response value".to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    let content_type = response
        .headers()
        .get("content-type")
        .ok()
        .flatten()
        .unwrap_or_default();
    if !content_type.contains("application/json") {
        return Err(ApiError::NonJson);
    }

    let json = JsFuture::from(response.json().map_err(|_| ApiError::NonJson)?)
        .await
        .map_err(|_| ApiError::NonJson)?;
    serde_wasm_bindgen::from_value(json).map_err(|_| ApiError::NonJson)
}

/// GET an envelope whose `data` is required
pub(crate) async fn get_data<T: DeserializeOwned + Default>(
    config: &AppConfig,
    path_and_query: &str,
) -> ApiResult<T> {
    let envelope: Envelope<T> = fetch_value(config, "GET", path_and_query, None).await?;
    envelope.into_result()?.ok_or(ApiError::NonJson)
}

/// Send a mutation and only care whether the envelope accepted it
pub(crate) async fn mutate<B: Serialize>(
    config: &AppConfig,
    method: &str,
    path: &str,
    body: Option<&B>,
) -> ApiResult<()> {
    let body = match body {
        Some(value) => Some(
            serde_json::to_string(value)
                .map_err(|err| ApiError::Network(format!("request encoding failed: {err}")))?,
        ),
        None => None,
    };
    let envelope: Envelope<serde_json::Value> = fetch_value(config, method, path, body).await?;
    envelope.into_result().map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_yields_data() {
        let envelope: Envelope<Vec<u32>> =
            serde_json::from_str(r#"{"success": true, "data": [1, 2, 3]}"#).unwrap();
        assert_eq!(envelope.into_result().unwrap(), Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_failure_envelope_carries_server_message_verbatim() {
        let envelope: Envelope<Vec<u32>> =
            serde_json::from_str(r#"{"success": false, "message": "Failed to fetch announcements"}"#)
                .unwrap();
        let err = envelope.into_result().unwrap_err();
        assert_eq!(err.user_message(), "Failed to fetch announcements");
    }

    #[test]
    fn test_failure_envelope_without_message_gets_fallback() {
        let envelope: Envelope<()> = serde_json::from_str(r#"{"success": false}"#).unwrap();
        let err = envelope.into_result().unwrap_err();
        assert_eq!(err.user_message(), "Request failed.");
    }

    #[test]
    fn test_conflict_envelope_decodes_category_and_existing_user() {
        let envelope: Envelope<()> = serde_json::from_str(
            r#"{
                "success": false,
                "message": "Duplicate user",
                "type": "username",
                "existingUser": {"fullName": "Juan Dela Cruz", "role": "nurse"}
            }"#,
        )
        .unwrap();
        let err = envelope.into_result().unwrap_err();
        let rejection = err.rejection().unwrap();
        assert_eq!(rejection.duplicate, Some(DuplicateKind::Username));
        assert_eq!(
            rejection.existing_user.as_ref().unwrap().full_name,
            "Juan Dela Cruz"
        );
    }

    #[test]
    fn test_unknown_conflict_category_falls_back_to_generic() {
        let envelope: Envelope<()> =
            serde_json::from_str(r#"{"success": false, "type": "middleName"}"#).unwrap();
        let err = envelope.into_result().unwrap_err();
        assert_eq!(err.rejection().unwrap().duplicate, None);
    }

    #[test]
    fn test_transport_errors_have_user_messages() {
        assert_eq!(
            ApiError::Network("dns".to_string()).user_message(),
            "Network error. Please try again."
        );
        assert_eq!(ApiError::Status(503).user_message(), "Server error: 503");
        assert_eq!(
            ApiError::NonJson.user_message(),
            "Server returned an unexpected response."
        );
    }

    #[test]
    fn test_query_string_encodes_values() {
        assert_eq!(query_string(&[]), "");
        assert_eq!(
            query_string(&[("category", "First Aid"), ("search", "a&b")]),
            "?category=First%20Aid&search=a%26b"
        );
    }
}
