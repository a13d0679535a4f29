//! HTTP client struct, URL building, and response status mapping.

use helpbot_common::{new_correlation_id, SessionId};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::ApiError;

use super::config::HttpConfig;

pub(crate) const REQUEST_ID_HEADER: &str = "x-request-id";
pub(crate) const ADMIN_KEY_HEADER: &str = "x-api-key";

/// Support API client.
pub struct HttpSupportClient {
    pub(crate) config: HttpConfig,
    pub(crate) http: reqwest::Client,
}

impl HttpSupportClient {
    pub fn new(config: HttpConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ApiError::InvalidConfig(e.to_string()))?;
        Ok(Self { config, http })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url)
    }

    pub(crate) fn session_url(&self, session: &SessionId, suffix: &str) -> String {
        self.url(&format!("/sessions/{}{suffix}", session.as_str()))
    }

    pub(crate) fn admin_key(&self) -> Result<&str, ApiError> {
        self.config
            .admin_key
            .as_deref()
            .ok_or_else(|| ApiError::InvalidConfig("admin API key not configured".into()))
    }

    /// Send a request tagged with a fresh correlation id and map non-2xx
    /// statuses to `ApiError`.
    pub(crate) async fn execute(
        &self,
        request: reqwest::RequestBuilder,
        endpoint: &str,
    ) -> Result<reqwest::Response, ApiError> {
        let request_id = new_correlation_id();
        debug!(%request_id, endpoint, "Support API request");

        let response = request
            .header(REQUEST_ID_HEADER, request_id.as_str())
            .send()
            .await
            .map_err(map_transport_error)?;

        check_status(response).await
    }

    pub(crate) async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        response.json().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout
            } else {
                ApiError::ParseError(e.to_string())
            }
        })
    }
}

pub(crate) fn map_transport_error(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Timeout
    } else {
        ApiError::NetworkError(e.to_string())
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();

    Err(match status {
        reqwest::StatusCode::NOT_FOUND => ApiError::NotFound(truncate(&error_detail(&text))),
        reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
            ApiError::Unauthorized
        }
        _ => ApiError::HttpStatus {
            status: status.as_u16(),
            body: truncate(&text),
        },
    })
}

/// Error bodies are cut to this many chars after any JSON is parsed.
const ERROR_BODY_LIMIT: usize = 200;

fn truncate(text: &str) -> String {
    text.chars().take(ERROR_BODY_LIMIT).collect()
}

/// Pull `detail` out of a `{"detail": "..."}` error body, or return the
/// body unchanged.
pub(crate) fn error_detail(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v["detail"].as_str().map(String::from))
        .unwrap_or_else(|| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> HttpSupportClient {
        HttpSupportClient::new(HttpConfig::new("http://localhost:8000/api/v1")).unwrap()
    }

    #[test]
    fn builds_endpoint_urls() {
        let client = client();
        assert_eq!(
            client.url("/sessions"),
            "http://localhost:8000/api/v1/sessions"
        );
        assert_eq!(
            client.session_url(&SessionId::new("abc"), "/message"),
            "http://localhost:8000/api/v1/sessions/abc/message"
        );
        assert_eq!(
            client.session_url(&SessionId::new("abc"), ""),
            "http://localhost:8000/api/v1/sessions/abc"
        );
    }

    #[test]
    fn missing_admin_key_is_config_error() {
        let err = client().admin_key().unwrap_err();
        assert!(matches!(err, ApiError::InvalidConfig(_)));
    }

    #[test]
    fn long_detail_is_parsed_before_truncation() {
        let detail = "d".repeat(300);
        let body = format!(r#"{{"detail":"{detail}"}}"#);
        let parsed = truncate(&error_detail(&body));
        assert_eq!(parsed, "d".repeat(ERROR_BODY_LIMIT));
    }

    #[test]
    fn error_detail_extracts_fastapi_detail() {
        assert_eq!(
            error_detail(r#"{"detail":"session not found"}"#),
            "session not found"
        );
        assert_eq!(error_detail("plain text"), "plain text");
    }
}
