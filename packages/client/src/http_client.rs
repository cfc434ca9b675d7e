//! Low-level HTTP client for the hosted data service
//!
//! Speaks the PostgREST wire contract: JSON rows in, structured JSON
//! errors out. A unique-constraint violation is surfaced as its own
//! variant so callers can classify it without string matching.

use reqwest::{Client, Method};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

use crate::store::StoreConfig;

/// Postgres error code for a unique-constraint violation
const UNIQUE_VIOLATION: &str = "23505";

/// Errors from the hosted data service
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unique constraint violation: {message}")]
    Conflict { message: String },

    #[error("Service error {code}: {message} (HTTP {status})")]
    Service { status: u16, code: String, message: String },

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl StoreError {
    /// Whether this error is the store's duplicate-key signal
    pub fn is_conflict(&self) -> bool {
        matches!(self, StoreError::Conflict { .. })
    }

    /// Message suitable for direct display in the widget
    pub fn user_message(&self) -> String {
        match self {
            StoreError::Service { message, .. } => {
                format!("Failed to join the waitlist: {message}")
            },
            _ => "Failed to join the waitlist. Please try again.".to_string(),
        }
    }
}

/// Structured error body returned by the data service
#[derive(Debug, Deserialize)]
struct ServiceErrorResponse {
    code: String,
    message: String,
    #[serde(default)]
    #[allow(dead_code)] // Present in the wire format but not surfaced
    details: Option<String>,
    #[serde(default)]
    #[allow(dead_code)]
    hint: Option<String>,
}

/// HTTP client for the data service REST endpoint
#[derive(Debug, Clone)]
pub struct RestHttpClient {
    client: Client,
    service_url: Url,
    api_key: String,
}

impl RestHttpClient {
    /// Create a new client from the store configuration
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            client,
            service_url: config.service_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Get the data service base URL
    pub fn service_url(&self) -> &Url {
        &self.service_url
    }

    /// Issue a read request against the data service
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `path` - path and query relative to the service URL
    ///
    /// # Returns
    /// * `Result<R, StoreError>` - deserialized response rows or error
    pub async fn request<R>(&self, method: Method, path: &str) -> Result<R, StoreError>
    where
        R: for<'de> Deserialize<'de>,
    {
        let url = self.service_url.join(path)?;

        let req = self
            .client
            .request(method, url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key);

        let response = req.send().await?;
        let status = response.status();

        if status.is_success() {
            let data = response.json::<R>().await?;
            Ok(data)
        } else {
            let error_body = response.text().await?;
            self.parse_service_error(status.as_u16(), &error_body)
        }
    }

    /// Parse a structured data-service error body
    ///
    /// The machine-readable `code` field is the primary duplicate-key
    /// signal; matching on the message text is a deprecated fallback for
    /// backends that omit the code.
    fn parse_service_error<T>(&self, status: u16, body: &str) -> Result<T, StoreError> {
        match serde_json::from_str::<ServiceErrorResponse>(body) {
            Ok(service_err) if service_err.code == UNIQUE_VIOLATION => {
                Err(StoreError::Conflict { message: service_err.message })
            },
            Ok(service_err) if service_err.message.contains("duplicate key") => {
                Err(StoreError::Conflict { message: service_err.message })
            },
            Ok(service_err) => Err(StoreError::Service {
                status,
                code: service_err.code,
                message: service_err.message,
            }),
            Err(_) => {
                // Fallback: non-JSON error response
                Err(StoreError::Service {
                    status,
                    code: "unknown".to_string(),
                    message: body.to_string(),
                })
            },
        }
    }

    /// Convenience method for GET requests
    pub async fn get<R>(&self, path: &str) -> Result<R, StoreError>
    where
        R: for<'de> Deserialize<'de>,
    {
        self.request(Method::GET, path).await
    }

    /// Convenience method for POST requests with an empty expected body
    pub async fn post<T>(&self, path: &str, body: &T) -> Result<(), StoreError>
    where
        T: Serialize,
    {
        let url = self.service_url.join(path)?;

        let response = self
            .client
            .post(url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=minimal")
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let error_body = response.text().await?;
            self.parse_service_error(status.as_u16(), &error_body)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> RestHttpClient {
        RestHttpClient::new(&StoreConfig::default()).unwrap()
    }

    #[test]
    fn test_unique_violation_code_maps_to_conflict() {
        let body = r#"{"code":"23505","message":"duplicate key value violates unique constraint \"waitlist_wallet_address_key\""}"#;
        let err = client().parse_service_error::<()>(409, body).unwrap_err();
        assert!(err.is_conflict());
    }

    #[test]
    fn test_duplicate_key_message_fallback_maps_to_conflict() {
        let body = r#"{"code":"","message":"duplicate key value violates unique constraint"}"#;
        let err = client().parse_service_error::<()>(409, body).unwrap_err();
        assert!(err.is_conflict());
    }

    #[test]
    fn test_other_codes_map_to_service_error() {
        let body = r#"{"code":"08006","message":"connection failure"}"#;
        let err = client().parse_service_error::<()>(503, body).unwrap_err();
        match err {
            StoreError::Service { status, code, message } => {
                assert_eq!(status, 503);
                assert_eq!(code, "08006");
                assert_eq!(message, "connection failure");
            },
            other => panic!("expected Service error, got {other:?}"),
        }
    }

    #[test]
    fn test_non_json_body_degrades_to_service_error() {
        let err = client()
            .parse_service_error::<()>(502, "Bad Gateway")
            .unwrap_err();
        match err {
            StoreError::Service { code, message, .. } => {
                assert_eq!(code, "unknown");
                assert_eq!(message, "Bad Gateway");
            },
            other => panic!("expected Service error, got {other:?}"),
        }
    }

    #[test]
    fn test_service_error_user_message_carries_server_text() {
        let err = StoreError::Service {
            status: 503,
            code: "08006".to_string(),
            message: "connection failure".to_string(),
        };
        assert!(err.user_message().contains("connection failure"));
    }
}
