//! Asaas API client implementation.

use std::time::Duration;

use asaas_onboarding_core::Customer;
use reqwest::header::{HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use serde_json::{Map, Value};

use super::types::{AsaasErrorDetail, AsaasErrorResponse};

/// Asaas sandbox API URL.
pub const SANDBOX_API_URL: &str = "https://sandbox.asaas.com/api/v3";

/// Default deadline for a single Asaas call.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Header carrying the Asaas access token.
const ACCESS_TOKEN_HEADER: &str = "access_token";

const APPLICATION_JSON: &str = "application/json";

/// Error type for Asaas operations.
#[derive(Debug, thiserror::Error)]
pub enum AsaasError {
    /// HTTP request failed (connection, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The access token was rejected.
    #[error("Asaas rejected credentials: {status} - {message}")]
    Unauthorized {
        /// HTTP status code.
        status: u16,
        /// Error message.
        message: String,
    },

    /// The request payload was rejected.
    #[error("Asaas validation error: {status} - {message}")]
    Validation {
        /// HTTP status code.
        status: u16,
        /// Joined error message.
        message: String,
        /// Individual errors reported by Asaas.
        errors: Vec<AsaasErrorDetail>,
    },

    /// Asaas reported a conflicting record.
    #[error("Asaas conflict: {0}")]
    Conflict(String),

    /// Any other non-success response.
    #[error("Asaas API error: {status} - {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message.
        message: String,
    },

    /// Response body was not the expected JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl AsaasError {
    /// Classify a non-success response.
    fn from_response(status: StatusCode, body: &str) -> Self {
        let parsed: AsaasErrorResponse = serde_json::from_str(body).unwrap_or_default();
        let message = parsed.message().unwrap_or_else(|| format!("HTTP {status}"));
        let status = status.as_u16();

        match status {
            401 | 403 => Self::Unauthorized { status, message },
            400 | 422 => Self::Validation {
                status,
                message,
                errors: parsed.errors,
            },
            409 => Self::Conflict(message),
            _ => Self::Api { status, message },
        }
    }

    /// Short label for log fields.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Http(_) => "transport",
            Self::Unauthorized { .. } => "unauthorized",
            Self::Validation { .. } => "validation",
            Self::Conflict(_) => "conflict",
            Self::Api { .. } => "api",
            Self::Serialization(_) => "serialization",
            Self::Configuration(_) => "configuration",
        }
    }
}

/// Asaas API client.
///
/// The access token is fixed at construction; every request carries it.
#[derive(Debug, Clone)]
pub struct AsaasClient {
    client: Client,
    base_url: String,
    access_token: HeaderValue,
}

impl AsaasClient {
    /// Create a new Asaas client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Asaas API URL (e.g., `"https://sandbox.asaas.com/api/v3"`)
    /// * `access_token` - Asaas access token
    /// * `timeout` - Deadline applied to every request
    ///
    /// # Errors
    ///
    /// Returns [`AsaasError::Configuration`] if the token is not a valid
    /// header value or the HTTP client cannot be built.
    pub fn new(
        base_url: impl Into<String>,
        access_token: &str,
        timeout: Duration,
    ) -> Result<Self, AsaasError> {
        let mut access_token = HeaderValue::from_str(access_token).map_err(|e| {
            AsaasError::Configuration(format!("invalid access token header: {e}"))
        })?;
        access_token.set_sensitive(true);

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AsaasError::Configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            access_token,
        })
    }

    /// Base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check whether Asaas already has a customer with this CPF/CNPJ.
    ///
    /// The customer exists when the search result has a non-empty `data`
    /// array. Any other object shape (or `null`) means it does not. The
    /// status code is not inspected; only the body decides.
    pub async fn customer_exists(&self, customer: &Customer) -> Result<bool, AsaasError> {
        let url = format!("{}/customers", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("cpfCnpj", customer.cpf_cnpj.as_str())])
            .header(ACCEPT, APPLICATION_JSON)
            .header(ACCESS_TOKEN_HEADER, self.access_token.clone())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        let result: Option<Map<String, Value>> = serde_json::from_str(&body)?;

        let exists = result
            .as_ref()
            .and_then(|r| r.get("data"))
            .and_then(Value::as_array)
            .is_some_and(|data| !data.is_empty());

        tracing::debug!(
            tax_id_kind = ?customer.tax_id_kind(),
            status = %status,
            exists,
            "Asaas customer lookup completed"
        );

        Ok(exists)
    }

    /// Create a customer in Asaas.
    ///
    /// Returns the raw response body so the caller can log it.
    pub async fn create_customer(&self, customer: &Customer) -> Result<String, AsaasError> {
        let url = format!("{}/customers", self.base_url);
        let payload = serde_json::to_vec(customer)?;

        let response = self
            .client
            .post(&url)
            .header(ACCEPT, APPLICATION_JSON)
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .header(ACCESS_TOKEN_HEADER, self.access_token.clone())
            .body(payload)
            .send()
            .await?;

        Self::read_body(response).await
    }

    /// Read the full creation body, turning non-success statuses into errors.
    async fn read_body(response: reqwest::Response) -> Result<String, AsaasError> {
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            return Ok(body);
        }

        let error = AsaasError::from_response(status, &body);
        tracing::debug!(status = %status, kind = error.kind(), body = %body, "Asaas returned an error");
        Err(error)
    }
}
