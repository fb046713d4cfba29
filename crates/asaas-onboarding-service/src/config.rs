//! Service configuration.

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::asaas::{DEFAULT_TIMEOUT_SECONDS, SANDBOX_API_URL};

/// Default listen address.
const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";

/// Default inbound request timeout.
const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;

/// Service configuration loaded from environment variables.
#[derive(Clone)]
pub struct ServiceConfig {
    /// Address to listen on (default: "127.0.0.1:8080").
    pub listen_addr: String,

    /// Asaas API URL (default: the sandbox API).
    pub asaas_api_url: String,

    /// Asaas access token. Customer endpoints answer 500 without it.
    pub access_token: Option<String>,

    /// Inbound request timeout in seconds.
    pub request_timeout_seconds: u64,

    /// Timeout for each Asaas call in seconds.
    pub asaas_timeout_seconds: u64,
}

impl std::fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("listen_addr", &self.listen_addr)
            .field("asaas_api_url", &self.asaas_api_url)
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .field("request_timeout_seconds", &self.request_timeout_seconds)
            .field("asaas_timeout_seconds", &self.asaas_timeout_seconds)
            .finish()
    }
}

/// Asaas secrets file structure.
#[derive(Debug, Deserialize)]
struct AsaasSecrets {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    api_url: Option<String>,
}

impl ServiceConfig {
    /// Load configuration from environment variables and secrets files.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok()).with_secrets(load_asaas_secrets())
    }

    /// Overlay values from a secrets file. Blank entries never clear a value.
    fn with_secrets(mut self, secrets: Option<AsaasSecrets>) -> Self {
        let Some(secrets) = secrets else {
            return self;
        };

        if let Some(token) = non_empty(secrets.access_token) {
            self.access_token = Some(token);
        }
        if let Some(api_url) = non_empty(secrets.api_url) {
            self.asaas_api_url = api_url;
        }

        self
    }

    /// Build configuration from a variable lookup.
    #[must_use]
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            listen_addr: lookup("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.into()),
            asaas_api_url: non_empty(lookup("ASAAS_API_URL"))
                .unwrap_or_else(|| SANDBOX_API_URL.into()),
            access_token: non_empty(lookup("ACCESS_TOKEN")),
            request_timeout_seconds: lookup("REQUEST_TIMEOUT_SECONDS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECONDS),
            asaas_timeout_seconds: lookup("ASAAS_TIMEOUT_SECONDS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
        }
    }

    /// Inbound request timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    /// Timeout applied to each Asaas call.
    #[must_use]
    pub const fn asaas_timeout(&self) -> Duration {
        Duration::from_secs(self.asaas_timeout_seconds)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.into(),
            asaas_api_url: SANDBOX_API_URL.into(),
            access_token: None,
            request_timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECONDS,
            asaas_timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Load Asaas secrets from the first secrets file found.
fn load_asaas_secrets() -> Option<AsaasSecrets> {
    let secret_paths = [".secrets/asaas.json", "../.secrets/asaas.json"];

    for path in &secret_paths {
        if let Ok(secrets) = load_secrets_file::<AsaasSecrets>(path) {
            tracing::info!(path = %path, "Loaded Asaas secrets from file");
            return Some(secrets);
        }
    }

    tracing::debug!("Asaas secrets file not found, using environment variables");
    None
}

/// Load secrets from a JSON file.
fn load_secrets_file<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, std::io::Error> {
    let path = Path::new(path);
    if !path.exists() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Secrets file not found",
        ));
    }
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}
