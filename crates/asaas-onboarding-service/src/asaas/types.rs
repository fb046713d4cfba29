//! Asaas API types.

use serde::Deserialize;

/// Asaas error response body.
///
/// Asaas reports failures as `{"errors": [{"code": ..., "description": ...}]}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AsaasErrorResponse {
    /// Reported errors.
    #[serde(default)]
    pub errors: Vec<AsaasErrorDetail>,
}

/// A single Asaas error entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AsaasErrorDetail {
    /// Machine-readable code (e.g. `invalid_cpfCnpj`).
    #[serde(default)]
    pub code: String,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
}

impl AsaasErrorResponse {
    /// Join all error descriptions into one message.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        let parts: Vec<&str> = self
            .errors
            .iter()
            .map(|e| {
                if e.description.is_empty() {
                    e.code.as_str()
                } else {
                    e.description.as_str()
                }
            })
            .filter(|s| !s.is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join("; "))
        }
    }
}
