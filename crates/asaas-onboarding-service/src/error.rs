//! API error types and responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::asaas::AsaasError;

/// Message sent when no access token is configured.
pub const MISSING_CREDENTIAL_MESSAGE: &str = "Token de acesso não configurado";

/// Message sent when the customer lookup fails.
pub const VERIFICATION_FAILED_MESSAGE: &str = "Erro ao verificar cliente";

/// Message sent when the customer creation fails.
pub const CREATION_FAILED_MESSAGE: &str = "Erro ao criar cliente";

/// Message sent when the customer already exists.
pub const CUSTOMER_EXISTS_MESSAGE: &str = "Cliente já existe";

/// API error type.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No Asaas access token is configured.
    #[error("access token not configured")]
    MissingCredential,

    /// Conflict - the customer already exists.
    #[error("conflict: {0}")]
    Conflict(String),

    /// The existence check against Asaas failed.
    #[error("customer lookup failed: {0}")]
    Verification(#[source] AsaasError),

    /// The creation call to Asaas failed.
    #[error("customer creation failed: {0}")]
    Creation(#[source] AsaasError),
}

/// JSON error response body.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl ApiError {
    /// HTTP status this error maps to.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::MissingCredential | Self::Verification(_) | Self::Creation(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (code, message) = match &self {
            Self::MissingCredential => {
                tracing::error!("ACCESS_TOKEN not configured");
                ("not_configured", MISSING_CREDENTIAL_MESSAGE.to_string())
            }
            Self::Conflict(msg) => ("conflict", msg.clone()),
            Self::Verification(e) => {
                tracing::error!(error = %e, kind = e.kind(), "Customer lookup failed");
                ("verification_failed", VERIFICATION_FAILED_MESSAGE.to_string())
            }
            Self::Creation(e) => {
                tracing::error!(error = %e, kind = e.kind(), "Customer creation failed");
                ("creation_failed", CREATION_FAILED_MESSAGE.to_string())
            }
        };

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}
