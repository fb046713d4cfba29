//! Application state.

use std::sync::Arc;

use asaas_onboarding_core::Customer;

use crate::asaas::{AsaasClient, AsaasError};
use crate::config::ServiceConfig;
use crate::error::ApiError;

/// Application state shared across handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Service configuration.
    pub config: ServiceConfig,

    /// The customer this service registers.
    pub customer: Customer,

    /// Asaas client (absent when no access token is configured).
    pub asaas: Option<Arc<AsaasClient>>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// A missing access token leaves the client unset; a token that cannot
    /// be used to build the client is an error.
    pub fn new(config: ServiceConfig, customer: Customer) -> Result<Self, AsaasError> {
        let asaas = match &config.access_token {
            Some(token) => {
                let client =
                    AsaasClient::new(&config.asaas_api_url, token, config.asaas_timeout())?;
                tracing::info!(asaas_url = %config.asaas_api_url, "Asaas integration enabled");
                Some(Arc::new(client))
            }
            None => {
                tracing::warn!("ACCESS_TOKEN not configured - customer endpoints will fail");
                None
            }
        };

        if !customer.has_tax_id() {
            tracing::warn!("Customer has no CPF/CNPJ - lookups will not be meaningful");
        }

        Ok(Self {
            config,
            customer,
            asaas,
        })
    }

    /// Check if Asaas is configured.
    #[must_use]
    pub fn has_asaas(&self) -> bool {
        self.asaas.is_some()
    }

    /// The Asaas client, or an error if no access token is configured.
    pub fn asaas(&self) -> Result<&AsaasClient, ApiError> {
        self.asaas.as_deref().ok_or(ApiError::MissingCredential)
    }
}
