//! Customer check and registration handlers.
//!
//! Both handlers look the customer up in Asaas by CPF/CNPJ first. The create
//! handler runs its own lookup instead of trusting an earlier check.

use std::sync::Arc;

use axum::extract::State;

use asaas_onboarding_core::Customer;

use crate::asaas::AsaasClient;
use crate::error::{ApiError, CUSTOMER_EXISTS_MESSAGE};
use crate::state::AppState;

/// Body sent when the customer is not registered yet.
pub const CUSTOMER_NOT_FOUND_MESSAGE: &str = "Cliente não encontrado.";

/// Body sent after the customer was registered.
pub const CUSTOMER_CREATED_MESSAGE: &str = "Cliente criado com sucesso.";

/// Report whether the customer is still missing from Asaas.
///
/// Answers 409 when Asaas already has the customer.
pub async fn check_customer(
    State(state): State<Arc<AppState>>,
) -> Result<&'static str, ApiError> {
    let asaas = state.asaas()?;

    ensure_absent(asaas, &state.customer).await?;

    Ok(CUSTOMER_NOT_FOUND_MESSAGE)
}

/// Register the customer with Asaas unless it already exists.
pub async fn create_customer(
    State(state): State<Arc<AppState>>,
) -> Result<&'static str, ApiError> {
    let asaas = state.asaas()?;
    let customer = &state.customer;

    ensure_absent(asaas, customer).await?;

    let body = asaas
        .create_customer(customer)
        .await
        .map_err(ApiError::Creation)?;

    tracing::info!(
        tax_id_kind = ?customer.tax_id_kind(),
        response = %body,
        "Asaas customer created"
    );

    Ok(CUSTOMER_CREATED_MESSAGE)
}

/// Fail with a conflict if Asaas already knows this customer.
async fn ensure_absent(asaas: &AsaasClient, customer: &Customer) -> Result<(), ApiError> {
    let exists = asaas
        .customer_exists(customer)
        .await
        .map_err(ApiError::Verification)?;

    if exists {
        tracing::info!(tax_id_kind = ?customer.tax_id_kind(), "Customer already registered");
        return Err(ApiError::Conflict(CUSTOMER_EXISTS_MESSAGE.into()));
    }

    Ok(())
}
