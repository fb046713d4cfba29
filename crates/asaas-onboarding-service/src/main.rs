//! Asaas Onboarding Service - registers the onboarding customer with Asaas.
//!
//! This is the main entry point for the asaas-onboarding service.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use asaas_onboarding_core::Customer;
use asaas_onboarding_service::{create_router, AppState, ServiceConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,asaas_onboarding=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Asaas Onboarding Service");

    // Load .env before reading configuration
    match dotenvy::dotenv() {
        Ok(path) => tracing::info!(path = %path.display(), "Loaded environment file"),
        Err(e) if e.not_found() => tracing::debug!("No .env file found"),
        Err(e) => return Err(e.into()),
    }

    let config = ServiceConfig::from_env();

    tracing::info!(
        listen_addr = %config.listen_addr,
        asaas_api_url = %config.asaas_api_url,
        asaas_configured = %config.access_token.is_some(),
        asaas_timeout_seconds = config.asaas_timeout_seconds,
        "Service configuration loaded"
    );

    let customer = Customer::onboarding_profile();
    tracing::info!(tax_id_kind = ?customer.tax_id_kind(), "Onboarding customer loaded");

    // Build app state
    let state = AppState::new(config.clone(), customer)?;

    let app = create_router(state);
    tracing::info!("Router configured with all API endpoints");

    // Start HTTP server
    tracing::info!(listen_addr = %config.listen_addr, "Starting HTTP server");
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
