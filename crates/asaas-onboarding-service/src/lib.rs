//! Asaas customer onboarding HTTP service.
//!
//! This crate registers a single customer with the Asaas billing platform:
//!
//! - `/check_customer` reports whether Asaas already has the customer
//! - `/create_customer` creates it unless a record with the same CPF/CNPJ exists
//!
//! # Authentication
//!
//! Calls to Asaas carry the `ACCESS_TOKEN` configured at startup. Without it
//! the service still runs but both customer endpoints answer 500.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are noisy for Axum handler functions
#![allow(clippy::missing_errors_doc)] // Axum handlers all return Result

pub mod asaas;
pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use asaas::{AsaasClient, AsaasError};
pub use config::ServiceConfig;
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
