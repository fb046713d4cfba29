//! Asaas integration for customer registration.
//!
//! Asaas owns the authoritative customer records. This module only needs:
//! - Customer lookup by CPF/CNPJ
//! - Customer creation

pub mod client;
pub mod types;

pub use client::{AsaasClient, AsaasError, DEFAULT_TIMEOUT_SECONDS, SANDBOX_API_URL};
pub use types::*;
