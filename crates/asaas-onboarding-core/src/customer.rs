//! Customer record registered with Asaas.
//!
//! The service works on a single customer profile that is built once at
//! startup and never mutated.

use serde::{Deserialize, Serialize};

use crate::TaxIdKind;

// ============================================================================
// Onboarding profile
// ============================================================================

const PROFILE_NAME: &str = "Maria Aparecida dos Santos";
const PROFILE_EMAIL: &str = "maria.santos@example.com";
const PROFILE_CPF_CNPJ: &str = "24971563792";
const PROFILE_MOBILE_PHONE: &str = "4799376637";
const PROFILE_ADDRESS: &str = "Avenida Paulista";
const PROFILE_ADDRESS_NUMBER: &str = "150";
const PROFILE_PROVINCE: &str = "Bela Vista";
const PROFILE_POSTAL_CODE: &str = "01310000";

/// A customer as Asaas stores it.
///
/// All fields are plain strings. An empty string means the field was not
/// provided; it is still sent on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Customer {
    /// Full name.
    pub name: String,

    /// Contact email.
    pub email: String,

    /// CPF or CNPJ. This is the only key used to look the customer up.
    pub cpf_cnpj: String,

    /// Landline phone.
    pub phone: String,

    /// Mobile phone.
    pub mobile_phone: String,

    /// Street address.
    pub address: String,

    /// Street number.
    pub address_number: String,

    /// Address complement (apartment, suite, ...).
    pub complement: String,

    /// Neighborhood.
    pub province: String,

    /// Postal code (CEP).
    pub postal_code: String,
}

impl Customer {
    /// The customer profile this service registers.
    #[must_use]
    pub fn onboarding_profile() -> Self {
        Self {
            name: PROFILE_NAME.into(),
            email: PROFILE_EMAIL.into(),
            cpf_cnpj: PROFILE_CPF_CNPJ.into(),
            phone: String::new(),
            mobile_phone: PROFILE_MOBILE_PHONE.into(),
            address: PROFILE_ADDRESS.into(),
            address_number: PROFILE_ADDRESS_NUMBER.into(),
            complement: String::new(),
            province: PROFILE_PROVINCE.into(),
            postal_code: PROFILE_POSTAL_CODE.into(),
        }
    }

    /// Classify the tax identifier, if it looks like a CPF or CNPJ.
    #[must_use]
    pub fn tax_id_kind(&self) -> Option<TaxIdKind> {
        TaxIdKind::classify(&self.cpf_cnpj)
    }

    /// Whether the customer has a tax identifier to look up by.
    #[must_use]
    pub fn has_tax_id(&self) -> bool {
        !self.cpf_cnpj.trim().is_empty()
    }
}
