//! Core types for asaas-onboarding.
//!
//! This crate provides the customer record that the onboarding service
//! registers with Asaas:
//!
//! - **Customer**: identity and address fields, in the Asaas wire format
//! - **Tax identifiers**: CPF/CNPJ classification used for diagnostics
//!
//! # Wire format
//!
//! Asaas expects camelCase field names (`cpfCnpj`, `mobilePhone`,
//! `addressNumber`, `postalCode`). Every field is a string and an empty
//! string stands for "not provided".

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod customer;
pub mod tax_id;

pub use customer::Customer;
pub use tax_id::TaxIdKind;
