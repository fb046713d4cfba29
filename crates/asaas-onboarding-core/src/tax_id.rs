//! Brazilian tax identifiers (CPF and CNPJ).
//!
//! Identifiers are never rejected here; classification only feeds log
//! fields so a malformed identifier is easy to spot.

use std::fmt;

/// Number of digits in a CPF (individuals).
pub const CPF_DIGITS: usize = 11;

/// Number of digits in a CNPJ (companies).
pub const CNPJ_DIGITS: usize = 14;

/// Kind of fiscal identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaxIdKind {
    /// Individual taxpayer (11 digits).
    Cpf,
    /// Company taxpayer (14 digits).
    Cnpj,
}

impl TaxIdKind {
    /// Classify an identifier by its digit count.
    ///
    /// The usual punctuation (`.`, `-`, `/`) and surrounding whitespace are
    /// ignored. Any other character makes the identifier unclassifiable.
    #[must_use]
    pub fn classify(value: &str) -> Option<Self> {
        let mut digits = 0usize;
        for c in value.trim().chars() {
            match c {
                '0'..='9' => digits += 1,
                '.' | '-' | '/' => {}
                _ => return None,
            }
        }

        match digits {
            CPF_DIGITS => Some(Self::Cpf),
            CNPJ_DIGITS => Some(Self::Cnpj),
            _ => None,
        }
    }

    /// Short lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cpf => "cpf",
            Self::Cnpj => "cnpj",
        }
    }
}

impl fmt::Display for TaxIdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
