//! Engine configuration

use serde::{Deserialize, Serialize};

/// Configuration for a [`Shroud`](crate::Shroud) instance.
///
/// Every field defaults to off: an engine built from `MaskConfig::default()`
/// runs no scanners and returns its input unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MaskConfig {
    /// Mask email addresses
    pub mask_email: bool,

    /// Mask Brazilian CPF numbers (11 digits, two check digits)
    pub mask_cpf: bool,

    /// Mask Brazilian CNPJ numbers (14 digits, two check digits)
    pub mask_cnpj: bool,

    /// Mask credit card numbers (Luhn-validated, 13-19 digits)
    pub mask_credit_card: bool,

    /// Mask IPv4 addresses
    pub mask_ipv4: bool,

    /// Mask international phone numbers (`+` prefix, 7-15 digits)
    pub mask_phone: bool,

    /// Mask UUIDs in the canonical 8-4-4-4-12 grouping
    pub mask_uuid: bool,

    /// Reuse the same token for repeated literal values within one mask call
    pub consistent_tokenization: bool,
}

impl MaskConfig {
    /// Configuration with every built-in scanner enabled.
    pub fn all() -> Self {
        Self {
            mask_email: true,
            mask_cpf: true,
            mask_cnpj: true,
            mask_credit_card: true,
            mask_ipv4: true,
            mask_phone: true,
            mask_uuid: true,
            consistent_tokenization: false,
        }
    }
}
