//! PII scanners
//!
//! Each built-in scanner is a single forward sweep over the input bytes with
//! explicit boundary logic. Scanners are total: adversarial or malformed
//! input yields zero matches, never a failure.

mod cnpj;
mod cpf;
mod credit_card;
mod email;
mod ipv4;
mod pattern;
mod phone;
mod uuid;

pub use cnpj::CnpjScanner;
pub use cpf::CpfScanner;
pub use credit_card::CreditCardScanner;
pub use email::EmailScanner;
pub use ipv4::Ipv4Scanner;
pub use pattern::{CustomPattern, RegexScanner};
pub use phone::PhoneScanner;
pub use uuid::UuidScanner;

use serde::{Deserialize, Serialize};

/// A PII occurrence found in the input text.
///
/// `start..end` is a half-open byte interval into the original input, never
/// into partially substituted text. Offsets always fall on UTF-8 character
/// boundaries; later slicing relies on that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// Start byte offset in the original input
    pub start: usize,

    /// End byte offset (exclusive)
    pub end: usize,

    /// The exact substring at `start..end`
    pub value: String,

    /// PII family of the match
    pub kind: PiiKind,

    /// Confidence score (0.0 to 1.0); built-in scanners always report 1.0
    pub score: f32,
}

/// PII families the engine knows how to tokenize.
///
/// The closed variants cover the built-in scanners; `Custom` carries the tag
/// of a caller-registered scanner.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PiiKind {
    /// Email address
    Email,

    /// Brazilian CPF (11-digit tax ID)
    Cpf,

    /// Brazilian CNPJ (14-digit company tax ID)
    Cnpj,

    /// Credit card number
    CreditCard,

    /// IPv4 address
    Ipv4,

    /// International phone number
    Phone,

    /// UUID
    Uuid,

    /// Caller-defined family; the string is the token type tag
    Custom(String),
}

impl PiiKind {
    /// Type tag used in minted tokens (`<<TAG_n>>`).
    pub fn tag(&self) -> &str {
        match self {
            PiiKind::Email => "EMAIL",
            PiiKind::Cpf => "CPF",
            PiiKind::Cnpj => "CNPJ",
            PiiKind::CreditCard => "CREDIT_CARD",
            PiiKind::Ipv4 => "IP",
            PiiKind::Phone => "PHONE",
            PiiKind::Uuid => "UUID",
            PiiKind::Custom(tag) => tag,
        }
    }
}

/// Trait for scanning text for PII occurrences.
///
/// Implementations must be stateless with respect to the call: `scan` may be
/// invoked concurrently from any number of threads. Returned offsets must lie
/// on UTF-8 character boundaries of the input.
pub trait Scanner: Send + Sync {
    /// Short identifier for this scanner (e.g. "email", "cpf")
    fn name(&self) -> &str;

    /// Sweep the input and return every valid occurrence
    fn scan(&self, text: &str) -> Vec<Match>;
}

pub(crate) fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

pub(crate) fn is_hex(b: u8) -> bool {
    b.is_ascii_hexdigit()
}
