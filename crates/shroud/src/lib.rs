//! Shroud PII Masking Engine
//!
//! This crate provides reversible PII masking for free-form text:
//! - Per-family scanners with checksum validation (CPF, CNPJ, Luhn)
//! - Email, IPv4, E.164 phone and UUID detection with strict boundaries
//! - Overlap resolution across scanner candidates
//! - Token substitution with a per-call restoration context

pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod resolver;
pub mod scanner;

pub use config::MaskConfig;
pub use context::RestoreContext;
pub use engine::Shroud;
pub use error::{Error, Result};
pub use scanner::{
    CpfScanner, CnpjScanner, CreditCardScanner, CustomPattern, EmailScanner, Ipv4Scanner, Match,
    PhoneScanner, PiiKind, RegexScanner, Scanner, UuidScanner,
};
