//! The masking engine
//!
//! A [`Shroud`] owns a fixed set of scanners chosen at construction time and
//! is read-only afterward: every piece of per-call mutable state (type
//! counters, the consistent-tokenization cache, the resulting context) lives
//! inside [`mask`](Shroud::mask), so one instance can serve any number of
//! concurrent callers without locking.

use crate::config::MaskConfig;
use crate::context::RestoreContext;
use crate::error::{Error, Result};
use crate::resolver::resolve_overlaps;
use crate::scanner::{
    CnpjScanner, CpfScanner, CreditCardScanner, EmailScanner, Ipv4Scanner, Match, PhoneScanner,
    Scanner, UuidScanner,
};
use std::collections::HashMap;
use std::fmt;

pub struct Shroud {
    config: MaskConfig,
    scanners: Vec<Box<dyn Scanner>>,
}

impl Shroud {
    /// Build an engine running the built-in scanners enabled by `config`.
    pub fn new(config: MaskConfig) -> Self {
        Self::with_custom_scanners(config, Vec::new())
    }

    /// Build an engine with additional caller-registered scanners. Custom
    /// scanners run after the built-ins, which fixes their discovery order
    /// for resolver tie-breaks.
    pub fn with_custom_scanners(config: MaskConfig, custom: Vec<Box<dyn Scanner>>) -> Self {
        let mut scanners: Vec<Box<dyn Scanner>> = Vec::new();

        if config.mask_email {
            scanners.push(Box::new(EmailScanner));
        }
        if config.mask_cpf {
            scanners.push(Box::new(CpfScanner));
        }
        if config.mask_cnpj {
            scanners.push(Box::new(CnpjScanner));
        }
        if config.mask_credit_card {
            scanners.push(Box::new(CreditCardScanner));
        }
        if config.mask_ipv4 {
            scanners.push(Box::new(Ipv4Scanner));
        }
        if config.mask_phone {
            scanners.push(Box::new(PhoneScanner));
        }
        if config.mask_uuid {
            scanners.push(Box::new(UuidScanner));
        }
        scanners.extend(custom);

        Self { config, scanners }
    }

    /// Names of the active scanners, in discovery order.
    pub fn scanner_names(&self) -> Vec<&str> {
        self.scanners.iter().map(|s| s.name()).collect()
    }

    /// Replace every detected PII span with a `<<TAG_n>>` token.
    ///
    /// Returns the masked text together with a fresh restoration context.
    /// Empty input and a scanner-less engine both come back unchanged with an
    /// empty context.
    pub fn mask(&self, input: &str) -> (String, RestoreContext) {
        if input.is_empty() {
            return (String::new(), RestoreContext::new());
        }

        let mut candidates = Vec::new();
        for scanner in &self.scanners {
            candidates.extend(scanner.scan(input));
        }
        // Candidates from custom scanners are not trusted to uphold the span
        // invariant; dropping the bad ones here keeps the slicing below total.
        candidates.retain(|m| {
            m.start < m.end
                && m.end <= input.len()
                && input.is_char_boundary(m.start)
                && input.is_char_boundary(m.end)
        });

        if candidates.is_empty() {
            return (input.to_string(), RestoreContext::new());
        }

        let resolved = resolve_overlaps(candidates);

        let mut output = String::with_capacity(input.len());
        let mut ctx = RestoreContext::new();
        let mut mint = TokenMint::new(self.config.consistent_tokenization);
        let mut last_end = 0;

        for m in &resolved {
            output.push_str(&input[last_end..m.start]);
            let token = mint.token_for(m);
            ctx.data.insert(token.clone(), m.value.clone());
            output.push_str(&token);
            last_end = m.end;
        }
        output.push_str(&input[last_end..]);

        tracing::debug!(spans = resolved.len(), "masked pii spans");
        (output, ctx)
    }

    /// Substitute tokens in `masked` back to their original literals.
    ///
    /// A missing or empty context is a usage error: the masked input is left
    /// untouched and [`Error::InvalidContext`] is returned.
    pub fn restore(&self, masked: &str, ctx: &RestoreContext) -> Result<String> {
        if ctx.is_empty() {
            tracing::warn!("restore called with an empty context");
            return Err(Error::InvalidContext);
        }
        Ok(substitute(masked, ctx))
    }

    /// One-way mask of any printable value, for logging. The restoration
    /// context is discarded.
    pub fn sanitize<T: fmt::Display>(&self, value: T) -> String {
        let (masked, _) = self.mask(&value.to_string());
        masked
    }
}

/// Per-call token state: type-scoped 1-based counters plus, in consistent
/// mode, a literal-to-token cache shared across types.
struct TokenMint {
    consistent: bool,
    counters: HashMap<String, u32>,
    cache: HashMap<String, String>,
}

impl TokenMint {
    fn new(consistent: bool) -> Self {
        Self {
            consistent,
            counters: HashMap::new(),
            cache: HashMap::new(),
        }
    }

    fn token_for(&mut self, m: &Match) -> String {
        if self.consistent {
            if let Some(token) = self.cache.get(&m.value) {
                return token.clone();
            }
        }

        let tag = m.kind.tag();
        let counter = self.counters.entry(tag.to_string()).or_insert(0);
        *counter += 1;
        let token = format!("<<{}_{}>>", tag, counter);

        if self.consistent {
            self.cache.insert(m.value.clone(), token.clone());
        }
        token
    }
}

/// Walk masked text once, substituting known tokens. On `<<`, the candidate
/// runs to the next `>>`; unknown or malformed candidates emit a single `<`
/// and rescan from the next position, so a broken delimiter never swallows an
/// adjacent real token.
fn substitute(masked: &str, ctx: &RestoreContext) -> String {
    let mut output = String::with_capacity(masked.len());
    let mut rest = masked;

    while let Some(open) = rest.find("<<") {
        output.push_str(&rest[..open]);
        let tail = &rest[open..];

        if let Some(close) = tail[2..].find(">>") {
            let token = &tail[..close + 4];
            if let Some(original) = ctx.get(token) {
                output.push_str(original);
                rest = &tail[token.len()..];
                continue;
            }
        }

        output.push('<');
        rest = &tail[1..];
    }
    output.push_str(rest);

    output
}
