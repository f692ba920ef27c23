//! Email scanner
//!
//! Triggered on `@`: the local part is expanded to the left, the domain to
//! the right, then structural rules are checked on both sides. The neighbor
//! characters just outside the span must not belong to the email character
//! classes, so an address embedded in a longer token is not matched.

use crate::scanner::{Match, PiiKind, Scanner};

pub struct EmailScanner;

fn is_local_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'%' | b'+' | b'-')
}

fn is_domain_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'.' | b'-')
}

fn valid_local(local: &[u8]) -> bool {
    if local.is_empty() || local[0] == b'.' || local[local.len() - 1] == b'.' {
        return false;
    }
    !local.windows(2).any(|w| w == b"..")
}

fn valid_domain(domain: &[u8]) -> bool {
    if domain.is_empty() || domain[0] == b'.' {
        return false;
    }
    let last = domain[domain.len() - 1];
    if last == b'.' || last == b'-' {
        return false;
    }
    // Interior dot plus an alphabetic TLD of at least two characters.
    let Some(dot) = domain.iter().rposition(|&b| b == b'.') else {
        return false;
    };
    let tld = &domain[dot + 1..];
    tld.len() >= 2 && tld.iter().all(|b| b.is_ascii_alphabetic())
}

impl Scanner for EmailScanner {
    fn name(&self) -> &str {
        "email"
    }

    fn scan(&self, text: &str) -> Vec<Match> {
        let bytes = text.as_bytes();
        let mut results = Vec::new();

        for at in 0..bytes.len() {
            if bytes[at] != b'@' {
                continue;
            }

            let mut start = at;
            while start > 0 && is_local_char(bytes[start - 1]) {
                start -= 1;
            }
            if start == at {
                continue;
            }
            // A second `@` hugging the local part means we are inside a
            // longer token.
            if start > 0 && bytes[start - 1] == b'@' {
                continue;
            }

            let mut end = at + 1;
            while end < bytes.len() && is_domain_char(bytes[end]) {
                end += 1;
            }
            if end < bytes.len() && bytes[end] == b'@' {
                continue;
            }
            // Sentence punctuation after the domain is not part of it.
            while end > at + 1 && matches!(bytes[end - 1], b'.' | b'-') {
                end -= 1;
            }
            if end == at + 1 {
                continue;
            }

            if !valid_local(&bytes[start..at]) || !valid_domain(&bytes[at + 1..end]) {
                continue;
            }

            results.push(Match {
                start,
                end,
                value: text[start..end].to_string(),
                kind: PiiKind::Email,
                score: 1.0,
            });
        }

        results
    }
}
