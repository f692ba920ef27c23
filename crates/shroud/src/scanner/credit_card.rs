//! Credit card scanner
//!
//! Consumes a run of digits with optional space or dash separators, then
//! validates the digit count (13-19) and the Luhn checksum. The span always
//! ends at the last digit of the run.

use crate::scanner::{is_digit, Match, PiiKind, Scanner};

pub struct CreditCardScanner;

const MAX_DIGITS: usize = 19;
const MIN_DIGITS: usize = 13;

impl Scanner for CreditCardScanner {
    fn name(&self) -> &str {
        "credit_card"
    }

    fn scan(&self, text: &str) -> Vec<Match> {
        let bytes = text.as_bytes();
        let mut results = Vec::new();
        let mut i = 0;

        while i < bytes.len() {
            if !is_digit(bytes[i]) || (i > 0 && is_digit(bytes[i - 1])) {
                i += 1;
                continue;
            }
            match candidate(bytes, i) {
                Some(end) => {
                    results.push(Match {
                        start: i,
                        end,
                        value: text[i..end].to_string(),
                        kind: PiiKind::CreditCard,
                        score: 1.0,
                    });
                    i = end;
                }
                None => i += 1,
            }
        }

        results
    }
}

fn candidate(bytes: &[u8], start: usize) -> Option<usize> {
    let mut digits = [0u8; MAX_DIGITS];
    let mut count = 0;
    let mut end = start;
    let mut j = start;

    while j < bytes.len() && count < MAX_DIGITS {
        let b = bytes[j];
        if is_digit(b) {
            digits[count] = b - b'0';
            count += 1;
            j += 1;
            end = j;
        } else if b == b' ' || b == b'-' {
            j += 1;
        } else {
            break;
        }
    }

    // A 20th digit means the run is too long to be a card number at all.
    if count == MAX_DIGITS && end < bytes.len() && is_digit(bytes[end]) {
        return None;
    }
    if count < MIN_DIGITS {
        return None;
    }
    if !luhn_valid(&digits[..count]) {
        return None;
    }
    Some(end)
}

/// Luhn checksum: double every second digit from the right, subtract 9 when
/// the doubled value exceeds 9, and require the total to be divisible by 10.
fn luhn_valid(digits: &[u8]) -> bool {
    let mut sum: u32 = 0;
    let mut alternate = false;

    for &d in digits.iter().rev() {
        let mut n = u32::from(d);
        if alternate {
            n *= 2;
            if n > 9 {
                n -= 9;
            }
        }
        sum += n;
        alternate = !alternate;
    }

    sum % 10 == 0
}
