//! Phone scanner (international prefix form)
//!
//! Triggered on `+`, then consumes digits with optional space, dash, or dot
//! separators. A separator before the first digit kills the candidate, and
//! the total digit count must stay within the E.164 range of 7-15. The span
//! ends at the last digit, leaving trailing separators outside.

use crate::scanner::{is_digit, Match, PiiKind, Scanner};

pub struct PhoneScanner;

const MAX_DIGITS: usize = 15;
const MIN_DIGITS: usize = 7;

impl Scanner for PhoneScanner {
    fn name(&self) -> &str {
        "phone"
    }

    fn scan(&self, text: &str) -> Vec<Match> {
        let bytes = text.as_bytes();
        let mut results = Vec::new();
        let mut i = 0;

        while i < bytes.len() {
            if bytes[i] != b'+' {
                i += 1;
                continue;
            }
            match candidate(bytes, i) {
                Some(end) => {
                    results.push(Match {
                        start: i,
                        end,
                        value: text[i..end].to_string(),
                        kind: PiiKind::Phone,
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
    let mut count = 0;
    let mut end = start;
    let mut j = start + 1;

    while j < bytes.len() {
        let b = bytes[j];
        if is_digit(b) {
            // A 16th digit disqualifies the whole run.
            if count == MAX_DIGITS {
                return None;
            }
            count += 1;
            j += 1;
            end = j;
        } else if b == b' ' || b == b'-' || b == b'.' {
            if count == 0 {
                return None;
            }
            j += 1;
        } else {
            break;
        }
    }

    if count < MIN_DIGITS {
        return None;
    }
    Some(end)
}
