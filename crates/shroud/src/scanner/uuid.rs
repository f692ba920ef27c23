//! UUID scanner
//!
//! Matches the canonical 8-4-4-4-12 hexadecimal grouping. Characters just
//! outside the span must not be hex digits or `-`, so a UUID embedded in a
//! longer hex run is not partially matched.

use crate::scanner::{is_hex, Match, PiiKind, Scanner};

pub struct UuidScanner;

const GROUPS: [usize; 5] = [8, 4, 4, 4, 12];

impl Scanner for UuidScanner {
    fn name(&self) -> &str {
        "uuid"
    }

    fn scan(&self, text: &str) -> Vec<Match> {
        let bytes = text.as_bytes();
        let mut results = Vec::new();
        let mut i = 0;

        while i < bytes.len() {
            let boundary = i == 0 || (!is_hex(bytes[i - 1]) && bytes[i - 1] != b'-');
            if !is_hex(bytes[i]) || !boundary {
                i += 1;
                continue;
            }
            match candidate(bytes, i) {
                Some(end) => {
                    results.push(Match {
                        start: i,
                        end,
                        value: text[i..end].to_string(),
                        kind: PiiKind::Uuid,
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
    let mut j = start;

    for (index, len) in GROUPS.into_iter().enumerate() {
        if j + len > bytes.len() || !bytes[j..j + len].iter().all(|&b| is_hex(b)) {
            return None;
        }
        j += len;
        if index < GROUPS.len() - 1 {
            if j >= bytes.len() || bytes[j] != b'-' {
                return None;
            }
            j += 1;
        }
    }

    if j < bytes.len() && (is_hex(bytes[j]) || bytes[j] == b'-') {
        return None;
    }
    Some(j)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(input: &str) -> usize {
        UuidScanner.scan(input).len()
    }

    #[test]
    fn accepts_canonical_forms() {
        assert_eq!(count("Trace 123e4567-e89b-12d3-a456-426614174000"), 1);
        assert_eq!(count("Trace 123E4567-E89B-12D3-A456-426614174000"), 1);
        assert_eq!(
            count("before 123e4567-e89b-12d3-a456-426614174000 after"),
            1
        );
        assert_eq!(
            count(
                "IDs 123e4567-e89b-12d3-a456-426614174000 and a0e9825f-561a-4835-b2a8-2921c2618991"
            ),
            2
        );
        assert_eq!(count("deadbeef-dead-beef-dead-beefdeadbeef"), 1);
    }

    #[test]
    fn rejects_malformed_groupings() {
        assert_eq!(count("123e4567-e89b-12d3-a456-42661417400"), 0);
        assert_eq!(count("123e4567e89b12d3a456426614174000"), 0);
    }

    #[test]
    fn rejects_hex_neighbors() {
        assert_eq!(count("foo123e4567-e89b-12d3-a456-426614174000bar"), 0);
        assert_eq!(count("x-123e4567-e89b-12d3-a456-426614174000"), 0);
        assert_eq!(count("123e4567-e89b-12d3-a456-426614174000-rest"), 0);
    }

    #[test]
    fn finds_identifiers_in_log_text() {
        let log = "
Processing events:
- request 123e4567-e89b-12d3-a456-426614174000
- retry a0e9825f-561a-4835-b2a8-2921c2618991
- ignore malformed 123e4567e89b12d3a456426614174000
";
        assert_eq!(count(log), 2);
    }
}
