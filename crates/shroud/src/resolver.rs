//! Overlap resolution across scanner candidates

use crate::scanner::Match;

/// Reduce pooled candidates to a non-overlapping set, ordered by start.
///
/// Candidates are sorted by start ascending with longer spans first on ties,
/// then swept left to right: a candidate survives only if it starts at or
/// past the end of the last kept match. Greedy longest-at-each-position is
/// the documented policy — it does not maximize match count or coverage, and
/// the tie-break (longest first, then discovery order, which the stable sort
/// preserves) is load-bearing.
pub fn resolve_overlaps(mut matches: Vec<Match>) -> Vec<Match> {
    if matches.len() <= 1 {
        return matches;
    }

    matches.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then_with(|| (b.end - b.start).cmp(&(a.end - a.start)))
    });

    let mut kept: Vec<Match> = Vec::with_capacity(matches.len());
    let mut last_end = 0;

    for m in matches {
        if !kept.is_empty() && m.start < last_end {
            continue;
        }
        last_end = m.end;
        kept.push(m);
    }

    kept
}
