// ABOUTME: Row classifier deciding whether a scorecard row is batting, bowling or noise.
// ABOUTME: A pure cascade of string checks, kept separate from HTML traversal for testing.

use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;
use regex::Regex;

/// Overs values such as "4.2" or "10.0".
static OVERS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\d+$").unwrap());

/// Phrases found in the dismissal column of a batting row.
const DISMISSAL_PHRASES: &[&str] = &[
    "not out",
    "c ",
    "b ",
    "lbw",
    "run out",
    "st ",
    "hit wicket",
    "obstructing",
    "handled",
    "timed out",
    "*",
];

/// Labels of summary and header rows (extras, totals, column captions).
const SUMMARY_LABELS: &[&str] = &[
    "extras",
    "total",
    "fall of wickets",
    "bowler",
    "overs",
    "maidens",
    "runs",
    "wickets",
    "economy",
    "nb",
    "wd",
];

static DISMISSAL_MATCHER: Lazy<AhoCorasick> =
    Lazy::new(|| AhoCorasick::new(DISMISSAL_PHRASES).unwrap());
static LABEL_MATCHER: Lazy<AhoCorasick> = Lazy::new(|| AhoCorasick::new(SUMMARY_LABELS).unwrap());

/// Minimum number of cells for a row to carry player data.
pub const MIN_ROW_CELLS: usize = 6;

/// What a scorecard row turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Batting,
    Bowling,
    Rejected,
}

/// Classifies a row from its first two sanitized cells and its cell count.
///
/// Rules, first match wins:
/// 1. second cell is an overs value => bowling
/// 2. second cell holds a dismissal phrase => batting
/// 3. first or second cell holds a summary label => rejected
/// 4. 6..=8 cells with a non-empty first cell => batting
/// 5. otherwise => bowling
///
/// Rule 3 also rejects a genuine bowling row whose bowler name contains a
/// label substring (e.g. "Wd" inside a name). That ambiguity is kept as is.
///
/// Callers are expected to drop rows with fewer than [`MIN_ROW_CELLS`] cells
/// before calling this.
pub fn classify_row(first: &str, second: &str, cell_count: usize) -> RowKind {
    if OVERS_RE.is_match(second) {
        return RowKind::Bowling;
    }

    let first_lc = first.to_lowercase();
    let second_lc = second.to_lowercase();

    if DISMISSAL_MATCHER.is_match(&second_lc) {
        return RowKind::Batting;
    }

    if LABEL_MATCHER.is_match(&first_lc) || LABEL_MATCHER.is_match(&second_lc) {
        return RowKind::Rejected;
    }

    if (MIN_ROW_CELLS..=8).contains(&cell_count) && !first.is_empty() {
        return RowKind::Batting;
    }

    RowKind::Bowling
}
