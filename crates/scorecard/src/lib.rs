// ABOUTME: Core parsing library for crictty: domain models and markup extraction.
// ABOUTME: Provides the sanitizer, row classifier, scorecard extractor and live-match discovery.

//! Pure parsing half of crictty.
//!
//! Nothing in this crate touches the network. It takes homepage and scorecard
//! markup (and the summary JSON types) and produces the typed domain model
//! consumed by the network client and the terminal front end.

pub mod classify;
pub mod discovery;
pub mod error;
pub mod extract;
pub mod models;
pub mod sanitize;
pub mod summary;

pub use classify::{classify_row, RowKind};
pub use discovery::discover_live_matches;
pub use error::ExtractError;
pub use extract::extract_scorecard;
pub use models::{BatsmanRecord, BowlerRecord, InningsRecord, LiveMatchEntry, MatchInfo};
pub use sanitize::{collapse_whitespace, decode_entities, sanitize};
pub use summary::{
    BatsmanSnapshot, BowlerSnapshot, InningsScore, MatchHeader, MatchScoreDetails, MatchSummary,
    Miniscore, TeamInfo,
};

/// Category labels that can never be a player name.
pub const CATEGORY_LABELS: &[&str] = &["extras", "total", "fall of wickets"];

/// Returns the English ordinal label for an innings number ("1st", "2nd", ...).
pub fn innings_ordinal(number: u8) -> String {
    let suffix = match number {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    };
    format!("{}{}", number, suffix)
}
