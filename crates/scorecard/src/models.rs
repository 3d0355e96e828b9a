// ABOUTME: Domain models for a resolved match: innings tables, live entries and MatchInfo.
// ABOUTME: Every statistic is kept as the source's display string, never parsed to a number.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::summary::MatchSummary;

/// One batting row of an innings scorecard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatsmanRecord {
    pub name: String,
    pub status: String,
    pub runs: String,
    pub balls: String,
    pub fours: String,
    pub sixes: String,
    pub strike_rate: String,
}

impl BatsmanRecord {
    /// True when the dismissal column describes an actual dismissal.
    pub fn is_out(&self) -> bool {
        let status = self.status.trim();
        !status.is_empty() && status != "*" && !status.to_lowercase().contains("not out")
    }
}

/// One bowling row of an innings scorecard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BowlerRecord {
    pub name: String,
    pub overs: String,
    pub maidens: String,
    pub runs: String,
    pub wickets: String,
    pub no_balls: String,
    pub wides: String,
    pub economy: String,
}

/// Batting and bowling tables for a single innings, in source row order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InningsRecord {
    /// Innings number (1..=4) of the container this record came from.
    pub number: u8,
    pub batsmen: Vec<BatsmanRecord>,
    pub bowlers: Vec<BowlerRecord>,
}

/// A live match advertised in the homepage navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveMatchEntry {
    pub name: String,
    pub match_id: u32,
}

/// Everything known about one match after a resolve cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchInfo {
    pub match_id: u32,
    pub api_link: String,
    pub short_name: String,
    pub summary: MatchSummary,
    pub innings: Vec<InningsRecord>,
    pub last_refreshed: DateTime<Utc>,
}

impl MatchInfo {
    /// Tab label: "<short name> - <format>".
    pub fn display_name(&self) -> String {
        format!(
            "{} - {}",
            self.short_name, self.summary.match_header.match_format
        )
    }
}
