// ABOUTME: Serde models for the match summary JSON document (header and mini-score).
// ABOUTME: Only the fields the front end reads are modelled; everything else is ignored.

use serde::{Deserialize, Serialize};

/// Top-level match summary document returned by the match API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchSummary {
    pub match_header: MatchHeader,
    pub miniscore: Miniscore,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchHeader {
    pub team1: TeamInfo,
    pub team2: TeamInfo,
    pub match_format: String,
    pub state: String,
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamInfo {
    pub name: String,
    pub short_name: String,
}

/// Live snapshot of the current batters, bowler and match state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Miniscore {
    pub status: String,
    pub batsman_striker: BatsmanSnapshot,
    pub batsman_non_striker: BatsmanSnapshot,
    pub bowler_striker: BowlerSnapshot,
    pub match_score_details: MatchScoreDetails,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BatsmanSnapshot {
    pub bat_name: String,
    pub bat_runs: u32,
    pub bat_balls: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BowlerSnapshot {
    pub bowl_name: String,
    pub bowl_ovs: f64,
    pub bowl_runs: u32,
    pub bowl_wkts: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchScoreDetails {
    pub state: String,
    pub innings_score_list: Vec<InningsScore>,
}

/// One team's running total as reported by the mini-score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InningsScore {
    pub innings_id: u32,
    pub bat_team_name: String,
    pub score: u32,
    pub wickets: u32,
    pub overs: f64,
    pub is_declared: bool,
}

impl InningsScore {
    /// Formats the score the way scoreboards print it.
    ///
    /// Declared innings get a `D` marker, all-out innings drop the wicket count.
    pub fn display(&self) -> String {
        if self.is_declared {
            format!(
                "{} {}/{} D ({:.1})",
                self.bat_team_name, self.score, self.wickets, self.overs
            )
        } else if self.wickets == 10 {
            format!("{} {} ({:.1})", self.bat_team_name, self.score, self.overs)
        } else {
            format!(
                "{} {}/{} ({:.1})",
                self.bat_team_name, self.score, self.wickets, self.overs
            )
        }
    }
}

impl MatchSummary {
    /// "IND vs AUS" built from the two team short names.
    pub fn versus_name(&self) -> String {
        format!(
            "{} vs {}",
            self.match_header.team1.short_name, self.match_header.team2.short_name
        )
    }
}
