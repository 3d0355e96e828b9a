// ABOUTME: Plain-text rendering of the scoreboard: match tabs, team scores, live batters and scorecards.
// ABOUTME: Produces a single String per frame so the caller decides where and how to print it.

use std::fmt::Write;

use crictty_scorecard::{
    innings_ordinal, BatsmanRecord, BowlerRecord, InningsRecord, MatchInfo, MatchScoreDetails,
    Miniscore,
};

use crate::view::ViewState;

/// Width of the main content column.
const MAIN_WIDTH: usize = 65;
/// Name column width in the batting and bowling tables.
const NAME_WIDTH: usize = MAIN_WIDTH - 24 - 7;

pub const HELP_LINE: &str = "q: quit • h/l: matches • k/j: innings • b: batting/bowling";

pub const NO_LIVE_MATCHES: &str = "No live matches found at the moment :(

This could be due to:

• Temporary issues with the Cricbuzz API
• No matches currently being played
• Your internet connection

Please try again in a few moments.

Use the --match-id flag with a valid match ID from Cricbuzz to view a specific match.";

/// Renders one full frame for the current snapshot and view.
pub fn render_board(matches: &[MatchInfo], view: &ViewState) -> String {
    if matches.is_empty() {
        return format!("{}\n", NO_LIVE_MATCHES);
    }

    let mut out = String::new();
    if matches.len() > 1 {
        let tabs: Vec<String> = matches
            .iter()
            .enumerate()
            .map(|(i, m)| tab(&m.display_name(), i == view.selected_match))
            .collect();
        let _ = writeln!(out, "{}", tabs.join(" "));
    }

    if let Some(info) = matches.get(view.selected_match) {
        if matches.len() == 1 {
            let _ = writeln!(out, "{}", info.display_name());
        }
        out.push('\n');
        out.push_str(&render_team_scores(&info.summary.miniscore.match_score_details));
        out.push('\n');
        out.push_str(&render_current_innings(&info.summary.miniscore));
        out.push('\n');

        if let Some(innings) = info.innings.get(view.current_innings) {
            out.push_str(&render_scorecard(info, innings, view));
        }

        let _ = writeln!(
            out,
            "\nMatch id : {}  (updated {})",
            info.match_id,
            info.last_refreshed.format("%H:%M:%S UTC")
        );
    }

    let _ = writeln!(out, "\n{}", HELP_LINE);
    out
}

/// Innings 1 and 3 on the left, 2 and 4 on the right.
fn render_team_scores(details: &MatchScoreDetails) -> String {
    let scores: Vec<String> = details.innings_score_list.iter().map(|s| s.display()).collect();
    if scores.is_empty() {
        return String::new();
    }

    let half = MAIN_WIDTH / 2;
    let mut out = String::new();
    for pair in scores.chunks(2) {
        let left = &pair[0];
        let right = pair.get(1).map(String::as_str).unwrap_or("");
        let _ = writeln!(out, "{:<half$}{:>width$}", left, right, width = MAIN_WIDTH - half);
    }
    out
}

fn render_current_innings(miniscore: &Miniscore) -> String {
    let mut out = String::new();
    if !miniscore.status.is_empty() {
        let _ = writeln!(out, "{}\n", miniscore.status);
    }

    let striker = &miniscore.batsman_striker;
    let non_striker = &miniscore.batsman_non_striker;
    let bowler = &miniscore.bowler_striker;

    let left = [
        (!striker.bat_name.is_empty())
            .then(|| format!("{} {}({})*", striker.bat_name, striker.bat_runs, striker.bat_balls)),
        (!non_striker.bat_name.is_empty()).then(|| {
            format!(
                "{} {}({})",
                non_striker.bat_name, non_striker.bat_runs, non_striker.bat_balls
            )
        }),
    ];
    let right = if bowler.bowl_name.is_empty() {
        [None, None]
    } else {
        [
            Some(bowler.bowl_name.clone()),
            Some(format!(
                "{}-{} ({:.1})",
                bowler.bowl_wkts, bowler.bowl_runs, bowler.bowl_ovs
            )),
        ]
    };

    let left_width = MAIN_WIDTH * 2 / 3;
    for (l, r) in left.iter().zip(right.iter()) {
        if l.is_none() && r.is_none() {
            continue;
        }
        let _ = writeln!(
            out,
            "{:<left_width$}{:>width$}",
            l.as_deref().unwrap_or(""),
            r.as_deref().unwrap_or(""),
            width = MAIN_WIDTH - left_width
        );
    }
    out
}

fn render_scorecard(info: &MatchInfo, innings: &InningsRecord, view: &ViewState) -> String {
    let ordinals: Vec<String> = info
        .innings
        .iter()
        .enumerate()
        .map(|(i, inn)| tab(&innings_ordinal(inn.number), i == view.current_innings))
        .collect();
    let cards = format!(
        "{} {}",
        tab("Bat", !view.show_bowling),
        tab("Bowl", view.show_bowling)
    );

    let mut out = String::new();
    let indicator = ordinals.join(" ");
    let _ = writeln!(
        out,
        "\n{:<30}{:>width$}\n",
        indicator,
        cards,
        width = MAIN_WIDTH - 30
    );

    if view.show_bowling {
        if innings.bowlers.is_empty() {
            out.push_str("No bowling data available for this innings\n");
        } else {
            out.push_str(&render_bowling_card(&innings.bowlers));
        }
    } else if innings.batsmen.is_empty() {
        out.push_str("No batting data available for this innings\n");
    } else {
        out.push_str(&render_batting_card(&innings.batsmen));
    }
    out
}

fn render_batting_card(batsmen: &[BatsmanRecord]) -> String {
    let mut out = table_header(["Batsman", "R", "B", "4s", "6s", "S/R"]);
    for bat in batsmen {
        out.push_str(&table_row([
            &truncate(&bat.name, NAME_WIDTH),
            &bat.runs,
            &bat.balls,
            &bat.fours,
            &bat.sixes,
            &bat.strike_rate,
        ]));
        let dismissal = if bat.is_out() { bat.status.trim() } else { "not out" };
        let _ = writeln!(out, " {}", dismissal);
    }
    out
}

fn render_bowling_card(bowlers: &[BowlerRecord]) -> String {
    let mut out = table_header(["Bowler", "O", "M", "R", "W", "Econ"]);
    for bowl in bowlers {
        out.push_str(&table_row([
            &truncate(&bowl.name, NAME_WIDTH),
            &bowl.overs,
            &bowl.maidens,
            &bowl.runs,
            &bowl.wickets,
            &bowl.economy,
        ]));
    }
    out
}

fn table_header(columns: [&str; 6]) -> String {
    let mut out = table_row(columns);
    let _ = writeln!(out, "{}", "─".repeat(MAIN_WIDTH));
    out
}

fn table_row(c: [&str; 6]) -> String {
    format!(
        "{:<name$} {:>5} {:>4} {:>4} {:>3} {:>8}\n",
        c[0],
        c[1],
        c[2],
        c[3],
        c[4],
        c[5],
        name = NAME_WIDTH
    )
}

fn tab(label: &str, active: bool) -> String {
    if active {
        format!("[{}]", label)
    } else {
        format!(" {} ", label)
    }
}

/// Shortens `s` to `max` characters, ending in "..." when cut.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept)
}
