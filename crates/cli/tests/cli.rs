// ABOUTME: Integration tests for the crictty CLI binary.
// ABOUTME: Runs one-shot snapshots against a mock Cricbuzz server and checks output and exit codes.

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo::CommandCargoExt;
use httpmock::prelude::*;
use predicates::prelude::*;
use std::process::Command;

const SUMMARY_JSON: &str = r#"{
    "matchHeader": {
        "matchFormat": "ODI",
        "state": "In Progress",
        "status": "Australia opt to bowl",
        "team1": {"name": "India", "shortName": "IND"},
        "team2": {"name": "Australia", "shortName": "AUS"}
    },
    "miniscore": {
        "status": "Australia opt to bowl",
        "batsmanStriker": {"batName": "Shubman Gill", "batRuns": 54, "batBalls": 61},
        "bowlerStriker": {"bowlName": "Josh Hazlewood", "bowlOvs": 7.0, "bowlRuns": 30, "bowlWkts": 1},
        "matchScoreDetails": {
            "state": "In Progress",
            "inningsScoreList": [
                {"inningsId": 1, "batTeamName": "IND", "score": 142, "wickets": 2, "overs": 26.4}
            ]
        }
    }
}"#;

const SCORECARD_HTML: &str = r#"<div id="innings_1">
    <div class="cb-col cb-col-100 cb-scrd-itms">
        <div class="cb-col cb-col-25"><a href="/profiles/11808/shubman-gill">Shubman Gill</a></div>
        <div class="cb-col cb-col-33"><span class="text-gray">batting</span></div>
        <div class="cb-col cb-col-8">54</div><div class="cb-col cb-col-8">61</div>
        <div class="cb-col cb-col-8">6</div><div class="cb-col cb-col-8">1</div>
        <div class="cb-col cb-col-8">88.52</div>
    </div>
    <div class="cb-col cb-col-100 cb-scrd-itms">
        <div class="cb-col cb-col-38"><a href="/profiles/8117/josh-hazlewood">Josh Hazlewood</a></div>
        <div class="cb-col cb-col-8">7.0</div><div class="cb-col cb-col-8">1</div>
        <div class="cb-col cb-col-10">30</div><div class="cb-col cb-col-8">1</div>
        <div class="cb-col cb-col-8">0</div><div class="cb-col cb-col-8">2</div>
        <div class="cb-col cb-col-10">4.29</div>
    </div>
</div>"#;

fn crictty_cmd() -> Command {
    Command::cargo_bin("crictty").unwrap()
}

fn serve_match(server: &MockServer, id: u32) {
    server.mock(|when, then| {
        when.method(GET).path(format!("/api/mcenter/comm/{}", id));
        then.status(200)
            .header("content-type", "application/json")
            .body(SUMMARY_JSON);
    });
    server.mock(|when, then| {
        when.method(GET).path(format!("/api/mcenter/scorecard/{}", id));
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body(SCORECARD_HTML);
    });
}

#[test]
fn once_prints_pinned_scoreboard() {
    let server = MockServer::start();
    serve_match(&server, 4411);

    crictty_cmd()
        .args(["--once", "--match-id", "4411", "--api-base"])
        .arg(server.url(""))
        .assert()
        .success()
        .stdout(predicate::str::contains("IND vs AUS - ODI"))
        .stdout(predicate::str::contains("IND 142/2 (26.4)"))
        .stdout(predicate::str::contains("Shubman Gill 54(61)*"))
        .stdout(predicate::str::contains("Match id : 4411"))
        .stderr(predicate::str::contains("Fetching the scoreboard"));
}

#[test]
fn once_json_emits_match_snapshot() {
    let server = MockServer::start();
    serve_match(&server, 4411);

    let output = crictty_cmd()
        .args(["--once", "--json", "-m", "4411", "--api-base"])
        .arg(server.url(""))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let matches: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let first = &matches[0];
    assert_eq!(first["match_id"], 4411);
    assert_eq!(first["short_name"], "IND vs AUS");
    assert_eq!(first["innings"][0]["number"], 1);
    assert_eq!(first["innings"][0]["batsmen"][0]["name"], "Shubman Gill");
    assert_eq!(first["innings"][0]["bowlers"][0]["overs"], "7.0");
}

#[test]
fn once_bowling_flag_starts_on_bowling_card() {
    let server = MockServer::start();
    serve_match(&server, 4411);

    crictty_cmd()
        .args(["--once", "--bowling", "--match-id", "4411", "--api-base"])
        .arg(server.url(""))
        .assert()
        .success()
        .stdout(predicate::str::contains("[Bowl]"))
        .stdout(predicate::str::contains("Josh Hazlewood"))
        .stdout(predicate::str::contains("4.29"));
}

#[test]
fn no_live_matches_is_not_an_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200).body(
            r#"<nav class="cb-mat-mnu"><a href="/">MATCHES</a><a href="/live-cricket-scores/1/x">A vs B - Stumps</a></nav>"#,
        );
    });

    crictty_cmd()
        .args(["--once", "--api-base"])
        .arg(server.url(""))
        .assert()
        .success()
        .stdout(predicate::str::contains("No live matches found"));
}

#[test]
fn failed_initial_load_exits_with_one() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/mcenter/comm/99");
        then.status(500);
    });

    crictty_cmd()
        .args(["--once", "--match-id", "99", "--api-base"])
        .arg(server.url(""))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to load"));
}

#[test]
fn zero_tick_rate_is_rejected() {
    crictty_cmd()
        .args(["--tick-rate", "0", "--once"])
        .assert()
        .failure();
}
