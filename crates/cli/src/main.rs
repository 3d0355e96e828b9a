// ABOUTME: CLI binary for crictty, live cricket scores in the terminal.
// ABOUTME: Loads live or pinned matches, prints the scoreboard and refreshes it on a fixed tick.

mod logging;
mod render;
mod view;

use std::io::{self, BufRead, IsTerminal, Write};
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crictty_cricbuzz::{Client, LiveBoard};
use tokio::sync::mpsc;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, warn};

use crate::view::{KeyCommand, ViewState};

#[derive(Parser, Debug)]
#[command(name = "crictty", version)]
#[command(about = "Live cricket scores in your terminal")]
struct Args {
    /// Match details refresh rate in milliseconds
    #[arg(short = 't', long = "tick-rate", default_value_t = 40000,
          value_parser = clap::value_parser!(u64).range(1..))]
    tick_rate: u64,

    /// ID of the match to follow live
    #[arg(short = 'm', long = "match-id")]
    match_id: Option<u32>,

    /// Print the scoreboard once and exit
    #[arg(long = "once")]
    once: bool,

    /// Print snapshots as JSON instead of the text scoreboard
    #[arg(long = "json")]
    json_output: bool,

    /// Start on the bowling card
    #[arg(long = "bowling")]
    bowling: bool,

    /// Serve every endpoint from this origin instead of cricbuzz.com
    #[arg(long = "api-base", hide = true)]
    api_base: Option<String>,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

/// Everything the watch loop reacts to.
#[derive(Debug)]
enum AppEvent {
    Tick,
    Key(KeyCommand),
    InputClosed,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    logging::init_cli_logger(args.verbose);

    let mut builder = Client::builder();
    if let Some(base) = &args.api_base {
        builder = builder.base_url(base);
    }
    let client = builder.build();

    eprintln!("Fetching the scoreboard...");
    let board = match args.match_id {
        Some(id) => LiveBoard::pinned(client, id).await,
        None => LiveBoard::live(client).await,
    };
    let board = match board {
        Ok(board) => board,
        Err(e) => {
            eprintln!("error: failed to load: {}", e);
            return ExitCode::from(1);
        }
    };

    let view = ViewState::new(args.bowling);
    let result = if args.once {
        print_snapshot(&board, &view, args.json_output, false)
    } else {
        watch(board, view, &args).await
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

/// Runs the interactive loop until `q` is read from stdin.
///
/// Refreshes are awaited inside the loop, so at most one is ever in flight.
async fn watch(mut board: LiveBoard, mut view: ViewState, args: &Args) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<AppEvent>(16);

    let ticker = tokio::spawn(run_ticker(tx.clone(), Duration::from_millis(args.tick_rate)));
    spawn_key_reader(tx);

    let json = args.json_output;
    print_snapshot(&board, &view, json, true)?;

    while let Some(event) = rx.recv().await {
        match event {
            AppEvent::Tick => match board.refresh().await {
                Ok(()) => {
                    view.clamp(board.matches());
                    print_snapshot(&board, &view, json, true)?;
                }
                Err(e) => warn!(error = %e, "refresh failed, keeping previous scoreboard"),
            },
            AppEvent::Key(KeyCommand::Quit) => break,
            AppEvent::Key(command) => {
                if view.apply(command, board.matches()) && !json {
                    print_snapshot(&board, &view, json, true)?;
                }
            }
            AppEvent::InputClosed => debug!("stdin closed, continuing on ticks only"),
        }
    }

    ticker.abort();
    Ok(())
}

async fn run_ticker(tx: mpsc::Sender<AppEvent>, period: Duration) {
    let mut ticks = interval_at(Instant::now() + period, period);
    ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
    loop {
        ticks.tick().await;
        if tx.send(AppEvent::Tick).await.is_err() {
            break;
        }
    }
}

/// Reads key lines on a dedicated thread; stdin reads block and would stall runtime shutdown.
fn spawn_key_reader(tx: mpsc::Sender<AppEvent>) {
    std::thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if let Some(command) = KeyCommand::parse(&line) {
                if tx.blocking_send(AppEvent::Key(command)).is_err() {
                    return;
                }
            }
        }
        let _ = tx.blocking_send(AppEvent::InputClosed);
    });
}

/// Watch mode prints JSON one snapshot per line and redraws text frames in place on a terminal.
fn print_snapshot(board: &LiveBoard, view: &ViewState, json: bool, watching: bool) -> Result<()> {
    let mut stdout = io::stdout().lock();
    if json {
        let out = if watching {
            serde_json::to_string(board.matches())
        } else {
            serde_json::to_string_pretty(board.matches())
        }
        .context("failed to serialize matches")?;
        writeln!(stdout, "{}", out)?;
    } else {
        if watching && stdout.is_terminal() {
            write!(stdout, "\x1b[2J\x1b[H")?;
        }
        write!(stdout, "{}", render::render_board(board.matches(), view))?;
    }
    stdout.flush()?;
    Ok(())
}
