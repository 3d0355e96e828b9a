// ABOUTME: Scorecard extractor turning innings_N containers into batting and bowling tables.
// ABOUTME: Walks fixed-width row groups, classifies each row and maps cells by position.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::classify::{classify_row, RowKind, MIN_ROW_CELLS};
use crate::error::ExtractError;
use crate::models::{BatsmanRecord, BowlerRecord, InningsRecord};
use crate::sanitize::{collapse_whitespace, decode_entities, sanitize};
use crate::CATEGORY_LABELS;

/// Highest innings number a match can have.
pub const MAX_INNINGS: u8 = 4;

const ROW_SELECTOR: &str = "div.cb-scrd-itms";
const CELL_SELECTOR: &str = "div";

const BATTING_COLUMNS: usize = 7;
const BOWLING_COLUMNS: usize = 8;

fn selector(css: &str) -> Result<Selector, ExtractError> {
    Selector::parse(css).map_err(|e| ExtractError::parse(format!("selector {:?}: {}", css, e)))
}

/// Extracts every innings present in a scorecard document.
///
/// Containers are looked up as `div[id="innings_N"]` for N in 1..=4. Missing
/// innings are skipped, so the result can hold e.g. innings 1 and 3 only.
pub fn extract_scorecard(markup: &str) -> Result<Vec<InningsRecord>, ExtractError> {
    let doc = Html::parse_document(markup);
    let rows = selector(ROW_SELECTOR)?;
    let cells = selector(CELL_SELECTOR)?;

    let mut innings = Vec::new();
    for number in 1..=MAX_INNINGS {
        let container_sel = selector(&format!("div[id=\"innings_{}\"]", number))?;
        let Some(container) = doc.select(&container_sel).next() else {
            continue;
        };

        let record = extract_innings(container, number, &rows, &cells);
        debug!(
            innings = number,
            batsmen = record.batsmen.len(),
            bowlers = record.bowlers.len(),
            "extracted innings"
        );
        innings.push(record);
    }

    Ok(innings)
}

fn extract_innings(
    container: ElementRef,
    number: u8,
    rows: &Selector,
    cells: &Selector,
) -> InningsRecord {
    let mut record = InningsRecord {
        number,
        ..Default::default()
    };

    for row in container.select(rows) {
        let values: Vec<String> = row.select(cells).map(cell_text).collect();
        if values.len() < MIN_ROW_CELLS {
            continue;
        }

        match classify_row(&values[0], &values[1], values.len()) {
            RowKind::Batting => {
                if values.len() < BATTING_COLUMNS {
                    debug!(innings = number, cells = values.len(), "short batting row");
                }
                if let Some(batsman) = batsman_from_cells(values) {
                    record.batsmen.push(batsman);
                }
            }
            RowKind::Bowling => {
                if values.len() < BOWLING_COLUMNS {
                    debug!(innings = number, cells = values.len(), "short bowling row");
                }
                if let Some(bowler) = bowler_from_cells(values) {
                    record.bowlers.push(bowler);
                }
            }
            RowKind::Rejected => {}
        }
    }

    record
}

/// Sanitized, entity-decoded display text of one cell.
///
/// Whitespace is normalised again after decoding since `&nbsp;` decodes to a space.
fn cell_text(cell: ElementRef) -> String {
    collapse_whitespace(&decode_entities(&sanitize(&cell.inner_html())))
}

/// Maps cells 0..=6 onto a batting record; cells past the end stay empty.
fn batsman_from_cells(values: Vec<String>) -> Option<BatsmanRecord> {
    let mut cells = values.into_iter();
    let mut next = || cells.next().unwrap_or_default();

    let batsman = BatsmanRecord {
        name: next(),
        status: next(),
        runs: next(),
        balls: next(),
        fours: next(),
        sixes: next(),
        strike_rate: next(),
    };

    let name = batsman.name.to_lowercase();
    if name.is_empty() || CATEGORY_LABELS.iter().any(|label| name.contains(label)) {
        return None;
    }
    Some(batsman)
}

/// Maps cells 0..=7 onto a bowling record; cells past the end stay empty.
fn bowler_from_cells(values: Vec<String>) -> Option<BowlerRecord> {
    let mut cells = values.into_iter();
    let mut next = || cells.next().unwrap_or_default();

    let bowler = BowlerRecord {
        name: next(),
        overs: next(),
        maidens: next(),
        runs: next(),
        wickets: next(),
        no_balls: next(),
        wides: next(),
        economy: next(),
    };

    let name = bowler.name.to_lowercase();
    if name.is_empty() || CATEGORY_LABELS.contains(&name.as_str()) {
        return None;
    }
    Some(bowler)
}
