// ABOUTME: Live match discovery from the homepage navigation menu.
// ABOUTME: Admits "<name> - Live" anchors and pulls the numeric match id out of their href.

use scraper::{Html, Selector};
use tracing::debug;

use crate::models::LiveMatchEntry;

const NAV_ANCHOR_SELECTOR: &str = "nav.cb-mat-mnu a";
const HEADING_LABEL: &str = "MATCHES";
const LIVE_STATE: &str = "Live";

/// Scans the homepage navigation for matches currently in progress.
///
/// Anchors are visited in document order. Entries with a missing or
/// non-numeric link are skipped; an empty list is a normal result.
pub fn discover_live_matches(homepage: &str) -> Vec<LiveMatchEntry> {
    let doc = Html::parse_document(homepage);
    let Ok(anchors) = Selector::parse(NAV_ANCHOR_SELECTOR) else {
        return Vec::new();
    };

    let mut entries = Vec::new();
    for anchor in doc.select(&anchors) {
        let text = anchor.text().collect::<Vec<_>>().join(" ");
        let text = text.split_whitespace().collect::<Vec<_>>().join(" ");

        match live_entry(&text, anchor.value().attr("href")) {
            Some(entry) => entries.push(entry),
            None => debug!(text = %text, "skipping nav anchor"),
        }
    }

    entries
}

/// Builds an entry from one anchor's text and href, if it is a live match.
fn live_entry(text: &str, href: Option<&str>) -> Option<LiveMatchEntry> {
    if text.is_empty() || text == HEADING_LABEL {
        return None;
    }

    let (name, state) = text.split_once('-')?;
    if state.trim() != LIVE_STATE {
        return None;
    }

    let match_id = match_id_from_href(href?)?;
    Some(LiveMatchEntry {
        name: name.trim().to_string(),
        match_id,
    })
}

/// Third `/`-separated segment of a link such as `/live-cricket-scores/12345/ind-vs-aus`.
fn match_id_from_href(href: &str) -> Option<u32> {
    href.split('/').nth(2)?.parse::<u32>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn nav(anchors: &[(&str, Option<&str>)]) -> String {
        let links: String = anchors
            .iter()
            .map(|(text, href)| match href {
                Some(h) => format!("<a href=\"{}\">{}</a>", h, text),
                None => format!("<a>{}</a>", text),
            })
            .collect();
        format!(
            "<html><body><nav class=\"cb-mat-mnu\">{}</nav></body></html>",
            links
        )
    }

    #[test]
    fn admits_only_live_entries() {
        let html = nav(&[
            ("India - Live", Some("/x/123/y")),
            ("MATCHES", Some("")),
            ("Aus - Result", Some("/x/1/y")),
        ]);
        assert_eq!(
            discover_live_matches(&html),
            vec![LiveMatchEntry {
                name: "India".to_string(),
                match_id: 123
            }]
        );
    }

    #[test]
    fn keeps_document_order() {
        let html = nav(&[
            ("ENG vs NZ - Live", Some("/live-cricket-scores/200/eng-vs-nz")),
            ("PAK vs SA - Upcoming", Some("/live-cricket-scores/300/pak-vs-sa")),
            ("IND vs AUS - Live", Some("/live-cricket-scores/100/ind-vs-aus")),
        ]);
        let ids: Vec<u32> = discover_live_matches(&html)
            .into_iter()
            .map(|e| e.match_id)
            .collect();
        assert_eq!(ids, vec![200, 100]);
    }

    #[test]
    fn skips_bad_links() {
        let html = nav(&[
            ("A vs B - Live", None),
            ("C vs D - Live", Some("/short")),
            ("E vs F - Live", Some("/x/not-a-number/y")),
            ("G vs H - Live", Some("/x/-5/y")),
            ("I vs J - Live", Some("/x/77/y")),
        ]);
        assert_eq!(
            discover_live_matches(&html),
            vec![LiveMatchEntry {
                name: "I vs J".to_string(),
                match_id: 77
            }]
        );
    }

    #[test]
    fn state_must_be_exactly_live() {
        let html = nav(&[
            ("A vs B - live", Some("/x/1/y")),
            ("C vs D - Live Now", Some("/x/2/y")),
            ("No separator Live", Some("/x/3/y")),
        ]);
        assert!(discover_live_matches(&html).is_empty());
    }

    #[test]
    fn anchors_outside_nav_ignored() {
        let html = "<html><body><a href=\"/x/9/y\">X - Live</a></body></html>";
        assert!(discover_live_matches(html).is_empty());
    }

    #[test]
    fn empty_document_is_not_an_error() {
        assert!(discover_live_matches("").is_empty());
    }
}
