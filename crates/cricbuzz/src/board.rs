// ABOUTME: LiveBoard keeps the current snapshot of tracked matches and refreshes it atomically.
// ABOUTME: Tracks either one pinned match id or every match the homepage lists as live.

use crictty_scorecard::MatchInfo;
use tracing::info;

use crate::client::Client;
use crate::error::Error;

/// Which matches a board follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tracking {
    /// A single match chosen by id, regardless of its live state.
    Pinned(u32),
    /// Whatever the homepage currently advertises as live.
    Live,
}

/// The set of matches being displayed, plus the client that refreshes them.
///
/// A refresh builds a complete replacement before touching the current
/// snapshot, so a failed refresh leaves the previous data in place.
#[derive(Debug)]
pub struct LiveBoard {
    client: Client,
    mode: Tracking,
    matches: Vec<MatchInfo>,
}

impl LiveBoard {
    /// Resolves one match and tracks it from now on.
    pub async fn pinned(client: Client, match_id: u32) -> Result<Self, Error> {
        let info = client.resolve(match_id).await?;
        info!(match_id, name = %info.short_name, "tracking pinned match");
        Ok(Self {
            client,
            mode: Tracking::Pinned(match_id),
            matches: vec![info],
        })
    }

    /// Discovers and resolves every live match.
    pub async fn live(client: Client) -> Result<Self, Error> {
        let matches = client.live_matches().await?;
        info!(count = matches.len(), "tracking live matches");
        Ok(Self {
            client,
            mode: Tracking::Live,
            matches,
        })
    }

    /// Replaces the snapshot with freshly resolved data.
    pub async fn refresh(&mut self) -> Result<(), Error> {
        let next = match self.mode {
            Tracking::Pinned(match_id) => {
                let mut info = self.client.resolve(match_id).await?;
                if let Some(prev) = self.matches.first() {
                    info.short_name = prev.short_name.clone();
                }
                vec![info]
            }
            Tracking::Live => self.client.live_matches().await?,
        };

        info!(count = next.len(), "refreshed matches");
        self.matches = next;
        Ok(())
    }

    pub fn matches(&self) -> &[MatchInfo] {
        &self.matches
    }

    /// Display names in board order, one per tab.
    pub fn match_names(&self) -> Vec<String> {
        self.matches.iter().map(MatchInfo::display_name).collect()
    }

    pub fn mode(&self) -> Tracking {
        self.mode
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}
