// ABOUTME: Navigation state for the scoreboard: selected match, innings and batting/bowling card.
// ABOUTME: Key lines are parsed into KeyCommands and applied against the current match snapshot.

use crictty_scorecard::MatchInfo;

/// A single keyboard command read from stdin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    PrevMatch,
    NextMatch,
    PrevInnings,
    NextInnings,
    ToggleCard,
    Quit,
}

impl KeyCommand {
    /// Parses one input line. Only the first non-blank character counts.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().chars().next()? {
            'h' => Some(Self::PrevMatch),
            'l' => Some(Self::NextMatch),
            'k' => Some(Self::PrevInnings),
            'j' => Some(Self::NextInnings),
            'b' => Some(Self::ToggleCard),
            'q' => Some(Self::Quit),
            _ => None,
        }
    }
}

/// What the user is currently looking at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewState {
    pub selected_match: usize,
    pub current_innings: usize,
    pub show_bowling: bool,
}

impl ViewState {
    pub fn new(show_bowling: bool) -> Self {
        Self {
            show_bowling,
            ..Self::default()
        }
    }

    /// Applies a navigation command. Returns true when the view changed.
    ///
    /// `Quit` is left to the caller and never changes the view.
    pub fn apply(&mut self, command: KeyCommand, matches: &[MatchInfo]) -> bool {
        let before = *self;
        match command {
            KeyCommand::PrevMatch => {
                if self.selected_match > 0 {
                    self.selected_match -= 1;
                    self.reset_match_view();
                }
            }
            KeyCommand::NextMatch => {
                if self.selected_match + 1 < matches.len() {
                    self.selected_match += 1;
                    self.reset_match_view();
                }
            }
            KeyCommand::PrevInnings => {
                self.current_innings = self.current_innings.saturating_sub(1);
            }
            KeyCommand::NextInnings => {
                let count = innings_count(matches, self.selected_match);
                if self.current_innings + 1 < count {
                    self.current_innings += 1;
                }
            }
            KeyCommand::ToggleCard => self.show_bowling = !self.show_bowling,
            KeyCommand::Quit => {}
        }
        *self != before
    }

    /// Pulls the selection back inside a freshly refreshed snapshot.
    pub fn clamp(&mut self, matches: &[MatchInfo]) {
        self.selected_match = self.selected_match.min(matches.len().saturating_sub(1));
        let count = innings_count(matches, self.selected_match);
        self.current_innings = self.current_innings.min(count.saturating_sub(1));
    }

    fn reset_match_view(&mut self) {
        self.current_innings = 0;
        self.show_bowling = false;
    }
}

fn innings_count(matches: &[MatchInfo], index: usize) -> usize {
    matches.get(index).map_or(0, |m| m.innings.len())
}
