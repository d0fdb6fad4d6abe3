use super::*;
use serde::Serialize;
use thou_core::*;

/// Name shown for a history entry whose player is unknown.
pub const SOMEONE: &str = "Someone";

/// One line of the roll history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub text: String,
    pub mine: bool,
}

/// Roll history, shown newest first.
#[derive(Debug, Clone)]
pub struct History {
    entries: Ledger<HistoryEntry>,
}

impl Default for History {
    fn default() -> Self {
        Self {
            entries: Ledger::new(HISTORY_LIMIT),
        }
    }
}

impl History {
    /// Records a roll. Entries by the local seat read "You".
    pub fn record(&mut self, player: &str, outcomes: &str, state: &TableState, me: Option<Seat>) {
        let mine = me.is_some() && state.seat_of(player) == me;
        let who = if mine { "You" } else { player };
        self.entries.push(HistoryEntry {
            text: format!("{} rolled: {}", who, outcomes),
            mine,
        });
    }
    pub fn clear(&mut self) {
        self.entries.clear();
    }
    /// Newest first.
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.newest()
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
