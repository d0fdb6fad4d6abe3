use serde::Serialize;
use thou_core::*;
use thou_dto::Broadcast;

/// What the client knows about one seat.
/// A seat without a name is empty and its other fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlayerRecord {
    pub name: Option<String>,
    pub chips: Chips,
    pub avatar: Option<String>,
    pub color: Option<String>,
    pub eliminated: bool,
    pub danger: bool,
}

impl PlayerRecord {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }
    pub fn is_empty(&self) -> bool {
        self.name().is_none()
    }
    /// Occupied and still in the game.
    pub fn is_live(&self) -> bool {
        !self.is_empty() && !self.eliminated
    }
}

/// Client-side projection of the server's table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TableState {
    seats: [PlayerRecord; N],
    center_pot: Chips,
    current_player: Seat,
    game_started: bool,
}

impl TableState {
    pub fn seats(&self) -> &[PlayerRecord; N] {
        &self.seats
    }
    pub fn seat(&self, seat: Seat) -> Option<&PlayerRecord> {
        self.seats.get(seat)
    }
    pub fn name(&self, seat: Seat) -> Option<&str> {
        self.seat(seat).and_then(PlayerRecord::name)
    }
    /// First seat currently held by a player with this name.
    pub fn seat_of(&self, name: &str) -> Option<Seat> {
        self.seats.iter().position(|r| r.name() == Some(name))
    }
    pub fn center_pot(&self) -> Chips {
        self.center_pot
    }
    pub fn current_player(&self) -> Seat {
        self.current_player
    }
    pub fn game_started(&self) -> bool {
        self.game_started
    }
    pub fn is_eliminated(&self, seat: Seat) -> bool {
        self.seat(seat).map(|r| r.eliminated).unwrap_or(false)
    }
    /// Merges a broadcast: every present column replaces the local column
    /// wholesale, absent columns are left untouched.
    pub fn merge(&mut self, update: &Broadcast) {
        replace(update.players.as_ref(), &mut self.seats, |r, v| {
            r.name = v.cloned().flatten()
        });
        replace(update.chips.as_ref(), &mut self.seats, |r, v| {
            r.chips = v.copied().flatten().unwrap_or(0)
        });
        replace(update.avatars.as_ref(), &mut self.seats, |r, v| {
            r.avatar = v.cloned().flatten()
        });
        replace(update.colors.as_ref(), &mut self.seats, |r, v| {
            r.color = v.cloned().flatten()
        });
        replace(update.eliminated.as_ref(), &mut self.seats, |r, v| {
            r.eliminated = v.copied().flatten().unwrap_or(false)
        });
        replace(update.danger.as_ref(), &mut self.seats, |r, v| {
            r.danger = v.copied().flatten().unwrap_or(false)
        });
        if let Some(pot) = update.center_pot {
            self.center_pot = pot;
        }
        if let Some(seat) = update.current_player {
            self.current_player = seat;
        }
        if let Some(started) = update.game_started {
            self.game_started = started;
        }
    }
}

/// Writes one incoming column across all seats; positions past the end of
/// the column are written as missing.
fn replace<T>(
    column: Option<&Vec<T>>,
    seats: &mut [PlayerRecord; N],
    set: impl Fn(&mut PlayerRecord, Option<&T>),
) {
    if let Some(column) = column {
        seats
            .iter_mut()
            .enumerate()
            .for_each(|(i, record)| set(record, column.get(i)));
    }
}

/// The local state mirror: the table projection plus the name this client
/// is known by in chat.
#[derive(Debug, Clone, Default)]
pub struct Mirror {
    state: TableState,
    display: Option<String>,
}

impl Mirror {
    pub fn state(&self) -> &TableState {
        &self.state
    }
    /// Name of the local seat as last seen in a broadcast.
    pub fn display_name(&self) -> Option<&str> {
        self.display.as_deref()
    }
    /// Applies an inbound state broadcast and refreshes the display name
    /// when the local seat is named.
    pub fn apply_broadcast(&mut self, update: &Broadcast, me: Option<Seat>) {
        self.state.merge(update);
        if let Some(name) = me.and_then(|seat| self.state.name(seat)) {
            if self.display.as_deref() != Some(name) {
                log::debug!("[mirror] display name is now {}", name);
                self.display = Some(name.to_string());
            }
        }
    }
    /// Returns every table field to its empty value. The display name
    /// survives so chat keeps working until the next broadcast.
    pub fn apply_reset(&mut self) {
        self.state = TableState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    fn names(names: [Option<&str>; N]) -> Option<Vec<Option<String>>> {
        Some(names.iter().map(|n| n.map(str::to_string)).collect())
    }
    #[test]
    fn absent_fields_are_retained() {
        let mut state = TableState::default();
        state.merge(&Broadcast {
            players: names([Some("Alice"), Some("Bob"), None, None]),
            chips: Some(vec![Some(3), Some(4), None, None]),
            center_pot: Some(7),
            current_player: Some(1),
            game_started: Some(true),
            ..Broadcast::default()
        });
        state.merge(&Broadcast {
            center_pot: Some(9),
            ..Broadcast::default()
        });
        assert_eq!(state.name(0), Some("Alice"));
        assert_eq!(state.seat(1).unwrap().chips, 4);
        assert_eq!(state.center_pot(), 9);
        assert_eq!(state.current_player(), 1);
        assert!(state.game_started());
    }
    #[test]
    fn present_columns_replace_wholesale() {
        let mut state = TableState::default();
        state.merge(&Broadcast {
            players: names([Some("Alice"), Some("Bob"), Some("Cy"), None]),
            ..Broadcast::default()
        });
        state.merge(&Broadcast {
            players: Some(vec![Some("Dee".to_string())]),
            ..Broadcast::default()
        });
        assert_eq!(state.name(0), Some("Dee"));
        assert_eq!(state.name(1), None);
        assert_eq!(state.name(2), None);
    }
    #[test]
    fn negative_chips_are_accepted() {
        let mut state = TableState::default();
        state.merge(&Broadcast {
            chips: Some(vec![Some(-2), None, Some(5), Some(1)]),
            ..Broadcast::default()
        });
        assert_eq!(state.seat(0).unwrap().chips, -2);
        assert_eq!(state.seat(1).unwrap().chips, 0);
    }
    #[test]
    fn empty_name_counts_as_empty_seat() {
        let mut state = TableState::default();
        state.merge(&Broadcast {
            players: Some(vec![Some(String::new()), Some("Bob".to_string())]),
            ..Broadcast::default()
        });
        assert!(state.seat(0).unwrap().is_empty());
        assert_eq!(state.seat_of("Bob"), Some(1));
        assert_eq!(state.seat_of(""), None);
    }
    #[test]
    fn display_name_follows_local_seat() {
        let mut mirror = Mirror::default();
        mirror.apply_broadcast(
            &Broadcast {
                players: names([None, Some("Bob"), None, None]),
                ..Broadcast::default()
            },
            Some(0),
        );
        assert_eq!(mirror.display_name(), None);
        mirror.apply_broadcast(
            &Broadcast {
                players: names([Some("Ann"), Some("Bob"), None, None]),
                ..Broadcast::default()
            },
            Some(0),
        );
        assert_eq!(mirror.display_name(), Some("Ann"));
    }
    #[test]
    fn reset_clears_every_field() {
        let mut mirror = Mirror::default();
        mirror.apply_broadcast(
            &Broadcast {
                players: names([Some("Ann"), Some("Bob"), None, None]),
                chips: Some(vec![Some(3), Some(3), None, None]),
                eliminated: Some(vec![Some(false), Some(true), Some(false), Some(false)]),
                danger: Some(vec![Some(true), Some(false), Some(false), Some(false)]),
                center_pot: Some(4),
                current_player: Some(1),
                game_started: Some(true),
                ..Broadcast::default()
            },
            Some(0),
        );
        mirror.apply_reset();
        assert_eq!(mirror.state(), &TableState::default());
        assert!(mirror.state().seats().iter().all(|r| r.name.is_none()
            && r.chips == 0
            && !r.eliminated
            && !r.danger));
        assert_eq!(mirror.state().current_player(), 0);
        assert!(!mirror.state().game_started());
    }
}
