use super::*;
use serde::Serialize;
use thou_core::*;

/// Shown in the turn indicator when nobody can act.
pub const WAITING: &str = "Current turn: Waiting...";
/// Chip label of an eliminated seat.
pub const ELIMINATED: &str = "ELIMINATED";

/// Which of the mutually exclusive seat states is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    Empty,
    Normal,
    Danger,
    Eliminated,
}

/// Everything drawn in one screen slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatView {
    pub seat: Seat,
    pub slot: Slot,
    pub name: String,
    pub chips: String,
    pub avatar: Option<String>,
    pub border: Option<String>,
    pub status: Status,
    pub active: bool,
    pub glow: Option<String>,
}

/// Projection of the mirror onto the table layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableView {
    /// In logical seat order; seats without a screen slot are omitted.
    pub seats: Vec<SeatView>,
    pub pot: String,
    pub turn: String,
    pub roll: bool,
}

impl TableView {
    pub fn active(&self) -> Option<&SeatView> {
        self.seats.iter().find(|s| s.active)
    }
    pub fn at(&self, slot: Slot) -> Option<&SeatView> {
        self.seats.iter().find(|s| s.slot == slot)
    }
}

/// Seat that gets the turn highlight: the current player, unless that
/// seat is empty or eliminated.
pub fn active_seat(state: &TableState) -> Option<Seat> {
    let seat = state.current_player();
    state
        .seat(seat)
        .filter(|r| r.is_live())
        .map(|_| seat)
}

/// The roll control is live only on the local seat's turn in a running
/// game, and never for an eliminated seat.
pub fn roll_allowed(state: &TableState, me: Option<Seat>) -> bool {
    match me {
        Some(seat) => {
            state.game_started() && seat == state.current_player() && !state.is_eliminated(seat)
        }
        None => false,
    }
}

/// Label under a seat's name. Elimination outranks danger.
pub fn chip_label(record: &PlayerRecord) -> (Status, String) {
    match (record.eliminated, record.danger) {
        (true, _) => (Status::Eliminated, ELIMINATED.to_string()),
        (false, true) => (Status::Danger, format!("Chips: {} ⚠️ DANGER", record.chips)),
        (false, false) => (Status::Normal, format!("Chips: {}", record.chips)),
    }
}

/// Derives the table view from the mirror. Running it twice against the
/// same inputs yields the same view.
pub fn render(state: &TableState, map: &SeatMap, me: Option<Seat>) -> TableView {
    let active = active_seat(state);
    let seats = state
        .seats()
        .iter()
        .enumerate()
        .filter_map(|(seat, record)| map.slot(seat).map(|slot| (seat, slot, record)))
        .map(|(seat, slot, record)| match record.name() {
            None => SeatView {
                seat,
                slot,
                name: String::new(),
                chips: String::new(),
                avatar: None,
                border: Some(EMPTY_BORDER.to_string()),
                status: Status::Empty,
                active: false,
                glow: None,
            },
            Some(name) => {
                let (status, chips) = chip_label(record);
                let active = active == Some(seat);
                SeatView {
                    seat,
                    slot,
                    name: name.to_string(),
                    chips,
                    avatar: record.avatar.clone(),
                    border: record.color.clone(),
                    status,
                    active,
                    glow: active.then(|| {
                        record
                            .color
                            .clone()
                            .unwrap_or_else(|| ACTIVE_GLOW.to_string())
                    }),
                }
            }
        })
        .collect();
    let turn = match active.and_then(|seat| state.name(seat).map(|n| (seat, n))) {
        Some((seat, name)) => format!("Player {}: {}", seat + 1, name),
        None => WAITING.to_string(),
    };
    TableView {
        seats,
        pot: format!("Hub Pot: {}", state.center_pot()),
        turn,
        roll: roll_allowed(state, me),
    }
}
