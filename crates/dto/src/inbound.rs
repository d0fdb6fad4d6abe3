use serde::Deserialize;
use serde::Serialize;
use thou_core::*;

/// Events pushed by the server over the game channel.
/// Payloads are trusted as-is; the client performs no validation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ServerMessage {
    /// A room was created for this client, who becomes the host.
    #[serde(rename_all = "camelCase")]
    RoomCreated { room_id: String },
    /// This client entered an existing room by code.
    #[serde(rename_all = "camelCase")]
    RoomJoined { room_id: String },
    /// This client was given a seat.
    #[serde(rename_all = "camelCase")]
    SeatJoined { room_id: String, seat: Seat },
    /// Human-readable error, shown verbatim.
    ErrorMessage { message: String },
    /// Partial table snapshot; absent fields keep their previous value.
    StateUpdate(Broadcast),
    /// A seat is about to run out of time or chips.
    GraceWarning { seat: Seat, message: String },
    /// A seat left the game for good.
    PlayerEliminated { seat: Seat, name: String },
    /// Dice outcome of a turn.
    #[serde(rename_all = "camelCase")]
    RollResult {
        seat: Seat,
        outcomes: Vec<String>,
        outcomes_text: String,
    },
    /// A chip moved between seats or into the hub pot.
    #[serde(rename_all = "camelCase")]
    ChipTransfer {
        #[serde(default)]
        from_seat: Option<Seat>,
        #[serde(default)]
        to_seat: Option<Seat>,
        #[serde(rename = "type", default)]
        kind: Option<String>,
    },
    /// A line for the roll history that did not come from a roll-result.
    #[serde(rename_all = "camelCase")]
    HistoryEntry {
        #[serde(default)]
        player_name: Option<String>,
        outcomes_text: String,
    },
    /// The acting seat must distribute its Wild dice.
    RequestWildChoice { seat: Seat, outcomes: Vec<String> },
    /// The acting seat rolled three Wilds and picks a bonus.
    RequestTripleWildChoice { seat: Seat },
    /// The game ended.
    #[serde(rename_all = "camelCase")]
    GameOver {
        #[serde(default)]
        winner_seat: Option<Seat>,
        winner_name: String,
        pot: Chips,
    },
    /// The table was cleared.
    ResetGame,
    /// A chat line from any seat.
    ChatMessage { name: String, text: String },
}

/// Partial table snapshot. Each present column replaces the mirror's column
/// wholesale; absent or null columns leave it untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Broadcast {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub players: Option<Vec<Option<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chips: Option<Vec<Option<Chips>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatars: Option<Vec<Option<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<Option<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eliminated: Option<Vec<Option<bool>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub danger: Option<Vec<Option<bool>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center_pot: Option<Chips>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_player: Option<Seat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_started: Option<bool>,
}

impl ServerMessage {
    /// Wire name of the event, for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::RoomCreated { .. } => "room-created",
            Self::RoomJoined { .. } => "room-joined",
            Self::SeatJoined { .. } => "seat-joined",
            Self::ErrorMessage { .. } => "error-message",
            Self::StateUpdate(_) => "state-update",
            Self::GraceWarning { .. } => "grace-warning",
            Self::PlayerEliminated { .. } => "player-eliminated",
            Self::RollResult { .. } => "roll-result",
            Self::ChipTransfer { .. } => "chip-transfer",
            Self::HistoryEntry { .. } => "history-entry",
            Self::RequestWildChoice { .. } => "request-wild-choice",
            Self::RequestTripleWildChoice { .. } => "request-triple-wild-choice",
            Self::GameOver { .. } => "game-over",
            Self::ResetGame => "reset-game",
            Self::ChatMessage { .. } => "chat-message",
        }
    }
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("serialize server message")
    }
}

impl std::fmt::Display for ServerMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::RoomCreated { room_id } | Self::RoomJoined { room_id } => {
                write!(f, "{} {}", self.name(), room_id)
            }
            Self::SeatJoined { room_id, seat } => write!(f, "seat-joined {} P{}", room_id, seat),
            Self::RollResult { seat, outcomes_text, .. } => {
                write!(f, "roll-result P{}: {}", seat, outcomes_text)
            }
            Self::RequestWildChoice { seat, .. } | Self::RequestTripleWildChoice { seat } => {
                write!(f, "{} P{}", self.name(), seat)
            }
            _ => write!(f, "{}", self.name()),
        }
    }
}
