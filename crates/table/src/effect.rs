use serde::Serialize;
use thou_core::*;
use thou_dto::ClientMessage;

/// Sound cues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Cue {
    Roll,
    Nope,
    Wild,
    Chip,
    Win,
}

/// Where a flying chip lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Landing {
    Slot(Slot),
    Pot,
}

/// Work for the presentation shell, produced by the session in order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Effect {
    /// Send on the game channel.
    Emit(ClientMessage),
    /// Play a sound.
    Cue(Cue),
    /// Show a blocking message.
    Alert(String),
    /// Animate the dice area with rolled faces.
    Dice(Vec<String>),
    /// Animate a chip between two screen targets.
    Flight { from: Slot, to: Landing },
    /// The view changed.
    Redraw,
}

impl Effect {
    pub fn emitted(&self) -> Option<&ClientMessage> {
        match self {
            Effect::Emit(msg) => Some(msg),
            _ => None,
        }
    }
}
