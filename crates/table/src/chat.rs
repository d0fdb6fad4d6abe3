use super::*;
use serde::Serialize;
use thou_core::*;
use thou_dto::ClientMessage;

/// Sender name used before the local seat's name is known.
pub const GUEST: &str = "Guest";

/// One received chat line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatLine {
    pub name: String,
    pub text: String,
    pub color: &'static str,
}

/// Chat relay: composes outbound lines and keeps the most recent inbound ones.
#[derive(Debug, Clone)]
pub struct Chat {
    lines: Ledger<ChatLine>,
}

impl Default for Chat {
    fn default() -> Self {
        Self {
            lines: Ledger::new(CHAT_LIMIT),
        }
    }
}

impl Chat {
    /// Builds the outbound message for typed input, or nothing if the
    /// input is blank.
    pub fn compose(text: &str, name: Option<&str>, room: &str) -> Option<ClientMessage> {
        let text = text.trim();
        match text.is_empty() {
            true => None,
            false => Some(ClientMessage::ChatMessage {
                room_id: room.to_string(),
                name: name.unwrap_or(GUEST).to_string(),
                text: text.to_string(),
            }),
        }
    }
    /// Appends a line colored by the sender's current seat.
    pub fn receive(&mut self, name: String, text: String, state: &TableState) {
        let color = color_of(&name, state);
        self.lines.push(ChatLine { name, text, color });
    }
    pub fn clear(&mut self) {
        self.lines.clear();
    }
    /// Oldest first.
    pub fn lines(&self) -> impl Iterator<Item = &ChatLine> {
        self.lines.iter()
    }
    pub fn len(&self) -> usize {
        self.lines.len()
    }
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Seat color for a sender, neutral when the name is not seated.
pub fn color_of(name: &str, state: &TableState) -> &'static str {
    state
        .seat_of(name)
        .and_then(|seat| SEAT_COLORS.get(seat).copied())
        .unwrap_or(NEUTRAL_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use thou_dto::Broadcast;
    fn seated() -> TableState {
        let mut state = TableState::default();
        state.merge(&Broadcast {
            players: Some(vec![None, Some("Bob".to_string()), None, None]),
            ..Broadcast::default()
        });
        state
    }
    #[test]
    fn compose_trims_and_skips_blank() {
        assert_eq!(Chat::compose("   ", Some("Ann"), "ROOM"), None);
        assert_eq!(
            Chat::compose("  hi  ", None, "ROOM"),
            Some(ClientMessage::ChatMessage {
                room_id: "ROOM".to_string(),
                name: GUEST.to_string(),
                text: "hi".to_string(),
            })
        );
    }
    #[test]
    fn lines_colored_by_seat() {
        let mut chat = Chat::default();
        chat.receive("Bob".to_string(), "yo".to_string(), &seated());
        chat.receive("Zed".to_string(), "hey".to_string(), &seated());
        let lines = chat.lines().collect::<Vec<_>>();
        assert_eq!(lines[0].color, SEAT_COLORS[1]);
        assert_eq!(lines[1].color, NEUTRAL_COLOR);
    }
    #[test]
    fn keeps_last_fifty() {
        let mut chat = Chat::default();
        for i in 0..60 {
            chat.receive("Bob".to_string(), i.to_string(), &seated());
        }
        assert_eq!(chat.len(), CHAT_LIMIT);
        assert_eq!(chat.lines().next().map(|l| l.text.as_str()), Some("10"));
    }
}
