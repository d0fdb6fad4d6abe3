use serde::Deserialize;
use serde::Serialize;
use thou_core::*;

/// Intents sent from this client to the server.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ClientMessage {
    CreateRoom,
    #[serde(rename_all = "camelCase")]
    JoinRoom { room_id: String },
    #[serde(rename_all = "camelCase")]
    JoinSeat {
        room_id: String,
        name: String,
        avatar: String,
        color: String,
    },
    #[serde(rename_all = "camelCase")]
    RollDice { room_id: String },
    #[serde(rename_all = "camelCase")]
    ResetGame { room_id: String },
    #[serde(rename_all = "camelCase")]
    ResolveWilds {
        room_id: String,
        actions: Vec<WildAction>,
    },
    #[serde(rename_all = "camelCase")]
    TripleWildChoice { room_id: String, choice: TripleChoice },
    #[serde(rename_all = "camelCase")]
    ChatMessage {
        room_id: String,
        name: String,
        text: String,
    },
}

/// One decision for a Wild die, in the order the player made it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WildAction {
    Cancel { target: Direction },
    Steal { from: Seat },
}

/// Bonus picked after rolling three Wilds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TripleChoice {
    #[serde(rename = "takePot")]
    TakePot,
    #[serde(rename = "steal3")]
    Steal3,
}

impl ClientMessage {
    /// Wire name of the event, for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::CreateRoom => "create-room",
            Self::JoinRoom { .. } => "join-room",
            Self::JoinSeat { .. } => "join-seat",
            Self::RollDice { .. } => "roll-dice",
            Self::ResetGame { .. } => "reset-game",
            Self::ResolveWilds { .. } => "resolve-wilds",
            Self::TripleWildChoice { .. } => "triple-wild-choice",
            Self::ChatMessage { .. } => "chat-message",
        }
    }
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("serialize client message")
    }
}

impl std::fmt::Display for ClientMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    #[test]
    fn resolve_wilds_wire_shape() {
        let msg = ClientMessage::ResolveWilds {
            room_id: "ABCD".to_string(),
            actions: vec![
                WildAction::Cancel {
                    target: Direction::Left,
                },
                WildAction::Steal { from: 2 },
            ],
        };
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            value,
            json!({
                "event": "resolve-wilds",
                "data": {
                    "roomId": "ABCD",
                    "actions": [
                        { "type": "cancel", "target": "Left" },
                        { "type": "steal", "from": 2 }
                    ]
                }
            })
        );
    }
    #[test]
    fn triple_choice_wire_shape() {
        let msg = ClientMessage::TripleWildChoice {
            room_id: "ABCD".to_string(),
            choice: TripleChoice::TakePot,
        };
        assert_eq!(
            serde_json::to_value(&msg).unwrap()["data"]["choice"],
            json!({ "type": "takePot" })
        );
        assert_eq!(
            serde_json::to_value(TripleChoice::Steal3).unwrap(),
            json!({ "type": "steal3" })
        );
    }
    #[test]
    fn create_room_has_no_payload() {
        let value = serde_json::to_value(ClientMessage::CreateRoom).unwrap();
        assert_eq!(value, json!({ "event": "create-room" }));
    }
    #[test]
    fn join_seat_uses_camel_case_room() {
        let msg = ClientMessage::JoinSeat {
            room_id: "WXYZ".to_string(),
            name: "Alice".to_string(),
            avatar: "cat.png".to_string(),
            color: "#ff0000".to_string(),
        };
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value["event"], "join-seat");
        assert_eq!(value["data"]["roomId"], "WXYZ");
        assert_eq!(value["data"]["avatar"], "cat.png");
    }
}
