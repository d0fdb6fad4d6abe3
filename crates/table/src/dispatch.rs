use super::*;
use serde::Deserialize;
use serde::Serialize;
use std::time::Duration;
use thou_core::*;
use thou_dto::ClientMessage;
use thou_dto::TripleChoice;
use thou_dto::WildAction;

/// Room code and seat of this client. The room may change until a seat is
/// assigned; after that both are fixed for the session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Identity {
    room: Option<String>,
    seat: Option<Seat>,
}

impl Identity {
    pub fn room(&self) -> Result<&str, ClientError> {
        self.room.as_deref().ok_or(ClientError::NoRoom)
    }
    pub fn seat(&self) -> Option<Seat> {
        self.seat
    }
    /// Room and seat, when both are known.
    pub fn seated(&self) -> Result<(&str, Seat), ClientError> {
        match (self.room.as_deref(), self.seat) {
            (Some(room), Some(seat)) => Ok((room, seat)),
            _ => Err(ClientError::NotSeated),
        }
    }
    /// Records the room code. Ignored once seated.
    pub fn enter(&mut self, room: &str) -> bool {
        match self.seat {
            Some(_) => {
                log::warn!("[identity] already seated, ignoring room {}", room);
                false
            }
            None => {
                self.room = Some(room.to_string());
                true
            }
        }
    }
    /// Records the seat assignment. The first assignment sticks.
    pub fn sit(&mut self, room: &str, seat: Seat) -> bool {
        match self.seat {
            Some(mine) => {
                log::warn!("[identity] already at P{}, ignoring P{}", mine, seat);
                false
            }
            None => {
                self.room = Some(room.to_string());
                self.seat = Some(seat);
                true
            }
        }
    }
}

/// A player gesture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "kebab-case")]
pub enum Intent {
    CreateRoom,
    JoinRoom {
        code: String,
    },
    JoinSeat {
        name: String,
        #[serde(default)]
        avatar: String,
        #[serde(default)]
        color: String,
    },
    Roll,
    Reset,
    PlayAgain,
    Chat {
        text: String,
    },
    /// Toggle a wild panel control by position.
    Pick {
        index: usize,
    },
    Cancel {
        direction: Direction,
    },
    Steal {
        seat: Seat,
    },
    Confirm,
    Triple {
        choice: TripleChoice,
    },
}

impl Session {
    /// Applies a player gesture after local checks only. Failed checks come
    /// back as errors to show the player; nothing is sent for them.
    pub fn dispatch(&mut self, intent: Intent, now: Duration) -> Result<Vec<Effect>, ClientError> {
        log::debug!("[session] intent {:?} at {:?}", intent, now);
        match intent {
            Intent::CreateRoom => Ok(vec![Effect::Emit(ClientMessage::CreateRoom)]),
            Intent::JoinRoom { code } => {
                let code = code.trim().to_uppercase();
                match code.is_empty() {
                    true => Err(ClientError::EmptyRoomCode),
                    false => Ok(vec![Effect::Emit(ClientMessage::JoinRoom { room_id: code })]),
                }
            }
            Intent::JoinSeat {
                name,
                avatar,
                color,
            } => {
                let room = self.identity.room()?.to_string();
                let name = name.trim();
                match name.is_empty() {
                    true => Err(ClientError::EmptyName),
                    false => Ok(vec![Effect::Emit(ClientMessage::JoinSeat {
                        room_id: room,
                        name: name.to_string(),
                        avatar,
                        color,
                    })]),
                }
            }
            Intent::Roll => {
                let (room, seat) = self.identity.seated()?;
                let room = room.to_string();
                if seat != self.state().current_player() || !self.roll_enabled() {
                    log::debug!("[session] roll vetoed for P{}", seat);
                    return Ok(vec![Effect::Cue(Cue::Nope)]);
                }
                self.roll = false;
                Ok(vec![
                    Effect::Emit(ClientMessage::RollDice { room_id: room }),
                    Effect::Cue(Cue::Roll),
                    Effect::Redraw,
                ])
            }
            Intent::Reset => match self.identity.room() {
                Ok(room) => Ok(vec![Effect::Emit(ClientMessage::ResetGame {
                    room_id: room.to_string(),
                })]),
                Err(_) => Ok(vec![]),
            },
            Intent::PlayAgain => match self.identity.room().map(str::to_string) {
                Ok(room) => {
                    self.hide_overlay();
                    Ok(vec![
                        Effect::Redraw,
                        Effect::Emit(ClientMessage::ResetGame { room_id: room }),
                    ])
                }
                Err(_) => Ok(vec![]),
            },
            Intent::Chat { text } => {
                let room = self.identity.room()?;
                Ok(Chat::compose(&text, self.mirror.display_name(), room)
                    .map(Effect::Emit)
                    .into_iter()
                    .collect())
            }
            Intent::Pick { index } => Ok(locked(self.wild.pick(index))),
            Intent::Cancel { direction } => Ok(locked(
                self.wild.pick_action(WildAction::Cancel { target: direction }),
            )),
            Intent::Steal { seat } => Ok(locked(
                self.wild.pick_action(WildAction::Steal { from: seat }),
            )),
            Intent::Confirm => {
                let room = self.identity.room()?.to_string();
                match self.wild.confirm() {
                    Some(actions) => {
                        self.refresh_roll();
                        Ok(vec![
                            Effect::Emit(ClientMessage::ResolveWilds {
                                room_id: room,
                                actions,
                            }),
                            Effect::Redraw,
                        ])
                    }
                    None => Ok(vec![]),
                }
            }
            Intent::Triple { choice } => {
                let room = self.identity.room()?.to_string();
                match self.wild.choose(choice) {
                    Some(choice) => {
                        self.refresh_roll();
                        Ok(vec![
                            Effect::Emit(ClientMessage::TripleWildChoice {
                                room_id: room,
                                choice,
                            }),
                            Effect::Redraw,
                        ])
                    }
                    None => Ok(vec![]),
                }
            }
        }
    }
}

fn locked(picked: bool) -> Vec<Effect> {
    match picked {
        true => vec![Effect::Redraw],
        false => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thou_dto::Broadcast;
    use thou_dto::ServerMessage;
    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }
    fn room() -> Session {
        let mut session = Session::seeded(Settings::default(), ms(0), 3);
        session.receive(
            ServerMessage::RoomJoined {
                room_id: "ROOM".to_string(),
            },
            ms(0),
        );
        session
    }
    fn emitted(effects: &[Effect]) -> Vec<&ClientMessage> {
        effects.iter().filter_map(Effect::emitted).collect()
    }
    #[test]
    fn room_code_is_trimmed_and_uppercased() {
        let mut session = Session::seeded(Settings::default(), ms(0), 3);
        let effects = session
            .dispatch(
                Intent::JoinRoom {
                    code: "  abcd ".to_string(),
                },
                ms(0),
            )
            .unwrap();
        assert_eq!(
            emitted(&effects),
            vec![&ClientMessage::JoinRoom {
                room_id: "ABCD".to_string()
            }]
        );
        assert_eq!(
            session.dispatch(Intent::JoinRoom { code: "   ".to_string() }, ms(0)),
            Err(ClientError::EmptyRoomCode)
        );
    }
    #[test]
    fn seat_needs_room_and_name() {
        let mut session = Session::seeded(Settings::default(), ms(0), 3);
        let sit = |name: &str| Intent::JoinSeat {
            name: name.to_string(),
            avatar: "cat.png".to_string(),
            color: "#00ff00".to_string(),
        };
        assert_eq!(session.dispatch(sit("Ann"), ms(0)), Err(ClientError::NoRoom));
        let mut session = room();
        assert_eq!(session.dispatch(sit("  "), ms(0)), Err(ClientError::EmptyName));
        assert_eq!(emitted(&session.dispatch(sit(" Ann "), ms(0)).unwrap()).len(), 1);
    }
    #[test]
    fn roll_without_seat_is_an_error() {
        let mut session = room();
        assert_eq!(session.dispatch(Intent::Roll, ms(0)), Err(ClientError::NotSeated));
    }
    #[test]
    fn reset_without_room_does_nothing() {
        let mut session = Session::seeded(Settings::default(), ms(0), 3);
        assert_eq!(session.dispatch(Intent::Reset, ms(0)), Ok(vec![]));
        assert_eq!(session.dispatch(Intent::PlayAgain, ms(0)), Ok(vec![]));
    }
    #[test]
    fn chat_uses_display_name() {
        let mut session = room();
        let effects = session
            .dispatch(Intent::Chat { text: "hi".to_string() }, ms(0))
            .unwrap();
        assert_eq!(
            emitted(&effects),
            vec![&ClientMessage::ChatMessage {
                room_id: "ROOM".to_string(),
                name: GUEST.to_string(),
                text: "hi".to_string(),
            }]
        );
        session.receive(
            ServerMessage::SeatJoined {
                room_id: "ROOM".to_string(),
                seat: 1,
            },
            ms(0),
        );
        session.receive(
            ServerMessage::StateUpdate(Broadcast {
                players: Some(vec![None, Some("Bob".to_string())]),
                ..Broadcast::default()
            }),
            ms(0),
        );
        let effects = session
            .dispatch(Intent::Chat { text: " yo ".to_string() }, ms(0))
            .unwrap();
        assert!(matches!(
            emitted(&effects)[0],
            ClientMessage::ChatMessage { name, text, .. } if name == "Bob" && text == "yo"
        ));
        assert_eq!(
            session.dispatch(Intent::Chat { text: "  ".to_string() }, ms(0)),
            Ok(vec![])
        );
    }
    #[test]
    fn seat_is_fixed_once_assigned() {
        let mut identity = Identity::default();
        assert!(identity.enter("A"));
        assert!(identity.sit("A", 2));
        assert!(!identity.sit("A", 3));
        assert!(!identity.enter("B"));
        assert_eq!(identity.seated(), Ok(("A", 2)));
    }
    #[test]
    fn intents_decode_from_json() {
        let intent: Intent = serde_json::from_str(r#"{"intent":"cancel","direction":"Left"}"#).unwrap();
        assert_eq!(
            intent,
            Intent::Cancel {
                direction: Direction::Left
            }
        );
        let intent: Intent =
            serde_json::from_str(r#"{"intent":"triple","choice":{"type":"takePot"}}"#).unwrap();
        assert_eq!(
            intent,
            Intent::Triple {
                choice: TripleChoice::TakePot
            }
        );
    }
}
