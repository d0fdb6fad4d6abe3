use super::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::Serialize;
use std::time::Duration;
use thou_core::*;
use thou_dto::ServerMessage;

/// Which screen is in front.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Screen {
    /// Create or join a room.
    #[default]
    Intro,
    /// Room known; seat form open.
    Lobby,
    /// Seated; the table is showing.
    Table,
}

/// Game-over overlay contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Banner {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, Default)]
pub(crate) enum Overlay {
    #[default]
    Hidden,
    Pending { at: Duration, banner: Banner },
    Shown(Banner),
}

/// Everything the presentation layer draws, derived on demand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct View {
    pub screen: Screen,
    pub room: Option<String>,
    pub seat: Option<Seat>,
    pub lobby: String,
    pub table: TableView,
    pub dice: Vec<String>,
    pub results: Option<(String, Tone)>,
    pub panel: Option<Panel>,
    pub chat: Vec<ChatLine>,
    pub history: Vec<HistoryEntry>,
    pub overlay: Option<Banner>,
}

/// Client session.
/// Functional core that owns the mirror and every piece of presentation
/// state. Inbound events, player intents, and timer ticks go in; effects
/// for the shell come out.
pub struct Session {
    pub(crate) settings: Settings,
    pub(crate) identity: Identity,
    pub(crate) mirror: Mirror,
    pub(crate) screen: Screen,
    pub(crate) roll: bool,
    pub(crate) wild: Wild,
    pub(crate) idle: Idle,
    pub(crate) dice: Vec<String>,
    pub(crate) results: Option<Notice>,
    pub(crate) chat: Chat,
    pub(crate) history: History,
    pub(crate) overlay: Overlay,
    rng: SmallRng,
}

impl Session {
    pub fn new(settings: Settings, now: Duration) -> Self {
        Self::with_rng(settings, now, SmallRng::from_rng(&mut rand::rng()))
    }
    /// Deterministic idle dice, for tests and replays.
    pub fn seeded(settings: Settings, now: Duration, seed: u64) -> Self {
        Self::with_rng(settings, now, SmallRng::seed_from_u64(seed))
    }
    fn with_rng(settings: Settings, now: Duration, rng: SmallRng) -> Self {
        Self {
            idle: Idle::new(settings.idle_interval, now),
            settings,
            identity: Identity::default(),
            mirror: Mirror::default(),
            screen: Screen::default(),
            roll: false,
            wild: Wild::default(),
            dice: Vec::new(),
            results: None,
            chat: Chat::default(),
            history: History::default(),
            overlay: Overlay::default(),
            rng,
        }
    }
}

impl Session {
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
    pub fn identity(&self) -> &Identity {
        &self.identity
    }
    pub fn state(&self) -> &TableState {
        self.mirror.state()
    }
    pub fn display_name(&self) -> Option<&str> {
        self.mirror.display_name()
    }
    pub fn screen(&self) -> Screen {
        self.screen
    }
    pub fn wild(&self) -> &Wild {
        &self.wild
    }
    pub fn idle(&self) -> &Idle {
        &self.idle
    }
    pub fn chat(&self) -> &Chat {
        &self.chat
    }
    pub fn history(&self) -> &History {
        &self.history
    }
    /// Roll control state. An open choice panel forces it off.
    pub fn roll_enabled(&self) -> bool {
        self.roll && self.wild.is_idle()
    }
    pub fn overlay(&self) -> Option<&Banner> {
        match &self.overlay {
            Overlay::Shown(banner) => Some(banner),
            _ => None,
        }
    }
    /// Earliest time at which [`Session::tick`] has work.
    pub fn deadline(&self) -> Option<Duration> {
        let reveal = match &self.overlay {
            Overlay::Pending { at, .. } => Some(*at),
            _ => None,
        };
        match (self.idle.deadline(), reveal) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}

impl Session {
    /// Applies one server event, in delivery order.
    pub fn receive(&mut self, msg: ServerMessage, now: Duration) -> Vec<Effect> {
        log::debug!("[session] <- {}", msg);
        match msg {
            ServerMessage::RoomCreated { room_id } => {
                self.enter(&room_id);
                vec![
                    Effect::Alert(format!(
                        "Room created! Code: {}\nShare this code with players 2,3,4 to join.\n\nTap OK to enter your name/avatar as Player 1.",
                        room_id
                    )),
                    Effect::Redraw,
                ]
            }
            ServerMessage::RoomJoined { room_id } => {
                self.enter(&room_id);
                vec![Effect::Redraw]
            }
            ServerMessage::SeatJoined { room_id, seat } => {
                if self.identity.sit(&room_id, seat) {
                    log::info!("[session] seated at P{} in room {}", seat, room_id);
                }
                self.screen = Screen::Table;
                self.refresh_roll();
                vec![Effect::Redraw]
            }
            ServerMessage::ErrorMessage { message } => vec![Effect::Alert(message)],
            ServerMessage::StateUpdate(update) => {
                self.mirror.apply_broadcast(&update, self.identity.seat());
                self.refresh_roll();
                self.idle.sync(self.state().game_started(), now);
                vec![Effect::Redraw]
            }
            ServerMessage::GraceWarning { message, .. } => {
                self.results = Some(Notice::held(
                    message,
                    Tone::Warning,
                    now,
                    self.settings.grace_hold,
                ));
                vec![Effect::Cue(Cue::Wild), Effect::Redraw]
            }
            ServerMessage::PlayerEliminated { name, .. } => {
                self.results = Some(Notice::held(
                    format!("{} has been ELIMINATED!", name),
                    Tone::Danger,
                    now,
                    self.settings.elimination_hold,
                ));
                vec![Effect::Cue(Cue::Nope), Effect::Redraw]
            }
            ServerMessage::RollResult {
                seat,
                outcomes,
                outcomes_text,
            } => {
                let name = self.label(seat);
                self.history
                    .record(&name, &outcomes_text, self.mirror.state(), self.identity.seat());
                self.results = Some(Notice::plain(format!("{} rolled: {}", name, outcomes_text)));
                self.dice = outcomes.clone();
                vec![Effect::Dice(outcomes), Effect::Redraw]
            }
            ServerMessage::ChipTransfer {
                from_seat,
                to_seat,
                kind,
            } => {
                let from = from_seat.and_then(|s| self.settings.seats.slot(s));
                let to = match kind.as_deref() {
                    Some("hub") => Some(Landing::Pot),
                    _ => to_seat
                        .and_then(|s| self.settings.seats.slot(s))
                        .map(Landing::Slot),
                };
                match (from, to) {
                    (Some(from), Some(to)) => vec![Effect::Flight { from, to }, Effect::Cue(Cue::Chip)],
                    _ => vec![Effect::Cue(Cue::Chip)],
                }
            }
            ServerMessage::HistoryEntry {
                player_name,
                outcomes_text,
            } => {
                let name = player_name.unwrap_or_else(|| SOMEONE.to_string());
                self.history
                    .record(&name, &outcomes_text, self.mirror.state(), self.identity.seat());
                vec![Effect::Redraw]
            }
            ServerMessage::RequestWildChoice { seat, outcomes } => {
                if self.identity.seat() != Some(seat) {
                    let text = format!("{} is choosing Wild actions...", self.label(seat));
                    self.results = Some(Notice::plain(text));
                    return vec![Effect::Redraw];
                }
                self.results = Some(Notice::plain(format!("You rolled: {}", outcomes.join(", "))));
                self.wild = Wild::open(seat, outcomes, self.mirror.state());
                self.refresh_roll();
                vec![Effect::Redraw]
            }
            ServerMessage::RequestTripleWildChoice { seat } => {
                if self.identity.seat() != Some(seat) {
                    let text = format!("{} is resolving Triple Wilds...", self.label(seat));
                    self.results = Some(Notice::plain(text));
                    return vec![Effect::Redraw];
                }
                self.wild = Wild::triple(seat, self.state().center_pot());
                self.roll = false;
                vec![Effect::Redraw]
            }
            ServerMessage::GameOver {
                winner_seat,
                winner_name,
                pot,
            } => {
                let winner = match winner_seat.is_some() && winner_seat == self.identity.seat() {
                    true => "YOU WIN!".to_string(),
                    false => format!("{} WINS!", winner_name),
                };
                log::info!("[session] game over, {}", winner);
                self.overlay = Overlay::Pending {
                    at: now + self.settings.game_over_delay,
                    banner: Banner {
                        title: "GAME OVER".to_string(),
                        text: format!("{}\nWins {} chips from hub pot!", winner, pot),
                    },
                };
                vec![]
            }
            ServerMessage::ResetGame => {
                self.mirror.apply_reset();
                self.chat.clear();
                self.history.clear();
                self.wild.abandon();
                self.refresh_roll();
                self.idle.sync(false, now);
                vec![Effect::Redraw]
            }
            ServerMessage::ChatMessage { name, text } => {
                self.chat.receive(name, text, self.mirror.state());
                vec![Effect::Redraw]
            }
        }
    }
    /// Advances timers: idle dice frames and the delayed overlay reveal.
    pub fn tick(&mut self, now: Duration) -> Vec<Effect> {
        let mut effects = Vec::new();
        if let Some(faces) = self.idle.tick(now, &mut self.rng) {
            self.dice = faces.iter().map(Face::to_string).collect();
            effects.push(Effect::Dice(self.dice.clone()));
        }
        if let Overlay::Pending { at, .. } = &self.overlay {
            if *at <= now {
                if let Overlay::Pending { banner, .. } = std::mem::take(&mut self.overlay) {
                    self.overlay = Overlay::Shown(banner);
                    self.roll = false;
                    effects.push(Effect::Cue(Cue::Win));
                }
            }
        }
        if !effects.is_empty() {
            effects.push(Effect::Redraw);
        }
        effects
    }
    /// Projects the whole session for drawing.
    pub fn view(&self, now: Duration) -> View {
        let me = self.identity.seat();
        let mut table = render(self.mirror.state(), &self.settings.seats, me);
        table.roll = self.roll_enabled();
        View {
            screen: self.screen,
            room: self.identity.room().ok().map(str::to_string),
            seat: me,
            lobby: lobby_title(me),
            table,
            dice: self.dice.clone(),
            results: self
                .results
                .as_ref()
                .map(|n| (n.text.clone(), n.tone_at(now))),
            panel: self.wild.panel(),
            chat: self.chat.lines().cloned().collect(),
            history: self.history.entries().cloned().collect(),
            overlay: self.overlay().cloned(),
        }
    }
}

impl Session {
    fn enter(&mut self, room: &str) {
        if self.identity.enter(room) {
            log::info!("[session] entered room {}", room);
            self.screen = Screen::Lobby;
        }
    }
    pub(crate) fn refresh_roll(&mut self) {
        self.roll = roll_allowed(self.mirror.state(), self.identity.seat());
    }
    /// Name for a seat in notices, falling back to its position.
    fn label(&self, seat: Seat) -> String {
        self.state()
            .name(seat)
            .map(str::to_string)
            .unwrap_or_else(|| format!("Player {}", seat.saturating_add(1)))
    }
    pub(crate) fn hide_overlay(&mut self) {
        self.overlay = Overlay::Hidden;
    }
}

/// Heading of the seat form.
pub fn lobby_title(seat: Option<Seat>) -> String {
    match seat {
        Some(0) => "Join as Player 1 (Host)".to_string(),
        Some(seat) => format!("Join as Player {}", seat.saturating_add(1)),
        None => "Join Game".to_string(),
    }
}
