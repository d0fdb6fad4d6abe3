use super::*;
use serde::Serialize;
use thou_core::*;
use thou_dto::TripleChoice;
use thou_dto::WildAction;

/// One single-use control on the wild panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toggle {
    pub action: WildAction,
    /// Direction or opponent name the control acts on.
    pub subject: String,
    pub locked: bool,
}

impl Toggle {
    pub fn label(&self) -> String {
        match (self.action, self.locked) {
            (WildAction::Cancel { .. }, false) => format!("Cancel {}", self.subject),
            (WildAction::Cancel { .. }, true) => format!("{} Canceled", self.subject),
            (WildAction::Steal { .. }, false) => format!("Steal from {}", self.subject),
            (WildAction::Steal { .. }, true) => format!("Stole from {}", self.subject),
        }
    }
}

/// An outstanding wild-choice request for the local seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choosing {
    seat: Seat,
    outcomes: Vec<String>,
    wilds: usize,
    toggles: Vec<Toggle>,
    actions: Vec<WildAction>,
}

impl Choosing {
    pub fn seat(&self) -> Seat {
        self.seat
    }
    pub fn outcomes(&self) -> &[String] {
        &self.outcomes
    }
    pub fn wilds(&self) -> usize {
        self.wilds
    }
    pub fn toggles(&self) -> &[Toggle] {
        &self.toggles
    }
    /// Locked decisions, in click order.
    pub fn actions(&self) -> &[WildAction] {
        &self.actions
    }
}

/// Server-driven choice flow for the local seat.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub enum Wild {
    #[default]
    Idle,
    /// Distributing Wild dice across cancel and steal actions.
    Choosing(Choosing),
    /// Picking one of the two triple-wild bonuses.
    Triple { seat: Seat, pot: Chips },
}

impl Wild {
    /// Opens a choice session for a roll. A roll without Wild faces has
    /// nothing to decide and stays idle.
    pub fn open(seat: Seat, outcomes: Vec<String>, state: &TableState) -> Self {
        let faces = outcomes
            .iter()
            .filter_map(|o| Face::try_from(o.as_str()).ok())
            .collect::<Vec<_>>();
        let wilds = faces.iter().filter(|f| **f == Face::Wild).count();
        if wilds == 0 {
            log::debug!("[wild] no Wild faces in {:?}", outcomes);
            return Self::Idle;
        }
        let cancels = Direction::ALL
            .into_iter()
            .filter(|d| faces.iter().any(|f| f.direction() == Some(*d)))
            .map(|target| Toggle {
                action: WildAction::Cancel { target },
                subject: target.to_string(),
                locked: false,
            });
        let steals = state
            .seats()
            .iter()
            .enumerate()
            .filter(|(i, r)| *i != seat && r.is_live())
            .filter_map(|(i, r)| r.name().map(|n| (i, n)))
            .map(|(from, name)| Toggle {
                action: WildAction::Steal { from },
                subject: name.to_string(),
                locked: false,
            });
        Self::Choosing(Choosing {
            seat,
            outcomes,
            wilds,
            toggles: cancels.chain(steals).collect(),
            actions: Vec::new(),
        })
    }
    pub fn triple(seat: Seat, pot: Chips) -> Self {
        Self::Triple { seat, pot }
    }
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
    /// Locks a control and records its action. Each control works once.
    pub fn pick(&mut self, index: usize) -> bool {
        match self {
            Self::Choosing(c) => match c.toggles.get_mut(index) {
                Some(toggle) if !toggle.locked => {
                    toggle.locked = true;
                    c.actions.push(toggle.action);
                    true
                }
                _ => false,
            },
            _ => false,
        }
    }
    /// Same as [`Wild::pick`], addressing the control by its action.
    pub fn pick_action(&mut self, action: WildAction) -> bool {
        let index = match self {
            Self::Choosing(c) => c.toggles.iter().position(|t| t.action == action),
            _ => None,
        };
        index.map(|i| self.pick(i)).unwrap_or(false)
    }
    /// Ends the session, handing back the locked actions for submission.
    pub fn confirm(&mut self) -> Option<Vec<WildAction>> {
        match std::mem::take(self) {
            Self::Choosing(c) => Some(c.actions),
            other => {
                *self = other;
                None
            }
        }
    }
    /// Ends a triple-wild session with the given bonus.
    pub fn choose(&mut self, choice: TripleChoice) -> Option<TripleChoice> {
        match self {
            Self::Triple { .. } => {
                *self = Self::Idle;
                Some(choice)
            }
            _ => None,
        }
    }
    /// Drops any pending session without submitting it.
    pub fn abandon(&mut self) {
        if !self.is_idle() {
            log::debug!("[wild] abandoning pending choices");
        }
        *self = Self::Idle;
    }
    pub fn panel(&self) -> Option<Panel> {
        match self {
            Self::Idle => None,
            Self::Choosing(c) => Some(Panel {
                title: format!(
                    "Wild Choices ({} Wild{})",
                    c.wilds,
                    if c.wilds > 1 { "s" } else { "" }
                ),
                prompt: "Choose actions for your Wild dice, then confirm.".to_string(),
                options: c
                    .toggles
                    .iter()
                    .map(|t| PanelOption {
                        label: t.label(),
                        locked: t.locked,
                    })
                    .collect(),
            }),
            Self::Triple { pot, .. } => Some(Panel {
                title: "TRIPLE WILDS!".to_string(),
                prompt: "Choose your epic reward:".to_string(),
                options: vec![
                    PanelOption {
                        label: format!("Take entire Hub Pot ({} chips)", pot),
                        locked: false,
                    },
                    PanelOption {
                        label: format!("Steal {} chips total from opponents", TRIPLE_STEAL),
                        locked: false,
                    },
                ],
            }),
        }
    }
}

/// What the choice panel shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Panel {
    pub title: String,
    pub prompt: String,
    pub options: Vec<PanelOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelOption {
    pub label: String,
    pub locked: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use thou_dto::Broadcast;
    fn outcomes(faces: &[&str]) -> Vec<String> {
        faces.iter().map(|f| f.to_string()).collect()
    }
    fn table() -> TableState {
        let mut state = TableState::default();
        state.merge(&Broadcast {
            players: Some(vec![
                Some("Ann".to_string()),
                Some("Bob".to_string()),
                None,
                Some("Dee".to_string()),
            ]),
            eliminated: Some(vec![Some(false), Some(false), Some(false), Some(true)]),
            ..Broadcast::default()
        });
        state
    }
    #[test]
    fn no_wilds_stays_idle() {
        let wild = Wild::open(0, outcomes(&["Left", "Hub", "Dottt"]), &table());
        assert!(wild.is_idle());
        assert!(wild.panel().is_none());
    }
    #[test]
    fn offers_present_directions_and_live_opponents() {
        let wild = Wild::open(0, outcomes(&["Wild", "Hub", "Left"]), &table());
        let labels = wild
            .panel()
            .unwrap()
            .options
            .into_iter()
            .map(|o| o.label)
            .collect::<Vec<_>>();
        assert_eq!(labels, vec!["Cancel Left", "Cancel Hub", "Steal from Bob"]);
    }
    #[test]
    fn controls_are_single_use() {
        let mut wild = Wild::open(0, outcomes(&["Wild", "Wild", "Right"]), &table());
        assert!(wild.pick(0));
        assert!(!wild.pick(0));
        assert!(wild.pick(1));
        assert!(!wild.pick(9));
        let panel = wild.panel().unwrap();
        assert_eq!(panel.title, "Wild Choices (2 Wilds)");
        assert_eq!(panel.options[0].label, "Right Canceled");
        assert_eq!(panel.options[1].label, "Stole from Bob");
        assert_eq!(
            wild.confirm(),
            Some(vec![
                WildAction::Cancel {
                    target: Direction::Right
                },
                WildAction::Steal { from: 1 },
            ])
        );
        assert!(wild.is_idle());
    }
    #[test]
    fn pick_by_action() {
        let mut wild = Wild::open(0, outcomes(&["Wild", "Left", "Dottt"]), &table());
        assert!(wild.pick_action(WildAction::Steal { from: 1 }));
        assert!(!wild.pick_action(WildAction::Steal { from: 3 }));
        assert!(!wild.pick_action(WildAction::Cancel {
            target: Direction::Hub
        }));
    }
    #[test]
    fn confirm_without_session_is_none() {
        let mut wild = Wild::triple(0, 12);
        assert_eq!(wild.confirm(), None);
        assert!(!wild.is_idle());
        assert_eq!(wild.choose(TripleChoice::Steal3), Some(TripleChoice::Steal3));
        assert!(wild.is_idle());
        assert_eq!(wild.choose(TripleChoice::TakePot), None);
    }
    #[test]
    fn triple_panel_shows_pot() {
        let panel = Wild::triple(0, 12).panel().unwrap();
        assert_eq!(panel.options[0].label, "Take entire Hub Pot (12 chips)");
        assert_eq!(panel.options.len(), 2);
    }
}
