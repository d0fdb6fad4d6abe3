use serde::Serialize;
use std::time::Duration;

/// Emphasis of the results line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tone {
    Plain,
    Warning,
    Danger,
}

/// Text on the results line. A highlighted notice falls back to plain once
/// its hold expires; the text stays until replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub text: String,
    tone: Tone,
    until: Option<Duration>,
}

impl Notice {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Plain,
            until: None,
        }
    }
    pub fn held(text: impl Into<String>, tone: Tone, now: Duration, hold: Duration) -> Self {
        Self {
            text: text.into(),
            tone,
            until: Some(now + hold),
        }
    }
    pub fn tone_at(&self, now: Duration) -> Tone {
        match self.until {
            Some(until) if now < until => self.tone,
            Some(_) => Tone::Plain,
            None => self.tone,
        }
    }
}
