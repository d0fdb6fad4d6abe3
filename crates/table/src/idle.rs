use rand::Rng;
use serde::Serialize;
use std::time::Duration;
use thou_core::*;

/// Whether decorative dice are cycling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Ambience {
    /// No game running; the next frame is due at `next`.
    Animating { next: Duration },
    /// A game is running; no timer exists.
    Live,
}

/// Idle dice animation. At most one frame is ever scheduled, and whether a
/// timer runs is read off the state rather than tracked separately.
#[derive(Debug, Clone)]
pub struct Idle {
    interval: Duration,
    state: Ambience,
}

impl Idle {
    /// Starts animating, since no game has started yet.
    pub fn new(interval: Duration, now: Duration) -> Self {
        Self {
            interval,
            state: Ambience::Animating {
                next: now + interval,
            },
        }
    }
    pub fn state(&self) -> Ambience {
        self.state
    }
    pub fn animating(&self) -> bool {
        matches!(self.state, Ambience::Animating { .. })
    }
    /// Follows the started flag. Entering `Live` drops the pending frame;
    /// re-entering `Animating` arms exactly one, and an already running
    /// animation keeps its schedule.
    pub fn sync(&mut self, started: bool, now: Duration) {
        match (self.state, started) {
            (Ambience::Animating { .. }, true) => {
                log::debug!("[idle] game started, stopping dice");
                self.state = Ambience::Live;
            }
            (Ambience::Live, false) => {
                log::debug!("[idle] game stopped, cycling dice");
                self.state = Ambience::Animating {
                    next: now + self.interval,
                };
            }
            _ => {}
        }
    }
    pub fn deadline(&self) -> Option<Duration> {
        match self.state {
            Ambience::Animating { next } => Some(next),
            Ambience::Live => None,
        }
    }
    /// Produces a frame of random faces when one is due.
    pub fn tick<R: Rng + ?Sized>(&mut self, now: Duration, rng: &mut R) -> Option<[Face; DICE]> {
        match self.state {
            Ambience::Animating { next } if now >= next => {
                self.state = Ambience::Animating {
                    next: now + self.interval,
                };
                Some(std::array::from_fn(|_| Face::roll(rng)))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }
    #[test]
    fn frames_follow_interval() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut idle = Idle::new(ms(1500), ms(0));
        assert!(idle.tick(ms(1000), &mut rng).is_none());
        assert!(idle.tick(ms(1500), &mut rng).is_some());
        assert_eq!(idle.deadline(), Some(ms(3000)));
        assert!(idle.tick(ms(2000), &mut rng).is_none());
    }
    #[test]
    fn live_cancels_timer() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut idle = Idle::new(ms(1500), ms(0));
        idle.sync(true, ms(100));
        assert!(!idle.animating());
        assert_eq!(idle.deadline(), None);
        assert!(idle.tick(ms(10_000), &mut rng).is_none());
    }
    #[test]
    fn rearming_never_duplicates() {
        let mut idle = Idle::new(ms(1500), ms(0));
        idle.sync(false, ms(700));
        idle.sync(false, ms(900));
        assert_eq!(idle.deadline(), Some(ms(1500)));
        idle.sync(true, ms(1000));
        idle.sync(false, ms(2000));
        assert_eq!(idle.deadline(), Some(ms(3500)));
    }
}
