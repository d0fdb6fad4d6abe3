use serde::Serialize;
use thou_core::*;

/// Fixed positional role of a screen slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Quadrant {
    Top,
    Right,
    Bottom,
    Left,
}

impl Quadrant {
    /// Logical seat order: seat 0 (host) sits at the top, then clockwise.
    pub const ORDER: [Quadrant; N] = [
        Quadrant::Top,
        Quadrant::Right,
        Quadrant::Bottom,
        Quadrant::Left,
    ];
    pub fn tag(&self) -> &'static str {
        match self {
            Quadrant::Top => "top",
            Quadrant::Right => "right",
            Quadrant::Bottom => "bottom",
            Quadrant::Left => "left",
        }
    }
}

impl TryFrom<&str> for Quadrant {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::ORDER
            .into_iter()
            .find(|q| q.tag() == s)
            .ok_or_else(|| format!("unknown quadrant: {}", s))
    }
}

/// Lookup from logical seat to the screen slot that draws it.
/// Computed once from the layout; a seat whose quadrant no slot carries
/// has no visual target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatMap {
    slots: [Option<Slot>; N],
    width: usize,
}

impl SeatMap {
    /// Builds the map from each screen slot's whitespace-separated tags,
    /// given in screen order. When several slots carry the same quadrant
    /// the last one wins.
    pub fn from_layout<I, S>(layout: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let layout = layout
            .into_iter()
            .map(|tags| {
                tags.as_ref()
                    .split_whitespace()
                    .map(str::to_owned)
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();
        let slots = std::array::from_fn(|seat| {
            let tag = Quadrant::ORDER[seat].tag();
            layout
                .iter()
                .rposition(|tags| tags.iter().any(|t| t == tag))
        });
        Self {
            slots,
            width: layout.len(),
        }
    }
    /// Screen slot drawing this seat.
    pub fn slot(&self, seat: Seat) -> Option<Slot> {
        self.slots.get(seat).copied().flatten()
    }
    /// Logical seat drawn in this screen slot.
    pub fn seat(&self, slot: Slot) -> Option<Seat> {
        self.slots.iter().position(|s| *s == Some(slot))
    }
    /// Number of slots in the layout.
    pub fn width(&self) -> usize {
        self.width
    }
}

impl Default for SeatMap {
    fn default() -> Self {
        Self::from_layout(Quadrant::ORDER.map(|q| q.tag()))
    }
}
