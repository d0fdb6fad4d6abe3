//! Core type aliases, dice faces, and constants for the Thousanaire client.
//!
//! This crate provides the foundational types and tuning parameters shared
//! by the wire format, the table core, and the terminal shell.

use serde::Deserialize;
use serde::Serialize;
use std::fmt::Display;
use std::fmt::Formatter;
use std::time::Duration;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Chip counts and pot totals. Signed because server data is not validated.
pub type Chips = i32;
/// Logical seat index assigned by the server (0 = host, clockwise).
pub type Seat = usize;
/// Screen slot index in the rendered layout.
pub type Slot = usize;

// ============================================================================
// TABLE PARAMETERS
// ============================================================================
/// Number of seats at the table.
pub const N: usize = 4;
/// Dice rolled per turn, also the number of idle decorative dice.
pub const DICE: usize = 3;
/// Chat lines retained before the oldest is evicted.
pub const CHAT_LIMIT: usize = 50;
/// Roll history entries retained before the oldest is evicted.
pub const HISTORY_LIMIT: usize = 10;
/// Chips a triple-wild steal takes in total.
pub const TRIPLE_STEAL: Chips = 3;

// ============================================================================
// PRESENTATION TIMING
// ============================================================================
/// Interval between decorative dice frames while no game is running.
pub const IDLE_INTERVAL: Duration = Duration::from_millis(1500);
/// How long a grace-period warning stays highlighted.
pub const GRACE_HOLD: Duration = Duration::from_secs(4);
/// How long an elimination notice stays highlighted.
pub const ELIMINATION_HOLD: Duration = Duration::from_secs(5);
/// Delay between the game-over event and the overlay reveal.
pub const GAME_OVER_DELAY: Duration = Duration::from_secs(1);

// ============================================================================
// COLORS
// ============================================================================
/// Chat name colors by logical seat.
pub const SEAT_COLORS: [&str; N] = ["#ff4081", "#7c4dff", "#00e5ff", "#ffeb3b"];
/// Chat name color for senders not found at the table.
pub const NEUTRAL_COLOR: &str = "#666";
/// Glow around the active seat when its player picked no color.
pub const ACTIVE_GLOW: &str = "#ff4081";
/// Avatar border for empty seats.
pub const EMPTY_BORDER: &str = "transparent";

// ============================================================================
// DICE
// ============================================================================
/// A single die face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    Left,
    Right,
    Hub,
    Dottt,
    Wild,
}

impl Face {
    pub const ALL: [Face; 5] = [Face::Left, Face::Right, Face::Hub, Face::Dottt, Face::Wild];
    /// Roll a face with the given generator.
    pub fn roll<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
    /// The cancelable direction this face moves chips toward, if any.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Face::Left => Some(Direction::Left),
            Face::Right => Some(Direction::Right),
            Face::Hub => Some(Direction::Hub),
            Face::Dottt | Face::Wild => None,
        }
    }
}

impl TryFrom<&str> for Face {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "Left" => Ok(Face::Left),
            "Right" => Ok(Face::Right),
            "Hub" => Ok(Face::Hub),
            "Dottt" => Ok(Face::Dottt),
            "Wild" => Ok(Face::Wild),
            _ => Err(format!("unknown die face: {}", s)),
        }
    }
}

impl Display for Face {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Face::Left => write!(f, "Left"),
            Face::Right => write!(f, "Right"),
            Face::Hub => write!(f, "Hub"),
            Face::Dottt => write!(f, "Dottt"),
            Face::Wild => write!(f, "Wild"),
        }
    }
}

/// A chip movement a Wild die can cancel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Hub,
}

impl Direction {
    /// Panel order for cancel toggles.
    pub const ALL: [Direction; 3] = [Direction::Left, Direction::Right, Direction::Hub];
}

impl TryFrom<&str> for Direction {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            "hub" => Ok(Direction::Hub),
            _ => Err(format!("unknown direction: {}", s)),
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Left => write!(f, "Left"),
            Direction::Right => write!(f, "Right"),
            Direction::Hub => write!(f, "Hub"),
        }
    }
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "runtime")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
