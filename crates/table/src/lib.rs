//! Client-side projection of a server-authoritative dice table.
//!
//! The server owns every rule. This crate keeps a local mirror of what the
//! server pushes, derives what the player should see, and turns the player's
//! gestures into outbound intents after purely local checks. It performs no
//! I/O: every entry point returns [`Effect`]s for a shell to carry out.
//!
//! ## Architecture
//!
//! - [`Session`]: Owns all client state; the single entry point for events
//! - [`Mirror`]: Partial-merge cache of the server's [`TableState`]
//! - [`SeatMap`]: Logical seat → screen slot lookup
//! - [`render`]: Pure projection of the mirror into a [`TableView`]
//! - [`Wild`]: Wild-choice and triple-wild interactive flows
//! - [`Idle`]: Decorative dice animation while no game runs
//!
//! ## Histories
//!
//! - [`Chat`]: Bounded chat log colored by seat
//! - [`History`]: Bounded newest-first roll history
mod chat;
mod dispatch;
mod effect;
mod error;
mod history;
mod idle;
mod ledger;
mod mirror;
mod notice;
mod render;
mod seats;
mod session;
mod settings;
mod wild;

pub use chat::*;
pub use dispatch::*;
pub use effect::*;
pub use error::*;
pub use history::*;
pub use idle::*;
pub use ledger::*;
pub use mirror::*;
pub use notice::*;
pub use render::*;
pub use seats::*;
pub use session::*;
pub use settings::*;
pub use wild::*;
