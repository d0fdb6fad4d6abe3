//! Transport channel between the table core and the game server.
//!
//! The core only ever sees [`ServerMessage`](thou_dto::ServerMessage)s
//! coming in and hands [`ClientMessage`](thou_dto::ClientMessage)s to a
//! [`Channel`]. Two transports are provided:
//!
//! - [`Link::pair`]: In-memory duplex, for tests and embedding
//! - [`connect`]: Newline-delimited JSON over TCP
mod error;
mod link;
mod tcp;

pub use error::*;
pub use link::*;
pub use tcp::*;
