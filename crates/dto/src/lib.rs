//! Data transfer objects for the real-time game channel.
//!
//! Every frame is a JSON object `{"event": <kebab-case name>, "data": {...}}`
//! with camelCase payload fields.
//!
//! - [`ServerMessage`]: events pushed by the authoritative server
//! - [`ClientMessage`]: intents sent by this client
//! - [`Broadcast`]: partial table snapshot carried by `state-update`
mod inbound;
mod outbound;

pub use inbound::*;
pub use outbound::*;
