//! Client for the Thousanaire multiplayer dice game.
//!
//! This facade crate re-exports the workspace crates for convenient access.
//!
//! ## Crate Organization
//!
//! - [`core`]: Type aliases, dice faces, constants, logging
//! - [`dto`]: Wire messages exchanged with the game server
//! - [`table`]: Functional core: mirror, seat map, render, wild choices
//! - [`channel`]: In-memory and TCP transports (native only)
//!
//! With the `client` feature the session is also exposed to a browser host
//! through wasm-bindgen.

pub use thou_core as core;
pub use thou_dto as dto;
pub use thou_table as table;

#[cfg(not(target_arch = "wasm32"))]
pub use thou_channel as channel;

#[cfg(feature = "client")]
pub mod wasm;

// Re-export commonly used types at the root
pub use thou_core::*;
pub use thou_table::Effect;
pub use thou_table::Intent;
pub use thou_table::Session;
pub use thou_table::Settings;
pub use thou_table::View;
