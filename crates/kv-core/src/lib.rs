//! Core types for Kvartal: board cells, players, and the roster.
//!
//! This crate defines the tables the rules engine operates on. It has no
//! notion of turns or randomness. You can build a [`Board`] and a
//! [`Roster`] programmatically or deserialize a board from JSON.

/// The ordered table of board cells.
pub mod board;
/// Cell types, identifiers, and rent arithmetic.
pub mod cell;
/// Error types used throughout the crate.
pub mod error;
/// Player types and identifiers.
pub mod player;
/// The ordered table of players.
pub mod roster;

/// Re-export board types.
pub use board::Board;
/// Re-export cell types.
pub use cell::{Cell, CellId, CellKind, ColorGroup};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export player types.
pub use player::{Player, PlayerId, PlayerSpec};
/// Re-export roster types.
pub use roster::Roster;
