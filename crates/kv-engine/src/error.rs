//! Error types for the rules engine.

use kv_core::CoreError;

/// Convenience result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Why a buy or build command was turned down.
///
/// A rejection never changes the game state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    /// No cell is selected.
    #[error("select a cell first")]
    NothingSelected,

    /// The cell has no price and can never be bought.
    #[error("{0} cannot be bought")]
    NotForSale(String),

    /// Somebody already owns the cell.
    #[error("{cell} is already owned by {owner}")]
    AlreadyOwned {
        /// Cell name.
        cell: String,
        /// Owner name.
        owner: String,
    },

    /// The active player cannot pay.
    #[error("insufficient funds: need ₽{needed}, have ₽{available}")]
    InsufficientFunds {
        /// Price of the action.
        needed: i64,
        /// The active player's balance.
        available: i64,
    },

    /// The cell is not a street owned by the active player.
    #[error("you cannot build on {0}")]
    CannotBuildHere(String),

    /// A hotel already stands, so no more houses fit.
    #[error("a hotel already stands on {0}")]
    HotelBlocksHouses(String),

    /// Four houses stand; the next step is a hotel.
    #[error("{0} has four houses, build a hotel instead")]
    HousesFull(String),

    /// A hotel needs four houses first.
    #[error("build 4 houses on {cell} first ({houses} so far)")]
    HousesIncomplete {
        /// Cell name.
        cell: String,
        /// Houses currently standing.
        houses: u8,
    },

    /// The cell already carries a hotel.
    #[error("{0} already has a hotel")]
    HotelAlreadyBuilt(String),
}

/// Errors that can occur while running a game.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A command was refused by the rules.
    #[error("{0}")]
    Rejected(#[from] Rejection),

    /// A board or roster error.
    #[error("{0}")]
    Core(#[from] CoreError),

    /// The game configuration is malformed.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A command argument could not be understood.
    #[error("invalid choice: {0}")]
    InvalidChoice(String),

    /// The command word is not known.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// A turn transition was requested from the wrong phase.
    #[error("cannot {action} while {phase}")]
    WrongPhase {
        /// What was attempted.
        action: &'static str,
        /// The current phase.
        phase: String,
    },

    /// Reading a config or writing an export failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
