use crate::player::PlayerId;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when building or querying the game tables.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A board table violates one of its structural invariants.
    #[error("invalid board: {0}")]
    InvalidBoard(String),

    /// A roster could not be built from the given player specs.
    #[error("invalid roster: {0}")]
    InvalidRoster(String),

    /// A board position outside `0..len` was requested.
    #[error("position {position} is off the board (board has {len} cells)")]
    PositionOutOfRange {
        /// The requested position.
        position: usize,
        /// Number of cells on the board.
        len: usize,
    },

    /// The requested player ID does not exist in the roster.
    #[error("player not found: {0}")]
    PlayerNotFound(PlayerId),

    /// A table could not be read from or written to JSON.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
