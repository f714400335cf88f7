pub mod board;
pub mod cards;
pub mod play;

use std::path::Path;

use kv_core::Board;
use kv_engine::GameConfig;

/// Load the game config from `path`, or the defaults, then apply `seed`.
fn load_config(path: Option<&Path>, seed: Option<u64>) -> Result<GameConfig, String> {
    let config = match path {
        Some(path) => GameConfig::load(path)
            .map_err(|e| format!("failed to load config {}: {e}", path.display()))?,
        None => GameConfig::default(),
    };
    Ok(match seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    })
}

/// Load a board from `path`, or the standard 36-cell board.
fn load_board(path: Option<&Path>) -> Result<Board, String> {
    let Some(path) = path else {
        return Ok(Board::standard());
    };
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read board {}: {e}", path.display()))?;
    Board::from_json(&json).map_err(|e| format!("invalid board {}: {e}", path.display()))
}
