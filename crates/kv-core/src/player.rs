use std::fmt;

use serde::{Deserialize, Serialize};

/// Sequential identifier of a player (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// A participant in the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Sequential identifier.
    pub id: PlayerId,
    /// Display name.
    pub name: String,
    /// Display color as a hex string, e.g. `#8B5CF6`.
    pub color: String,
    /// Cash balance. May go negative; there is no bankruptcy.
    pub balance: i64,
    /// Index of the cell the player stands on.
    pub position: usize,
}

impl Player {
    /// Create a player standing on the start cell.
    pub fn new(id: u32, name: impl Into<String>, color: impl Into<String>, balance: i64) -> Self {
        Self {
            id: PlayerId(id),
            name: name.into(),
            color: color.into(),
            balance,
            position: 0,
        }
    }

    /// Add `amount` to the balance.
    pub fn credit(&mut self, amount: i64) {
        self.balance = self.balance.saturating_add(amount);
    }

    /// Subtract `amount` from the balance, going negative if needed.
    pub fn debit(&mut self, amount: i64) {
        self.balance = self.balance.saturating_sub(amount);
    }

    /// Whether the player holds at least `amount` in cash.
    pub fn can_afford(&self, amount: i64) -> bool {
        self.balance >= amount
    }
}

/// The name and color of a player, before the roster assigns an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSpec {
    /// Display name.
    pub name: String,
    /// Display color as a hex string.
    pub color: String,
}

impl PlayerSpec {
    /// Create a player spec.
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }

    /// The four default seats.
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new("Player 1", "#8B5CF6"),
            Self::new("Player 2", "#0EA5E9"),
            Self::new("Player 3", "#F97316"),
            Self::new("Player 4", "#D946EF"),
        ]
    }
}
