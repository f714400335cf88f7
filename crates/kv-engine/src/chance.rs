//! The chance card table.
//!
//! Landing on a chance cell draws one card uniformly at random. Cards are
//! never removed, so every draw is with replacement.

use std::fmt;

use serde::{Deserialize, Serialize};

use kv_core::Player;

use crate::random::RandomSource;

/// What a chance card does to the player who drew it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardEffect {
    /// Receive money from the bank.
    Credit(i64),
    /// Pay money to the bank.
    Debit(i64),
    /// Move straight to the start cell and collect a bonus.
    AdvanceToStart {
        /// Amount collected on arrival.
        bonus: i64,
    },
}

impl CardEffect {
    /// Apply the effect to `player`.
    pub fn apply(&self, player: &mut Player) {
        match *self {
            Self::Credit(amount) => player.credit(amount),
            Self::Debit(amount) => player.debit(amount),
            Self::AdvanceToStart { bonus } => {
                player.position = 0;
                player.credit(bonus);
            }
        }
    }

    /// Net change to the player's balance.
    pub fn balance_delta(&self) -> i64 {
        match *self {
            Self::Credit(amount) => amount,
            Self::Debit(amount) => -amount,
            Self::AdvanceToStart { bonus } => bonus,
        }
    }
}

impl fmt::Display for CardEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Credit(amount) => write!(f, "+₽{amount}"),
            Self::Debit(amount) => write!(f, "-₽{amount}"),
            Self::AdvanceToStart { bonus } => write!(f, "to Start, +₽{bonus}"),
        }
    }
}

/// A single chance card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChanceCard {
    /// Card number.
    pub id: u32,
    /// Text read out to the players.
    pub text: &'static str,
    /// What the card does.
    pub effect: CardEffect,
}

/// The five chance cards.
pub const CHANCE_CARDS: [ChanceCard; 5] = [
    ChanceCard {
        id: 1,
        text: "The bank pays you a dividend of ₽200",
        effect: CardEffect::Credit(200),
    },
    ChanceCard {
        id: 2,
        text: "You won the lottery! Collect ₽500",
        effect: CardEffect::Credit(500),
    },
    ChanceCard {
        id: 3,
        text: "Speeding fine! Pay ₽100",
        effect: CardEffect::Debit(100),
    },
    ChanceCard {
        id: 4,
        text: "Advance to Start and collect ₽200",
        effect: CardEffect::AdvanceToStart { bonus: 200 },
    },
    ChanceCard {
        id: 5,
        text: "Luxury tax! Pay ₽150",
        effect: CardEffect::Debit(150),
    },
];

/// Draw a card uniformly at random, with replacement.
pub fn draw(rng: &mut dyn RandomSource) -> &'static ChanceCard {
    let index = rng.below(CHANCE_CARDS.len() as u32) as usize;
    &CHANCE_CARDS[index]
}
