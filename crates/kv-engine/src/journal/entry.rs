//! Journal entry types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single entry in the game journal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum JournalEntry {
    /// A player threw the dice and moved.
    Roll {
        /// Who rolled.
        player: String,
        /// The two faces.
        dice: [u32; 2],
        /// Position before the move.
        from: usize,
        /// Position after the move.
        to: usize,
        /// Name of the cell landed on.
        cell: String,
        /// When rolled.
        timestamp: DateTime<Utc>,
    },
    /// A move wrapped past the start cell.
    PassedStart {
        /// Who passed.
        player: String,
        /// Bonus collected.
        bonus: i64,
        /// When it happened.
        timestamp: DateTime<Utc>,
    },
    /// A chance card was drawn and applied.
    ChanceDrawn {
        /// Who drew.
        player: String,
        /// Card text.
        card: String,
        /// Card effect summary.
        effect: String,
        /// When drawn.
        timestamp: DateTime<Utc>,
    },
    /// Rent changed hands.
    RentPaid {
        /// Who paid.
        payer: String,
        /// Who received.
        owner: String,
        /// Cell the rent was due on.
        cell: String,
        /// Amount paid.
        amount: i64,
        /// When paid.
        timestamp: DateTime<Utc>,
    },
    /// A cell was bought from the bank.
    Purchase {
        /// Buyer.
        player: String,
        /// Cell bought.
        cell: String,
        /// Price paid.
        price: i64,
        /// When bought.
        timestamp: DateTime<Utc>,
    },
    /// A house was added to a street.
    HouseBuilt {
        /// Builder.
        player: String,
        /// Street.
        cell: String,
        /// Houses standing afterwards.
        houses: u8,
        /// Amount paid.
        cost: i64,
        /// When built.
        timestamp: DateTime<Utc>,
    },
    /// Four houses were replaced by a hotel.
    HotelBuilt {
        /// Builder.
        player: String,
        /// Street.
        cell: String,
        /// Amount paid.
        cost: i64,
        /// When built.
        timestamp: DateTime<Utc>,
    },
    /// A chat message was posted.
    Chat {
        /// Author.
        player: String,
        /// Message text.
        text: String,
        /// When posted.
        timestamp: DateTime<Utc>,
    },
}

impl JournalEntry {
    /// When the entry was recorded.
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::Roll { timestamp, .. }
            | Self::PassedStart { timestamp, .. }
            | Self::ChanceDrawn { timestamp, .. }
            | Self::RentPaid { timestamp, .. }
            | Self::Purchase { timestamp, .. }
            | Self::HouseBuilt { timestamp, .. }
            | Self::HotelBuilt { timestamp, .. }
            | Self::Chat { timestamp, .. } => *timestamp,
        }
    }
}
