use std::fmt;

use serde::{Deserialize, Serialize};

use crate::player::PlayerId;

/// Most houses a single cell can carry before upgrading to a hotel.
pub const MAX_HOUSES: u8 = 4;

/// Most hotels a single cell can carry.
pub const MAX_HOTELS: u8 = 1;

/// How many base-rent units a hotel adds to the rent multiplier.
pub const HOTEL_RENT_WEIGHT: i64 = 5;

/// Largest price or base rent a cell may carry. Keeps the full rent
/// multiplier, and sums over a whole board, well inside `i64`.
pub const MAX_AMOUNT: i64 = 1_000_000_000;

/// Sequential identifier of a board cell (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellId(pub u32);

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What kind of cell this is, which decides how landing on it resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellKind {
    /// A street that can be bought and built on.
    Ordinary,
    /// A railway station. Purchasable, never built on.
    Station,
    /// A utility company. Purchasable, never built on.
    Utility,
    /// A corner or tax cell with no effect (Start, Jail, Parking, ...).
    Special,
    /// A cell that draws a chance card.
    Chance,
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ordinary => write!(f, "street"),
            Self::Station => write!(f, "station"),
            Self::Utility => write!(f, "utility"),
            Self::Special => write!(f, "special"),
            Self::Chance => write!(f, "chance"),
        }
    }
}

/// Color group of a street. Non-street cells use `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorGroup {
    /// Brown streets.
    Brown,
    /// Light blue streets.
    LightBlue,
    /// Pink streets.
    Pink,
    /// Orange streets.
    Orange,
    /// Red streets.
    Red,
    /// Yellow streets.
    Yellow,
    /// Green streets.
    Green,
    /// Dark blue streets.
    Blue,
    /// No color group.
    #[default]
    None,
}

impl fmt::Display for ColorGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Brown => write!(f, "brown"),
            Self::LightBlue => write!(f, "light blue"),
            Self::Pink => write!(f, "pink"),
            Self::Orange => write!(f, "orange"),
            Self::Red => write!(f, "red"),
            Self::Yellow => write!(f, "yellow"),
            Self::Green => write!(f, "green"),
            Self::Blue => write!(f, "blue"),
            Self::None => write!(f, "-"),
        }
    }
}

/// A single cell of the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Sequential identifier.
    pub id: CellId,
    /// Display name.
    pub name: String,
    /// Landing behavior.
    pub kind: CellKind,
    /// Street color group.
    #[serde(default)]
    pub color: ColorGroup,
    /// Purchase price. Zero means the cell can never be bought.
    pub price: i64,
    /// Base rent before the building multiplier.
    pub rent: i64,
    /// Current owner, if any.
    #[serde(default)]
    pub owner: Option<PlayerId>,
    /// Fixed position on the board (index into the board table).
    pub position: usize,
    /// Number of houses (0-4).
    #[serde(default)]
    pub houses: u8,
    /// Number of hotels (0-1).
    #[serde(default)]
    pub hotels: u8,
}

impl Cell {
    /// Create an unowned, unbuilt cell.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        kind: CellKind,
        color: ColorGroup,
        price: i64,
        rent: i64,
        position: usize,
    ) -> Self {
        Self {
            id: CellId(id),
            name: name.into(),
            kind,
            color,
            price,
            rent,
            owner: None,
            position,
            houses: 0,
            hotels: 0,
        }
    }

    /// Whether this cell can ever change hands (non-zero price).
    pub fn is_purchasable(&self) -> bool {
        self.price > 0
    }

    /// Whether this cell can be bought right now.
    pub fn is_for_sale(&self) -> bool {
        self.is_purchasable() && self.owner.is_none()
    }

    /// Whether houses and hotels may stand on this cell.
    pub fn is_buildable(&self) -> bool {
        self.kind == CellKind::Ordinary
    }

    /// Whether `player` owns this cell.
    pub fn is_owned_by(&self, player: PlayerId) -> bool {
        self.owner == Some(player)
    }

    /// The factor applied to base rent: `1 + houses + hotels * 5`.
    pub fn rent_multiplier(&self) -> i64 {
        1 + i64::from(self.houses) + i64::from(self.hotels) * HOTEL_RENT_WEIGHT
    }

    /// Rent a visitor owes with the current buildings.
    pub fn current_rent(&self) -> i64 {
        self.rent * self.rent_multiplier()
    }

    /// Short description of the buildings on this cell, e.g. "3 houses".
    pub fn buildings_label(&self) -> String {
        match (self.houses, self.hotels) {
            (0, 0) => "none".to_string(),
            (_, h) if h > 0 => "hotel".to_string(),
            (1, _) => "1 house".to_string(),
            (n, _) => format!("{n} houses"),
        }
    }
}
