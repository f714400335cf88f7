use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::cell::{Cell, CellKind, ColorGroup, MAX_AMOUNT, MAX_HOTELS, MAX_HOUSES};
use crate::error::{CoreError, CoreResult};
use crate::player::PlayerId;

/// The ordered table of cells. Cell `i` sits at board position `i`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Cell>", into = "Vec<Cell>")]
pub struct Board {
    cells: Vec<Cell>,
}

impl Board {
    /// Build a board from a cell table, checking its invariants.
    pub fn new(cells: Vec<Cell>) -> CoreResult<Self> {
        let board = Self { cells };
        board.validate()?;
        Ok(board)
    }

    /// The standard 36-cell Moscow board.
    pub fn standard() -> Self {
        use CellKind::{Chance, Ordinary, Special, Station, Utility};
        use ColorGroup::{Blue, Brown, Green, LightBlue, Orange, Pink, Red, Yellow};
        const NONE: ColorGroup = ColorGroup::None;

        let table: [(&str, CellKind, ColorGroup, i64, i64); 36] = [
            ("Start", Special, NONE, 0, 0),
            ("Taganskaya", Ordinary, Brown, 60, 10),
            ("Kurskaya", Ordinary, Brown, 60, 10),
            ("South Station", Station, NONE, 200, 50),
            ("Rizhskaya", Ordinary, LightBlue, 100, 15),
            ("Chance", Chance, NONE, 0, 0),
            ("Polyanka", Ordinary, LightBlue, 100, 15),
            ("Sretenka", Ordinary, LightBlue, 120, 18),
            ("Jail", Special, NONE, 0, 0),
            ("Ostozhenka", Ordinary, Pink, 140, 20),
            ("Power Station", Utility, NONE, 150, 30),
            ("Smolenskaya", Ordinary, Pink, 140, 20),
            ("Yaroslavskaya", Ordinary, Pink, 160, 22),
            ("North Station", Station, NONE, 200, 50),
            ("Shchyolkovskaya", Ordinary, Orange, 180, 25),
            ("Kazansky Station", Ordinary, Orange, 180, 25),
            ("Chance", Chance, NONE, 0, 0),
            ("Parking", Special, NONE, 0, 0),
            ("Leningradsky Prospekt", Ordinary, Red, 220, 30),
            ("Tverskaya", Ordinary, Red, 220, 30),
            ("Waterworks", Utility, NONE, 150, 30),
            ("Pushkinskaya", Ordinary, Red, 240, 35),
            ("West Station", Station, NONE, 200, 50),
            ("Kutuzovsky Prospekt", Ordinary, Yellow, 260, 40),
            ("Mozhaiskoe Highway", Ordinary, Yellow, 260, 40),
            ("Chance", Chance, NONE, 0, 0),
            ("Kutuzovskaya", Ordinary, Yellow, 280, 45),
            ("Taxes", Special, NONE, 0, 0),
            ("Arbat", Ordinary, Green, 300, 50),
            ("Smolenskaya Embankment", Ordinary, Green, 300, 50),
            ("East Station", Station, NONE, 200, 50),
            ("Krasnopresnenskaya", Ordinary, Green, 320, 55),
            ("Nikolskaya", Ordinary, Blue, 350, 60),
            ("Chance", Chance, NONE, 0, 0),
            ("Tverskaya Square", Ordinary, Blue, 400, 70),
            ("Go to Jail", Special, NONE, 0, 0),
        ];

        let cells = table
            .into_iter()
            .zip(1u32..)
            .enumerate()
            .map(|(position, ((name, kind, color, price, rent), id))| {
                Cell::new(id, name, kind, color, price, rent, position)
            })
            .collect();
        Self { cells }
    }

    /// Parse and validate a board from a JSON array of cells.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the board as pretty JSON.
    pub fn to_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the structural invariants of the cell table.
    pub fn validate(&self) -> CoreResult<()> {
        if self.cells.is_empty() {
            return Err(CoreError::InvalidBoard("board has no cells".into()));
        }

        let mut ids = HashSet::new();
        for (index, cell) in self.cells.iter().enumerate() {
            let invalid = |msg: String| CoreError::InvalidBoard(format!("{} ({}): {msg}", cell.name, cell.id));

            if cell.position != index {
                return Err(invalid(format!("listed at index {index} but claims position {}", cell.position)));
            }
            if !ids.insert(cell.id) {
                return Err(invalid("duplicate cell id".into()));
            }
            if cell.price < 0 || cell.rent < 0 {
                return Err(invalid("price and rent must not be negative".into()));
            }
            if cell.price > MAX_AMOUNT || cell.rent > MAX_AMOUNT {
                return Err(invalid(format!("price and rent must not exceed {MAX_AMOUNT}")));
            }
            if cell.houses > MAX_HOUSES || cell.hotels > MAX_HOTELS {
                return Err(invalid("too many buildings".into()));
            }
            if cell.hotels > 0 && cell.houses > 0 {
                return Err(invalid("a hotel replaces the houses".into()));
            }
            if (cell.houses > 0 || cell.hotels > 0) && !cell.is_buildable() {
                return Err(invalid(format!("a {} cannot carry buildings", cell.kind)));
            }
        }
        Ok(())
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the board has no cells. A validated board never is.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cell at `position`.
    pub fn cell(&self, position: usize) -> Option<&Cell> {
        self.cells.get(position)
    }

    /// Mutable access to the cell at `position`.
    pub fn cell_mut(&mut self, position: usize) -> Option<&mut Cell> {
        self.cells.get_mut(position)
    }

    /// The cell at `position`, or an error naming the board size.
    pub fn try_cell(&self, position: usize) -> CoreResult<&Cell> {
        self.cells.get(position).ok_or(CoreError::PositionOutOfRange {
            position,
            len: self.cells.len(),
        })
    }

    /// Mutable variant of [`Board::try_cell`].
    pub fn try_cell_mut(&mut self, position: usize) -> CoreResult<&mut Cell> {
        let len = self.cells.len();
        self.cells
            .get_mut(position)
            .ok_or(CoreError::PositionOutOfRange { position, len })
    }

    /// All cells owned by `player`, in board order.
    pub fn owned_by(&self, player: PlayerId) -> Vec<&Cell> {
        self.cells.iter().filter(|c| c.is_owned_by(player)).collect()
    }

    /// Iterate cells in board order.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Vec<Cell>> for Board {
    type Error = CoreError;

    fn try_from(cells: Vec<Cell>) -> CoreResult<Self> {
        Self::new(cells)
    }
}

impl From<Board> for Vec<Cell> {
    fn from(board: Board) -> Self {
        board.cells
    }
}
