//! Pure rule checks: movement, rent, purchase, and building.
//!
//! Nothing in here mutates state. [`crate::Game`] calls these to decide
//! what happens and then applies the result.

use serde::{Deserialize, Serialize};

use kv_core::cell::MAX_HOUSES;
use kv_core::{Cell, Player, PlayerId, Roster};

use crate::error::Rejection;

/// A token moving along the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movement {
    /// Position before the move.
    pub from: usize,
    /// Position after the move.
    pub to: usize,
    /// Number of cells advanced.
    pub steps: u32,
    /// Whether the move wrapped past the start cell.
    pub passed_start: bool,
}

/// Advance `steps` cells from `from` on a board of `board_len` cells.
///
/// The move passes start when `from + steps >= board_len`.
pub fn advance(from: usize, steps: u32, board_len: usize) -> Movement {
    let raw = from + steps as usize;
    Movement {
        from,
        to: raw % board_len,
        steps,
        passed_start: raw >= board_len,
    }
}

/// Rent `visitor` owes for landing on `cell`, with the owner to pay.
///
/// `None` for unowned cells, the visitor's own cells, and zero-rent cells.
pub fn rent_due(cell: &Cell, visitor: PlayerId) -> Option<(PlayerId, i64)> {
    let owner = cell.owner?;
    if owner == visitor || cell.rent <= 0 {
        return None;
    }
    Some((owner, cell.current_rent()))
}

/// Check that `buyer` may buy `cell`. Returns the price to pay.
pub fn check_purchase(cell: &Cell, buyer: &Player, roster: &Roster) -> Result<i64, Rejection> {
    if !cell.is_purchasable() {
        return Err(Rejection::NotForSale(cell.name.clone()));
    }
    if let Some(owner) = cell.owner {
        let owner = roster
            .by_id(owner)
            .map(|p| p.name.clone())
            .unwrap_or_else(|_| owner.to_string());
        return Err(Rejection::AlreadyOwned {
            cell: cell.name.clone(),
            owner,
        });
    }
    require_funds(buyer, cell.price)?;
    Ok(cell.price)
}

/// Check that `builder` may add a house to `cell` for `cost`.
pub fn check_house(cell: &Cell, builder: &Player, cost: i64) -> Result<(), Rejection> {
    require_own_street(cell, builder)?;
    if cell.hotels > 0 {
        return Err(Rejection::HotelBlocksHouses(cell.name.clone()));
    }
    if cell.houses >= MAX_HOUSES {
        return Err(Rejection::HousesFull(cell.name.clone()));
    }
    require_funds(builder, cost)
}

/// Check that `builder` may upgrade `cell` to a hotel for `cost`.
pub fn check_hotel(cell: &Cell, builder: &Player, cost: i64) -> Result<(), Rejection> {
    require_own_street(cell, builder)?;
    if cell.hotels > 0 {
        return Err(Rejection::HotelAlreadyBuilt(cell.name.clone()));
    }
    if cell.houses < MAX_HOUSES {
        return Err(Rejection::HousesIncomplete {
            cell: cell.name.clone(),
            houses: cell.houses,
        });
    }
    require_funds(builder, cost)
}

fn require_own_street(cell: &Cell, builder: &Player) -> Result<(), Rejection> {
    if !cell.is_owned_by(builder.id) || !cell.is_buildable() {
        return Err(Rejection::CannotBuildHere(cell.name.clone()));
    }
    Ok(())
}

fn require_funds(player: &Player, amount: i64) -> Result<(), Rejection> {
    if !player.can_afford(amount) {
        return Err(Rejection::InsufficientFunds {
            needed: amount,
            available: player.balance,
        });
    }
    Ok(())
}
