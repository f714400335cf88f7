use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::{CoreError, CoreResult};
use crate::player::{Player, PlayerId, PlayerSpec};

/// Balance every seat starts with in the standard game.
pub const STANDARD_BALANCE: i64 = 1500;

/// The fixed, ordered list of players. Seat order is turn order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Build a roster from player specs, assigning ids 1, 2, 3, ...
    pub fn from_specs(specs: &[PlayerSpec], starting_balance: i64) -> CoreResult<Self> {
        if specs.is_empty() {
            return Err(CoreError::InvalidRoster("no players".into()));
        }

        let mut seen = HashSet::new();
        for spec in specs {
            let name = spec.name.trim();
            if name.is_empty() {
                return Err(CoreError::InvalidRoster("player name is empty".into()));
            }
            if !seen.insert(name.to_lowercase()) {
                return Err(CoreError::InvalidRoster(format!(
                    "duplicate player name \"{name}\""
                )));
            }
        }

        let players = specs
            .iter()
            .zip(1u32..)
            .map(|(spec, id)| Player::new(id, spec.name.trim(), &spec.color, starting_balance))
            .collect();
        Ok(Self { players })
    }

    /// Four default seats with 1500 each.
    pub fn standard() -> Self {
        let players = PlayerSpec::defaults()
            .into_iter()
            .zip(1u32..)
            .map(|(spec, id)| Player::new(id, spec.name, spec.color, STANDARD_BALANCE))
            .collect();
        Self { players }
    }

    /// Number of seats.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Whether the roster has no seats.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// The player in seat `index`.
    pub fn get(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Mutable access to the player in seat `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Player> {
        self.players.get_mut(index)
    }

    /// Look up a player by id.
    pub fn by_id(&self, id: PlayerId) -> CoreResult<&Player> {
        self.players
            .iter()
            .find(|p| p.id == id)
            .ok_or(CoreError::PlayerNotFound(id))
    }

    /// Mutable lookup by id.
    pub fn by_id_mut(&mut self, id: PlayerId) -> CoreResult<&mut Player> {
        self.players
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(CoreError::PlayerNotFound(id))
    }

    /// Seat index of a player.
    pub fn index_of(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id == id)
    }

    /// All players in seat order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Iterate players in seat order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Cash plus the purchase price of every cell the player owns.
    pub fn net_worth(&self, id: PlayerId, board: &Board) -> CoreResult<i64> {
        let cash = self.by_id(id)?.balance;
        let holdings: i64 = board.owned_by(id).iter().map(|c| c.price).sum();
        Ok(cash + holdings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_roster() {
        let r = Roster::standard();
        assert_eq!(r.len(), 4);
        assert!(r.iter().all(|p| p.balance == 1500 && p.position == 0));
        let ids: Vec<u32> = r.iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn from_specs_assigns_sequential_ids() {
        let specs = vec![
            PlayerSpec::new("Anna", "#111111"),
            PlayerSpec::new("Boris", "#222222"),
            PlayerSpec::new("Vera", "#333333"),
        ];
        let r = Roster::from_specs(&specs, 1000).unwrap();
        assert_eq!(r.len(), 3);
        assert_eq!(r.by_id(PlayerId(2)).unwrap().name, "Boris");
        assert_eq!(r.index_of(PlayerId(3)), Some(2));
        assert_eq!(r.get(0).unwrap().balance, 1000);
    }

    #[test]
    fn empty_specs_rejected() {
        assert!(Roster::from_specs(&[], 1500).is_err());
    }

    #[test]
    fn duplicate_names_rejected() {
        let specs = vec![
            PlayerSpec::new("Anna", "#111111"),
            PlayerSpec::new("anna", "#222222"),
        ];
        let err = Roster::from_specs(&specs, 1500).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn blank_name_rejected() {
        let specs = vec![PlayerSpec::new("   ", "#111111")];
        assert!(Roster::from_specs(&specs, 1500).is_err());
    }

    #[test]
    fn unknown_player_lookup() {
        let r = Roster::standard();
        assert!(matches!(
            r.by_id(PlayerId(9)),
            Err(CoreError::PlayerNotFound(PlayerId(9)))
        ));
    }

    #[test]
    fn net_worth_includes_holdings() {
        let r = Roster::standard();
        let mut board = Board::standard();
        board.cell_mut(1).unwrap().owner = Some(PlayerId(1));
        board.cell_mut(3).unwrap().owner = Some(PlayerId(1));
        assert_eq!(r.net_worth(PlayerId(1), &board).unwrap(), 1500 + 60 + 200);
        assert_eq!(r.net_worth(PlayerId(2), &board).unwrap(), 1500);
    }
}
