//! The turn cycle.
//!
//! `Idle(i) -> DiceRolling -> LandingResolved -> Idle((i + 1) mod n)`.
//! Buying and building happen while idle and never move the pointer.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Where the active turn stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Waiting for the active player's next command.
    #[default]
    Idle,
    /// Dice thrown, token moving.
    DiceRolling,
    /// The landed cell's effect has been applied.
    LandingResolved,
}

impl fmt::Display for TurnPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::DiceRolling => write!(f, "rolling"),
            Self::LandingResolved => write!(f, "resolving the landing"),
        }
    }
}

/// Whose turn it is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnState {
    active: usize,
    player_count: usize,
    phase: TurnPhase,
    completed: u32,
}

impl TurnState {
    /// Start with seat 0 to move. `player_count` must be non-zero.
    pub fn new(player_count: usize) -> Self {
        Self {
            active: 0,
            player_count: player_count.max(1),
            phase: TurnPhase::Idle,
            completed: 0,
        }
    }

    /// Seat index of the active player.
    pub fn active(&self) -> usize {
        self.active
    }

    /// Current phase.
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Number of turns completed so far.
    pub fn completed(&self) -> u32 {
        self.completed
    }

    /// Round number (1-based): every seat moves once per round.
    pub fn round(&self) -> u32 {
        self.completed / self.player_count as u32 + 1
    }

    /// `Idle -> DiceRolling`.
    pub fn begin_roll(&mut self) -> EngineResult<()> {
        self.require_phase(TurnPhase::Idle, "roll")?;
        self.phase = TurnPhase::DiceRolling;
        Ok(())
    }

    /// `DiceRolling -> LandingResolved`.
    pub fn resolve_landing(&mut self) -> EngineResult<()> {
        self.require_phase(TurnPhase::DiceRolling, "resolve a landing")?;
        self.phase = TurnPhase::LandingResolved;
        Ok(())
    }

    /// `LandingResolved -> Idle`, handing the turn to the next seat.
    /// Returns the new active seat.
    pub fn advance(&mut self) -> EngineResult<usize> {
        self.require_phase(TurnPhase::LandingResolved, "end the turn")?;
        self.active = (self.active + 1) % self.player_count;
        self.completed += 1;
        self.phase = TurnPhase::Idle;
        Ok(self.active)
    }

    fn require_phase(&self, phase: TurnPhase, action: &'static str) -> EngineResult<()> {
        if self.phase != phase {
            return Err(EngineError::WrongPhase {
                action,
                phase: self.phase.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_turn(t: &mut TurnState) -> usize {
        t.begin_roll().unwrap();
        t.resolve_landing().unwrap();
        t.advance().unwrap()
    }

    #[test]
    fn starts_idle_at_seat_zero() {
        let t = TurnState::new(4);
        assert_eq!(t.active(), 0);
        assert_eq!(t.phase(), TurnPhase::Idle);
        assert_eq!(t.round(), 1);
    }

    #[test]
    fn cycle_wraps_around() {
        let mut t = TurnState::new(3);
        assert_eq!(full_turn(&mut t), 1);
        assert_eq!(full_turn(&mut t), 2);
        assert_eq!(full_turn(&mut t), 0);
        assert_eq!(t.completed(), 3);
        assert_eq!(t.round(), 2);
    }

    #[test]
    fn phases_in_order() {
        let mut t = TurnState::new(2);
        t.begin_roll().unwrap();
        assert_eq!(t.phase(), TurnPhase::DiceRolling);
        t.resolve_landing().unwrap();
        assert_eq!(t.phase(), TurnPhase::LandingResolved);
        t.advance().unwrap();
        assert_eq!(t.phase(), TurnPhase::Idle);
    }

    #[test]
    fn out_of_order_transition_rejected() {
        let mut t = TurnState::new(2);
        assert!(t.advance().is_err());
        t.begin_roll().unwrap();
        let err = t.begin_roll().unwrap_err();
        assert!(err.to_string().contains("rolling"));
        assert_eq!(t.active(), 0);
    }
}
