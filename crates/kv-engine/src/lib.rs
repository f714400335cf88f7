//! Turn and economy rules engine for Kvartal.
//!
//! Provides dice rolling over an injectable random source, the chance card
//! table, rent and building rules, the turn state machine, a chat
//! transcript, a journal of game events, and [`Game`], which owns the board
//! and roster for one session. [`GameSession`] puts a line-oriented command
//! surface on top of it.

pub mod chance;
pub mod chat;
pub mod config;
pub mod dice;
pub mod error;
pub mod game;
pub mod journal;
pub mod notice;
pub mod random;
pub mod rules;
pub mod session;
pub mod turn;

pub use chance::{CHANCE_CARDS, CardEffect, ChanceCard};
pub use chat::{ChatMessage, MessageId, Transcript};
pub use config::GameConfig;
pub use dice::DiceRoll;
pub use error::{EngineError, EngineResult, Rejection};
pub use game::{Game, Landing, RollOutcome};
pub use journal::{Journal, JournalEntry};
pub use notice::{Notice, NoticeLevel};
pub use random::{RandomSource, ScriptedRandom};
pub use rules::Movement;
pub use session::GameSession;
pub use turn::{TurnPhase, TurnState};
