//! The game state engine.
//!
//! `Game` exclusively owns the board, the roster, the turn pointer, the
//! chat transcript and the journal. Every command resolves to completion
//! before it returns; rejected commands leave the state untouched.

use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use kv_core::{Board, Cell, CellKind, CoreError, Player, PlayerId, Roster};

use crate::chance::{self, ChanceCard};
use crate::chat::{MessageId, Transcript};
use crate::config::GameConfig;
use crate::dice::DiceRoll;
use crate::error::{EngineError, EngineResult, Rejection};
use crate::journal::{Journal, JournalEntry};
use crate::notice::Notice;
use crate::random::RandomSource;
use crate::rules::{self, Movement};
use crate::turn::TurnState;

/// What happened on the cell a player landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Landing {
    /// A chance card was drawn and applied.
    Chance(ChanceCard),
    /// Rent was paid to another player.
    Rent {
        /// Who received the rent.
        owner: PlayerId,
        /// Owner's display name.
        owner_name: String,
        /// Amount paid.
        amount: i64,
    },
    /// No financial effect.
    Quiet,
}

/// Everything a single roll did.
#[derive(Debug, Clone)]
pub struct RollOutcome {
    /// Who rolled.
    pub player: PlayerId,
    /// Roller's display name.
    pub player_name: String,
    /// The dice.
    pub dice: DiceRoll,
    /// The token's move.
    pub movement: Movement,
    /// Bonus credited for passing start (zero if not passed).
    pub bonus: i64,
    /// Name of the cell landed on.
    pub cell_name: String,
    /// Landing effect.
    pub landing: Landing,
    /// Whose turn it is now.
    pub next_player: PlayerId,
    /// Next player's display name.
    pub next_player_name: String,
}

impl RollOutcome {
    /// User-facing notices for this roll, in the order they happened.
    pub fn notices(&self) -> Vec<Notice> {
        let mut notices = vec![Notice::success(format!(
            "{} rolled {} and moved to {}",
            self.player_name, self.dice, self.cell_name
        ))];
        if self.movement.passed_start {
            notices.push(Notice::success(format!(
                "{} passed Start! Collect ₽{}",
                self.player_name, self.bonus
            )));
        }
        match &self.landing {
            Landing::Chance(card) => {
                notices.push(Notice::info(format!("Chance: {}", card.text)));
            }
            Landing::Rent {
                owner_name, amount, ..
            } => {
                notices.push(Notice::error(format!(
                    "{} paid {owner_name} rent of ₽{amount}",
                    self.player_name
                )));
            }
            Landing::Quiet => {}
        }
        notices.push(Notice::info(format!("{} to move", self.next_player_name)));
        notices
    }
}

/// A running game.
pub struct Game {
    config: GameConfig,
    board: Board,
    roster: Roster,
    turn: TurnState,
    selected: Option<usize>,
    last_roll: Option<DiceRoll>,
    transcript: Transcript,
    journal: Journal,
    rng: Box<dyn RandomSource>,
}

impl Game {
    /// Start a game on the standard board.
    pub fn new(config: GameConfig) -> EngineResult<Self> {
        Self::with_board(config, Board::standard())
    }

    /// Start a game on a custom board.
    pub fn with_board(config: GameConfig, board: Board) -> EngineResult<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(config, board, rng)
    }

    /// Start a game with an explicit random source.
    pub fn with_rng(
        config: GameConfig,
        board: Board,
        rng: impl RandomSource + 'static,
    ) -> EngineResult<Self> {
        config.validate()?;
        let roster = Roster::from_specs(&config.players, config.starting_balance)?;
        Self::from_parts(config, board, roster, rng)
    }

    /// Resume from prepared tables, e.g. a mid-game position.
    ///
    /// Every cell owner must be seated in `roster`.
    pub fn from_parts(
        config: GameConfig,
        board: Board,
        roster: Roster,
        rng: impl RandomSource + 'static,
    ) -> EngineResult<Self> {
        config.validate()?;
        if roster.is_empty() {
            return Err(CoreError::InvalidRoster("no players".into()).into());
        }
        board.validate()?;
        for cell in board.iter() {
            if let Some(owner) = cell.owner {
                roster.by_id(owner)?;
            }
        }

        info!(
            players = roster.len(),
            cells = board.len(),
            seed = ?config.seed,
            "game started"
        );
        Ok(Self {
            turn: TurnState::new(roster.len()),
            config,
            board,
            roster,
            selected: None,
            last_roll: None,
            transcript: Transcript::new(),
            journal: Journal::new(),
            rng: Box::new(rng),
        })
    }

    /// The configuration the game was started with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The players.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The turn pointer.
    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    /// The player whose turn it is.
    pub fn active_player(&self) -> &Player {
        &self.roster.players()[self.turn.active()]
    }

    /// The selected cell, if any.
    pub fn selected(&self) -> Option<&Cell> {
        self.selected.and_then(|p| self.board.cell(p))
    }

    /// The most recent dice roll.
    pub fn last_roll(&self) -> Option<DiceRoll> {
        self.last_roll
    }

    /// The chat transcript.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// The journal of game events.
    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// Select the cell at `position` for inspection.
    pub fn select(&mut self, position: usize) -> EngineResult<&Cell> {
        let cell = self.board.try_cell(position)?;
        self.selected = Some(position);
        Ok(cell)
    }

    /// Clear the selection.
    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Roll the dice for the active player, move, resolve the landing and
    /// pass the turn on.
    pub fn roll_dice(&mut self) -> EngineResult<RollOutcome> {
        self.turn.begin_roll()?;

        let dice = DiceRoll::throw(self.rng.as_mut());
        self.last_roll = Some(dice);

        let seat = self.turn.active();
        let board_len = self.board.len();
        let bonus_amount = self.config.pass_start_bonus;
        let player = seat_mut(&mut self.roster, seat)?;
        let movement = rules::advance(player.position, dice.total(), board_len);
        player.position = movement.to;
        let bonus = if movement.passed_start {
            player.credit(bonus_amount);
            bonus_amount
        } else {
            0
        };
        let mover = player.id;
        let mover_name = player.name.clone();

        let cell_name = self.board.try_cell(movement.to)?.name.clone();
        self.selected = Some(movement.to);

        info!(
            player = %mover_name,
            first = dice.first,
            second = dice.second,
            from = movement.from,
            to = movement.to,
            "dice rolled"
        );
        let now = Utc::now();
        self.journal.append(JournalEntry::Roll {
            player: mover_name.clone(),
            dice: [dice.first, dice.second],
            from: movement.from,
            to: movement.to,
            cell: cell_name.clone(),
            timestamp: now,
        });
        if movement.passed_start {
            info!(player = %mover_name, bonus, "passed start");
            self.journal.append(JournalEntry::PassedStart {
                player: mover_name.clone(),
                bonus,
                timestamp: now,
            });
        }

        let landing = self.resolve_landing(seat, movement.to)?;
        self.turn.resolve_landing()?;

        let next_seat = self.turn.advance()?;
        let next = &self.roster.players()[next_seat];
        debug!(next = %next.name, turn = self.turn.completed(), "turn advanced");

        Ok(RollOutcome {
            player: mover,
            player_name: mover_name,
            dice,
            movement,
            bonus,
            cell_name,
            landing,
            next_player: next.id,
            next_player_name: next.name.clone(),
        })
    }

    fn resolve_landing(&mut self, seat: usize, position: usize) -> EngineResult<Landing> {
        let cell = self.board.try_cell(position)?;

        if cell.kind == CellKind::Chance {
            let card = *chance::draw(self.rng.as_mut());
            let player = seat_mut(&mut self.roster, seat)?;
            card.effect.apply(player);
            info!(player = %player.name, card = card.id, "chance card drawn");
            self.journal.append(JournalEntry::ChanceDrawn {
                player: player.name.clone(),
                card: card.text.to_string(),
                effect: card.effect.to_string(),
                timestamp: Utc::now(),
            });
            return Ok(Landing::Chance(card));
        }

        let visitor = self.roster.players()[seat].id;
        let Some((owner, amount)) = rules::rent_due(cell, visitor) else {
            return Ok(Landing::Quiet);
        };
        let cell_name = cell.name.clone();

        let payer = seat_mut(&mut self.roster, seat)?;
        payer.debit(amount);
        let payer_name = payer.name.clone();
        let receiver = self.roster.by_id_mut(owner)?;
        receiver.credit(amount);
        let owner_name = receiver.name.clone();

        info!(payer = %payer_name, owner = %owner_name, amount, cell = %cell_name, "rent paid");
        self.journal.append(JournalEntry::RentPaid {
            payer: payer_name,
            owner: owner_name.clone(),
            cell: cell_name,
            amount,
            timestamp: Utc::now(),
        });
        Ok(Landing::Rent {
            owner,
            owner_name,
            amount,
        })
    }

    /// Buy the selected cell for the active player. Deselects on success.
    pub fn buy_property(&mut self) -> EngineResult<Notice> {
        let position = self.selected.ok_or_else(|| reject("buy", Rejection::NothingSelected))?;
        let seat = self.turn.active();
        let cell = self.board.try_cell(position)?;
        let buyer = &self.roster.players()[seat];
        let price = rules::check_purchase(cell, buyer, &self.roster).map_err(|r| reject("buy", r))?;

        let buyer_id = buyer.id;
        let buyer_name = buyer.name.clone();
        let cell_name = cell.name.clone();

        seat_mut(&mut self.roster, seat)?.debit(price);
        self.board.try_cell_mut(position)?.owner = Some(buyer_id);
        self.selected = None;

        info!(player = %buyer_name, cell = %cell_name, price, "property bought");
        self.journal.append(JournalEntry::Purchase {
            player: buyer_name.clone(),
            cell: cell_name.clone(),
            price,
            timestamp: Utc::now(),
        });
        Ok(Notice::success(format!(
            "{buyer_name} bought {cell_name} for ₽{price}"
        )))
    }

    /// Add a house to the selected street.
    pub fn build_house(&mut self) -> EngineResult<Notice> {
        let position = self
            .selected
            .ok_or_else(|| reject("build a house", Rejection::NothingSelected))?;
        let seat = self.turn.active();
        let cost = self.config.house_cost;
        let cell = self.board.try_cell(position)?;
        let builder = &self.roster.players()[seat];
        rules::check_house(cell, builder, cost).map_err(|r| reject("build a house", r))?;
        let builder_name = builder.name.clone();

        seat_mut(&mut self.roster, seat)?.debit(cost);
        let cell = self.board.try_cell_mut(position)?;
        cell.houses += 1;
        let houses = cell.houses;
        let cell_name = cell.name.clone();

        info!(player = %builder_name, cell = %cell_name, houses, "house built");
        self.journal.append(JournalEntry::HouseBuilt {
            player: builder_name,
            cell: cell_name.clone(),
            houses,
            cost,
            timestamp: Utc::now(),
        });
        Ok(Notice::success(format!(
            "House built on {cell_name} ({houses}/4)"
        )))
    }

    /// Replace the four houses on the selected street with a hotel.
    pub fn build_hotel(&mut self) -> EngineResult<Notice> {
        let position = self
            .selected
            .ok_or_else(|| reject("build a hotel", Rejection::NothingSelected))?;
        let seat = self.turn.active();
        let cost = self.config.hotel_cost;
        let cell = self.board.try_cell(position)?;
        let builder = &self.roster.players()[seat];
        rules::check_hotel(cell, builder, cost).map_err(|r| reject("build a hotel", r))?;
        let builder_name = builder.name.clone();

        seat_mut(&mut self.roster, seat)?.debit(cost);
        let cell = self.board.try_cell_mut(position)?;
        cell.houses = 0;
        cell.hotels = 1;
        let cell_name = cell.name.clone();

        info!(player = %builder_name, cell = %cell_name, "hotel built");
        self.journal.append(JournalEntry::HotelBuilt {
            player: builder_name,
            cell: cell_name.clone(),
            cost,
            timestamp: Utc::now(),
        });
        Ok(Notice::success(format!("Hotel built on {cell_name}")))
    }

    /// Post a chat message as the active player. Blank text is ignored.
    pub fn send_message(&mut self, text: &str) -> Option<MessageId> {
        let author = &self.roster.players()[self.turn.active()];
        let message = self.transcript.post(author.id, author.name.clone(), text)?;
        debug!(author = %message.author_name, "chat message posted");
        let id = message.id;
        self.journal.append(JournalEntry::Chat {
            player: message.author_name.clone(),
            text: message.text.clone(),
            timestamp: message.timestamp,
        });
        Some(id)
    }

    /// Cash plus holdings of a player.
    pub fn net_worth(&self, player: PlayerId) -> EngineResult<i64> {
        Ok(self.roster.net_worth(player, &self.board)?)
    }
}

fn seat_mut(roster: &mut Roster, seat: usize) -> EngineResult<&mut Player> {
    roster
        .get_mut(seat)
        .ok_or_else(|| CoreError::InvalidRoster(format!("no player in seat {seat}")).into())
}

fn reject(action: &str, rejection: Rejection) -> EngineError {
    debug!(action, reason = %rejection, "command rejected");
    EngineError::Rejected(rejection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRandom;

    fn game_with_faces(faces: &[u32]) -> Game {
        Game::with_rng(
            GameConfig::default(),
            Board::standard(),
            ScriptedRandom::from_faces(faces),
        )
        .unwrap()
    }

    fn rejection(err: EngineError) -> Rejection {
        match err {
            EngineError::Rejected(r) => r,
            other => panic!("expected a rejection, got {other}"),
        }
    }

    #[test]
    fn new_game_state() {
        let g = Game::new(GameConfig::default().with_seed(1)).unwrap();
        assert_eq!(g.board().len(), 36);
        assert_eq!(g.roster().len(), 4);
        assert_eq!(g.active_player().name, "Player 1");
        assert!(g.selected().is_none());
        assert!(g.last_roll().is_none());
        assert!(g.journal().is_empty());
    }

    #[test]
    fn roll_moves_selects_and_advances() {
        let mut g = game_with_faces(&[1, 2]);
        let out = g.roll_dice().unwrap();
        assert_eq!(out.dice.total(), 3);
        assert_eq!(out.movement.to, 3);
        assert_eq!(out.cell_name, "South Station");
        assert_eq!(out.landing, Landing::Quiet);
        assert_eq!(out.next_player, PlayerId(2));

        assert_eq!(g.roster().get(0).unwrap().position, 3);
        assert_eq!(g.selected().unwrap().position, 3);
        assert_eq!(g.active_player().id, PlayerId(2));
        assert_eq!(g.last_roll(), Some(out.dice));
        assert_eq!(g.journal().len(), 1);
    }

    #[test]
    fn buy_scenario() {
        let mut g = game_with_faces(&[1, 2]);
        g.roll_dice().unwrap();

        let buyer = g.active_player().id;
        let notice = g.buy_property().unwrap();
        assert!(notice.text.contains("South Station"));
        assert_eq!(g.roster().by_id(buyer).unwrap().balance, 1300);
        assert_eq!(g.board().cell(3).unwrap().owner, Some(buyer));
        assert!(g.selected().is_none());
    }

    #[test]
    fn buying_twice_fails_already_owned() {
        let mut g = game_with_faces(&[1, 2]);
        g.select(3).unwrap();
        g.buy_property().unwrap();
        g.select(3).unwrap();
        let err = g.buy_property().unwrap_err();
        assert!(matches!(rejection(err), Rejection::AlreadyOwned { .. }));
        assert_eq!(g.active_player().balance, 1300);
    }

    #[test]
    fn buy_without_selection() {
        let mut g = game_with_faces(&[1, 2]);
        let err = g.buy_property().unwrap_err();
        assert_eq!(rejection(err), Rejection::NothingSelected);
    }

    #[test]
    fn buy_zero_price_cell() {
        let mut g = game_with_faces(&[1, 2]);
        g.select(0).unwrap();
        let err = g.buy_property().unwrap_err();
        assert_eq!(rejection(err), Rejection::NotForSale("Start".into()));
        assert!(g.board().cell(0).unwrap().owner.is_none());
    }

    #[test]
    fn buy_with_insufficient_funds_leaves_state() {
        let config = GameConfig::default().with_starting_balance(100);
        let mut g = Game::with_rng(config, Board::standard(), ScriptedRandom::new(vec![0])).unwrap();
        g.select(34).unwrap();
        let err = g.buy_property().unwrap_err();
        assert!(matches!(rejection(err), Rejection::InsufficientFunds { needed: 400, available: 100 }));
        assert_eq!(g.active_player().balance, 100);
        assert!(g.board().cell(34).unwrap().owner.is_none());
        assert_eq!(g.selected().unwrap().position, 34);
    }

    #[test]
    fn house_then_hotel_sequence() {
        let mut g = game_with_faces(&[1, 2]);
        g.select(1).unwrap();
        g.buy_property().unwrap();
        g.select(1).unwrap();

        for n in 1..=4u8 {
            g.build_house().unwrap();
            assert_eq!(g.board().cell(1).unwrap().houses, n);
        }
        let err = g.build_house().unwrap_err();
        assert_eq!(rejection(err), Rejection::HousesFull("Taganskaya".into()));

        g.build_hotel().unwrap();
        let cell = g.board().cell(1).unwrap();
        assert_eq!((cell.houses, cell.hotels), (0, 1));
        assert_eq!(g.active_player().balance, 1500 - 60 - 4 * 50 - 200);

        let err = g.build_house().unwrap_err();
        assert_eq!(rejection(err), Rejection::HotelBlocksHouses("Taganskaya".into()));
        let err = g.build_hotel().unwrap_err();
        assert_eq!(rejection(err), Rejection::HotelAlreadyBuilt("Taganskaya".into()));
        assert_eq!(g.selected().unwrap().position, 1);
    }

    #[test]
    fn hotel_needs_four_houses() {
        let mut g = game_with_faces(&[1, 2]);
        g.select(1).unwrap();
        g.buy_property().unwrap();
        g.select(1).unwrap();
        g.build_house().unwrap();
        let err = g.build_hotel().unwrap_err();
        assert_eq!(
            rejection(err),
            Rejection::HousesIncomplete {
                cell: "Taganskaya".into(),
                houses: 1,
            }
        );
    }

    #[test]
    fn cannot_build_on_others_or_stations() {
        let mut g = game_with_faces(&[1, 2]);
        g.select(1).unwrap();
        assert!(matches!(
            rejection(g.build_house().unwrap_err()),
            Rejection::CannotBuildHere(_)
        ));

        g.select(3).unwrap();
        g.buy_property().unwrap();
        g.select(3).unwrap();
        assert!(matches!(
            rejection(g.build_house().unwrap_err()),
            Rejection::CannotBuildHere(_)
        ));
    }

    #[test]
    fn buying_and_building_keep_the_turn() {
        let mut g = game_with_faces(&[1, 2]);
        g.select(1).unwrap();
        g.buy_property().unwrap();
        g.select(1).unwrap();
        g.build_house().unwrap();
        assert_eq!(g.turn().active(), 0);
        assert_eq!(g.turn().completed(), 0);
    }

    #[test]
    fn chance_card_applied_before_turn_passes() {
        // 2 + 3 lands on the chance cell at 5, then card index 1 (+500).
        let mut g = Game::with_rng(
            GameConfig::default(),
            Board::standard(),
            ScriptedRandom::new(vec![1, 2, 1]),
        )
        .unwrap();
        let out = g.roll_dice().unwrap();
        assert_eq!(out.movement.to, 5);
        match out.landing {
            Landing::Chance(card) => assert_eq!(card.id, 2),
            other => panic!("expected chance, got {other:?}"),
        }
        assert_eq!(g.roster().get(0).unwrap().balance, 2000);
        assert_eq!(g.active_player().id, PlayerId(2));
    }

    #[test]
    fn advance_to_start_card() {
        let mut g = Game::with_rng(
            GameConfig::default(),
            Board::standard(),
            ScriptedRandom::new(vec![1, 2, 3]),
        )
        .unwrap();
        g.roll_dice().unwrap();
        let p = g.roster().get(0).unwrap();
        assert_eq!(p.position, 0);
        assert_eq!(p.balance, 1700);
    }

    #[test]
    fn passing_start_pays_bonus_once() {
        let mut roster = Roster::standard();
        roster.get_mut(0).unwrap().position = 34;
        let mut g = Game::from_parts(
            GameConfig::default(),
            Board::standard(),
            roster,
            ScriptedRandom::from_faces(&[2, 3]),
        )
        .unwrap();
        let out = g.roll_dice().unwrap();
        assert!(out.movement.passed_start);
        assert_eq!(out.movement.to, 3);
        assert_eq!(out.bonus, 200);
        assert_eq!(g.roster().get(0).unwrap().balance, 1700);
        assert!(out.notices().iter().any(|n| n.text.contains("passed Start")));
    }

    #[test]
    fn rent_scenario() {
        let mut board = Board::standard();
        let cell = board.cell_mut(23).unwrap();
        cell.owner = Some(PlayerId(2));
        cell.houses = 4;

        let mut roster = Roster::standard();
        let visitor = roster.get_mut(0).unwrap();
        visitor.position = 20;
        visitor.balance = 500;

        let mut g = Game::from_parts(
            GameConfig::default(),
            board,
            roster,
            ScriptedRandom::from_faces(&[1, 2]),
        )
        .unwrap();
        let out = g.roll_dice().unwrap();
        assert_eq!(
            out.landing,
            Landing::Rent {
                owner: PlayerId(2),
                owner_name: "Player 2".into(),
                amount: 200,
            }
        );
        assert_eq!(g.roster().by_id(PlayerId(1)).unwrap().balance, 300);
        assert_eq!(g.roster().by_id(PlayerId(2)).unwrap().balance, 1700);
    }

    #[test]
    fn no_rent_on_own_cell() {
        let mut board = Board::standard();
        board.cell_mut(3).unwrap().owner = Some(PlayerId(1));
        let mut g = Game::from_parts(
            GameConfig::default(),
            board,
            Roster::standard(),
            ScriptedRandom::from_faces(&[1, 2]),
        )
        .unwrap();
        let out = g.roll_dice().unwrap();
        assert_eq!(out.landing, Landing::Quiet);
        assert_eq!(g.roster().get(0).unwrap().balance, 1500);
    }

    #[test]
    fn rent_may_push_balance_negative() {
        let mut board = Board::standard();
        let cell = board.cell_mut(3).unwrap();
        cell.owner = Some(PlayerId(2));
        let mut roster = Roster::standard();
        roster.get_mut(0).unwrap().balance = 20;
        let mut g = Game::from_parts(
            GameConfig::default(),
            board,
            roster,
            ScriptedRandom::from_faces(&[1, 2]),
        )
        .unwrap();
        g.roll_dice().unwrap();
        assert_eq!(g.roster().get(0).unwrap().balance, -30);
    }

    #[test]
    fn owner_must_be_seated() {
        let mut board = Board::standard();
        board.cell_mut(3).unwrap().owner = Some(PlayerId(9));
        let result = Game::from_parts(
            GameConfig::default(),
            board,
            Roster::standard(),
            ScriptedRandom::new(vec![0]),
        );
        assert!(result.is_err());
    }

    #[test]
    fn prepared_game_checks_config() {
        let mut config = GameConfig::default();
        config.house_cost = -50;
        let result = Game::from_parts(
            config,
            Board::standard(),
            Roster::standard(),
            ScriptedRandom::new(vec![0]),
        );
        assert!(matches!(result, Err(EngineError::InvalidConfig(_))));
    }

    #[test]
    fn net_worth_counts_holdings() {
        let mut g = game_with_faces(&[1, 2]);
        g.select(3).unwrap();
        g.buy_property().unwrap();
        assert_eq!(g.net_worth(PlayerId(1)).unwrap(), 1300 + 200);
        assert!(g.net_worth(PlayerId(9)).is_err());
    }

    #[test]
    fn turn_wraps_after_every_seat() {
        let mut g = game_with_faces(&[1, 1]);
        for _ in 0..4 {
            g.roll_dice().unwrap();
        }
        assert_eq!(g.active_player().id, PlayerId(1));
        assert_eq!(g.turn().completed(), 4);
    }

    #[test]
    fn chat_messages() {
        let mut g = game_with_faces(&[1, 2]);
        assert!(g.send_message("   ").is_none());
        assert!(g.transcript().is_empty());

        g.send_message("Hi everyone!").unwrap();
        assert_eq!(g.transcript().len(), 1);
        assert_eq!(g.transcript().messages()[0].author, PlayerId(1));
        assert_eq!(g.journal().len(), 1);
    }

    #[test]
    fn select_out_of_range() {
        let mut g = game_with_faces(&[1, 2]);
        assert!(g.select(36).is_err());
        assert!(g.selected().is_none());
        g.select(5).unwrap();
        g.deselect();
        assert!(g.selected().is_none());
    }

    #[test]
    fn roll_notices_in_order() {
        let mut board = Board::standard();
        board.cell_mut(3).unwrap().owner = Some(PlayerId(2));
        let mut g = Game::from_parts(
            GameConfig::default(),
            board,
            Roster::standard(),
            ScriptedRandom::from_faces(&[1, 2]),
        )
        .unwrap();
        let notices = g.roll_dice().unwrap().notices();
        assert_eq!(notices.len(), 3);
        assert!(notices[0].text.contains("rolled 1 + 2 = 3"));
        assert!(notices[1].text.contains("rent of ₽50"));
        assert_eq!(notices[2].text, "Player 2 to move");
    }
}
