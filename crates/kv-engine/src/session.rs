//! Line-oriented command surface over a [`Game`].
//!
//! `GameSession` parses one text command at a time and answers with
//! notices. Rule rejections come back as error notices; only malformed
//! input and faults are returned as `Err`.

use kv_core::Cell;

use crate::chance::CHANCE_CARDS;
use crate::config::GameConfig;
use crate::error::{EngineError, EngineResult};
use crate::game::Game;
use crate::journal::Journal;
use crate::notice::Notice;

/// Number of chat lines shown by `chat`.
const CHAT_LINES: usize = 20;

/// Number of journal entries shown by `log`.
const LOG_ENTRIES: usize = 10;

/// An interactive game driven by text commands.
pub struct GameSession {
    game: Game,
    finished: bool,
}

impl GameSession {
    /// Start a session on the standard board.
    pub fn new(config: GameConfig) -> EngineResult<Self> {
        Ok(Self::from_game(Game::new(config)?))
    }

    /// Wrap an already constructed game.
    pub fn from_game(game: Game) -> Self {
        Self {
            game,
            finished: false,
        }
    }

    /// The underlying game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Whether `quit` has been entered.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Process a line of user input and return the resulting notices.
    pub fn process(&mut self, input: &str) -> EngineResult<Vec<Notice>> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(Vec::new());
        }

        let lower = trimmed.to_lowercase();
        let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");

        let result = match cmd.as_str() {
            "roll" | "r" => self.do_roll(),
            "select" | "s" => self.do_select(rest),
            "deselect" => {
                self.game.deselect();
                Ok(vec![Notice::info("Selection cleared.")])
            }
            "inspect" | "i" => self.do_inspect(),
            "buy" => self.game.buy_property().map(|n| vec![n]),
            "house" => self.game.build_house().map(|n| vec![n]),
            "hotel" => self.game.build_hotel().map(|n| vec![n]),
            "build" => match lower.trim_start_matches("build").trim() {
                "house" => self.game.build_house().map(|n| vec![n]),
                "hotel" => self.game.build_hotel().map(|n| vec![n]),
                _ => Err(EngineError::InvalidChoice(
                    "usage: build house | build hotel".to_string(),
                )),
            },
            "say" => self.do_say(raw_argument(input)),
            "chat" => Ok(self.do_chat()),
            "board" => Ok(self.do_board()),
            "players" => Ok(self.do_players()),
            "status" => Ok(self.do_status()),
            "log" | "journal" => Ok(self.do_log()),
            "export" => self.do_export(rest),
            "cards" => Ok(do_cards()),
            "help" => Ok(vec![Notice::info(help_text(rest))]),
            "quit" | "q" => {
                self.finished = true;
                Ok(vec![Notice::info("Goodbye!")])
            }
            _ => Err(EngineError::UnknownCommand(cmd)),
        };

        match result {
            Err(EngineError::Rejected(rejection)) => Ok(vec![Notice::from(&rejection)]),
            other => other,
        }
    }

    fn do_roll(&mut self) -> EngineResult<Vec<Notice>> {
        Ok(self.game.roll_dice()?.notices())
    }

    fn do_select(&mut self, rest: &str) -> EngineResult<Vec<Notice>> {
        let position: usize = rest.parse().map_err(|_| {
            EngineError::InvalidChoice(format!(
                "usage: select <0-{}>",
                self.game.board().len().saturating_sub(1)
            ))
        })?;
        self.game.select(position)?;
        self.do_inspect()
    }

    fn do_inspect(&self) -> EngineResult<Vec<Notice>> {
        match self.game.selected() {
            Some(cell) => Ok(vec![Notice::info(describe_cell(cell, &self.owner_name(cell)))]),
            None => Ok(vec![Notice::info("No cell selected.")]),
        }
    }

    fn do_say(&mut self, text: &str) -> EngineResult<Vec<Notice>> {
        if text.trim().is_empty() {
            return Err(EngineError::InvalidChoice("usage: say <text>".to_string()));
        }
        self.game.send_message(text);
        let author = &self.game.active_player().name;
        Ok(vec![Notice::info(format!("{author}: {text}"))])
    }

    fn do_chat(&self) -> Vec<Notice> {
        let transcript = self.game.transcript();
        if transcript.is_empty() {
            return vec![Notice::info("No messages yet.")];
        }
        vec![Notice::info(transcript.render(CHAT_LINES))]
    }

    fn do_board(&self) -> Vec<Notice> {
        let lines: Vec<String> = self
            .game
            .board()
            .iter()
            .map(|cell| {
                let tokens: Vec<&str> = self
                    .game
                    .roster()
                    .iter()
                    .filter(|p| p.position == cell.position)
                    .map(|p| p.name.as_str())
                    .collect();
                let mut line = format!("{:>2} {}", cell.position, cell.name);
                if cell.is_purchasable() {
                    line.push_str(&format!(" [₽{}]", cell.price));
                }
                if cell.owner.is_some() {
                    line.push_str(&format!(" owner: {}", self.owner_name(cell)));
                }
                if !tokens.is_empty() {
                    line.push_str(&format!(" <{}>", tokens.join(", ")));
                }
                line
            })
            .collect();
        vec![Notice::info(lines.join("\n"))]
    }

    fn do_players(&self) -> Vec<Notice> {
        let active = self.game.active_player().id;
        let lines: Vec<String> = self
            .game
            .roster()
            .iter()
            .map(|p| {
                let marker = if p.id == active { ">" } else { " " };
                let cell = self
                    .game
                    .board()
                    .cell(p.position)
                    .map(|c| c.name.as_str())
                    .unwrap_or("?");
                let owned = self.game.board().owned_by(p.id).len();
                let worth = self.game.net_worth(p.id).unwrap_or(p.balance);
                format!(
                    "{marker} {} ₽{} at {cell} ({owned} owned, worth ₽{worth})",
                    p.name, p.balance
                )
            })
            .collect();
        vec![Notice::info(lines.join("\n"))]
    }

    fn do_status(&self) -> Vec<Notice> {
        let turn = self.game.turn();
        let mut out = format!(
            "Turn: {} (round {})\n",
            self.game.active_player().name,
            turn.round()
        );
        match self.game.last_roll() {
            Some(roll) => out.push_str(&format!("Last roll: {roll}\n")),
            None => out.push_str("No dice rolled yet.\n"),
        }
        match self.game.selected() {
            Some(cell) => out.push_str(&format!("Selected: {} ({})\n", cell.name, cell.position)),
            None => out.push_str("Nothing selected.\n"),
        }
        out.push_str(&format!("Messages: {}\n", self.game.transcript().len()));
        out.push_str(&format!("Journal: {} entries", self.game.journal().len()));
        vec![Notice::info(out)]
    }

    fn do_log(&self) -> Vec<Notice> {
        let journal = self.game.journal();
        if journal.is_empty() {
            return vec![Notice::info("Journal is empty.")];
        }
        let entries = journal.entries();
        let start = entries.len().saturating_sub(LOG_ENTRIES);
        let mut recent = Journal::new();
        for entry in &entries[start..] {
            recent.append(entry.clone());
        }
        vec![Notice::info(recent.export_text().trim_end().to_string())]
    }

    fn do_export(&self, format: &str) -> EngineResult<Vec<Notice>> {
        let journal = self.game.journal();
        let text = match format.to_lowercase().as_str() {
            "markdown" | "md" | "" => journal.export_markdown(),
            "text" | "txt" => journal.export_text(),
            "json" => journal.export_json()?,
            other => {
                return Err(EngineError::InvalidChoice(format!(
                    "unknown format '{other}', use: markdown, text, json"
                )));
            }
        };
        Ok(vec![Notice::info(text)])
    }

    fn owner_name(&self, cell: &Cell) -> String {
        match cell.owner {
            Some(id) => self
                .game
                .roster()
                .by_id(id)
                .map(|p| p.name.clone())
                .unwrap_or_else(|_| id.to_string()),
            None => "none".to_string(),
        }
    }
}

/// Everything after the command word and its separating space, untrimmed.
fn raw_argument(input: &str) -> &str {
    input
        .trim_start()
        .split_once(' ')
        .map(|(_, rest)| rest)
        .unwrap_or("")
}

fn describe_cell(cell: &Cell, owner: &str) -> String {
    let mut out = format!("{} ({}) {}", cell.name, cell.position, cell.kind);
    if cell.color != kv_core::ColorGroup::None {
        out.push_str(&format!(", {}", cell.color));
    }
    if cell.is_purchasable() {
        out.push_str(&format!(
            "\n  Price: ₽{}  Rent: ₽{}\n  Owner: {owner}  Buildings: {}",
            cell.price,
            cell.current_rent(),
            cell.buildings_label()
        ));
    }
    out
}

fn do_cards() -> Vec<Notice> {
    let lines: Vec<String> = CHANCE_CARDS
        .iter()
        .map(|c| format!("{}. {} ({})", c.id, c.text, c.effect))
        .collect();
    vec![Notice::info(lines.join("\n"))]
}

fn help_text(topic: &str) -> String {
    match topic.to_lowercase().as_str() {
        "build" | "house" | "hotel" => "\
Building:
  house | build house           Add a house to your selected street (₽50)
  hotel | build hotel           Replace four houses with a hotel (₽200)

Only ordinary streets you own can be built on. Rent is multiplied by
1 + houses, or by 6 with a hotel."
            .to_string(),
        "chat" | "say" => "\
Chat:
  say <text>                    Post a message as the active player
  chat                          Show recent messages"
            .to_string(),
        "log" | "export" | "journal" => "\
Journal:
  log                           Show recent events
  export [markdown|text|json]   Export the full journal"
            .to_string(),
        _ => "\
Commands:
  roll                          Roll the dice and move
  select <pos>                  Select a cell by position
  deselect                      Clear the selection
  inspect                       Show the selected cell
  buy                           Buy the selected cell
  house | hotel                 Build on the selected street
  say <text>                    Send a chat message
  chat                          Show the chat
  board                         Show the board
  players                       Show balances and positions
  status                        Show whose turn it is
  log                           Show recent events
  export [markdown|text|json]   Export the journal
  cards                         List the chance cards
  help [topic]                  Show help (build, chat, log)
  quit                          Exit"
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::NoticeLevel;
    use crate::random::ScriptedRandom;
    use kv_core::{Board, PlayerId};

    fn test_session() -> GameSession {
        let game = Game::with_rng(
            GameConfig::default(),
            Board::standard(),
            ScriptedRandom::from_faces(&[1, 2]),
        )
        .unwrap();
        GameSession::from_game(game)
    }

    fn text(notices: &[Notice]) -> String {
        notices
            .iter()
            .map(|n| n.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn empty_input() {
        let mut s = test_session();
        assert!(s.process("   ").unwrap().is_empty());
    }

    #[test]
    fn roll_command() {
        let mut s = test_session();
        let out = s.process("roll").unwrap();
        let all = text(&out);
        assert!(all.contains("Player 1 rolled 1 + 2 = 3"));
        assert!(all.contains("South Station"));
        assert_eq!(out[0].level, NoticeLevel::Success);
        assert_eq!(s.game().active_player().id, PlayerId(2));
    }

    #[test]
    fn select_and_buy() {
        let mut s = test_session();
        let out = s.process("select 3").unwrap();
        assert!(text(&out).contains("South Station"));
        assert!(text(&out).contains("Price: ₽200"));

        let out = s.process("buy").unwrap();
        assert_eq!(out[0].level, NoticeLevel::Success);
        assert_eq!(s.game().active_player().balance, 1300);
        assert!(s.game().selected().is_none());
    }

    #[test]
    fn rejection_is_an_error_notice() {
        let mut s = test_session();
        let out = s.process("buy").unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].level, NoticeLevel::Error);
        assert_eq!(out[0].text, "select a cell first");
    }

    #[test]
    fn build_aliases() {
        let mut s = test_session();
        s.process("select 1").unwrap();
        s.process("buy").unwrap();
        s.process("select 1").unwrap();
        s.process("build house").unwrap();
        s.process("house").unwrap();
        assert_eq!(s.game().board().cell(1).unwrap().houses, 2);

        let out = s.process("build hotel").unwrap();
        assert_eq!(out[0].level, NoticeLevel::Error);
        assert!(out[0].text.contains("build 4 houses"));

        assert!(s.process("build castle").is_err());
    }

    #[test]
    fn select_needs_a_number() {
        let mut s = test_session();
        assert!(matches!(
            s.process("select north"),
            Err(EngineError::InvalidChoice(_))
        ));
        assert!(s.process("select 99").is_err());
    }

    #[test]
    fn deselect_and_inspect() {
        let mut s = test_session();
        s.process("select 5").unwrap();
        let out = s.process("inspect").unwrap();
        assert!(text(&out).contains("Chance"));
        s.process("deselect").unwrap();
        let out = s.process("inspect").unwrap();
        assert_eq!(out[0].text, "No cell selected.");
    }

    #[test]
    fn say_and_chat() {
        let mut s = test_session();
        let out = s.process("say Hi everyone!").unwrap();
        assert_eq!(out[0].text, "Player 1: Hi everyone!");
        assert!(s.process("say   ").is_err());
        assert_eq!(s.game().transcript().len(), 1);

        let out = s.process("chat").unwrap();
        assert!(text(&out).contains("Player 1: Hi everyone!"));
    }

    #[test]
    fn say_keeps_text_as_typed() {
        let mut s = test_session();
        s.process("say   spaced out  ").unwrap();
        assert_eq!(s.game().transcript().messages()[0].text, "  spaced out  ");
        assert_eq!(raw_argument("  say hi "), "hi ");
        assert_eq!(raw_argument("say"), "");
    }

    #[test]
    fn players_show_net_worth() {
        let mut s = test_session();
        s.process("select 3").unwrap();
        s.process("buy").unwrap();
        let out = text(&s.process("players").unwrap());
        assert!(out.contains("> Player 1 ₽1300 at Start (1 owned, worth ₽1500)"));
        assert!(out.contains("  Player 2 ₽1500 at Start (0 owned, worth ₽1500)"));
    }

    #[test]
    fn board_shows_tokens() {
        let mut s = test_session();
        s.process("roll").unwrap();
        let out = text(&s.process("board").unwrap());
        assert!(out.contains(" 3 South Station [₽200] <Player 1>"));
        assert!(out.contains(" 0 Start <Player 2, Player 3, Player 4>"));
    }

    #[test]
    fn players_and_status() {
        let mut s = test_session();
        let out = text(&s.process("players").unwrap());
        assert!(out.contains("> Player 1 ₽1500 at Start (0 owned, worth ₽1500)"));

        let out = text(&s.process("status").unwrap());
        assert!(out.contains("Turn: Player 1 (round 1)"));
        assert!(out.contains("No dice rolled yet."));
    }

    #[test]
    fn log_and_export() {
        let mut s = test_session();
        assert_eq!(text(&s.process("log").unwrap()), "Journal is empty.");
        s.process("roll").unwrap();
        assert!(text(&s.process("log").unwrap()).contains("South Station"));

        assert!(text(&s.process("export").unwrap()).contains("# Game Journal"));
        assert!(text(&s.process("export text").unwrap()).contains("Game Journal"));
        assert!(text(&s.process("export json").unwrap()).contains("\"entries\""));
        assert!(s.process("export pdf").is_err());
    }

    #[test]
    fn cards_listing() {
        let mut s = test_session();
        let out = text(&s.process("cards").unwrap());
        assert_eq!(out.lines().count(), 5);
        assert!(out.contains("Advance to Start"));
    }

    #[test]
    fn help_topics() {
        assert!(help_text("").contains("Commands:"));
        assert!(help_text("build").contains("Building:"));
        assert!(help_text("chat").contains("say <text>"));
    }

    #[test]
    fn unknown_command() {
        let mut s = test_session();
        assert!(matches!(
            s.process("dance"),
            Err(EngineError::UnknownCommand(c)) if c == "dance"
        ));
    }

    #[test]
    fn quit() {
        let mut s = test_session();
        let out = s.process("quit").unwrap();
        assert_eq!(out[0].text, "Goodbye!");
        assert!(s.is_finished());
    }
}
