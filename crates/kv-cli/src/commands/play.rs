use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use kv_engine::{Game, GameSession, Notice, NoticeLevel};

pub fn run(seed: Option<u64>, config: Option<&Path>, board: Option<&Path>) -> Result<(), String> {
    let config = super::load_config(config, seed)?;
    let board = super::load_board(board)?;
    let players = config.players.len();

    let game = Game::with_board(config, board).map_err(|e| format!("failed to start game: {e}"))?;
    let mut session = GameSession::from_game(game);

    println!("  {} Kvartal", "Starting".bold());
    match seed {
        Some(seed) => println!("  Players: {players} | Seed: {seed}"),
        None => println!("  Players: {players}"),
    }
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("{}> ", session.game().active_player().name);
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim_end_matches(['\r', '\n']);
        if input.trim().is_empty() {
            continue;
        }

        match session.process(input) {
            Ok(notices) => {
                for notice in &notices {
                    print_notice(notice);
                }
                println!();
                if session.is_finished() {
                    break;
                }
            }
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
            }
        }
    }

    Ok(())
}

fn print_notice(notice: &Notice) {
    match notice.level {
        NoticeLevel::Success => println!("{}", notice.text.green()),
        NoticeLevel::Error => println!("{}", notice.text.red()),
        NoticeLevel::Info => println!("{}", notice.text),
    }
}
