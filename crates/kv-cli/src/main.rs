//! Terminal frontend for the Kvartal board game.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "KV_LOG";

#[derive(Parser)]
#[command(
    name = "kv",
    about = "Kvartal, a property trading board game for the terminal",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log engine events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a hot-seat game, one command per line
    Play {
        /// RNG seed for reproducible dice and cards
        #[arg(short, long)]
        seed: Option<u64>,

        /// Game config (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Custom board (JSON array of cells)
        #[arg(short, long)]
        board: Option<PathBuf>,
    },

    /// Show the board as a table
    Board {
        /// Custom board (JSON array of cells)
        #[arg(short, long)]
        board: Option<PathBuf>,
    },

    /// List the chance cards
    Cards,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Play {
            seed,
            config,
            board,
        } => commands::play::run(seed, config.as_deref(), board.as_deref()),
        Commands::Board { board } => commands::board::run(board.as_deref()),
        Commands::Cards => commands::cards::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
