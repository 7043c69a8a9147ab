//! Dice Games CLI
//!
//! Play Sevens Out and Three or More in the terminal and keep score across
//! sessions.

mod menu;

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use dicegames::{ConsoleInput, GameKind, Opponent, DEFAULT_STATS_FILE};
use menu::Session;

/// Dice Games - Sevens Out and Three or More
#[derive(Parser)]
#[command(name = "dicegames")]
#[command(
    author,
    version,
    about = "Dice Games - Sevens Out and Three or More in the terminal"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Statistics file (created on the first completed game)
    #[arg(long, env = "DICEGAMES_STATS_FILE", default_value = DEFAULT_STATS_FILE)]
    stats_file: PathBuf,

    /// Seed the dice so a session can be replayed
    #[arg(long)]
    seed: Option<u64>,

    /// Log filter used when RUST_LOG is not set (e.g. "info", "dicegames=debug")
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu (the default)
    Menu,

    /// Play a single game
    Play {
        /// Game to play (sevens-out, three-or-more)
        #[arg(value_parser = parse_game_arg)]
        game: GameKind,

        /// Second seat: another player or the computer
        #[arg(long, default_value = "player", value_parser = parse_opponent_arg)]
        vs: Opponent,
    },

    /// Show play counts and high scores
    #[command(visible_alias = "statistics")]
    Stats,
}

fn parse_game_arg(s: &str) -> Result<GameKind, String> {
    GameKind::parse(s)
        .ok_or_else(|| format!("Unknown game: {}. Valid: sevens-out, three-or-more", s))
}

fn parse_opponent_arg(s: &str) -> Result<Opponent, String> {
    Opponent::parse(s).ok_or_else(|| format!("Unknown opponent: {}. Valid: player, computer", s))
}

// ============================================================================
// Main
// ============================================================================

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&cli.log_level)?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut session = Session::new(cli.stats_file, cli.seed);
    let mut input = ConsoleInput::stdio();

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => session.run_menu(&mut input)?,
        Commands::Play { game, vs } => {
            if let Err(e) = session.play(game, vs, &mut input) {
                eprintln!("{} {}", "Error:".red().bold(), e);
                std::process::exit(1);
            }
        }
        Commands::Stats => session.show_statistics(),
    }

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
