//! Dice Games
//!
//! Two turn-based console dice games, Sevens Out and Three or More, each
//! playable by two humans or against the computer, with play counts and high
//! scores persisted to a JSON file.

pub mod dice;
pub mod game;
pub mod input;
pub mod stats;

pub use dice::{Die, Roll, FACES};
pub use game::{
    Game, GameError, GameKind, GameOutcome, Opponent, Seat, SevensOut, SevensOutComputer,
    ThreeOrMore, ThreeOrMoreComputer,
};
pub use input::{ConsoleInput, PlayerInput, RerollChoice};
pub use stats::{GameStats, Statistics, StatsError, DEFAULT_STATS_FILE};
