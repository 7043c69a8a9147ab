//! Game variants and the pieces they share.
//!
//! Each variant owns its dice and a [`Scoreboard`], runs its own turn loop in
//! [`Game::play`] and records the final totals in [`Statistics`].

mod sevens_out;
mod three_or_more;

pub use sevens_out::{score_roll, SevensOut, SevensOutComputer, SevensRoll, SEVEN};
pub use three_or_more::{
    face_counts, reroll, Combination, ThreeOrMore, ThreeOrMoreComputer, HAND_SIZE, TARGET_SCORE,
};

use colored::Colorize;
use std::io;
use thiserror::Error;
use tracing::info;

use crate::input::PlayerInput;
use crate::stats::{GameStats, Statistics};

/// The two games. The key doubles as the statistics entry name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameKind {
    SevensOut,
    ThreeOrMore,
}

impl GameKind {
    pub const ALL: [GameKind; 2] = [GameKind::SevensOut, GameKind::ThreeOrMore];

    /// Statistics key.
    pub fn key(&self) -> &'static str {
        match self {
            GameKind::SevensOut => "SevensOut",
            GameKind::ThreeOrMore => "ThreeOrMore",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            GameKind::SevensOut => "Sevens Out",
            GameKind::ThreeOrMore => "Three or More",
        }
    }

    pub fn parse(s: &str) -> Option<GameKind> {
        match s.to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "sevensout" | "sevens" => Some(GameKind::SevensOut),
            "threeormore" | "three" => Some(GameKind::ThreeOrMore),
            _ => None,
        }
    }
}

/// Who sits in the second seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Opponent {
    Player,
    Computer,
}

impl Opponent {
    pub fn parse(s: &str) -> Option<Opponent> {
        match s.to_lowercase().as_str() {
            "player" | "human" | "1" => Some(Opponent::Player),
            "computer" | "cpu" | "2" => Some(Opponent::Computer),
            _ => None,
        }
    }
}

/// Index into a game's totals. The first seat is always a human.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Seat {
    #[default]
    First,
    Second,
}

impl Seat {
    pub fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }

    pub fn other(self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    /// Name shown to the players.
    pub fn label(self, opponent: Opponent) -> &'static str {
        match (self, opponent) {
            (Seat::First, Opponent::Player) => "Player 1",
            (Seat::Second, Opponent::Player) => "Player 2",
            (Seat::First, Opponent::Computer) => "Player",
            (Seat::Second, Opponent::Computer) => "Computer",
        }
    }
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error("failed to read player input: {0}")]
    Input(#[from] io::Error),
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub kind: GameKind,
    pub totals: [u32; 2],
    /// Seat whose turn ended the game.
    pub ended_by: Seat,
    /// Statistics entry after this game was recorded.
    pub recorded: GameStats,
}

/// Shared shape of the four variants.
pub trait Game {
    fn kind(&self) -> GameKind;

    fn opponent(&self) -> Opponent;

    /// Play one complete game, then record it in `stats`.
    fn play(
        &mut self,
        input: &mut dyn PlayerInput,
        stats: &mut Statistics,
    ) -> Result<GameOutcome, GameError>;

    /// Running totals, indexed by seat.
    fn totals(&self) -> [u32; 2];

    /// Seat whose turn it is, or whose turn ended the game.
    fn current_seat(&self) -> Seat;

    /// Total of the current seat.
    fn total_score(&self) -> u32 {
        self.totals()[self.current_seat().index()]
    }
}

/// Build a variant with fresh dice. A seed makes the dice replayable.
pub fn new_game(kind: GameKind, opponent: Opponent, seed: Option<u64>) -> Box<dyn Game> {
    match (kind, opponent, seed) {
        (GameKind::SevensOut, Opponent::Player, None) => Box::new(SevensOut::new()),
        (GameKind::SevensOut, Opponent::Player, Some(s)) => Box::new(SevensOut::seeded(s)),
        (GameKind::SevensOut, Opponent::Computer, None) => Box::new(SevensOutComputer::new()),
        (GameKind::SevensOut, Opponent::Computer, Some(s)) => {
            Box::new(SevensOutComputer::seeded(s))
        }
        (GameKind::ThreeOrMore, Opponent::Player, None) => Box::new(ThreeOrMore::new()),
        (GameKind::ThreeOrMore, Opponent::Player, Some(s)) => Box::new(ThreeOrMore::seeded(s)),
        (GameKind::ThreeOrMore, Opponent::Computer, None) => {
            Box::new(ThreeOrMoreComputer::new())
        }
        (GameKind::ThreeOrMore, Opponent::Computer, Some(s)) => {
            Box::new(ThreeOrMoreComputer::seeded(s))
        }
    }
}

/// Totals and turn indicator for one play.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Scoreboard {
    totals: [u32; 2],
    current: Seat,
}

impl Scoreboard {
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn totals(&self) -> [u32; 2] {
        self.totals
    }

    pub(crate) fn total(&self, seat: Seat) -> u32 {
        self.totals[seat.index()]
    }

    pub(crate) fn current(&self) -> Seat {
        self.current
    }

    pub(crate) fn seat(&mut self, seat: Seat) {
        self.current = seat;
    }

    pub(crate) fn pass_turn(&mut self) {
        self.current = self.current.other();
    }

    /// Add points to `seat` and return its new total.
    pub(crate) fn add(&mut self, seat: Seat, points: u32) -> u32 {
        let total = &mut self.totals[seat.index()];
        *total = total.saturating_add(points);
        *total
    }
}

const RULE: &str = "═══════════════════════════════════════";

pub(crate) fn print_rule() {
    println!("{}", RULE.cyan());
}

/// Announce the end of a game and record it.
pub(crate) fn finish(
    kind: GameKind,
    board: &Scoreboard,
    ended_by: Seat,
    stats: &mut Statistics,
) -> GameOutcome {
    let totals = board.totals();
    let recorded = stats.update(kind.key(), totals);
    info!(
        game = kind.key(),
        player_one = totals[0],
        player_two = totals[1],
        "game finished"
    );
    GameOutcome {
        kind,
        totals,
        ended_by,
        recorded,
    }
}

pub(crate) fn format_faces(faces: &[u8]) -> String {
    faces
        .iter()
        .map(|f| format!("[{f}]").bright_white().bold().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
