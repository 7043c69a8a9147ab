//! Sevens Out
//!
//! Players take turns rolling two dice and bank the sum; doubles bank it twice.
//! The first roll that adds up to seven ends the game.

use colored::Colorize;
use tracing::debug;

use super::{
    finish, format_faces, print_rule, Game, GameError, GameKind, GameOutcome, Opponent,
    Scoreboard, Seat,
};
use crate::dice::{self, roll_all, Die, Roll};
use crate::input::PlayerInput;
use crate::stats::Statistics;

/// The sum that ends a game.
pub const SEVEN: u32 = 7;

/// Effect of one roll on the roller's total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SevensRoll {
    /// Rolled seven; the game is over.
    Out,
    /// Points to bank.
    Score(u32),
}

pub fn score_roll(first: u8, second: u8) -> SevensRoll {
    let sum = u32::from(first) + u32::from(second);
    if sum == SEVEN {
        SevensRoll::Out
    } else if first == second {
        SevensRoll::Score(sum * 2)
    } else {
        SevensRoll::Score(sum)
    }
}

/// Roll for `seat`, print the result and bank any points.
fn take_turn<D: Roll>(
    dice: &mut [D; 2],
    board: &mut Scoreboard,
    seat: Seat,
    label: &str,
) -> SevensRoll {
    let [first, second] = roll_all(dice);
    let sum = u32::from(first) + u32::from(second);
    debug!(player = label, first, second, "sevens out roll");

    println!(
        "{} rolled {} Total: {}",
        label.bold().yellow(),
        format_faces(&[first, second]),
        sum.to_string().bold()
    );

    let outcome = score_roll(first, second);
    match outcome {
        SevensRoll::Out => {
            println!("{}", format!("{label} hit 7! Game over.").bright_red().bold());
        }
        SevensRoll::Score(points) => {
            if first == second {
                println!("{}", "Doubles! Points count twice.".bright_green());
            }
            let total = board.add(seat, points);
            println!("{} current score: {}", label, total.to_string().cyan());
        }
    }
    outcome
}

/// Two humans alternating single rolls.
#[derive(Debug, Clone)]
pub struct SevensOut<D = Die> {
    dice: [D; 2],
    board: Scoreboard,
}

impl SevensOut<Die> {
    pub fn new() -> Self {
        Self::with_dice(dice::entropy_set())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_dice(dice::seeded_set(seed))
    }
}

impl Default for SevensOut<Die> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Roll> SevensOut<D> {
    pub fn with_dice(dice: [D; 2]) -> Self {
        Self {
            dice,
            board: Scoreboard::default(),
        }
    }
}

impl<D: Roll> Game for SevensOut<D> {
    fn kind(&self) -> GameKind {
        GameKind::SevensOut
    }

    fn opponent(&self) -> Opponent {
        Opponent::Player
    }

    fn play(
        &mut self,
        input: &mut dyn PlayerInput,
        stats: &mut Statistics,
    ) -> Result<GameOutcome, GameError> {
        self.board.reset();
        print_rule();
        println!("{}", "SEVENS OUT".bold().yellow());
        print_rule();

        loop {
            let seat = self.board.current();
            let label = seat.label(Opponent::Player);
            input.wait_for_roll(label)?;

            match take_turn(&mut self.dice, &mut self.board, seat, label) {
                SevensRoll::Out => return Ok(finish(self.kind(), &self.board, seat, stats)),
                SevensRoll::Score(_) => self.board.pass_turn(),
            }
        }
    }

    fn totals(&self) -> [u32; 2] {
        self.board.totals()
    }

    fn current_seat(&self) -> Seat {
        self.board.current()
    }
}

/// Human against the computer. Each round is one human roll followed by one
/// computer roll.
#[derive(Debug, Clone)]
pub struct SevensOutComputer<D = Die> {
    dice: [D; 2],
    board: Scoreboard,
}

impl SevensOutComputer<Die> {
    pub fn new() -> Self {
        Self::with_dice(dice::entropy_set())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_dice(dice::seeded_set(seed))
    }
}

impl Default for SevensOutComputer<Die> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Roll> SevensOutComputer<D> {
    pub fn with_dice(dice: [D; 2]) -> Self {
        Self {
            dice,
            board: Scoreboard::default(),
        }
    }
}

impl<D: Roll> Game for SevensOutComputer<D> {
    fn kind(&self) -> GameKind {
        GameKind::SevensOut
    }

    fn opponent(&self) -> Opponent {
        Opponent::Computer
    }

    fn play(
        &mut self,
        input: &mut dyn PlayerInput,
        stats: &mut Statistics,
    ) -> Result<GameOutcome, GameError> {
        self.board.reset();
        print_rule();
        println!("{}", "SEVENS OUT vs COMPUTER".bold().yellow());
        print_rule();

        loop {
            for seat in [Seat::First, Seat::Second] {
                self.board.seat(seat);
                let label = seat.label(Opponent::Computer);
                match seat {
                    Seat::First => input.wait_for_roll(label)?,
                    Seat::Second => println!("\n{}", "Computer's turn...".dimmed()),
                }

                if take_turn(&mut self.dice, &mut self.board, seat, label) == SevensRoll::Out {
                    return Ok(finish(self.kind(), &self.board, seat, stats));
                }
            }
        }
    }

    fn totals(&self) -> [u32; 2] {
        self.board.totals()
    }

    fn current_seat(&self) -> Seat {
        self.board.current()
    }
}
