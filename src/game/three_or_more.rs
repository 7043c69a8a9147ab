//! Three or More
//!
//! Each turn rolls five dice and scores the largest set of matching faces:
//! three of a kind is worth 3, four of a kind 6 and five of a kind 12. A lone
//! pair scores nothing but earns a reroll. The first player to reach
//! [`TARGET_SCORE`] wins.

use colored::Colorize;
use std::io;
use tracing::debug;

use super::{
    finish, format_faces, print_rule, Game, GameError, GameKind, GameOutcome, Opponent,
    Scoreboard, Seat,
};
use crate::dice::{self, roll_all, Die, Roll, FACES};
use crate::input::{PlayerInput, RerollChoice};
use crate::stats::Statistics;

pub const TARGET_SCORE: u32 = 20;
pub const HAND_SIZE: usize = 5;

/// Best match in a five-dice hand, with the face that forms it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combination {
    FiveOfAKind(u8),
    FourOfAKind(u8),
    ThreeOfAKind(u8),
    /// Highest match is two dice. With two pairs, the lower face.
    Pair(u8),
    Nothing,
}

impl Combination {
    pub fn classify(hand: &[u8; HAND_SIZE]) -> Combination {
        let counts = face_counts(hand);
        let mut best_face = 0u8;
        let mut best_count = 0u8;
        for face in 1..=FACES {
            let count = counts[usize::from(face)];
            if count > best_count {
                best_face = face;
                best_count = count;
            }
        }

        match best_count {
            5 => Combination::FiveOfAKind(best_face),
            4 => Combination::FourOfAKind(best_face),
            3 => Combination::ThreeOfAKind(best_face),
            2 => Combination::Pair(best_face),
            _ => Combination::Nothing,
        }
    }

    pub fn points(&self) -> u32 {
        match self {
            Combination::FiveOfAKind(_) => 12,
            Combination::FourOfAKind(_) => 6,
            Combination::ThreeOfAKind(_) => 3,
            Combination::Pair(_) | Combination::Nothing => 0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Combination::FiveOfAKind(_) => "five of a kind",
            Combination::FourOfAKind(_) => "four of a kind",
            Combination::ThreeOfAKind(_) => "three of a kind",
            Combination::Pair(_) => "two of a kind",
            Combination::Nothing => "no matching dice",
        }
    }
}

/// How many dice show each face. Index 0 is unused.
pub fn face_counts(hand: &[u8]) -> [u8; FACES as usize + 1] {
    let mut counts = [0u8; FACES as usize + 1];
    for &face in hand.iter().filter(|face| (1..=FACES).contains(face)) {
        counts[usize::from(face)] += 1;
    }
    counts
}

/// Reroll a hand after a pair. `NonMatching` keeps every die showing
/// `pair_face`; `All` rerolls the whole hand. Returns the new faces in die
/// order.
pub fn reroll<D: Roll>(
    dice: &mut [D; HAND_SIZE],
    hand: &[u8; HAND_SIZE],
    choice: RerollChoice,
    pair_face: u8,
) -> [u8; HAND_SIZE] {
    let mut faces = *hand;
    for (face, die) in faces.iter_mut().zip(dice.iter_mut()) {
        if choice == RerollChoice::All || *face != pair_face {
            *face = die.roll();
        }
    }
    faces
}

fn roll_hand<D: Roll>(dice: &mut [D; HAND_SIZE], label: &str) -> [u8; HAND_SIZE] {
    let mut hand = roll_all(dice);
    println!("{} rolled {}", label.bold().yellow(), format_faces(&hand));
    hand.sort_unstable();
    hand
}

/// Roll, score and, on a pair, reroll for `seat`. `choose` is asked at most
/// once, only when the hand is a pair.
fn take_turn<D, F>(
    dice: &mut [D; HAND_SIZE],
    board: &mut Scoreboard,
    seat: Seat,
    label: &str,
    choose: F,
) -> io::Result<Combination>
where
    D: Roll,
    F: FnOnce() -> io::Result<RerollChoice>,
{
    let hand = roll_hand(dice, label);
    let combination = Combination::classify(&hand);
    debug!(player = label, ?hand, ?combination, "three or more roll");

    match combination {
        Combination::Pair(face) => {
            println!("{} got two of a kind. Rerolling...", label);
            let choice = choose()?;
            let rerolled = reroll(dice, &hand, choice, face);
            println!("Reroll: {}", format_faces(&rerolled));
        }
        Combination::Nothing => {
            println!("{} didn't get three, four, or five of a kind.", label);
        }
        scored => {
            let total = board.add(seat, scored.points());
            println!(
                "{} got {}! Score: {}. Total: {}",
                label,
                scored.name().bright_green().bold(),
                scored.points(),
                total.to_string().cyan()
            );
        }
    }
    Ok(combination)
}

fn announce_win(label: &str) {
    println!(
        "{}",
        format!("{label} reached {TARGET_SCORE} points. {label} wins!")
            .bright_green()
            .bold()
    );
}

/// Two humans alternating turns.
#[derive(Debug, Clone)]
pub struct ThreeOrMore<D = Die> {
    dice: [D; HAND_SIZE],
    board: Scoreboard,
}

impl ThreeOrMore<Die> {
    pub fn new() -> Self {
        Self::with_dice(dice::entropy_set())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_dice(dice::seeded_set(seed))
    }
}

impl Default for ThreeOrMore<Die> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Roll> ThreeOrMore<D> {
    pub fn with_dice(dice: [D; HAND_SIZE]) -> Self {
        Self {
            dice,
            board: Scoreboard::default(),
        }
    }
}

impl<D: Roll> Game for ThreeOrMore<D> {
    fn kind(&self) -> GameKind {
        GameKind::ThreeOrMore
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
        println!("{}", "THREE OR MORE".bold().yellow());
        print_rule();

        loop {
            let seat = self.board.current();
            let label = seat.label(Opponent::Player);
            input.wait_for_roll(label)?;

            take_turn(&mut self.dice, &mut self.board, seat, label, || {
                input.choose_reroll(label)
            })?;

            if self.board.total(seat) >= TARGET_SCORE {
                announce_win(label);
                return Ok(finish(self.kind(), &self.board, seat, stats));
            }
            self.board.pass_turn();
        }
    }

    fn totals(&self) -> [u32; 2] {
        self.board.totals()
    }

    fn current_seat(&self) -> Seat {
        self.board.current()
    }
}

/// Human against the computer. The human's total is checked before the
/// computer rolls, so a human win ends the round early. The computer always
/// rerolls its whole hand after a pair.
#[derive(Debug, Clone)]
pub struct ThreeOrMoreComputer<D = Die> {
    dice: [D; HAND_SIZE],
    board: Scoreboard,
}

impl ThreeOrMoreComputer<Die> {
    pub fn new() -> Self {
        Self::with_dice(dice::entropy_set())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_dice(dice::seeded_set(seed))
    }
}

impl Default for ThreeOrMoreComputer<Die> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Roll> ThreeOrMoreComputer<D> {
    pub fn with_dice(dice: [D; HAND_SIZE]) -> Self {
        Self {
            dice,
            board: Scoreboard::default(),
        }
    }
}

impl<D: Roll> Game for ThreeOrMoreComputer<D> {
    fn kind(&self) -> GameKind {
        GameKind::ThreeOrMore
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
        println!("{}", "THREE OR MORE vs COMPUTER".bold().yellow());
        print_rule();

        loop {
            let human = Seat::First;
            let label = human.label(Opponent::Computer);
            self.board.seat(human);
            input.wait_for_roll(label)?;
            take_turn(&mut self.dice, &mut self.board, human, label, || {
                input.choose_reroll(label)
            })?;
            if self.board.total(human) >= TARGET_SCORE {
                announce_win(label);
                return Ok(finish(self.kind(), &self.board, human, stats));
            }

            let computer = Seat::Second;
            let label = computer.label(Opponent::Computer);
            self.board.seat(computer);
            println!("\n{}", "Computer's turn...".dimmed());
            take_turn(&mut self.dice, &mut self.board, computer, label, || {
                Ok(RerollChoice::All)
            })?;
            if self.board.total(computer) >= TARGET_SCORE {
                announce_win(label);
                return Ok(finish(self.kind(), &self.board, computer, stats));
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
