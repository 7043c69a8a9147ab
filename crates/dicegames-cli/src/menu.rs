//! Interactive menu and the game/statistics commands behind it.

use colored::Colorize;
use std::io::{self, BufRead};
use std::path::PathBuf;
use tracing::{info, warn};

use dicegames::game::new_game;
use dicegames::{ConsoleInput, GameError, GameKind, GameOutcome, Opponent, Seat, Statistics};

const RULE: &str = "═══════════════════════════════════════";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Play(GameKind),
    ViewStatistics,
    Exit,
}

impl MenuChoice {
    fn parse(s: &str) -> Option<MenuChoice> {
        match s.trim() {
            "1" => Some(MenuChoice::Play(GameKind::SevensOut)),
            "2" => Some(MenuChoice::Play(GameKind::ThreeOrMore)),
            "3" => Some(MenuChoice::ViewStatistics),
            "4" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// What came back from a menu prompt.
enum Answer {
    Line(String),
    /// The line could not be decoded; it has been reported and skipped.
    Unreadable,
    Closed,
}

fn read_answer<R: BufRead>(input: &mut ConsoleInput<R>) -> io::Result<Answer> {
    match input.prompt("Enter your choice: ") {
        Ok(Some(line)) => Ok(Answer::Line(line)),
        Ok(None) => Ok(Answer::Closed),
        Err(e) if e.kind() == io::ErrorKind::InvalidData => {
            warn!(error = %e, "unreadable menu input");
            eprintln!("{} {}", "Error:".red().bold(), e);
            Ok(Answer::Unreadable)
        }
        Err(e) => Err(e),
    }
}

fn parse_opponent_choice(s: &str) -> Option<Opponent> {
    match s.trim() {
        "1" => Some(Opponent::Player),
        "2" => Some(Opponent::Computer),
        _ => None,
    }
}

/// One run of the program: where statistics live and how dice are seeded.
pub struct Session {
    stats_file: PathBuf,
    seed: Option<u64>,
    games_started: u64,
}

impl Session {
    pub fn new(stats_file: PathBuf, seed: Option<u64>) -> Self {
        Self {
            stats_file,
            seed,
            games_started: 0,
        }
    }

    /// Seed for the next game, distinct per game so replays stay varied.
    fn next_seed(&mut self) -> Option<u64> {
        let seed = self.seed.map(|s| s.wrapping_add(self.games_started));
        self.games_started += 1;
        seed
    }

    /// Show the menu until the player exits or input runs out. Errors from a
    /// game are reported and the menu comes back.
    pub fn run_menu<R: BufRead>(&mut self, input: &mut ConsoleInput<R>) -> anyhow::Result<()> {
        loop {
            print_menu();
            let line = match read_answer(input)? {
                Answer::Line(line) => line,
                Answer::Unreadable => continue,
                Answer::Closed => {
                    println!("\nGoodbye!");
                    return Ok(());
                }
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::Play(kind)) => {
                    let Some(opponent) = self.ask_opponent(input)? else {
                        continue;
                    };
                    if let Err(e) = self.play(kind, opponent, input) {
                        warn!(error = %e, game = kind.key(), "game aborted");
                        eprintln!(
                            "{} An unexpected error occurred: {}",
                            "Error:".red().bold(),
                            e
                        );
                    }
                }
                Some(MenuChoice::ViewStatistics) => self.show_statistics(),
                Some(MenuChoice::Exit) => {
                    println!("Goodbye!");
                    return Ok(());
                }
                None => println!("{}", "Invalid choice. Please try again.".red()),
            }
        }
    }

    fn ask_opponent<R: BufRead>(
        &self,
        input: &mut ConsoleInput<R>,
    ) -> anyhow::Result<Option<Opponent>> {
        println!("\nDo you want to play against another player or the computer?");
        println!("  1. Another player");
        println!("  2. Computer");
        let Answer::Line(line) = read_answer(input)? else {
            return Ok(None);
        };
        let opponent = parse_opponent_choice(&line);
        if opponent.is_none() {
            println!("{}", "Invalid choice. Please try again.".red());
        }
        Ok(opponent)
    }

    /// Play one game against freshly loaded statistics and print the result.
    pub fn play<R: BufRead>(
        &mut self,
        kind: GameKind,
        opponent: Opponent,
        input: &mut ConsoleInput<R>,
    ) -> Result<GameOutcome, GameError> {
        let mut stats = Statistics::open(&self.stats_file);
        let seed = self.next_seed();
        info!(game = kind.key(), ?opponent, ?seed, "starting game");

        let mut game = new_game(kind, opponent, seed);
        let outcome = game.play(input, &mut stats)?;

        println!("\n{}", RULE.cyan());
        println!("{}", "FINAL SCORES".bold().yellow());
        for (seat, total) in [Seat::First, Seat::Second].into_iter().zip(outcome.totals) {
            println!("  {} {}", format!("{}:", seat.label(opponent)).bold(), total);
        }
        println!(
            "{} {}",
            format!("{} final total:", outcome.ended_by.label(opponent))
                .bold()
                .white(),
            game.total_score().to_string().bright_green().bold()
        );
        println!(
            "{} plays, high score {}",
            outcome.recorded.play_count,
            outcome.recorded.high_score
        );
        println!("{}", RULE.cyan());

        Ok(outcome)
    }

    pub fn show_statistics(&self) {
        let stats = Statistics::open(&self.stats_file);
        for line in statistics_lines(&stats) {
            println!("{line}");
        }
    }
}

fn print_menu() {
    println!("\n{}", RULE.cyan());
    println!("{}", "DICE GAMES".bold().yellow());
    println!("{}", RULE.cyan());
    for (number, kind) in (1..).zip(GameKind::ALL) {
        println!("  {}. Play {}", number, kind.title());
    }
    println!("  3. View statistics");
    println!("  4. Exit");
}

/// Both games first, then anything else found in the file.
fn statistics_lines(stats: &Statistics) -> Vec<String> {
    let mut lines = vec![
        RULE.cyan().to_string(),
        "GAME STATISTICS".bold().yellow().to_string(),
        RULE.cyan().to_string(),
    ];

    for kind in GameKind::ALL {
        let record = stats.get(kind.key());
        lines.push(format!(
            "{}: Plays: {}, High Score: {}",
            kind.key().bold(),
            record.play_count,
            record.high_score
        ));
    }

    for (name, record) in stats.entries() {
        if GameKind::ALL.iter().any(|k| k.key() == name) {
            continue;
        }
        lines.push(format!(
            "{}: Plays: {}, High Score: {}",
            name.bold(),
            record.play_count,
            record.high_score
        ));
    }

    lines.push(RULE.cyan().to_string());
    lines
}
