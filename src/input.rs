//! Reading player decisions from the console.

use std::io::{self, BufRead, StdinLock, Write};

/// Which dice a player rerolls after rolling exactly a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RerollChoice {
    All,
    NonMatching,
}

/// Where a game gets its human decisions from.
pub trait PlayerInput {
    /// Block until the named player asks to roll.
    fn wait_for_roll(&mut self, player: &str) -> io::Result<()>;

    /// Ask the named player whether to reroll every die or only the ones
    /// outside the pair.
    fn choose_reroll(&mut self, player: &str) -> io::Result<RerollChoice>;
}

/// Line-oriented input over any buffered reader. Prompts go to stdout.
pub struct ConsoleInput<R> {
    reader: R,
}

impl ConsoleInput<StdinLock<'static>> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> ConsoleInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Read one line without its line ending. `None` once input is exhausted.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Print `text` without a newline and read the answer.
    pub fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        print!("{text}");
        io::stdout().flush()?;
        self.read_line()
    }

    fn require_line(&mut self, text: &str) -> io::Result<String> {
        self.prompt(text)?.ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "input closed during a game")
        })
    }
}

impl<R: BufRead> PlayerInput for ConsoleInput<R> {
    fn wait_for_roll(&mut self, player: &str) -> io::Result<()> {
        self.require_line(&format!("{player}, press Enter to roll the dice..."))?;
        println!();
        Ok(())
    }

    fn choose_reroll(&mut self, player: &str) -> io::Result<RerollChoice> {
        let answer = self.require_line(&format!("{player}, reroll all dice (Y/N)? "))?;
        Ok(parse_reroll_answer(&answer))
    }
}

fn parse_reroll_answer(answer: &str) -> RerollChoice {
    if answer.trim().eq_ignore_ascii_case("y") {
        RerollChoice::All
    } else {
        RerollChoice::NonMatching
    }
}
