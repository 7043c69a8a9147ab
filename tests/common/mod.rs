//! Scripted dice and input for driving whole games deterministically.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;

use dicegames::{PlayerInput, RerollChoice, Roll, Statistics};

/// Die that takes its faces from a script shared by every die in the set, so
/// the script reads in the order the dice are rolled.
#[derive(Debug, Clone)]
pub struct ScriptedDie {
    faces: Rc<RefCell<VecDeque<u8>>>,
    value: u8,
}

impl Roll for ScriptedDie {
    fn roll(&mut self) -> u8 {
        self.value = self
            .faces
            .borrow_mut()
            .pop_front()
            .expect("dice script exhausted");
        self.value
    }

    fn value(&self) -> u8 {
        self.value
    }
}

/// Handle for checking how much of a script is left.
#[derive(Debug, Clone)]
pub struct Script(Rc<RefCell<VecDeque<u8>>>);

impl Script {
    pub fn remaining(&self) -> usize {
        self.0.borrow().len()
    }
}

pub fn scripted<const N: usize>(faces: &[u8]) -> ([ScriptedDie; N], Script) {
    let shared = Rc::new(RefCell::new(faces.iter().copied().collect::<VecDeque<_>>()));
    let dice = std::array::from_fn(|_| ScriptedDie {
        faces: Rc::clone(&shared),
        value: 1,
    });
    (dice, Script(shared))
}

/// Input that records who was asked for what and answers rerolls from a list.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    pub roll_requests: Vec<String>,
    pub reroll_requests: Vec<String>,
    pub reroll_answers: VecDeque<RerollChoice>,
}

impl ScriptedInput {
    pub fn answering(answers: &[RerollChoice]) -> Self {
        Self {
            reroll_answers: answers.iter().copied().collect(),
            ..Self::default()
        }
    }
}

impl PlayerInput for ScriptedInput {
    fn wait_for_roll(&mut self, player: &str) -> io::Result<()> {
        self.roll_requests.push(player.to_string());
        Ok(())
    }

    fn choose_reroll(&mut self, player: &str) -> io::Result<RerollChoice> {
        self.reroll_requests.push(player.to_string());
        self.reroll_answers
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no reroll answer"))
    }
}

/// Statistics bound to a file inside a fresh temporary directory.
pub fn temp_stats() -> (tempfile::TempDir, PathBuf, Statistics) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("GameStatistics.json");
    let stats = Statistics::open(&path);
    (dir, path, stats)
}
