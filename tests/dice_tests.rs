//! Tests for dice rolling functionality

use dicegames::dice::{roll_all, seeded_set};
use dicegames::{Die, Roll, FACES};
use proptest::prelude::*;

#[test]
fn test_die_rolls_in_range() {
    let mut die = Die::from_entropy();
    for _ in 0..1000 {
        let roll = die.roll();
        assert!((1..=FACES).contains(&roll), "Roll {} out of range", roll);
    }
}

#[test]
fn test_die_is_roughly_uniform() {
    let mut die = Die::seeded(2024);
    let mut counts = [0u32; 7];
    for _ in 0..60_000 {
        counts[usize::from(die.roll())] += 1;
    }

    assert_eq!(counts[0], 0);
    for (face, &count) in counts.iter().enumerate().skip(1) {
        assert!(
            (9_000..=11_000).contains(&count),
            "face {} came up {} times in 60000 rolls",
            face,
            count
        );
    }
}

#[test]
fn test_seeded_dice_replay() {
    let mut a = Die::seeded(17);
    let mut b = Die::seeded(17);
    let first: Vec<u8> = (0..50).map(|_| a.roll()).collect();
    let second: Vec<u8> = (0..50).map(|_| b.roll()).collect();
    assert_eq!(first, second);
}

#[test]
fn test_seeded_sets_replay() {
    let mut a: [Die; 5] = seeded_set(8);
    let mut b: [Die; 5] = seeded_set(8);
    for _ in 0..20 {
        assert_eq!(roll_all(&mut a), roll_all(&mut b));
    }
}

#[test]
fn test_roll_all_updates_each_die() {
    let mut dice: [Die; 2] = seeded_set(3);
    let faces = roll_all(&mut dice);
    assert_eq!(faces, [dice[0].value(), dice[1].value()]);
}

proptest! {
    #[test]
    fn prop_any_seed_rolls_in_range(seed in any::<u64>()) {
        let mut die = Die::seeded(seed);
        for _ in 0..32 {
            let roll = die.roll();
            prop_assert!((1..=FACES).contains(&roll));
        }
    }
}
