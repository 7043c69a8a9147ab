//! Six-sided dice
//!
//! Every die owns its own random source. Dice built from a seed replay the
//! same faces, which is how the CLI's `--seed` flag and the tests get
//! deterministic games.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Number of faces on every die used by the games.
pub const FACES: u8 = 6;

/// Spacing between the seeds handed to the dice of one set.
const SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Something that produces die faces in `1..=FACES`.
pub trait Roll {
    /// Roll again, remember the face and return it.
    fn roll(&mut self) -> u8;

    /// Face showing after the most recent roll.
    fn value(&self) -> u8;
}

/// A fair six-sided die.
#[derive(Clone, Debug)]
pub struct Die<R = ChaCha8Rng> {
    rng: R,
    value: u8,
}

impl Die<ChaCha8Rng> {
    /// Die seeded from the operating system's entropy source.
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }

    /// Die that replays the same faces for the same seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: RngCore> Die<R> {
    /// Wrap a random source. The die is rolled once so it always shows a face.
    pub fn new(rng: R) -> Self {
        let mut die = Self { rng, value: 1 };
        die.roll();
        die
    }
}

impl<R: RngCore> Roll for Die<R> {
    fn roll(&mut self) -> u8 {
        self.value = self.rng.gen_range(1..=FACES);
        self.value
    }

    fn value(&self) -> u8 {
        self.value
    }
}

/// `N` independent dice seeded from entropy.
pub fn entropy_set<const N: usize>() -> [Die; N] {
    std::array::from_fn(|_| Die::from_entropy())
}

/// `N` dice with distinct seeds derived from `seed`.
pub fn seeded_set<const N: usize>(seed: u64) -> [Die; N] {
    std::array::from_fn(|i| {
        let offset = (i as u64 + 1).wrapping_mul(SEED_STRIDE);
        Die::seeded(seed.wrapping_add(offset))
    })
}

/// Roll every die in order and collect the faces.
pub fn roll_all<D: Roll, const N: usize>(dice: &mut [D; N]) -> [u8; N] {
    let mut faces = [0u8; N];
    for (face, die) in faces.iter_mut().zip(dice.iter_mut()) {
        *face = die.roll();
    }
    faces
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_die_shows_a_face() {
        let die = Die::seeded(7);
        assert!((1..=FACES).contains(&die.value()));
    }

    #[test]
    fn test_value_tracks_last_roll() {
        let mut die = Die::seeded(99);
        for _ in 0..20 {
            let rolled = die.roll();
            assert_eq!(die.value(), rolled);
        }
    }

    #[test]
    fn test_seeded_set_dice_differ() {
        let mut dice: [Die; 5] = seeded_set(3);
        let sequences: Vec<Vec<u8>> = dice
            .iter_mut()
            .map(|d| (0..32).map(|_| d.roll()).collect())
            .collect();
        for (i, a) in sequences.iter().enumerate() {
            for b in sequences.iter().skip(i + 1) {
                assert_ne!(a, b, "dice in one set should not share a random stream");
            }
        }
    }
}
