use std::fmt;

use itertools::Itertools;
use log::{debug, error, info};

use crate::{DEFAULT_SIZE, Rotation};

/// The number of moves in a scramble for a cube of the given size
pub fn scramble_length(target_size: usize) -> usize {
    match target_size {
        2 => 15,
        3 => 25,
        _ => (target_size * 20).saturating_sub(40),
    }
}

/// A random move sequence for one cube size. No move shares its face letter with either of
/// the two moves before it, so the sequence never contains trivially cancelling turns.
#[derive(Debug, Clone)]
pub struct Scrambler {
    target_size: usize,
    moves: Vec<Rotation>,
    rng: fastrand::Rng,
}

impl Scrambler {
    pub fn new(target_size: usize) -> Scrambler {
        Scrambler::with_rng(target_size, fastrand::Rng::new())
    }

    /// A scrambler whose sequences are fully determined by `seed`
    pub fn with_seed(target_size: usize, seed: u64) -> Scrambler {
        Scrambler::with_rng(target_size, fastrand::Rng::with_seed(seed))
    }

    fn with_rng(target_size: usize, rng: fastrand::Rng) -> Scrambler {
        let target_size = if target_size >= 2 {
            target_size
        } else {
            error!(
                "Invalid cubesize {target_size} for scrambler, using DEFAULT_SIZE {DEFAULT_SIZE}"
            );
            DEFAULT_SIZE
        };

        let mut scrambler = Scrambler {
            target_size,
            moves: Vec::with_capacity(scramble_length(target_size)),
            rng,
        };
        scrambler.regenerate();
        info!(
            "New scrambler created for cubesize {target_size} with a length of {}",
            scrambler.moves.len()
        );
        scrambler
    }

    /// Replace the sequence with a fresh one of the same length
    pub fn regenerate(&mut self) {
        let len = scramble_length(self.target_size);
        let rng = &mut self.rng;
        let mut moves: Vec<Rotation> = Vec::with_capacity(len);

        for i in 0..len {
            let rotation = match i {
                0 => Rotation::generate(self.target_size, rng),
                1 => Rotation::generate_different(self.target_size, &moves[0], rng),
                _ => Rotation::generate_avoiding(
                    self.target_size,
                    &[moves[i - 1].letter(), moves[i - 2].letter()],
                    rng,
                ),
            };
            moves.push(rotation);
        }

        self.moves = moves;
        debug!("Generated new scramble {self}");
    }

    pub fn target_size(&self) -> usize {
        self.target_size
    }

    pub fn moves(&self) -> &[Rotation] {
        &self.moves
    }
}

impl fmt::Display for Scrambler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.moves.iter().join(" "))
    }
}
