//! RNG module - next-piece generation
//!
//! Each draw is uniform over the seven kinds and independent of every earlier
//! draw. There is no bag: streaks and droughts are possible.
//!
//! Seeded construction gives a reproducible sequence for tests and replays of
//! a bug report; `from_entropy` is used for normal play.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::{PieceKind, PIECE_KIND_COUNT};

/// Uniform piece-kind generator
#[derive(Debug, Clone)]
pub struct PieceRng {
    rng: StdRng,
}

impl PieceRng {
    /// Create a generator with a fixed seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a generator seeded from the OS
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Draw the next piece kind
    pub fn next_kind(&mut self) -> PieceKind {
        let idx = self.rng.gen_range(0..PIECE_KIND_COUNT as usize);
        PieceKind::ALL[idx]
    }
}

impl Default for PieceRng {
    fn default() -> Self {
        Self::new(1)
    }
}
