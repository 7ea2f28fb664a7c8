//! RNG module - uniform random piece generation
//!
//! Every kind is drawn independently with equal probability (no bag, no
//! history). The generator is a seeded [`StdRng`], so a given seed always
//! produces the same sequence of kinds, which keeps sessions reproducible in
//! tests and benches.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::PieceKind;

/// Seeded source of piece kinds
#[derive(Debug, Clone)]
pub struct PieceRandomizer {
    rng: StdRng,
    seed: u64,
}

impl PieceRandomizer {
    /// Create a randomizer with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this randomizer was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw the next kind, uniformly among all seven
    pub fn next_kind(&mut self) -> PieceKind {
        let idx = self.rng.gen_range(0..PieceKind::ALL.len());
        PieceKind::ALL[idx]
    }
}
