//! Bag module - 7-bag piece randomizer
//!
//! A bag holds one of each piece kind in a random order. Pieces are drawn one
//! at a time from the end; an empty bag is refilled and reshuffled, so no kind
//! repeats before all seven have been dealt.
//!
//! The shuffle RNG is seeded, so the same seed always deals the same sequence.

use arrayvec::ArrayVec;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::types::PieceKind;

/// 7-bag piece generator
#[derive(Debug, Clone)]
pub struct Bag {
    pieces: ArrayVec<PieceKind, 7>,
    rng: StdRng,
    seed: u64,
}

impl Bag {
    /// Create a bag with a fresh shuffle for `seed`.
    pub fn new(seed: u64) -> Self {
        let mut bag = Self {
            pieces: ArrayVec::new(),
            rng: StdRng::seed_from_u64(seed),
            seed,
        };
        bag.refill();
        bag
    }

    fn refill(&mut self) {
        self.pieces.clear();
        self.pieces.extend(PieceKind::ALL);
        self.pieces.shuffle(&mut self.rng);
    }

    /// Take the next piece kind, refilling first if the bag is empty.
    pub fn draw(&mut self) -> PieceKind {
        if self.pieces.is_empty() {
            self.refill();
        }
        match self.pieces.pop() {
            Some(kind) => kind,
            None => unreachable!("bag refilled with all seven kinds"),
        }
    }

    /// Kinds still in the current bag, in the order they will be drawn.
    pub fn remaining(&self) -> impl Iterator<Item = PieceKind> + '_ {
        self.pieces.iter().rev().copied()
    }

    /// Seed the bag was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for Bag {
    fn default() -> Self {
        Self::new(1)
    }
}
