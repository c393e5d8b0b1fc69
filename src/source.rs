//! Where cards come from.
//!
//! The table never owns a deck. Each draw asks a [`CardSource`] for one card,
//! and the default source samples uniformly with replacement. Tests and
//! replays swap in a [`StackedSource`] to script the exact cards dealt.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;

/// A supplier of cards for the table.
pub trait CardSource {
    /// Produces the next card.
    fn draw(&mut self) -> Card;
}

impl<S: CardSource + ?Sized> CardSource for &mut S {
    fn draw(&mut self) -> Card {
        (**self).draw()
    }
}

/// Samples every card independently and uniformly from the 52 combinations.
#[derive(Debug, Clone)]
pub struct RandomSource<R = ChaCha8Rng> {
    rng: R,
}

impl RandomSource {
    /// Creates a source backed by a `ChaCha8Rng` seeded with `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource<R> {
    /// Wraps an existing random number generator.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> CardSource for RandomSource<R> {
    fn draw(&mut self) -> Card {
        Card::sample(&mut self.rng)
    }
}

/// Deals a fixed sequence of cards first, then falls back to random sampling.
#[derive(Debug, Clone)]
pub struct StackedSource {
    stacked: VecDeque<Card>,
    fallback: RandomSource,
}

impl StackedSource {
    /// Creates a source that deals `cards` in order before sampling with
    /// a generator seeded from `seed`.
    #[must_use]
    pub fn new(cards: Vec<Card>, seed: u64) -> Self {
        Self {
            stacked: cards.into(),
            fallback: RandomSource::seeded(seed),
        }
    }

    /// Appends cards to the end of the stacked sequence.
    pub fn push(&mut self, cards: &[Card]) {
        self.stacked.extend(cards.iter().copied());
    }

    /// Number of stacked cards not yet dealt.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.stacked.len()
    }
}

impl CardSource for StackedSource {
    fn draw(&mut self) -> Card {
        self.stacked
            .pop_front()
            .unwrap_or_else(|| self.fallback.draw())
    }
}
