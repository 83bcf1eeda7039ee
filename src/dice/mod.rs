//! Bounded-integer die with a deterministic override queue.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical roll sequence
//! - **Forkable**: Derive independent dice for separate evaluation contexts
//! - **Scriptable**: Queue determined values to replay exact outcomes in tests
//!
//! The determined-value queue replaces any notion of a process-wide testing
//! flag: scripted outcomes live in the die instance itself, which in turn
//! lives in a single evaluation context, so concurrent resolutions never
//! observe each other's scripts.
//!
//! ```
//! use ttrpg_core::dice::Die;
//!
//! let mut die = Die::new(42);
//! die.queue_determined([15]);
//!
//! assert_eq!(die.roll(20), 15);        // scripted
//! let natural = die.roll(20);          // queue drained, sampled
//! assert!((1..=20).contains(&natural));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use smallvec::SmallVec;

/// A die that rolls integers in `[1, sides]`.
///
/// Uses ChaCha8 for speed while maintaining high-quality randomness.
/// Determined values, when queued, are returned verbatim in FIFO order
/// before any random sampling resumes.
#[derive(Clone, Debug)]
pub struct Die {
    rng: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
    /// SmallVec optimizes for short test scripts without heap allocation.
    determined: SmallVec<[i64; 8]>,
}

impl Die {
    /// Create a die with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
            determined: SmallVec::new(),
        }
    }

    /// Create a die seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Fork this die to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence. Used to
    /// give every evaluation context its own generator. The determined
    /// queue is not inherited by forks.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Roll the die, returning a value in `[1, sides]`.
    ///
    /// If determined values are queued, the front of the queue is consumed
    /// and returned verbatim instead of sampling.
    ///
    /// # Panics
    ///
    /// Panics if `sides < 1`.
    pub fn roll(&mut self, sides: i64) -> i64 {
        assert!(sides >= 1, "a die must have at least one side");

        let result = if self.determined.is_empty() {
            self.rng.gen_range(1..=sides)
        } else {
            self.determined.remove(0)
        };

        tracing::debug!(sides, result, "die roll");
        result
    }

    /// Queue determined values to be returned by upcoming rolls, in order.
    pub fn queue_determined(&mut self, values: impl IntoIterator<Item = i64>) {
        self.determined.extend(values);
    }

    /// Builder form of [`queue_determined`](Self::queue_determined).
    #[must_use]
    pub fn with_determined(mut self, values: impl IntoIterator<Item = i64>) -> Self {
        self.queue_determined(values);
        self
    }

    /// Number of determined values still queued.
    #[must_use]
    pub fn determined_remaining(&self) -> usize {
        self.determined.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut die1 = Die::new(42);
        let mut die2 = Die::new(42);

        for _ in 0..100 {
            assert_eq!(die1.roll(20), die2.roll(20));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut die1 = Die::new(1);
        let mut die2 = Die::new(2);

        let seq1: Vec<_> = (0..10).map(|_| die1.roll(1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| die2.roll(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_rolls_stay_in_bounds() {
        let mut die = Die::new(7);
        for sides in [1, 2, 6, 20, 100] {
            for _ in 0..50 {
                let roll = die.roll(sides);
                assert!((1..=sides).contains(&roll), "{roll} out of 1..={sides}");
            }
        }
    }

    #[test]
    fn test_one_sided_die() {
        let mut die = Die::new(0);
        for _ in 0..10 {
            assert_eq!(die.roll(1), 1);
        }
    }

    #[test]
    fn test_determined_values_consumed_in_order() {
        let mut die = Die::new(42).with_determined([15, 3, 20]);

        assert_eq!(die.roll(20), 15);
        assert_eq!(die.roll(20), 3);
        assert_eq!(die.roll(20), 20);
        assert_eq!(die.determined_remaining(), 0);

        // Queue drained: back to sampling within bounds.
        let natural = die.roll(20);
        assert!((1..=20).contains(&natural));
    }

    #[test]
    fn test_empty_queue_samples() {
        let mut die = Die::new(42);
        die.queue_determined([]);
        let roll = die.roll(20);
        assert!((1..=20).contains(&roll));
    }

    #[test]
    fn test_fork_produces_different_sequence() {
        let mut die = Die::new(42);
        let mut forked = die.fork();

        let seq1: Vec<_> = (0..10).map(|_| die.roll(1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| forked.roll(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut die1 = Die::new(42);
        let mut die2 = Die::new(42);

        let mut fork1 = die1.fork();
        let mut fork2 = die2.fork();

        for _ in 0..10 {
            assert_eq!(fork1.roll(100), fork2.roll(100));
        }
    }

    #[test]
    fn test_fork_does_not_inherit_script() {
        let mut die = Die::new(42).with_determined([13]);
        let forked = die.fork();

        assert_eq!(forked.determined_remaining(), 0);
        assert_eq!(die.roll(20), 13);
    }
}
