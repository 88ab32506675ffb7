//! Random selection for fair draws.
//!
//! Every draw goes through the [`Randomness`] trait so a session can be
//! seeded for replays and tests can script the exact picks.

use crate::error::{GameError, GameResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform random indices
pub trait Randomness: Send {
    /// Return an index in `0..upper`. `upper` is always at least 1.
    fn index_below(&mut self, upper: usize) -> usize;
}

/// Production source backed by `StdRng`
#[derive(Debug)]
pub struct SystemRandomness {
    rng: StdRng,
}

impl SystemRandomness {
    /// Seed from the operating system
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible sequence for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for SystemRandomness {
    fn default() -> Self {
        Self::new()
    }
}

impl Randomness for SystemRandomness {
    fn index_below(&mut self, upper: usize) -> usize {
        self.rng.random_range(0..upper)
    }
}

/// Replays a fixed list of indices, cycling when exhausted.
/// Each value is reduced modulo the requested bound so it is always in range.
#[derive(Debug, Clone)]
pub struct ScriptedRandomness {
    values: Vec<usize>,
    index: usize,
}

impl ScriptedRandomness {
    pub fn new(values: Vec<usize>) -> Self {
        Self { values, index: 0 }
    }

    /// Always picks index 0, which makes `shuffle` a fixed rotation
    pub fn zeros() -> Self {
        Self::new(vec![0])
    }
}

impl Randomness for ScriptedRandomness {
    fn index_below(&mut self, upper: usize) -> usize {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.index % self.values.len()];
        self.index += 1;
        value % upper
    }
}

/// Pick one element with probability `1 / len` each
pub fn pick_uniform<'a, T>(rng: &mut dyn Randomness, items: &'a [T]) -> GameResult<&'a T> {
    if items.is_empty() {
        return Err(GameError::InvalidArgument("cannot pick from an empty sequence"));
    }
    Ok(&items[rng.index_below(items.len())])
}

/// Fisher-Yates shuffle into a fresh vector. The input is left untouched.
pub fn shuffle<T: Clone>(rng: &mut dyn Randomness, items: &[T]) -> Vec<T> {
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.index_below(i + 1);
        shuffled.swap(i, j);
    }
    shuffled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_uniform_empty_is_invalid_argument() {
        let mut rng = SystemRandomness::seeded(1);
        let empty: Vec<u8> = Vec::new();
        let result = pick_uniform(&mut rng, &empty);
        assert!(matches!(result, Err(GameError::InvalidArgument(_))));
    }

    #[test]
    fn test_pick_uniform_returns_member() {
        let mut rng = SystemRandomness::seeded(7);
        let items = ["momo", "chiya", "bara"];
        for _ in 0..50 {
            let picked = pick_uniform(&mut rng, &items).unwrap();
            assert!(items.contains(picked));
        }
    }

    #[test]
    fn test_pick_uniform_scripted() {
        let mut rng = ScriptedRandomness::new(vec![2, 0]);
        let items = ["a", "b", "c"];
        assert_eq!(*pick_uniform(&mut rng, &items).unwrap(), "c");
        assert_eq!(*pick_uniform(&mut rng, &items).unwrap(), "a");
    }

    #[test]
    fn test_pick_uniform_hits_every_element() {
        let mut rng = SystemRandomness::seeded(42);
        let items = [0usize, 1, 2, 3];
        let mut seen = [false; 4];
        for _ in 0..200 {
            seen[*pick_uniform(&mut rng, &items).unwrap()] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = SystemRandomness::seeded(3);
        let items: Vec<u32> = (0..20).collect();
        for _ in 0..20 {
            let mut shuffled = shuffle(&mut rng, &items);
            assert_eq!(shuffled.len(), items.len());
            shuffled.sort();
            assert_eq!(shuffled, items);
        }
    }

    #[test]
    fn test_shuffle_does_not_mutate_input() {
        let mut rng = SystemRandomness::seeded(9);
        let items = vec!["A", "B", "C", "D"];
        let _ = shuffle(&mut rng, &items);
        assert_eq!(items, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_shuffle_scripted_swaps() {
        // i=3 -> j=0: [D,B,C,A]; i=2 -> j=2: no-op; i=1 -> j=0: [B,D,C,A]
        let mut rng = ScriptedRandomness::new(vec![0, 2, 0]);
        let shuffled = shuffle(&mut rng, &["A", "B", "C", "D"]);
        assert_eq!(shuffled, vec!["B", "D", "C", "A"]);
    }

    #[test]
    fn test_shuffle_empty_and_single() {
        let mut rng = ScriptedRandomness::zeros();
        assert!(shuffle::<u8>(&mut rng, &[]).is_empty());
        assert_eq!(shuffle(&mut rng, &[5]), vec![5]);
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let items: Vec<u32> = (0..10).collect();
        let a = shuffle(&mut SystemRandomness::seeded(11), &items);
        let b = shuffle(&mut SystemRandomness::seeded(11), &items);
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_reaches_every_ordering_of_three() {
        let mut rng = SystemRandomness::seeded(5);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..300 {
            seen.insert(shuffle(&mut rng, &[1, 2, 3]));
        }
        assert_eq!(seen.len(), 6);
    }
}
