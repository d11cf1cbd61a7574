//! Injectable source of the two random draws a generation makes.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks an index into a non-empty slice of `len` candidates.
pub trait Selector {
    fn pick(&mut self, len: usize) -> usize;
}

/// `StdRng`-backed selector. Entropy-seeded by default, or seeded for
/// reproducible output.
#[derive(Debug, Clone)]
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded when `seed` is given, entropy otherwise
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map(Self::seeded).unwrap_or_else(Self::from_entropy)
    }
}

impl Default for RandomSelector {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl Selector for RandomSelector {
    fn pick(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }
}

/// Always returns the same index (wrapped to the slice length)
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedSelector {
    pub index: usize,
}

impl FixedSelector {
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

impl Selector for FixedSelector {
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 { 0 } else { self.index % len }
    }
}

/// Draw one element of `items`, or `None` when it is empty
pub fn choose<'a, T>(selector: &mut dyn Selector, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(selector.pick(items.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_selectors_repeat_their_draws() {
        let mut first = RandomSelector::seeded(42);
        let mut second = RandomSelector::seeded(42);
        let a: Vec<usize> = (0..16).map(|_| first.pick(4)).collect();
        let b: Vec<usize> = (0..16).map(|_| second.pick(4)).collect();
        assert_eq!(a, b);
        assert!(a.iter().all(|index| *index < 4));
    }

    #[test]
    fn fixed_selector_wraps() {
        let mut selector = FixedSelector::new(5);
        assert_eq!(selector.pick(3), 2);
        assert_eq!(selector.pick(0), 0);
    }

    #[test]
    fn choose_handles_empty_slices() {
        let mut selector = FixedSelector::default();
        let empty: [u8; 0] = [];
        assert_eq!(choose(&mut selector, &empty), None);
        assert_eq!(choose(&mut selector, &["only"]), Some(&"only"));
    }
}
