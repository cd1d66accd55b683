use rand::Rng;

const LCG_MULTIPLIER: i64 = 1103515245;
const LCG_INCREMENT: i64 = 12345;
const LCG_MODULUS: i64 = i32::MAX as i64;
const DEFAULT_SEED: i64 = 3819201;

/// Source of move indices for [`RandomStrategy`](crate::strategy::random::RandomStrategy).
pub trait MoveRng {
    /// Returns an index in `0..len`. `len` must be non-zero.
    fn next_index(&mut self, len: usize) -> usize;

    /// Picks one element of a slice, `None` if it is empty.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        items.get(self.next_index(items.len()))
    }
}

/// Draws from the thread-local generator of `rand`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRng;

impl MoveRng for SystemRng {
    fn next_index(&mut self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// A seeded linear congruential generator, so that random play can be replayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRng {
    state: i64,
}

impl SeededRng {
    /// Creates a generator starting from `seed`.
    pub const fn new(seed: i64) -> Self {
        Self { state: seed }
    }

    fn step(&mut self) -> i64 {
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT)
            % LCG_MODULUS;
        self.state
    }
}

impl Default for SeededRng {
    fn default() -> Self {
        SeededRng::new(DEFAULT_SEED)
    }
}

impl MoveRng for SeededRng {
    fn next_index(&mut self, len: usize) -> usize {
        (self.step() % len as i64).unsigned_abs() as usize
    }
}
