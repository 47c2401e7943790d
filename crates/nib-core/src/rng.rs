//! Seeded xorshift128 generator.

use crate::seed::Seed;

/// Deterministic xorshift128 generator with four 32-bit words of state.
///
/// Given the same [`Seed`] and the same call sequence, the output sequence
/// is identical across runs and platforms; this is what makes a rendered
/// sketch reproducible from its seed alone.
#[derive(Clone, Debug)]
pub struct Xorshift {
    state: [u32; 4],
}

impl Xorshift {
    /// Create a generator from a seed.
    pub fn from_seed(seed: &Seed) -> Self {
        Self {
            state: seed.state(),
        }
    }

    /// Reset the generator state from a seed.
    pub fn reseed(&mut self, seed: &Seed) {
        self.state = seed.state();
    }

    /// Next uniform sample in `[0, 1)`.
    pub fn next(&mut self) -> f64 {
        let [s0, s1, s2, s3] = self.state;
        let mut t = s3;
        t ^= t << 11;
        t ^= t >> 8;
        let fresh = t ^ s0 ^ (s0 >> 19);
        self.state = [fresh, s0, s1, s2];
        fresh as f64 / 4_294_967_296.0
    }

    /// Uniform sample in `[a, b)`.
    pub fn range(&mut self, a: f64, b: f64) -> f64 {
        a + (b - a) * self.next()
    }

    /// Uniform sample in `[0, max)`.
    pub fn range_to(&mut self, max: f64) -> f64 {
        self.range(0.0, max)
    }

    /// Uniform sample in `[a, b)`, truncated toward zero.
    pub fn range_floor(&mut self, a: f64, b: f64) -> i64 {
        self.range(a, b).trunc() as i64
    }

    /// A fair coin flip.
    pub fn chance(&mut self) -> bool {
        self.next() < 0.5
    }

    /// Pick one element, index `floor(len * next())`.
    ///
    /// `items` must be non-empty; callers choose from fixed tables.
    pub fn choice<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        debug_assert!(!items.is_empty(), "choice from an empty slice");
        let idx = (items.len() as f64 * self.next()) as usize;
        &items[idx]
    }

    /// In-place Fisher-Yates shuffle, one sample per swap.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = (self.next() * (i as f64 + 1.0)) as usize;
            items.swap(i, j);
        }
    }

    /// A shuffled copy of `items`, truncated to `n` elements.
    pub fn pick_n<T: Clone>(&mut self, items: &[T], n: usize) -> Vec<T> {
        let mut picked = items.to_vec();
        self.shuffle(&mut picked);
        picked.truncate(n);
        picked
    }

    /// Two fresh uniform samples.
    pub fn vec2(&mut self) -> (f64, f64) {
        (self.next(), self.next())
    }

    /// Three fresh uniform samples.
    pub fn vec3(&mut self) -> (f64, f64, f64) {
        (self.next(), self.next(), self.next())
    }
}
