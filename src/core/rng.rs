//! Seeded randomness for shuffles and seating.
//!
//! One root seed drives a whole game. Each consumer asks for its own named
//! stream (`"shuffle"`, `"seating"`), so extra draws in one never shift the
//! numbers seen by the other. Streams are ChaCha8 stream ids derived from
//! the name with FNV-1a, which keeps them stable across toolchains.
//!
//! ```
//! use fishing_game::core::GameRng;
//!
//! let mut a = GameRng::new(7).for_context("seating");
//! let mut b = GameRng::new(7).for_context("seating");
//! assert_eq!(a.below(10), b.below(10));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

fn stream_id(name: &str) -> u64 {
    name.bytes()
        .fold(FNV_OFFSET, |hash, byte| (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME))
}

/// A ChaCha8 stream tied to a game's root seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// The root stream for `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// A root stream with a seed taken from the OS.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Root seed, shared by every named stream split from it.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The named stream `name` of this game, starting from its beginning.
    #[must_use]
    pub fn for_context(&self, name: &str) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(self.seed);
        inner.set_stream(stream_id(name));
        Self {
            inner,
            seed: self.seed,
        }
    }

    /// Uniform pick in `0..bound`. `bound` must be non-zero.
    pub fn below(&mut self, bound: usize) -> usize {
        self.inner.gen_range(0..bound)
    }

    /// Shuffle `items` in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        use rand::seq::SliceRandom;
        items.shuffle(&mut self.inner);
    }
}
