//! Random sources for password generation.
//!
//! The generator takes any [`rand::Rng`]. Production callers use the OS
//! generator; a seeded ChaCha20 stream exists for reproducible runs.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Random source selected at startup.
pub enum Source {
    Os(OsRng),
    Seeded(ChaCha20Rng),
}

impl Source {
    /// OS generator, or a seeded stream when `seed` is given.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Source::Seeded(ChaCha20Rng::seed_from_u64(seed)),
            None => Source::Os(OsRng),
        }
    }

    pub fn is_seeded(&self) -> bool {
        matches!(self, Source::Seeded(_))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Source::Os(_) => "os",
            Source::Seeded(_) => "chacha20 (seeded)",
        }
    }
}

impl Default for Source {
    fn default() -> Self {
        Source::Os(OsRng)
    }
}

impl RngCore for Source {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        match self {
            Source::Os(rng) => rng.next_u32(),
            Source::Seeded(rng) => rng.next_u32(),
        }
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        match self {
            Source::Os(rng) => rng.next_u64(),
            Source::Seeded(rng) => rng.next_u64(),
        }
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        match self {
            Source::Os(rng) => rng.fill_bytes(dest),
            Source::Seeded(rng) => rng.fill_bytes(dest),
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        match self {
            Source::Os(rng) => rng.try_fill_bytes(dest),
            Source::Seeded(rng) => rng.try_fill_bytes(dest),
        }
    }
}

impl CryptoRng for Source {}
