//! `rand_core` adapter over the seeded generator.

use rand_core::{CryptoRng, RngCore};

use crate::entropy::{EntropySource, OsEntropy};
use crate::random::SecureRandom;

/// Cryptographically secure random number generator.
///
/// This is a thin wrapper around [`SecureRandom`] that lets the seeded
/// generator drive anything expecting a `rand_core` RNG.
pub struct SecureRng<S: EntropySource = OsEntropy>(SecureRandom<S>);

impl SecureRng {
    /// Creates a new cryptographically secure random number generator.
    pub fn new() -> Self {
        Self(SecureRandom::new(OsEntropy::new()))
    }
}

impl Default for SecureRng {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EntropySource> SecureRng<S> {
    /// Wraps an existing generator.
    pub fn from_random(random: SecureRandom<S>) -> Self {
        Self(random)
    }

    /// Returns the wrapped generator.
    pub fn inner(&self) -> &SecureRandom<S> {
        &self.0
    }
}

impl<S: EntropySource> RngCore for SecureRng<S> {
    fn next_u32(&mut self) -> u32 {
        let mut bytes = [0u8; 4];
        self.fill_bytes(&mut bytes);
        u32::from_le_bytes(bytes)
    }

    fn next_u64(&mut self) -> u64 {
        let mut bytes = [0u8; 8];
        self.fill_bytes(&mut bytes);
        u64::from_le_bytes(bytes)
    }

    /// # Panics
    /// Panics if the entropy source fails, matching `OsRng`.
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        if let Err(e) = self.try_fill_bytes(dest) {
            panic!("secure random generation failed: {e}");
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.0.try_random(dest).map_err(rand_core::Error::new)
    }
}

impl<S: EntropySource> CryptoRng for SecureRng<S> {}
