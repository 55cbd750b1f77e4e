//! Secure random bytes from a seeded entropy source.
//!
//! This library fills caller buffers with cryptographically secure random
//! bytes, first making sure the underlying entropy source has been seeded.
//! It is not a PRNG: every byte comes from the injected [`EntropySource`].
//!
//! # Features
//!
//! - **Readiness polling**: gathers entropy until the source reports seeded
//!   or stops making progress
//! - **Fill-or-fail**: buffers are zeroed before use and left all zero on failure
//! - **Injected sources**: [`OsEntropy`] by default, any [`EntropySource`] in tests
//! - **rand_core integration**: [`SecureRng`] implements `RngCore + CryptoRng`
//!
//! # Quick Start
//!
//! ```rust
//! let mut nonce = [0u8; 24];
//! if !seeded_random::random(&mut nonce) {
//!     panic!("no secure randomness available");
//! }
//! ```
//!
//! # Security Considerations
//!
//! - Never use buffer contents after a failed request, even though they are zero
//! - A source reporting a negative status is a broken environment and panics

/// Entropy source capability and the operating system backend.
pub mod entropy;
/// Error types.
pub mod error;
/// Readiness poller and secure byte fetcher.
pub mod random;
/// `rand_core` adapter.
pub mod rng;

pub use entropy::{EntropySource, OsEntropy};
pub use error::{Error, Result};
pub use random::{MAX_REQUEST_LEN, RandomConfig, SecureRandom};
pub use rng::SecureRng;

static SYSTEM: SecureRandom<OsEntropy> = SecureRandom::new(OsEntropy::new());

/// Returns the process-wide generator backed by the operating system.
pub fn system() -> &'static SecureRandom<OsEntropy> {
    &SYSTEM
}

/// Polls the process-wide source until seeded or out of progress.
pub fn poll() {
    SYSTEM.poll();
}

/// Fills `dest` from the process-wide generator, returning whether it succeeded.
pub fn random(dest: &mut [u8]) -> bool {
    SYSTEM.random(dest)
}

/// Fills `dest` from the process-wide generator.
///
/// # Errors
///
/// See [`SecureRandom::try_random`].
pub fn try_random(dest: &mut [u8]) -> Result<()> {
    SYSTEM.try_random(dest)
}

/// Returns `len` bytes from the process-wide generator.
///
/// # Errors
///
/// See [`SecureRandom::random_vec`].
pub fn random_vec(len: usize) -> Result<Vec<u8>> {
    SYSTEM.random_vec(len)
}

/// Returns `N` bytes from the process-wide generator.
///
/// # Errors
///
/// See [`SecureRandom::random_array`].
pub fn random_array<const N: usize>() -> Result<[u8; N]> {
    SYSTEM.random_array()
}
