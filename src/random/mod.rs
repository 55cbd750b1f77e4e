//! Seeded secure byte generation.
//!
//! [`SecureRandom`] pairs an [`EntropySource`] with a request limit. Before
//! every draw it polls the source until it reports seeded or a gathering pass
//! stops making progress, then delegates the fill to the source.

use std::ffi::c_int;

use tracing::{debug, trace, warn};
use zeroize::Zeroize;

use crate::entropy::EntropySource;
use crate::{Error, Result};

/// Random generator configuration.
pub mod config;

pub use config::RandomConfig;

/// Largest request accepted, the maximum of the platform's C `int`.
pub const MAX_REQUEST_LEN: usize = c_int::MAX as usize;

/// Secure byte generator over an injected entropy source.
///
/// # Security
///
/// - The destination is zeroed before any random bytes are written
/// - On failure the destination is left all zero, never partially filled
/// - Callers must not use the buffer contents when a request fails
#[derive(Debug)]
pub struct SecureRandom<S: EntropySource> {
    source: S,
    max_request_len: usize,
}

impl<S: EntropySource> SecureRandom<S> {
    /// Creates a generator accepting requests up to [`MAX_REQUEST_LEN`] bytes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seeded_random::{OsEntropy, SecureRandom};
    ///
    /// let generator = SecureRandom::new(OsEntropy::new());
    /// let mut key = [0u8; 32];
    /// assert!(generator.random(&mut key));
    /// ```
    pub const fn new(source: S) -> Self {
        Self {
            source,
            max_request_len: MAX_REQUEST_LEN,
        }
    }

    /// Creates a generator from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the configuration fails validation.
    pub fn from_config(source: S, config: &RandomConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(source).with_max_request_len(config.max_request_len))
    }

    /// Lowers the request limit. Values above [`MAX_REQUEST_LEN`] are clamped.
    pub fn with_max_request_len(mut self, max_request_len: usize) -> Self {
        self.max_request_len = max_request_len.min(MAX_REQUEST_LEN);
        self
    }

    /// Returns the largest request this generator accepts.
    pub fn max_request_len(&self) -> usize {
        self.max_request_len
    }

    /// Returns the underlying entropy source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Consumes the generator, returning the entropy source.
    pub fn into_source(self) -> S {
        self.source
    }

    /// Waits until the source is seeded or can make no further progress.
    ///
    /// There is no iteration cap: the loop ends only when the source reports
    /// seeded or a gathering pass reports zero progress. In the latter case
    /// the source may still be unseeded and the next fill reports it.
    ///
    /// # Panics
    ///
    /// Panics if the source reports a negative status.
    pub fn poll(&self) {
        let mut rounds: u64 = 0;

        while !self.is_seeded() {
            let progress = self.source.gather();
            rounds += 1;

            if progress == 0 {
                warn!(rounds, "entropy gathering made no progress, source still unseeded");
                return;
            }

            trace!(rounds, progress, "entropy gathered, re-checking seed status");
        }
    }

    /// Reports whether the source currently considers itself seeded.
    ///
    /// # Panics
    ///
    /// Panics if the source reports a negative status.
    pub fn is_seeded(&self) -> bool {
        let status = self.source.status();
        assert!(
            status >= 0,
            "entropy source reported malformed status {status}"
        );
        status != 0
    }

    /// Fills `dest` with secure random bytes, returning whether it succeeded.
    ///
    /// Every failure collapses to `false`; see [`SecureRandom::try_random`]
    /// for the cause.
    pub fn random(&self, dest: &mut [u8]) -> bool {
        match self.try_random(dest) {
            Ok(()) => true,
            Err(e) => {
                warn!(len = dest.len(), error = %e, "secure random request failed");
                false
            }
        }
    }

    /// Fills `dest` with secure random bytes.
    ///
    /// Oversized requests are rejected before the buffer or the source is
    /// touched. Otherwise the buffer is zeroed, the source polled and then
    /// asked for exactly `dest.len()` bytes. Empty requests succeed without
    /// consulting the source.
    ///
    /// # Errors
    ///
    /// - [`Error::RequestTooLarge`] if `dest` is longer than the limit
    /// - [`Error::Generation`] if the source failed; `dest` is all zero
    pub fn try_random(&self, dest: &mut [u8]) -> Result<()> {
        if dest.len() > self.max_request_len {
            debug!(
                requested = dest.len(),
                max = self.max_request_len,
                "rejecting oversized random request"
            );
            return Err(Error::RequestTooLarge {
                requested: dest.len(),
                max: self.max_request_len,
            });
        }

        dest.zeroize();

        if dest.is_empty() {
            return Ok(());
        }

        self.poll();

        if let Err(e) = self.source.fill(dest) {
            dest.zeroize();
            return Err(e);
        }

        Ok(())
    }

    /// Returns a freshly allocated vector of `len` secure random bytes.
    ///
    /// # Errors
    ///
    /// Same as [`SecureRandom::try_random`].
    pub fn random_vec(&self, len: usize) -> Result<Vec<u8>> {
        if len > self.max_request_len {
            return Err(Error::RequestTooLarge {
                requested: len,
                max: self.max_request_len,
            });
        }

        let mut out = vec![0u8; len];
        self.try_random(&mut out)?;
        Ok(out)
    }

    /// Returns an array of `N` secure random bytes.
    ///
    /// # Errors
    ///
    /// Same as [`SecureRandom::try_random`].
    pub fn random_array<const N: usize>(&self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        self.try_random(&mut out)?;
        Ok(out)
    }
}
