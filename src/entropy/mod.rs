//! Entropy sources that back the secure byte generator.
//!
//! A source exposes three capabilities: a seeded-status query, a best-effort
//! gathering pass, and a fill operation. The generator never reaches for a
//! global; it is handed a source, which keeps fakes trivial to plug in.

use std::sync::Arc;

use crate::Result;

/// Operating system backed source.
pub mod os;

pub use os::OsEntropy;

/// A cryptographically secure entropy subsystem.
///
/// Implementations own their seeding state. The generator only queries it and
/// asks for more entropy when the source reports itself unseeded.
pub trait EntropySource {
    /// Returns the seeded status of the source.
    ///
    /// A well-formed status is non-negative; any nonzero value means the
    /// source is seeded. Negative values are never expected and callers treat
    /// them as a broken environment.
    fn status(&self) -> i32;

    /// Performs a best-effort entropy gathering pass.
    ///
    /// Returns `0` when no progress was made, in which case the caller stops
    /// asking.
    fn gather(&self) -> i32;

    /// Fills `dest` entirely with secure random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Generation`](crate::Error::Generation) if the source
    /// cannot produce the requested bytes.
    fn fill(&self, dest: &mut [u8]) -> Result<()>;
}

impl<S: EntropySource + ?Sized> EntropySource for &S {
    fn status(&self) -> i32 {
        (**self).status()
    }

    fn gather(&self) -> i32 {
        (**self).gather()
    }

    fn fill(&self, dest: &mut [u8]) -> Result<()> {
        (**self).fill(dest)
    }
}

impl<S: EntropySource + ?Sized> EntropySource for Box<S> {
    fn status(&self) -> i32 {
        (**self).status()
    }

    fn gather(&self) -> i32 {
        (**self).gather()
    }

    fn fill(&self, dest: &mut [u8]) -> Result<()> {
        (**self).fill(dest)
    }
}

impl<S: EntropySource + ?Sized> EntropySource for Arc<S> {
    fn status(&self) -> i32 {
        (**self).status()
    }

    fn gather(&self) -> i32 {
        (**self).gather()
    }

    fn fill(&self, dest: &mut [u8]) -> Result<()> {
        (**self).fill(dest)
    }
}
