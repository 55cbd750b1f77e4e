//! Operating system entropy via `getrandom`.

use std::sync::atomic::{AtomicBool, Ordering};

use rand_core::{OsRng, RngCore};
use tracing::{debug, warn};
use zeroize::Zeroize;

use super::EntropySource;
use crate::{Error, Result};

/// Entropy source backed by the operating system CSPRNG.
///
/// The kernel owns the real seeding state. This type tracks whether a draw
/// has succeeded in this process; until then it reports itself unseeded and
/// a gathering pass performs a one-byte probe draw.
#[derive(Debug, Default)]
pub struct OsEntropy {
    seeded: AtomicBool,
}

impl OsEntropy {
    /// Creates a source that has not yet confirmed the OS is seeded.
    pub const fn new() -> Self {
        Self {
            seeded: AtomicBool::new(false),
        }
    }
}

impl EntropySource for OsEntropy {
    fn status(&self) -> i32 {
        i32::from(self.seeded.load(Ordering::Acquire))
    }

    fn gather(&self) -> i32 {
        let mut probe = [0u8; 1];
        let outcome = OsRng.try_fill_bytes(&mut probe);
        probe.zeroize();

        match outcome {
            Ok(()) => {
                self.seeded.store(true, Ordering::Release);
                debug!("operating system entropy source confirmed seeded");
                1
            }
            Err(e) => {
                warn!(error = %e, "operating system entropy probe failed");
                0
            }
        }
    }

    fn fill(&self, dest: &mut [u8]) -> Result<()> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| Error::Generation(e.to_string()))
    }
}
