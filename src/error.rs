//! Error types for seeded random generation

/// Main error types for the library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested length exceeds the configured maximum.
    #[error("Requested {requested} bytes, maximum is {max}")]
    RequestTooLarge {
        /// Number of bytes asked for.
        requested: usize,
        /// Largest request the generator accepts.
        max: usize,
    },

    /// The entropy source failed to produce bytes.
    #[error("Random generation failed: {0}")]
    Generation(String),

    /// Configuration values were rejected.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
