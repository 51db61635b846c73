//! Crate-wide error type.
//!
//! Everything that can fail in the core (sequence generation, config
//! loading, export and snapshot I/O) funnels into [`OctaveError`]. The
//! presentation layer catches these at the event boundary and logs them.

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, OctaveError>;

#[derive(Debug, thiserror::Error)]
pub enum OctaveError {
    /// Seed outside the accepted range (0 never reaches 1).
    #[error("invalid seed {0}: seeds must be >= 1")]
    InvalidSeed(u64),

    /// Iteration cap hit before the sequence reached 1.
    #[error("sequence for seed {seed} did not terminate within {steps} steps")]
    NonTermination { seed: u64, steps: usize },

    /// `3n + 1` no longer fits in a u64.
    #[error("sequence for seed {seed} overflowed u64 at value {value}")]
    Overflow { seed: u64, value: u64 },

    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path:?}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to encode image {path:?}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl OctaveError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        OctaveError::Io {
            path: path.into(),
            source,
        }
    }
}
