//! Error types for world construction.
//!
//! Player-facing failures are never errors; they are transcript text emitted
//! by the engine. These errors cover static data and generation problems
//! that make a world impossible to build at all.

use thiserror::Error;

/// Convenience alias for world-construction results.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading data or generating a world.
#[derive(Debug, Error)]
pub enum Error {
    /// The tile name pool was present but empty.
    #[error("tile name pool is empty; world generation needs at least one name")]
    EmptyTilePool,

    /// A zero-sized grid was requested.
    #[error("grid size must be at least 1, got {0}")]
    ZeroGridSize(usize),

    /// The static data document could not be parsed.
    #[error("malformed game data: {0}")]
    MalformedData(#[from] serde_json::Error),
}
