//! Runtime error type.
//!
//! Only startup and terminal failures surface as errors; anything the
//! player does wrong is answered with transcript text instead.

use std::path::PathBuf;

use thiserror::Error;

/// A fatal runtime failure.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The terminal line editor failed.
    #[error("console failure: {0}")]
    Console(#[from] rustyline::error::ReadlineError),
    /// A game data file could not be read.
    #[error("cannot read data file {path}: {source}")]
    DataFile {
        /// The file that was requested.
        path: PathBuf,
        /// The underlying filesystem error.
        source: std::io::Error,
    },
    /// The game data was malformed or the world could not be generated.
    #[error(transparent)]
    World(#[from] thornwald_world::Error),
}

/// Convenience alias for runtime results.
pub type Result<T> = std::result::Result<T, RuntimeError>;
