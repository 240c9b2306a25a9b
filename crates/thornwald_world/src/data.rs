//! Static game data.
//!
//! World generation consumes a JSON document supplying the scenic tile name
//! pool. The contract is deliberately loose: any document with a non-empty
//! `tiles` list of strings is accepted.

use serde::Deserialize;

use crate::error::{Error, Result};

/// Static data consumed once at world-generation time.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct GameData {
    /// Scenic tile names, drawn from with repetition.
    pub tiles: Vec<String>,
}

impl GameData {
    /// Parses a JSON document and validates the tile pool.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedData`] on invalid JSON or a missing
    /// `tiles` key, and [`Error::EmptyTilePool`] when the list is empty.
    pub fn from_json(text: &str) -> Result<Self> {
        let data: Self = serde_json::from_str(text)?;
        if data.tiles.is_empty() {
            return Err(Error::EmptyTilePool);
        }
        Ok(data)
    }

    /// A small built-in pool for sessions started without a data file.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            tiles: [
                "a dense forest",
                "an open meadow",
                "a rocky hillside",
                "a quiet riverbank",
                "a windswept moor",
                "an old orchard",
                "a shallow marsh",
                "a sunlit glade",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}
