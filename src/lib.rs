//! Thornwald - Turn-based text exploration game
//!
//! This crate re-exports all layers of the Thornwald system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: thornwald_runtime — console, display, session loop, CLI
//! Layer 2: thornwald_engine  — turn controller, combat, trade, transcript
//! Layer 1: thornwald_parser  — tokenizer, command table, interpreter
//! Layer 0: thornwald_world   — entities, items, health, grid, generation
//! ```

pub use thornwald_engine as engine;
pub use thornwald_parser as parser;
pub use thornwald_runtime as runtime;
pub use thornwald_world as world;
