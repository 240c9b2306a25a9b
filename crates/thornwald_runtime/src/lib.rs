//! Terminal runtime for Thornwald.
//!
//! This crate provides:
//! - [`Console`] / [`RustylineConsole`] - line input with raw-recall
//! - [`Display`] - word-wrapped stdout rendering of transcript notes
//! - [`Session`] - the blocking player-phase/world-phase loop
//! - the `thornwald` binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod console;
pub mod display;
pub mod error;
pub mod session;

pub use console::{Console, ReadResult, RustylineConsole, resolve_recall};
pub use display::{Display, WRAP_WIDTH, wrap};
pub use error::{Result, RuntimeError};
pub use session::Session;
