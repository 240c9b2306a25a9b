//! Free-text command interpretation for Thornwald.
//!
//! Transforms one line of raw player input into either exactly one
//! validated command invocation or a structured failure message sequence.
//!
//! # Architecture
//!
//! ```text
//! "hit the goblin with sword"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → ["hit", "goblin", "sword"]   (stop words gone)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ COMMAND TABLE   │  → hit|attack|kill|…  slots "e!i"  → Attack
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ CANDIDATES      │  → entities tagged "goblin", inventory "sword"
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ SLOT BINDING    │  → Invocation { Attack, [Entity(goblin),
//! └─────────────────┘                 Inventory(sword)] }
//! ```
//!
//! Commands are tried in registration order; several records may share a
//! verb and differ only in argument kinds, so order is semantics, not an
//! implementation detail. The interpreter itself never mutates game state.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]


pub mod command;
pub mod extract;
pub mod interpreter;
pub mod table;
pub mod token;

pub use command::{Action, ArgKind, CommandSpec, Slot, SpecError};
pub use extract::{Candidates, Cursors};
pub use interpreter::{Arg, Interpreter, Invocation, Outcome};
pub use table::default_commands;
pub use token::tokenize;
