//! Turn resolution for Thornwald: action handlers, combat, trade, and the
//! game loop's state machine.
//!
//! ```text
//! +-------------------+
//! | thornwald_engine  |
//! |                   |
//! |  +-------------+  |   validated      +-------------------+
//! |  | game        |<-|------------------| thornwald_parser  |
//! |  +-------------+  |   invocations    +-------------------+
//! |    |    |    |    |
//! |    v    v    v    |
//! |  actions combat   |   mutations      +-------------------+
//! |       trade       |----------------->| thornwald_world   |
//! |         |         |                  +-------------------+
//! |         v         |
//! |  +-------------+  |
//! |  | transcript  |  |--> queued output for the runtime
//! |  +-------------+  |
//! +-------------------+
//! ```
//!
//! The engine is deterministic given its inputs: every stochastic decision
//! draws from a caller-supplied [`rand::Rng`], and all output is queued on a
//! [`Transcript`] rather than printed.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]


pub mod actions;
pub mod combat;
pub mod game;
pub mod trade;
pub mod transcript;

pub use actions::{inspect, loot_all, loot_one};
pub use combat::{attack, free_action, player_free_action};
pub use game::Game;
pub use trade::{buy, sell};
pub use transcript::{Note, Transcript};
