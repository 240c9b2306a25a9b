//! The command interpreter.
//!
//! Given one line of raw text, produce either exactly one invocation with
//! resolved arguments or a structured failure message sequence. The
//! interpreter reads the world to resolve arguments but never mutates it;
//! all mutation happens in whoever dispatches the invocation.

use thornwald_world::{Direction, EntityId, Viewpoint, World};

use crate::command::{ArgKind, CommandSpec};
use crate::extract::{Candidates, Cursors};
use crate::token::tokenize;

pub use crate::command::Action;

/// A resolved argument value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Arg {
    /// A travel direction.
    Direction(Direction),
    /// An entity at the viewpoint (or the player).
    Entity(EntityId),
    /// An index into the player's inventory.
    Inventory(usize),
    /// A holder entity and an index into its contents.
    Loot(EntityId, usize),
}

/// A validated command call: the action plus its bound arguments in slot
/// order. Optional slots that ran out of candidates are simply absent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    /// What to do.
    pub action: Action,
    /// Bound arguments, in slot order.
    pub args: Vec<Arg>,
}

/// What interpreting one line produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing survived sanitization; say nothing, do nothing.
    Silent,
    /// Exactly one command resolved; dispatch it.
    Invoke(Invocation),
    /// No command resolved; the lines to show the player, in order.
    Failure(Vec<String>),
}

/// Interprets raw input lines against an ordered command table.
#[derive(Clone, Debug)]
pub struct Interpreter {
    commands: Vec<CommandSpec>,
}

impl Interpreter {
    /// Creates an interpreter over a command table. The table's order is
    /// preserved and drives candidate disambiguation.
    #[must_use]
    pub const fn new(commands: Vec<CommandSpec>) -> Self {
        Self { commands }
    }

    /// Interprets one line of raw input against the world as seen from the
    /// given viewpoint.
    #[must_use]
    pub fn interpret(&self, input: &str, world: &World, viewpoint: Viewpoint) -> Outcome {
        let tokens = tokenize(input);
        let Some((verb, args)) = tokens.split_first() else {
            return Outcome::Silent;
        };

        let mut diagnostics = vec!["The system does not know what you mean by that.".to_string()];

        for command in &self.commands {
            if !command.matches_verb(verb) {
                continue;
            }

            // Independent, restartable candidate sequences per record.
            let candidates = Candidates::gather(args, world, viewpoint);
            let mut cursors = Cursors::default();
            let mut bound = Vec::with_capacity(command.slots().len());
            let mut failed = false;

            for slot in command.slots() {
                let next = match slot.kind {
                    ArgKind::Direction => cursors.next_direction(&candidates).map(Arg::Direction),
                    ArgKind::Entity => cursors.next_entity(&candidates).map(Arg::Entity),
                    ArgKind::Inventory => cursors.next_inventory(&candidates).map(Arg::Inventory),
                    ArgKind::Loot => cursors
                        .next_loot(&candidates)
                        .map(|(holder, index)| Arg::Loot(holder, index)),
                };
                match next {
                    Some(arg) => bound.push(arg),
                    None if slot.optional => break,
                    None => {
                        diagnostics.push(format!(
                            "The command '{verb}' is missing some details regarding {}.",
                            slot.kind.describe()
                        ));
                        diagnostics.push(
                            "It could be simply missing but it could also be invalid.".to_string(),
                        );
                        failed = true;
                        break;
                    }
                }
            }

            if !failed {
                return Outcome::Invoke(Invocation {
                    action: command.action(),
                    args: bound,
                });
            }
        }

        let mut lines = vec!["The system has trouble interpreting your command.".to_string()];
        lines.append(&mut diagnostics);
        Outcome::Failure(lines)
    }
}
