//! The default command table.
//!
//! Built once at startup and handed to the interpreter by value; there is
//! no global registry. The table is ordered, and that order is load-bearing:
//! commands sharing a verb are tried in registration order, so the
//! entity-targeting `loot` is attempted before the item-targeting one.

use crate::command::{Action, CommandSpec, SpecError};

/// Builds the standard ordered command table.
///
/// # Errors
///
/// Returns [`SpecError`] if any built-in slot specification is malformed;
/// with the table below that cannot happen, but the constructor contract
/// is shared with any caller assembling its own table.
pub fn default_commands() -> Result<Vec<CommandSpec>, SpecError> {
    Ok(vec![
        CommandSpec::new("go|walk|run|travel", "d", Action::Travel)?,
        CommandSpec::new("clear|reset", "", Action::Clear)?,
        CommandSpec::new("enter", "e", Action::Enter)?,
        CommandSpec::new("exit", "", Action::Exit)?,
        CommandSpec::new("loot|pick|get|empty", "e", Action::LootAll)?,
        CommandSpec::new("loot|pick|get", "l", Action::LootOne)?,
        CommandSpec::new("hit|attack|kill|stab|swing|trust|chop|bash", "e!i", Action::Attack)?,
        CommandSpec::new("inspect|study|analyse", "e", Action::Inspect)?,
        CommandSpec::new("look|where", "", Action::Look)?,
        CommandSpec::new("buy|trade", "l", Action::Buy)?,
        CommandSpec::new("sell", "ei", Action::Sell)?,
    ])
}
