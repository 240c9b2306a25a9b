//! Command records: verbs, argument slots, and actions.
//!
//! A command is a registered triple of verb synonyms, an ordered argument
//! slot specification, and the action to dispatch. The slot specification
//! uses the compact string form `"e!i"`: one character per slot, with `!`
//! marking every following slot optional.

use thiserror::Error;

/// The kind of value an argument slot resolves to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ArgKind {
    /// A cardinal travel direction (`d`).
    Direction,
    /// An entity at the active viewpoint, or the player (`e`).
    Entity,
    /// An item in the player's inventory (`i`).
    Inventory,
    /// An item inside some content-bearing entity at the viewpoint (`l`).
    Loot,
}

impl ArgKind {
    /// Human-readable kind name used in missing-argument diagnostics.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Direction => "direction",
            Self::Entity => "target entity",
            Self::Inventory => "target item (inventory)",
            Self::Loot => "target item (in world)",
        }
    }
}

/// One argument slot of a command.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Slot {
    /// What the slot binds.
    pub kind: ArgKind,
    /// Whether binding may stop here when candidates run out.
    pub optional: bool,
}

/// A malformed slot specification string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpecError {
    /// A character that is not a slot kind or the optional marker.
    #[error("unknown slot character {0:?} in argument specification")]
    UnknownSlot(char),
}

/// Parses a compact slot specification such as `"e!i"`.
///
/// `!` is a marker, not a slot: every slot after it is optional.
///
/// # Errors
///
/// Returns [`SpecError::UnknownSlot`] for any unrecognized character.
pub fn parse_slots(spec: &str) -> Result<Vec<Slot>, SpecError> {
    let mut slots = Vec::new();
    let mut optional = false;
    for c in spec.chars() {
        let kind = match c {
            '!' => {
                optional = true;
                continue;
            }
            'd' => ArgKind::Direction,
            'e' => ArgKind::Entity,
            'i' => ArgKind::Inventory,
            'l' => ArgKind::Loot,
            other => return Err(SpecError::UnknownSlot(other)),
        };
        slots.push(Slot { kind, optional });
    }
    Ok(slots)
}

/// What a successfully interpreted command asks the engine to do.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Move the current tile one step.
    Travel,
    /// Clear the display and look around.
    Clear,
    /// Enter a building.
    Enter,
    /// Leave the innermost entered building.
    Exit,
    /// Empty a container into the inventory.
    LootAll,
    /// Take one named item from a container.
    LootOne,
    /// Attack an entity, optionally with an inventory weapon.
    Attack,
    /// Inspect an entity.
    Inspect,
    /// Describe the current viewpoint.
    Look,
    /// Buy an item from a shopkeeper's stock.
    Buy,
    /// Sell an inventory item to a shopkeeper.
    Sell,
}

/// A registered command record.
#[derive(Clone, Debug)]
pub struct CommandSpec {
    verbs: Vec<String>,
    slots: Vec<Slot>,
    action: Action,
}

impl CommandSpec {
    /// Creates a record from a `|`-separated synonym string and a compact
    /// slot specification.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError`] when the slot specification is malformed.
    pub fn new(verbs: &str, slots: &str, action: Action) -> Result<Self, SpecError> {
        Ok(Self {
            verbs: verbs.split('|').map(String::from).collect(),
            slots: parse_slots(slots)?,
            action,
        })
    }

    /// Whether a token matches one of this record's verbs.
    #[must_use]
    pub fn matches_verb(&self, token: &str) -> bool {
        self.verbs.iter().any(|v| v == token)
    }

    /// The primary verb, used in diagnostics.
    #[must_use]
    pub fn primary_verb(&self) -> &str {
        self.verbs.first().map_or("", String::as_str)
    }

    /// The ordered argument slots.
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// The dispatched action.
    #[must_use]
    pub const fn action(&self) -> Action {
        self.action
    }
}
