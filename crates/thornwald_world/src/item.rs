//! Items and the two item-matching modes.
//!
//! Items are value objects: they have no owner until some entity's contents
//! list holds them, and two items with the same name are interchangeable
//! for trade purposes. Weapons additionally carry a damage value consumed
//! by attack resolution.

/// What an item is beyond its name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ItemKind {
    /// An ordinary tradeable good (fruit, coins, loot).
    Goods,
    /// A weapon with a flat damage value.
    Weapon {
        /// Damage dealt when this weapon is used in an attack.
        damage: i32,
    },
}

/// A named, ownerless-until-held value object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    /// Display and matching name.
    pub name: String,
    /// Plain goods or weapon.
    pub kind: ItemKind,
}

impl Item {
    /// Creates an ordinary item.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ItemKind::Goods,
        }
    }

    /// Creates a weapon with the given damage value.
    #[must_use]
    pub fn weapon(name: impl Into<String>, damage: i32) -> Self {
        Self {
            name: name.into(),
            kind: ItemKind::Weapon { damage },
        }
    }

    /// Returns the weapon damage, if this item is a weapon.
    #[must_use]
    pub const fn damage(&self) -> Option<i32> {
        match self.kind {
            ItemKind::Weapon { damage } => Some(damage),
            ItemKind::Goods => None,
        }
    }
}

/// How item lookups by name behave during trade.
///
/// The source system this game descends from had an equality operator that
/// renamed the left operand to the right operand's name and returned a
/// falsy non-answer, so every by-name lookup failed while silently renaming
/// whatever it touched. Whether that was intended is unknowable, so both
/// readings are first-class modes rather than one being quietly chosen.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ItemMatching {
    /// Plain name equality (the presumed intent).
    #[default]
    ByName,
    /// Comparison renames the probe to the candidate's name and never
    /// matches, so every coin-gated trade fails.
    RenameOnCompare,
}

/// Finds the first item in `items` whose name matches `probe` under the
/// given mode.
///
/// Under [`ItemMatching::RenameOnCompare`] each comparison rewrites the
/// probe's name to the candidate's and reports no match, so the scan always
/// comes back empty; the probe is left renamed to the last candidate
/// examined.
#[must_use]
pub fn find_named(items: &[Item], probe: &mut Item, mode: ItemMatching) -> Option<usize> {
    for (index, candidate) in items.iter().enumerate() {
        match mode {
            ItemMatching::ByName => {
                if probe.name == candidate.name {
                    return Some(index);
                }
            }
            ItemMatching::RenameOnCompare => {
                probe.name = candidate.name.clone();
            }
        }
    }
    None
}
