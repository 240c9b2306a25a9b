//! Entities and the closed set of capability variants.
//!
//! Every world object is exactly one [`EntityKind`]: inert scenery, a
//! lootable container, an enterable building with its own interior entity
//! list, or a creature (player, monster, or shopkeeper). Capability checks
//! are pattern matches over this closed tag, never open-ended type
//! inspection.

use std::fmt;

use crate::health::HealthLevel;
use crate::item::Item;

/// Index into the world's entity arena.
///
/// Entities are never destroyed, only detached from location lists, so a
/// plain index with no generation counter is sufficient.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct EntityId(pub u32);

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityId({})", self.0)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// Which part a creature plays in the simulation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Role {
    /// The player; detached from every location list, always the "you"
    /// referent.
    Player,
    /// A hostile wanderer with fixed stats from generation.
    Monster,
    /// A merchant exposing coin-gated buy and sell.
    Shopkeeper,
}

/// Combat-relevant numbers shared by every creature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vitals {
    /// Coarse health level, starts at [`HealthLevel::Healthy`].
    pub level: HealthLevel,
    /// Upper bound of the damage-resolution roll.
    pub health_scale: u32,
    /// Damage dealt to others by this creature's own strikes.
    pub strength: i32,
    /// Flat damage reduction applied before the resolution roll.
    pub defence: i32,
    /// Whether this creature retaliates during the world phase.
    pub aggressive: bool,
}

impl Vitals {
    /// Creates healthy vitals with the given scale and strength.
    #[must_use]
    pub const fn new(health_scale: u32, strength: i32) -> Self {
        Self {
            level: HealthLevel::Healthy,
            health_scale,
            strength,
            defence: 0,
            aggressive: false,
        }
    }
}

/// A creature: a container with health, strength, and a temperament.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Creature {
    /// Player, monster, or shopkeeper.
    pub role: Role,
    /// Combat numbers.
    pub vitals: Vitals,
    /// Carried items, lootable once the creature is subdued.
    pub contents: Vec<Item>,
}

/// The closed capability set. An entity is exactly one of these.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntityKind {
    /// Describable and attackable only.
    Scenery,
    /// Additionally holds loot.
    Container {
        /// Items inside.
        contents: Vec<Item>,
    },
    /// An enterable interior with its own entity list.
    Building {
        /// Name announced when standing inside.
        inside_name: String,
        /// Entities inside the building.
        occupants: Vec<EntityId>,
    },
    /// A combat-capable container.
    Creature(Creature),
}

/// Anything presentable and interactable in a location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entity {
    /// Full display name.
    pub name: String,
    /// Last word of the name, used for command matching.
    pub tag: String,
    /// Cosmetic damage flag set by attacking non-creatures.
    pub broken: bool,
    /// Capability variant.
    pub kind: EntityKind,
}

impl Entity {
    /// Creates an entity, deriving the matching tag from the name's last
    /// word.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: EntityKind) -> Self {
        let name = name.into();
        let tag = name.rsplit(' ').next().unwrap_or(&name).to_string();
        Self {
            name,
            tag,
            broken: false,
            kind,
        }
    }

    /// Creates a lootable container holding the given items.
    #[must_use]
    pub fn container(name: impl Into<String>, contents: Vec<Item>) -> Self {
        Self::new(name, EntityKind::Container { contents })
    }

    /// Creates an empty building whose interior announces `inside_name`.
    #[must_use]
    pub fn building(name: impl Into<String>, inside_name: impl Into<String>) -> Self {
        Self::new(
            name,
            EntityKind::Building {
                inside_name: inside_name.into(),
                occupants: Vec::new(),
            },
        )
    }

    /// Creates a creature with the given role and vitals.
    #[must_use]
    pub fn creature(name: impl Into<String>, role: Role, vitals: Vitals) -> Self {
        Self::new(
            name,
            EntityKind::Creature(Creature {
                role,
                vitals,
                contents: Vec::new(),
            }),
        )
    }

    /// Returns the creature data, if this entity is one.
    #[must_use]
    pub const fn as_creature(&self) -> Option<&Creature> {
        match &self.kind {
            EntityKind::Creature(c) => Some(c),
            _ => None,
        }
    }

    /// Mutable creature access.
    pub fn as_creature_mut(&mut self) -> Option<&mut Creature> {
        match &mut self.kind {
            EntityKind::Creature(c) => Some(c),
            _ => None,
        }
    }

    /// Carried or contained items, for any content-bearing variant.
    #[must_use]
    pub fn contents(&self) -> Option<&[Item]> {
        match &self.kind {
            EntityKind::Container { contents } => Some(contents),
            EntityKind::Creature(c) => Some(&c.contents),
            _ => None,
        }
    }

    /// Mutable access to carried or contained items.
    pub fn contents_mut(&mut self) -> Option<&mut Vec<Item>> {
        match &mut self.kind {
            EntityKind::Container { contents } => Some(contents),
            EntityKind::Creature(c) => Some(&mut c.contents),
            _ => None,
        }
    }

    /// Display/iteration ordering key; creatures use the health table,
    /// everything else sorts at zero.
    #[must_use]
    pub fn priority(&self) -> i32 {
        match &self.kind {
            EntityKind::Creature(c) => c.vitals.level.priority(),
            _ => 0,
        }
    }
}
