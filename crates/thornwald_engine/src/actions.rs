//! Looting and inspection.
//!
//! These are the handler bodies that move items and disclose state; the
//! dispatch deciding which runs for a given invocation lives in
//! [`crate::game`].

use thornwald_world::{EntityId, EntityKind, World, phrase};

use crate::transcript::Transcript;

/// Whether a loot attempt may proceed against this entity right now.
enum LootGate {
    /// Plain containers, and subdued creatures, give up their contents.
    Open,
    /// Conscious creatures refuse and turn hostile.
    Refused,
    /// Scenery and buildings hold nothing lootable.
    NotLootable,
}

fn loot_gate(world: &World, target: EntityId) -> LootGate {
    match &world.entity(target).kind {
        EntityKind::Container { .. } => LootGate::Open,
        EntityKind::Creature(c) if c.vitals.level.is_active() => LootGate::Refused,
        EntityKind::Creature(_) => LootGate::Open,
        _ => LootGate::NotLootable,
    }
}

fn refuse(world: &mut World, transcript: &mut Transcript, target: EntityId) {
    let described = phrase::describe_entity(world.entity(target), Some("the"));
    transcript.say(format!("You fail to empty the pockets of {described}."));
    if let Some(creature) = world.entity_mut(target).as_creature_mut() {
        creature.vitals.aggressive = true;
    }
}

/// Empties the target into the player's inventory.
///
/// Looting an already-empty container still announces the (empty) haul and
/// leaves it empty.
pub fn loot_all(world: &mut World, transcript: &mut Transcript, target: EntityId) {
    match loot_gate(world, target) {
        LootGate::NotLootable => {
            transcript.say("You cannot loot this object");
            return;
        }
        LootGate::Refused => {
            refuse(world, transcript, target);
            return;
        }
        LootGate::Open => {}
    }

    let described = phrase::describe_entity(world.entity(target), Some("the"));
    let haul = world.drain_items(target);
    let gained = phrase::tell_list(haul.iter().map(|i| phrase::describe_item(i, None)));
    transcript.say(format!("You empty {described}. You gain {gained}."));
    let player = world.player();
    for item in haul {
        world.give_item(player, item);
    }
}

/// Takes the single item at `index` of the target's contents.
pub fn loot_one(world: &mut World, transcript: &mut Transcript, target: EntityId, index: usize) {
    match loot_gate(world, target) {
        LootGate::NotLootable => {
            transcript.say("You cannot loot this object");
            return;
        }
        LootGate::Refused => {
            refuse(world, transcript, target);
            return;
        }
        LootGate::Open => {}
    }

    let Some(item) = world.remove_item(target, index) else {
        return;
    };
    let described = phrase::describe_entity(world.entity(target), Some("the"));
    let piece = phrase::describe_item(&item, None);
    transcript.say(format!("You get {piece} from {described}."));
    let player = world.player();
    world.give_item(player, item);
}

/// Discloses an entity's description; content-bearing variants disclose
/// their contents as well. Inspection never mutates state.
pub fn inspect(world: &World, transcript: &mut Transcript, target: EntityId) {
    let entity = world.entity(target);
    let described = phrase::describe_entity(entity, None);
    match &entity.kind {
        EntityKind::Container { contents } => {
            if contents.is_empty() {
                transcript.say(format!("This is {described}. It is empty."));
            } else {
                let held = phrase::contents_phrase(contents);
                transcript.say(format!("This is {described}. It contains {held}."));
            }
        }
        // Creatures disclose what they carry regardless of consciousness.
        EntityKind::Creature(c) => {
            let held = phrase::contents_phrase(&c.contents);
            transcript.say(format!("This is {described}. It is carrying {held}."));
        }
        EntityKind::Scenery | EntityKind::Building { .. } => {
            transcript.say(format!("This is {described}."));
        }
    }
}
