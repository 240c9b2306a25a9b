//! Attack resolution and per-turn creature behavior.
//!
//! Damage is coarse: a qualifying resolution roll moves the target exactly
//! one health level down, a failing one is narrated as a miss. Defence is
//! subtracted from incoming damage unconditionally, even when the attack is
//! announced as ineffective, so over-defended targets roll against a
//! negative damage value that can never beat a non-negative roll. That
//! arithmetic is inherited behavior and is kept as is.

use rand::Rng;

use thornwald_world::{EntityId, HealthLevel, Item, World, phrase};

use crate::transcript::Transcript;

/// Damage dealt by bare hands or a non-weapon item.
pub const BASE_DAMAGE: i32 = 10;

/// Chance denominator for passive regeneration each world phase.
pub const REGEN_CHANCE: u32 = 200;

const MISS_FLAVORS: [&str; 6] = [
    "The attack missed",
    "The attack was evaded",
    "The attack was parried",
    "The attack was blocked",
    "The attack was caught",
    "The attack only gazes",
];

/// Whether a damage value beats a resolution roll.
#[must_use]
pub fn damage_lands(damage: i32, roll: u32) -> bool {
    i64::from(damage) >= i64::from(roll)
}

/// The player attacks `target`, optionally with an inventory item.
///
/// Non-creature targets are simply marked broken. A dead creature
/// short-circuits with a flavor line; anything else takes weapon or base
/// damage less defence and rolls.
pub fn attack<R: Rng>(
    world: &mut World,
    transcript: &mut Transcript,
    rng: &mut R,
    target: EntityId,
    weapon: Option<&Item>,
) {
    let described = phrase::describe_entity(world.entity(target), Some("the"));
    transcript.say(format!("You attack {described}."));

    let summary = world
        .entity(target)
        .as_creature()
        .map(|c| (c.vitals.level, c.vitals.defence));
    let Some((level, defence)) = summary else {
        world.entity_mut(target).broken = true;
        return;
    };

    if level == HealthLevel::Dead {
        transcript.say("He's dead Jim.");
        return;
    }

    let mut damage = weapon.and_then(Item::damage).unwrap_or(BASE_DAMAGE);
    if damage <= defence {
        transcript.say(format!("You attack {described} but it doesn't seem to work."));
    }
    damage -= defence;
    deal_damage(world, transcript, rng, target, damage);
}

/// Rolls damage resolution against `target` and applies the outcome.
///
/// Either outcome latches the target's aggression.
pub fn deal_damage<R: Rng>(
    world: &mut World,
    transcript: &mut Transcript,
    rng: &mut R,
    target: EntityId,
    damage: i32,
) {
    let Some(scale) = world
        .entity(target)
        .as_creature()
        .map(|c| c.vitals.health_scale)
    else {
        return;
    };
    let roll = if scale == 0 { 0 } else { rng.gen_range(0..scale) };
    let landed = damage_lands(damage, roll);

    if let Some(creature) = world.entity_mut(target).as_creature_mut() {
        if landed {
            creature.vitals.level = creature.vitals.level.damaged();
        }
        creature.vitals.aggressive = true;
    }

    if landed {
        let adjective = world
            .entity(target)
            .as_creature()
            .map_or("", |c| c.vitals.level.adjective());
        let described = phrase::describe_entity(world.entity(target), Some("the"));
        transcript.say("The attack works");
        transcript.say(format!("{described} is now {adjective}."));
    } else {
        let flavor = MISS_FLAVORS[rng.gen_range(0..MISS_FLAVORS.len())];
        transcript.say(flavor);
    }
}

/// One world-phase step for a non-player entity.
///
/// Creatures have a small chance to regenerate one level (within the
/// wounded band), and conscious aggressive ones strike the player with
/// their strength. Everything else does nothing.
pub fn free_action<R: Rng>(
    world: &mut World,
    transcript: &mut Transcript,
    rng: &mut R,
    id: EntityId,
) {
    if id == world.player() {
        player_free_action(world, rng);
        return;
    }
    if world.entity(id).as_creature().is_none() {
        return;
    }

    let regenerates = {
        let creature = world.entity(id).as_creature().expect("checked above");
        creature.vitals.level.can_regenerate() && rng.gen_range(0..REGEN_CHANCE) == 0
    };
    if regenerates {
        if let Some(creature) = world.entity_mut(id).as_creature_mut() {
            creature.vitals.level = creature.vitals.level.regenerated();
        }
    }

    let (active, aggressive, strength) = {
        let creature = world.entity(id).as_creature().expect("checked above");
        (
            creature.vitals.level.is_active(),
            creature.vitals.aggressive,
            creature.vitals.strength,
        )
    };
    if active && aggressive {
        let described = phrase::describe_entity(world.entity(id), None);
        transcript.say(format!("You are attacked by {described}."));
        let player = world.player();
        deal_damage(world, transcript, rng, player, strength);
    }
}

/// The player's own world-phase step: passive regeneration only, never a
/// self-inflicted strike.
pub fn player_free_action<R: Rng>(world: &mut World, rng: &mut R) {
    let vitals = &mut world.player_creature_mut().vitals;
    if vitals.level.can_regenerate() && rng.gen_range(0..REGEN_CHANCE) == 0 {
        vitals.level = vitals.level.regenerated();
    }
}
