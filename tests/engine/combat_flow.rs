//! Combat scenarios: the full health ladder, misses, and weapons.

use rand::rngs::mock::StepRng;

use thornwald::engine::Game;
use thornwald::parser::{Interpreter, default_commands};
use thornwald::world::{
    Entity, EntityId, Grid, HealthLevel, Item, Role, Tile, TileId, Vitals, World,
};

fn game_with(entities: Vec<Entity>) -> (Game, Vec<EntityId>) {
    let grid = Grid::new(1, vec![Tile::new("a clearing")]);
    let player = Entity::creature("player", Role::Player, Vitals::new(100, 10));
    let mut world = World::new(grid, player);
    let ids = entities
        .into_iter()
        .map(|e| world.spawn_on_tile(TileId::new(0, 0), e))
        .collect();
    let game = Game::new(
        world,
        TileId::new(0, 0),
        Interpreter::new(default_commands().unwrap()),
    );
    (game, ids)
}

fn zero_rng() -> StepRng {
    StepRng::new(0, 0)
}

fn level(game: &Game, id: EntityId) -> HealthLevel {
    game.world().entity(id).as_creature().unwrap().vitals.level
}

#[test]
fn repeated_attacks_walk_the_health_ladder_down() {
    // Health scale 1 forces every resolution roll to zero.
    let (mut game, ids) = game_with(vec![Entity::creature(
        "goblin",
        Role::Monster,
        Vitals::new(1, 4),
    )]);
    let goblin = ids[0];
    game.drain_output();

    let expected = [
        HealthLevel::Wounded,
        HealthLevel::Unconscious,
        HealthLevel::Dead,
    ];
    for want in expected {
        game.handle_line("hit goblin", &mut zero_rng());
        assert_eq!(level(&game, goblin), want);
        assert!(game.turn_over());
        game.world_phase(&mut StepRng::new(u64::MAX, 0));
    }

    let lines: Vec<String> = game
        .drain_output()
        .into_iter()
        .filter_map(|n| match n {
            thornwald::engine::Note::Text(s) => Some(s),
            thornwald::engine::Note::ClearScreen => None,
        })
        .collect();
    assert!(lines.iter().any(|l| l.contains("is now wounded")));
    assert!(lines.iter().any(|l| l.contains("is now unconscious")));
    assert!(lines.iter().any(|l| l.contains("is now dead")));
}

#[test]
fn attacking_a_corpse_is_called_out() {
    let (mut game, ids) = game_with(vec![Entity::creature(
        "goblin",
        Role::Monster,
        Vitals::new(1, 4),
    )]);
    let goblin = ids[0];
    game.world_mut()
        .entity_mut(goblin)
        .as_creature_mut()
        .unwrap()
        .vitals
        .level = HealthLevel::Dead;
    game.drain_output();

    game.handle_line("hit goblin", &mut zero_rng());
    assert_eq!(
        game.transcript().lines(),
        vec!["You attack the dead goblin.", "He's dead Jim."]
    );
    assert_eq!(level(&game, goblin), HealthLevel::Dead);
}

#[test]
fn a_weapon_beats_armor_base_damage_cannot() {
    let mut armored = Vitals::new(1, 4);
    armored.defence = 12;
    let (mut game, ids) = game_with(vec![Entity::creature("goblin", Role::Monster, armored)]);
    let goblin = ids[0];
    let player = game.world().player();
    game.world_mut().give_item(player, Item::weapon("axe", 15));
    game.drain_output();

    // Base damage 10 is swallowed by defence 12.
    game.handle_line("hit goblin", &mut zero_rng());
    assert_eq!(level(&game, goblin), HealthLevel::Healthy);
    assert!(
        game.drain_output().iter().any(|n| matches!(
            n,
            thornwald::engine::Note::Text(l) if l.contains("doesn't seem to work")
        ))
    );

    // The axe leaves 3 damage, which beats the zero roll.
    game.handle_line("hit goblin with axe", &mut zero_rng());
    assert_eq!(level(&game, goblin), HealthLevel::Wounded);
}

#[test]
fn attacked_scenery_breaks_and_reads_damaged() {
    let (mut game, ids) = game_with(vec![Entity::new(
        "statue",
        thornwald::world::EntityKind::Scenery,
    )]);
    let statue = ids[0];
    game.drain_output();

    game.handle_line("hit statue", &mut zero_rng());
    assert!(game.world().entity(statue).broken);

    game.handle_line("look", &mut zero_rng());
    assert!(
        game.transcript()
            .lines()
            .iter()
            .any(|l| l.contains("a damaged statue"))
    );
}

#[test]
fn aggressive_monsters_strike_back_in_the_world_phase() {
    let mut vitals = Vitals::new(20, 4);
    vitals.aggressive = true;
    let (mut game, _) = game_with(vec![Entity::creature("goblin", Role::Monster, vitals)]);
    game.drain_output();

    game.world_phase(&mut zero_rng());
    let lines = game.transcript().lines();
    assert!(lines.iter().any(|l| l.starts_with("You are attacked by")));
    // Strength 4 beats the zero roll, so the player is marked down.
    assert_eq!(
        game.world().player_creature().vitals.level,
        HealthLevel::Wounded
    );
}
