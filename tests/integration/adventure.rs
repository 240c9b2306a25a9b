//! Scripted playthroughs exercising the whole stack at once.

use rand::SeedableRng;
use rand::rngs::mock::StepRng;
use rand_chacha::ChaCha8Rng;

use thornwald::engine::{Game, Note};
use thornwald::parser::{Interpreter, default_commands};
use thornwald::runtime::{Console, ReadResult, Result as RuntimeResult, Session};
use thornwald::world::{
    Entity, EntityId, GameData, Grid, HealthLevel, Item, Role, Tile, TileId, Vitals, World,
    generate,
};

fn interpreter() -> Interpreter {
    Interpreter::new(default_commands().unwrap())
}

fn text_lines(notes: Vec<Note>) -> Vec<String> {
    notes
        .into_iter()
        .filter_map(|note| match note {
            Note::Text(line) => Some(line),
            Note::ClearScreen => None,
        })
        .collect()
}

/// A one-tile world around the given extra entities.
fn hamlet(entities: Vec<Entity>) -> (Game, Vec<EntityId>) {
    let grid = Grid::new(1, vec![Tile::new("a clearing")]);
    let player = Entity::creature("player", Role::Player, Vitals::new(100, 10));
    let mut world = World::new(grid, player);
    let ids = entities
        .into_iter()
        .map(|e| world.spawn_on_tile(TileId::new(0, 0), e))
        .collect();
    let mut game = Game::new(world, TileId::new(0, 0), interpreter());
    game.drain_output();
    (game, ids)
}

#[test]
fn a_walk_around_the_torus_comes_home() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let generated = generate(&GameData::builtin(), 4, &mut rng).unwrap();
    let start = generated.start;
    let mut game = Game::new(generated.world, start, interpreter());
    game.drain_output();

    for _ in 0..4 {
        game.handle_line("go north", &mut rng);
        let lines = text_lines(game.drain_output());
        assert!(lines[0].starts_with("You are in "));
    }
    assert_eq!(game.current_tile(), start);
}

#[test]
fn a_goblin_hunt_from_first_blow_to_loot() {
    let (mut game, ids) = hamlet(vec![Entity::creature(
        "goblin",
        Role::Monster,
        Vitals::new(1, 4),
    )]);
    let goblin = ids[0];
    game.world_mut()
        .entity_mut(goblin)
        .contents_mut()
        .unwrap()
        .push(Item::new("coin"));

    // Health scale 1 keeps every resolution roll at zero, so each blow
    // lands; the large world-phase rolls keep the goblin from recovering.
    for _ in 0..3 {
        game.handle_line("hit goblin", &mut StepRng::new(0, 0));
        game.world_phase(&mut StepRng::new(u64::MAX, 0));
    }
    let level = game.world().entity(goblin).as_creature().unwrap().vitals.level;
    assert_eq!(level, HealthLevel::Dead);

    let lines = text_lines(game.drain_output());
    assert!(lines.iter().any(|l| l.contains("is now dead")));

    game.handle_line("loot goblin", &mut StepRng::new(0, 0));
    let lines = text_lines(game.drain_output());
    assert_eq!(lines, vec!["You empty the dead goblin. You gain a coin."]);
    assert_eq!(game.world().inventory().len(), 1);
}

#[test]
fn a_shop_visit_through_the_door() {
    let (mut game, ids) = hamlet(vec![Entity::building("shop", "shop")]);
    let shop = ids[0];
    let merchant = game.world_mut().spawn_inside(
        shop,
        Entity::creature("merchant", Role::Shopkeeper, Vitals::new(100, 10)),
    );
    *game.world_mut().entity_mut(merchant).contents_mut().unwrap() =
        vec![Item::new("apple")];
    let player = game.world().player();
    game.world_mut().give_item(player, Item::new("coin"));
    let mut rng = StepRng::new(0, 0);

    game.handle_line("enter shop", &mut rng);
    let lines = text_lines(game.drain_output());
    assert_eq!(lines[0], "You are in a shop.");

    game.handle_line("go north", &mut rng);
    let lines = text_lines(game.drain_output());
    assert_eq!(lines, vec!["You cannot travel while inside."]);

    game.handle_line("buy apple", &mut rng);
    let lines = text_lines(game.drain_output());
    assert_eq!(lines, vec!["Transaction completed"]);
    assert_eq!(game.world().inventory()[0].name, "apple");

    game.handle_line("exit", &mut rng);
    game.handle_line("go north", &mut rng);
    let lines = text_lines(game.drain_output());
    assert!(lines.iter().any(|l| l.starts_with("You are in ")));
}

#[test]
fn gibberish_walks_the_failure_ladder() {
    let (mut game, _) = hamlet(Vec::new());
    let mut rng = StepRng::new(0, 0);

    game.handle_line("dance", &mut rng);
    let lines = text_lines(game.drain_output());
    assert_eq!(
        lines,
        vec![
            "The system has trouble interpreting your command.",
            "The system does not know what you mean by that.",
        ]
    );

    game.handle_line("go", &mut rng);
    let lines = text_lines(game.drain_output());
    assert_eq!(
        lines,
        vec![
            "The system has trouble interpreting your command.",
            "The system does not know what you mean by that.",
            "The command 'go' is missing some details regarding direction.",
            "It could be simply missing but it could also be invalid.",
        ]
    );
}

struct Script {
    lines: Vec<String>,
    index: usize,
}

impl Script {
    fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(ToString::to_string).collect(),
            index: 0,
        }
    }
}

impl Console for Script {
    fn read_line(&mut self, _prompt: &str) -> RuntimeResult<ReadResult> {
        if self.index < self.lines.len() {
            let line = self.lines[self.index].clone();
            self.index += 1;
            Ok(ReadResult::Line(line))
        } else {
            Ok(ReadResult::Eof)
        }
    }
}

#[test]
fn a_scripted_session_runs_a_generated_world_to_script_end() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let generated = generate(&GameData::builtin(), 8, &mut rng).unwrap();
    let start = generated.start;
    let game = Game::new(generated.world, start, interpreter());

    let script = Script::new(&["look", "go north", "go east", "go south", "go west"]);
    let mut session = Session::with_console(script, game, rng);
    session.run().unwrap();
    // Two opposed pairs of moves cancel out on the torus.
    assert_eq!(session.game().current_tile(), start);
}
