//! Looting and shop trade driven through full command lines.

use rand::rngs::mock::StepRng;

use thornwald::engine::Game;
use thornwald::parser::{Interpreter, default_commands};
use thornwald::world::{Entity, EntityId, Grid, Item, Role, Tile, TileId, Vitals, World};

/// A clearing holding an appletree, a goblin, and a shop whose merchant
/// stocks `stock`.
fn market(stock: Vec<Item>) -> (Game, EntityId, EntityId) {
    let grid = Grid::new(1, vec![Tile::new("a clearing")]);
    let player = Entity::creature("player", Role::Player, Vitals::new(100, 10));
    let mut world = World::new(grid, player);
    let tile = TileId::new(0, 0);
    world.spawn_on_tile(tile, Entity::container("appletree", vec![Item::new("apple")]));
    let goblin = world.spawn_on_tile(
        tile,
        Entity::creature("goblin", Role::Monster, Vitals::new(20, 4)),
    );
    let shop = world.spawn_on_tile(tile, Entity::building("shop", "shop"));
    let merchant = world.spawn_inside(
        shop,
        Entity::creature("merchant", Role::Shopkeeper, Vitals::new(100, 10)),
    );
    *world.entity_mut(merchant).contents_mut().unwrap() = stock;
    let mut game = Game::new(
        world,
        tile,
        Interpreter::new(default_commands().unwrap()),
    );
    game.drain_output();
    (game, goblin, merchant)
}

fn rng() -> StepRng {
    StepRng::new(0, 0)
}

fn inventory_names(game: &Game) -> Vec<&str> {
    game.world().inventory().iter().map(|i| i.name.as_str()).collect()
}

fn stock_names(game: &Game, merchant: EntityId) -> Vec<&str> {
    game.world()
        .entity(merchant)
        .contents()
        .unwrap()
        .iter()
        .map(|i| i.name.as_str())
        .collect()
}

#[test]
fn looting_a_tree_yields_its_fruit() {
    let (mut game, _, _) = market(Vec::new());
    game.handle_line("loot appletree", &mut rng());
    assert_eq!(inventory_names(&game), vec!["apple"]);
    assert!(game.turn_over());
    assert_eq!(
        game.transcript().lines(),
        vec!["You empty the appletree. You gain an apple."]
    );
}

#[test]
fn picking_a_single_apple_also_works() {
    let (mut game, _, _) = market(Vec::new());
    game.handle_line("get apple", &mut rng());
    assert_eq!(inventory_names(&game), vec!["apple"]);
    assert_eq!(
        game.transcript().lines(),
        vec!["You get an apple from the appletree."]
    );
}

#[test]
fn looting_a_conscious_goblin_turns_it_hostile() {
    let (mut game, goblin, _) = market(Vec::new());
    game.world_mut()
        .entity_mut(goblin)
        .contents_mut()
        .unwrap()
        .push(Item::new("coin"));
    game.handle_line("loot goblin", &mut rng());
    assert!(inventory_names(&game).is_empty());
    let creature = game.world().entity(goblin).as_creature().unwrap();
    assert_eq!(creature.contents.len(), 1);
    assert!(creature.vitals.aggressive);
    assert_eq!(
        game.transcript().lines(),
        vec!["You fail to empty the pockets of the goblin."]
    );
}

#[test]
fn buying_without_a_coin_changes_nothing() {
    let (mut game, _, merchant) = market(vec![Item::new("apple")]);
    game.handle_line("enter shop", &mut rng());
    game.drain_output();
    game.handle_line("buy apple", &mut rng());
    assert!(inventory_names(&game).is_empty());
    assert_eq!(stock_names(&game, merchant), vec!["apple"]);
    assert_eq!(game.transcript().lines(), vec!["No coin availiable"]);
}

#[test]
fn a_coin_buys_an_apple() {
    let (mut game, _, merchant) = market(vec![Item::new("apple")]);
    let player = game.world().player();
    game.world_mut().give_item(player, Item::new("coin"));
    game.handle_line("enter shop", &mut rng());
    game.drain_output();
    game.handle_line("buy apple", &mut rng());
    assert_eq!(inventory_names(&game), vec!["apple"]);
    assert_eq!(stock_names(&game, merchant), vec!["coin"]);
    assert_eq!(game.transcript().lines(), vec!["Transaction completed"]);
}

#[test]
fn selling_then_buying_back_restores_the_inventory() {
    let (mut game, _, merchant) = market(vec![Item::new("coin")]);
    let player = game.world().player();
    game.world_mut().give_item(player, Item::new("pear"));
    game.handle_line("enter shop", &mut rng());
    game.drain_output();

    game.handle_line("sell pear merchant", &mut rng());
    assert_eq!(inventory_names(&game), vec!["coin"]);
    assert_eq!(stock_names(&game, merchant), vec!["pear"]);

    game.handle_line("buy pear", &mut rng());
    assert_eq!(inventory_names(&game), vec!["pear"]);
    assert_eq!(stock_names(&game, merchant), vec!["coin"]);
    assert_eq!(
        game.transcript().lines(),
        vec!["Transaction completed", "Transaction completed"]
    );
}

#[test]
fn buying_from_outside_the_shop_finds_no_stock() {
    // The merchant is out of scope from the open tile, so once the
    // appletree is bare the item resolver has nothing to bind and the
    // parser reports the gap.
    let (mut game, _, _) = market(vec![Item::new("apple")]);
    let player = game.world().player();
    game.world_mut().give_item(player, Item::new("coin"));
    game.handle_line("loot appletree", &mut rng());
    game.drain_output();
    game.handle_line("buy apple", &mut rng());
    assert_eq!(inventory_names(&game), vec!["coin", "apple"]);
    assert!(
        game.transcript()
            .lines()
            .iter()
            .any(|l| l.contains("trouble interpreting"))
    );
}
