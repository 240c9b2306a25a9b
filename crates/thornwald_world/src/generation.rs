//! Procedural world generation.
//!
//! Builds the torus grid and populates every tile: one fruit tree each, an
//! occasional goblin pack, and the occasional shop. All randomness comes
//! from the caller's generator, so a seeded run reproduces its world
//! exactly.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::data::GameData;
use crate::entity::{Entity, Role, Vitals};
use crate::error::{Error, Result};
use crate::item::Item;
use crate::place::{Grid, Tile, TileId};
use crate::world::World;

/// Coupled (fruit, tree) pairs; looting the tree yields its fruit.
const TREES: [(&str, &str); 3] = [
    ("apple", "appletree"),
    ("pear", "peartree"),
    ("acorn", "oak"),
];

/// Goblin variants spawned in order within a pack.
const GOBLINS: [&str; 5] = [
    "goblin",
    "goblin thief",
    "goblin raider",
    "goblin medic",
    "goblin caster",
];

const GOBLIN_STRENGTH: i32 = 4;
const GOBLIN_HEALTH_SCALE: u32 = 20;

const PLAYER_HEALTH_SCALE: u32 = 100;
const PLAYER_STRENGTH: i32 = 10;

/// A freshly generated world and the player's uniformly chosen start tile.
#[derive(Clone, Debug)]
pub struct Generated {
    /// The populated world.
    pub world: World,
    /// Start tile for the session.
    pub start: TileId,
}

/// Generates a `size`×`size` torus world from the given data pool.
///
/// # Errors
///
/// Returns [`Error::ZeroGridSize`] for an empty grid request and
/// [`Error::EmptyTilePool`] when the data pool has no names to draw.
pub fn generate<R: Rng>(data: &GameData, size: usize, rng: &mut R) -> Result<Generated> {
    if size == 0 {
        return Err(Error::ZeroGridSize(size));
    }
    if data.tiles.is_empty() {
        return Err(Error::EmptyTilePool);
    }

    let tiles = (0..size * size)
        .map(|_| {
            let name = data
                .tiles
                .choose(rng)
                .expect("tile pool checked non-empty")
                .clone();
            Tile::new(name)
        })
        .collect();
    let grid = Grid::new(size, tiles);

    let player = Entity::creature(
        "player",
        Role::Player,
        Vitals::new(PLAYER_HEALTH_SCALE, PLAYER_STRENGTH),
    );
    let mut world = World::new(grid, player);

    let ids: Vec<TileId> = world.grid.ids().collect();
    for &tile in &ids {
        plant_tree(&mut world, tile, rng);
        spawn_goblins(&mut world, tile, rng);
        raise_shop(&mut world, tile, rng);
    }

    let start = *ids.choose(rng).expect("grid has at least one tile");
    Ok(Generated { world, start })
}

/// Every tile grows exactly one fruit tree holding one matching fruit.
fn plant_tree<R: Rng>(world: &mut World, tile: TileId, rng: &mut R) {
    let &(fruit, tree) = TREES.choose(rng).expect("tree table is non-empty");
    world.spawn_on_tile(tile, Entity::container(tree, vec![Item::new(fruit)]));
}

/// One tile in ten hosts a pack of one to five goblins, taken in order
/// from the variant list.
fn spawn_goblins<R: Rng>(world: &mut World, tile: TileId, rng: &mut R) {
    if rng.gen_range(0..10) != 0 {
        return;
    }
    let count = rng.gen_range(0..GOBLINS.len()) + 1;
    for name in GOBLINS.iter().take(count) {
        let mut vitals = Vitals::new(GOBLIN_HEALTH_SCALE, GOBLIN_STRENGTH);
        vitals.aggressive = true;
        world.spawn_on_tile(tile, Entity::creature(*name, Role::Monster, vitals));
    }
}

/// One tile in three hosts a shop building with a stocked merchant.
fn raise_shop<R: Rng>(world: &mut World, tile: TileId, rng: &mut R) {
    if rng.gen_range(0..3) != 0 {
        return;
    }
    let shop = world.spawn_on_tile(tile, Entity::building("shop", "shop"));
    let keeper = world.spawn_inside(
        shop,
        Entity::creature(
            "merchant",
            Role::Shopkeeper,
            Vitals::new(PLAYER_HEALTH_SCALE, PLAYER_STRENGTH),
        ),
    );
    let stock = world
        .entity_mut(keeper)
        .contents_mut()
        .expect("merchant is a creature");
    for _ in 0..5 {
        stock.push(Item::new("apple"));
    }
    for _ in 0..5 {
        stock.push(Item::new("coin"));
    }
}
