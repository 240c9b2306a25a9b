//! Coin-gated barter with shopkeepers.
//!
//! Both directions are symmetric: exactly one coin must exist on the
//! paying side before anything moves, and a successful transaction swaps
//! one coin one way and the named item the other. A missing coin reports
//! failure and mutates nothing.

use thornwald_world::{EntityId, Item, ItemMatching, World, find_named};

use crate::transcript::Transcript;

/// Name items must carry to count as currency.
const COIN: &str = "coin";

/// The player buys the item at `index` of the shopkeeper's stock.
pub fn buy(
    world: &mut World,
    transcript: &mut Transcript,
    shopkeeper: EntityId,
    index: usize,
    matching: ItemMatching,
) {
    let mut probe = Item::new(COIN);
    let coin_at = find_named(world.inventory(), &mut probe, matching);
    let stocked = world
        .entity(shopkeeper)
        .contents()
        .is_some_and(|stock| index < stock.len());

    let Some(coin_at) = coin_at.filter(|_| stocked) else {
        transcript.say("No coin availiable");
        return;
    };

    let player = world.player();
    let coin = world
        .remove_item(player, coin_at)
        .expect("coin index came from the inventory scan");
    world.give_item(shopkeeper, coin);
    if let Some(bought) = world.remove_item(shopkeeper, index) {
        world.give_item(player, bought);
    }
    transcript.say("Transaction completed");
}

/// The player sells the inventory item at `index` to the shopkeeper.
pub fn sell(
    world: &mut World,
    transcript: &mut Transcript,
    shopkeeper: EntityId,
    index: usize,
    matching: ItemMatching,
) {
    let mut probe = Item::new(COIN);
    let coin_at = world
        .entity(shopkeeper)
        .contents()
        .and_then(|stock| find_named(stock, &mut probe, matching));
    let carried = index < world.inventory().len();

    let Some(coin_at) = coin_at.filter(|_| carried) else {
        transcript.say("No coin availiable");
        return;
    };

    let player = world.player();
    let coin = world
        .remove_item(shopkeeper, coin_at)
        .expect("coin index came from the stock scan");
    world.give_item(player, coin);
    if let Some(sold) = world.remove_item(player, index) {
        world.give_item(shopkeeper, sold);
    }
    transcript.say("Transaction completed");
}
