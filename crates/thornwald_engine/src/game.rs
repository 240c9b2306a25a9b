//! The game: viewpoint, dispatch, and the turn cycle.
//!
//! `Game` owns the world, the interpreter, and the building stack, and
//! resolves each validated invocation into mutations and transcript text.
//! The turn cycle alternates a player phase (one or more commands, until a
//! state-changing action sets the one-shot turn-over flag) with a world
//! phase (every viewpoint entity's free action, then the player's).

use rand::Rng;

use thornwald_parser::{Action, Arg, Interpreter, Invocation, Outcome};
use thornwald_world::{
    Direction, EntityId, EntityKind, Item, ItemMatching, Role, TileId, Viewpoint, World, phrase,
};

use crate::actions;
use crate::combat;
use crate::trade;
use crate::transcript::{Note, Transcript};

/// One running simulation.
#[derive(Clone, Debug)]
pub struct Game {
    world: World,
    interpreter: Interpreter,
    current_tile: TileId,
    building_stack: Vec<EntityId>,
    matching: ItemMatching,
    turn_over: bool,
    transcript: Transcript,
}

impl Game {
    /// Creates a game over a generated world, announcing the start tile.
    #[must_use]
    pub fn new(world: World, start: TileId, interpreter: Interpreter) -> Self {
        let mut game = Self {
            world,
            interpreter,
            current_tile: start,
            building_stack: Vec::new(),
            matching: ItemMatching::default(),
            turn_over: false,
            transcript: Transcript::new(),
        };
        game.look();
        game
    }

    /// Selects the item-matching mode used by trade.
    #[must_use]
    pub const fn with_matching(mut self, matching: ItemMatching) -> Self {
        self.matching = matching;
        self
    }

    /// The world, for inspection.
    #[must_use]
    pub const fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access, for scenario setup.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Queued output, for inspection.
    #[must_use]
    pub const fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Removes and returns all queued output.
    pub fn drain_output(&mut self) -> Vec<Note> {
        self.transcript.drain()
    }

    /// Where entity queries currently look: the innermost entered building,
    /// or the current open-world tile.
    #[must_use]
    pub fn viewpoint(&self) -> Viewpoint {
        self.building_stack
            .last()
            .map_or(Viewpoint::Open(self.current_tile), |&b| {
                Viewpoint::Inside(b)
            })
    }

    /// The tile the player stands on (or under, when inside a building).
    #[must_use]
    pub const fn current_tile(&self) -> TileId {
        self.current_tile
    }

    /// Whether the player can act this cycle.
    #[must_use]
    pub fn player_active(&self) -> bool {
        self.world.player_creature().vitals.level.is_active()
    }

    /// Whether a state-changing action ended the player phase.
    #[must_use]
    pub const fn turn_over(&self) -> bool {
        self.turn_over
    }

    /// Interprets and dispatches one line of player input.
    pub fn handle_line<R: Rng>(&mut self, input: &str, rng: &mut R) {
        let outcome = self
            .interpreter
            .interpret(input, &self.world, self.viewpoint());
        match outcome {
            Outcome::Silent => {}
            Outcome::Failure(lines) => {
                for line in lines {
                    self.transcript.say(line);
                }
            }
            Outcome::Invoke(invocation) => self.dispatch(&invocation, rng),
        }
    }

    /// Runs the world phase: every viewpoint entity's free action in
    /// priority order, then the player's, then rearms the player phase.
    pub fn world_phase<R: Rng>(&mut self, rng: &mut R) {
        for id in self.world.entities_at(self.viewpoint()) {
            combat::free_action(&mut self.world, &mut self.transcript, rng, id);
        }
        combat::player_free_action(&mut self.world, rng);
        self.turn_over = false;
    }

    /// Describes the current viewpoint.
    pub fn look(&mut self) {
        let (headline, present) = match self.viewpoint() {
            Viewpoint::Open(tile) => (
                format!("You are in {}.", self.world.grid.tile(tile).name),
                self.world.entities_at(Viewpoint::Open(tile)),
            ),
            Viewpoint::Inside(building) => {
                let inside = match &self.world.entity(building).kind {
                    EntityKind::Building { inside_name, .. } => inside_name.clone(),
                    _ => self.world.entity(building).name.clone(),
                };
                (
                    format!("You are in a {inside}."),
                    self.world.entities_at(Viewpoint::Inside(building)),
                )
            }
        };
        self.transcript.say(headline);
        if present.is_empty() {
            self.transcript.say("There is nothing of interest here.");
        } else {
            let seen = phrase::tell_list(
                present
                    .iter()
                    .map(|&id| phrase::describe_entity(self.world.entity(id), None)),
            );
            self.transcript.say(format!("You can see {seen}."));
        }
    }

    fn dispatch<R: Rng>(&mut self, invocation: &Invocation, rng: &mut R) {
        match (invocation.action, invocation.args.as_slice()) {
            (Action::Travel, [Arg::Direction(direction)]) => self.travel(*direction),
            (Action::Clear, []) => {
                self.transcript.clear_screen();
                self.look();
            }
            (Action::Enter, [Arg::Entity(target)]) => self.enter(*target),
            (Action::Exit, []) => self.exit_building(),
            (Action::Look, []) => self.look(),
            (Action::Inspect, [Arg::Entity(target)]) => {
                actions::inspect(&self.world, &mut self.transcript, *target);
            }
            (Action::LootAll, [Arg::Entity(target)]) => {
                actions::loot_all(&mut self.world, &mut self.transcript, *target);
                self.end_turn();
            }
            (Action::LootOne, [Arg::Loot(holder, index)]) => {
                actions::loot_one(&mut self.world, &mut self.transcript, *holder, *index);
                self.end_turn();
            }
            (Action::Attack, [Arg::Entity(target)]) => {
                combat::attack(&mut self.world, &mut self.transcript, rng, *target, None);
                self.end_turn();
            }
            (Action::Attack, [Arg::Entity(target), Arg::Inventory(index)]) => {
                let weapon: Option<Item> = self.world.inventory().get(*index).cloned();
                combat::attack(
                    &mut self.world,
                    &mut self.transcript,
                    rng,
                    *target,
                    weapon.as_ref(),
                );
                self.end_turn();
            }
            (Action::Buy, [Arg::Loot(holder, index)]) => {
                if self.is_shopkeeper(*holder) {
                    trade::buy(
                        &mut self.world,
                        &mut self.transcript,
                        *holder,
                        *index,
                        self.matching,
                    );
                } else {
                    self.transcript.say("You cannot buy this object");
                }
                self.end_turn();
            }
            (Action::Sell, [Arg::Entity(target), Arg::Inventory(index)]) => {
                if self.is_shopkeeper(*target) {
                    trade::sell(
                        &mut self.world,
                        &mut self.transcript,
                        *target,
                        *index,
                        self.matching,
                    );
                } else {
                    self.transcript.say("You cannot sell to this person");
                }
                self.end_turn();
            }
            _ => debug_assert!(false, "slot specification and dispatch disagree"),
        }
    }

    fn is_shopkeeper(&self, id: EntityId) -> bool {
        self.world
            .entity(id)
            .as_creature()
            .is_some_and(|c| c.role == Role::Shopkeeper)
    }

    /// Travel never ends the turn; several moves fit in one player phase.
    fn travel(&mut self, direction: Direction) {
        if !self.building_stack.is_empty() {
            self.transcript.say("You cannot travel while inside.");
            return;
        }
        self.current_tile = self.world.grid.neighbor(self.current_tile, direction);
        self.look();
    }

    fn enter(&mut self, target: EntityId) {
        if matches!(&self.world.entity(target).kind, EntityKind::Building { .. }) {
            self.building_stack.push(target);
            self.look();
        } else {
            self.transcript.say("You cannot enter that.");
        }
    }

    fn exit_building(&mut self) {
        self.building_stack.pop();
        self.look();
    }

    fn end_turn(&mut self) {
        self.turn_over = true;
    }
}
