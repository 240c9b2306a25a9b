//! The world: entity arena plus grid topology.
//!
//! `World` is the unified facade over all mutable simulation state. The
//! entity arena is append-only: entities detach from location lists but
//! their records are never destroyed, so plain indices stay valid for the
//! life of the session.

use crate::entity::{Creature, Entity, EntityId, EntityKind, Role};
use crate::item::Item;
use crate::place::{Grid, TileId, Viewpoint};

/// All mutable simulation state.
#[derive(Clone, Debug)]
pub struct World {
    /// The open-world torus.
    pub grid: Grid,
    entities: Vec<Entity>,
    player: EntityId,
}

impl World {
    /// Creates a world over a generated grid, with a detached player
    /// creature as its first entity.
    #[must_use]
    pub fn new(grid: Grid, player: Entity) -> Self {
        debug_assert!(
            matches!(&player.kind, EntityKind::Creature(c) if c.role == Role::Player),
            "the first entity must be the player creature"
        );
        Self {
            grid,
            entities: vec![player],
            player: EntityId(0),
        }
    }

    /// The player's entity id.
    #[must_use]
    pub const fn player(&self) -> EntityId {
        self.player
    }

    /// Shared access to an entity record.
    #[must_use]
    pub fn entity(&self, id: EntityId) -> &Entity {
        &self.entities[id.0 as usize]
    }

    /// Mutable access to an entity record.
    pub fn entity_mut(&mut self, id: EntityId) -> &mut Entity {
        &mut self.entities[id.0 as usize]
    }

    /// Shared access to the player's creature data.
    #[must_use]
    pub fn player_creature(&self) -> &Creature {
        self.entity(self.player)
            .as_creature()
            .expect("player entity is always a creature")
    }

    /// Mutable access to the player's creature data.
    pub fn player_creature_mut(&mut self) -> &mut Creature {
        let id = self.player;
        self.entity_mut(id)
            .as_creature_mut()
            .expect("player entity is always a creature")
    }

    /// The player's carried items.
    #[must_use]
    pub fn inventory(&self) -> &[Item] {
        &self.player_creature().contents
    }

    /// Adds an entity record and attaches it to a tile's entity list.
    pub fn spawn_on_tile(&mut self, tile: TileId, entity: Entity) -> EntityId {
        let id = self.push(entity);
        self.grid.tile_mut(tile).entities.push(id);
        id
    }

    /// Adds an entity record and attaches it inside a building.
    ///
    /// # Panics
    ///
    /// Panics if `building` is not a building entity.
    pub fn spawn_inside(&mut self, building: EntityId, entity: Entity) -> EntityId {
        let id = self.push(entity);
        match &mut self.entity_mut(building).kind {
            EntityKind::Building { occupants, .. } => occupants.push(id),
            _ => panic!("spawn_inside target is not a building"),
        }
        id
    }

    /// Adds a detached entity record attached to no location.
    pub fn push(&mut self, entity: Entity) -> EntityId {
        let id = EntityId(u32::try_from(self.entities.len()).expect("entity arena overflow"));
        self.entities.push(entity);
        id
    }

    /// Entity ids present at a viewpoint, sorted by display priority.
    ///
    /// The sort is recomputed on every query; dead creatures order first,
    /// wounded last.
    #[must_use]
    pub fn entities_at(&self, viewpoint: Viewpoint) -> Vec<EntityId> {
        let mut ids: Vec<EntityId> = match viewpoint {
            Viewpoint::Open(tile) => self.grid.tile(tile).entities.clone(),
            Viewpoint::Inside(building) => match &self.entity(building).kind {
                EntityKind::Building { occupants, .. } => occupants.clone(),
                _ => Vec::new(),
            },
        };
        ids.sort_by_key(|&id| self.entity(id).priority());
        ids
    }

    /// Removes one item by position from an entity's contents.
    pub fn remove_item(&mut self, holder: EntityId, index: usize) -> Option<Item> {
        let contents = self.entity_mut(holder).contents_mut()?;
        if index < contents.len() {
            Some(contents.remove(index))
        } else {
            None
        }
    }

    /// Empties an entity's contents, returning everything it held.
    pub fn drain_items(&mut self, holder: EntityId) -> Vec<Item> {
        self.entity_mut(holder)
            .contents_mut()
            .map(std::mem::take)
            .unwrap_or_default()
    }

    /// Appends an item to an entity's contents. Items given to a
    /// content-free entity are discarded; callers check capability first.
    pub fn give_item(&mut self, holder: EntityId, item: Item) {
        if let Some(contents) = self.entity_mut(holder).contents_mut() {
            contents.push(item);
        }
    }
}
