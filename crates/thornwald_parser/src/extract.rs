//! Candidate extraction for argument slots.
//!
//! For each argument kind the interpreter builds one finite candidate
//! sequence over the argument tokens, then consumes it left to right with
//! an explicit cursor as slots are bound. There is no statefulness beyond
//! the cursor: rebuilding the sequences for the next command record
//! restarts them from scratch.

use thornwald_world::{Direction, EntityId, Viewpoint, World};

/// Tokens the player may use to refer to themselves.
const SELF_WORDS: [&str; 3] = ["me", "i", "myself"];

/// The four candidate sequences for one command record.
#[derive(Clone, Debug, Default)]
pub struct Candidates {
    /// Direction tokens, in token order.
    pub directions: Vec<Direction>,
    /// Referenced entities: the player for self words, then every
    /// viewpoint entity whose tag equals the token.
    pub entities: Vec<EntityId>,
    /// Indices into the player's inventory whose item name equals a token.
    pub inventory: Vec<usize>,
    /// `(holder, index)` pairs over every content-bearing viewpoint entity
    /// whose item name equals a token.
    pub loot: Vec<(EntityId, usize)>,
}

impl Candidates {
    /// Builds all four sequences from the argument tokens.
    ///
    /// Entity and loot scans walk the viewpoint's entity list in priority
    /// order, the same order used for display, so tag collisions resolve
    /// to the same "first match" the player sees listed first.
    #[must_use]
    pub fn gather(tokens: &[String], world: &World, viewpoint: Viewpoint) -> Self {
        let present = world.entities_at(viewpoint);
        let mut candidates = Self::default();

        for token in tokens {
            if let Ok(direction) = token.parse::<Direction>() {
                candidates.directions.push(direction);
            }

            if SELF_WORDS.contains(&token.as_str()) {
                candidates.entities.push(world.player());
            }
            for &id in &present {
                if world.entity(id).tag == *token {
                    candidates.entities.push(id);
                }
            }

            for (index, item) in world.inventory().iter().enumerate() {
                if item.name == *token {
                    candidates.inventory.push(index);
                }
            }

            for &id in &present {
                if let Some(contents) = world.entity(id).contents() {
                    for (index, item) in contents.iter().enumerate() {
                        if item.name == *token {
                            candidates.loot.push((id, index));
                        }
                    }
                }
            }
        }

        candidates
    }
}

/// Per-kind consumption cursors over a [`Candidates`] set.
#[derive(Clone, Copy, Debug, Default)]
pub struct Cursors {
    directions: usize,
    entities: usize,
    inventory: usize,
    loot: usize,
}

impl Cursors {
    /// Takes the next direction candidate, if any remains.
    pub fn next_direction(&mut self, c: &Candidates) -> Option<Direction> {
        let taken = c.directions.get(self.directions).copied();
        self.directions += usize::from(taken.is_some());
        taken
    }

    /// Takes the next entity candidate, if any remains.
    pub fn next_entity(&mut self, c: &Candidates) -> Option<EntityId> {
        let taken = c.entities.get(self.entities).copied();
        self.entities += usize::from(taken.is_some());
        taken
    }

    /// Takes the next inventory index candidate, if any remains.
    pub fn next_inventory(&mut self, c: &Candidates) -> Option<usize> {
        let taken = c.inventory.get(self.inventory).copied();
        self.inventory += usize::from(taken.is_some());
        taken
    }

    /// Takes the next loot pair candidate, if any remains.
    pub fn next_loot(&mut self, c: &Candidates) -> Option<(EntityId, usize)> {
        let taken = c.loot.get(self.loot).copied();
        self.loot += usize::from(taken.is_some());
        taken
    }
}
