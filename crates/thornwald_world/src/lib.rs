//! World model for Thornwald.
//!
//! This crate owns everything that exists: items, the four-level health
//! state machine, the closed set of entity variants, the wrapped grid of
//! tiles, and the procedural generator that populates it.
//!
//! # Architecture
//!
//! ```text
//! generation — torus generation, trees, goblins, shops
//! world     — entity arena, priority-sorted queries, item transfer
//! place     — directions, tiles, modular neighbor links, viewpoints
//! entity    — EntityId, Entity, closed EntityKind capability variants
//! health    — dead/unconscious/wounded/healthy state machine
//! item      — items, weapons, the two item-matching modes
//! phrase    — article phrases and list joining for descriptions
//! data      — JSON tile name pool
//! ```
//!
//! Nothing in this crate prints or blocks; all randomness flows in through
//! `&mut impl Rng` parameters so callers control determinism.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]


pub mod data;
pub mod entity;
pub mod error;
pub mod generation;
pub mod health;
pub mod item;
pub mod phrase;
pub mod place;
pub mod world;

pub use data::GameData;
pub use entity::{Creature, Entity, EntityId, EntityKind, Role, Vitals};
pub use error::{Error, Result};
pub use generation::{Generated, generate};
pub use health::HealthLevel;
pub use item::{Item, ItemKind, ItemMatching, find_named};
pub use place::{Direction, Grid, Tile, TileId, Viewpoint};
pub use world::World;
