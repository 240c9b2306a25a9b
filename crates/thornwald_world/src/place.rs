//! Directions, tiles, and the wrapped grid.
//!
//! The open world is a fixed-size square grid of tiles whose neighbor links
//! wrap around in modular arithmetic, so the map is a torus: every tile has
//! exactly four neighbors and every tile is reachable from every other.

use std::fmt;
use std::str::FromStr;

use crate::entity::EntityId;

/// One of the four cardinal travel directions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Decreasing y, wrapping.
    North,
    /// Increasing x, wrapping.
    East,
    /// Increasing y, wrapping.
    South,
    /// Decreasing x, wrapping.
    West,
}

impl Direction {
    /// All four directions in north/east/south/west order.
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// The direction leading back.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        };
        write!(f, "{word}")
    }
}

impl FromStr for Direction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "north" => Ok(Self::North),
            "east" => Ok(Self::East),
            "south" => Ok(Self::South),
            "west" => Ok(Self::West),
            _ => Err(()),
        }
    }
}

/// Grid coordinates of a tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TileId {
    /// Column, `0..size`.
    pub x: usize,
    /// Row, `0..size`.
    pub y: usize,
}

impl TileId {
    /// Creates a tile id from coordinates.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// One open-world location.
#[derive(Clone, Debug)]
pub struct Tile {
    /// Scenic display name drawn from the data pool.
    pub name: String,
    /// Entities physically present, in attachment order.
    pub entities: Vec<EntityId>,
}

impl Tile {
    /// Creates an empty tile with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entities: Vec::new(),
        }
    }
}

/// The square torus of tiles.
#[derive(Clone, Debug)]
pub struct Grid {
    size: usize,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Builds a grid from row-major tiles. `tiles.len()` must equal
    /// `size * size`.
    ///
    /// # Panics
    ///
    /// Panics if the tile count does not match the declared size; the
    /// generator is the only constructor and always supplies a full grid.
    #[must_use]
    pub fn new(size: usize, tiles: Vec<Tile>) -> Self {
        assert_eq!(tiles.len(), size * size, "grid tile count mismatch");
        Self { size, tiles }
    }

    /// Grid edge length.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Shared tile access.
    #[must_use]
    pub fn tile(&self, id: TileId) -> &Tile {
        &self.tiles[id.y * self.size + id.x]
    }

    /// Mutable tile access.
    pub fn tile_mut(&mut self, id: TileId) -> &mut Tile {
        &mut self.tiles[id.y * self.size + id.x]
    }

    /// The neighboring tile in a direction, wrapping around the torus.
    #[must_use]
    pub const fn neighbor(&self, id: TileId, direction: Direction) -> TileId {
        let s = self.size;
        match direction {
            Direction::North => TileId::new(id.x, (id.y + s - 1) % s),
            Direction::South => TileId::new(id.x, (id.y + 1) % s),
            Direction::West => TileId::new((id.x + s - 1) % s, id.y),
            Direction::East => TileId::new((id.x + 1) % s, id.y),
        }
    }

    /// Iterates all tile ids in row-major order.
    pub fn ids(&self) -> impl Iterator<Item = TileId> + '_ {
        let size = self.size;
        (0..size).flat_map(move |y| (0..size).map(move |x| TileId::new(x, y)))
    }
}

/// Where entity queries currently look: an open-world tile, or the interior
/// of an entered building.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Viewpoint {
    /// Standing in the open on a tile.
    Open(TileId),
    /// Standing inside a building entity.
    Inside(EntityId),
}
