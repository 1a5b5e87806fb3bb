//! Board model - the 19 terrain tiles and the caller-facing tile descriptors

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BoardError;
use crate::scoring::weights;

/// Tiles per row, top to bottom.
pub const ROW_LENGTHS: [usize; 5] = [3, 4, 5, 4, 3];
pub const TILE_COUNT: usize = 19;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Wood,
    Brick,
    Ore,
    Wheat,
    Sheep,
    Desert,
}

impl Resource {
    pub const ALL: [Resource; 6] = [
        Resource::Wood,
        Resource::Brick,
        Resource::Ore,
        Resource::Wheat,
        Resource::Sheep,
        Resource::Desert,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Resource::Wood => "wood",
            Resource::Brick => "brick",
            Resource::Ore => "ore",
            Resource::Wheat => "wheat",
            Resource::Sheep => "sheep",
            Resource::Desert => "desert",
        }
    }

    /// Capitalized name used in descriptions and summaries.
    pub fn title(self) -> &'static str {
        match self {
            Resource::Wood => "Wood",
            Resource::Brick => "Brick",
            Resource::Ore => "Ore",
            Resource::Wheat => "Wheat",
            Resource::Sheep => "Sheep",
            Resource::Desert => "Desert",
        }
    }

    pub fn is_desert(self) -> bool {
        self == Resource::Desert
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Resource {
    type Err = BoardError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim().to_ascii_lowercase();
        Resource::ALL
            .into_iter()
            .find(|resource| resource.name() == needle)
            .ok_or_else(|| BoardError::UnknownResource {
                name: value.to_string(),
            })
    }
}

/// Resources a player already produces.
pub type Holdings = BTreeSet<Resource>;

pub fn parse_holdings<I, S>(names: I) -> Result<Holdings, BoardError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .map(|name| name.as_ref().parse::<Resource>())
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tile {
    pub resource: Resource,
    pub roll: u8,
}

impl Tile {
    pub fn new(resource: Resource, roll: u8) -> Self {
        Self { resource, roll }
    }

    pub fn desert() -> Self {
        Self::new(Resource::Desert, 0)
    }

    /// Probability weight of this tile's roll.
    pub fn dots(&self) -> u32 {
        weights::dot_weight(self.roll)
    }

    /// Dot weight scaled by the resource multiplier.
    pub fn value(&self) -> f64 {
        f64::from(self.dots()) * weights::resource_value(self.resource)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.resource, self.roll)
    }
}

/// Unvalidated tile descriptor as it arrives from a request or a layout file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileSpec {
    #[serde(default)]
    pub resource: Option<String>,
    #[serde(default)]
    pub roll: Option<i64>,
}

impl TileSpec {
    pub fn new(resource: Resource, roll: u8) -> Self {
        Self {
            resource: Some(resource.name().to_string()),
            roll: Some(i64::from(roll)),
        }
    }

    fn validate(&self, index: usize) -> Result<Tile, BoardError> {
        let resource = self
            .resource
            .as_deref()
            .ok_or(BoardError::MissingResource { index })?
            .parse::<Resource>()?;
        let roll = match self.roll.unwrap_or(0) {
            0 => 0,
            roll @ 2..=12 => roll as u8,
            roll => return Err(BoardError::InvalidRoll { index, roll }),
        };
        Ok(Tile::new(resource, roll))
    }
}

/// Grid position of a tile: row 0..5, column within the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TilePos {
    pub row: u8,
    pub col: u8,
}

impl TilePos {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Flat row-major index, or `None` if the position is off the board.
    pub fn index(self) -> Option<usize> {
        let row = self.row as usize;
        let col = self.col as usize;
        if row >= ROW_LENGTHS.len() || col >= ROW_LENGTHS[row] {
            return None;
        }
        Some(ROW_LENGTHS[..row].iter().sum::<usize>() + col)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        let mut start = 0;
        for (row, len) in ROW_LENGTHS.iter().enumerate() {
            if index < start + len {
                return Some(Self::new(row as u8, (index - start) as u8));
            }
            start += len;
        }
        None
    }
}

/// The 19 tiles of one board, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    tiles: Vec<Tile>,
}

impl TileGrid {
    pub fn from_specs(specs: &[TileSpec]) -> Result<Self, BoardError> {
        if specs.len() != TILE_COUNT {
            return Err(BoardError::TileCount {
                expected: TILE_COUNT,
                found: specs.len(),
            });
        }
        let tiles = specs
            .iter()
            .enumerate()
            .map(|(index, spec)| spec.validate(index))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { tiles })
    }

    pub fn from_tiles(tiles: Vec<Tile>) -> Result<Self, BoardError> {
        if tiles.len() != TILE_COUNT {
            return Err(BoardError::TileCount {
                expected: TILE_COUNT,
                found: tiles.len(),
            });
        }
        Ok(Self { tiles })
    }

    /// Every position holds a copy of `tile`.
    pub fn uniform(tile: Tile) -> Self {
        Self {
            tiles: vec![tile; TILE_COUNT],
        }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn get(&self, pos: TilePos) -> Option<&Tile> {
        pos.index().and_then(|index| self.tiles.get(index))
    }

    pub fn set(&mut self, pos: TilePos, tile: Tile) -> Option<Tile> {
        let slot = pos.index().and_then(|index| self.tiles.get_mut(index))?;
        Some(std::mem::replace(slot, tile))
    }

    pub fn specs(&self) -> Vec<TileSpec> {
        self.tiles
            .iter()
            .map(|tile| TileSpec::new(tile.resource, tile.roll))
            .collect()
    }
}
