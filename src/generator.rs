//! Seeded random boards for fixtures and demos
//!
//! Shuffles the standard tile set and number tokens with a ChaCha stream, so
//! the same seed always produces the same board.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::board::{Resource, TileSpec, TILE_COUNT};

/// Terrain counts of the standard board.
pub const STANDARD_TERRAIN: [(Resource, usize); 6] = [
    (Resource::Wood, 4),
    (Resource::Brick, 3),
    (Resource::Ore, 3),
    (Resource::Wheat, 4),
    (Resource::Sheep, 4),
    (Resource::Desert, 1),
];

/// Number tokens placed on every non-desert tile.
pub const STANDARD_TOKENS: [u8; 18] = [2, 3, 3, 4, 4, 5, 5, 6, 6, 8, 8, 9, 9, 10, 10, 11, 11, 12];

pub struct BoardGenerator {
    seed: u64,
    rng: ChaCha8Rng,
}

impl BoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Next board from this generator's stream, in row-major order.
    pub fn generate(&mut self) -> Vec<TileSpec> {
        let mut terrain: Vec<Resource> = STANDARD_TERRAIN
            .iter()
            .flat_map(|&(resource, count)| std::iter::repeat(resource).take(count))
            .collect();
        let mut tokens = STANDARD_TOKENS.to_vec();
        terrain.shuffle(&mut self.rng);
        tokens.shuffle(&mut self.rng);

        let mut tokens = tokens.into_iter();
        let board: Vec<TileSpec> = terrain
            .into_iter()
            .map(|resource| {
                let roll = if resource.is_desert() {
                    0
                } else {
                    tokens.next().unwrap_or(0)
                };
                TileSpec::new(resource, roll)
            })
            .collect();
        debug_assert_eq!(board.len(), TILE_COUNT);
        board
    }
}
