//! Node scoring: production analysis, weighted scores and strategic text for
//! every settlement node of a board.
//!
//! Each node is scored independently from the tiles it touches, its port and
//! the player's current holdings. Nothing is cached between boards.

mod assess;
mod describe;
mod rank;
pub mod weights;

use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::board::{Holdings, Tile, TileGrid};
use crate::error::BoardError;
use crate::topology::{NodeId, Topology};

pub use assess::{assess_node, NodeAssessment, ProductionStats};
pub use describe::{describe, resource_summary, DESERT_LOCATION};
pub use rank::{best_nodes, rank, RankedNode};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeScore {
    pub score: f64,
    pub description: String,
    pub resources: String,
}

pub type BoardScores = BTreeMap<NodeId, NodeScore>;

#[derive(Debug, Clone, Default)]
pub struct NodeScorer {
    topology: Topology,
}

impl NodeScorer {
    pub fn new(topology: Topology) -> Self {
        Self { topology }
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn node_tiles(&self, grid: &TileGrid, node: NodeId) -> Result<Vec<Tile>, BoardError> {
        let positions = self
            .topology
            .node_tiles(node)
            .ok_or(BoardError::UnknownNode { node })?;
        Ok(positions
            .iter()
            .filter_map(|&pos| grid.get(pos).copied())
            .collect())
    }

    pub fn assess(
        &self,
        grid: &TileGrid,
        node: NodeId,
        holdings: Option<&Holdings>,
    ) -> Result<NodeAssessment, BoardError> {
        let tiles = self.node_tiles(grid, node)?;
        Ok(assess_node(&tiles, self.topology.port(node), holdings))
    }

    pub fn score_node(
        &self,
        grid: &TileGrid,
        node: NodeId,
        holdings: Option<&Holdings>,
    ) -> Result<NodeScore, BoardError> {
        let assessment = self.assess(grid, node, holdings)?;
        Ok(NodeScore {
            score: assessment.score(),
            description: describe(&assessment),
            resources: describe::summarize(&assessment.stats),
        })
    }

    pub fn score_board(&self, grid: &TileGrid, holdings: Option<&Holdings>) -> BoardScores {
        let mut scores = BoardScores::new();
        for node in self.topology.nodes() {
            // Node ids come from the topology itself, so the lookup cannot miss.
            if let Ok(result) = self.score_node(grid, node, holdings) {
                scores.insert(node, result);
            }
        }
        if let Some(top) = rank(&scores).first() {
            debug!(
                "scored {} nodes, best node {} at {:.1}",
                scores.len(),
                top.node,
                top.score
            );
        }
        scores
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Resource, TilePos};
    use crate::topology::Port;

    #[test]
    fn test_score_board_covers_every_node() {
        let grid = TileGrid::uniform(Tile::new(Resource::Sheep, 8));
        let scores = NodeScorer::default().score_board(&grid, None);
        assert_eq!(scores.len(), 54);
        assert!(scores.values().all(|result| result.score > 0.0));
    }

    #[test]
    fn test_unknown_node_is_an_error() {
        let grid = TileGrid::uniform(Tile::desert());
        let scorer = NodeScorer::default();
        assert_eq!(
            scorer.score_node(&grid, 54, None),
            Err(BoardError::UnknownNode { node: 54 })
        );
    }

    #[test]
    fn test_node_uses_its_own_tiles_and_port() {
        let mut grid = TileGrid::uniform(Tile::desert());
        grid.set(TilePos::new(1, 3), Tile::new(Resource::Wheat, 6));
        let scorer = NodeScorer::default();
        assert_eq!(scorer.topology().port(15), Some(Port::Resource(Resource::Wheat)));

        let result = scorer.score_node(&grid, 15, None).unwrap();
        // 5 dots * 1.1 + port + matching port
        assert_eq!(result.score, 7.5);
        assert_eq!(result.resources, "Wheat");
        assert!(result.description.contains("Excellent Wheat port synergy"));
    }
}
