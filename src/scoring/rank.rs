use serde::Serialize;

use crate::topology::NodeId;

use super::BoardScores;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedNode {
    pub node: NodeId,
    pub score: f64,
}

/// All nodes, best first. Equal scores keep ascending node order.
pub fn rank(scores: &BoardScores) -> Vec<RankedNode> {
    let mut ranked: Vec<RankedNode> = scores
        .iter()
        .map(|(&node, result)| RankedNode {
            node,
            score: result.score,
        })
        .collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score).then(a.node.cmp(&b.node)));
    ranked
}

/// The `count` best nodes that are not already occupied.
pub fn best_nodes(scores: &BoardScores, count: usize, occupied: &[NodeId]) -> Vec<RankedNode> {
    rank(scores)
        .into_iter()
        .filter(|entry| !occupied.contains(&entry.node))
        .take(count)
        .collect()
}
