//! Fixed board topology: which tiles touch each of the 54 settlement nodes,
//! and which nodes sit on a harbour.
//!
//! Nodes are numbered row by row from the top of the board, left to right.
//! All adjacency data is compile-time `static`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::{Resource, TilePos};
use crate::error::BoardError;

pub type NodeId = usize;

pub const NODE_COUNT: usize = 54;

const fn at(row: u8, col: u8) -> TilePos {
    TilePos::new(row, col)
}

/// Adjacent tiles for every node, indexed by node id.
pub static NODE_TILES: [&[TilePos]; NODE_COUNT] = [
    // top edge
    &[at(0, 0)],
    &[at(0, 0)],
    &[at(0, 0), at(0, 1)],
    &[at(0, 1)],
    &[at(0, 1), at(0, 2)],
    &[at(0, 2)],
    &[at(0, 2)],
    // between rows 0 and 1
    &[at(1, 0)],
    &[at(0, 0), at(1, 0)],
    &[at(0, 0), at(1, 0), at(1, 1)],
    &[at(0, 0), at(0, 1), at(1, 1)],
    &[at(0, 1), at(1, 1), at(1, 2)],
    &[at(0, 1), at(0, 2), at(1, 2)],
    &[at(0, 2), at(1, 2), at(1, 3)],
    &[at(0, 2), at(1, 3)],
    &[at(1, 3)],
    // between rows 1 and 2
    &[at(2, 0)],
    &[at(1, 0), at(2, 0)],
    &[at(1, 0), at(2, 0), at(2, 1)],
    &[at(1, 0), at(1, 1), at(2, 1)],
    &[at(1, 1), at(2, 1), at(2, 2)],
    &[at(1, 2), at(1, 1), at(2, 2)],
    &[at(1, 2), at(2, 2), at(2, 3)],
    &[at(1, 2), at(1, 3), at(2, 3)],
    &[at(1, 3), at(2, 3), at(2, 4)],
    &[at(1, 3), at(2, 4)],
    &[at(2, 4)],
    // between rows 2 and 3
    &[at(2, 0)],
    &[at(2, 0), at(3, 0)],
    &[at(2, 0), at(2, 1), at(3, 0)],
    &[at(2, 1), at(3, 0), at(3, 1)],
    &[at(2, 1), at(2, 2), at(3, 1)],
    &[at(2, 2), at(3, 1), at(3, 2)],
    &[at(2, 2), at(2, 3), at(3, 2)],
    &[at(2, 3), at(3, 2), at(3, 3)],
    &[at(2, 3), at(2, 4), at(3, 3)],
    &[at(2, 4), at(3, 3)],
    &[at(2, 4)],
    // between rows 3 and 4
    &[at(3, 0)],
    &[at(3, 0), at(4, 0)],
    &[at(3, 0), at(3, 1), at(4, 0)],
    &[at(3, 1), at(4, 0), at(4, 1)],
    &[at(3, 1), at(3, 2), at(4, 1)],
    &[at(3, 2), at(4, 1), at(4, 2)],
    &[at(3, 2), at(3, 3), at(4, 2)],
    &[at(4, 2), at(3, 3)],
    &[at(3, 3)],
    // bottom edge
    &[at(4, 0)],
    &[at(4, 0)],
    &[at(4, 0), at(4, 1)],
    &[at(4, 1)],
    &[at(4, 1), at(4, 2)],
    &[at(4, 2)],
    &[at(4, 2)],
];

/// Harbour type on a coastal node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Port {
    /// Any resource at 3:1.
    Generic,
    /// One specific resource at 2:1.
    Resource(Resource),
}

pub const GENERIC_PORT_LABEL: &str = "3:1";

impl Port {
    pub fn label(self) -> &'static str {
        match self {
            Port::Generic => GENERIC_PORT_LABEL,
            Port::Resource(resource) => resource.name(),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Port::Generic => GENERIC_PORT_LABEL,
            Port::Resource(resource) => resource.title(),
        }
    }

    /// True when this is the 2:1 harbour for `resource`.
    pub fn trades(self, resource: Resource) -> bool {
        matches!(self, Port::Resource(own) if own == resource)
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Port {
    type Err = BoardError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed == GENERIC_PORT_LABEL {
            return Ok(Port::Generic);
        }
        match trimmed.parse::<Resource>() {
            Ok(resource) if !resource.is_desert() => Ok(Port::Resource(resource)),
            _ => Err(BoardError::UnknownPort {
                label: value.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Port {
    type Error = BoardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Port> for String {
    fn from(port: Port) -> Self {
        port.label().to_string()
    }
}

/// Harbours of the standard board, listed clockwise from the top.
pub const STANDARD_PORTS: [(NodeId, Port); 18] = [
    (2, Port::Generic),
    (3, Port::Generic),
    (5, Port::Generic),
    (6, Port::Generic),
    (15, Port::Resource(Resource::Wheat)),
    (25, Port::Resource(Resource::Wheat)),
    (36, Port::Resource(Resource::Wood)),
    (46, Port::Resource(Resource::Wood)),
    (52, Port::Generic),
    (53, Port::Generic),
    (50, Port::Resource(Resource::Sheep)),
    (49, Port::Resource(Resource::Sheep)),
    (48, Port::Generic),
    (47, Port::Generic),
    (38, Port::Resource(Resource::Brick)),
    (28, Port::Resource(Resource::Brick)),
    (17, Port::Resource(Resource::Ore)),
    (7, Port::Resource(Resource::Ore)),
];

/// Node adjacency plus a port assignment per node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topology {
    ports: [Option<Port>; NODE_COUNT],
}

impl Topology {
    pub fn standard() -> Self {
        let mut ports = [None; NODE_COUNT];
        for (node, port) in STANDARD_PORTS {
            ports[node] = Some(port);
        }
        Self { ports }
    }

    /// Same adjacency, no harbours at all.
    pub fn without_ports() -> Self {
        Self {
            ports: [None; NODE_COUNT],
        }
    }

    /// Replaces the whole port table with `assignments` (node id, port label).
    pub fn with_ports<I, S>(assignments: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = (NodeId, S)>,
        S: AsRef<str>,
    {
        let mut topology = Self::without_ports();
        for (node, label) in assignments {
            let port = label.as_ref().parse::<Port>()?;
            let slot = topology
                .ports
                .get_mut(node)
                .ok_or(BoardError::UnknownNode { node })?;
            *slot = Some(port);
        }
        Ok(topology)
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeId> {
        0..NODE_COUNT
    }

    pub fn node_tiles(&self, node: NodeId) -> Option<&'static [TilePos]> {
        NODE_TILES.get(node).copied()
    }

    pub fn port(&self, node: NodeId) -> Option<Port> {
        self.ports.get(node).copied().flatten()
    }

    /// Nodes that touch the tile at `pos`.
    pub fn nodes_touching(&self, pos: TilePos) -> Vec<NodeId> {
        self.nodes()
            .filter(|&node| NODE_TILES[node].contains(&pos))
            .collect()
    }
}

impl Default for Topology {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{ROW_LENGTHS, TILE_COUNT};

    #[test]
    fn test_every_node_touches_one_to_three_tiles() {
        for (node, tiles) in NODE_TILES.iter().enumerate() {
            assert!(
                (1..=3).contains(&tiles.len()),
                "node {node} touches {} tiles",
                tiles.len()
            );
            for pos in tiles.iter() {
                assert!(pos.index().is_some(), "node {node} references {pos:?}");
            }
        }
    }

    #[test]
    fn test_every_tile_has_six_corners() {
        let topology = Topology::standard();
        for index in 0..TILE_COUNT {
            let pos = TilePos::from_index(index).unwrap();
            assert_eq!(
                topology.nodes_touching(pos).len(),
                6,
                "tile {pos:?} should have six corner nodes"
            );
        }
        assert_eq!(ROW_LENGTHS.iter().sum::<usize>(), TILE_COUNT);
    }

    #[test]
    fn test_no_two_nodes_share_the_same_three_tiles() {
        let mut seen: Vec<Vec<TilePos>> = Vec::new();
        for tiles in NODE_TILES.iter().filter(|tiles| tiles.len() == 3) {
            let mut sorted = tiles.to_vec();
            sorted.sort();
            assert!(!seen.contains(&sorted), "duplicate interior node {sorted:?}");
            seen.push(sorted);
        }
        assert_eq!(seen.len(), 24);
    }

    #[test]
    fn test_standard_ports() {
        let topology = Topology::standard();
        assert_eq!(topology.port(15), Some(Port::Resource(Resource::Wheat)));
        assert_eq!(topology.port(2), Some(Port::Generic));
        assert_eq!(topology.port(0), None);
        assert_eq!(topology.nodes().filter_map(|n| topology.port(n)).count(), 18);
    }

    #[test]
    fn test_port_labels() {
        assert_eq!("3:1".parse::<Port>().unwrap(), Port::Generic);
        assert_eq!(
            "Sheep".parse::<Port>().unwrap(),
            Port::Resource(Resource::Sheep)
        );
        assert!("desert".parse::<Port>().is_err());
        assert!("2:1 wheat".parse::<Port>().is_err());
        assert!(!Port::Generic.trades(Resource::Wheat));
        assert!(Port::Resource(Resource::Ore).trades(Resource::Ore));
    }

    #[test]
    fn test_port_overrides() {
        let topology = Topology::with_ports([(0, "ore"), (53, "3:1")]).unwrap();
        assert_eq!(topology.port(0), Some(Port::Resource(Resource::Ore)));
        assert_eq!(topology.port(53), Some(Port::Generic));
        assert_eq!(topology.port(15), None);

        assert_eq!(
            Topology::with_ports([(54, "3:1")]),
            Err(BoardError::UnknownNode { node: 54 })
        );
    }
}
