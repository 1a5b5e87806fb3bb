use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::{
    board::{parse_holdings, Holdings, Resource, TileGrid, TileSpec},
    error::BoardError,
    topology::{NodeId, Topology},
};

/// A board as stored on disk: 19 tiles plus optional player context and
/// harbour layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardLayout {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub tiles: Vec<TileSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holdings: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ports: Option<BTreeMap<NodeId, String>>,
}

/// Validated pieces ready for the scorer.
#[derive(Debug, Clone)]
pub struct PreparedBoard {
    pub grid: TileGrid,
    pub topology: Topology,
    pub holdings: Option<Holdings>,
}

impl BoardLayout {
    /// The reference board used for demos and tests.
    pub fn sample() -> Self {
        use Resource::*;
        let tiles = [
            (Wood, 5),
            (Desert, 0),
            (Ore, 2),
            (Brick, 8),
            (Sheep, 10),
            (Wood, 9),
            (Ore, 6),
            (Wheat, 4),
            (Wood, 3),
            (Ore, 11),
            (Sheep, 4),
            (Wheat, 3),
            (Sheep, 11),
            (Brick, 6),
            (Wood, 5),
            (Wheat, 8),
            (Sheep, 12),
            (Brick, 9),
            (Ore, 10),
        ]
        .into_iter()
        .map(|(resource, roll)| TileSpec::new(resource, roll))
        .collect();

        Self {
            name: "sample".to_string(),
            description: Some("Reference board with the standard harbours".to_string()),
            tiles,
            holdings: None,
            ports: None,
        }
    }

    pub fn prepare(&self) -> Result<PreparedBoard, BoardError> {
        let grid = TileGrid::from_specs(&self.tiles)?;
        let topology = match &self.ports {
            Some(ports) => {
                Topology::with_ports(ports.iter().map(|(&node, label)| (node, label)))?
            }
            None => Topology::standard(),
        };
        let holdings = self.holdings.as_ref().map(parse_holdings).transpose()?;
        Ok(PreparedBoard {
            grid,
            topology,
            holdings,
        })
    }
}

pub struct LayoutLoader {
    base_dir: PathBuf,
}

impl LayoutLoader {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// Reads a layout; `.json` files are parsed as JSON, anything else as YAML.
    pub fn load(&self, file: impl AsRef<Path>) -> Result<BoardLayout> {
        let path = self.base_dir.join(file);
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read board layout {}", path.display()))?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let layout: BoardLayout = if is_json {
            serde_json::from_str(&data)
                .with_context(|| format!("Failed to parse {}", path.display()))?
        } else {
            serde_yaml::from_str(&data)
                .with_context(|| format!("Failed to parse {}", path.display()))?
        };
        Ok(layout)
    }
}
