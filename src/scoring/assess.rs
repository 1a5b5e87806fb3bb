use crate::board::{Holdings, Resource, Tile};
use crate::topology::Port;

use super::weights::{
    self, DIVERSITY_BONUS, MATCHING_PORT_BONUS, PORT_BONUS, SECOND_OF_KIND, THIRD_OF_KIND,
};

/// Production figures for one node, counted over its non-desert tiles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductionStats {
    pub dots: u32,
    pub high: u32,
    pub mid: u32,
    pub low: u32,
    /// Distinct resources with their tile counts, in order of first appearance.
    pub resources: Vec<(Resource, usize)>,
}

impl ProductionStats {
    pub fn analyze(tiles: &[Tile]) -> Self {
        let mut stats = Self::default();
        for tile in tiles.iter().filter(|tile| !tile.resource.is_desert()) {
            match stats
                .resources
                .iter_mut()
                .find(|(resource, _)| *resource == tile.resource)
            {
                Some((_, count)) => *count += 1,
                None => stats.resources.push((tile.resource, 1)),
            }
            stats.dots += tile.dots();
            if weights::is_high_roll(tile.roll) {
                stats.high += 1;
            } else if weights::is_mid_roll(tile.roll) {
                stats.mid += 1;
            } else if weights::is_low_roll(tile.roll) {
                stats.low += 1;
            }
        }
        stats
    }

    pub fn diversity(&self) -> usize {
        self.resources.len()
    }

    pub fn distinct(&self) -> impl Iterator<Item = Resource> + '_ {
        self.resources.iter().map(|(resource, _)| *resource)
    }

    pub fn touches(&self, resource: Resource) -> bool {
        self.distinct().any(|own| own == resource)
    }
}

/// Everything derived for one node on one board. Descriptions are built from
/// this record, never by re-reading the tiles.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeAssessment {
    pub raw_score: f64,
    pub tile_count: usize,
    pub stats: ProductionStats,
    pub port: Option<Port>,
    pub port_match: bool,
    /// Resources the player lacks; `None` when no holdings were supplied.
    pub new_resources: Option<Vec<Resource>>,
}

impl NodeAssessment {
    pub fn score(&self) -> f64 {
        weights::round_to_tenth(self.raw_score)
    }
}

pub fn assess_node(
    tiles: &[Tile],
    port: Option<Port>,
    holdings: Option<&Holdings>,
) -> NodeAssessment {
    let stats = ProductionStats::analyze(tiles);
    let mut score = production_value(tiles);

    let mut port_match = false;
    if let Some(port) = port {
        score += PORT_BONUS;
        if let Port::Resource(resource) = port {
            if stats.touches(resource) {
                port_match = true;
                score += MATCHING_PORT_BONUS;
            }
        }
    }

    let new_resources = holdings.map(|held| {
        stats
            .distinct()
            .filter(|resource| !held.contains(resource))
            .collect::<Vec<_>>()
    });
    if let Some(found) = &new_resources {
        score += found.len() as f64 * DIVERSITY_BONUS;
    }

    NodeAssessment {
        raw_score: score,
        tile_count: tiles.len(),
        stats,
        port,
        port_match,
        new_resources,
    }
}

/// Weighted production with diminishing returns on repeated resources.
fn production_value(tiles: &[Tile]) -> f64 {
    let group = largest_group(tiles);
    match group.len() {
        3 => {
            let mut sorted = tiles.to_vec();
            sorted.sort_by(|a, b| b.dots().cmp(&a.dots()));
            sorted[0].value()
                + sorted[1].value() * SECOND_OF_KIND
                + sorted[2].value() * THIRD_OF_KIND
        }
        2 => {
            let (first, second) = (tiles[group[0]], tiles[group[1]]);
            let (best, other) = if first.dots() >= second.dots() {
                (first, second)
            } else {
                (second, first)
            };
            let rest: f64 = tiles
                .iter()
                .enumerate()
                .filter(|(index, _)| !group.contains(index))
                .map(|(_, tile)| tile.value())
                .sum();
            best.value() + other.value() * SECOND_OF_KIND + rest
        }
        _ => tiles.iter().map(Tile::value).sum(),
    }
}

/// Indices of the largest same-resource group (desert ignored), empty unless
/// at least two tiles share a resource.
fn largest_group(tiles: &[Tile]) -> Vec<usize> {
    let mut groups: Vec<(Resource, Vec<usize>)> = Vec::new();
    for (index, tile) in tiles.iter().enumerate() {
        if tile.resource.is_desert() {
            continue;
        }
        match groups.iter_mut().find(|(resource, _)| *resource == tile.resource) {
            Some((_, members)) => members.push(index),
            None => groups.push((tile.resource, vec![index])),
        }
    }

    let mut best: Vec<usize> = Vec::new();
    for (_, members) in groups {
        if members.len() > best.len() {
            best = members;
        }
    }
    if best.len() > 1 {
        best
    } else {
        Vec::new()
    }
}
