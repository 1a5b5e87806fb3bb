use crate::board::Tile;
use crate::topology::Port;

use super::assess::{NodeAssessment, ProductionStats};

pub const DESERT_LOCATION: &str = "Desert location";

/// Capitalized resources touched by `tiles`, e.g. `Wood (x2), Brick`.
pub fn resource_summary(tiles: &[Tile]) -> String {
    summarize(&ProductionStats::analyze(tiles))
}

pub(crate) fn summarize(stats: &ProductionStats) -> String {
    if stats.resources.is_empty() {
        return DESERT_LOCATION.to_string();
    }
    stats
        .resources
        .iter()
        .map(|(resource, count)| {
            if *count > 1 {
                format!("{} (x{count})", resource.title())
            } else {
                resource.title().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Strategic description of a node, built from its assessment.
pub fn describe(assessment: &NodeAssessment) -> String {
    let stats = &assessment.stats;
    if stats.dots == 0 {
        return match assessment.port {
            Some(port) => format!("No production. Offers {} port access.", port.title()),
            None => "No production.".to_string(),
        };
    }

    let summary = summarize(stats);
    let mut parts = Vec::new();

    if stats.high >= 2 {
        parts.push(format!(
            "Excellent Numbers: Touches two high-prob tiles ({summary})."
        ));
    } else if stats.high == 1 {
        parts.push(format!(
            "Strong Production: Built on {summary} with a 6 or 8."
        ));
    } else if stats.mid > stats.low {
        parts.push(format!(
            "Good Production: Solid mid-range numbers on {summary}."
        ));
    } else {
        parts.push(format!("Modest Production: Relies on {summary}."));
    }

    match stats.diversity() {
        3 => parts.push("PRO: High resource diversity.".to_string()),
        1 if assessment.tile_count > 1 => {
            parts.push("CON: Relies heavily on one resource.".to_string())
        }
        _ => {}
    }

    if let Some(port) = assessment.port {
        if assessment.port_match {
            parts.push(format!("PRO: Excellent {} port synergy!", port.title()));
        } else if port == Port::Generic {
            parts.push("PRO: Valuable 3:1 port access.".to_string());
        } else {
            parts.push(format!("PRO: Access to {} port.", port.title()));
        }
    }

    if stats.low > 0 && stats.high == 0 {
        parts.push(format!(
            "CON: Risky, relies on {} low-prob number(s).",
            stats.low
        ));
    }

    if let Some(found) = assessment.new_resources.as_deref() {
        if !found.is_empty() {
            let needed = found
                .iter()
                .map(|resource| resource.title())
                .collect::<Vec<_>>()
                .join(", ");
            parts.push(format!("STRATEGIC FIT: Offers needed {needed}."));
        }
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Holdings, Resource::*};
    use crate::scoring::assess::assess_node;

    #[test]
    fn test_summary_counts_repeats() {
        let tiles = [Tile::new(Wood, 6), Tile::new(Wood, 3), Tile::new(Brick, 9)];
        assert_eq!(resource_summary(&tiles), "Wood (x2), Brick");
        assert_eq!(resource_summary(&[Tile::desert()]), DESERT_LOCATION);
    }

    #[test]
    fn test_no_production_text() {
        let quiet = assess_node(&[Tile::desert()], None, None);
        assert_eq!(describe(&quiet), "No production.");

        let harbour = assess_node(&[Tile::new(Wheat, 0)], Some(Port::Resource(Wheat)), None);
        assert_eq!(describe(&harbour), "No production. Offers Wheat port access.");

        let generic = assess_node(&[Tile::desert()], Some(Port::Generic), None);
        assert_eq!(describe(&generic), "No production. Offers 3:1 port access.");
    }

    #[test]
    fn test_excellent_with_diversity() {
        let tiles = [Tile::new(Ore, 6), Tile::new(Wheat, 8), Tile::new(Sheep, 5)];
        let text = describe(&assess_node(&tiles, None, None));
        assert_eq!(
            text,
            "Excellent Numbers: Touches two high-prob tiles (Ore, Wheat, Sheep). \
             PRO: High resource diversity."
        );
    }

    #[test]
    fn test_concentration_and_risk() {
        let tiles = [Tile::new(Brick, 3), Tile::new(Brick, 12)];
        let text = describe(&assess_node(&tiles, None, None));
        assert_eq!(
            text,
            "Modest Production: Relies on Brick (x2). \
             CON: Relies heavily on one resource. \
             CON: Risky, relies on 2 low-prob number(s)."
        );
    }

    #[test]
    fn test_good_production_needs_more_mid_than_low() {
        let tiles = [Tile::new(Wood, 5), Tile::new(Sheep, 2)];
        let text = describe(&assess_node(&tiles, None, None));
        assert!(text.starts_with("Modest Production"), "{text}");

        let tiles = [Tile::new(Wood, 5), Tile::new(Sheep, 9), Tile::new(Ore, 2)];
        let text = describe(&assess_node(&tiles, None, None));
        assert!(text.starts_with("Good Production: Solid mid-range numbers on Wood, Sheep, Ore."));
    }

    #[test]
    fn test_port_clauses() {
        let tiles = [Tile::new(Sheep, 8)];
        let synergy = describe(&assess_node(&tiles, Some(Port::Resource(Sheep)), None));
        assert_eq!(
            synergy,
            "Strong Production: Built on Sheep with a 6 or 8. PRO: Excellent Sheep port synergy!"
        );

        let generic = describe(&assess_node(&tiles, Some(Port::Generic), None));
        assert!(generic.ends_with("PRO: Valuable 3:1 port access."));

        let other = describe(&assess_node(&tiles, Some(Port::Resource(Ore)), None));
        assert!(other.ends_with("PRO: Access to Ore port."));
    }

    #[test]
    fn test_strategic_fit_is_last() {
        let tiles = [Tile::new(Ore, 11), Tile::new(Wheat, 10)];
        let held: Holdings = [Wheat].into_iter().collect();
        let text = describe(&assess_node(&tiles, Some(Port::Generic), Some(&held)));
        assert!(text.ends_with("STRATEGIC FIT: Offers needed Ore."), "{text}");

        let everything: Holdings = [Ore, Wheat].into_iter().collect();
        let text = describe(&assess_node(&tiles, None, Some(&everything)));
        assert!(!text.contains("STRATEGIC FIT"));
    }
}
