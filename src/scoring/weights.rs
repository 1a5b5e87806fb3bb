//! Scoring constants shared by every node.

use crate::board::Resource;

/// Multiplier for the second tile of the same resource on one node.
pub const SECOND_OF_KIND: f64 = 0.90;
/// Multiplier for the third tile of the same resource on one node.
pub const THIRD_OF_KIND: f64 = 0.75;

pub const PORT_BONUS: f64 = 1.0;
pub const MATCHING_PORT_BONUS: f64 = 1.0;
/// Per resource the player does not produce yet.
pub const DIVERSITY_BONUS: f64 = 2.5;

pub fn resource_value(resource: Resource) -> f64 {
    match resource {
        Resource::Wood | Resource::Brick => 1.2,
        Resource::Ore | Resource::Wheat => 1.1,
        Resource::Sheep => 1.0,
        Resource::Desert => 0.0,
    }
}

/// Number of two-dice combinations that produce `roll` ("dots" on the token).
pub fn dot_weight(roll: u8) -> u32 {
    match roll {
        6 | 8 => 5,
        5 | 9 => 4,
        4 | 10 => 3,
        3 | 11 => 2,
        2 | 12 => 1,
        _ => 0,
    }
}

pub fn is_high_roll(roll: u8) -> bool {
    matches!(roll, 6 | 8)
}

pub fn is_mid_roll(roll: u8) -> bool {
    matches!(roll, 4 | 5 | 9 | 10)
}

pub fn is_low_roll(roll: u8) -> bool {
    matches!(roll, 2 | 3 | 11 | 12)
}

/// Rounds to one decimal using the exact binary value, so 10.85 (stored just
/// below .85) becomes 10.8.
pub fn round_to_tenth(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_weights_are_symmetric() {
        for roll in 2..=6u8 {
            assert_eq!(dot_weight(roll), dot_weight(14 - roll));
        }
        assert_eq!(dot_weight(7), 0);
        assert_eq!(dot_weight(0), 0);
        assert_eq!((2..=12).map(dot_weight).sum::<u32>(), 30);
    }

    #[test]
    fn test_roll_bands_are_disjoint() {
        for roll in 0..=12u8 {
            let bands = [is_high_roll(roll), is_mid_roll(roll), is_low_roll(roll)];
            assert!(bands.iter().filter(|&&b| b).count() <= 1);
        }
    }

    #[test]
    fn test_round_to_tenth() {
        assert_eq!(round_to_tenth(11.935), 11.9);
        assert_eq!(round_to_tenth(5.0 + 3.6 + 2.25), 10.8);
        assert_eq!(round_to_tenth(4.96), 5.0);
        assert_eq!(round_to_tenth(0.0), 0.0);
    }
}
