//! Rule evaluation radii and action tuning

use crate::engine::physics_constants::decision;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionConfig {
    pub marked_radius_factor: f32,
    pub near_radius_factor: f32,
    pub collision_factor: f32,
    pub assist_distance: f32,
    pub interception_distance: f32,
    pub interception_margin: f32,
    pub pass_base_force: f32,
    pub pass_force_per_unit: f32,
    pub pass_force_cap: f32,
    pub shot_force: f32,
    pub shot_spread: f32,
    pub flank_low: f32,
    pub flank_high: f32,
    pub flank_jitter_min: i32,
    pub flank_jitter_max: i32,
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            marked_radius_factor: decision::MARKED_RADIUS_FACTOR,
            near_radius_factor: decision::NEAR_RADIUS_FACTOR,
            collision_factor: decision::COLLISION_FACTOR,
            assist_distance: decision::ASSIST_DISTANCE,
            interception_distance: decision::INTERCEPTION_DISTANCE,
            interception_margin: decision::INTERCEPTION_MARGIN,
            pass_base_force: decision::PASS_BASE_FORCE,
            pass_force_per_unit: decision::PASS_FORCE_PER_UNIT,
            pass_force_cap: decision::PASS_FORCE_CAP,
            shot_force: decision::SHOT_FORCE,
            shot_spread: decision::SHOT_SPREAD,
            flank_low: decision::FLANK_LOW,
            flank_high: decision::FLANK_HIGH,
            flank_jitter_min: decision::FLANK_JITTER_MIN,
            flank_jitter_max: decision::FLANK_JITTER_MAX,
        }
    }
}

impl DecisionConfig {
    /// Compact rule set: rivals only count as "near" at half the default range.
    pub fn compact() -> Self {
        Self {
            near_radius_factor: decision::NEAR_RADIUS_FACTOR_COMPACT,
            ..Self::default()
        }
    }

    /// Pass impulse for a receiver `distance` away from the ball.
    pub fn pass_force(&self, distance: f32) -> f32 {
        self.pass_base_force + (distance * self.pass_force_per_unit).min(self.pass_force_cap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_force_is_capped() {
        let cfg = DecisionConfig::default();
        assert!((cfg.pass_force(0.0) - 2.0).abs() < 1e-6);
        assert!((cfg.pass_force(100.0) - 3.0).abs() < 1e-6);
        assert!((cfg.pass_force(10_000.0) - 6.0).abs() < 1e-6);
    }

    #[test]
    fn test_compact_only_changes_near_radius() {
        let compact = DecisionConfig::compact();
        let default = DecisionConfig::default();
        assert_eq!(compact.near_radius_factor, 3.0);
        assert_eq!(compact.marked_radius_factor, default.marked_radius_factor);
    }
}
