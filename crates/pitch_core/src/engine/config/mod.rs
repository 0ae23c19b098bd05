//! # Engine Configuration
//!
//! All tuning values used by the match loop live here, grouped by concern.
//!
//! ## Usage
//! ```rust
//! use pitch_core::engine::config::EngineConfig;
//!
//! let config = EngineConfig::default();
//! let compact = EngineConfig::compact();
//! assert!(compact.decision.near_radius_factor < config.decision.near_radius_factor);
//! ```
//!
//! ## Environment Variables
//!
//! - `PITCH_PROFILE`: select a preset (`compact`, anything else = default)

mod decision_config;
mod physics_config;
mod possession_config;

pub use decision_config::DecisionConfig;
pub use physics_config::{FieldConfig, PhysicsConfig};
pub use possession_config::{CooldownConfig, PossessionConfig};

use crate::error::{MatchError, Result};
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub field: FieldConfig,
    pub physics: PhysicsConfig,
    pub possession: PossessionConfig,
    pub decision: DecisionConfig,
}

impl EngineConfig {
    /// Compact rule set (shorter "rival near" radius)
    pub fn compact() -> Self {
        Self {
            decision: DecisionConfig::compact(),
            ..Self::default()
        }
    }

    /// Preset by name; unknown names fall back to the default profile.
    pub fn from_profile(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "compact" => Self::compact(),
            _ => Self::default(),
        }
    }

    /// Load from environment variable PITCH_PROFILE or use default
    pub fn from_env_or_default() -> Self {
        Self::from_profile(&env::var("PITCH_PROFILE").unwrap_or_default())
    }

    /// Parse a YAML override. Omitted fields keep their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: EngineConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Every float must be finite and non-negative before the range checks run.
    pub fn validate(&self) -> Result<()> {
        self.check_magnitudes()?;

        let f = &self.field;
        if !(f.width > 0.0 && f.height > 0.0) {
            return Err(invalid(format!(
                "field must have positive size, got {}x{}",
                f.width, f.height
            )));
        }
        if !(f.player_size > 0.0) {
            return Err(invalid("player_size must be positive"));
        }
        if !(f.goal_size > 0.0 && f.goal_size < f.height) {
            return Err(invalid(format!(
                "goal_size {} must be in (0, height {})",
                f.goal_size, f.height
            )));
        }
        if f.side_margin * 2.0 >= f.height {
            return Err(invalid("side_margin must leave room on the lateral axis"));
        }
        if f.goal_line() * 2.0 >= f.width {
            return Err(invalid("goal line slack leaves no playable width"));
        }

        let p = &self.physics;
        if !(p.tick_dt > 0.0) {
            return Err(invalid("tick_dt must be positive"));
        }
        if !(p.max_speed > 0.0 && p.acceleration > 0.0 && p.deceleration > 0.0) {
            return Err(invalid("speeds must be positive"));
        }
        if !(0.0..=1.0).contains(&p.ball_decay) || !(0.0..=1.0).contains(&p.stop_damping) {
            return Err(invalid("decay factors must be within 0..=1"));
        }

        let c = &self.possession;
        if !(0.0..=1.0).contains(&c.steal_chance)
            || !(0.0..=1.0).contains(&c.take_off_chance)
            || c.steal_chance > c.take_off_chance
        {
            return Err(invalid(format!(
                "contest chances must satisfy 0 <= steal ({}) <= take_off ({}) <= 1",
                c.steal_chance, c.take_off_chance
            )));
        }
        if c.take_off_spread < 0 || c.dispute_spread < 0 {
            return Err(invalid("kick spreads must not be negative"));
        }

        let d = &self.decision;
        if d.flank_jitter_min > d.flank_jitter_max {
            return Err(invalid("flank jitter range is empty"));
        }
        if !(0.0..0.5).contains(&d.interception_margin) {
            return Err(invalid("interception_margin must be within 0..0.5"));
        }
        Ok(())
    }

    fn check_magnitudes(&self) -> Result<()> {
        let (f, p, c, d) = (&self.field, &self.physics, &self.possession, &self.decision);
        let cd = &c.cooldowns;
        let fields = [
            ("field.width", f.width),
            ("field.height", f.height),
            ("field.player_size", f.player_size),
            ("field.goal_size", f.goal_size),
            ("field.side_margin", f.side_margin),
            ("field.goal_line_slack", f.goal_line_slack),
            ("field.goal_target_inset", f.goal_target_inset),
            ("physics.tick_dt", p.tick_dt),
            ("physics.ball_decay", p.ball_decay),
            ("physics.fast_ball_speed", p.fast_ball_speed),
            ("physics.rebound_factor", p.rebound_factor),
            ("physics.max_speed", p.max_speed),
            ("physics.acceleration", p.acceleration),
            ("physics.deceleration", p.deceleration),
            ("physics.stop_threshold", p.stop_threshold),
            ("physics.stop_damping", p.stop_damping),
            ("physics.velocity_snap", p.velocity_snap),
            ("physics.reversal_deadband", p.reversal_deadband),
            ("physics.desired_tolerance", p.desired_tolerance),
            ("possession.steal_chance", c.steal_chance),
            ("possession.take_off_chance", c.take_off_chance),
            ("possession.take_off_force", c.take_off_force),
            ("possession.dispute_force", c.dispute_force),
            ("possession.cooldowns.pass", cd.pass),
            ("possession.cooldowns.shoot", cd.shoot),
            ("possession.cooldowns.failed_control", cd.failed_control),
            ("possession.cooldowns.disputed", cd.disputed),
            ("possession.cooldowns.stolen_ball", cd.stolen_ball),
            ("possession.cooldowns.stolen_body", cd.stolen_body),
            ("possession.cooldowns.take_off", cd.take_off),
            ("possession.cooldowns.fail_defending_ball", cd.fail_defending_ball),
            ("possession.cooldowns.fail_defending_body", cd.fail_defending_body),
            ("decision.marked_radius_factor", d.marked_radius_factor),
            ("decision.near_radius_factor", d.near_radius_factor),
            ("decision.collision_factor", d.collision_factor),
            ("decision.assist_distance", d.assist_distance),
            ("decision.interception_distance", d.interception_distance),
            ("decision.interception_margin", d.interception_margin),
            ("decision.pass_base_force", d.pass_base_force),
            ("decision.pass_force_per_unit", d.pass_force_per_unit),
            ("decision.pass_force_cap", d.pass_force_cap),
            ("decision.shot_force", d.shot_force),
            ("decision.shot_spread", d.shot_spread),
            ("decision.flank_low", d.flank_low),
            ("decision.flank_high", d.flank_high),
        ];

        match fields
            .iter()
            .find(|(_, v)| !(v.is_finite() && *v >= 0.0))
        {
            Some((name, v)) => Err(invalid(format!(
                "{name} must be a finite, non-negative number, got {v}"
            ))),
            None => Ok(()),
        }
    }
}

impl FieldConfig {
    /// Distance from either short edge at which the ball counts as over the line.
    pub fn goal_line(&self) -> f32 {
        self.player_size * 0.5 + self.goal_line_slack
    }
}

fn invalid(msg: impl Into<String>) -> MatchError {
    MatchError::InvalidConfig(msg.into())
}
