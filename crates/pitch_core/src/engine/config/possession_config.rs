//! Ball contest odds, loose-ball kicks and cooldown penalties

use crate::engine::physics_constants::{contest, cooldown};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PossessionConfig {
    /// Roll below this steals the ball from its owner
    pub steal_chance: f32,
    /// Roll below this (and not a steal) knocks the ball loose
    pub take_off_chance: f32,
    pub take_off_force: f32,
    pub take_off_spread: i32,
    pub dispute_force: f32,
    pub dispute_spread: i32,
    pub cooldowns: CooldownConfig,
}

impl Default for PossessionConfig {
    fn default() -> Self {
        Self {
            steal_chance: contest::STEAL_CHANCE,
            take_off_chance: contest::TAKE_OFF_CHANCE,
            take_off_force: contest::TAKE_OFF_FORCE,
            take_off_spread: contest::TAKE_OFF_SPREAD,
            dispute_force: contest::DISPUTE_FORCE,
            dispute_spread: contest::DISPUTE_SPREAD,
            cooldowns: CooldownConfig::default(),
        }
    }
}

/// Cooldown lengths in ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CooldownConfig {
    pub pass: f32,
    pub shoot: f32,
    pub failed_control: f32,
    pub disputed: f32,
    pub stolen_ball: f32,
    pub stolen_body: f32,
    pub take_off: f32,
    pub fail_defending_ball: f32,
    pub fail_defending_body: f32,
}

impl Default for CooldownConfig {
    fn default() -> Self {
        Self {
            pass: cooldown::BALL_PASS,
            shoot: cooldown::BALL_SHOOT,
            failed_control: cooldown::BALL_FAILED_CONTROL,
            disputed: cooldown::BALL_DISPUTED,
            stolen_ball: cooldown::BALL_STOLEN,
            stolen_body: cooldown::BODY_STOLEN,
            take_off: cooldown::BALL_TAKE_OFF,
            fail_defending_ball: cooldown::BALL_FAIL_DEFENDING,
            fail_defending_body: cooldown::BODY_FAIL_DEFENDING,
        }
    }
}
