//! Field geometry and motion tuning

use crate::engine::physics_constants::{ball, field, movement};
use serde::{Deserialize, Serialize};

/// Field dimensions and the derived goal geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub width: f32,
    pub height: f32,
    pub player_size: f32,
    pub goal_size: f32,
    /// Lateral margin kept free on both touchlines
    pub side_margin: f32,
    pub goal_line_slack: f32,
    pub goal_target_inset: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: field::WIDTH,
            height: field::HEIGHT,
            player_size: field::PLAYER_SIZE,
            goal_size: field::GOAL_SIZE,
            side_margin: field::SIDE_MARGIN,
            goal_line_slack: field::GOAL_LINE_SLACK,
            goal_target_inset: field::GOAL_TARGET_INSET,
        }
    }
}

/// Ball friction and the player inertia model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Simulated time per tick
    pub tick_dt: f32,
    pub ball_decay: f32,
    pub fast_ball_speed: f32,
    pub rebound_factor: f32,
    pub max_speed: f32,
    pub acceleration: f32,
    pub deceleration: f32,
    pub stop_threshold: f32,
    pub stop_damping: f32,
    pub velocity_snap: f32,
    pub reversal_deadband: f32,
    pub desired_tolerance: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            tick_dt: 1.0,
            ball_decay: ball::DECAY,
            fast_ball_speed: ball::FAST_BALL_SPEED,
            rebound_factor: ball::REBOUND_FACTOR,
            max_speed: movement::MAX_SPEED,
            acceleration: movement::ACCELERATION,
            deceleration: movement::DECELERATION,
            stop_threshold: movement::STOP_THRESHOLD,
            stop_damping: movement::STOP_DAMPING,
            velocity_snap: movement::VELOCITY_SNAP,
            reversal_deadband: movement::REVERSAL_DEADBAND,
            desired_tolerance: movement::DESIRED_TOLERANCE,
        }
    }
}
