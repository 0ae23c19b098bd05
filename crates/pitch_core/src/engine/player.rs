//! Player entity
//!
//! A `MatchPlayer` carries everything the match loop mutates per tick:
//! kinematics, cooldowns, per-tick flags, its rule book and running stats.

use super::config::PhysicsConfig;
use super::movement;
use super::rules::{Action, Condition, RuleBook};
use super::snapshot::PlayerRenderData;
use super::stats::PlayerStats;
use super::types::{FieldSide, Point, TeamId};
use serde::{Deserialize, Serialize};

/// Slot within a three-player roster. The slot order is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Goalkeeper,
    Defender,
    Striker,
}

impl Role {
    pub const ORDER: [Role; 3] = [Role::Goalkeeper, Role::Defender, Role::Striker];

    pub fn from_slot(slot: usize) -> Option<Role> {
        Role::ORDER.get(slot).copied()
    }
}

#[derive(Debug, Clone)]
pub struct MatchPlayer {
    pub team: TeamId,
    pub role: Role,
    pub name: String,

    pub position: Point,
    pub velocity: Point,
    pub target: Option<Point>,

    /// Ticks until the player may touch the ball again
    pub ball_cooldown: f32,
    /// Ticks the player stays incapacitated
    pub body_cooldown: f32,

    pub has_ball: bool,
    pub marked: bool,
    pub opponent_near: bool,

    pub home_zone: Point,
    pub side: FieldSide,
    pub rules: RuleBook,
    pub default_action: Action,
    pub current_action: Action,
    pub current_condition: Option<Condition>,

    pub stats: PlayerStats,
}

impl MatchPlayer {
    pub fn new(
        team: TeamId,
        role: Role,
        name: impl Into<String>,
        position: Point,
        home_zone: Point,
        rules: RuleBook,
    ) -> Self {
        Self {
            team,
            role,
            name: name.into(),
            position,
            velocity: Point::ZERO,
            target: Some(home_zone),
            ball_cooldown: 0.0,
            body_cooldown: 0.0,
            has_ball: false,
            marked: false,
            opponent_near: false,
            home_zone,
            side: team.defended_side(),
            rules,
            default_action: Action::HoldZone,
            current_action: Action::HoldZone,
            current_condition: None,
            stats: PlayerStats::default(),
        }
    }

    /// Excluded from collisions, contests and opponent sets.
    pub fn is_incapacitated(&self) -> bool {
        self.body_cooldown > 0.0
    }

    pub fn can_touch_ball(&self) -> bool {
        self.ball_cooldown <= 0.0
    }

    pub fn distance_to(&self, p: Point) -> f32 {
        self.position.distance_to(p)
    }

    /// Cooldowns first, then movement, so a cooldown expiring this tick
    /// already lets the player move.
    pub fn update(&mut self, physics: &PhysicsConfig, dt: f32) {
        if self.ball_cooldown > 0.0 {
            self.ball_cooldown -= dt;
        }
        if self.body_cooldown > 0.0 {
            self.body_cooldown -= dt;
        }
        movement::move_toward(self, physics, dt);
    }

    pub fn render_data(&self) -> PlayerRenderData {
        PlayerRenderData {
            x: self.position.x,
            y: self.position.y,
            condition: self.current_condition.map(|c| c.label().to_string()),
            ball_cooldown: self.ball_cooldown,
            body_cooldown: self.body_cooldown,
            marked: self.marked,
        }
    }
}
