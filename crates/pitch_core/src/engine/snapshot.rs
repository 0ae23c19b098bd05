//! Per-tick replay records

use super::types::Point;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRenderData {
    pub x: f32,
    pub y: f32,
    /// Label of the condition whose rule fired this tick, if any
    pub condition: Option<String>,
    pub ball_cooldown: f32,
    pub body_cooldown: f32,
    pub marked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRenderData {
    pub goalkeeper: PlayerRenderData,
    pub defender: PlayerRenderData,
    pub striker: PlayerRenderData,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallRenderData {
    pub x: f32,
    pub y: f32,
}

impl From<Point> for BallRenderData {
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

/// One history entry. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickSnapshot {
    pub tick: u64,
    pub ball: BallRenderData,
    pub team_a: TeamRenderData,
    pub team_b: TeamRenderData,
    pub logs: Vec<String>,
}
