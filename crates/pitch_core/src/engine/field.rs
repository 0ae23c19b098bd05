//! Field geometry
//!
//! x runs goal to goal, y runs touchline to touchline. The left goal line is
//! x = 0, the right goal line is x = width, and both goal mouths are centred
//! on y = height / 2.

use super::config::FieldConfig;
use super::types::{FieldSide, Point};
use serde::{Deserialize, Serialize};

// Zone thresholds as a share of the pitch measured from a side's own goal line
const NEAR_GOAL_SHARE: f32 = 0.3;
const HALF_SHARE_OWN: f32 = 0.51;
const HALF_SHARE_RIVAL: f32 = 0.49;

/// Which goal line a ball has gone over this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCrossing {
    /// Inside the goal mouth of the goal defended by this side
    Goal(FieldSide),
    /// Over the goal line but wide of the mouth
    Wide(FieldSide),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
    pub goal_size: f32,
    pub side_margin: f32,
    pub goal_line: f32,
    pub goal_target_inset: f32,
}

impl Field {
    pub fn from_config(cfg: &FieldConfig) -> Self {
        Self {
            width: cfg.width,
            height: cfg.height,
            goal_size: cfg.goal_size,
            side_margin: cfg.side_margin,
            goal_line: cfg.goal_line(),
            goal_target_inset: cfg.goal_target_inset,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.width * 0.5, self.height * 0.5)
    }

    /// Keep a body on the pitch: full goal axis, lateral axis inside the margin.
    pub fn clamp_body(&self, p: Point) -> Point {
        Point::new(p.x.clamp(0.0, self.width), self.clamp_lateral(p.y))
    }

    pub fn clamp_lateral(&self, y: f32) -> f32 {
        y.clamp(self.side_margin, self.height - self.side_margin)
    }

    /// Clamp to the full rectangle (used for assist targets).
    pub fn clamp_point(&self, p: Point) -> Point {
        Point::new(p.x.clamp(0.0, self.width), p.y.clamp(0.0, self.height))
    }

    pub fn contains(&self, p: Point) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }

    pub fn goal_mouth_bounds(&self) -> (f32, f32) {
        (
            (self.height - self.goal_size) * 0.5,
            (self.height + self.goal_size) * 0.5,
        )
    }

    /// Open interval: a ball exactly on a post is wide.
    pub fn in_goal_mouth(&self, y: f32) -> bool {
        let (low, high) = self.goal_mouth_bounds();
        y > low && y < high
    }

    pub fn line_crossing(&self, ball: Point) -> Option<LineCrossing> {
        let side = if ball.x < self.goal_line {
            FieldSide::Left
        } else if ball.x > self.width - self.goal_line {
            FieldSide::Right
        } else {
            return None;
        };
        if self.in_goal_mouth(ball.y) {
            Some(LineCrossing::Goal(side))
        } else {
            Some(LineCrossing::Wide(side))
        }
    }

    /// x of the goal line on `side`
    pub fn goal_line_x(&self, side: FieldSide) -> f32 {
        match side {
            FieldSide::Left => 0.0,
            FieldSide::Right => self.width,
        }
    }

    /// x a player heads for when running at the goal on `side`.
    pub fn goal_target_x(&self, side: FieldSide) -> f32 {
        match side {
            FieldSide::Left => self.goal_target_inset,
            FieldSide::Right => self.width - self.goal_target_inset,
        }
    }

    /// Share of the pitch between `side`'s goal line and `x` (0 at own line, 1 at the other).
    pub fn depth_share(&self, side: FieldSide, x: f32) -> f32 {
        let share = x / self.width;
        match side {
            FieldSide::Left => share,
            FieldSide::Right => 1.0 - share,
        }
    }

    pub fn near_own_goal(&self, side: FieldSide, p: Point) -> bool {
        self.depth_share(side, p.x) < NEAR_GOAL_SHARE
    }

    pub fn in_own_half(&self, side: FieldSide, p: Point) -> bool {
        self.depth_share(side, p.x) < HALF_SHARE_OWN
    }

    pub fn in_rival_half(&self, side: FieldSide, p: Point) -> bool {
        self.depth_share(side, p.x) > HALF_SHARE_RIVAL
    }

    pub fn near_rival_goal(&self, side: FieldSide, p: Point) -> bool {
        self.depth_share(side, p.x) > 1.0 - NEAR_GOAL_SHARE
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::from_config(&FieldConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_mouth_is_open_interval() {
        let field = Field::default();
        assert!(field.in_goal_mouth(200.0));
        assert!(!field.in_goal_mouth(140.0));
        assert!(field.in_goal_mouth(140.5));
        assert!(!field.in_goal_mouth(260.0));
    }

    #[test]
    fn test_line_crossing() {
        let field = Field::default();
        assert_eq!(field.line_crossing(Point::new(400.0, 200.0)), None);
        assert_eq!(
            field.line_crossing(Point::new(21.0, 200.0)),
            Some(LineCrossing::Goal(FieldSide::Left))
        );
        assert_eq!(
            field.line_crossing(Point::new(790.0, 30.0)),
            Some(LineCrossing::Wide(FieldSide::Right))
        );
    }

    #[test]
    fn test_zone_predicates_mirror() {
        let field = Field::default();
        let deep_left = Point::new(100.0, 200.0);
        assert!(field.near_own_goal(FieldSide::Left, deep_left));
        assert!(field.near_rival_goal(FieldSide::Right, deep_left));
        assert!(!field.in_rival_half(FieldSide::Left, deep_left));

        // Both halves overlap slightly around the halfway line
        let halfway = field.center();
        assert!(field.in_own_half(FieldSide::Left, halfway));
        assert!(field.in_rival_half(FieldSide::Left, halfway));
    }

    #[test]
    fn test_clamp_body_keeps_lateral_margin() {
        let field = Field::default();
        let p = field.clamp_body(Point::new(-5.0, 399.0));
        assert_eq!(p, Point::new(0.0, 390.0));
    }
}
