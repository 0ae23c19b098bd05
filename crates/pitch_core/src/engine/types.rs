//! Small value types shared across the engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// A position or vector on the field.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Point) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Unit vector from `self` to `target`, or `None` when the points coincide.
    pub fn direction_to(self, target: Point) -> Option<Point> {
        let dx = target.x - self.x;
        let dy = target.y - self.y;
        let len = dx.hypot(dy);
        if len > 0.0 {
            Some(Point::new(dx / len, dy / len))
        } else {
            None
        }
    }

    pub fn offset(self, dx: f32, dy: f32) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

/// One of the two sides in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamId {
    #[serde(rename = "team_a")]
    A,
    #[serde(rename = "team_b")]
    B,
}

impl TeamId {
    pub const ALL: [TeamId; 2] = [TeamId::A, TeamId::B];

    pub fn opponent(self) -> Self {
        match self {
            TeamId::A => TeamId::B,
            TeamId::B => TeamId::A,
        }
    }

    /// Index into per-team arrays
    pub fn index(self) -> usize {
        match self {
            TeamId::A => 0,
            TeamId::B => 1,
        }
    }

    /// Goal this team defends
    pub fn defended_side(self) -> FieldSide {
        match self {
            TeamId::A => FieldSide::Left,
            TeamId::B => FieldSide::Right,
        }
    }

    /// Team whose goal is on `side`
    pub fn defending(side: FieldSide) -> Self {
        match side {
            FieldSide::Left => TeamId::A,
            FieldSide::Right => TeamId::B,
        }
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TeamId::A => write!(f, "Team A"),
            TeamId::B => write!(f, "Team B"),
        }
    }
}

/// Which goal line a player defends. Left is x = 0, Right is x = width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldSide {
    Left,
    Right,
}

impl FieldSide {
    pub fn opposite(self) -> Self {
        match self {
            FieldSide::Left => FieldSide::Right,
            FieldSide::Right => FieldSide::Left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_of_coincident_points_is_none() {
        let p = Point::new(3.0, 4.0);
        assert!(p.direction_to(p).is_none());
    }

    #[test]
    fn test_direction_is_unit_length() {
        let dir = Point::ZERO.direction_to(Point::new(3.0, 4.0)).unwrap();
        assert!((dir.length() - 1.0).abs() < 1e-6);
        assert!((dir.x - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_team_sides() {
        assert_eq!(TeamId::A.defended_side(), FieldSide::Left);
        assert_eq!(TeamId::B.opponent(), TeamId::A);
        assert_eq!(TeamId::B.defended_side().opposite(), FieldSide::Left);
    }
}
