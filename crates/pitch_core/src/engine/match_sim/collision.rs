//! Body separation
//!
//! Runs right after a player moves, against every other body in index order.
//! Players still to act this tick see the corrected positions.

use super::MatchEngine;
use crate::engine::types::Point;

/// Push `a` and `b` apart by half the overlap each. Coincident bodies are
/// left alone since there is no axis to separate them along.
pub(crate) fn separate(a: &mut Point, b: &mut Point, min_gap: f32) -> bool {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    let dist = (dx * dx + dy * dy).sqrt();
    if dist >= min_gap || dist <= 0.0 {
        return false;
    }

    let push = (min_gap - dist) * 0.5;
    let (nx, ny) = (dx / dist, dy / dist);
    a.x += nx * push;
    a.y += ny * push;
    b.x -= nx * push;
    b.y -= ny * push;
    true
}

impl MatchEngine {
    /// Separate player `idx` from everyone it overlaps.
    pub(crate) fn resolve_collisions(&mut self, idx: usize) {
        if self.players[idx].is_incapacitated() {
            return;
        }
        let min_gap = self.config.field.player_size * self.config.decision.collision_factor;

        for other in 0..self.players.len() {
            if other == idx || self.players[other].is_incapacitated() {
                continue;
            }
            let (lo, hi) = (idx.min(other), idx.max(other));
            let (head, tail) = self.players.split_at_mut(hi);
            let (a, b) = (&mut head[lo], &mut tail[0]);
            if separate(&mut a.position, &mut b.position, min_gap) {
                a.position = self.field.clamp_body(a.position);
                b.position = self.field.clamp_body(b.position);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_fixtures::*;
    use super::*;

    #[test]
    fn test_separate_is_symmetric() {
        let mut a = Point::new(100.0, 100.0);
        let mut b = Point::new(110.0, 100.0);
        assert!(separate(&mut a, &mut b, 22.8));
        assert!((a.x - 93.6).abs() < 1e-4);
        assert!((b.x - 116.4).abs() < 1e-4);
        assert!((a.distance_to(b) - 22.8).abs() < 1e-4);
    }

    #[test]
    fn test_separate_ignores_far_and_coincident() {
        let mut a = Point::new(100.0, 100.0);
        let mut b = Point::new(130.0, 100.0);
        assert!(!separate(&mut a, &mut b, 22.8));
        let mut c = a;
        assert!(!separate(&mut a, &mut c, 22.8));
        assert_eq!(a, c);
    }

    #[test]
    fn test_incapacitated_players_pass_through() {
        let mut engine = idle_engine(8);
        engine.players[1].position = Point::new(300.0, 200.0);
        engine.players[4].position = Point::new(305.0, 200.0);
        engine.players[4].body_cooldown = 10.0;
        engine.resolve_collisions(1);
        engine.resolve_collisions(4);
        assert_eq!(engine.players[1].position, Point::new(300.0, 200.0));

        engine.players[4].body_cooldown = 0.0;
        engine.resolve_collisions(4);
        assert!(engine.players[1].position.distance_to(engine.players[4].position) >= 22.8 - 1e-3);
    }

    #[test]
    fn test_only_the_moving_player_is_resolved() {
        let mut engine = idle_engine(8);
        engine.players[0].position = Point::new(100.0, 100.0);
        engine.players[1].position = Point::new(105.0, 100.0);
        engine.players[4].position = Point::new(500.0, 300.0);
        engine.players[5].position = Point::new(505.0, 300.0);

        engine.resolve_collisions(0);
        assert!(engine.players[0].position.distance_to(engine.players[1].position) >= 22.8 - 1e-3);
        // A pair not involving the mover is left for its own turn
        assert_eq!(engine.players[4].position, Point::new(500.0, 300.0));
        assert_eq!(engine.players[5].position, Point::new(505.0, 300.0));
    }
}
