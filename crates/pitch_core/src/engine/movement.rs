//! Inertia-based player movement
//!
//! Not rigid-body physics: each axis independently accelerates toward the
//! desired velocity, and reversing direction on an axis first has to bleed
//! off the existing speed at the deceleration rate.

use super::config::PhysicsConfig;
use super::player::MatchPlayer;
use super::types::Point;

#[inline]
fn sign(v: f32) -> f32 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// One axis of the velocity update.
pub fn approach_axis(current: f32, desired: f32, cfg: &PhysicsConfig, dt: f32) -> f32 {
    let reversing = sign(current) != sign(desired) && current.abs() > cfg.reversal_deadband;
    if reversing {
        current - sign(current) * cfg.deceleration * dt
    } else if (current - desired).abs() > cfg.desired_tolerance {
        current + sign(desired - current) * cfg.acceleration * dt
    } else {
        current
    }
}

/// Damp a velocity while standing on the target; small components snap to zero.
pub fn brake(velocity: &mut Point, cfg: &PhysicsConfig) {
    velocity.x *= cfg.stop_damping;
    velocity.y *= cfg.stop_damping;
    if velocity.x.abs() < cfg.velocity_snap {
        velocity.x = 0.0;
    }
    if velocity.y.abs() < cfg.velocity_snap {
        velocity.y = 0.0;
    }
}

/// Advance a player toward its target and record the distance covered.
pub fn move_toward(player: &mut MatchPlayer, cfg: &PhysicsConfig, dt: f32) {
    let Some(target) = player.target else {
        return;
    };
    if player.is_incapacitated() {
        return;
    }

    let dx = target.x - player.position.x;
    let dy = target.y - player.position.y;
    let dist = dx.hypot(dy);

    if dist < cfg.stop_threshold {
        brake(&mut player.velocity, cfg);
        if player.velocity.x == 0.0 && player.velocity.y == 0.0 {
            player.target = None;
        }
        return;
    }

    let desired = Point::new(dx / dist * cfg.max_speed, dy / dist * cfg.max_speed);
    player.velocity.x = approach_axis(player.velocity.x, desired.x, cfg, dt);
    player.velocity.y = approach_axis(player.velocity.y, desired.y, cfg, dt);

    let step = Point::new(player.velocity.x * dt, player.velocity.y * dt);
    let moved = step.length();
    player.stats.distance_traveled += moved;
    if player.has_ball {
        player.stats.distance_with_ball += moved;
    }
    player.position = player.position.offset(step.x, step.y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::player::Role;
    use crate::engine::rules::RuleBook;
    use crate::engine::types::TeamId;

    fn runner(at: Point, target: Point) -> MatchPlayer {
        let mut p = MatchPlayer::new(TeamId::A, Role::Defender, "Runner", at, target, RuleBook::default());
        p.target = Some(target);
        p
    }

    #[test]
    fn test_accelerates_from_rest() {
        let cfg = PhysicsConfig::default();
        let mut p = runner(Point::new(100.0, 100.0), Point::new(200.0, 100.0));
        move_toward(&mut p, &cfg, 1.0);
        assert!((p.velocity.x - 0.2).abs() < 1e-6);
        assert_eq!(p.velocity.y, 0.0);
        assert!((p.position.x - 100.2).abs() < 1e-4);
        assert!((p.stats.distance_traveled - 0.2).abs() < 1e-6);
        assert_eq!(p.stats.distance_with_ball, 0.0);
    }

    #[test]
    fn test_speed_converges_to_max() {
        let cfg = PhysicsConfig::default();
        let mut p = runner(Point::new(0.0, 100.0), Point::new(700.0, 100.0));
        for _ in 0..30 {
            move_toward(&mut p, &cfg, 1.0);
        }
        assert!((p.velocity.x - cfg.max_speed).abs() <= cfg.desired_tolerance + 1e-4);
    }

    #[test]
    fn test_reversal_decelerates_first() {
        let cfg = PhysicsConfig::default();
        let v = approach_axis(-1.0, 2.0, &cfg, 1.0);
        assert!((v + 0.7).abs() < 1e-6);
        // Inside the deadband a reversal is just acceleration
        let v = approach_axis(-0.05, 2.0, &cfg, 1.0);
        assert!((v - 0.15).abs() < 1e-6);
    }

    #[test]
    fn test_stops_and_clears_target() {
        let cfg = PhysicsConfig::default();
        let mut p = runner(Point::new(100.0, 100.0), Point::new(100.2, 100.0));
        p.velocity = Point::new(0.3, 0.0);
        let mut ticks = 0;
        while p.target.is_some() {
            move_toward(&mut p, &cfg, 1.0);
            ticks += 1;
            assert!(ticks < 20);
        }
        assert_eq!(p.velocity, Point::ZERO);
        // Braking does not move the player
        assert_eq!(p.position, Point::new(100.0, 100.0));
    }

    #[test]
    fn test_incapacitated_player_does_not_move() {
        let cfg = PhysicsConfig::default();
        let mut p = runner(Point::new(100.0, 100.0), Point::new(200.0, 100.0));
        p.body_cooldown = 5.0;
        move_toward(&mut p, &cfg, 1.0);
        assert_eq!(p.position, Point::new(100.0, 100.0));
    }

    #[test]
    fn test_distance_with_ball_tracked() {
        let cfg = PhysicsConfig::default();
        let mut p = runner(Point::new(100.0, 100.0), Point::new(200.0, 100.0));
        p.has_ball = true;
        move_toward(&mut p, &cfg, 1.0);
        assert!(p.stats.distance_with_ball > 0.0);
        assert_eq!(p.stats.distance_with_ball, p.stats.distance_traveled);
    }
}
