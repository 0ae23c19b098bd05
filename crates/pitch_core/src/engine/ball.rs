//! Ball state and free-ball integration
//!
//! The ball does not know who owns it. Ownership lives on the match engine,
//! which pins the ball to its owner before calling into anything here.

use super::field::Field;
use super::types::Point;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub position: Point,
    pub velocity: Point,
}

impl Ball {
    pub fn at(position: Point) -> Self {
        Self {
            position,
            velocity: Point::ZERO,
        }
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// One tick of free motion: move, apply friction, keep inside the touchlines.
    pub fn integrate_free(&mut self, field: &Field, decay: f32) {
        self.position.x += self.velocity.x;
        self.position.y += self.velocity.y;
        self.velocity.x *= decay;
        self.velocity.y *= decay;
        self.position.y = field.clamp_lateral(self.position.y);
    }

    /// Snap to an owner; an owned ball has no velocity of its own.
    pub fn pin_to(&mut self, owner: Point) {
        self.position = owner;
        self.velocity = Point::ZERO;
    }

    /// Kick toward `target` with speed `force`.
    ///
    /// Returns false and leaves the velocity untouched when the target is the
    /// ball's own position.
    pub fn kick_toward(&mut self, target: Point, force: f32) -> bool {
        match self.position.direction_to(target) {
            Some(dir) => {
                self.velocity = Point::new(dir.x * force, dir.y * force);
                true
            }
            None => {
                log::warn!(
                    "kick target coincides with ball at ({:.1}, {:.1}), ignoring",
                    self.position.x,
                    self.position.y
                );
                false
            }
        }
    }

    /// Send the ball off at `speed` along `angle` radians.
    pub fn redirect(&mut self, angle: f32, speed: f32) {
        self.velocity = Point::new(angle.cos() * speed, angle.sin() * speed);
    }

    pub fn reset(&mut self, field: &Field) {
        *self = Ball::at(field.center());
    }
}
