//! Shot application

use super::MatchEngine;
use crate::engine::events::MatchEvent;
use crate::engine::types::Point;
use rand::Rng;

impl MatchEngine {
    /// Aim point for a shot by `shooter`: on the rival goal line, somewhere
    /// inside the mouth.
    fn shot_target(&mut self, shooter: usize) -> Point {
        let side = self.players[shooter].side.opposite();
        let spread = self.field.goal_size * self.config.decision.shot_spread;
        let roll: f32 = self.rng.gen();
        Point::new(
            self.field.goal_line_x(side),
            self.field.height * 0.5 + (roll - 0.5) * spread,
        )
    }

    pub(crate) fn apply_shot(&mut self, shooter: usize) {
        let target = self.shot_target(shooter);
        let force = self.config.decision.shot_force;

        self.ball.position = self.players[shooter].position;
        self.clear_owner();
        self.ball.kick_toward(target, force);

        let cooldown = self.config.possession.cooldowns.shoot;
        let p = &mut self.players[shooter];
        p.ball_cooldown = cooldown;
        p.stats.shots += 1;
        let (team, player) = (p.team, p.name.clone());
        self.last_toucher = Some(shooter);
        self.last_passer = None;

        log::debug!("{team} {player} shoots at ({:.1}, {:.1})", target.x, target.y);
        self.push_event(MatchEvent::Shot { team, player });
    }
}
