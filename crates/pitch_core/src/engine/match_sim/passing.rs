//! Pass application
//!
//! The executor only picks a receiver; this is where the ball is released
//! and kicked.

use super::MatchEngine;
use crate::engine::events::MatchEvent;

impl MatchEngine {
    pub(crate) fn apply_pass(&mut self, passer: usize, receiver: usize) {
        let origin = self.players[passer].position;
        let target = self.players[receiver].position;
        let force = self.config.decision.pass_force(origin.distance_to(target));

        self.ball.position = origin;
        self.clear_owner();
        self.ball.kick_toward(target, force);

        let cooldown = self.config.possession.cooldowns.pass;
        let p = &mut self.players[passer];
        p.ball_cooldown = cooldown;
        p.stats.passes_attempted += 1;
        let (team, from) = (p.team, p.name.clone());
        self.last_passer = Some(passer);
        self.last_toucher = Some(passer);

        let to = self.players[receiver].name.clone();
        log::debug!("{team} {from} passes to {to} (force {force:.2})");
        self.push_event(MatchEvent::Pass { team, from, to });
    }
}
