//! Possession resolution
//!
//! Runs once per tick after every player has moved.
//!
//! - Owned ball: each eligible rival in the near set challenges the owner in
//!   turn until one of them steals the ball or knocks it loose.
//! - Loose ball, one team near: a random member of that team tries to take
//!   it. A fast ball bounces off instead.
//! - Loose ball, both teams near: nobody gets it and it bounces away.

use super::MatchEngine;
use crate::engine::config::PossessionConfig;
use crate::engine::events::MatchEvent;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use std::f32::consts::TAU;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContestOutcome {
    Steal,
    TakeOff,
    FailedDefending,
}

/// One challenge roll against the configured odds.
pub fn roll_contest(rng: &mut ChaCha8Rng, cfg: &PossessionConfig) -> ContestOutcome {
    let roll: f32 = rng.gen();
    if roll < cfg.steal_chance {
        ContestOutcome::Steal
    } else if roll < cfg.take_off_chance {
        ContestOutcome::TakeOff
    } else {
        ContestOutcome::FailedDefending
    }
}

impl MatchEngine {
    /// Players close enough to play the ball and allowed to touch it.
    pub(crate) fn near_set(&self) -> Vec<usize> {
        let control = self.config.field.player_size;
        (0..self.players.len())
            .filter(|&i| {
                let p = &self.players[i];
                p.can_touch_ball() && p.distance_to(self.ball.position) < control
            })
            .collect()
    }

    pub(crate) fn resolve_possession(&mut self) {
        if let Some(owner) = self.owner {
            self.ball.pin_to(self.players[owner].position);
        }

        let near = self.near_set();
        match self.owner {
            Some(owner) => self.resolve_challenges(owner, &near),
            None if near.is_empty() => {}
            None => self.resolve_loose_ball(&near),
        }

        if let Some(owner) = self.owner {
            self.ball.pin_to(self.players[owner].position);
        }
    }

    fn resolve_challenges(&mut self, owner: usize, near: &[usize]) {
        let owner_team = self.players[owner].team;
        let challengers: Vec<usize> = near
            .iter()
            .copied()
            .filter(|&i| self.players[i].team != owner_team && !self.players[i].is_incapacitated())
            .collect();

        for challenger in challengers {
            self.players[challenger].stats.challenges_made += 1;
            self.players[owner].stats.challenges_received += 1;

            match roll_contest(&mut self.rng, &self.config.possession) {
                ContestOutcome::Steal => {
                    self.steal(owner, challenger);
                    return;
                }
                ContestOutcome::TakeOff => {
                    self.take_off(owner, challenger);
                    return;
                }
                ContestOutcome::FailedDefending => self.fail_defending(owner, challenger),
            }
        }
    }

    fn steal(&mut self, owner: usize, thief: usize) {
        let cd = &self.config.possession.cooldowns;
        let (ball_cd, body_cd) = (cd.stolen_ball, cd.stolen_body);

        let victim = &mut self.players[owner];
        victim.ball_cooldown = ball_cd;
        victim.body_cooldown = body_cd;
        victim.stats.dribbles_failed += 1;
        let victim_name = victim.name.clone();

        self.players[thief].stats.steals += 1;
        self.set_owner(thief);
        self.last_toucher = Some(thief);
        self.last_passer = None;

        let (team, player) = (self.players[thief].team, self.players[thief].name.clone());
        log::debug!("{team} {player} steals from {victim_name}");
        self.push_event(MatchEvent::Steal {
            team,
            player,
            victim: victim_name,
        });
    }

    fn take_off(&mut self, owner: usize, challenger: usize) {
        let cooldown = self.config.possession.cooldowns.take_off;
        self.clear_owner();

        let victim = &mut self.players[owner];
        victim.ball_cooldown = cooldown;
        victim.stats.dribbles_failed += 1;
        let victim_name = victim.name.clone();

        let p = &mut self.players[challenger];
        p.ball_cooldown = cooldown;
        p.stats.take_offs += 1;
        let (team, player) = (p.team, p.name.clone());

        let (spread, force) = (
            self.config.possession.take_off_spread,
            self.config.possession.take_off_force,
        );
        self.kick_loose(spread, force);
        self.last_toucher = Some(challenger);
        self.last_passer = None;

        log::debug!("{team} {player} knocks the ball off {victim_name}");
        self.push_event(MatchEvent::TakeOff {
            team,
            player,
            victim: victim_name,
        });
    }

    fn fail_defending(&mut self, owner: usize, challenger: usize) {
        let cd = &self.config.possession.cooldowns;
        let (ball_cd, body_cd) = (cd.fail_defending_ball, cd.fail_defending_body);

        self.players[owner].stats.dribbles_done += 1;
        let p = &mut self.players[challenger];
        p.ball_cooldown = ball_cd;
        p.body_cooldown = body_cd;

        let event = MatchEvent::FailedDefending {
            team: p.team,
            player: p.name.clone(),
            owner: self.players[owner].name.clone(),
        };
        self.push_event(event);
    }

    fn resolve_loose_ball(&mut self, near: &[usize]) {
        let team = self.players[near[0]].team;
        if !near.iter().all(|&i| self.players[i].team == team) {
            self.dispute(near);
            return;
        }

        let candidate = near[self.rng.gen_range(0..near.len())];
        let speed = self.ball.speed();
        if speed > self.config.physics.fast_ball_speed {
            let angle = self.rng.gen::<f32>() * TAU;
            self.ball
                .redirect(angle, speed * self.config.physics.rebound_factor);

            let cooldown = self.config.possession.cooldowns.failed_control;
            let p = &mut self.players[candidate];
            p.ball_cooldown = cooldown;
            p.stats.failed_controls += 1;
            p.stats.intercepted_balls += 1;
            let event = MatchEvent::FailedControl {
                team: p.team,
                player: p.name.clone(),
            };
            log::debug!("{event} (speed {speed:.2})");
            self.push_event(event);
        } else {
            self.take_ball(candidate);
        }
    }

    fn take_ball(&mut self, idx: usize) {
        self.set_owner(idx);
        self.players[idx].stats.controlled_balls += 1;

        if let Some(passer) = self.last_passer.take() {
            if passer != idx && self.players[passer].team == self.players[idx].team {
                self.players[passer].stats.passes_completed += 1;
            }
        }
        self.last_toucher = Some(idx);

        let event = MatchEvent::TakeBall {
            team: self.players[idx].team,
            player: self.players[idx].name.clone(),
        };
        log::debug!("{event}");
        self.push_event(event);
    }

    fn dispute(&mut self, near: &[usize]) {
        let cooldown = self.config.possession.cooldowns.disputed;
        for &i in near {
            self.players[i].ball_cooldown = cooldown;
        }
        let (spread, force) = (
            self.config.possession.dispute_spread,
            self.config.possession.dispute_force,
        );
        self.kick_loose(spread, force);
        self.push_event(MatchEvent::BallDisputed);
    }

    /// Kick the ball toward a random point up to `spread` away on each axis.
    fn kick_loose(&mut self, spread: i32, force: f32) {
        let dx = self.rng.gen_range(-spread..=spread) as f32;
        let dy = self.rng.gen_range(-spread..=spread) as f32;
        let target = self.ball.position.offset(dx, dy);
        self.ball.kick_toward(target, force);
    }
}
