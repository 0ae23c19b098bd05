//! Match Simulation Engine
//!
//! `MatchEngine` owns one match: six players in a fixed arena, the ball, the
//! seeded RNG and the tick history. Each `step()` runs one tick in a fixed
//! order:
//!
//! ```text
//!   ball      pin to owner or integrate, then goal / out-of-bounds check
//!   players   for each player in arena order:
//!               awareness -> decide -> execute -> apply outcome -> move
//!               -> separate from overlapping bodies
//!   ball      possession resolution (contest, pickup, rebound, dispute)
//!   stats     possession and marking time
//!   history   append snapshot
//! ```
//!
//! Arena layout: indices 0..3 are Team A, 3..6 Team B, each in
//! goalkeeper/defender/striker order.
//!
//! Ball ownership lives here (`owner`) and is mirrored into each player's
//! `has_ball` flag. Only the methods in this module and its siblings change
//! it, and always through `set_owner` / `clear_owner`.

mod ball_physics;
mod collision;
mod passing;
mod possession;
mod shooting;
#[cfg(test)]
pub mod test_fixtures;

pub use possession::{roll_contest, ContestOutcome};

use super::actions::{self, ActionOutcome};
use super::ball::Ball;
use super::config::EngineConfig;
use super::decision::{self, DecisionContext};
use super::events::MatchEvent;
use super::field::Field;
use super::physics_constants::field::KICKOFF_LAYOUT;
use super::player::{MatchPlayer, Role};
use super::snapshot::{TeamRenderData, TickSnapshot};
use super::stats::{build_summary, MatchStats, MatchSummary};
use super::types::{Point, TeamId};
use crate::error::Result;
use crate::models::{TeamDefinition, TEAM_SIZE};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub struct MatchEngine {
    rng: ChaCha8Rng,
    seed: u64,
    pub(crate) config: EngineConfig,
    pub(crate) field: Field,
    pub(crate) ball: Ball,
    pub(crate) players: Vec<MatchPlayer>,
    team_names: [String; 2],
    /// Arena index of the player holding the ball
    pub(crate) owner: Option<usize>,
    /// Last player to kick or win the ball; used for goal credit
    pub(crate) last_toucher: Option<usize>,
    /// Passer waiting for a teammate to collect
    pub(crate) last_passer: Option<usize>,
    pub(crate) stats: MatchStats,
    tick_events: Vec<MatchEvent>,
    history: Vec<TickSnapshot>,
}

/// Visible state for player `idx`: teammates, eligible opponents and the
/// team's ball chaser.
fn build_context<'a>(
    field: &'a Field,
    players: &[MatchPlayer],
    idx: usize,
    ball: Point,
    owner: Option<usize>,
) -> DecisionContext<'a> {
    let team = players[idx].team;
    let teammates = (0..players.len())
        .filter(|&i| i != idx && players[i].team == team)
        .collect();
    let opponents = (0..players.len())
        .filter(|&i| players[i].team != team && !players[i].is_incapacitated())
        .collect();

    DecisionContext {
        field,
        ball,
        ball_team: owner.map(|o| players[o].team),
        teammates,
        opponents,
        chaser: actions::ball_chaser(players, team, ball),
    }
}

impl MatchEngine {
    /// Build a match from two team definitions.
    ///
    /// Everything is validated here; once this returns `Ok`, stepping the
    /// match cannot fail.
    pub fn new(
        team_a: &TeamDefinition,
        team_b: &TeamDefinition,
        config: EngineConfig,
        seed: u64,
    ) -> Result<Self> {
        config.validate()?;
        let books_a = team_a.validate("Team A")?;
        let books_b = team_b.validate("Team B")?;

        let field = Field::from_config(&config.field);
        let mut players = Vec::with_capacity(TEAM_SIZE * 2);
        for (team, def, books) in [(TeamId::A, team_a, books_a), (TeamId::B, team_b, books_b)] {
            for (slot, (pdef, book)) in def.players.iter().zip(books).enumerate() {
                let (sx, sy) = KICKOFF_LAYOUT[slot];
                let x = match team {
                    TeamId::A => field.width * sx,
                    TeamId::B => field.width - field.width * sx,
                };
                let kickoff = Point::new(x, field.height * sy);
                let home = Point::new(
                    field.width * pdef.default_zone.x / 100.0,
                    field.height * pdef.default_zone.y / 100.0,
                );
                players.push(MatchPlayer::new(
                    team,
                    Role::ORDER[slot],
                    pdef.name.clone(),
                    kickoff,
                    home,
                    book,
                ));
            }
        }

        log::debug!(
            "match created: seed={} field={}x{} near_factor={}",
            seed,
            field.width,
            field.height,
            config.decision.near_radius_factor
        );

        Ok(Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
            ball: Ball::at(field.center()),
            field,
            config,
            players,
            team_names: [team_a.display_name("Team A"), team_b.display_name("Team B")],
            owner: None,
            last_toucher: None,
            last_passer: None,
            stats: MatchStats::default(),
            tick_events: Vec::new(),
            history: Vec::new(),
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn players(&self) -> &[MatchPlayer] {
        &self.players
    }

    pub fn owner(&self) -> Option<usize> {
        self.owner
    }

    pub fn stats(&self) -> &MatchStats {
        &self.stats
    }

    pub fn team_name(&self, team: TeamId) -> &str {
        &self.team_names[team.index()]
    }

    pub fn history(&self) -> &[TickSnapshot] {
        &self.history
    }

    pub fn into_history(self) -> Vec<TickSnapshot> {
        self.history
    }

    pub fn summary(&self) -> MatchSummary {
        build_summary(&self.players, &self.team_names, &self.stats)
    }

    pub fn run(&mut self, ticks: u64) {
        for _ in 0..ticks {
            self.step();
        }
    }

    /// Advance the match by one tick.
    pub fn step(&mut self) {
        let dt = self.config.physics.tick_dt;

        self.update_ball();
        for idx in 0..self.players.len() {
            self.tick_player(idx, dt);
        }
        self.resolve_possession();
        self.accumulate_time(dt);

        self.stats.ticks += 1;
        self.stats.elapsed += dt;
        self.record_snapshot();
    }

    fn tick_player(&mut self, idx: usize, dt: f32) {
        let outcome = {
            let mut ctx = build_context(
                &self.field,
                &self.players,
                idx,
                self.ball.position,
                self.owner,
            );
            let size = self.config.field.player_size;
            let (marked, near) = decision::awareness(
                &self.players,
                idx,
                &ctx,
                size * self.config.decision.marked_radius_factor,
                size * self.config.decision.near_radius_factor,
            );
            self.players[idx].marked = marked;
            self.players[idx].opponent_near = near;

            let chosen = decision::decide(&self.players, idx, &ctx);
            self.players[idx].current_action = chosen.action;
            self.players[idx].current_condition = chosen.condition;
            // This player's new action may change who is chasing
            let team = self.players[idx].team;
            ctx.chaser = actions::ball_chaser(&self.players, team, ctx.ball);

            match actions::execute(
                &self.players,
                idx,
                chosen.action,
                &ctx,
                &self.config.decision,
                &mut self.rng,
            ) {
                ActionOutcome::MoveTo(requested) => ActionOutcome::MoveTo(actions::assisted_target(
                    &self.players,
                    idx,
                    requested,
                    &ctx,
                    self.config.decision.assist_distance,
                )),
                other => other,
            }
        };

        match outcome {
            ActionOutcome::NoOp => {}
            ActionOutcome::MoveTo(target) => self.players[idx].target = Some(target),
            ActionOutcome::Pass { receiver } => self.apply_pass(idx, receiver),
            ActionOutcome::Shoot => self.apply_shot(idx),
        }

        let player = &mut self.players[idx];
        player.update(&self.config.physics, dt);
        player.position = self.field.clamp_body(player.position);
        self.resolve_collisions(idx);
    }

    pub(crate) fn set_owner(&mut self, idx: usize) {
        for (i, p) in self.players.iter_mut().enumerate() {
            p.has_ball = i == idx;
        }
        self.owner = Some(idx);
        self.ball.pin_to(self.players[idx].position);
    }

    pub(crate) fn clear_owner(&mut self) {
        for p in &mut self.players {
            p.has_ball = false;
        }
        self.owner = None;
    }

    pub(crate) fn push_event(&mut self, event: MatchEvent) {
        log::trace!("tick {}: {}", self.stats.ticks + 1, event);
        self.tick_events.push(event);
    }

    fn accumulate_time(&mut self, dt: f32) {
        let owning_team = self.owner.map(|o| self.players[o].team);
        if let Some(team) = owning_team {
            self.stats.possession_time[team.index()] += dt;
        }
        for p in &mut self.players {
            if !p.marked {
                continue;
            }
            if owning_team == Some(p.team) {
                p.stats.time_marked_with_possession += dt;
            } else {
                p.stats.time_marked_without_possession += dt;
            }
        }
    }

    fn team_render(&self, team: TeamId) -> TeamRenderData {
        let base = team.index() * TEAM_SIZE;
        TeamRenderData {
            goalkeeper: self.players[base].render_data(),
            defender: self.players[base + 1].render_data(),
            striker: self.players[base + 2].render_data(),
        }
    }

    fn record_snapshot(&mut self) {
        let logs = self.tick_events.drain(..).map(|e| e.to_string()).collect();
        let snapshot = TickSnapshot {
            tick: self.stats.ticks,
            ball: self.ball.position.into(),
            team_a: self.team_render(TeamId::A),
            team_b: self.team_render(TeamId::B),
            logs,
        };
        self.history.push(snapshot);
    }
}
