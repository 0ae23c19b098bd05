//! Running counters and the end-of-match summary
//!
//! Counters only ever grow while the match runs. `build_summary` turns them
//! into percentages and team totals when asked; nothing is normalised per tick.

use super::player::{MatchPlayer, Role};
use super::types::TeamId;
use serde::{Deserialize, Serialize};

/// Per-player counters, written by the match loop.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub distance_traveled: f32,
    pub distance_with_ball: f32,
    pub time_marked_with_possession: f32,
    pub time_marked_without_possession: f32,
    pub controlled_balls: u32,
    pub intercepted_balls: u32,
    pub failed_controls: u32,
    pub passes_attempted: u32,
    pub passes_completed: u32,
    pub shots: u32,
    pub goals: u32,
    pub own_goals: u32,
    pub steals: u32,
    pub take_offs: u32,
    pub challenges_made: u32,
    pub challenges_received: u32,
    pub dribbles_done: u32,
    pub dribbles_failed: u32,
}

/// Match-wide counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchStats {
    pub ticks: u64,
    pub elapsed: f32,
    pub goals: [u32; 2],
    pub possession_time: [f32; 2],
}

impl MatchStats {
    pub fn goals_for(&self, team: TeamId) -> u32 {
        self.goals[team.index()]
    }

    pub fn possession_for(&self, team: TeamId) -> f32 {
        self.possession_time[team.index()]
    }

    /// Elapsed time with the ball loose
    pub fn untracked_time(&self) -> f32 {
        (self.elapsed - self.possession_time[0] - self.possession_time[1]).max(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub name: String,
    pub role: Role,
    pub distance_traveled: f32,
    pub distance_traveled_with_ball: f32,
    /// % of own-team possession time spent marked
    pub time_marked_with_possession: f32,
    /// % of the rest of the match spent marked
    pub time_marked_without_possession: f32,
    pub controlled_balls: u32,
    pub intercepted_balls: u32,
    pub failed_controls: u32,
    pub passes_attempted: u32,
    pub passes_completed: u32,
    pub shots: u32,
    pub goals: u32,
    pub own_goals: u32,
    pub steals: u32,
    pub take_offs: u32,
    pub challenges_made: u32,
    pub challenges_received: u32,
    pub dribbles_done: u32,
    pub dribbles_failed: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamSummary {
    pub team: TeamId,
    pub name: String,
    pub goals: u32,
    pub possession_time: f32,
    pub possession_pct: f32,
    pub passes_attempted: u32,
    pub passes_completed: u32,
    pub pass_accuracy_pct: f32,
    pub shots: u32,
    pub steals: u32,
    pub players: Vec<PlayerSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub ticks: u64,
    pub elapsed_time: f32,
    pub loose_ball_time: f32,
    pub team_a: TeamSummary,
    pub team_b: TeamSummary,
}

impl MatchSummary {
    pub fn team(&self, team: TeamId) -> &TeamSummary {
        match team {
            TeamId::A => &self.team_a,
            TeamId::B => &self.team_b,
        }
    }

    pub fn score(&self) -> (u32, u32) {
        (self.team_a.goals, self.team_b.goals)
    }
}

/// `100 * part / whole`, or 0 for an empty denominator.
pub fn percentage(part: f32, whole: f32) -> f32 {
    if whole > 0.0 {
        100.0 * part / whole
    } else {
        0.0
    }
}

fn player_summary(player: &MatchPlayer, with_ball: f32, without_ball: f32) -> PlayerSummary {
    let s = &player.stats;
    PlayerSummary {
        name: player.name.clone(),
        role: player.role,
        distance_traveled: s.distance_traveled,
        distance_traveled_with_ball: s.distance_with_ball,
        time_marked_with_possession: percentage(s.time_marked_with_possession, with_ball),
        time_marked_without_possession: percentage(s.time_marked_without_possession, without_ball),
        controlled_balls: s.controlled_balls,
        intercepted_balls: s.intercepted_balls,
        failed_controls: s.failed_controls,
        passes_attempted: s.passes_attempted,
        passes_completed: s.passes_completed,
        shots: s.shots,
        goals: s.goals,
        own_goals: s.own_goals,
        steals: s.steals,
        take_offs: s.take_offs,
        challenges_made: s.challenges_made,
        challenges_received: s.challenges_received,
        dribbles_done: s.dribbles_done,
        dribbles_failed: s.dribbles_failed,
    }
}

fn team_summary(
    team: TeamId,
    name: &str,
    players: &[MatchPlayer],
    stats: &MatchStats,
) -> TeamSummary {
    let with_ball = stats.possession_for(team);
    let without_ball = (stats.elapsed - with_ball).max(0.0);
    let roster: Vec<&MatchPlayer> = players.iter().filter(|p| p.team == team).collect();

    let passes_attempted: u32 = roster.iter().map(|p| p.stats.passes_attempted).sum();
    let passes_completed: u32 = roster.iter().map(|p| p.stats.passes_completed).sum();

    TeamSummary {
        team,
        name: name.to_string(),
        goals: stats.goals_for(team),
        possession_time: with_ball,
        possession_pct: percentage(with_ball, stats.elapsed),
        passes_attempted,
        passes_completed,
        pass_accuracy_pct: percentage(passes_completed as f32, passes_attempted as f32),
        shots: roster.iter().map(|p| p.stats.shots).sum(),
        steals: roster.iter().map(|p| p.stats.steals).sum(),
        players: roster
            .iter()
            .map(|p| player_summary(p, with_ball, without_ball))
            .collect(),
    }
}

pub fn build_summary(players: &[MatchPlayer], team_names: &[String; 2], stats: &MatchStats) -> MatchSummary {
    MatchSummary {
        ticks: stats.ticks,
        elapsed_time: stats.elapsed,
        loose_ball_time: stats.untracked_time(),
        team_a: team_summary(TeamId::A, &team_names[0], players, stats),
        team_b: team_summary(TeamId::B, &team_names[1], players, stats),
    }
}
