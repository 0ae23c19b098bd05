//! Rule evaluation
//!
//! First-match over the player's context rule list. Attacking rules apply
//! while the player's team owns the ball, defending rules otherwise. When no
//! rule fires the player's default action is used and no condition is
//! recorded.

use super::field::Field;
use super::player::MatchPlayer;
use super::rules::{Action, Condition};
use super::types::{Point, TeamId};

/// What one player can see when it decides. Index lists point into the
/// match's player arena.
#[derive(Debug, Clone)]
pub struct DecisionContext<'a> {
    pub field: &'a Field,
    pub ball: Point,
    /// Team of the current ball owner, if any
    pub ball_team: Option<TeamId>,
    pub teammates: Vec<usize>,
    /// Opponents that are not incapacitated
    pub opponents: Vec<usize>,
    /// This team's ball chaser
    pub chaser: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub action: Action,
    pub condition: Option<Condition>,
}

/// Marking flags for `idx` against the eligible opponents: (marked, opponent_near).
pub fn awareness(
    players: &[MatchPlayer],
    idx: usize,
    ctx: &DecisionContext,
    marked_radius: f32,
    near_radius: f32,
) -> (bool, bool) {
    let me = players[idx].position;
    let within = |radius: f32| {
        ctx.opponents
            .iter()
            .any(|&op| players[op].position.distance_to(me) < radius)
    };
    (within(marked_radius), within(near_radius))
}

/// Legality filter applied before a rule's condition is even checked.
pub fn is_action_allowed(player: &MatchPlayer, action: Action) -> bool {
    if action.requires_ball() && !player.has_ball {
        return false;
    }
    if action == Action::MoveToNearestRival && !player.opponent_near {
        return false;
    }
    true
}

pub fn evaluate_condition(
    players: &[MatchPlayer],
    idx: usize,
    ctx: &DecisionContext,
    condition: Condition,
) -> bool {
    let me = &players[idx];
    let field = ctx.field;
    let rival_in_half = || {
        ctx.opponents
            .iter()
            .any(|&op| field.in_own_half(me.side, players[op].position))
    };

    match condition {
        Condition::HasBall => me.has_ball,
        Condition::Marked => me.marked,
        Condition::NearRival => me.opponent_near,
        Condition::BallNearOwnGoal => field.near_own_goal(me.side, ctx.ball),
        Condition::BallInOwnHalf => field.in_own_half(me.side, ctx.ball),
        Condition::BallInRivalHalf => field.in_rival_half(me.side, ctx.ball),
        Condition::BallNearRivalGoal => field.near_rival_goal(me.side, ctx.ball),
        Condition::RivalInOwnHalf => rival_in_half(),
        Condition::NoRivalInOwnHalf => !rival_in_half(),
    }
}

pub fn decide(players: &[MatchPlayer], idx: usize, ctx: &DecisionContext) -> Decision {
    let me = &players[idx];
    let team_has_ball = ctx.ball_team == Some(me.team);

    me.rules
        .for_context(team_has_ball)
        .iter()
        .find(|rule| {
            is_action_allowed(me, rule.action)
                && evaluate_condition(players, idx, ctx, rule.condition)
        })
        .map(|rule| Decision {
            action: rule.action,
            condition: Some(rule.condition),
        })
        .unwrap_or(Decision {
            action: me.default_action,
            condition: None,
        })
}
