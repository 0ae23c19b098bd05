//! Action execution
//!
//! `execute` turns a decided action into an `ActionOutcome`. It never touches
//! the ball: passes and shots come back as requests that the match engine
//! applies, so ball state has a single writer.

use super::config::DecisionConfig;
use super::decision::DecisionContext;
use super::field::Field;
use super::player::MatchPlayer;
use super::rules::Action;
use super::types::{Point, TeamId};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActionOutcome {
    /// Keep the current target
    NoOp,
    /// Request a new movement target (before assist spacing)
    MoveTo(Point),
    /// Pass to the player at this arena index
    Pass { receiver: usize },
    Shoot,
}

/// True when `opponent` sits close enough to the passing lane `from -> to`
/// to cut it out. The first and last `margin` of the lane are ignored.
pub fn pass_lane_blocked(
    from: Point,
    to: Point,
    opponent: Point,
    interception_distance: f32,
    margin: f32,
) -> bool {
    let ab = Point::new(to.x - from.x, to.y - from.y);
    let ap = Point::new(opponent.x - from.x, opponent.y - from.y);
    let len_sq = ab.x * ab.x + ab.y * ab.y;
    if len_sq == 0.0 {
        return true;
    }

    let t = ((ap.x * ab.x + ap.y * ab.y) / len_sq).clamp(0.0, 1.0);
    let closest = Point::new(from.x + ab.x * t, from.y + ab.y * t);
    opponent.distance_to(closest) < interception_distance && t > margin && t < 1.0 - margin
}

/// Teammates that are unmarked and have a clear lane from `idx`.
pub fn open_receivers(
    players: &[MatchPlayer],
    idx: usize,
    ctx: &DecisionContext,
    cfg: &DecisionConfig,
) -> Vec<usize> {
    let from = players[idx].position;
    ctx.teammates
        .iter()
        .copied()
        .filter(|&mate| !players[mate].marked)
        .filter(|&mate| {
            let to = players[mate].position;
            !ctx.opponents.iter().any(|&op| {
                pass_lane_blocked(
                    from,
                    to,
                    players[op].position,
                    cfg.interception_distance,
                    cfg.interception_margin,
                )
            })
        })
        .collect()
}

fn nearest_opponent(players: &[MatchPlayer], idx: usize, ctx: &DecisionContext) -> Option<usize> {
    let me = players[idx].position;
    let mut best: Option<(usize, f32)> = None;
    for &op in &ctx.opponents {
        let p = players[op].position;
        let d2 = (p.x - me.x).powi(2) + (p.y - me.y).powi(2);
        if best.map_or(true, |(_, bd)| d2 < bd) {
            best = Some((op, d2));
        }
    }
    best.map(|(op, _)| op)
}

fn switch_flank(
    me: &MatchPlayer,
    field: &Field,
    cfg: &DecisionConfig,
    rng: &mut ChaCha8Rng,
) -> ActionOutcome {
    let low_jitter = rng.gen_range(cfg.flank_jitter_min..=cfg.flank_jitter_max) as f32 / 100.0;
    let high_jitter = rng.gen_range(cfg.flank_jitter_min..=cfg.flank_jitter_max) as f32 / 100.0;
    let low = Point::new(me.position.x, field.height * (cfg.flank_low - low_jitter));
    let high = Point::new(me.position.x, field.height * (cfg.flank_high + high_jitter));

    if me.position.y >= high.y {
        ActionOutcome::MoveTo(low)
    } else if me.position.y <= low.y {
        ActionOutcome::MoveTo(high)
    } else if me.target.is_none() {
        if me.position.y < field.height * 0.5 {
            ActionOutcome::MoveTo(high)
        } else {
            ActionOutcome::MoveTo(low)
        }
    } else {
        ActionOutcome::NoOp
    }
}

pub fn execute(
    players: &[MatchPlayer],
    idx: usize,
    action: Action,
    ctx: &DecisionContext,
    cfg: &DecisionConfig,
    rng: &mut ChaCha8Rng,
) -> ActionOutcome {
    let me = &players[idx];
    let field = ctx.field;
    let mid_y = field.height * 0.5;

    match action {
        Action::MoveToBall => ActionOutcome::MoveTo(ctx.ball),
        Action::MoveToNearestRival => nearest_opponent(players, idx, ctx)
            .map(|op| ActionOutcome::MoveTo(players[op].position))
            .unwrap_or(ActionOutcome::NoOp),
        Action::MoveToOwnGoal => {
            ActionOutcome::MoveTo(Point::new(field.goal_target_x(me.side), mid_y))
        }
        Action::MoveToRivalGoal => {
            ActionOutcome::MoveTo(Point::new(field.goal_target_x(me.side.opposite()), mid_y))
        }
        Action::Advance => ActionOutcome::MoveTo(Point::new(
            field.goal_target_x(me.side.opposite()),
            me.position.y,
        )),
        Action::Retreat => {
            ActionOutcome::MoveTo(Point::new(field.goal_target_x(me.side), me.position.y))
        }
        Action::Pass => {
            if !me.has_ball {
                return ActionOutcome::NoOp;
            }
            let open = open_receivers(players, idx, ctx, cfg);
            if open.is_empty() {
                return ActionOutcome::NoOp;
            }
            let receiver = open[rng.gen_range(0..open.len())];
            ActionOutcome::Pass { receiver }
        }
        Action::Shoot => {
            if me.has_ball {
                ActionOutcome::Shoot
            } else {
                ActionOutcome::NoOp
            }
        }
        Action::SwitchFlank => switch_flank(me, field, cfg, rng),
        Action::HoldZone => ActionOutcome::MoveTo(me.home_zone),
    }
}

/// Closest eligible player of `team` currently heading for the ball or a rival.
pub fn ball_chaser(players: &[MatchPlayer], team: TeamId, ball: Point) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (idx, p) in players.iter().enumerate() {
        if p.team != team
            || p.is_incapacitated()
            || !p.can_touch_ball()
            || !p.current_action.is_ball_approach()
        {
            continue;
        }
        let d = p.distance_to(ball);
        if best.map_or(true, |(_, bd)| d < bd) {
            best = Some((idx, d));
        }
    }
    best.map(|(idx, _)| idx)
}

/// Apply teammate spacing to a requested target.
///
/// Players other than the chaser may not crowd it: a target inside
/// `assist_distance` of the chaser is replaced by a point at exactly that
/// distance, on the chaser-to-player line.
pub fn assisted_target(
    players: &[MatchPlayer],
    idx: usize,
    requested: Point,
    ctx: &DecisionContext,
    assist_distance: f32,
) -> Point {
    let chaser = match ctx.chaser {
        Some(c) if c != idx => players[c].position,
        _ => return requested,
    };
    if requested.distance_to(chaser) >= assist_distance {
        return requested;
    }

    let dir = chaser
        .direction_to(players[idx].position)
        .unwrap_or(Point::new(1.0, 0.0));
    ctx.field.clamp_point(Point::new(
        chaser.x + dir.x * assist_distance,
        chaser.y + dir.y * assist_distance,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::player::Role;
    use crate::engine::rules::RuleBook;
    use crate::engine::types::FieldSide;
    use rand::SeedableRng;

    fn arena() -> Vec<MatchPlayer> {
        let spots = [
            (TeamId::A, Role::Goalkeeper, 50.0, 200.0),
            (TeamId::A, Role::Defender, 200.0, 120.0),
            (TeamId::A, Role::Striker, 300.0, 280.0),
            (TeamId::B, Role::Goalkeeper, 750.0, 200.0),
            (TeamId::B, Role::Defender, 600.0, 120.0),
            (TeamId::B, Role::Striker, 500.0, 280.0),
        ];
        spots
            .iter()
            .map(|&(team, role, x, y)| {
                MatchPlayer::new(team, role, format!("{role:?}"), Point::new(x, y), Point::new(x, y), RuleBook::default())
            })
            .collect()
    }

    fn ctx_for(field: &Field, idx: usize) -> DecisionContext<'_> {
        let (teammates, opponents) = if idx < 3 {
            ((0..3).filter(|&i| i != idx).collect(), vec![3, 4, 5])
        } else {
            ((3..6).filter(|&i| i != idx).collect(), vec![0, 1, 2])
        };
        DecisionContext {
            field,
            ball: field.center(),
            ball_team: None,
            teammates,
            opponents,
            chaser: None,
        }
    }

    #[test]
    fn test_lane_blocking() {
        let from = Point::new(0.0, 0.0);
        let to = Point::new(100.0, 0.0);
        assert!(pass_lane_blocked(from, to, Point::new(50.0, 10.0), 25.0, 0.05));
        assert!(!pass_lane_blocked(from, to, Point::new(50.0, 30.0), 25.0, 0.05));
        // Right next to either end does not count
        assert!(!pass_lane_blocked(from, to, Point::new(2.0, 5.0), 25.0, 0.05));
        assert!(!pass_lane_blocked(from, to, Point::new(120.0, 0.0), 25.0, 0.05));
        // Zero-length lane is always blocked
        assert!(pass_lane_blocked(from, from, Point::new(500.0, 500.0), 25.0, 0.05));
    }

    #[test]
    fn test_pass_skips_marked_and_blocked_mates() {
        let field = Field::default();
        let cfg = DecisionConfig::default();
        let mut players = arena();
        players[0].has_ball = true;
        players[1].marked = true;
        let ctx = ctx_for(&field, 0);
        assert_eq!(open_receivers(&players, 0, &ctx, &cfg), vec![2]);

        // Park a rival in the middle of the lane to the striker
        players[5].position = Point::new(175.0, 240.0);
        assert!(open_receivers(&players, 0, &ctx, &cfg).is_empty());
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(execute(&players, 0, Action::Pass, &ctx, &cfg, &mut rng), ActionOutcome::NoOp);
    }

    #[test]
    fn test_pass_and_shoot_need_ball() {
        let field = Field::default();
        let cfg = DecisionConfig::default();
        let mut players = arena();
        let ctx = ctx_for(&field, 2);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(execute(&players, 2, Action::Shoot, &ctx, &cfg, &mut rng), ActionOutcome::NoOp);
        assert_eq!(execute(&players, 2, Action::Pass, &ctx, &cfg, &mut rng), ActionOutcome::NoOp);
        players[2].has_ball = true;
        assert_eq!(execute(&players, 2, Action::Shoot, &ctx, &cfg, &mut rng), ActionOutcome::Shoot);
        assert!(matches!(
            execute(&players, 2, Action::Pass, &ctx, &cfg, &mut rng),
            ActionOutcome::Pass { receiver: 0 | 1 }
        ));
    }

    #[test]
    fn test_goal_directed_targets() {
        let field = Field::default();
        let cfg = DecisionConfig::default();
        let players = arena();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert_eq!(players[4].side, FieldSide::Right);

        let ctx = ctx_for(&field, 4);
        assert_eq!(
            execute(&players, 4, Action::MoveToOwnGoal, &ctx, &cfg, &mut rng),
            ActionOutcome::MoveTo(Point::new(790.0, 200.0))
        );
        assert_eq!(
            execute(&players, 4, Action::Advance, &ctx, &cfg, &mut rng),
            ActionOutcome::MoveTo(Point::new(10.0, 120.0))
        );
        assert_eq!(
            execute(&players, 4, Action::Retreat, &ctx, &cfg, &mut rng),
            ActionOutcome::MoveTo(Point::new(790.0, 120.0))
        );
        assert_eq!(
            execute(&players, 4, Action::MoveToNearestRival, &ctx, &cfg, &mut rng),
            ActionOutcome::MoveTo(Point::new(300.0, 280.0))
        );
        assert_eq!(
            execute(&players, 4, Action::HoldZone, &ctx, &cfg, &mut rng),
            ActionOutcome::MoveTo(Point::new(600.0, 120.0))
        );
    }

    #[test]
    fn test_switch_flank_targets() {
        let field = Field::default();
        let cfg = DecisionConfig::default();
        let mut players = arena();
        let ctx = ctx_for(&field, 1);
        let mut rng = ChaCha8Rng::seed_from_u64(11);

        // Below the low anchor (never under 40): send to the high flank
        players[1].position.y = 30.0;
        match execute(&players, 1, Action::SwitchFlank, &ctx, &cfg, &mut rng) {
            ActionOutcome::MoveTo(p) => {
                assert!(p.y >= field.height * 0.71 - 1e-3 && p.y <= field.height * 0.9 + 1e-3);
                assert_eq!(p.x, players[1].position.x);
            }
            other => panic!("unexpected {other:?}"),
        }

        // Between the anchors with a target already set: keep going
        players[1].position.y = 200.0;
        assert_eq!(execute(&players, 1, Action::SwitchFlank, &ctx, &cfg, &mut rng), ActionOutcome::NoOp);
    }

    #[test]
    fn test_chaser_is_closest_approaching_player() {
        let mut players = arena();
        let ball = Point::new(400.0, 200.0);
        assert_eq!(ball_chaser(&players, TeamId::A, ball), None);
        players[1].current_action = Action::MoveToBall;
        players[2].current_action = Action::MoveToNearestRival;
        assert_eq!(ball_chaser(&players, TeamId::A, ball), Some(2));
        players[2].ball_cooldown = 10.0;
        assert_eq!(ball_chaser(&players, TeamId::A, ball), Some(1));
        players[1].body_cooldown = 10.0;
        assert_eq!(ball_chaser(&players, TeamId::A, ball), None);
    }

    #[test]
    fn test_assist_spacing() {
        let field = Field::default();
        let mut players = arena();
        players[2].position = Point::new(400.0, 200.0);
        players[1].position = Point::new(300.0, 200.0);
        let mut ctx = ctx_for(&field, 1);
        ctx.chaser = Some(2);

        // Far from the chaser: untouched
        let far = Point::new(100.0, 100.0);
        assert_eq!(assisted_target(&players, 1, far, &ctx, 80.0), far);

        // Crowding the chaser: pushed out along chaser -> player
        let t = assisted_target(&players, 1, Point::new(405.0, 200.0), &ctx, 80.0);
        assert!((t.x - 320.0).abs() < 1e-4 && (t.y - 200.0).abs() < 1e-4);

        // The chaser itself is never corrected
        let own = Point::new(405.0, 200.0);
        assert_eq!(assisted_target(&players, 2, own, &ctx, 80.0), own);

        // Coincident with the chaser: default direction
        players[1].position = players[2].position;
        let t = assisted_target(&players, 1, own, &ctx, 80.0);
        assert!((t.x - 480.0).abs() < 1e-4);
    }
}
