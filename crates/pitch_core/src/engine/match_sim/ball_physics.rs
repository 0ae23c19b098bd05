//! Ball integration and line crossings
//!
//! The ball either follows its owner or moves freely with friction. After it
//! moves, a ball past either goal line is a goal (inside the mouth) or out
//! (wide). Both end in a reset to the centre spot.

use super::MatchEngine;
use crate::engine::events::MatchEvent;
use crate::engine::field::LineCrossing;
use crate::engine::types::TeamId;

impl MatchEngine {
    pub(crate) fn update_ball(&mut self) {
        match self.owner {
            Some(owner) => self.ball.pin_to(self.players[owner].position),
            None => self
                .ball
                .integrate_free(&self.field, self.config.physics.ball_decay),
        }

        match self.field.line_crossing(self.ball.position) {
            None => {}
            Some(LineCrossing::Goal(side)) => {
                self.score_goal(TeamId::defending(side).opponent());
                self.reset_ball();
            }
            Some(LineCrossing::Wide(_)) => {
                log::debug!(
                    "ball out at ({:.1}, {:.1})",
                    self.ball.position.x,
                    self.ball.position.y
                );
                self.push_event(MatchEvent::BallReset);
                self.reset_ball();
            }
        }
    }

    /// Credit a goal to `team`. The last toucher gets it if they are on the
    /// scoring side, otherwise it is their own goal.
    fn score_goal(&mut self, team: TeamId) {
        self.stats.goals[team.index()] += 1;

        match self.last_toucher {
            Some(idx) if self.players[idx].team == team => {
                let scorer = &mut self.players[idx];
                scorer.stats.goals += 1;
                let name = scorer.name.clone();
                log::debug!("goal for {team} by {name}");
                self.push_event(MatchEvent::Goal {
                    team,
                    scorer: Some(name),
                });
            }
            Some(idx) => {
                let unlucky = &mut self.players[idx];
                unlucky.stats.own_goals += 1;
                let (own_team, name) = (unlucky.team, unlucky.name.clone());
                log::debug!("goal for {team}, own goal by {name}");
                self.push_event(MatchEvent::Goal { team, scorer: None });
                self.push_event(MatchEvent::OwnGoal {
                    team: own_team,
                    player: name,
                });
            }
            None => {
                log::debug!("goal for {team}");
                self.push_event(MatchEvent::Goal { team, scorer: None });
            }
        }
    }

    /// Ball to the centre spot, at rest and unowned.
    pub(crate) fn reset_ball(&mut self) {
        self.ball.reset(&self.field);
        self.clear_owner();
        self.last_toucher = None;
        self.last_passer = None;
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_fixtures::*;
    use crate::engine::types::Point;

    #[test]
    fn test_goal_on_right_line_counts_for_team_a() {
        let mut engine = idle_engine(5);
        engine.last_toucher = Some(2);
        engine.ball.position = Point::new(775.0, 200.0);
        engine.ball.velocity = Point::new(6.0, 0.0);
        engine.update_ball();

        assert_eq!(engine.stats.goals, [1, 0]);
        assert_eq!(engine.players[2].stats.goals, 1);
        assert_eq!(engine.ball.position, engine.field.center());
        assert_eq!(engine.ball.velocity, Point::ZERO);
        assert_eq!(engine.last_toucher, None);
    }

    #[test]
    fn test_own_goal() {
        let mut engine = idle_engine(5);
        // Team A defender knocks it past its own line
        engine.last_toucher = Some(1);
        engine.ball.position = Point::new(25.0, 210.0);
        engine.ball.velocity = Point::new(-5.0, 0.0);
        engine.update_ball();

        assert_eq!(engine.stats.goals, [0, 1]);
        assert_eq!(engine.players[1].stats.own_goals, 1);
        assert_eq!(engine.players[1].stats.goals, 0);
    }

    #[test]
    fn test_wide_ball_resets_without_score() {
        let mut engine = idle_engine(5);
        engine.set_owner(0);
        engine.players[0].position = Point::new(15.0, 30.0);
        engine.update_ball();

        assert_eq!(engine.stats.goals, [0, 0]);
        assert_eq!(engine.owner, None);
        assert!(!engine.players[0].has_ball);
        assert_eq!(engine.ball.position, engine.field.center());
    }

    #[test]
    fn test_owned_ball_follows_owner() {
        let mut engine = idle_engine(5);
        engine.set_owner(4);
        engine.players[4].position = Point::new(500.0, 150.0);
        engine.update_ball();
        assert_eq!(engine.ball.position, Point::new(500.0, 150.0));
    }
}
