//! Match events
//!
//! Events are informational: the engine renders them into the tick log and
//! never reads them back.

use super::types::TeamId;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum MatchEvent {
    Goal {
        team: TeamId,
        scorer: Option<String>,
    },
    OwnGoal {
        team: TeamId,
        player: String,
    },
    BallReset,
    Pass {
        team: TeamId,
        from: String,
        to: String,
    },
    Shot {
        team: TeamId,
        player: String,
    },
    TakeBall {
        team: TeamId,
        player: String,
    },
    FailedControl {
        team: TeamId,
        player: String,
    },
    BallDisputed,
    Steal {
        team: TeamId,
        player: String,
        victim: String,
    },
    TakeOff {
        team: TeamId,
        player: String,
        victim: String,
    },
    FailedDefending {
        team: TeamId,
        player: String,
        owner: String,
    },
}

impl fmt::Display for MatchEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatchEvent::Goal { team, scorer: Some(scorer) } => {
                write!(f, "{team} scores, goal by {scorer}")
            }
            MatchEvent::Goal { team, scorer: None } => write!(f, "{team} scores"),
            MatchEvent::OwnGoal { team, player } => {
                write!(f, "own goal by {team} {player}")
            }
            MatchEvent::BallReset => write!(f, "reset ball"),
            MatchEvent::Pass { team, from, to } => write!(f, "{team} {from} passes to {to}"),
            MatchEvent::Shot { team, player } => write!(f, "{team} {player} shoots at goal"),
            MatchEvent::TakeBall { team, player } => write!(f, "{team} {player} takes the ball"),
            MatchEvent::FailedControl { team, player } => {
                write!(f, "{team} {player} fails to control a fast ball")
            }
            MatchEvent::BallDisputed => write!(f, "ball bounces away"),
            MatchEvent::Steal { team, player, victim } => {
                write!(f, "{team} {player} steals the ball from {victim}")
            }
            MatchEvent::TakeOff { team, player, victim } => {
                write!(f, "{team} {player} knocks the ball off {victim}")
            }
            MatchEvent::FailedDefending { team, player, owner } => {
                write!(f, "{team} {player} fails defending {owner}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_rendering() {
        let goal = MatchEvent::Goal {
            team: TeamId::A,
            scorer: Some("Nine".into()),
        };
        assert_eq!(goal.to_string(), "Team A scores, goal by Nine");
        assert_eq!(MatchEvent::BallReset.to_string(), "reset ball");
        let steal = MatchEvent::Steal {
            team: TeamId::B,
            player: "Four".into(),
            victim: "Ten".into(),
        };
        assert_eq!(steal.to_string(), "Team B Four steals the ball from Ten");
    }
}
