//! Rule vocabulary
//!
//! A rule is a `(Condition, Action)` pair. Both sides are closed enums: an
//! unknown tag is rejected when the team is loaded, never at decision time.
//!
//! Each variant has a canonical snake_case tag and a human-readable label.
//! Either spelling is accepted on input; the tag is what gets serialized.

use crate::error::MatchError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    HasBall,
    Marked,
    NearRival,
    BallNearOwnGoal,
    BallInOwnHalf,
    BallInRivalHalf,
    BallNearRivalGoal,
    RivalInOwnHalf,
    NoRivalInOwnHalf,
}

impl Condition {
    pub const ALL: [Condition; 9] = [
        Condition::HasBall,
        Condition::Marked,
        Condition::NearRival,
        Condition::BallNearOwnGoal,
        Condition::BallInOwnHalf,
        Condition::BallInRivalHalf,
        Condition::BallNearRivalGoal,
        Condition::RivalInOwnHalf,
        Condition::NoRivalInOwnHalf,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Condition::HasBall => "has_ball",
            Condition::Marked => "marked",
            Condition::NearRival => "near_rival",
            Condition::BallNearOwnGoal => "ball_near_own_goal",
            Condition::BallInOwnHalf => "ball_in_own_half",
            Condition::BallInRivalHalf => "ball_in_rival_half",
            Condition::BallNearRivalGoal => "ball_near_rival_goal",
            Condition::RivalInOwnHalf => "rival_in_own_half",
            Condition::NoRivalInOwnHalf => "no_rival_in_own_half",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Condition::HasBall => "I have the ball",
            Condition::Marked => "I am marked",
            Condition::NearRival => "I am near a rival",
            Condition::BallNearOwnGoal => "The ball is near my goal",
            Condition::BallInOwnHalf => "The ball is in my side",
            Condition::BallInRivalHalf => "The ball is in other side",
            Condition::BallNearRivalGoal => "The ball is near rival goal",
            Condition::RivalInOwnHalf => "Rival in my side",
            Condition::NoRivalInOwnHalf => "No rival in my side",
        }
    }
}

impl FromStr for Condition {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        // Older team files spell this one ungrammatically
        if s == "I has the ball" {
            return Ok(Condition::HasBall);
        }
        Condition::ALL
            .into_iter()
            .find(|c| c.tag() == s || c.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| MatchError::UnknownCondition(s.to_string()))
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    MoveToBall,
    MoveToNearestRival,
    MoveToOwnGoal,
    MoveToRivalGoal,
    Advance,
    Retreat,
    Pass,
    Shoot,
    SwitchFlank,
    #[default]
    HoldZone,
}

impl Action {
    pub const ALL: [Action; 10] = [
        Action::MoveToBall,
        Action::MoveToNearestRival,
        Action::MoveToOwnGoal,
        Action::MoveToRivalGoal,
        Action::Advance,
        Action::Retreat,
        Action::Pass,
        Action::Shoot,
        Action::SwitchFlank,
        Action::HoldZone,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Action::MoveToBall => "move_to_ball",
            Action::MoveToNearestRival => "move_to_nearest_rival",
            Action::MoveToOwnGoal => "move_to_own_goal",
            Action::MoveToRivalGoal => "move_to_rival_goal",
            Action::Advance => "advance",
            Action::Retreat => "retreat",
            Action::Pass => "pass",
            Action::Shoot => "shoot",
            Action::SwitchFlank => "switch_flank",
            Action::HoldZone => "hold_zone",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Action::MoveToBall => "Go to the ball",
            Action::MoveToNearestRival => "Go to near rival",
            Action::MoveToOwnGoal => "Go to my goal",
            Action::MoveToRivalGoal => "Go to rival goal",
            Action::Advance => "Go forward",
            Action::Retreat => "Go back",
            Action::Pass => "Pass the ball",
            Action::Shoot => "Shoot to goal",
            Action::SwitchFlank => "Change side",
            Action::HoldZone => "Keep in my zone",
        }
    }

    /// Needs the player to be holding the ball
    pub fn requires_ball(self) -> bool {
        matches!(self, Action::Pass | Action::Shoot)
    }

    /// Counts toward picking a team's ball chaser
    pub fn is_ball_approach(self) -> bool {
        matches!(self, Action::MoveToBall | Action::MoveToNearestRival)
    }
}

impl FromStr for Action {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Action::ALL
            .into_iter()
            .find(|a| a.tag() == s || a.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| MatchError::UnknownAction(s.to_string()))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub condition: Condition,
    pub action: Action,
}

impl Rule {
    pub fn new(condition: Condition, action: Action) -> Self {
        Self { condition, action }
    }

    pub fn parse(condition: &str, action: &str) -> Result<Self, MatchError> {
        Ok(Self {
            condition: condition.parse()?,
            action: action.parse()?,
        })
    }
}

/// Ordered rule lists for both possession contexts. Order is significant.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RuleBook {
    /// Used while the player's team holds the ball
    pub attacking: Vec<Rule>,
    /// Used otherwise, including while the ball is loose
    pub defending: Vec<Rule>,
}

impl RuleBook {
    pub fn for_context(&self, team_has_ball: bool) -> &[Rule] {
        if team_has_ball {
            &self.attacking
        } else {
            &self.defending
        }
    }
}
