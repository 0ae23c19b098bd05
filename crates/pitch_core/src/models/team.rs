use crate::engine::rules::{Rule, RuleBook};
use crate::error::{MatchError, Result};
use serde::{Deserialize, Serialize};

/// Players per side
pub const TEAM_SIZE: usize = 3;

/// A team as supplied by the caller. Player order is goalkeeper, defender, striker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub players: Vec<PlayerDefinition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerDefinition {
    pub name: String,
    /// Home zone in percent of field width/height
    #[serde(alias = "defaultZone")]
    pub default_zone: ZoneDefinition,
    pub rules: RuleSetDefinition,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneDefinition {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleDefinition {
    pub condition: String,
    pub action: String,
}

/// Both context lists, spelled out. Either may be empty but neither may be
/// missing or misspelled.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NamedRuleSet {
    pub attacking: Vec<RuleDefinition>,
    pub defending: Vec<RuleDefinition>,
}

/// Rule lists keyed by context, or the positional `[attacking, defending]` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleSetDefinition {
    Named(NamedRuleSet),
    Pair(Vec<RuleDefinition>, Vec<RuleDefinition>),
}

impl Default for RuleSetDefinition {
    fn default() -> Self {
        RuleSetDefinition::Named(NamedRuleSet::default())
    }
}

fn parse_rules(defs: &[RuleDefinition]) -> Result<Vec<Rule>> {
    defs.iter()
        .map(|d| Rule::parse(&d.condition, &d.action))
        .collect()
}

impl RuleSetDefinition {
    pub fn to_rule_book(&self) -> Result<RuleBook> {
        let (attacking, defending) = match self {
            RuleSetDefinition::Named(named) => (&named.attacking, &named.defending),
            RuleSetDefinition::Pair(attacking, defending) => (attacking, defending),
        };
        Ok(RuleBook {
            attacking: parse_rules(attacking)?,
            defending: parse_rules(defending)?,
        })
    }
}

impl ZoneDefinition {
    pub fn is_valid(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && (0.0..=100.0).contains(&self.x)
            && (0.0..=100.0).contains(&self.y)
    }
}

impl TeamDefinition {
    pub fn display_name(&self, fallback: &str) -> String {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(fallback)
            .to_string()
    }

    /// Check everything that can be checked without building a match.
    ///
    /// Returns the parsed rule books in player order.
    pub fn validate(&self, label: &str) -> Result<Vec<RuleBook>> {
        if self.players.len() != TEAM_SIZE {
            return Err(MatchError::InvalidTeamSize {
                team: label.to_string(),
                expected: TEAM_SIZE,
                found: self.players.len(),
            });
        }

        self.players
            .iter()
            .map(|p| {
                if !p.default_zone.is_valid() {
                    return Err(MatchError::InvalidZone {
                        player: p.name.clone(),
                        x: p.default_zone.x,
                        y: p.default_zone.y,
                    });
                }
                p.rules.to_rule_book()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::rules::{Action, Condition};
    use serde_json::json;

    fn team_json(rules: serde_json::Value) -> serde_json::Value {
        json!({
            "name": "Reds",
            "players": [
                { "name": "Keeper", "defaultZone": { "x": 5, "y": 50 }, "rules": rules.clone() },
                { "name": "Back", "default_zone": { "x": 25, "y": 30 }, "rules": rules.clone() },
                { "name": "Nine", "default_zone": { "x": 45, "y": 70 }, "rules": rules }
            ]
        })
    }

    #[test]
    fn test_named_and_pair_forms_agree() {
        let named: TeamDefinition = serde_json::from_value(team_json(json!({
            "attacking": [{ "condition": "has_ball", "action": "shoot" }],
            "defending": [{ "condition": "The ball is in my side", "action": "Go to the ball" }]
        })))
        .unwrap();
        let pair: TeamDefinition = serde_json::from_value(team_json(json!([
            [{ "condition": "I has the ball", "action": "Shoot to goal" }],
            [{ "condition": "ball_in_own_half", "action": "move_to_ball" }]
        ])))
        .unwrap();

        let a = named.validate("Team A").unwrap();
        let b = pair.validate("Team A").unwrap();
        assert_eq!(a, b);
        assert_eq!(a[0].attacking, vec![Rule::new(Condition::HasBall, Action::Shoot)]);
        assert_eq!(a[2].defending, vec![Rule::new(Condition::BallInOwnHalf, Action::MoveToBall)]);
        assert_eq!(named.display_name("Team A"), "Reds");
    }

    fn empty_rules() -> serde_json::Value {
        json!({ "attacking": [], "defending": [] })
    }

    #[test]
    fn test_wrong_team_size() {
        let mut team: TeamDefinition = serde_json::from_value(team_json(empty_rules())).unwrap();
        team.players.pop();
        let err = team.validate("Team B").unwrap_err();
        assert!(matches!(
            err,
            MatchError::InvalidTeamSize { expected: 3, found: 2, .. }
        ));
    }

    #[test]
    fn test_zone_out_of_range() {
        let mut team: TeamDefinition = serde_json::from_value(team_json(empty_rules())).unwrap();
        team.players[1].default_zone.x = 120.0;
        assert!(matches!(team.validate("Team A"), Err(MatchError::InvalidZone { .. })));
        team.players[1].default_zone.x = f32::NAN;
        assert!(matches!(team.validate("Team A"), Err(MatchError::InvalidZone { .. })));
    }

    #[test]
    fn test_unknown_tags_are_load_errors() {
        let team: TeamDefinition = serde_json::from_value(team_json(json!({
            "attacking": [{ "condition": "moon_is_full", "action": "shoot" }],
            "defending": []
        })))
        .unwrap();
        assert!(matches!(team.validate("Team A"), Err(MatchError::UnknownCondition(_))));

        let team: TeamDefinition = serde_json::from_value(team_json(json!({
            "attacking": [],
            "defending": [{ "condition": "marked", "action": "dance" }]
        })))
        .unwrap();
        assert!(matches!(team.validate("Team A"), Err(MatchError::UnknownAction(_))));
    }

    #[test]
    fn test_missing_or_misspelled_rule_lists_fail_to_load() {
        let misspelled = team_json(json!({
            "atacking": [{ "condition": "has_ball", "action": "shoot" }],
            "defending": []
        }));
        assert!(serde_json::from_value::<TeamDefinition>(misspelled).is_err());

        let half = team_json(json!({ "attacking": [] }));
        assert!(serde_json::from_value::<TeamDefinition>(half).is_err());

        assert!(serde_json::from_value::<TeamDefinition>(team_json(json!({}))).is_err());

        let mut no_rules = team_json(empty_rules());
        no_rules["players"][2]
            .as_object_mut()
            .unwrap()
            .remove("rules");
        let err: MatchError = serde_json::from_value::<TeamDefinition>(no_rules)
            .unwrap_err()
            .into();
        assert!(matches!(err, MatchError::Deserialization(_)));
    }

    #[test]
    fn test_unnamed_team_falls_back() {
        let team = TeamDefinition { name: Some("  ".into()), players: vec![] };
        assert_eq!(team.display_name("Team B"), "Team B");
    }
}
