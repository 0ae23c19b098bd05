pub mod team;

pub use team::{
    NamedRuleSet, PlayerDefinition, RuleDefinition, RuleSetDefinition, TeamDefinition,
    ZoneDefinition, TEAM_SIZE,
};
