//! Match engine
//!
//! Leaf modules (`field`, `ball`, `movement`, `rules`, `decision`, `actions`)
//! are plain data and functions over an indexed player arena. `match_sim`
//! owns the state and runs the tick.

pub mod actions;
pub mod ball;
pub mod config;
pub mod decision;
pub mod events;
pub mod field;
pub mod match_sim;
pub mod movement;
pub mod physics_constants;
pub mod player;
pub mod rules;
pub mod snapshot;
pub mod stats;
pub mod types;

pub use config::EngineConfig;
pub use events::MatchEvent;
pub use field::Field;
pub use match_sim::MatchEngine;
pub use player::{MatchPlayer, Role};
pub use rules::{Action, Condition, Rule, RuleBook};
pub use snapshot::{BallRenderData, PlayerRenderData, TeamRenderData, TickSnapshot};
pub use stats::{MatchSummary, PlayerSummary, TeamSummary};
pub use types::{FieldSide, Point, TeamId};
