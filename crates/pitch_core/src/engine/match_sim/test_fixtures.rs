//! Test Fixtures Module
//!
//! Shared builders for MatchEngine tests.
//!
//! ## Usage
//! ```rust,ignore
//! use crate::engine::match_sim::test_fixtures::*;
//! ```

use super::MatchEngine;
use crate::engine::config::EngineConfig;
use crate::engine::rules::Rule;
use crate::engine::types::Point;
use crate::models::TeamDefinition;
use serde_json::json;

/// A team with a reasonable rule set for every role.
pub fn demo_team(name: &str) -> TeamDefinition {
    serde_json::from_value(json!({
        "name": name,
        "players": [
            {
                "name": format!("{name} Keeper"),
                "default_zone": { "x": 8, "y": 50 },
                "rules": {
                    "attacking": [
                        { "condition": "has_ball", "action": "pass" }
                    ],
                    "defending": [
                        { "condition": "ball_near_own_goal", "action": "move_to_ball" },
                        { "condition": "ball_in_own_half", "action": "move_to_own_goal" }
                    ]
                }
            },
            {
                "name": format!("{name} Back"),
                "default_zone": { "x": 30, "y": 35 },
                "rules": {
                    "attacking": [
                        { "condition": "marked", "action": "pass" },
                        { "condition": "has_ball", "action": "advance" },
                        { "condition": "ball_in_rival_half", "action": "switch_flank" }
                    ],
                    "defending": [
                        { "condition": "ball_in_own_half", "action": "move_to_ball" },
                        { "condition": "near_rival", "action": "move_to_nearest_rival" }
                    ]
                }
            },
            {
                "name": format!("{name} Nine"),
                "default_zone": { "x": 55, "y": 60 },
                "rules": {
                    "attacking": [
                        { "condition": "ball_near_rival_goal", "action": "shoot" },
                        { "condition": "marked", "action": "pass" },
                        { "condition": "has_ball", "action": "move_to_rival_goal" }
                    ],
                    "defending": [
                        { "condition": "ball_in_rival_half", "action": "move_to_ball" },
                        { "condition": "no_rival_in_own_half", "action": "advance" }
                    ]
                }
            }
        ]
    }))
    .expect("demo team fixture is valid")
}

/// A team with no rules at all: everyone holds their zone.
pub fn idle_team(name: &str) -> TeamDefinition {
    let mut team = demo_team(name);
    for p in &mut team.players {
        p.rules = Default::default();
    }
    team
}

pub fn demo_engine(seed: u64) -> MatchEngine {
    MatchEngine::new(
        &demo_team("Reds"),
        &demo_team("Blues"),
        EngineConfig::default(),
        seed,
    )
    .expect("demo engine builds")
}

pub fn idle_engine(seed: u64) -> MatchEngine {
    MatchEngine::new(
        &idle_team("Reds"),
        &idle_team("Blues"),
        EngineConfig::default(),
        seed,
    )
    .expect("idle engine builds")
}

/// Put a loose ball at rest on `at`.
pub fn place_ball(engine: &mut MatchEngine, at: Point) {
    engine.clear_owner();
    engine.ball.position = at;
    engine.ball.velocity = Point::ZERO;
}

/// Park player `idx` on `at` with nowhere to go.
pub fn park(engine: &mut MatchEngine, idx: usize, at: Point) {
    let p = &mut engine.players[idx];
    p.position = at;
    p.home_zone = at;
    p.target = None;
    p.velocity = Point::ZERO;
}

pub fn rule(condition: &str, action: &str) -> Rule {
    Rule::parse(condition, action).expect("fixture rule parses")
}
