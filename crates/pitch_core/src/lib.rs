//! # pitch_core - Deterministic 3-a-side Match Simulation Engine
//!
//! Two teams of three players (goalkeeper, defender, striker) play on a
//! rectangular field. Every player follows an ordered list of
//! `(condition, action)` rules, one list for when its team has the ball and
//! one for when it does not.
//!
//! ## Features
//! - Deterministic simulation (same teams + seed = byte-identical history)
//! - Per-tick replay snapshots with event logs
//! - Match summary with per-team and per-player statistics
//! - JSON API and parallel batch runner

// Game engine APIs often require many parameters for physics, state, etc.
#![allow(clippy::too_many_arguments)]
// Loop style - index loops over the player arena read better here
#![allow(clippy::needless_range_loop)]

pub mod api;
pub mod engine;
pub mod error;
pub mod models;

pub use api::{simulate_batch, simulate_match, simulate_match_json, MatchRequest, MatchResponse};
pub use engine::{EngineConfig, MatchEngine, MatchSummary, TickSnapshot};
pub use error::{MatchError, Result};
pub use models::TeamDefinition;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
