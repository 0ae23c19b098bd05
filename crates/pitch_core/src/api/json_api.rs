use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{debug, info};

use crate::engine::{EngineConfig, MatchEngine, MatchSummary, TickSnapshot};
use crate::error::{MatchError, Result};
use crate::models::TeamDefinition;

pub const SCHEMA_VERSION: u8 = 1;

/// Tick budget when a request does not name one
pub const DEFAULT_TICKS: u64 = 5000;

/// Bundled two-team demo request
pub const DEMO_MATCH_JSON: &str = include_str!("../../data/demo_match.json");

fn default_ticks() -> u64 {
    DEFAULT_TICKS
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRequest {
    pub schema_version: u8,
    #[serde(default)]
    pub seed: u64,
    #[serde(default = "default_ticks")]
    pub ticks: u64,
    #[serde(alias = "teamA")]
    pub team_a: TeamDefinition,
    #[serde(alias = "teamB")]
    pub team_b: TeamDefinition,
    /// Engine tuning; `PITCH_PROFILE` picks a preset when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<EngineConfig>,
}

impl MatchRequest {
    pub fn demo() -> Result<Self> {
        Ok(serde_json::from_str(DEMO_MATCH_JSON)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResponse {
    pub seed: u64,
    pub history: Vec<TickSnapshot>,
    pub summary: MatchSummary,
    /// Hex SHA-256 of the JSON-serialized history
    pub history_sha256: String,
}

pub fn history_digest(history: &[TickSnapshot]) -> Result<String> {
    let bytes =
        serde_json::to_vec(history).map_err(|e| MatchError::Serialization(e.to_string()))?;
    Ok(format!("{:x}", Sha256::digest(&bytes)))
}

pub fn simulate_match(request: &MatchRequest) -> Result<MatchResponse> {
    if request.schema_version != SCHEMA_VERSION {
        return Err(MatchError::UnsupportedSchema(request.schema_version));
    }

    let config = match &request.config {
        Some(config) => config.clone(),
        None => EngineConfig::from_env_or_default(),
    };
    debug!(seed = request.seed, ticks = request.ticks, "starting match");

    let mut engine = MatchEngine::new(&request.team_a, &request.team_b, config, request.seed)?;
    engine.run(request.ticks);

    let summary = engine.summary();
    let history = engine.into_history();
    let history_sha256 = history_digest(&history)?;

    let (a, b) = summary.score();
    info!(
        seed = request.seed,
        ticks = request.ticks,
        "{} {} - {} {}",
        summary.team_a.name,
        a,
        b,
        summary.team_b.name
    );

    Ok(MatchResponse {
        seed: request.seed,
        history,
        summary,
        history_sha256,
    })
}

pub fn simulate_match_json(request_json: &str) -> Result<String> {
    let request: MatchRequest = serde_json::from_str(request_json)?;
    let response = simulate_match(&request)?;
    serde_json::to_string(&response).map_err(|e| MatchError::Serialization(e.to_string()))
}

/// Run independent matches in parallel. Results keep the request order.
pub fn simulate_batch(requests: &[MatchRequest]) -> Vec<Result<MatchResponse>> {
    info!(matches = requests.len(), "running match batch");
    requests.par_iter().map(simulate_match).collect()
}
