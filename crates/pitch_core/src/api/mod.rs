pub mod json_api;

pub use json_api::{
    history_digest, simulate_batch, simulate_match, simulate_match_json, MatchRequest,
    MatchResponse, DEFAULT_TICKS, DEMO_MATCH_JSON, SCHEMA_VERSION,
};
