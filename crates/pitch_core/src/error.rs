use thiserror::Error;

/// Errors surfaced while building or driving a match.
///
/// Everything here is raised at setup time; once a `MatchEngine` exists its
/// `step()` cannot fail.
#[derive(Error, Debug)]
pub enum MatchError {
    #[error("Invalid team size for {team}: expected {expected}, found {found}")]
    InvalidTeamSize {
        team: String,
        expected: usize,
        found: usize,
    },

    #[error("Invalid home zone for {player}: ({x}, {y}) must be percentages in 0..=100")]
    InvalidZone { player: String, x: f32, y: f32 },

    #[error("Unknown rule condition: {0}")]
    UnknownCondition(String),

    #[error("Unknown rule action: {0}")]
    UnknownAction(String),

    #[error("Invalid engine config: {0}")]
    InvalidConfig(String),

    #[error("Unsupported schema version: {0}")]
    UnsupportedSchema(u8),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl MatchError {
    /// True when the error comes from a team definition rather than engine tuning.
    pub fn is_team_error(&self) -> bool {
        matches!(
            self,
            MatchError::InvalidTeamSize { .. }
                | MatchError::InvalidZone { .. }
                | MatchError::UnknownCondition(_)
                | MatchError::UnknownAction(_)
        )
    }
}

impl From<serde_json::Error> for MatchError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            MatchError::Deserialization(err.to_string())
        } else {
            MatchError::Serialization(err.to_string())
        }
    }
}

impl From<serde_yaml::Error> for MatchError {
    fn from(err: serde_yaml::Error) -> Self {
        MatchError::Deserialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MatchError>;
