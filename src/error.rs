use crate::types::{CategoryId, PlayerId};

/// Result type for game operations
pub type GameResult<T> = Result<T, GameError>;

/// Errors that can occur while editing the setup or running a round
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("Need at least {required} active players (have {active})")]
    NotEnoughPlayers { active: usize, required: usize },

    #[error("Pick a selected category with words")]
    NoEligibleCategory,

    /// Contract violation: a random pick was asked to choose from nothing
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("Invalid persisted state: {0}")]
    InvalidPersistedState(String),

    #[error("No round in progress")]
    NoLiveRound,

    #[error("Round is already completed")]
    RoundCompleted,

    #[error("Round is not completed yet")]
    RoundNotCompleted,

    #[error("Player not found: {0}")]
    PlayerNotFound(PlayerId),

    #[error("Category not found: {0}")]
    CategoryNotFound(CategoryId),

    #[error("{0} must not be empty")]
    EmptyInput(&'static str),
}

impl GameError {
    /// Stable code sent to the presentation layer
    pub fn code(&self) -> &'static str {
        match self {
            GameError::NotEnoughPlayers { .. } => "NOT_ENOUGH_PLAYERS",
            GameError::NoEligibleCategory => "NO_ELIGIBLE_CATEGORY",
            GameError::InvalidArgument(_) => "INVALID_ARGUMENT",
            GameError::InvalidPersistedState(_) => "INVALID_PERSISTED_STATE",
            GameError::NoLiveRound => "NO_LIVE_ROUND",
            GameError::RoundCompleted => "ROUND_COMPLETED",
            GameError::RoundNotCompleted => "ROUND_NOT_COMPLETED",
            GameError::PlayerNotFound(_) => "PLAYER_NOT_FOUND",
            GameError::CategoryNotFound(_) => "CATEGORY_NOT_FOUND",
            GameError::EmptyInput(_) => "EMPTY_INPUT",
        }
    }

    /// Eligibility problems are shown inline to the user; everything else is internal
    pub fn is_user_facing(&self) -> bool {
        !matches!(
            self,
            GameError::InvalidArgument(_) | GameError::InvalidPersistedState(_)
        )
    }
}
