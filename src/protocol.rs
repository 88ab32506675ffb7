use crate::types::*;
use serde::{Deserialize, Serialize};

/// Actions the presentation layer forwards to the session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "t", rename_all = "snake_case")]
pub enum ClientMessage {
    GetSetup,
    GetEligibility,
    AddPlayer {
        name: String,
    },
    TogglePlayer {
        player_id: PlayerId,
    },
    RemovePlayer {
        player_id: PlayerId,
    },
    AddCategory {
        name: String,
    },
    ToggleCategory {
        category_id: CategoryId,
    },
    RemoveCategory {
        category_id: CategoryId,
    },
    AddWord {
        category_id: CategoryId,
        word: String,
    },
    StartRound,
    /// Current player taps "Reveal role"
    RevealCurrent,
    /// "Next player" or, on the last turn, "Finish round"
    Advance,
    ResetRound,
    GetRound,
    /// End-of-round "Show roles" / "Hide roles"
    ToggleRoles,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "t", rename_all = "snake_case")]
pub enum ServerMessage {
    Setup {
        setup: SetupState,
        eligibility: EligibilitySummary,
    },
    Eligibility {
        eligibility: EligibilitySummary,
    },
    Round {
        round: RoundView,
    },
    Error {
        code: String,
        msg: String,
    },
}

impl From<crate::error::GameError> for ServerMessage {
    fn from(err: crate::error::GameError) -> Self {
        ServerMessage::Error {
            code: err.code().to_string(),
            msg: err.to_string(),
        }
    }
}
