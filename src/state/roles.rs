use super::AppState;
use crate::engine;
use crate::error::{GameError, GameResult};
use crate::types::*;

impl AppState {
    /// Show or hide everyone's role once the round is over.
    /// Returns whether roles are now shown.
    pub async fn toggle_roles(&self) -> GameResult<bool> {
        let round = self.round.read().await;
        let round = round.as_ref().ok_or(GameError::NoLiveRound)?;
        if !round.completed {
            return Err(GameError::RoundNotCompleted);
        }

        let mut shown = self.roles_shown.write().await;
        *shown = !*shown;
        tracing::debug!("Round {} roles shown={}", round.id, *shown);
        Ok(*shown)
    }

    /// Every player's role for the finished round, in turn order
    pub async fn final_roles(&self) -> GameResult<Vec<FinalRole>> {
        let setup = self.setup.read().await;
        let round = self.round.read().await;
        let round = round.as_ref().ok_or(GameError::NoLiveRound)?;

        engine::final_roles(round, &setup)
    }
}
