//! Message dispatch
//!
//! Entry point for the presentation layer: every [`ClientMessage`] maps to
//! one [`AppState`] call and is answered with exactly one [`ServerMessage`].

use crate::error::GameResult;
use crate::protocol::{ClientMessage, ServerMessage};
use crate::state::AppState;
use std::sync::Arc;

/// Handle a client message and return the response
pub async fn handle_message(msg: ClientMessage, state: &Arc<AppState>) -> ServerMessage {
    match msg {
        ClientMessage::GetSetup => setup_snapshot(state).await,

        ClientMessage::GetEligibility => ServerMessage::Eligibility {
            eligibility: state.eligibility().await,
        },

        ClientMessage::AddPlayer { name } => {
            after_setup_edit(state, state.add_player(name).await).await
        }

        ClientMessage::TogglePlayer { player_id } => {
            after_setup_edit(state, state.toggle_player(&player_id).await).await
        }

        ClientMessage::RemovePlayer { player_id } => {
            after_setup_edit(state, state.remove_player(&player_id).await).await
        }

        ClientMessage::AddCategory { name } => {
            after_setup_edit(state, state.add_category(name).await).await
        }

        ClientMessage::ToggleCategory { category_id } => {
            after_setup_edit(state, state.toggle_category(&category_id).await).await
        }

        ClientMessage::RemoveCategory { category_id } => {
            after_setup_edit(state, state.remove_category(&category_id).await).await
        }

        ClientMessage::AddWord { category_id, word } => {
            after_setup_edit(state, state.add_word(&category_id, word).await).await
        }

        ClientMessage::StartRound => {
            after_round_action(state, state.start_round().await).await
        }

        ClientMessage::RevealCurrent => {
            after_round_action(state, state.reveal_current().await).await
        }

        ClientMessage::Advance => after_round_action(state, state.advance().await).await,

        ClientMessage::ResetRound => {
            state.reset_round().await;
            round_snapshot(state).await
        }

        ClientMessage::GetRound => round_snapshot(state).await,

        ClientMessage::ToggleRoles => {
            after_round_action(state, state.toggle_roles().await).await
        }
    }
}

async fn setup_snapshot(state: &Arc<AppState>) -> ServerMessage {
    let setup = state.get_setup().await;
    let eligibility = setup.eligibility();
    ServerMessage::Setup { setup, eligibility }
}

async fn round_snapshot(state: &Arc<AppState>) -> ServerMessage {
    ServerMessage::Round {
        round: state.round_view().await,
    }
}

async fn after_setup_edit<T>(state: &Arc<AppState>, result: GameResult<T>) -> ServerMessage {
    match result {
        Ok(_) => setup_snapshot(state).await,
        Err(e) => e.into(),
    }
}

/// Errors leave the live round untouched, so the caller only needs the message
async fn after_round_action<T>(state: &Arc<AppState>, result: GameResult<T>) -> ServerMessage {
    match result {
        Ok(_) => round_snapshot(state).await,
        Err(e) => e.into(),
    }
}
