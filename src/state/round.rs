use super::AppState;
use crate::engine;
use crate::error::{GameError, GameResult};
use crate::types::*;

impl AppState {
    /// Draw a new round from the current setup, replacing any live one.
    ///
    /// On failure the live round (if any) is left as it was.
    pub async fn start_round(&self) -> GameResult<Round> {
        let setup = self.setup.read().await;

        let drawn = {
            let mut rng = self.rng.lock().await;
            engine::start_round(&setup.players, &setup.categories, &mut **rng)
        };

        let round = match drawn {
            Ok(round) => round,
            Err(e) => {
                if e.is_user_facing() {
                    tracing::info!("Cannot start round: {}", e);
                } else {
                    tracing::error!("Round draw violated its contract: {}", e);
                }
                return Err(e);
            }
        };

        *self.round.write().await = Some(round.clone());
        *self.roles_shown.write().await = false;

        tracing::info!(
            "Started round {} in category {} with {} players",
            round.id,
            round.category_name,
            round.order.len()
        );
        Ok(round)
    }

    /// Get the live round
    pub async fn get_current_round(&self) -> Option<Round> {
        self.round.read().await.clone()
    }

    /// Let the current player see their role
    pub async fn reveal_current(&self) -> GameResult<Round> {
        let mut round = self.round.write().await;
        let round = round.as_mut().ok_or(GameError::NoLiveRound)?;

        engine::reveal_current(round)?;
        Ok(round.clone())
    }

    /// Move to the next player, completing the round after the last one
    pub async fn advance(&self) -> GameResult<Round> {
        let mut round = self.round.write().await;
        let round = round.as_mut().ok_or(GameError::NoLiveRound)?;

        engine::advance(round)?;
        if round.completed {
            tracing::info!("Round {} completed", round.id);
        } else {
            tracing::debug!(
                "Round {} turn {}/{}",
                round.id,
                round.current_index + 1,
                round.order.len()
            );
        }
        Ok(round.clone())
    }

    /// Discard the live round
    pub async fn reset_round(&self) {
        let previous = self.round.write().await.take();
        *self.roles_shown.write().await = false;

        if let Some(round) = previous {
            tracing::info!("Cleared round {}", round.id);
        }
    }

    /// What the presentation layer should render right now.
    ///
    /// During a turn only the current player's role is included, and only
    /// once they have revealed.
    pub async fn round_view(&self) -> RoundView {
        let setup = self.setup.read().await;
        let round = self.round.read().await;
        let roles_shown = *self.roles_shown.read().await;

        let Some(round) = round.as_ref() else {
            return RoundView::Idle;
        };

        match (round.phase(), engine::current_player_id(round)) {
            (RoundPhase::InProgress { index, reveal_open }, Some(player_id)) => {
                RoundView::InProgress(TurnView {
                    round_id: round.id.clone(),
                    position: index + 1,
                    total: round.order.len(),
                    player: PlayerCard::lookup(&setup, player_id),
                    category_name: round.category_name.clone(),
                    category_emoji: round.category_emoji.clone(),
                    reveal_open,
                    is_last_turn: round.is_last_turn(),
                    role: reveal_open.then(|| engine::revealed_word_for(round, player_id)),
                })
            }
            _ => RoundView::Completed(CompletedView {
                round_id: round.id.clone(),
                category_name: round.category_name.clone(),
                category_emoji: round.category_emoji.clone(),
                roles_shown,
                roles: if roles_shown {
                    engine::final_roles(round, &setup).ok()
                } else {
                    None
                },
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::random::ScriptedRandomness;
    use crate::setup_store::SetupStore;
    use crate::state::AppState;
    use crate::storage::MemoryStore;
    use crate::types::*;

    fn scripted(values: Vec<usize>) -> AppState {
        AppState::new(
            SetupStore::new(Box::new(MemoryStore::new())),
            Box::new(ScriptedRandomness::new(values)),
        )
    }

    fn turn(view: RoundView) -> TurnView {
        match view {
            RoundView::InProgress(turn) => turn,
            other => panic!("Expected a turn, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_role_hidden_until_reveal() {
        // category c1, word 0 (momo), imposter p1, shuffle -> [p2, p3, p1]
        let state = scripted(vec![0]);
        state.start_round().await.unwrap();

        let view = turn(state.round_view().await);
        assert_eq!(view.player.id, "p2");
        assert_eq!(view.position, 1);
        assert_eq!(view.total, 3);
        assert!(!view.reveal_open);
        assert_eq!(view.role, None);

        state.reveal_current().await.unwrap();
        let view = turn(state.round_view().await);
        assert_eq!(view.role, Some(Role::Word("momo".to_string())));
        assert_eq!(view.category_name, "Foods");
    }

    #[tokio::test]
    async fn test_imposter_sees_sentinel_on_last_turn() {
        let state = scripted(vec![0]);
        let round = state.start_round().await.unwrap();
        assert_eq!(round.imposter_id, "p1");
        assert_eq!(round.order, vec!["p2", "p3", "p1"]);

        state.advance().await.unwrap();
        state.advance().await.unwrap();

        let view = turn(state.round_view().await);
        assert!(view.is_last_turn);
        assert_eq!(view.player.name, "aayush");

        state.reveal_current().await.unwrap();
        let view = turn(state.round_view().await);
        assert_eq!(view.role, Some(Role::Imposter));
    }

    #[tokio::test]
    async fn test_new_round_replaces_old_and_clears_roles() {
        let state = scripted(vec![0]);
        let first = state.start_round().await.unwrap();
        for _ in 0..3 {
            state.advance().await.unwrap();
        }
        assert!(state.toggle_roles().await.unwrap());

        let second = state.start_round().await.unwrap();
        assert_ne!(first.id, second.id);
        assert!(!*state.roles_shown.read().await);
        assert_eq!(state.get_current_round().await.unwrap().id, second.id);
    }
}
