//! Round engine: draws a round and walks it through the turn order.
//!
//! Everything here is synchronous and side-effect free apart from the
//! injected random source. Owning the single live round is the job of
//! [`crate::state::AppState`].

use crate::error::{GameError, GameResult};
use crate::random::{pick_uniform, shuffle, Randomness};
use crate::types::*;

/// Draw a new round.
///
/// Inactive players and ineligible categories in the inputs are skipped, so
/// callers may pass the whole roster.
pub fn start_round(
    players: &[Player],
    categories: &[Category],
    rng: &mut dyn Randomness,
) -> GameResult<Round> {
    let active: Vec<&Player> = players.iter().filter(|p| p.active).collect();
    if active.len() < MIN_ACTIVE_PLAYERS {
        return Err(GameError::NotEnoughPlayers {
            active: active.len(),
            required: MIN_ACTIVE_PLAYERS,
        });
    }

    let eligible: Vec<&Category> = categories.iter().filter(|c| c.is_eligible()).collect();
    if eligible.is_empty() {
        return Err(GameError::NoEligibleCategory);
    }

    // Category, word and impostor are independent draws
    let category = *pick_uniform(rng, &eligible)?;
    let word = pick_uniform(rng, &category.words)?.clone();
    let imposter = *pick_uniform(rng, &active)?;

    let ids: Vec<PlayerId> = active.iter().map(|p| p.id.clone()).collect();
    let order = shuffle(rng, &ids);

    Ok(Round {
        id: ulid::Ulid::new().to_string(),
        category_id: category.id.clone(),
        category_name: category.name.clone(),
        category_emoji: category.emoji.clone(),
        word,
        imposter_id: imposter.id.clone(),
        order,
        current_index: 0,
        reveal_open: false,
        completed: false,
    })
}

/// Open the current player's reveal. Idempotent.
pub fn reveal_current(round: &mut Round) -> GameResult<()> {
    if round.completed {
        return Err(GameError::RoundCompleted);
    }
    round.reveal_open = true;
    Ok(())
}

/// Hand the phone to the next player, or finish after the last one
pub fn advance(round: &mut Round) -> GameResult<()> {
    if round.completed {
        return Err(GameError::RoundCompleted);
    }

    if round.is_last_turn() {
        round.completed = true;
    } else {
        round.current_index += 1;
    }
    round.reveal_open = false;
    Ok(())
}

/// Whose turn it is, or `None` once the round is finished
pub fn current_player_id(round: &Round) -> Option<&PlayerId> {
    if round.completed {
        return None;
    }
    round.order.get(round.current_index)
}

pub fn is_imposter(round: &Round, player_id: &str) -> bool {
    round.imposter_id == player_id
}

/// The role a given player sees.
///
/// This does not check whose turn it is; the per-turn restriction lives in
/// the state layer so the end-of-round reveal can reuse it.
pub fn revealed_word_for(round: &Round, player_id: &str) -> Role {
    if is_imposter(round, player_id) {
        Role::Imposter
    } else {
        Role::Word(round.word.clone())
    }
}

/// Every player's role in turn order, for the end-of-round reveal
pub fn final_roles(round: &Round, setup: &SetupState) -> GameResult<Vec<FinalRole>> {
    if !round.completed {
        return Err(GameError::RoundNotCompleted);
    }
    Ok(round
        .order
        .iter()
        .map(|id| FinalRole {
            player: PlayerCard::lookup(setup, id),
            role: revealed_word_for(round, id),
        })
        .collect())
}
