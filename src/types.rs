use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque ID types
pub type PlayerId = String;
pub type CategoryId = String;
pub type RoundId = String;

/// Sentinel shown to the impostor instead of the secret word
pub const IMPOSTER_SENTINEL: &str = "IMPOSTER";

/// Minimum number of active players needed to start a round
pub const MIN_ACTIVE_PLAYERS: usize = 3;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub emoji: String,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub emoji: String,
    pub selected: bool,
    pub words: Vec<String>,
}

impl Category {
    /// A category can be drawn from only when it is selected and has words
    pub fn is_eligible(&self) -> bool {
        self.selected && !self.words.is_empty()
    }
}

/// The persisted unit: the roster plus the word categories.
///
/// Field names are the on-disk format. Unknown fields are ignored on load,
/// missing ones make the blob invalid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SetupState {
    pub players: Vec<Player>,
    pub categories: Vec<Category>,
}

impl SetupState {
    pub fn active_players(&self) -> Vec<Player> {
        self.players.iter().filter(|p| p.active).cloned().collect()
    }

    pub fn eligible_categories(&self) -> Vec<Category> {
        self.categories
            .iter()
            .filter(|c| c.is_eligible())
            .cloned()
            .collect()
    }

    pub fn find_player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn find_category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Counts shown on the round checklist
    pub fn eligibility(&self) -> EligibilitySummary {
        let active_players = self.players.iter().filter(|p| p.active).count();
        let eligible: Vec<&Category> = self.categories.iter().filter(|c| c.is_eligible()).collect();

        EligibilitySummary {
            active_players,
            total_players: self.players.len(),
            selected_categories: self.categories.iter().filter(|c| c.selected).count(),
            total_categories: self.categories.len(),
            eligible_categories: eligible.len(),
            words_available: eligible.iter().map(|c| c.words.len()).sum(),
            total_words: self.categories.iter().map(|c| c.words.len()).sum(),
            can_start: active_players >= MIN_ACTIVE_PLAYERS && !eligible.is_empty(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EligibilitySummary {
    pub active_players: usize,
    pub total_players: usize,
    pub selected_categories: usize,
    pub total_categories: usize,
    pub eligible_categories: usize,
    pub words_available: usize,
    pub total_words: usize,
    pub can_start: bool,
}

/// One pass-the-phone cycle. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Round {
    pub id: RoundId,
    pub category_id: CategoryId,
    // Snapshotted at creation so later category edits don't leak in
    pub category_name: String,
    pub category_emoji: String,
    pub word: String,
    pub imposter_id: PlayerId,
    pub order: Vec<PlayerId>,
    pub current_index: usize,
    pub reveal_open: bool,
    pub completed: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum RoundPhase {
    InProgress { index: usize, reveal_open: bool },
    Completed,
}

impl Round {
    pub fn phase(&self) -> RoundPhase {
        if self.completed {
            RoundPhase::Completed
        } else {
            RoundPhase::InProgress {
                index: self.current_index,
                reveal_open: self.reveal_open,
            }
        }
    }

    pub fn is_last_turn(&self) -> bool {
        self.current_index + 1 >= self.order.len()
    }
}

/// What a single player sees when they reveal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "word", rename_all = "lowercase")]
pub enum Role {
    Imposter,
    Word(String),
}

impl Role {
    pub fn is_imposter(&self) -> bool {
        matches!(self, Role::Imposter)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Imposter => f.write_str(IMPOSTER_SENTINEL),
            Role::Word(word) => f.write_str(word),
        }
    }
}

/// Name and emoji of a player as displayed during a round.
/// Falls back to a placeholder when the player was removed mid-round.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerCard {
    pub id: PlayerId,
    pub name: String,
    pub emoji: String,
}

pub const UNKNOWN_PLAYER_NAME: &str = "Player";
pub const UNKNOWN_PLAYER_EMOJI: &str = "❓";

impl PlayerCard {
    pub fn lookup(setup: &SetupState, id: &str) -> Self {
        match setup.find_player(id) {
            Some(p) => Self {
                id: p.id.clone(),
                name: p.name.clone(),
                emoji: p.emoji.clone(),
            },
            None => Self {
                id: id.to_string(),
                name: UNKNOWN_PLAYER_NAME.to_string(),
                emoji: UNKNOWN_PLAYER_EMOJI.to_string(),
            },
        }
    }
}

/// The current player's turn. `role` is only filled while their reveal is open.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TurnView {
    pub round_id: RoundId,
    pub position: usize,
    pub total: usize,
    pub player: PlayerCard,
    pub category_name: String,
    pub category_emoji: String,
    pub reveal_open: bool,
    pub is_last_turn: bool,
    pub role: Option<Role>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FinalRole {
    pub player: PlayerCard,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompletedView {
    pub round_id: RoundId,
    pub category_name: String,
    pub category_emoji: String,
    pub roles_shown: bool,
    pub roles: Option<Vec<FinalRole>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RoundView {
    Idle,
    InProgress(TurnView),
    Completed(CompletedView),
}
